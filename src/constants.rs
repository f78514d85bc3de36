// ABOUTME: Physiological defaults and storage constants re-exported from guardian-core
// ABOUTME: Single source for default vitals, hydration servings, and table names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

pub use guardian_core::constants::*;
