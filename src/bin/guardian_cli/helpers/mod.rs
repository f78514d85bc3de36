// ABOUTME: Helper modules for guardian-cli
// ABOUTME: Provides text and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

pub mod display;
