// ABOUTME: Scoring and recommendation engine re-exported from guardian-intelligence
// ABOUTME: Gives the CLI and tests one import path for scoring, risk models, and guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

pub use guardian_intelligence::*;
