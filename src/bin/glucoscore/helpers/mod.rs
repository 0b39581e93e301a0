// ABOUTME: Helper modules for glucoscore
// ABOUTME: Input loading and output formatting shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

pub mod display;
pub mod input;
