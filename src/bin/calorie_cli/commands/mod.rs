// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for calorie-cli
// ABOUTME: Provides the predict, stats and advice commands

pub mod advice;
pub mod predict;
pub mod stats;
