// ABOUTME: Advice command for calorie-cli
// ABOUTME: Prints the static wellness tip catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_insight::{advice::ADVICE_TIPS, errors::AppResult};

use crate::helpers::display::print_json;

/// Print every tip
pub fn run(json: bool) -> AppResult<bool> {
    if json {
        print_json(&ADVICE_TIPS)?;
        return Ok(true);
    }

    println!("\nWellness Advice");
    println!("{}", "=".repeat(60));
    for (index, tip) in ADVICE_TIPS.iter().enumerate() {
        println!("{:>2}. {}", index + 1, tip.title);
        println!("    {}", tip.description);
    }
    Ok(true)
}
