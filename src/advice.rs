// ABOUTME: Static catalogue of general wellness tips shown next to the estimator
// ABOUTME: Plain data with no service dependency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// One wellness tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceTip {
    /// Short headline
    pub title: &'static str,
    /// One-sentence explanation
    pub description: &'static str,
}

/// Every tip, in display order
pub const ADVICE_TIPS: [AdviceTip; 10] = [
    AdviceTip {
        title: "Stay Active",
        description: "Aim for at least 30 minutes of moderate exercise most days. Consistency is key!",
    },
    AdviceTip {
        title: "Eat Nutritious Foods",
        description: "Fill your plate with colorful fruits, veggies, lean proteins, and whole grains.",
    },
    AdviceTip {
        title: "Strength Train",
        description: "Incorporate resistance training 2-3 times a week to build muscle and boost metabolism.",
    },
    AdviceTip {
        title: "Prioritize Sleep",
        description: "Aim for 7-9 hours of quality sleep each night to support recovery and well-being.",
    },
    AdviceTip {
        title: "Manage Stress",
        description: "Practice mindfulness, deep breathing, or yoga to keep stress in check.",
    },
    AdviceTip {
        title: "Stay Hydrated",
        description: "Drink plenty of water throughout the day to keep your body functioning optimally.",
    },
    AdviceTip {
        title: "Mix Cardio & Fun",
        description: "Try different activities (dancing, hiking, cycling) to keep workouts enjoyable.",
    },
    AdviceTip {
        title: "Go Outdoors",
        description: "Spend time in nature for a mood and energy boost.",
    },
    AdviceTip {
        title: "Train Your Mind",
        description: "Mental fitness matters! Read, meditate, and challenge your brain regularly.",
    },
    AdviceTip {
        title: "Track Progress",
        description: "Celebrate small wins and track your journey to stay motivated.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<&str> = ADVICE_TIPS.iter().map(|tip| tip.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), ADVICE_TIPS.len());
    }
}
