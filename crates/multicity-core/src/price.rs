// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::format::group_thousands;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Price estimate for reaching a stop, in roubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

fn thousands_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\s*000").unwrap())
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Reads a display label such as `"20 000 – 35 000 ₽"`.
    ///
    /// Takes the first two numbers written as `N 000` and treats them as
    /// thousands. Labels with fewer than two such numbers, or with an amount
    /// that does not fit in a `u64`, yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut amounts = thousands_pattern().captures_iter(label).map(|cap| {
            cap[1]
                .parse::<u64>()
                .ok()
                .and_then(|thousands| thousands.checked_mul(1000))
        });

        let min = amounts.next()??;
        let max = amounts.next()??;
        Some(Self::new(min, max))
    }

    pub fn midpoint(&self) -> u64 {
        self.min / 2 + self.max / 2 + (self.min % 2 + self.max % 2) / 2
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {} ₽",
            group_thousands(self.min),
            group_thousands(self.max)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_seed_labels() {
        let dubai = PriceRange::from_label("20 000 – 35 000 ₽").unwrap();
        assert_eq!(dubai, PriceRange::new(20_000, 35_000));
        assert_eq!(dubai.midpoint(), 27_500);

        let moscow = PriceRange::from_label("18 000 – 28 000 ₽").unwrap();
        assert_eq!(moscow.midpoint(), 23_000);
    }

    #[test]
    fn test_unspaced_thousands_match() {
        let range = PriceRange::from_label("15000-30000").unwrap();
        assert_eq!(range, PriceRange::new(15_000, 30_000));
    }

    #[test]
    fn test_single_amount_is_not_a_range() {
        assert_eq!(PriceRange::from_label("от 20 000 ₽"), None);
        assert_eq!(PriceRange::from_label("—"), None);
        assert_eq!(PriceRange::from_label("cheap"), None);
    }

    #[test]
    fn test_only_first_two_amounts_count() {
        let range = PriceRange::from_label("10 000 – 20 000 ₽ (до 90 000 ₽)").unwrap();
        assert_eq!(range, PriceRange::new(10_000, 20_000));
    }

    #[test]
    fn test_oversized_amount_is_unreadable() {
        assert_eq!(
            PriceRange::from_label("99999999999999999 000 – 99999999999999999 000 ₽"),
            None
        );
        assert_eq!(
            PriceRange::from_label("18446744073709552 000 – 20 000 ₽"),
            None
        );
    }

    #[test]
    fn test_midpoint_of_extreme_range() {
        assert_eq!(PriceRange::new(u64::MAX, u64::MAX).midpoint(), u64::MAX);
        assert_eq!(PriceRange::new(1, 2).midpoint(), 1);
        assert_eq!(PriceRange::new(15_000, 30_000).midpoint(), 22_500);
    }

    #[test]
    fn test_display_groups_digits() {
        assert_eq!(
            PriceRange::new(15_000, 130_000).to_string(),
            "15 000 – 130 000 ₽"
        );
    }
}
