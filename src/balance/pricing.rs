//! Gold estimation and balance rating

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rarity::{normalize_rarity, RarityPolicy, OFFICIAL_POLICY};
use super::validator::{validate_item_balance, Item, ValidationOptions};

/// Fallback price when a rarity has no standards
pub const DEFAULT_GOLD: i64 = 100;

/// Where inside a tier's gold band an item should sit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl PowerLevel {
    /// Fraction of the gold band
    pub fn fraction(&self) -> f64 {
        match self {
            PowerLevel::Low => 0.2,
            PowerLevel::Medium => 0.5,
            PowerLevel::High => 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceRating {
    Balanced,
    Overpowered,
    Underpowered,
}

impl BalanceRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceRating::Balanced => "balanced",
            BalanceRating::Overpowered => "overpowered",
            BalanceRating::Underpowered => "underpowered",
        }
    }
}

impl RarityPolicy {
    /// Balanced gold price for a rarity and power level.
    ///
    /// Open-ended tiers (Artifact) are priced from their floor: `min * (1 + p)`.
    pub fn balanced_gold(&self, rarity: &str, power: PowerLevel) -> i64 {
        let tier = normalize_rarity(rarity);
        let Some(standards) = self.standard(tier) else {
            return DEFAULT_GOLD;
        };

        let min = standards.gold_range.min as f64;
        let p = power.fraction();
        let price = match standards.gold_range.max {
            Some(max) => min + (max as f64 - min) * p,
            None => min * (1.0 + p),
        };
        price.floor() as i64
    }
}

/// Balanced gold price using the official standards
pub fn generate_balanced_gold(rarity: &str, power: PowerLevel) -> i64 {
    OFFICIAL_POLICY.balanced_gold(rarity, power)
}

/// Classify an item from its validation issues.
///
/// Issue wording decides: "too high"/"exceeds" is overpowered, "too low" is
/// underpowered. Anything else (the extra-dice rule) rates as balanced.
pub fn get_balance_rating(item: &Item) -> BalanceRating {
    let result = validate_item_balance(item, ValidationOptions::report_only());
    if result.is_valid {
        return BalanceRating::Balanced;
    }

    let overpowered = result
        .issues
        .iter()
        .any(|i| i.contains("too high") || i.contains("exceeds"));
    let underpowered = result.issues.iter().any(|i| i.contains("too low"));

    if overpowered {
        BalanceRating::Overpowered
    } else if underpowered {
        BalanceRating::Underpowered
    } else {
        BalanceRating::Balanced
    }
}

/// Round a price to a value that reads well on a card (no ones digit above 100)
pub fn round_to_nice_price(price: f64) -> i64 {
    let step = if price < 100.0 {
        5.0
    } else if price < 1_000.0 {
        10.0
    } else if price < 10_000.0 {
        50.0
    } else {
        100.0
    };
    ((price / step).round() * step) as i64
}

impl RarityPolicy {
    /// Shop price: balanced gold with +/-20% variance, rounded to a nice
    /// number and never under the tier's gold floor.
    pub fn roll_gold(&self, rarity: &str, power: PowerLevel, rng: &mut impl Rng) -> i64 {
        let base = self.balanced_gold(rarity, power) as f64;
        let variance = rng.gen_range(0.8..=1.2);
        let price = round_to_nice_price(base * variance);

        let floor = self
            .standard(normalize_rarity(rarity))
            .map(|s| s.gold_range.min)
            .unwrap_or(0);
        price.max(floor)
    }
}

/// Rolled shop price using the official standards
pub fn roll_gold_price(rarity: &str, power: PowerLevel, rng: &mut impl Rng) -> i64 {
    OFFICIAL_POLICY.roll_gold(rarity, power, rng)
}
