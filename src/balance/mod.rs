//! Balance rules engine
//!
//! Rarity standards, post-generation validation, and gold estimation.

pub mod rarity;
pub mod validator;
pub mod pricing;

pub use rarity::{
    normalize_rarity, extract_bonus, parse_leading_int, official_standards,
    RarityTier, RarityStandard, RarityPolicy, GoldRange, FuzzyRule, FUZZY_RULES,
};
pub use validator::{
    validate_item_balance, has_extra_damage,
    Item, NumericField, ComplexityMode, ValidationOptions, ValidationResult,
};
pub use pricing::{
    generate_balanced_gold, get_balance_rating, roll_gold_price, round_to_nice_price,
    PowerLevel, BalanceRating, DEFAULT_GOLD,
};
