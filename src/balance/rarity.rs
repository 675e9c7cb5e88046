//! Rarity tiers and power standards
//!
//! Official magic item rarity limits (gold, bonus, spell level, extra dice)
//! and the normalization of free-text rarity strings onto a tier.

use std::sync::LazyLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Canonical rarity tiers, in ascending power order.
///
/// Serialized as the canonical key string ("Very Rare").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    Artifact,
}

impl RarityTier {
    /// All tiers in canonical order
    pub const ALL: [RarityTier; 6] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::VeryRare,
        RarityTier::Legendary,
        RarityTier::Artifact,
    ];

    /// Canonical English key
    pub fn name(&self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::VeryRare => "Very Rare",
            RarityTier::Legendary => "Legendary",
            RarityTier::Artifact => "Artifact",
        }
    }

    /// Hebrew display name
    pub fn localized_name(&self) -> &'static str {
        match self {
            RarityTier::Common => "נפוץ",
            RarityTier::Uncommon => "לא נפוץ",
            RarityTier::Rare => "נדיר",
            RarityTier::VeryRare => "נדיר מאוד",
            RarityTier::Legendary => "אגדי",
            RarityTier::Artifact => "ארטיפקט",
        }
    }

    /// Position in the canonical order (Common = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The next tier up, if any
    pub fn next(&self) -> Option<RarityTier> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Exact match against the canonical English keys
    pub fn from_canonical(raw: &str) -> Option<RarityTier> {
        Self::ALL.iter().copied().find(|t| t.name() == raw)
    }

    /// Exact match against the localized names
    pub fn from_localized(raw: &str) -> Option<RarityTier> {
        Self::ALL.iter().copied().find(|t| t.localized_name() == raw)
    }
}

impl std::fmt::Display for RarityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for RarityTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RarityTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RarityTier::from_canonical(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown rarity tier: {}", raw)))
    }
}

/// Gold value band for a tier. `max` is `None` for an open-ended ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldRange {
    pub min: i64,
    pub max: Option<i64>,
}

/// Power limits for one rarity tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityStandard {
    pub tier: RarityTier,
    /// Highest +N weapon/armor bonus
    pub max_bonus: i64,
    /// Highest embedded spell level
    pub max_spell_level: u8,
    pub gold_range: GoldRange,
    pub max_extra_damage_dice: u8,
    pub display_name: String,
}

impl RarityStandard {
    fn official(
        tier: RarityTier,
        max_bonus: i64,
        max_spell_level: u8,
        gold_range: GoldRange,
        max_extra_damage_dice: u8,
    ) -> Self {
        Self {
            tier,
            max_bonus,
            max_spell_level,
            gold_range,
            max_extra_damage_dice,
            display_name: tier.localized_name().to_string(),
        }
    }

    /// Check whether a gold value falls inside this tier's band
    pub fn contains_gold(&self, gold: i64) -> bool {
        gold >= self.gold_range.min && self.gold_range.max.map_or(true, |max| gold <= max)
    }
}

fn gold(min: i64, max: Option<i64>) -> GoldRange {
    GoldRange { min, max }
}

/// Official rarity standards (DMG guidelines)
pub fn official_standards() -> Vec<RarityStandard> {
    vec![
        // Cantrips only or no spells
        RarityStandard::official(RarityTier::Common, 0, 0, gold(50, Some(100)), 0),
        RarityStandard::official(RarityTier::Uncommon, 1, 2, gold(100, Some(500)), 1),
        RarityStandard::official(RarityTier::Rare, 2, 4, gold(500, Some(5_000)), 2),
        RarityStandard::official(RarityTier::VeryRare, 3, 6, gold(5_000, Some(50_000)), 3),
        RarityStandard::official(RarityTier::Legendary, 4, 8, gold(50_000, Some(200_000)), 4),
        RarityStandard::official(RarityTier::Artifact, 5, 9, gold(100_000, None), 6),
    ]
}

/// A table of rarity standards. Defaults to the official table; can be
/// replaced by data loaded from `rarity_standards.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityPolicy {
    pub standards: Vec<RarityStandard>,
}

impl Default for RarityPolicy {
    fn default() -> Self {
        Self {
            standards: official_standards(),
        }
    }
}

impl RarityPolicy {
    pub fn new(standards: Vec<RarityStandard>) -> Self {
        Self { standards }
    }

    /// Standards for a tier, if this policy defines it
    pub fn standard(&self, tier: RarityTier) -> Option<&RarityStandard> {
        self.standards.iter().find(|s| s.tier == tier)
    }
}

/// Shared official policy used by the free functions
pub(crate) static OFFICIAL_POLICY: LazyLock<RarityPolicy> = LazyLock::new(RarityPolicy::default);

/// One fuzzy normalization step: matches when any needle is present and no
/// excluded word is.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyRule {
    pub any_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
    pub tier: RarityTier,
}

const fn rule(
    any_of: &'static [&'static str],
    none_of: &'static [&'static str],
    tier: RarityTier,
) -> FuzzyRule {
    FuzzyRule { any_of, none_of, tier }
}

impl FuzzyRule {
    fn matches(&self, lower: &str) -> bool {
        self.any_of.iter().any(|n| lower.contains(n))
            && !self.none_of.iter().any(|n| lower.contains(n))
    }
}

/// Fuzzy rules, evaluated top to bottom. "common" is skipped when
/// "uncommon" is present, and "very rare" must precede "rare".
pub const FUZZY_RULES: &[FuzzyRule] = &[
    rule(&["common"], &["uncommon"], RarityTier::Common),
    rule(&["uncommon"], &[], RarityTier::Uncommon),
    rule(&["very rare", "נדיר מאוד"], &[], RarityTier::VeryRare),
    rule(&["rare", "נדיר"], &[], RarityTier::Rare),
    rule(&["legendary", "אגדי"], &[], RarityTier::Legendary),
    rule(&["artifact", "ארטיפקט"], &[], RarityTier::Artifact),
];

/// Map any rarity string (English, Hebrew, or fuzzy) to a canonical tier.
///
/// Order: exact English key, exact localized name, [`FUZZY_RULES`], then
/// `Common` as the fallback.
pub fn normalize_rarity(raw: &str) -> RarityTier {
    if raw.is_empty() {
        return RarityTier::Common;
    }

    if let Some(tier) = RarityTier::from_canonical(raw) {
        return tier;
    }

    if let Some(tier) = RarityTier::from_localized(raw) {
        return tier;
    }

    let lower = raw.to_lowercase();
    FUZZY_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.tier)
        .unwrap_or(RarityTier::Common)
}

static BONUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+(\d+)").expect("bonus pattern is valid")
});

/// First `+N` in a weapon damage string, e.g. `"1d8+2 slashing"` gives 2
pub fn extract_bonus(weapon_damage: Option<&str>) -> i64 {
    let Some(text) = weapon_damage else {
        return 0;
    };

    BONUS_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Lenient integer parse: leading whitespace, optional sign, then digits.
/// Trailing text is ignored (`"18 (plate)"` gives 18). `None` when no digits lead.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_exact() {
        assert_eq!(normalize_rarity("Very Rare"), RarityTier::VeryRare);
        assert_eq!(normalize_rarity("Artifact"), RarityTier::Artifact);
        assert_eq!(normalize_rarity("אגדי"), RarityTier::Legendary);
        assert_eq!(normalize_rarity("לא נפוץ"), RarityTier::Uncommon);
    }

    #[test]
    fn test_normalize_very_rare_before_rare() {
        assert_eq!(normalize_rarity("נדיר מאוד"), RarityTier::VeryRare);
        assert_eq!(normalize_rarity("נדיר"), RarityTier::Rare);
        assert_eq!(normalize_rarity("very rare (requires attunement)"), RarityTier::VeryRare);
        assert_eq!(normalize_rarity("RARE"), RarityTier::Rare);
    }

    #[test]
    fn test_normalize_uncommon_not_common() {
        assert_eq!(normalize_rarity("uncommon"), RarityTier::Uncommon);
        assert_eq!(normalize_rarity("Common-ish"), RarityTier::Common);
        assert_eq!(normalize_rarity("UNCOMMON wondrous item"), RarityTier::Uncommon);
    }

    #[test]
    fn test_normalize_fallback() {
        assert_eq!(normalize_rarity(""), RarityTier::Common);
        assert_eq!(normalize_rarity("mythic"), RarityTier::Common);
    }

    #[test]
    fn test_extract_bonus() {
        assert_eq!(extract_bonus(Some("1d8+2 slashing")), 2);
        assert_eq!(extract_bonus(Some("1d8 slashing")), 0);
        assert_eq!(extract_bonus(Some("")), 0);
        assert_eq!(extract_bonus(None), 0);
        assert_eq!(extract_bonus(Some("2d6 + 1d4, +3 to hit")), 3);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("18 (plate)"), Some(18));
        assert_eq!(parse_leading_int("-5gp"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_standards_monotonic() {
        let standards = official_standards();
        assert_eq!(standards.len(), RarityTier::ALL.len());
        for pair in standards.windows(2) {
            assert!(pair[0].tier < pair[1].tier);
            assert!(pair[0].gold_range.min <= pair[1].gold_range.min);
            assert!(pair[0].max_bonus <= pair[1].max_bonus);
            match (pair[0].gold_range.max, pair[1].gold_range.max) {
                (Some(a), Some(b)) => assert!(a <= b),
                (Some(_), None) => {}
                (None, _) => panic!("only the last tier may be open-ended"),
            }
        }
    }

    #[test]
    fn test_tier_order_helpers() {
        assert_eq!(RarityTier::Common.next(), Some(RarityTier::Uncommon));
        assert_eq!(RarityTier::Artifact.next(), None);
        assert_eq!(RarityTier::VeryRare.index(), 3);
        assert_eq!(RarityTier::VeryRare.to_string(), "Very Rare");
    }

    #[test]
    fn test_tier_serializes_as_key() {
        assert_eq!(serde_json::to_string(&RarityTier::VeryRare).unwrap(), "\"Very Rare\"");
        let tier: RarityTier = serde_json::from_str("\"Legendary\"").unwrap();
        assert_eq!(tier, RarityTier::Legendary);
        assert!(serde_json::from_str::<RarityTier>("\"Mythic\"").is_err());
    }

    #[test]
    fn test_contains_gold() {
        let policy = RarityPolicy::default();
        let rare = policy.standard(RarityTier::Rare).unwrap();
        assert!(rare.contains_gold(500));
        assert!(!rare.contains_gold(5_001));
        let artifact = policy.standard(RarityTier::Artifact).unwrap();
        assert!(artifact.contains_gold(10_000_000));
    }
}
