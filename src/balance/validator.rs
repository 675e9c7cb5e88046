//! Post-generation balance validation
//!
//! Checks an AI-produced item against its rarity standards and, when asked,
//! returns a corrected copy. Validation never fails: malformed fields are
//! treated as absent or zero.

use std::sync::LazyLock;

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::rarity::{
    extract_bonus, normalize_rarity, parse_leading_int, RarityPolicy, RarityStandard, RarityTier,
    OFFICIAL_POLICY,
};

/// A numeric field as the generator may send it: a number or a string.
/// Anything else (booleans, objects, arrays) is kept as-is and reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl NumericField {
    /// Integer value, truncating floats and reading the leading digits of text
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NumericField::Integer(v) => Some(*v),
            NumericField::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            NumericField::Float(_) => None,
            NumericField::Text(s) => parse_leading_int(s),
            NumericField::Other(_) => None,
        }
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        NumericField::Integer(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// Candidate item produced by the external generator.
///
/// Only the fields the balance rules read are typed; everything else the
/// generator sent is kept in `extra` so a fixed item is a full copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    /// Localized rarity; takes precedence over `rarity` when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity_he: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<NumericField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon_damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<NumericField>,
    #[serde(alias = "abilityDescription", skip_serializing_if = "Option::is_none")]
    pub ability_desc: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Item with only a rarity set
    pub fn with_rarity(rarity: &str) -> Self {
        Self {
            rarity: Some(rarity.to_string()),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Raw rarity text, preferring the localized field
    pub fn raw_rarity(&self) -> &str {
        self.rarity_he
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.rarity.as_deref())
            .unwrap_or("")
    }

    /// Gold as an integer; missing or non-numeric gold counts as 0
    pub fn gold_value(&self) -> i64 {
        self.gold.as_ref().and_then(NumericField::as_int).unwrap_or(0)
    }

    fn set_rarity(&mut self, tier: RarityTier) {
        self.rarity = Some(tier.name().to_string());
        self.rarity_he = Some(tier.localized_name().to_string());
    }

    /// Raise gold to `min` if below it. Never lowers gold.
    fn raise_gold_to(&mut self, min: i64) {
        if self.gold_value() < min {
            self.gold = Some(NumericField::Integer(min));
        }
    }
}

/// Generation complexity; `Simple` relaxes the bonus rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityMode {
    Simple,
    #[default]
    Creative,
    Mundane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    pub auto_fix: bool,
    pub mode: ComplexityMode,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            auto_fix: true,
            mode: ComplexityMode::Creative,
        }
    }
}

impl ValidationOptions {
    /// Report only, do not correct
    pub fn report_only() -> Self {
        Self {
            auto_fix: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Human-readable issues, in rule order
    pub issues: Vec<String>,
    /// Full copy of the item with corrections applied (when auto-fixing)
    pub fixed_item: Item,
    pub rarity: RarityTier,
    pub standards: Option<RarityStandard>,
}

/// Rarity a +N bonus intrinsically implies, with that tier's gold floor
fn rarity_for_bonus(bonus: i64) -> (RarityTier, i64) {
    match bonus {
        1 => (RarityTier::Uncommon, 200),
        2 => (RarityTier::Rare, 1_500),
        4 => (RarityTier::Legendary, 60_000),
        5 => (RarityTier::Artifact, 100_000),
        _ => (RarityTier::VeryRare, 10_000),
    }
}

/// Elemental extra-damage mentions. Either a dice token directly followed by
/// a damage word or element (Hebrew or English), "extra ... NdM", or
/// "להוסיף NdM".
static EXTRA_DAMAGE_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)\d+d\d+\s*(נזק|damage|אש|קור|ברק|חומצה|רעל|fire|cold|lightning|acid|poison)",
        r"(?i)extra.*\d+d\d+",
        r"(?i)להוסיף\s*\d+d\d+",
    ])
    .expect("extra damage patterns are valid")
});

/// Check whether an ability description grants extra damage dice
pub fn has_extra_damage(description: &str) -> bool {
    EXTRA_DAMAGE_PATTERNS.is_match(description)
}

impl RarityPolicy {
    /// Validate an item against this policy's standards
    pub fn validate(&self, item: &Item, options: ValidationOptions) -> ValidationResult {
        let ValidationOptions { auto_fix, mode } = options;
        let mut issues = Vec::new();
        let mut fixed_item = item.clone();

        let raw = item.raw_rarity();
        let rarity = normalize_rarity(raw);
        let Some(standards) = self.standard(rarity) else {
            log::debug!("No standards for rarity {:?}", raw);
            return ValidationResult {
                is_valid: false,
                issues: vec![format!("Unknown rarity: {}", raw)],
                fixed_item,
                rarity,
                standards: None,
            };
        };

        // Gold floor only. Expensive base items (plate armor) stay valid at low rarity.
        let gold = item.gold_value();
        if gold < standards.gold_range.min {
            issues.push(format!(
                "Gold too low for {}: {} < {}",
                rarity, gold, standards.gold_range.min
            ));
            if auto_fix {
                fixed_item.gold = Some(NumericField::Integer(standards.gold_range.min));
            }
        }

        // Weapon bonus: a +N weapon is intrinsically that rare, so upgrade the rarity
        let bonus = extract_bonus(item.weapon_damage.as_deref());
        let mut max_allowed_bonus = standards.max_bonus;
        if mode == ComplexityMode::Simple && rarity == RarityTier::Legendary {
            max_allowed_bonus = 4;
        }

        if bonus > max_allowed_bonus {
            issues.push(format!(
                "Bonus too high for {}: +{} > +{}",
                rarity, bonus, max_allowed_bonus
            ));
            if auto_fix {
                let (target, min_gold) = rarity_for_bonus(bonus);
                fixed_item.set_rarity(target);
                fixed_item.raise_gold_to(min_gold);
            }
        }

        // Armor class bonus: clamped rather than upgraded
        if mode != ComplexityMode::Simple {
            if let Some(ac_bonus) = item.armor_class.as_ref().and_then(NumericField::as_int) {
                if ac_bonus > max_allowed_bonus {
                    issues.push(format!(
                        "AC bonus too high for {}: +{} > +{}",
                        rarity, ac_bonus, max_allowed_bonus
                    ));
                    if auto_fix {
                        fixed_item.armor_class = Some(NumericField::Integer(max_allowed_bonus));
                    }
                }
            }
        }

        // Common items carry no extra elemental dice
        if rarity == RarityTier::Common {
            let extra_damage = item.ability_desc.as_deref().is_some_and(has_extra_damage);
            if extra_damage {
                issues.push(
                    "Common items cannot have extra damage dice - should be Uncommon or higher"
                        .to_string(),
                );
                // Overwrites any rule 2 upgrade; gold keeps the highest floor reached
                if auto_fix {
                    fixed_item.set_rarity(RarityTier::Uncommon);
                    if let Some(uncommon) = self.standard(RarityTier::Uncommon) {
                        fixed_item.raise_gold_to(uncommon.gold_range.min);
                    }
                }
            }
        }

        for issue in &issues {
            log::debug!("Balance issue ({}): {}", rarity, issue);
        }
        if auto_fix && fixed_item != *item {
            log::info!("Balance auto-fix applied: {} issue(s)", issues.len());
        }

        ValidationResult {
            is_valid: issues.is_empty(),
            issues,
            fixed_item,
            rarity,
            standards: Some(standards.clone()),
        }
    }
}

/// Validate an item against the official rarity standards
pub fn validate_item_balance(item: &Item, options: ValidationOptions) -> ValidationResult {
    OFFICIAL_POLICY.validate(item, options)
}
