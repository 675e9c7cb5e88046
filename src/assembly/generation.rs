//! Generation request payload
//!
//! Denormalized snapshot of a build, handed to the external item-text
//! generator once the user presses "generate".

use serde::{Deserialize, Serialize};

use super::token::{Locale, Token, TokenCategory};
use super::tracker::BuildModifiers;
use crate::balance::RarityTier;
use crate::data::catalog::{ArmorDef, WeaponDef};

/// Stats record behind a base token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseRecord {
    Weapon(WeaponDef),
    Armor(ArmorDef),
}

/// Base item record tagged with its category (weapon, armor or shield)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseItemData {
    pub category: TokenCategory,
    #[serde(flatten)]
    pub record: BaseRecord,
}

/// Extra elemental damage: present only when both dice and element are chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfo {
    pub dice: Option<String>,
    /// Localized element name
    pub element: Option<String>,
    pub element_id: String,
    pub icon: Option<String>,
}

/// Ability reference without its planning cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRef {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl From<&Token> for AbilityRef {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id.clone(),
            name: token.name.clone(),
            icon: token.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationData {
    pub base: Option<BaseItemData>,
    pub base_token: Option<Token>,
    pub rarity: RarityTier,
    pub enchantment_bonus: u8,
    pub element: Option<ElementInfo>,
    pub abilities: Vec<AbilityRef>,
    pub modifiers: BuildModifiers,
    pub item_name: String,
    pub flavor_text: String,
    pub total_cost: u32,
    pub locale: Locale,
}

impl GenerationData {
    /// "+N" for enchanted builds, empty otherwise
    pub fn bonus_label(&self) -> String {
        if self.enchantment_bonus > 0 {
            format!("+{}", self.enchantment_bonus)
        } else {
            String::new()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Rarity implied by an enchantment token id. Unknown ids read as Uncommon.
pub fn rarity_for_enchantment(id: Option<&str>) -> RarityTier {
    match id {
        Some("moonTouched") => RarityTier::Common,
        Some("plus1") => RarityTier::Uncommon,
        Some("plus2") => RarityTier::Rare,
        Some("plus3") => RarityTier::VeryRare,
        _ => RarityTier::Uncommon,
    }
}

/// Numeric bonus implied by an enchantment token id
pub fn bonus_for_enchantment(id: Option<&str>) -> u8 {
    match id {
        Some("plus3") => 3,
        Some("plus2") => 2,
        Some("plus1") => 1,
        _ => 0,
    }
}
