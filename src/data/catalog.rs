//! Token catalog
//!
//! Read-only records for every component the assembly table offers. Loaded
//! from `catalog.ron` or built from the hardcoded defaults, then shared by
//! any number of builds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assembly::generation::{BaseItemData, BaseRecord};
use crate::assembly::token::{Locale, Token, TokenCategory, TokenType};
use crate::balance::RarityTier;

/// Base weapon record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDef {
    pub name_he: String,
    pub name_en: String,
    pub damage: String,
    pub damage_type: String,
    #[serde(default)]
    pub damage_type_he: String,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default)]
    pub base_price: f64,
    pub icon: String,
    #[serde(default)]
    pub cost: u32,
}

/// Base armor or shield record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorDef {
    pub name_he: String,
    pub name_en: String,
    pub ac: i64,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub cost: u32,
}

/// Wondrous item shell (ring, cloak, wand...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WondrousDef {
    pub name_he: String,
    pub name_en: String,
    pub icon: String,
    #[serde(default)]
    pub cost: u32,
}

/// A named group of base items (e.g. "Heavy Armor")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseGroup<T> {
    pub name_he: String,
    pub name_en: String,
    pub icon: String,
    pub items: IndexMap<String, T>,
}

fn default_element_cost() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDef {
    pub name_he: String,
    pub name_en: String,
    pub icon: String,
    #[serde(default = "default_element_cost")]
    pub cost: u32,
    #[serde(default)]
    pub premium: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceDef {
    /// Dice notation, e.g. "1d6"
    pub dice: String,
    pub name_he: String,
    pub name_en: String,
    pub cost: u32,
}

/// Enchantment tier (+0 moon-touched up to +3)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnchantmentDef {
    pub name_he: String,
    pub name_en: String,
    pub bonus: u8,
    pub rarity: RarityTier,
    pub icon: String,
    pub cost: u32,
}

/// Special ability or embeddable spell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityDef {
    pub name_he: String,
    pub name_en: String,
    pub icon: String,
    pub cost: u32,
    #[serde(default)]
    pub description: String,
}

/// Everything the assembly table can offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Keyed by subcategory: "melee", "ranged"
    pub weapons: IndexMap<String, BaseGroup<WeaponDef>>,
    /// Keyed by subcategory: "light", "medium", "heavy", "shield"
    pub armor: IndexMap<String, BaseGroup<ArmorDef>>,
    /// Keyed by subcategory: "jewelry", "held", "worn"
    pub wondrous: IndexMap<String, BaseGroup<WondrousDef>>,
    pub elements: IndexMap<String, ElementDef>,
    pub damage_dice: IndexMap<String, DiceDef>,
    pub enchantments: IndexMap<String, EnchantmentDef>,
    pub abilities: IndexMap<String, AbilityDef>,
    pub spells: IndexMap<String, AbilityDef>,
}

/// Subcategories whose items can hold an embedded spell
const SPELL_SUBCATEGORIES: &[&str] = &["jewelry", "held"];

const SHIELD_SUBCATEGORY: &str = "shield";

const DICE_ICON: &str = "🎲";

const SPELL_ICON: &str = "📜";

/// Project one catalog record onto a token
fn token(
    id: &str,
    token_type: TokenType,
    category: TokenCategory,
    name: &str,
    icon: &str,
    cost: u32,
) -> Token {
    Token::new(id, token_type, category, name, icon, cost)
}

impl Catalog {
    /// Base item tokens for a subcategory; empty if the catalog has none
    pub fn base_tokens(&self, subcategory: &str, locale: Locale) -> Vec<Token> {
        if let Some(group) = self.weapons.get(subcategory) {
            return group
                .items
                .iter()
                .map(|(id, w)| {
                    let name = locale.pick(&w.name_he, &w.name_en);
                    token(id, TokenType::Base, TokenCategory::Weapon, name, &w.icon, w.cost)
                })
                .collect();
        }

        if let Some(group) = self.armor.get(subcategory) {
            let category = if subcategory == SHIELD_SUBCATEGORY {
                TokenCategory::Shield
            } else {
                TokenCategory::Armor
            };
            return group
                .items
                .iter()
                .map(|(id, a)| {
                    let name = locale.pick(&a.name_he, &a.name_en);
                    token(id, TokenType::Base, category, name, &a.icon, a.cost)
                })
                .collect();
        }

        if let Some(group) = self.wondrous.get(subcategory) {
            return group
                .items
                .iter()
                .map(|(id, w)| {
                    let name = locale.pick(&w.name_he, &w.name_en);
                    token(id, TokenType::Base, TokenCategory::Wondrous, name, &w.icon, w.cost)
                })
                .collect();
        }

        Vec::new()
    }

    /// Element tokens followed by damage dice tokens
    pub fn element_tokens(&self, locale: Locale) -> Vec<Token> {
        let elements = self.elements.iter().map(|(id, e)| {
            let name = locale.pick(&e.name_he, &e.name_en);
            token(id, TokenType::Element, TokenCategory::Essence, name, &e.icon, e.cost)
        });
        let dice = self.damage_dice.iter().map(|(id, d)| {
            token(id, TokenType::DamageDice, TokenCategory::Dice, &d.dice, DICE_ICON, d.cost)
        });
        elements.chain(dice).collect()
    }

    pub fn rarity_tokens(&self, locale: Locale) -> Vec<Token> {
        self.enchantments
            .iter()
            .map(|(id, t)| {
                let name = locale.pick(&t.name_he, &t.name_en);
                token(id, TokenType::Rarity, TokenCategory::Enchantment, name, &t.icon, t.cost)
            })
            .collect()
    }

    /// Ability tokens; jewelry and held items also get embeddable spells
    pub fn ability_tokens(&self, subcategory: &str, locale: Locale) -> Vec<Token> {
        let mut tokens: Vec<Token> = self
            .abilities
            .iter()
            .map(|(id, a)| {
                let name = locale.pick(&a.name_he, &a.name_en);
                token(id, TokenType::Ability, TokenCategory::Feature, name, &a.icon, a.cost)
            })
            .collect();

        if SPELL_SUBCATEGORIES.contains(&subcategory) {
            tokens.extend(self.spells.iter().map(|(id, s)| {
                let name = locale.pick(&s.name_he, &s.name_en);
                token(id, TokenType::Ability, TokenCategory::Spell, name, SPELL_ICON, s.cost)
            }));
        }

        tokens
    }

    /// Full record of a base token, searched across all groups of its category.
    /// Only weapons, armor and shields carry stats.
    pub fn base_item(&self, token: &Token) -> Option<BaseItemData> {
        match token.category {
            TokenCategory::Weapon => self
                .weapons
                .values()
                .find_map(|group| group.items.get(&token.id))
                .map(|w| BaseItemData {
                    category: TokenCategory::Weapon,
                    record: BaseRecord::Weapon(w.clone()),
                }),
            TokenCategory::Armor | TokenCategory::Shield => self
                .armor
                .values()
                .find_map(|group| group.items.get(&token.id))
                .map(|a| BaseItemData {
                    category: token.category,
                    record: BaseRecord::Armor(a.clone()),
                }),
            _ => None,
        }
    }

    pub fn element(&self, id: &str) -> Option<&ElementDef> {
        self.elements.get(id)
    }

    pub fn dice(&self, id: &str) -> Option<&DiceDef> {
        self.damage_dice.get(id)
    }
}
