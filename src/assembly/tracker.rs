//! Assembly budget tracker
//!
//! One in-progress item build on the assembly table. Every mutation ends with
//! a full cost recompute, so `total_cost` is always the sum of what is
//! currently socketed. The budget is advisory: nothing is ever rejected for
//! costing too much.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::generation::{
    bonus_for_enchantment, rarity_for_enchantment, BaseItemData, ElementInfo, GenerationData,
};
use super::token::{Locale, SocketType, Token, TokenType};
use crate::data::catalog::Catalog;

/// Budget when no rarity has been chosen
pub const DEFAULT_BUDGET: u32 = 8;

/// Extra points for an item that requires attunement
pub const ATTUNEMENT_BONUS: u32 = 2;

/// Extra points for a cursed item
pub const CURSED_BONUS: u32 = 1;

/// Base point budget for a rarity display name
pub fn base_budget_for(rarity: &str) -> u32 {
    match rarity {
        "Common" => 4,
        "Uncommon" => 6,
        "Rare" => 8,
        "Very Rare" => 12,
        "Legendary" => 16,
        _ => DEFAULT_BUDGET,
    }
}

/// Design modifiers that widen the budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildModifiers {
    pub attunement: bool,
    pub cursed: bool,
}

/// The sockets of one build plus its derived cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyBuild {
    pub base: Option<Token>,
    pub element: Option<Token>,
    pub damage_dice: Option<Token>,
    pub rarity: Option<Token>,
    /// Unique by id, in insertion order
    pub abilities: Vec<Token>,
    pub modifiers: BuildModifiers,
    pub total_cost: u32,
    pub max_budget: u32,
}

impl Default for AssemblyBuild {
    fn default() -> Self {
        Self {
            base: None,
            element: None,
            damage_dice: None,
            rarity: None,
            abilities: Vec::new(),
            modifiers: BuildModifiers::default(),
            total_cost: 0,
            max_budget: DEFAULT_BUDGET,
        }
    }
}

impl AssemblyBuild {
    /// Recompute `total_cost` from the sockets. The base item never counts.
    /// Saturates at `u32::MAX` for oversized catalog costs.
    fn recalculate_budget(&mut self) {
        let singles = [&self.rarity, &self.damage_dice, &self.element]
            .into_iter()
            .flatten()
            .map(|t| t.cost);
        let abilities = self.abilities.iter().map(|a| a.cost);

        self.total_cost = singles.chain(abilities).fold(0u32, u32::saturating_add);
        log::debug!("Build cost {}/{}", self.total_cost, self.max_budget);
    }
}

/// One line of the cost breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub cost: u32,
}

impl From<&Token> for BreakdownEntry {
    fn from(token: &Token) -> Self {
        Self {
            name: token.name.clone(),
            cost: token.cost,
        }
    }
}

/// Budget summary for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub total_cost: u32,
    pub max_budget: u32,
    /// Negative when over budget
    pub remaining: i64,
    pub percent_used: u32,
    pub within_budget: bool,
}

/// Tracks one build against a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct AssemblyBudgetTracker {
    catalog: Arc<Catalog>,
    build: AssemblyBuild,
}

impl AssemblyBudgetTracker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            build: AssemblyBuild::default(),
        }
    }

    /// Current build (read-only; mutate through the socket operations)
    pub fn build(&self) -> &AssemblyBuild {
        &self.build
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn total_cost(&self) -> u32 {
        self.build.total_cost
    }

    pub fn max_budget(&self) -> u32 {
        self.build.max_budget
    }

    pub fn modifiers(&self) -> BuildModifiers {
        self.build.modifiers
    }

    /// Empty every socket, clear modifiers, restore the default budget
    pub fn reset(&mut self) {
        self.build = AssemblyBuild::default();
        log::debug!("Build reset");
    }

    /// Put a token into a socket.
    ///
    /// Base and rarity replace their occupant. The element socket routes damage
    /// dice and element types to separate slots. Abilities append unless one
    /// with the same id is already present. Over-budget selections are kept.
    pub fn set_socket(&mut self, socket: SocketType, token: Token) {
        log::debug!("Socket {:?} <- {} ({} pts)", socket, token.id, token.cost);
        match socket {
            SocketType::Base => self.build.base = Some(token),
            SocketType::Element => {
                if token.token_type == TokenType::DamageDice {
                    self.build.damage_dice = Some(token);
                } else {
                    self.build.element = Some(token);
                }
            }
            SocketType::Rarity => self.build.rarity = Some(token),
            SocketType::Ability => {
                if self.build.abilities.iter().any(|a| a.id == token.id) {
                    log::debug!("Ability {} already socketed", token.id);
                } else {
                    self.build.abilities.push(token);
                }
            }
        }
        self.build.recalculate_budget();
    }

    /// Drop a token onto the table; it lands in the socket its type maps to
    pub fn drop_token(&mut self, token: Token) {
        let socket = SocketType::for_token(&token);
        self.set_socket(socket, token);
    }

    /// Empty a socket. The element socket clears both element and dice; the
    /// ability socket clears every ability.
    pub fn clear_socket(&mut self, socket: SocketType) {
        match socket {
            SocketType::Base => self.build.base = None,
            SocketType::Element => {
                self.build.element = None;
                self.build.damage_dice = None;
            }
            SocketType::Rarity => self.build.rarity = None,
            SocketType::Ability => self.build.abilities.clear(),
        }
        self.build.recalculate_budget();
    }

    /// Remove one ability by position; out-of-range indices do nothing
    pub fn remove_ability(&mut self, index: usize) {
        if index < self.build.abilities.len() {
            let removed = self.build.abilities.remove(index);
            log::debug!("Removed ability {}", removed.id);
        }
        self.build.recalculate_budget();
    }

    pub fn set_attunement(&mut self, attunement: bool) {
        self.build.modifiers.attunement = attunement;
    }

    pub fn set_cursed(&mut self, cursed: bool) {
        self.build.modifiers.cursed = cursed;
    }

    /// Derive the budget from a rarity display name plus the current modifiers
    pub fn update_max_budget(&mut self, rarity: &str) {
        let mut max = base_budget_for(rarity);
        if self.build.modifiers.attunement {
            max += ATTUNEMENT_BONUS;
        }
        if self.build.modifiers.cursed {
            max += CURSED_BONUS;
        }

        self.build.max_budget = max;
        self.build.recalculate_budget();
    }

    /// Whether adding `additional_cost` would stay within the budget
    pub fn can_afford(&self, additional_cost: u32) -> bool {
        self.build.total_cost.saturating_add(additional_cost) <= self.build.max_budget
    }

    /// Costs in display order: rarity, dice, element (if it costs anything),
    /// then abilities. Always sums to `total_cost`.
    pub fn breakdown(&self) -> Vec<BreakdownEntry> {
        let build = &self.build;
        let mut entries = Vec::new();

        if let Some(rarity) = &build.rarity {
            entries.push(BreakdownEntry::from(rarity));
        }
        if let Some(dice) = &build.damage_dice {
            entries.push(BreakdownEntry::from(dice));
        }
        if let Some(element) = build.element.as_ref().filter(|e| e.cost > 0) {
            entries.push(BreakdownEntry::from(element));
        }
        entries.extend(build.abilities.iter().map(BreakdownEntry::from));

        entries
    }

    pub fn budget_status(&self) -> BudgetStatus {
        let total = self.build.total_cost;
        let max = self.build.max_budget;
        let percent_used = if max > 0 {
            ((total as f64 / max as f64) * 100.0).round() as u32
        } else {
            0
        };

        BudgetStatus {
            total_cost: total,
            max_budget: max,
            remaining: max as i64 - total as i64,
            percent_used,
            within_budget: total <= max,
        }
    }

    /// A base is chosen and the build fits its budget
    pub fn can_generate(&self) -> bool {
        self.build.base.is_some() && self.can_afford(0)
    }

    /// Catalog record of the selected base item
    pub fn base_item_data(&self) -> Option<BaseItemData> {
        let base = self.build.base.as_ref()?;
        self.catalog.base_item(base)
    }

    /// Snapshot the build as a generation request
    pub fn generation_data(
        &self,
        item_name: &str,
        flavor_text: &str,
        locale: Locale,
    ) -> GenerationData {
        let build = &self.build;
        let rarity_id = build.rarity.as_ref().map(|t| t.id.as_str());

        let element = match (&build.damage_dice, &build.element) {
            (Some(dice), Some(element)) => {
                let elem_data = self.catalog.element(&element.id);
                let dice_data = self.catalog.dice(&dice.id);
                Some(ElementInfo {
                    dice: dice_data.map(|d| d.dice.clone()),
                    element: elem_data.map(|e| locale.pick(&e.name_he, &e.name_en).to_string()),
                    element_id: element.id.clone(),
                    icon: elem_data.map(|e| e.icon.clone()),
                })
            }
            _ => None,
        };

        GenerationData {
            base: self.base_item_data(),
            base_token: build.base.clone(),
            rarity: rarity_for_enchantment(rarity_id),
            enchantment_bonus: bonus_for_enchantment(rarity_id),
            element,
            abilities: build.abilities.iter().map(Into::into).collect(),
            modifiers: build.modifiers,
            item_name: item_name.to_string(),
            flavor_text: flavor_text.to_string(),
            total_cost: build.total_cost,
            locale,
        }
    }

    pub fn base_tokens(&self, subcategory: &str, locale: Locale) -> Vec<Token> {
        self.catalog.base_tokens(subcategory, locale)
    }

    pub fn element_tokens(&self, locale: Locale) -> Vec<Token> {
        self.catalog.element_tokens(locale)
    }

    pub fn rarity_tokens(&self, locale: Locale) -> Vec<Token> {
        self.catalog.rarity_tokens(locale)
    }

    pub fn ability_tokens(&self, subcategory: &str, locale: Locale) -> Vec<Token> {
        self.catalog.ability_tokens(subcategory, locale)
    }
}
