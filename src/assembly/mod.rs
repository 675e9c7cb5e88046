//! Assembly table
//!
//! Point-budgeted item builds: tokens, the per-build tracker, and the
//! generation request it produces.

pub mod token;
pub mod tracker;
pub mod generation;

pub use token::{Token, TokenType, TokenCategory, SocketType, Locale};
pub use tracker::{
    base_budget_for, AssemblyBudgetTracker, AssemblyBuild, BuildModifiers, BreakdownEntry,
    BudgetStatus, DEFAULT_BUDGET, ATTUNEMENT_BONUS, CURSED_BONUS,
};
pub use generation::{
    rarity_for_enchantment, bonus_for_enchantment, GenerationData, BaseItemData, BaseRecord,
    ElementInfo, AbilityRef,
};
