//! Item Forge - balancing engine for tabletop magic item cards
//!
//! Checks generated items against official rarity standards, estimates
//! fair gold prices, and tracks the point budget of items assembled
//! from catalog tokens.

pub mod balance;
pub mod assembly;
pub mod data;

// Re-export commonly used types
pub use balance::{
    validate_item_balance, normalize_rarity, generate_balanced_gold, get_balance_rating, Item,
    RarityTier, RarityPolicy, ValidationOptions, ValidationResult,
};
pub use assembly::{AssemblyBudgetTracker, GenerationData, SocketType, Token, Locale};
pub use data::{Catalog, DataManager, CatalogError, default_catalog};
