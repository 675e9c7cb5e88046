//! Data loading and the token catalog
//!
//! The catalog and rarity standards can be loaded from external RON files,
//! so prices and components are tunable without a rebuild.

pub mod catalog;
pub mod defaults;
pub mod loader;

pub use catalog::{
    Catalog, WeaponDef, ArmorDef, WondrousDef, BaseGroup, ElementDef, DiceDef, EnchantmentDef,
    AbilityDef,
};
pub use defaults::default_catalog;
pub use loader::{
    DataManager, CatalogError, CatalogResult, load_catalog, load_catalog_json, load_policy,
    export_default_data, DEFAULT_DATA_DIR,
};
