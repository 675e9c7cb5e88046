//! Loading catalogs and standards from RON files on disk

use std::fs;
use std::sync::Arc;

use item_forge::assembly::{AssemblyBudgetTracker, Locale};
use item_forge::balance::{Item, RarityTier, ValidationOptions};
use item_forge::data::{
    default_catalog, export_default_data, load_catalog, CatalogError, DataManager,
};

#[test]
fn test_edited_catalog_changes_costs() {
    let dir = tempfile::tempdir().unwrap();
    export_default_data(dir.path()).unwrap();

    let path = dir.path().join("catalog.ron");
    let mut catalog = load_catalog(&path).unwrap();
    catalog.abilities["keen"].cost = 9;
    let text = ron::ser::to_string_pretty(&catalog, ron::ser::PrettyConfig::default()).unwrap();
    fs::write(&path, text).unwrap();

    let manager = DataManager::load_from_dir(dir.path());
    assert_eq!(manager.catalog().abilities["keen"].cost, 9);

    let mut tracker = AssemblyBudgetTracker::new(Arc::new(manager.catalog.clone()));
    let keen = tracker
        .ability_tokens("melee", Locale::En)
        .into_iter()
        .find(|t| t.id == "keen")
        .unwrap();
    tracker.drop_token(keen);
    assert_eq!(tracker.total_cost(), 9);
}

#[test]
fn test_custom_standards_drive_validation() {
    let dir = tempfile::tempdir().unwrap();
    export_default_data(dir.path()).unwrap();

    let mut manager = DataManager::load_from_dir(dir.path());
    manager.policy.standards.retain(|s| s.tier != RarityTier::Artifact);

    let result = manager
        .policy()
        .validate(&Item::with_rarity("Artifact"), ValidationOptions::default());
    assert!(!result.is_valid);
    assert!(result.issues[0].starts_with("Unknown rarity"));
}

#[test]
fn test_partial_catalog_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.ron");
    let text = r#"(elements: {"void": (nameHe: "ריק", nameEn: "Void", icon: "🕳️")})"#;
    fs::write(&path, text).unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert!(catalog.weapons.is_empty());
    // Element cost defaults to one point
    assert_eq!(catalog.elements["void"].cost, 1);
    assert_ne!(catalog, default_catalog());
}

#[test]
fn test_unreadable_path_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
