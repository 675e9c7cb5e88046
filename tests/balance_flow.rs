//! End-to-end checks of the balance rules through the public API

use item_forge::balance::{
    extract_bonus, generate_balanced_gold, get_balance_rating, normalize_rarity,
    official_standards, validate_item_balance, BalanceRating, ComplexityMode, GoldRange, Item,
    NumericField, PowerLevel, RarityPolicy, RarityStandard, RarityTier, ValidationOptions,
};

#[test]
fn test_localized_rarity_order() {
    assert_eq!(normalize_rarity("נדיר מאוד"), RarityTier::VeryRare);
    assert_eq!(normalize_rarity("נדיר"), RarityTier::Rare);
}

#[test]
fn test_bonus_extraction() {
    assert_eq!(extract_bonus(Some("1d8+2 slashing")), 2);
    assert_eq!(extract_bonus(None), 0);
    assert_eq!(extract_bonus(Some("1d8 slashing")), 0);
}

#[test]
fn test_standards_non_decreasing() {
    let standards = official_standards();
    for pair in standards.windows(2) {
        assert!(pair[0].gold_range.min <= pair[1].gold_range.min);
        assert!(pair[0].max_bonus <= pair[1].max_bonus);
    }
}

#[test]
fn test_cheap_common_item_gets_floor_price() {
    let item = Item {
        gold: Some(10.into()),
        ..Item::with_rarity("Common")
    };
    let result = validate_item_balance(&item, ValidationOptions::default());
    assert!(!result.is_valid);
    assert_eq!(result.fixed_item.gold_value(), 50);
    assert_eq!(get_balance_rating(&item), BalanceRating::Underpowered);
}

#[test]
fn test_plus_two_common_weapon_is_upgraded() {
    let item = Item {
        weapon_damage: Some("1d8+2 slashing".to_string()),
        ..Item::with_rarity("Common")
    };
    let result = validate_item_balance(&item, ValidationOptions::default());
    assert!(!result.is_valid);
    assert_eq!(result.fixed_item.rarity.as_deref(), Some("Rare"));
    assert!(result.fixed_item.gold_value() >= 1500);
    assert_eq!(get_balance_rating(&item), BalanceRating::Overpowered);
}

#[test]
fn test_common_with_elemental_dice_is_upgraded() {
    let json = r#"{"rarity":"Common","abilityDescription":"deals extra 1d6 fire damage"}"#;
    let item = Item::from_json(json).unwrap();
    let result = validate_item_balance(&item, ValidationOptions::default());

    assert!(!result.is_valid);
    assert_eq!(result.fixed_item.rarity.as_deref(), Some("Uncommon"));
    assert!(result.fixed_item.gold_value() >= 100);
    // Neither "too high" nor "too low": rated balanced
    assert_eq!(get_balance_rating(&item), BalanceRating::Balanced);
}

#[test]
fn test_generated_card_round_trips_with_fixes() {
    let json = r#"{
        "name": "Frostbite",
        "rarity": "rare",
        "rarityHe": "נדיר",
        "gold": "300 gp",
        "armorClass": 5,
        "weaponDamage": "1d8 slashing"
    }"#;
    let item = Item::from_json(json).unwrap();
    let result = validate_item_balance(&item, ValidationOptions::default());

    assert_eq!(result.rarity, RarityTier::Rare);
    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.fixed_item.armor_class, Some(NumericField::Integer(2)));
    assert_eq!(result.fixed_item.gold_value(), 500);

    let fixed_json = result.fixed_item.to_json().unwrap();
    let fixed: serde_json::Value = serde_json::from_str(&fixed_json).unwrap();
    assert_eq!(fixed["name"], "Frostbite");
    assert_eq!(fixed["gold"], 500);
}

#[test]
fn test_simple_mode_skips_ac_rule() {
    let item = Item {
        gold: Some(600.into()),
        armor_class: Some(4.into()),
        ..Item::with_rarity("Rare")
    };
    let options = ValidationOptions {
        auto_fix: true,
        mode: ComplexityMode::Simple,
    };
    assert!(validate_item_balance(&item, options).is_valid);
}

#[test]
fn test_custom_policy_reports_unknown_rarity() {
    let policy = RarityPolicy::new(vec![RarityStandard {
        tier: RarityTier::Common,
        max_bonus: 0,
        max_spell_level: 1,
        gold_range: GoldRange { min: 10, max: Some(20) },
        max_extra_damage_dice: 0,
        display_name: "Common".to_string(),
    }]);

    let result = policy.validate(&Item::with_rarity("Legendary"), ValidationOptions::default());
    assert!(!result.is_valid);
    assert_eq!(result.issues, vec!["Unknown rarity: Legendary".to_string()]);
    assert!(result.standards.is_none());
}

#[test]
fn test_price_estimates() {
    assert_eq!(generate_balanced_gold("Rare", PowerLevel::Low), 1400);
    let tiers = ["Common", "Uncommon", "Rare", "Very Rare", "Legendary"];
    let prices: Vec<_> = tiers
        .iter()
        .map(|t| generate_balanced_gold(t, PowerLevel::Medium))
        .collect();
    assert!(prices.windows(2).all(|w| w[0] < w[1]));
}
