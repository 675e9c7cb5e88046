//! Property tests for the budget invariants and tier ordering

use std::sync::Arc;

use proptest::prelude::*;

use item_forge::assembly::{
    AssemblyBudgetTracker, Locale, SocketType, Token, TokenCategory, TokenType,
};
use item_forge::balance::{
    generate_balanced_gold, normalize_rarity, official_standards, PowerLevel, RarityTier,
};
use item_forge::data::default_catalog;

#[derive(Debug, Clone)]
enum Mutation {
    Drop(usize),
    DropCustom(Token),
    Clear(SocketType),
    RemoveAbility(usize),
    Budget(usize),
    Reset,
}

const SOCKETS: [SocketType; 4] = [
    SocketType::Base,
    SocketType::Element,
    SocketType::Rarity,
    SocketType::Ability,
];

const RARITY_NAMES: [&str; 6] = ["Common", "Uncommon", "Rare", "Very Rare", "Legendary", "Mythic"];

fn all_tokens() -> Vec<Token> {
    let catalog = default_catalog();
    let mut tokens = catalog.base_tokens("melee", Locale::En);
    tokens.extend(catalog.element_tokens(Locale::En));
    tokens.extend(catalog.rarity_tokens(Locale::En));
    tokens.extend(catalog.ability_tokens("held", Locale::En));
    tokens
}

/// Costs from a loaded catalog: usually small, sometimes near the type limit
fn arb_cost() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => 0u32..20,
        1 => (u32::MAX - 16)..=u32::MAX,
        1 => any::<u32>(),
    ]
}

fn arb_token() -> impl Strategy<Value = Token> {
    let token_type = prop_oneof![
        Just(TokenType::Base),
        Just(TokenType::Element),
        Just(TokenType::DamageDice),
        Just(TokenType::Rarity),
        Just(TokenType::Ability),
    ];
    ("[a-z]{1,6}", token_type, arb_cost()).prop_map(|(id, token_type, cost)| {
        Token::new(id.clone(), token_type, TokenCategory::Feature, id, "?", cost)
    })
}

fn arb_mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        4 => (0usize..64).prop_map(Mutation::Drop),
        3 => arb_token().prop_map(Mutation::DropCustom),
        1 => (0usize..4).prop_map(|i| Mutation::Clear(SOCKETS[i])),
        1 => (0usize..6).prop_map(Mutation::RemoveAbility),
        1 => (0usize..RARITY_NAMES.len()).prop_map(Mutation::Budget),
        1 => Just(Mutation::Reset),
    ]
}

proptest! {
    /// Breakdown always sums to the tracked cost, for any catalog costs
    #[test]
    fn prop_breakdown_matches_total(mutations in prop::collection::vec(arb_mutation(), 0..40)) {
        let tokens = all_tokens();
        let mut tracker = AssemblyBudgetTracker::new(Arc::new(default_catalog()));

        for mutation in mutations {
            match mutation {
                Mutation::Drop(i) => tracker.drop_token(tokens[i % tokens.len()].clone()),
                Mutation::DropCustom(token) => tracker.drop_token(token),
                Mutation::Clear(socket) => tracker.clear_socket(socket),
                Mutation::RemoveAbility(i) => tracker.remove_ability(i),
                Mutation::Budget(i) => tracker.update_max_budget(RARITY_NAMES[i]),
                Mutation::Reset => tracker.reset(),
            }

            // Summed wide; the tracker saturates at u32::MAX
            let sum: u64 = tracker.breakdown().iter().map(|b| b.cost as u64).sum();
            prop_assert_eq!(sum.min(u32::MAX as u64), tracker.total_cost() as u64);
            prop_assert_eq!(tracker.can_afford(0), sum <= tracker.max_budget() as u64);

            let mut ids: Vec<_> = tracker.build().abilities.iter().map(|a| a.id.clone()).collect();
            let count = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), count);
        }
    }

    /// Any text normalizes to one of the six tiers, and canonical names are fixed points
    #[test]
    fn prop_normalize_is_total(raw in ".{0,24}") {
        let tier = normalize_rarity(&raw);
        prop_assert!(RarityTier::ALL.contains(&tier));
        prop_assert_eq!(normalize_rarity(tier.name()), tier);
        prop_assert_eq!(normalize_rarity(tier.localized_name()), tier);
    }
}

#[test]
fn test_tier_monotonicity() {
    let standards = official_standards();
    assert_eq!(standards.len(), RarityTier::ALL.len());
    for pair in standards.windows(2) {
        assert!(pair[0].tier < pair[1].tier);
        assert!(pair[0].gold_range.min <= pair[1].gold_range.min);
        assert!(pair[0].max_bonus <= pair[1].max_bonus);
    }

    for power in [PowerLevel::Low, PowerLevel::Medium, PowerLevel::High] {
        let prices: Vec<_> = RarityTier::ALL
            .iter()
            .map(|t| generate_balanced_gold(t.name(), power))
            .collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{:?}", prices);
    }
}
