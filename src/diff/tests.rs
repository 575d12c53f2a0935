//! Unit tests for the diff module.

use super::*;
use crate::card::{Rarity, RarityState};
use crate::collection::Collection;
use crate::metadata::{CardDatabase, CardEntry, ExpansionRef};

// ============================================================================
// SHARED TEST HELPERS
// ============================================================================

fn collection(entries: &[(&str, u32)]) -> Collection {
    entries.iter().map(|(id, n)| (id.to_string(), *n)).collect()
}

fn card(expansion: &str, number: u32, rarity: &str, name: &str) -> CardEntry {
    CardEntry {
        collection_number: number,
        expansion: ExpansionRef {
            expansion_id: expansion.to_string(),
        },
        rarity_name: Some(rarity.to_string()),
        name: Some(name.to_string()),
    }
}

fn test_db() -> CardDatabase {
    CardDatabase::new(vec![
        card("A1", 1, "Common", "Bulbasaur"),
        card("A1", 2, "Uncommon", "Ivysaur"),
        card("A1", 3, "Rare", "Venusaur"),
        card("A1", 4, "Super Rare", "Venusaur ex"),
        card("A2a", 10, "Common", "Arceus"),
        card("PROMO-A", 5, "Common", "Pikachu"),
        card("A1", 6, "One Shiny Star", "Shiny Pikachu"),
    ])
}

// ============================================================================
// COMPONENT TESTS: FILTERS
// ============================================================================

mod filter_tests {
    use super::*;

    #[test]
    fn test_exclusive_holdings() {
        let a = collection(&[("A1-001", 2), ("A1-002", 3)]);
        let b = collection(&[("A1-002", 1), ("A1-003", 4)]);

        let only_a = exclusive_holdings(&a, &b);
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a["A1-001"], 2);
    }

    #[test]
    fn test_exclusive_holdings_keeps_order() {
        let a = collection(&[("A1-009", 2), ("A1-001", 2), ("A1-005", 2)]);
        let b = Collection::new();

        let keys: Vec<String> = exclusive_holdings(&a, &b).into_keys().collect();
        assert_eq!(keys, vec!["A1-009", "A1-001", "A1-005"]);
    }

    #[test]
    fn test_is_banned_expansion() {
        let banned = TradeRules::default().banned_expansions;
        assert!(is_banned_expansion("P-A-005", &banned));
        assert!(is_banned_expansion("A2α-010", &banned));
        assert!(is_banned_expansion("A2a-010", &banned));
        assert!(!is_banned_expansion("A2-010", &banned));
        assert!(!is_banned_expansion("A1-001", &banned));
    }

    #[test]
    fn test_filter_by_threshold_is_strict() {
        let holdings = collection(&[("A1-001", 1), ("A1-002", 2), ("A1-003", 5)]);
        let kept = filter_by_threshold(holdings, 1);

        assert!(!kept.contains_key("A1-001"));
        assert_eq!(kept.len(), 2);
    }
}

// ============================================================================
// COMPONENT TESTS: ENGINE
// ============================================================================

mod engine_tests {
    use super::*;

    #[test]
    fn test_basic_scenario() {
        let a = collection(&[("A1-001", 2), ("A1-002", 1)]);
        let b = collection(&[("A1-003", 3)]);

        let report = diff_collections(&a, &b, &test_db(), &TradeRules::default());

        assert_eq!(report.collection_1.len(), 1);
        let bulbasaur = &report.collection_1["A1-001"];
        assert_eq!(bulbasaur.count, 2);
        assert_eq!(bulbasaur.name.as_deref(), Some("Bulbasaur"));
        assert_eq!(bulbasaur.rarity, RarityState::Tier(Rarity::Common));

        assert_eq!(report.collection_2.len(), 1);
        assert_eq!(report.collection_2["A1-003"].rarity, RarityState::Tier(Rarity::Rare));
    }

    #[test]
    fn test_shared_cards_excluded() {
        let a = collection(&[("A1-001", 5), ("A1-002", 5)]);
        let b = collection(&[("A1-001", 1)]);

        let report = diff_collections(&a, &b, &test_db(), &TradeRules::default());

        assert!(!report.collection_1.contains_key("A1-001"));
        assert!(report.collection_2.is_empty());
    }

    #[test]
    fn test_promo_excluded_despite_lookup() {
        let a = collection(&[("P-A-005", 4)]);
        let report = diff_collections(&a, &Collection::new(), &test_db(), &TradeRules::default());
        assert!(report.collection_1.is_empty());
        assert_eq!(report.stats_1.exclusive, 1);
        assert_eq!(report.stats_1.tradable_expansion, 0);
    }

    #[test]
    fn test_alpha_expansion_excluded() {
        let a = collection(&[("A2α-010", 4)]);
        let report = diff_collections(&a, &Collection::new(), &test_db(), &TradeRules::default());
        assert!(report.collection_1.is_empty());
    }

    #[test]
    fn test_banned_rarity_kept_for_renderer() {
        let a = collection(&[("A1-004", 2)]);
        let report = diff_collections(&a, &Collection::new(), &test_db(), &TradeRules::default());
        assert_eq!(report.collection_1["A1-004"].rarity, RarityState::Tier(Rarity::SuperRare));
    }

    #[test]
    fn test_unlisted_rarity_is_resolved() {
        let a = collection(&[("A1-006", 2)]);
        let report = diff_collections(&a, &Collection::new(), &test_db(), &TradeRules::default());

        let record = &report.collection_1["A1-006"];
        assert!(record.is_resolved());
        assert_eq!(record.rarity, RarityState::Unlisted("One Shiny Star".to_string()));
        assert_eq!(report.stats_1.unresolved, 0);
    }

    #[test]
    fn test_unresolved_records() {
        let a = collection(&[("A9-001", 2), ("A1-xyz", 3)]);
        let report = diff_collections(&a, &Collection::new(), &test_db(), &TradeRules::default());

        assert_eq!(report.collection_1.len(), 2);
        assert!(report.collection_1.values().all(|r| r.name.is_none() && !r.is_resolved()));
        assert_eq!(report.stats_1.unresolved, 2);
    }

    #[test]
    fn test_empty_database_degrades() {
        let a = collection(&[("A1-001", 2)]);
        let report =
            diff_collections(&a, &Collection::new(), &CardDatabase::empty(), &TradeRules::default());

        assert_eq!(report.collection_1["A1-001"], CardRecord::unresolved("A1-001", 2));
    }

    #[test]
    fn test_custom_threshold() {
        let a = collection(&[("A1-001", 2), ("A1-002", 3)]);
        let rules = TradeRules {
            min_count_exclusive: 2,
            ..Default::default()
        };

        let report = diff_collections(&a, &Collection::new(), &test_db(), &rules);
        let keys: Vec<&String> = report.collection_1.keys().collect();
        assert_eq!(keys, vec!["A1-002"]);
    }

    #[test]
    fn test_sides_are_disjoint_subsets() {
        let a = collection(&[("A1-001", 2), ("A1-002", 3), ("A1-003", 2)]);
        let b = collection(&[("A1-003", 2), ("A1-004", 2), ("A1-001", 1)]);

        let report = diff_collections(&a, &b, &test_db(), &TradeRules::default());

        for id in report.collection_1.keys() {
            assert!(a.contains_key(id));
            assert!(!report.collection_2.contains_key(id));
        }
        for id in report.collection_2.keys() {
            assert!(b.contains_key(id));
        }
    }
}
