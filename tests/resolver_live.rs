//! End-to-end tests against the live CIR service at cactus.nci.nih.gov.
//!
//! These need network access and a responsive service.
//! Run with: cargo test -- --ignored

use chemfinder::{Lookup, NameResolver};

#[tokio::test]
#[ignore]
async fn test_live_water_resolves_to_o() {
    let resolver = NameResolver::new();
    match resolver.resolve("water").await {
        Lookup::Resolved { smiles, synonyms } => {
            assert_eq!(smiles, "O");
            assert!(
                synonyms.iter().any(|s| s.eq_ignore_ascii_case("water")),
                "expected a 'water' synonym, got {:?}",
                synonyms
            );
        }
        Lookup::Failed(err) => panic!("live lookup failed: {}", err),
    }
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_name_is_not_found() {
    let resolver = NameResolver::new();
    let lookup = resolver.resolve("not-a-real-chemical-xyz").await;

    assert_eq!(
        lookup.into_display_pair(),
        ("0".to_string(), "No other names found".to_string())
    );
}

#[tokio::test]
#[ignore]
async fn test_live_multi_word_name() {
    let resolver = NameResolver::new();
    let lookup = resolver.resolve("acetic acid").await;
    assert!(lookup.is_resolved(), "expected 'acetic acid' to resolve");
}
