use lorewiki_core::{
    resolve, Article, ArticleStore, Category, LinkResolveError, MemoryLocalStore,
};
use std::collections::BTreeMap;

fn store_with(entries: &[(&str, &str)]) -> ArticleStore<MemoryLocalStore> {
    let base: BTreeMap<String, Article> = entries
        .iter()
        .map(|(key, title)| {
            (
                key.to_string(),
                Article::new(*title, "body", Category::Sections, vec![]),
            )
        })
        .collect();
    ArticleStore::from_seed(base, MemoryLocalStore::new())
}

#[test]
fn exact_key_match_wins() {
    let store = store_with(&[("k1", "Old Gods")]);
    let resolved = resolve(&store, "k1").expect("key label should resolve");
    assert_eq!(resolved.key, "k1");
    assert_eq!(resolved.article.title, "Old Gods");
}

#[test]
fn exact_title_match_resolves_to_the_holding_key() {
    let store = store_with(&[("k1", "Old Gods")]);
    let resolved = resolve(&store, "Old Gods").expect("title label should resolve");
    assert_eq!(resolved.key, "k1");
}

#[test]
fn fuzzy_fallback_matches_substrings_case_insensitively() {
    let store = store_with(&[("k1", "Old Gods")]);

    let by_title_fragment = resolve(&store, "old").expect("fragment should resolve");
    assert_eq!(by_title_fragment.key, "k1");

    let by_key_fragment = resolve(&store, "K1").expect("key fragment should resolve");
    assert_eq!(by_key_fragment.key, "k1");
}

#[test]
fn unknown_label_reports_not_found() {
    let store = store_with(&[("k1", "Old Gods")]);
    let err = resolve(&store, "Dwarfs").expect_err("absent label must not resolve");
    assert_eq!(err, LinkResolveError::NotFound("Dwarfs".to_string()));
}

#[test]
fn fuzzy_fallback_takes_the_first_match_in_iteration_order() {
    // Both titles contain "gods"; key order decides.
    let store = store_with(&[("elder", "Elder Gods"), ("old", "Old Gods")]);
    let resolved = resolve(&store, "gods").expect("fragment should resolve");
    assert_eq!(resolved.key, "elder");
}

#[test]
fn exact_key_is_preferred_over_another_articles_exact_title() {
    let mut base = BTreeMap::new();
    base.insert(
        "Old Gods".to_string(),
        Article::new("The First Pantheon", "body", Category::Primary, vec![]),
    );
    base.insert(
        "pantheon".to_string(),
        Article::new("Old Gods", "body", Category::Primary, vec![]),
    );
    let store = ArticleStore::from_seed(base, MemoryLocalStore::new());

    let resolved = resolve(&store, "Old Gods").expect("label should resolve");
    assert_eq!(resolved.key, "Old Gods");
    assert_eq!(resolved.article.title, "The First Pantheon");
}

#[test]
fn short_labels_can_resolve_to_surprising_articles() {
    // The heuristic is substring containment, so a two-letter label hits
    // the first key or title that happens to contain it.
    let store = store_with(&[("geography", "Realm Geography"), ("gods", "Old Gods")]);
    let resolved = resolve(&store, "og").expect("short label should still resolve");
    assert_eq!(resolved.key, "geography");
}
