use lorewiki_core::{categorize, search, Article, ArticleStore, Category, MemoryLocalStore};
use std::collections::BTreeMap;

fn fixture_store() -> ArticleStore<MemoryLocalStore> {
    let mut base = BTreeMap::new();
    base.insert(
        "cosmology".to_string(),
        Article::new(
            "Cosmology of the Realm",
            "How the spheres were shaped.",
            Category::Primary,
            vec![],
        ),
    );
    base.insert(
        "gods".to_string(),
        Article::new(
            "Old Gods",
            "The pantheon before the sundering.",
            Category::Primary,
            vec![],
        ),
    );
    base.insert(
        "rivers".to_string(),
        Article::new(
            "Rivers of the North",
            "Trade routes and floodplains.",
            Category::Sections,
            vec![],
        ),
    );
    base.insert(
        "style_guide".to_string(),
        Article::new(
            "Style Guide",
            "Editorial conventions for contributors.",
            Category::Auxiliary,
            vec![],
        ),
    );
    base.insert("drafts".to_string(), {
        let mut article = Article::new(
            "Unsorted Drafts",
            "Sundering fragments not yet filed.",
            Category::Auxiliary,
            vec![],
        );
        article.category = "chronicles".to_string();
        article
    });
    ArticleStore::from_seed(base, MemoryLocalStore::new())
}

#[test]
fn categorize_partitions_by_recognized_category_only() {
    let store = fixture_store();
    let categorized = categorize(&store);

    let titles = |bucket: &[&Article]| -> Vec<String> {
        bucket.iter().map(|article| article.title.clone()).collect()
    };

    assert_eq!(
        titles(&categorized.primary),
        vec!["Cosmology of the Realm".to_string(), "Old Gods".to_string()]
    );
    assert_eq!(
        titles(&categorized.sections),
        vec!["Rivers of the North".to_string()]
    );
    assert_eq!(
        titles(&categorized.auxiliary),
        vec!["Style Guide".to_string()]
    );

    // The unrecognized entry is in the store but in no bucket.
    assert_eq!(store.len(), 5);
    assert_eq!(categorized.total(), 4);
}

#[test]
fn partitions_are_disjoint_and_cover_all_recognized_entries() {
    let store = fixture_store();
    let categorized = categorize(&store);

    let mut seen: Vec<*const Article> = Vec::new();
    for bucket in [
        categorized.primary.as_slice(),
        categorized.sections.as_slice(),
        categorized.auxiliary.as_slice(),
    ] {
        for article in bucket {
            let ptr: *const Article = *article;
            assert!(!seen.contains(&ptr), "article appears in two buckets");
            seen.push(ptr);
        }
    }

    let recognized = store
        .iter()
        .filter(|(_, article)| article.category_kind().is_some())
        .count();
    assert_eq!(seen.len(), recognized);
}

#[test]
fn empty_or_whitespace_query_returns_nothing() {
    let store = fixture_store();
    assert!(search(&store, "").is_empty());
    assert!(search(&store, "   ").is_empty());
    assert!(search(&store, "\t\n").is_empty());
}

#[test]
fn search_matches_title_and_content_case_insensitively() {
    let store = fixture_store();

    let by_title = search(&store, "cosmo");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Cosmology of the Realm");

    // "sundering" appears only in content, across two articles.
    let by_content = search(&store, "SUNDERING");
    assert_eq!(by_content.len(), 2);

    assert!(search(&store, "zzz").is_empty());
}

#[test]
fn search_results_keep_store_iteration_order() {
    let store = fixture_store();
    let hits = search(&store, "the");
    let titles: Vec<&str> = hits.iter().map(|article| article.title.as_str()).collect();
    // Store iterates in key order: cosmology, gods, rivers.
    assert_eq!(
        titles,
        vec!["Cosmology of the Realm", "Old Gods", "Rivers of the North"]
    );
}

#[test]
fn unrecognized_category_articles_are_still_searchable() {
    let store = fixture_store();
    let hits = search(&store, "fragments");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Unsorted Drafts");
}
