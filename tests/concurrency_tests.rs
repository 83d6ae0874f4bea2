//! Concurrency and thread safety tests for Prompt Search

use std::sync::{Arc, RwLock};
use std::thread;

use promptsearch::{load, Catalog, Matcher, StaticSource};

fn shared_catalog() -> Arc<Catalog> {
    let prompts: Vec<String> = (0..50)
        .map(|i| {
            format!(
                r#"{{"id":"p-{i}","category":"Cat {i}","subcategory":"Sub","system_message":"You are assistant number {i}","keywords":["k{i}"],"topic":"t"}}"#
            )
        })
        .collect();
    let source = StaticSource::new()
        .with_prompts("roles.json", format!("[{}]", prompts.join(",")))
        .with_questions("q.json", r#"[{"id":"q-1","Q":"Which assistant number is best?"}]"#);
    Arc::new(load(source).expect("fixture should load"))
}

#[test]
fn concurrent_searches_share_one_snapshot() {
    let catalog = shared_catalog();
    let matcher = Matcher::default();
    let expected = matcher.search_catalog("assistant number", &catalog).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                Matcher::default()
                    .search_catalog("assistant number", &catalog)
                    .expect("search should succeed")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(expected.results.len(), 50);
}

#[test]
fn different_queries_in_parallel_do_not_interfere() {
    let catalog = shared_catalog();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let result = Matcher::default()
                    .search_catalog(&format!("k{i}"), &catalog)
                    .unwrap();
                (i, result)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.join().unwrap();
        // "k1" also matches k10..k19, so only check the exact hit is present.
        assert!(result.results.iter().any(|h| h.prompt.id == format!("p-{i}")));
        assert!(result.results.iter().all(|h| !h.matched_system_message));
    }
}

#[test]
fn readers_keep_their_snapshot_across_a_swap() {
    let slot = Arc::new(RwLock::new(shared_catalog()));
    let held = slot.read().unwrap().clone();

    *slot.write().unwrap() = Arc::new(Catalog::default());

    let old = Matcher::default().search_catalog("assistant", &held).unwrap();
    let new = Matcher::default()
        .search_catalog("assistant", &slot.read().unwrap())
        .unwrap();
    assert_eq!(old.results.len(), 50);
    assert!(new.is_empty());
}
