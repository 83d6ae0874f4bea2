use promptsearch::{load, search, Catalog, PromptRecord, QuestionRecord, StaticSource};

fn catalog() -> Catalog {
    load(
        StaticSource::new()
            .with_prompts(
                "roles.json",
                r#"[
                    {"id":"a","category":"Pets","subcategory":"Cats","system_message":"You love cats","keywords":["feline"],"topic":"x"},
                    {"id":"b","category":"Code","subcategory":"Concat","system_message":"You concatenate strings","keywords":[],"topic":"y"},
                    {"id":"c","category":"Food","subcategory":"Baking","system_message":"You bake bread","keywords":["CATERING"],"topic":"z"}
                ]"#,
            )
            .with_questions(
                "questions.json",
                r#"[{"id":"q-1","Q":"Do cats dream?"},{"id":"q-2","Q":"Is bread vegan?"}]"#,
            ),
    )
    .expect("fixture should load")
}

#[test]
fn repeated_searches_are_identical() {
    let catalog = catalog();
    let first = search("cat", &catalog.prompts, &catalog.questions).unwrap();
    for _ in 0..10 {
        let again = search("cat", &catalog.prompts, &catalog.questions).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn query_case_and_padding_do_not_matter() {
    let catalog = catalog();
    let lower = search("cat", &catalog.prompts, &catalog.questions).unwrap();
    let upper = search("  CAT ", &catalog.prompts, &catalog.questions).unwrap();
    assert_eq!(lower, upper);

    // Cats subcategory, "concatenate", "CATERING" keyword, in input order.
    let ids: Vec<_> = lower.results.iter().map(|h| h.prompt.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(lower.results_q.len(), 1);
}

#[test]
fn searching_leaves_the_catalog_untouched() {
    let catalog = catalog();
    let snapshot: (Vec<PromptRecord>, Vec<QuestionRecord>) =
        (catalog.prompts.clone(), catalog.questions.clone());

    let _ = search("you bake", &catalog.prompts, &catalog.questions).unwrap();
    let _ = search("bread", &catalog.prompts, &catalog.questions).unwrap();

    assert_eq!(catalog.prompts, snapshot.0);
    assert_eq!(catalog.questions, snapshot.1);
}

#[test]
fn loading_twice_yields_equal_catalogs() {
    assert_eq!(catalog(), catalog());
}
