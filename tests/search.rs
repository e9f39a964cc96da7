// tests/search.rs
mod common;

use arc_items::query::{SearchIndex, search};
use common::item;

#[test]
fn every_token_must_match_somewhere() {
    let items = vec![
        item("Cloth", "Fabric", &["Fabric"]),
        item("Gear", "Metal", &["Metal Parts"]),
        item("Pipe", "Metal", &["Plastic"]),
    ];
    let hits = search("metal parts", &items);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Gear");

    // Order of tokens and case don't matter.
    assert_eq!(search("PARTS   Metal", &items).len(), 1);
    assert_eq!(search("metal", &items).len(), 2);
    assert!(search("metal unobtainium", &items).is_empty());
}

#[test]
fn empty_query_is_identity() {
    let items = vec![item("B", "", &[]), item("A", "", &[])];
    for q in ["", "   ", "\t\n"] {
        let hits = search(q, &items);
        assert_eq!(hits.len(), items.len());
        for (hit, orig) in hits.iter().zip(&items) {
            assert!(std::ptr::eq(*hit, orig));
        }
    }
}

#[test]
fn index_agrees_with_search() {
    let items = arc_items::sample::items();
    let index = SearchIndex::build(&items);
    assert_eq!(index.len(), items.len());
    for q in ["", "keep", "metal", "scrappy level", "nothing-here"] {
        let by_index: Vec<&str> = index.query(q).into_iter().map(|i| items[i].name.as_str()).collect();
        let direct: Vec<&str> = search(q, &items).into_iter().map(|i| i.name.as_str()).collect();
        assert_eq!(by_index, direct, "query {q:?}");
    }
}

#[test]
fn sample_items_match_on_outputs() {
    let mut items = arc_items::sample::items();
    items.push(item("Rag", "Junk", &["Fabric"]));
    let names: Vec<&str> = search("metal parts", &items).into_iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["ARC Alloy", "Dog Collar"]);
}
