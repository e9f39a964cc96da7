// tests/store_share.rs
//
// Filtered view, selection and share-link restore.

mod common;

use arc_items::loader::{Loaded, Provenance};
use arc_items::share::ShareState;
use arc_items::store::CatalogStore;
use common::item;

fn store() -> CatalogStore {
    let mut s = CatalogStore::new();
    s.install(Loaded {
        items: vec![
            item("Battery", "Electrical", &["Metal Parts"]),
            item("Copper Wire", "Electrical", &["Metal Parts"]),
            item("Fuse", "Electrical", &["Plastic"]),
            item("Rope", "Fabric", &["Fabric"]),
        ],
        provenance: Provenance::Primary,
        origin: "items.json".into(),
    });
    s
}

#[test]
fn query_filters_and_clears_selection() {
    let mut s = store();
    assert_eq!(s.filtered_len(), 4);
    assert!(s.select(3));
    s.apply_query("electrical");
    assert_eq!(s.filtered_len(), 3);
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.count_label(), "3 items");
}

#[test]
fn single_match_is_selected() {
    let mut s = store();
    s.apply_query("rope");
    assert_eq!(s.selected().map(|i| i.name.as_str()), Some("Rope"));
    assert_eq!(s.count_label(), "1 item");
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut s = store();
    s.apply_query("electrical");
    assert!(s.select(1));
    assert!(!s.select(3));
    assert_eq!(s.selected_index(), Some(1));
}

#[test]
fn keyboard_style_stepping_stays_in_view() {
    let mut s = store();
    s.apply_query("electrical");
    assert!(s.select_next());
    assert_eq!(s.selected_index(), Some(0));
    assert!(!s.select_prev());
    assert!(s.select_next() && s.select_next());
    assert!(!s.select_next());
    assert_eq!(s.selected_index(), Some(2));
}

#[test]
fn link_restores_query_and_selection() {
    let mut s = store();
    s.apply_query("electrical");
    assert!(s.select(1));
    let link = s.share_state().to_link();
    assert!(link.contains("q=electrical"));
    assert!(link.contains("#item=Copper+Wire"));

    let mut fresh = store();
    let st = ShareState::from_link(&link).unwrap();
    assert!(fresh.restore(&st));
    assert_eq!(fresh.query(), "electrical");
    assert_eq!(fresh.selected_index(), Some(1));
    assert_eq!(fresh.selected().map(|i| i.name.as_str()), Some("Copper Wire"));
}

#[test]
fn anchor_outside_the_view_selects_nothing() {
    let mut s = store();
    let st = ShareState::new("electrical", Some("Rope"));
    assert!(!s.restore(&st));
    assert_eq!(s.filtered_len(), 3);
    assert_eq!(s.selected_index(), None);
}

#[test]
fn reinstall_keeps_current_query() {
    let mut s = store();
    s.apply_query("fabric");
    s.install(Loaded { items: arc_items::sample::items(), provenance: Provenance::Sample, origin: String::new() });
    assert_eq!(s.query(), "fabric");
    assert_eq!(s.filtered_len(), 1);
    assert_eq!(s.provenance(), Some(Provenance::Sample));
}

#[test]
fn export_view_is_filtered_or_everything() {
    let mut s = store();
    s.apply_query("plastic");
    assert_eq!(s.export_view().len(), 1);
    s.apply_query("no such thing");
    assert_eq!(s.export_view().len(), 4);
}

fn store_of(names: &[&str]) -> CatalogStore {
    let mut s = CatalogStore::new();
    s.install(Loaded {
        items: names.iter().map(|n| item(n, "Misc", &[])).collect(),
        provenance: Provenance::Primary,
        origin: "items.json".into(),
    });
    s
}

#[test]
fn names_differing_only_by_case_restore_exactly() {
    for picked in [0, 1] {
        let mut s = store_of(&["Beta", "beta", "Gamma"]);
        s.apply_query("misc");
        assert!(s.select(picked));
        let name = s.selected().map(|i| i.name.clone());
        let link = s.share_state().to_link();

        let mut fresh = store_of(&["Beta", "beta", "Gamma"]);
        assert!(fresh.restore(&ShareState::from_link(&link).unwrap()));
        assert_eq!(fresh.selected().map(|i| i.name.clone()), name, "link {link}");
        assert_eq!(fresh.selected_index(), Some(picked));
    }
}

#[test]
fn anchor_falls_back_to_case_insensitive_match() {
    let mut s = store_of(&["Alpha", "Gamma"]);
    assert!(s.restore(&ShareState::new("", Some("GAMMA"))));
    assert_eq!(s.selected().map(|i| i.name.as_str()), Some("Gamma"));
}

#[test]
fn duplicate_names_restore_to_the_first_copy() {
    let mut s = store_of(&["Gear", "Gear", "Rope"]);
    assert!(s.select(1));
    let link = s.share_state().to_link();

    let mut fresh = store_of(&["Gear", "Gear", "Rope"]);
    assert!(fresh.restore(&ShareState::from_link(&link).unwrap()));
    assert_eq!(fresh.selected_index(), Some(0));
    assert_eq!(fresh.selected().map(|i| i.name.as_str()), Some("Gear"));
}
