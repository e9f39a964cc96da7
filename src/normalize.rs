// src/normalize.rs
//
// Row Normalizer: loosely-typed records (parsed JSON objects or CSV rows)
// → canonical `Item`s.
//
// Every field is read through an ordered list of accessor rules; the first
// rule that yields a non-empty value wins:
//
//   name            name
//   rarity          rarity
//   category        category
//   uses            uses
//   recycle.safe    recycle_safe, recycle.safe, safe      (default "Unknown")
//   recycle.outputs recycle.outputs, recycle_outputs, outputs
//   notes           notes
//   sources         sources
//
// A nested path such as `recycle.safe` walks objects in JSON and matches a
// literal dotted column name in CSV.

use serde_json::Value;

use crate::csv::Record;
use crate::item::{Item, Recycle};

pub const UNKNOWN_SAFE: &str = "Unknown";

/// Separators accepted inside a flattened list cell.
const LIST_SEPS: [char; 2] = [';', '|'];

pub type Accessor = &'static [&'static str];

pub const NAME: &[Accessor] = &[&["name"]];
pub const RARITY: &[Accessor] = &[&["rarity"]];
pub const CATEGORY: &[Accessor] = &[&["category"]];
pub const USES: &[Accessor] = &[&["uses"]];
pub const SAFE: &[Accessor] = &[&["recycle_safe"], &["recycle", "safe"], &["safe"]];
pub const OUTPUTS: &[Accessor] = &[&["recycle", "outputs"], &["recycle_outputs"], &["outputs"]];
pub const NOTES: &[Accessor] = &[&["notes"]];
pub const SOURCES: &[Accessor] = &[&["sources"]];

/// A raw field value before coercion.
#[derive(Clone, Copy, Debug)]
pub enum Raw<'a> {
    Text(&'a str),
    Json(&'a Value),
}

/// Anything the normalizer can read fields out of.
pub trait RawRecord {
    fn lookup(&self, path: &[&str]) -> Option<Raw<'_>>;
}

impl RawRecord for Value {
    fn lookup(&self, path: &[&str]) -> Option<Raw<'_>> {
        let mut cur = self;
        for key in path {
            cur = cur.get(key)?;
        }
        (!cur.is_null()).then_some(Raw::Json(cur))
    }
}

impl RawRecord for Record {
    fn lookup(&self, path: &[&str]) -> Option<Raw<'_>> {
        self.get(&path.join(".")).map(|s| Raw::Text(s.as_str()))
    }
}

/* ---------------- Coercion ---------------- */

fn scalar_json(v: &Value) -> String {
    match v {
        Value::Null | Value::Object(_) => s!(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(xs) => xs
            .iter()
            .map(scalar_json)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

pub fn to_scalar(raw: Raw<'_>) -> String {
    match raw {
        Raw::Text(s) => s.trim().to_string(),
        Raw::Json(v) => scalar_json(v),
    }
}

/// Split a flattened list cell on `;` or `|`, dropping blanks.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(&LIST_SEPS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn to_list(raw: Raw<'_>) -> Vec<String> {
    match raw {
        Raw::Json(Value::Array(xs)) => xs
            .iter()
            .map(scalar_json)
            .filter(|s| !s.is_empty())
            .collect(),
        other => split_list(&to_scalar(other)),
    }
}

fn first_scalar<R: RawRecord + ?Sized>(rec: &R, rules: &[Accessor]) -> String {
    rules
        .iter()
        .filter_map(|path| rec.lookup(path))
        .map(to_scalar)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn first_list<R: RawRecord + ?Sized>(rec: &R, rules: &[Accessor]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|path| rec.lookup(path))
        .map(to_list)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
}

/* ---------------- Normalizing ---------------- */

/// One record → one `Item`. Never fails; bad fields become defaults.
pub fn normalize_one<R: RawRecord + ?Sized>(rec: &R) -> Item {
    let safe = first_scalar(rec, SAFE);
    Item {
        name: first_scalar(rec, NAME),
        rarity: first_scalar(rec, RARITY),
        category: first_scalar(rec, CATEGORY),
        uses: first_list(rec, USES),
        recycle: Recycle {
            safe: if safe.is_empty() { s!(UNKNOWN_SAFE) } else { safe },
            outputs: first_list(rec, OUTPUTS),
        },
        notes: first_scalar(rec, NOTES),
        sources: first_list(rec, SOURCES),
    }
}

/// Case-insensitive by name; stable, so equal names keep input order.
pub fn sort_by_name(items: &mut [Item]) {
    items.sort_by_cached_key(|it| it.name.to_lowercase());
}

/// Normalize, drop unnamed rows, sort.
pub fn normalize<'a, R, I>(records: I) -> Vec<Item>
where
    R: RawRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut dropped = 0usize;
    let mut items: Vec<Item> = records
        .into_iter()
        .map(normalize_one)
        .filter(|it| {
            let keep = !it.name.is_empty();
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();
    if dropped > 0 {
        logd!("Normalize: dropped {} unnamed row(s)", dropped);
    }
    sort_by_name(&mut items);
    items
}

/// A JSON document is usable only as an array of records.
pub fn normalize_json(doc: &Value) -> Vec<Item> {
    match doc {
        Value::Array(records) => normalize(records.iter()),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn safe_aliases_in_priority_order() {
        let a = json!({ "name": "A", "recycle_safe": "Yes", "recycle": { "safe": "No" }, "safe": "Keep" });
        let b = json!({ "name": "B", "recycle": { "safe": "No" }, "safe": "Keep" });
        let c = json!({ "name": "C", "safe": "Keep" });
        let d = json!({ "name": "D", "recycle_safe": "  " });
        assert_eq!(normalize_one(&a).recycle.safe, "Yes");
        assert_eq!(normalize_one(&b).recycle.safe, "No");
        assert_eq!(normalize_one(&c).recycle.safe, "Keep");
        assert_eq!(normalize_one(&d).recycle.safe, UNKNOWN_SAFE);
    }

    #[test]
    fn lists_accept_native_or_delimited() {
        let v = json!({
            "name": "X",
            "uses": ["Craft", 3, " "],
            "recycle_outputs": "Fabric; Metal Parts | ;",
            "sources": "https://a.example|wiki"
        });
        let it = normalize_one(&v);
        assert_eq!(it.uses, vec!["Craft", "3"]);
        assert_eq!(it.recycle.outputs, vec!["Fabric", "Metal Parts"]);
        assert_eq!(it.sources, vec!["https://a.example", "wiki"]);
    }

    #[test]
    fn missing_lists_are_empty_not_absent() {
        let it = normalize_one(&json!({ "name": "Bare" }));
        assert!(it.uses.is_empty());
        assert!(it.recycle.outputs.is_empty());
        assert!(it.sources.is_empty());
    }

    #[test]
    fn scalars_are_stringified_and_trimmed() {
        let it = normalize_one(&json!({ "name": "  N  ", "rarity": 5, "category": true, "notes": {"x": 1} }));
        assert_eq!(it.name, "N");
        assert_eq!(it.rarity, "5");
        assert_eq!(it.category, "true");
        assert_eq!(it.notes, "");
    }

    #[test]
    fn csv_dotted_column_reaches_nested_rule() {
        let mut rec = Record::new();
        rec.insert(s!("name"), s!("Gear"));
        rec.insert(s!("recycle.safe"), s!("No"));
        assert_eq!(normalize_one(&rec).recycle.safe, "No");
    }

    #[test]
    fn unnamed_dropped_and_sorted_stably() {
        let doc = json!([
            { "name": "beta", "notes": "1" },
            { "name": "" },
            { "name": "Alpha" },
            { "name": "Beta", "notes": "2" },
            { "rarity": "Rare" }
        ]);
        let items = normalize_json(&doc);
        let names: Vec<_> = items.iter().map(|i| (i.name.as_str(), i.notes.as_str())).collect();
        assert_eq!(names, vec![("Alpha", ""), ("beta", "1"), ("Beta", "2")]);
    }

    #[test]
    fn non_array_json_is_empty() {
        assert!(normalize_json(&json!({ "name": "x" })).is_empty());
    }
}
