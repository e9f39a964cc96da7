// src/query.rs
//
// Query Engine. A query is split into lower-cased whitespace tokens and an
// item matches when every token is a substring of its haystack: name,
// category, rarity, uses, recycle safe flag, recycle outputs, notes and
// sources, lower-cased and joined by spaces. No tokens → everything, in
// input order.

use crate::item::Item;

pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn haystack(item: &Item) -> String {
    let mut parts: Vec<&str> = vec![item.name.as_str(), item.category.as_str(), item.rarity.as_str()];
    parts.extend(item.uses.iter().map(String::as_str));
    parts.push(item.recycle.safe.as_str());
    parts.extend(item.recycle.outputs.iter().map(String::as_str));
    parts.push(item.notes.as_str());
    parts.extend(item.sources.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

#[inline]
pub fn matches(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|t| haystack.contains(t.as_str()))
}

/// Matching items, borrowed from `items`, input order kept.
pub fn search<'a>(query: &str, items: &'a [Item]) -> Vec<&'a Item> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|it| matches(&haystack(it), &tokens)).collect()
}

/// Haystacks computed once per catalog; queries return positions into it.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    haystacks: Vec<String>,
}

impl SearchIndex {
    pub fn build(items: &[Item]) -> Self {
        Self { haystacks: items.iter().map(haystack).collect() }
    }

    pub fn len(&self) -> usize {
        self.haystacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.haystacks.is_empty()
    }

    /// Positions of matching items, ascending.
    pub fn query(&self, query: &str) -> Vec<usize> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return (0..self.haystacks.len()).collect();
        }
        let hits: Vec<usize> = self
            .haystacks
            .iter()
            .enumerate()
            .filter(|(_, h)| matches(h, &tokens))
            .map(|(ix, _)| ix)
            .collect();
        logd!("Query: tokens={} hits={}/{}", tokens.len(), hits.len(), self.haystacks.len());
        hits
    }
}
