// src/loader.rs
//
// Catalog Loader. Tiers are tried strictly in order, one at a time:
//   primary   JSON array of loose records
//   secondary delimited text (CSV/TSV/semicolon)
//   sample    built-in items
// Every failure is caught here and downgraded to the next tier; the
// caller only ever sees `Loaded` and its provenance tag.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::{
    config::options::SourceOptions,
    csv,
    item::Item,
    normalize,
    progress::Progress,
    sample,
    source::{Fetch, FetchError, Source},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provenance {
    Primary,
    Secondary,
    Sample,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Provenance::Primary => "primary",
            Provenance::Secondary => "secondary",
            Provenance::Sample => "sample",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{name} unavailable: {cause}")]
    SourceUnavailable {
        name: String,
        #[source]
        cause: FetchError,
    },
    #[error("{0} yielded no usable records")]
    SourceEmpty(String),
    #[error("{0} has no header row")]
    NoHeader(String),
    #[error("{name} unparseable: {reason}")]
    Malformed { name: String, reason: String },
}

#[derive(Clone, Debug)]
pub struct Loaded {
    pub items: Vec<Item>,
    pub provenance: Provenance,
    /// Which source text supplied the items (empty for sample)
    pub origin: String,
}

impl Loaded {
    /// One-line banner for the presentation layer.
    pub fn status_message(&self) -> String {
        let n = self.items.len();
        match self.provenance {
            Provenance::Primary => format!("Loaded {n} items."),
            Provenance::Secondary => format!("Loaded {n} items from {}.", self.origin),
            Provenance::Sample => s!("Could not load items. Using sample data."),
        }
    }
}

fn fetch_text(fetch: &dyn Fetch, text: &str) -> Result<String, LoadError> {
    let unavailable = |cause| LoadError::SourceUnavailable { name: s!(text), cause };
    let src = Source::parse(text).map_err(unavailable)?;
    let body = fetch.fetch(&src).map_err(unavailable)?;
    Ok(s!(csv::strip_bom(&body)))
}

/// Primary tier: JSON array → items. Empty after normalization is a failure.
pub fn load_primary(fetch: &dyn Fetch, text: &str) -> Result<Vec<Item>, LoadError> {
    let body = fetch_text(fetch, text)?;
    if body.trim().is_empty() {
        return Err(LoadError::SourceEmpty(s!(text)));
    }
    let doc: Value = serde_json::from_str(&body)
        .map_err(|e| LoadError::Malformed { name: s!(text), reason: e.to_string() })?;
    let items = normalize::normalize_json(&doc);
    if items.is_empty() {
        return Err(LoadError::SourceEmpty(s!(text)));
    }
    Ok(items)
}

/// Secondary tier: delimited text → items. Needs a header and one named row.
pub fn load_secondary(fetch: &dyn Fetch, text: &str) -> Result<Vec<Item>, LoadError> {
    let body = fetch_text(fetch, text)?;
    let table = csv::parse_table(&body);
    if table.is_empty() {
        return Err(LoadError::NoHeader(s!(text)));
    }
    let items = normalize::normalize(table.rows.iter());
    if items.is_empty() {
        return Err(LoadError::SourceEmpty(s!(text)));
    }
    Ok(items)
}

/// Run the fallback chain. Never fails.
pub fn load(fetch: &dyn Fetch, sources: &SourceOptions, mut progress: Option<&mut dyn Progress>) -> Loaded {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log(&format!("Loading {}…", sources.primary));
    }

    let mut report = |tier: Provenance, accepted: bool, msg: &str| {
        if let Some(p) = progress.as_deref_mut() {
            p.tier_done(tier, accepted);
            p.log(msg);
        }
    };

    let loaded = match load_primary(fetch, &sources.primary) {
        Ok(items) => {
            logf!("Load: primary {} → {} items", sources.primary, items.len());
            report(Provenance::Primary, true, "Primary source loaded");
            Loaded { items, provenance: Provenance::Primary, origin: sources.primary.clone() }
        }
        Err(e) => {
            logw!("Load: primary failed: {}", e);
            report(Provenance::Primary, false, &format!("{} failed. Trying {}…", sources.primary, sources.secondary));

            match load_secondary(fetch, &sources.secondary) {
                Ok(items) => {
                    logf!("Load: secondary {} → {} items", sources.secondary, items.len());
                    report(Provenance::Secondary, true, "Secondary source loaded");
                    Loaded { items, provenance: Provenance::Secondary, origin: sources.secondary.clone() }
                }
                Err(e2) => {
                    logw!("Load: secondary failed: {} (previous: {})", e2, e);
                    report(Provenance::Secondary, false, "Using sample data");
                    Loaded { items: sample::items(), provenance: Provenance::Sample, origin: s!() }
                }
            }
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish(loaded.provenance);
    }
    loaded
}
