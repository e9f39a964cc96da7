// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use arc_items::item::{Item, Recycle};
use arc_items::source::{Fetch, FetchError, Source};
use arc_items::{list, s};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("arc_items_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serves canned bodies by file name; anything else is a 404.
#[derive(Default)]
pub struct FakeFetch {
    pub bodies: HashMap<String, String>,
}

impl FakeFetch {
    pub fn with(mut self, name: &str, body: &str) -> Self {
        self.bodies.insert(s!(name), s!(body));
        self
    }
}

impl Fetch for FakeFetch {
    fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        let key = match source {
            Source::File(p) => p.to_string_lossy().into_owned(),
            Source::Http(t) => t.path.trim_start_matches('/').to_string(),
        };
        self.bodies.get(&key).cloned().ok_or(FetchError::Status(404))
    }
}

pub fn item(name: &str, category: &str, outputs: &[&str]) -> Item {
    Item {
        name: s!(name),
        rarity: s!("Common"),
        category: s!(category),
        uses: list![],
        recycle: Recycle { safe: s!("Yes"), outputs: outputs.iter().map(|o| s!(*o)).collect() },
        notes: s!(),
        sources: list![],
    }
}
