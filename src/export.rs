// src/export.rs
//
// Export Serializer. CSV is the spreadsheet-friendly flattening (every cell
// quoted, lists joined); JSON keeps the exact `Item` shape and is the
// lossless format.

use crate::config::options::ListDelim;
use crate::csv::quoted_row;
use crate::item::Item;

/// Column names match what the normalizer reads back.
pub const CSV_HEADER: [&str; 8] = [
    "name",
    "rarity",
    "category",
    "uses",
    "recycle_safe",
    "recycle_outputs",
    "notes",
    "sources",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn ext(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

fn csv_cells(it: &Item, delim: ListDelim) -> [String; 8] {
    let j = delim.joiner();
    [
        it.name.clone(),
        it.rarity.clone(),
        it.category.clone(),
        it.uses.join(j),
        it.recycle.safe.clone(),
        it.recycle.outputs.join(j),
        it.notes.clone(),
        it.sources.join(j),
    ]
}

/// Header + one line per item, lines joined by `\n` (no trailing newline).
pub fn to_csv<'a, I>(items: I, delim: ListDelim) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut lines = vec![CSV_HEADER.join(",")];
    lines.extend(items.into_iter().map(|it| quoted_row(&csv_cells(it, delim), ',')));
    lines.join("\n")
}

/// Pretty-printed array of items.
pub fn to_json<'a, I>(items: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a Item>,
{
    let items: Vec<&Item> = items.into_iter().collect();
    serde_json::to_string_pretty(&items)
}

/// Serialize into the given format.
pub fn render<'a, I>(items: I, format: ExportFormat, delim: ListDelim) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a Item>,
{
    match format {
        ExportFormat::Csv => Ok(to_csv(items, delim)),
        ExportFormat::Json => to_json(items),
    }
}
