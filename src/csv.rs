// src/csv.rs
use std::collections::HashMap;
use std::mem::take;

/// One data row keyed by (trimmed) header name.
pub type Record = HashMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Tab,
    Comma,
    Semicolon,
}

impl Delim {
    pub fn as_char(self) -> char {
        match self {
            Delim::Tab => '\t',
            Delim::Comma => ',',
            Delim::Semicolon => ';',
        }
    }

    /// Pick the delimiter from the header line only: tab, then comma,
    /// then semicolon, else comma.
    pub fn sniff(text: &str) -> Self {
        let first = text.split('\n').next().unwrap_or("");
        if first.contains('\t') {
            Delim::Tab
        } else if first.contains(',') {
            Delim::Comma
        } else if first.contains(';') {
            Delim::Semicolon
        } else {
            Delim::Comma
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

/* ---------------- Parsing ---------------- */

/// Quote-aware tokenizer. `\r` is dropped everywhere; an unterminated quote
/// runs to the end of the text.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\r' {
            continue;
        }
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            c if c == sep => row.push(take(&mut field)),
            '\n' => {
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Flush the final field/row even without a trailing newline.
    row.push(field);
    rows.push(row);

    // A terminal newline leaves one empty row behind.
    if rows.last().is_some_and(|r| r.len() == 1 && r[0].is_empty()) {
        rows.pop();
    }
    rows
}

/// Drop a leading UTF-8 byte-order mark; `trim` leaves U+FEFF alone.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Sniff, tokenize, and key every data row by the trimmed header.
pub fn parse_table(text: &str) -> Table {
    let text = strip_bom(text);
    let delim = Delim::sniff(text);
    let mut rows = parse_rows(text, delim.as_char()).into_iter();

    let Some(first) = rows.next() else {
        return Table::default();
    };
    let header: Vec<String> = first.iter().map(|h| h.trim().to_string()).collect();
    if header.iter().all(|h| h.is_empty()) {
        return Table::default();
    }

    let records = rows
        .map(|r| {
            header
                .iter()
                .enumerate()
                .map(|(ix, h)| (h.clone(), r.get(ix).map(|v| v.trim()).unwrap_or("").to_string()))
                .collect::<Record>()
        })
        .collect();

    logd!("CSV: delim={:?} columns={}", delim, header.len());
    Table { header, rows: records }
}

/* ---------------- Writing ---------------- */

/// Always-quoted cell with internal quotes doubled.
pub fn quote(field: &str) -> String {
    join!("\"", &field.replace('"', "\"\""), "\"")
}

/// One output line (no terminator), every cell quoted.
pub fn quoted_row<S: AsRef<str>>(cells: &[S], sep: char) -> String {
    let mut line = s!();
    for (ix, cell) in cells.iter().enumerate() {
        if ix > 0 {
            line.push(sep);
        }
        line.push_str(&quote(cell.as_ref()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_prefers_tab_then_comma_then_semicolon() {
        assert_eq!(Delim::sniff("a\tb,c\n1,2"), Delim::Tab);
        assert_eq!(Delim::sniff("a,b;c\n1\t2"), Delim::Comma);
        assert_eq!(Delim::sniff("a;b\n1,2"), Delim::Semicolon);
        assert_eq!(Delim::sniff("name\n1\t2"), Delim::Comma);
        assert_eq!(Delim::sniff(""), Delim::Comma);
    }

    #[test]
    fn quoted_fields_keep_delims_quotes_and_newlines() {
        let rows = parse_rows("\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"", ',');
        assert_eq!(rows, vec![vec!["a,b", "say \"hi\"", "two\nlines"]]);
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let rows = parse_rows("a,b\r\n1,2\r\n", ',');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let rows = parse_rows("a,\"b\nc", ',');
        assert_eq!(rows, vec![vec!["a", "b\nc"]]);
    }

    #[test]
    fn only_one_trailing_empty_row_is_dropped() {
        let rows = parse_rows("a\n\n", ',');
        assert_eq!(rows, vec![vec!["a"], vec![""]]);
    }

    #[test]
    fn table_tolerates_ragged_rows() {
        let t = parse_table(" name , rarity \nDog Collar\nARC Alloy,Uncommon,extra\n");
        assert_eq!(t.header, vec!["name", "rarity"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0]["name"], "Dog Collar");
        assert_eq!(t.rows[0]["rarity"], "");
        assert_eq!(t.rows[1]["rarity"], "Uncommon");
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("\n").is_empty());
        assert!(parse_table(" , \nx,y").is_empty());
    }

    #[test]
    fn leading_bom_is_not_part_of_the_header() {
        let t = parse_table("\u{feff}name,rarity\nDog Collar,Rare\n");
        assert_eq!(t.header, vec!["name", "rarity"]);
        assert_eq!(t.rows[0]["name"], "Dog Collar");
        assert_eq!(strip_bom("\u{feff}"), "");
        assert_eq!(strip_bom("a\u{feff}"), "a\u{feff}");
    }

    #[test]
    fn quoted_row_escapes() {
        assert_eq!(quoted_row(&["a", "b\"c"], ','), "\"a\",\"b\"\"c\"");
    }
}
