// src/cli.rs
//
// Headless frontend: load the catalog through the same fallback chain as
// the window, then search, export or build/open share links.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::{consts::CONFIG_FILE, file as config_file, options::AppOptions},
    export::ExportFormat,
    file,
    item::Item,
    loader::{self, Provenance},
    progress::Progress,
    share::ShareState,
    source::NetFetch,
    store::CatalogStore,
};

#[derive(Parser, Debug)]
#[command(name = "arc_items")]
#[command(version)]
#[command(about = "Search and export the ARC Raiders item catalog", long_about = None)]
pub struct Cli {
    /// Options file (created with defaults on first export)
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Override the primary (JSON) source
    #[arg(long, value_name = "URL|PATH")]
    primary: Option<String>,

    /// Override the secondary (delimited text) source
    #[arg(long, value_name = "URL|PATH")]
    secondary: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print items matching every whitespace-separated token
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Write the matching items (or all, if none match) to a file
    Export {
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Target file; defaults to <export.dir>/<export.stem>.<ext>
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
        #[arg(default_value = "")]
        query: String,
    },
    /// Print a share link for a query and optional selected item
    Link {
        #[arg(default_value = "")]
        query: String,
        /// Name of the item to anchor the link on
        #[arg(long, value_name = "NAME")]
        select: Option<String>,
    },
    /// Restore a share link and print what it points at
    Open { url: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
        }
    }
}

/// Tier-by-tier notes on stderr, so stdout stays clean for piping.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, _tiers: usize) {}
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn tier_done(&mut self, _tier: Provenance, _accepted: bool) {}
    fn finish(&mut self, tier: Provenance) {
        if tier == Provenance::Sample {
            eprintln!("warning: no source could be loaded; showing sample data");
        }
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let mut options = config_file::load_or_default(&cli.config);
    if let Some(p) = cli.primary {
        options.sources.primary = p;
    }
    if let Some(s) = cli.secondary {
        options.sources.secondary = s;
    }

    let loaded = loader::load(&NetFetch, &options.sources, Some(&mut StderrProgress));
    let mut store = CatalogStore::new();
    store.install(loaded);
    eprintln!("{}", store.status());

    match cli.command {
        Command::Search { query } => {
            store.apply_query(&query);
            for it in store.filtered() {
                println!("{}", summary_line(it));
            }
            eprintln!("{}", store.count_label());
        }
        Command::Export { format, out, query } => {
            store.apply_query(&query);
            export(&options, &cli.config, format.into(), out, &store)?;
        }
        Command::Link { query, select } => {
            let state = ShareState::new(&query, select.as_deref());
            if let Some(name) = select.as_deref() {
                let mut probe = store.clone();
                if !probe.restore(&state) {
                    logw!("CLI: {:?} not in view for {:?}", name, query);
                    eprintln!("warning: {name:?} does not match the query");
                }
            }
            println!("{}", state.to_link());
        }
        Command::Open { url } => {
            let state = ShareState::from_link(&url).wrap_err_with(|| format!("not a share link: {url}"))?;
            let found = store.restore(&state);
            eprintln!("query: {:?}  {}", state.query, store.count_label());
            match store.selected() {
                Some(it) => print_detail(it),
                None => {
                    if let Some(name) = state.anchor.as_deref().filter(|_| !found) {
                        eprintln!("warning: {name:?} not found in view");
                    }
                    for it in store.filtered() {
                        println!("{}", summary_line(it));
                    }
                }
            }
        }
    }
    Ok(())
}

fn export(
    options: &AppOptions,
    config_path: &Path,
    format: ExportFormat,
    out: Option<PathBuf>,
    store: &CatalogStore,
) -> Result<()> {
    let items = store.export_view();
    if items.is_empty() {
        return Err(eyre!("nothing to export"));
    }
    let n = items.len();
    let path = match out {
        Some(path) => {
            file::write_export_to(&path, format, &options.export, items)?;
            path
        }
        None => file::write_export(&options.export, format, items)?,
    };
    if !config_path.exists() {
        config_file::write(config_path, options).wrap_err("saving default options")?;
    }
    eprintln!("Exported {n} item(s) → {}", path.display());
    Ok(())
}

fn summary_line(it: &Item) -> String {
    join!(&it.name, "\t", &it.rarity, "\t", &it.category, "\t", &it.recycle.safe)
}

fn print_detail(it: &Item) {
    let or_none = |s: String| if s.is_empty() { s!("none") } else { s };
    println!("{}", it.name);
    println!("  rarity:        {}", it.rarity);
    println!("  category:      {}", it.category);
    println!("  uses:          {}", or_none(it.uses.join(", ")));
    println!("  safe:          {}", it.recycle.safe);
    println!("  recycles into: {}", or_none(it.recycle.outputs.join(", ")));
    println!("  notes:         {}", it.notes);
    println!("  sources:       {}", or_none(it.sources.join(", ")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_args_parse() {
        let cli = Cli::try_parse_from(["cli", "export", "--format", "json", "-o", "x.json", "metal"]).unwrap();
        match cli.command {
            Command::Export { format, out, query } => {
                assert!(matches!(format, Format::Json));
                assert_eq!(out, Some(PathBuf::from("x.json")));
                assert_eq!(query, "metal");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn summary_is_tab_separated() {
        let it = Item { name: s!("ARC Alloy"), rarity: s!("Uncommon"), ..Default::default() };
        assert!(summary_line(&it).starts_with("ARC Alloy\tUncommon\t"));
    }
}
