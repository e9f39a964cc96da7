// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy_csv,copy_link,export,start_load}.

mod copy;   // src/gui/actions/copy.rs
mod export; // src/gui/actions/export.rs
mod load;   // src/gui/actions/load.rs

pub use copy::{copy_csv, copy_link};
pub use export::export;
pub use load::start_load;
