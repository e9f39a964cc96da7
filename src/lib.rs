// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod csv;
pub mod debounce;
pub mod export;
pub mod file;
pub mod gui;
pub mod item;
pub mod loader;
pub mod normalize;
pub mod progress;
pub mod query;
pub mod sample;
pub mod share;
pub mod source;
pub mod store;
