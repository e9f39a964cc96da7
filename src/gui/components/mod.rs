// src/gui/components/mod.rs
pub mod action_buttons;
pub mod detail_panel;
pub mod item_table;
pub mod search_bar;
pub mod style;
