// src/gui/components/mod.rs
pub mod page_bar;
pub mod action_bar;
pub mod data_table;
