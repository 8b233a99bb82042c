// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod listing;
pub mod extract;
pub mod source;
pub mod engine;
pub mod browser;

pub mod csv;
pub mod file;
pub mod table;
pub mod session;
pub mod progress;
pub mod gui;
