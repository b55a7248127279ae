//! CLI subcommand handlers

pub mod config;
pub mod play;
pub mod scripts;
