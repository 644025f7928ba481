pub mod action;
pub mod commands;
pub mod parsers;
pub mod program;
pub mod render;
pub mod style;
pub mod terminal;

pub use program::run_cli;
