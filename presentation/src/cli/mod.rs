//! Command-line surface: argument definitions and `--set` parsing

pub mod assignments;
pub mod commands;
