//! Output formatting for one-shot predictions

pub mod console;
pub mod formatter;
