//! TUI (Text User Interface) module for tri-health
//!
//! One tab per condition. Each tab holds a form of bounded inputs and
//! the result card of its last prediction.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{InputMode, KeyAction, handle_key};
pub use state::{FormState, TuiState};
pub use widgets::MainLayout;
