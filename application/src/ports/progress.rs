//! Progress notification port
//!
//! Defines the interface for reporting progress while models load.

use trihealth_domain::Condition;

/// Callback for progress updates during startup model loading
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, nothing).
pub trait LoadProgressNotifier: Send + Sync {
    /// Called once before the first model is loaded
    fn on_load_start(&self, total: usize);

    /// Called after each model load attempt
    fn on_model_loaded(&self, condition: Condition, success: bool);

    /// Called once after all models loaded successfully
    fn on_load_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {
    fn on_load_start(&self, _total: usize) {}
    fn on_model_loaded(&self, _condition: Condition, _success: bool) {}
    fn on_load_complete(&self) {}
}
