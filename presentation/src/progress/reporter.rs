//! Progress reporting for startup model loading

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use trihealth_application::LoadProgressNotifier;
use trihealth_domain::Condition;

/// Reports model loading with an indicatif progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_load_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Loading models");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_model_loaded(&self, condition: Condition, success: bool) {
        let Ok(bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), condition)
            } else {
                format!("{} {}", "x".red(), condition)
            };
            pb.set_message(status);
            pb.inc(1);
            if !success {
                pb.abandon();
            }
        }
    }

    fn on_load_complete(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{}", "ready".green()));
        }
    }
}
