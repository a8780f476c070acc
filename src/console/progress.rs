//! Progress bar bound to stage events

use super::logging::BarSlot;
use crate::core::StageEvent;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.green} {msg:.bold.blue} [{bar:40.cyan/blue}] {percent:>3}% ETA {eta}";

/// Scoped progress bar for a single run.
///
/// Dropping a reporter that was never finished abandons the bar, leaving its
/// last state on screen. Either way the bar is released from its
/// [`BarSlot`], so later log lines print normally.
pub struct ProgressReporter {
    bar: ProgressBar,
    finished: bool,
    slot: Option<BarSlot>,
}

impl ProgressReporter {
    pub(crate) fn new(target: ProgressDrawTarget, animate: bool, slot: Option<BarSlot>) -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━╸ ");
        let bar = ProgressBar::with_draw_target(Some(100), target).with_style(style);
        bar.set_message("Initializing...");
        if animate {
            bar.enable_steady_tick(Duration::from_millis(100));
        }

        if let Some(slot) = &slot {
            slot.set(Some(bar.clone()));
        }

        ProgressReporter {
            bar,
            finished: false,
            slot,
        }
    }

    /// Reflect a stage event on the bar
    pub fn update(&self, event: &StageEvent) {
        self.bar.set_message(event.description);
        self.bar.set_position(event.percent());
    }

    /// Current position, 0 to 100
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Current stage description
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Complete the bar and release it
    pub fn finish(mut self) {
        self.bar.finish();
        self.finished = true;
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.finished {
            self.bar.abandon();
        }
        if let Some(slot) = &self.slot {
            slot.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> ProgressReporter {
        ProgressReporter::new(ProgressDrawTarget::hidden(), false, None)
    }

    #[test]
    fn test_update_maps_fraction_to_percent() {
        let reporter = hidden();
        reporter.update(&StageEvent {
            description: "Separating drums",
            fraction: 0.5,
        });

        assert_eq!(reporter.position(), 50);
        assert_eq!(reporter.message(), "Separating drums");
        reporter.finish();
    }

    #[test]
    fn test_drop_abandons_unfinished_bar() {
        let reporter = hidden();
        let bar = reporter.bar.clone();
        reporter.update(&StageEvent {
            description: "Loading audio file",
            fraction: 0.0,
        });
        drop(reporter);

        assert!(bar.is_finished());
        assert_eq!(bar.position(), 0);
    }
}
