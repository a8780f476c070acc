//! Fixed stage sequence and its runner

use crate::core::{ProcessingRequest, ProcessingResult, StageEvent, Stem};
use crate::error::{SeparateError, SeparateResult};
use crate::processor::CancelToken;
use log::{debug, info};
use std::thread;
use std::time::{Duration, Instant};

/// Simulated pipeline stages, in execution order
pub const STAGES: [&str; 7] = [
    "Loading audio file",
    "Analyzing frequency spectrum",
    "Separating vocals",
    "Separating drums",
    "Separating bass",
    "Separating other instruments",
    "Writing output files",
];

/// Default simulated latency per stage, in milliseconds
pub const DEFAULT_STAGE_DELAY_MS: u64 = 500;

/// Default simulated latency per stage
pub const DEFAULT_STAGE_DELAY: Duration = Duration::from_millis(DEFAULT_STAGE_DELAY_MS);

/// Longest uninterrupted sleep while simulating a stage
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs the fixed stage sequence, reporting progress at every boundary
#[derive(Debug, Clone)]
pub struct StageRunner {
    /// Simulated latency per stage
    stage_delay: Duration,
    /// Cancellation flag polled between and during stages
    cancel: CancelToken,
}

impl Default for StageRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl StageRunner {
    /// Create a runner with the default stage delay
    pub fn new() -> Self {
        StageRunner {
            stage_delay: DEFAULT_STAGE_DELAY,
            cancel: CancelToken::new(),
        }
    }

    /// Set the simulated latency per stage
    pub fn with_stage_delay(mut self, delay: Duration) -> Self {
        self.stage_delay = delay;
        self
    }

    /// Observe the given cancellation token
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Fraction range `(start, end)` covered by stage `index`
    pub fn stage_bounds(index: usize) -> (f64, f64) {
        let total = STAGES.len() as f64;
        (index as f64 / total, (index + 1) as f64 / total)
    }

    /// Run every stage for `request`.
    ///
    /// `on_progress` is called with the start and end fraction of each stage
    /// and must return before the run continues. The final event carries a
    /// fraction of exactly 1.0. Returns [`SeparateError::Cancelled`] if the
    /// cancel token fires; no event is emitted after that point.
    pub fn run<F>(&self, request: ProcessingRequest, mut on_progress: F) -> SeparateResult<ProcessingResult>
    where
        F: FnMut(&StageEvent),
    {
        let start = Instant::now();
        debug!(
            "starting {} stages for {} (delay {:?})",
            STAGES.len(),
            request.input_path().display(),
            self.stage_delay
        );

        for (index, description) in STAGES.iter().copied().enumerate() {
            self.check_cancelled()?;

            let (begin, end) = Self::stage_bounds(index);
            debug!("stage {}/{}: {}", index + 1, STAGES.len(), description);
            on_progress(&StageEvent {
                description,
                fraction: begin,
            });

            self.simulate_delay()?;

            on_progress(&StageEvent {
                description,
                fraction: end,
            });
        }

        let output_paths = request.planned_outputs();
        let elapsed = start.elapsed();
        info!(
            "separated {} into {} stems in {:.2}s",
            request.input_path().display(),
            output_paths.len(),
            elapsed.as_secs_f64()
        );

        Ok(ProcessingResult {
            stem_count: Stem::ALL.len(),
            elapsed,
            output_paths,
        })
    }

    fn check_cancelled(&self) -> SeparateResult<()> {
        if self.cancel.is_cancelled() {
            debug!("cancellation observed, stopping run");
            Err(SeparateError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn simulate_delay(&self) -> SeparateResult<()> {
        let deadline = Instant::now() + self.stage_delay;
        loop {
            self.check_cancelled()?;
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}
