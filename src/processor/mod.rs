//! Simulated separation pipeline

pub mod cancel;
pub mod stages;

pub use cancel::CancelToken;
pub use stages::{DEFAULT_STAGE_DELAY, DEFAULT_STAGE_DELAY_MS, STAGES, StageRunner};
