//! Core value types shared by validation, processing and presentation

/// Audio formats and stems
pub mod audio;
/// Request, progress and result records
pub mod request;

pub use audio::{AudioFormat, Stem, supported_formats};
pub use request::{ProcessingRequest, ProcessingResult, StageEvent};
