#![warn(missing_docs)]

//! # stem-demo: Simulated Audio Stem Separation
//!
//! A demo command-line tool that pretends to split an audio file into vocals,
//! drums, bass and other instruments, with styled terminal output.
//!
//! No audio is decoded. Validation checks the file exists and carries a known
//! extension; processing is a fixed sequence of timed stages that report
//! progress through a callback.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use stem_demo::{ProcessingRequest, StageRunner, validate};
//!
//! validate("song.mp3").into_result()?;
//!
//! let runner = StageRunner::new().with_stage_delay(Duration::from_millis(100));
//! let result = runner.run(ProcessingRequest::new("song.mp3"), |event| {
//!     println!("{}: {}%", event.description, event.percent());
//! })?;
//! println!("{} stems in {:.2}s", result.stem_count, result.elapsed_seconds());
//! # Ok::<(), stem_demo::SeparateError>(())
//! ```

/// Command line parsing and orchestration
pub mod cli;
/// Terminal rendering
pub mod console;
/// Core request, progress and result types
pub mod core;
/// Error types for validation and processing
pub mod error;
/// Simulated separation pipeline
pub mod processor;
/// Input file validation
pub mod validate;

pub use self::core::{AudioFormat, ProcessingRequest, ProcessingResult, StageEvent, Stem};
pub use error::{SeparateError, SeparateResult};
pub use processor::{CancelToken, StageRunner};
pub use validate::{ValidationResult, validate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
