//! Argument definitions for the `stem-demo` binary

use crate::core::ProcessingRequest;
use crate::processor::DEFAULT_STAGE_DELAY_MS;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

const AFTER_HELP: &str = "\
Example Usage:
  $ stem-demo separate song.mp3
  $ stem-demo separate /path/to/audio.wav --output-dir ./output
  $ stem-demo separate music.flac --verbose

Supported Audio Formats:
  .mp3, .wav, .flac, .ogg, .m4a";

/// Audio stem separation demo CLI tool
#[derive(Debug, Parser, Clone)]
#[command(name = "stem-demo")]
#[command(version)]
#[command(about = "Audio stem separation demo CLI tool")]
#[command(
    long_about = "Audio stem separation demo CLI tool.\n\n\
    Simulates separating an audio file into vocals, drums, bass and other \
    instruments, with progress reporting in the terminal."
)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Whether the selected command asked for verbose output
    pub fn verbose(&self) -> bool {
        match &self.command {
            Command::Separate(args) => args.verbose,
        }
    }
}

/// Available subcommands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Separate audio file into individual stems
    #[command(after_help = AFTER_HELP)]
    Separate(SeparateArgs),
}

/// Options accepted by `separate`
#[derive(Debug, Args, Clone)]
pub struct SeparateArgs {
    /// Path to the audio file to process
    #[arg(value_name = "AUDIO_FILE")]
    pub audio_file: PathBuf,

    /// Output directory for separated stems (default: a directory named after the input file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Show detailed processing information
    #[arg(short, long)]
    pub verbose: bool,

    /// Simulated latency per stage, in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_STAGE_DELAY_MS,
        hide = true
    )]
    pub stage_delay_ms: u64,
}

impl SeparateArgs {
    /// Build the processing request described by these arguments
    pub fn to_request(&self) -> ProcessingRequest {
        let request = ProcessingRequest::new(&self.audio_file).with_verbose(self.verbose);
        match &self.output_dir {
            Some(dir) => request.with_output_directory(dir),
            None => request,
        }
    }

    /// Simulated latency per stage
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }
}
