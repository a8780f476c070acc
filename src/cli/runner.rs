//! Orchestration of the `separate` command

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

use colored::{Color, Colorize};
use log::{debug, warn};

use crate::console::Console;
use crate::core::{ProcessingResult, supported_formats};
use crate::error::{SeparateError, SeparateResult};
use crate::processor::{CancelToken, StageRunner};
use crate::validate::validate;

use super::Outcome;
use super::args::{Cli, Command, SeparateArgs};

/// Execute the parsed command and report the outcome
pub fn run<W: Write>(cli: Cli, console: &mut Console<W>, cancel: &CancelToken) -> Outcome {
    match cli.command {
        Command::Separate(args) => separate(&args, console, cancel),
    }
}

/// Validate, process and render one `separate` invocation
pub fn separate<W: Write>(
    args: &SeparateArgs,
    console: &mut Console<W>,
    cancel: &CancelToken,
) -> Outcome {
    match try_separate(args, console, cancel) {
        Ok(result) => {
            debug!("run finished with {} stems", result.stem_count);
            Outcome::Success
        }
        Err(err) => {
            let outcome = outcome_for(&err);
            if let Err(e) = report_failure(&err, args.verbose, console) {
                warn!("failed to render error report: {e}");
            }
            outcome
        }
    }
}

/// Exit outcome for an error
pub fn outcome_for(err: &SeparateError) -> Outcome {
    match err {
        SeparateError::Cancelled => Outcome::Cancelled,
        _ => Outcome::Failure,
    }
}

fn try_separate<W: Write>(
    args: &SeparateArgs,
    console: &mut Console<W>,
    cancel: &CancelToken,
) -> SeparateResult<ProcessingResult> {
    let request = args.to_request();

    if request.verbose() {
        console.blank()?;
        console.heading("Audio Stem Separator")?;
        console.blank()?;
        console.info(&format!("Input file: {}", request.input_path().display()))?;
        if let Some(dir) = request.output_directory() {
            console.info(&format!("Output directory: {}", dir.display()))?;
        }
    }

    validate(request.input_path()).into_result()?;

    console.info(&format!("Processing: {}", file_name(request.input_path())))?;
    console.blank()?;

    let verbose = request.verbose();
    let runner = StageRunner::new()
        .with_stage_delay(args.stage_delay())
        .with_cancel_token(cancel.clone());

    let progress = console.progress();
    let result = runner.run(request, |event| progress.update(event))?;
    progress.finish();

    render_success(&result, verbose, console)?;
    Ok(result)
}

fn render_success<W: Write>(
    result: &ProcessingResult,
    verbose: bool,
    console: &mut Console<W>,
) -> io::Result<()> {
    console.blank()?;

    let mut lines = vec![
        format!("Successfully separated audio into {} stems", result.stem_count).green(),
        format!("Processing time: {:.2} seconds", result.elapsed_seconds()).dimmed(),
        "".normal(),
        "Generated files:".bold(),
    ];
    lines.extend(
        result
            .output_paths
            .iter()
            .map(|path| format!("- {}", file_name(path)).cyan()),
    );
    console.panel("✓ Complete", &lines, Color::Green)?;

    if verbose {
        console.blank()?;
        console.line("Generated stems (full paths):".bold())?;
        for (i, path) in result.output_paths.iter().enumerate() {
            console.line(format!("  {}. {}", i + 1, path.display().to_string().cyan()))?;
        }
        console.blank()?;
    }
    Ok(())
}

fn report_failure<W: Write>(
    err: &SeparateError,
    verbose: bool,
    console: &mut Console<W>,
) -> io::Result<()> {
    if err.is_validation() {
        console.error(&err.to_string())?;
        console.blank()?;
        console.hint(&format!("Supported formats: {}", supported_formats().join(", ")))?;
        return console.blank();
    }

    console.blank()?;
    match err {
        SeparateError::Cancelled => console.error("Processing cancelled by user"),
        _ => {
            console.error(&format!("An error occurred during processing: {err}"))?;
            if verbose {
                let mut source = err.source();
                while let Some(cause) = source {
                    console.line(format!("  caused by: {cause}").dimmed())?;
                    source = cause.source();
                }
            }
            Ok(())
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(path: PathBuf) -> SeparateArgs {
        SeparateArgs {
            audio_file: path,
            output_dir: None,
            verbose: false,
            stage_delay_ms: 0,
        }
    }

    fn render_failure(err: &SeparateError, verbose: bool) -> String {
        colored::control::set_override(false);
        let mut console = Console::with_writer(Vec::new());
        report_failure(err, verbose, &mut console).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(outcome_for(&SeparateError::Cancelled), Outcome::Cancelled);
        assert_eq!(
            outcome_for(&SeparateError::UnsupportedFormat {
                extension: "txt".to_string()
            }),
            Outcome::Failure
        );
        assert_eq!(
            outcome_for(&SeparateError::Io(io::Error::other("disk"))),
            Outcome::Failure
        );
    }

    #[test]
    fn test_validation_failure_lists_formats() {
        let out = render_failure(
            &SeparateError::InputNotFound {
                path: PathBuf::from("missing.mp3"),
            },
            false,
        );
        assert!(out.contains("✗ File not found: missing.mp3"));
        assert!(out.contains("Supported formats: .flac, .m4a, .mp3, .ogg, .wav"));
    }

    #[test]
    fn test_unexpected_failure_cause_only_when_verbose() {
        let err = SeparateError::Io(io::Error::other("broken pipe"));

        let quiet = render_failure(&err, false);
        assert!(quiet.contains("An error occurred during processing: IO error: broken pipe"));
        assert!(!quiet.contains("caused by"));
        assert!(!quiet.contains("Supported formats"));

        let loud = render_failure(&err, true);
        assert!(loud.contains("caused by: broken pipe"));
    }

    #[test]
    fn test_cancel_message() {
        let out = render_failure(&SeparateError::Cancelled, false);
        assert!(out.contains("✗ Processing cancelled by user"));
        assert!(!out.contains("Supported formats"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("a/b/song.mp3")), "song.mp3");
    }

    #[test]
    fn test_invalid_input_skips_runner() {
        let dir = tempfile::TempDir::new().unwrap();
        let cancel = CancelToken::new();
        let mut console = Console::with_writer(Vec::new());

        let outcome = separate(&args(dir.path().join("missing.mp3")), &mut console, &cancel);
        let out = String::from_utf8(console.into_inner()).unwrap();

        assert_eq!(outcome, Outcome::Failure);
        assert!(!out.contains("Processing:"));
    }
}
