use super::audio::Stem;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A single separation request, built from CLI input
#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    /// Audio file to separate
    input_path: PathBuf,
    /// Explicit output directory, if any
    output_directory: Option<PathBuf>,
    /// Whether detailed status output was requested
    verbose: bool,
}

impl ProcessingRequest {
    /// Create a request for an input file
    pub fn new<P: AsRef<Path>>(input_path: P) -> Self {
        ProcessingRequest {
            input_path: input_path.as_ref().to_path_buf(),
            output_directory: None,
            verbose: false,
        }
    }

    /// Set the output directory
    pub fn with_output_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set verbosity
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Get the input path
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Get the explicit output directory
    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    /// Whether verbose output was requested
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Directory the stems are written to.
    ///
    /// Defaults to a directory named after the input's file stem, next to
    /// the input file.
    pub fn output_root(&self) -> PathBuf {
        match &self.output_directory {
            Some(dir) => dir.clone(),
            None => {
                let parent = self.input_path.parent().unwrap_or_else(|| Path::new(""));
                parent.join(self.file_stem())
            }
        }
    }

    /// Output path for every stem, in [`Stem::ALL`] order
    pub fn planned_outputs(&self) -> Vec<PathBuf> {
        let root = self.output_root();
        let stem = self.file_stem();
        let suffix = self
            .input_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Stem::ALL
            .iter()
            .map(|s| root.join(format!("{}_{}{}", stem, s.name(), suffix)))
            .collect()
    }

    fn file_stem(&self) -> String {
        self.input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }
}

/// Progress notification emitted at a stage boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEvent {
    /// Human-readable stage description
    pub description: &'static str,
    /// Overall completion, 0.0 to 1.0
    pub fraction: f64,
}

impl StageEvent {
    /// Completion as a whole percentage (truncated)
    pub fn percent(&self) -> u64 {
        (self.fraction.clamp(0.0, 1.0) * 100.0) as u64
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Number of stems produced
    pub stem_count: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Output file per stem, in [`Stem::ALL`] order
    pub output_paths: Vec<PathBuf>,
}

impl ProcessingResult {
    /// Elapsed time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
