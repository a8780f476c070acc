//! Input file validation

use crate::core::AudioFormat;
use crate::error::{SeparateError, SeparateResult};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of validating an input path
#[derive(Debug)]
pub struct ValidationResult {
    error: Option<SeparateError>,
}

impl ValidationResult {
    fn valid() -> Self {
        ValidationResult { error: None }
    }

    fn invalid(error: SeparateError) -> Self {
        ValidationResult { error: Some(error) }
    }

    /// Whether the input can be processed
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable reason for rejection, empty when valid
    pub fn reason(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// The rejection error, if any
    pub fn error(&self) -> Option<&SeparateError> {
        self.error.as_ref()
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> SeparateResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Check that `path` is an existing file with a recognized audio extension.
///
/// Only file metadata is consulted; the content is never read. Filesystem
/// failures are reported as an invalid result rather than returned as errors.
pub fn validate<P: AsRef<Path>>(path: P) -> ValidationResult {
    let path = path.as_ref();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if is_missing(path, &e) => {
            debug!("validation failed: {} does not exist ({})", path.display(), e);
            return ValidationResult::invalid(SeparateError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            debug!("validation failed: cannot stat {}: {}", path.display(), e);
            return ValidationResult::invalid(SeparateError::Inaccessible {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if !metadata.is_file() {
        debug!("validation failed: {} is not a regular file", path.display());
        return ValidationResult::invalid(SeparateError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    match AudioFormat::from_extension(&extension) {
        Some(format) => {
            debug!("validated {} as {:?}", path.display(), format);
            ValidationResult::valid()
        }
        None => {
            debug!("validation failed: unsupported extension {:?}", extension);
            ValidationResult::invalid(SeparateError::UnsupportedFormat { extension })
        }
    }
}

/// A path that cannot be resolved to an existing entry counts as missing:
/// absent components, a file used as a directory, or a symlink whose target
/// cannot be reached (dangling or looping).
fn is_missing(path: &Path, err: &io::Error) -> bool {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => true,
        _ => fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = validate(dir.path().join("missing.mp3"));

        assert!(!result.is_valid());
        assert!(result.reason().contains("not found"));
        assert!(matches!(
            result.error(),
            Some(SeparateError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_recognized_extensions() {
        let dir = TempDir::new().unwrap();
        for name in ["a.mp3", "b.wav", "c.flac", "d.ogg", "e.m4a", "F.MP3", "g.Wav"] {
            let result = validate(touch(&dir, name));
            assert!(result.is_valid(), "{name} should be valid");
            assert_eq!(result.reason(), "");
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let result = validate(touch(&dir, "notes.txt"));

        assert!(!result.is_valid());
        assert!(result.reason().contains("Unsupported"));
        assert!(result.reason().contains(".txt"));
    }

    #[test]
    fn test_no_extension() {
        let dir = TempDir::new().unwrap();
        let result = validate(touch(&dir, "README"));

        assert!(!result.is_valid());
        assert!(result.reason().contains("(none)"));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("album.mp3");
        std::fs::create_dir(&nested).unwrap();

        let result = validate(&nested);
        assert!(!result.is_valid());
        assert!(matches!(result.error(), Some(SeparateError::NotAFile { .. })));
    }

    #[test]
    fn test_file_used_as_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let file = touch(&dir, "song.mp3");
        let result = validate(file.join("missing.mp3"));

        assert!(!result.is_valid());
        assert!(result.reason().contains("not found"));
        assert!(matches!(
            result.error(),
            Some(SeparateError::InputNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_not_found() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.mp3");
        let b = dir.path().join("b.mp3");
        std::os::unix::fs::symlink(&b, &a).unwrap();
        std::os::unix::fs::symlink(&a, &b).unwrap();

        let result = validate(&a);
        assert!(!result.is_valid());
        assert!(result.reason().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_found() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link.wav");
        std::os::unix::fs::symlink(dir.path().join("gone.wav"), &link).unwrap();

        assert!(validate(&link).reason().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_metadata_failure_becomes_invalid_result() {
        let dir = TempDir::new().unwrap();
        let long_name = format!("{}.mp3", "a".repeat(300));
        let result = validate(dir.path().join(long_name));

        assert!(!result.is_valid());
        assert!(result.reason().starts_with("Cannot access"));
        assert!(matches!(
            result.error(),
            Some(SeparateError::Inaccessible { .. })
        ));
    }

    #[test]
    fn test_into_result() {
        let dir = TempDir::new().unwrap();
        assert!(validate(touch(&dir, "song.ogg")).into_result().is_ok());
        assert!(validate(dir.path().join("gone.ogg")).into_result().is_err());
    }
}
