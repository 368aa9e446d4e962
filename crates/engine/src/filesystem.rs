use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};

const TEXT_SUFFIX: &str = ".txt";

/// Checks a single input: it must end in `.txt` and exist.
///
/// # Errors
/// [`EngineError::NotText`] for a wrong suffix, [`EngineError::FileStat`] if
/// the path cannot be inspected.
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.to_string_lossy().ends_with(TEXT_SUFFIX) {
        return Err(EngineError::NotText {
            path: path.to_path_buf(),
        });
    }

    std::fs::metadata(path).map_err(|e| EngineError::FileStat {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validates every input before any of them is read.
///
/// # Errors
/// Returns the first failing path's error.
pub fn validate_inputs(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(EngineError::Config(
            "at least one input file is required".to_string(),
        ));
    }
    paths.iter().try_for_each(|p| validate_input(p))
}
