// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::IniError;

/// Maps a path-like name to a readable INI file.
///
/// A path is tried as given first (after `~/` expansion) and then, if it is
/// relative, against the configured base directory.
#[derive(Debug, Clone, Default)]
pub struct IniFileLocator {
    base_dir: Option<PathBuf>,
}

impl IniFileLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir<P: Into<PathBuf>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Resolve `path` to an existing file.
    ///
    /// # Errors
    /// `FileNotFound` naming the path when no candidate is a file.
    pub fn locate<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, IniError> {
        let raw = path.as_ref();
        let expanded = expand_home(raw)?;

        let mut candidates = vec![expanded.clone()];
        if expanded.is_relative() {
            if let Some(base) = &self.base_dir {
                candidates.push(base.join(&expanded));
            }
        }

        for candidate in &candidates {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Located INI file");
                return Ok(candidate.clone());
            }
        }

        let tried: Vec<String> = candidates.iter().map(|c| c.display().to_string()).collect();
        Err(IniError::FileNotFound {
            message: format!("No readable file found (tried {})", tried.join(", ")),
            path: raw.display().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(300),
        })
    }

    /// Locate `path` and read it into a string.
    pub fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<String, IniError> {
        read_file(&self.locate(path)?)
    }
}

/// Read an already located file.
pub(crate) fn read_file(located: &Path) -> Result<String, IniError> {
    fs::read_to_string(located).map_err(|e| IniError::FileError {
        message: format!("Failed to read file: {}", e),
        path: located.display().to_string(),
        hint: Some("Check that the file is readable UTF-8 text".into()),
        code: Some(301),
    })
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &Path) -> Result<PathBuf, IniError> {
    let Ok(rest) = raw.strip_prefix("~") else {
        return Ok(raw.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| IniError::FileNotFound {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw.display().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(302),
    })?;
    Ok(home.join(rest))
}
