// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::{Document, Section, Value};
use crate::export::render;
use crate::locator::{read_file, IniFileLocator};
use crate::parser::{self, ensure_valid_name};
use crate::IniError;

mod access;
mod validation;
mod conversion;
mod helpers;

/// A parsed INI document with typed, path-based access.
#[derive(Debug)]
pub struct IniConfig {
    document: Document,
    source: Option<PathBuf>,
    raw_content: String, // Store for error reporting
}

impl IniConfig {
    /// Load an INI file.
    ///
    /// # Example
    /// ```ignore
    /// let config = IniConfig::from_file("config.ini")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        Self::load(&IniFileLocator::new(), path.as_ref())
    }

    /// Load an INI file, looking it up relative to `base_dir` when it is not
    /// found as given.
    pub fn from_file_with_base<P: AsRef<Path>>(path: P, base_dir: P) -> Result<Self, IniError> {
        let locator = IniFileLocator::new().with_base_dir(base_dir.as_ref());
        Self::load(&locator, path.as_ref())
    }

    /// Load an INI file with fallback support
    ///
    /// Tries to load from the primary path first. If that file cannot be
    /// found, attempts to load from the fallback path. Parse errors in the
    /// primary file are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, IniError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(IniError::FileNotFound { .. }) => {
                tracing::debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "Primary config missing, trying fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    IniError::FileNotFound { message, .. } => IniError::FileNotFound {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(303),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    fn load(locator: &IniFileLocator, path: &Path) -> Result<Self, IniError> {
        let located = locator.locate(path)?;
        let content = read_file(&located)?;
        let document = parser::parse_ini_string(&content)?;

        Ok(Self {
            document,
            source: Some(located),
            raw_content: content,
        })
    }

    /// Parse an INI config from a string (no file I/O)
    pub fn from_str(content: &str) -> Result<Self, IniError> {
        Ok(Self {
            document: parser::parse_ini_string(content)?,
            source: None,
            raw_content: content.to_string(),
        })
    }

    /// Build a config from a decoded `section -> {key -> value}` mapping.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, IniError> {
        Ok(Self::from_document(parser::parse_array(value)?))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            source: None,
            raw_content: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// File the config was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Set `key` in `section`, creating the section if needed.
    pub fn set<V: Into<Value>>(&mut self, section: &str, key: &str, value: V) -> Result<(), IniError> {
        ensure_valid_name(section, None, 0)?;
        ensure_valid_name(key, Some(section), 0)?;
        self.document.section_entry(section).insert(key, value.into());
        Ok(())
    }

    pub fn remove(&mut self, section: &str, key: &str) -> Option<Value> {
        self.document.section_mut(section)?.remove(key)
    }

    pub fn remove_section(&mut self, section: &str) -> Option<Section> {
        self.document.remove_section(section)
    }

    pub fn to_ini_string(&self) -> String {
        render(&self.document)
    }

    /// Render the config and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        fs::write(path, self.to_ini_string()).map_err(|e| IniError::FileError {
            message: format!("Failed to write file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(305),
        })?;
        tracing::debug!(path = %path.display(), "Saved INI config");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
