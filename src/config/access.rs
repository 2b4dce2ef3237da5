use super::*;

impl IniConfig {
    /// Get a typed value using `section.key` notation.
    ///
    /// Both `snake_case` and `kebab-case` spellings of a name are accepted.
    /// Section and key names may themselves contain dots; every split point
    /// is tried from left to right.
    ///
    /// # Examples
    /// ```no_run
    /// # use ini_cfg::IniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = IniConfig::from_file("config.ini")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let debug: bool = config.get("app.debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, IniError>
    where
        T: TryFrom<Value, Error = IniError>
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| {
            enhance_error_with_line_info(e, path, &self.raw_content)
        })
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, IniError>
    where
        T: TryFrom<Value, Error = IniError>
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(IniError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use ini_cfg::IniConfig;
    /// # let config = IniConfig::from_file("config.ini").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// let debug = config.get_or("app.debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = IniError>
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` by `section.key` path.
    pub fn get_value(&self, path: &str) -> Result<Value, IniError> {
        self.lookup(path).cloned().ok_or_else(|| IniError::NotFound {
            message: format!("Path '{}' not found in configuration", path),
            hint: Some("Paths look like section.key".into()),
            code: Some(304),
        })
    }

    /// Section names in document order.
    pub fn sections(&self) -> Vec<String> {
        self.document.section_names().map(String::from).collect()
    }

    pub fn get_section(&self, name: &str) -> Option<&Section> {
        variants(name)
            .iter()
            .find_map(|candidate| self.document.section(candidate))
    }

    /// Get all keys of a section.
    pub fn get_keys(&self, section: &str) -> Result<Vec<String>, IniError> {
        self.get_section(section)
            .map(|s| s.keys().map(String::from).collect())
            .ok_or_else(|| IniError::NotFound {
                message: format!("Section '{}' not found in configuration", section),
                hint: Some(format!("Known sections: {}", self.sections().join(", "))),
                code: Some(306),
            })
    }

    /// Check if a `section.key` path exists.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.match_indices('.').find_map(|(idx, _)| {
            let (section, key) = (&path[..idx], &path[idx + 1..]);
            let section = self.get_section(section)?;
            variants(key).iter().find_map(|candidate| section.get(candidate))
        })
    }
}

/// `name` itself, then its snake_case and kebab-case spellings.
pub(super) fn variants(name: &str) -> Vec<String> {
    let mut out = vec![name.to_string()];
    for candidate in [name.replace('-', "_"), name.replace('_', "-")] {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Enhance type/validation errors with line number information from the config text.
pub(super) fn enhance_error_with_line_info(e: IniError, path: &str, raw_content: &str) -> IniError {
    match e {
        IniError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                IniError::TypeError {
                    message: format!("{} for `{}`\n  → {}", message, path, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                IniError::TypeError { message: format!("{} for `{}`", message, path), line: 0, hint, code }
            }
        }
        other => other,
    }
}
