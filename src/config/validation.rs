use super::*;
use super::access::{enhance_error_with_line_info, variants};
use crate::typed::{item_value_to_string, StringRepr};

impl IniConfig {
    /// Check that every `section.key` path in `paths` is present.
    ///
    /// All missing paths are reported together, in the order given.
    pub fn require(&self, paths: &[&str]) -> Result<(), IniError> {
        let missing: Vec<&str> = paths.iter().copied().filter(|p| !self.has(p)).collect();
        if missing.is_empty() {
            return Ok(());
        }

        Err(IniError::ValidationError {
            message: format!("Missing required item(s): {}", missing.join(", ")),
            line: 0,
            hint: Some(format!(
                "Add the item(s) under their section, e.g. [{}]",
                missing[0].rsplit_once('.').map_or(missing[0], |(section, _)| section)
            )),
            code: Some(450),
        })
    }

    /// Reject keys in `section` that are not listed in `known`.
    ///
    /// Keys match in either snake_case or kebab-case spelling. The error
    /// points at the first unknown key in file order.
    pub fn check_keys(&self, section: &str, known: &[&str]) -> Result<(), IniError> {
        let found = self.get_section(section).ok_or_else(|| IniError::NotFound {
            message: format!("Section '{}' not found in configuration", section),
            hint: Some(format!("Known sections: {}", self.sections().join(", "))),
            code: Some(306),
        })?;

        let unknown = found
            .keys()
            .find(|key| !variants(key).iter().any(|v| known.contains(&v.as_str())));

        match unknown {
            None => Ok(()),
            Some(key) => {
                let path = format!("{}.{}", found.name(), key);
                let (line, snippet) = helpers::find_config_line(&path, &self.raw_content);
                Err(IniError::ValidationError {
                    message: format!("Unknown key '{}' in section [{}]", key, found.name()),
                    line,
                    hint: Some(format!("Known keys: {}\n  → {}", known.join(", "), snippet)),
                    code: Some(451),
                })
            }
        }
    }

    /// Get a scalar item as one of `choices`, compared case-insensitively on
    /// its text form, and return the matching choice as spelled in `choices`.
    ///
    /// Typed values compare by how they render, so `mode = 1` matches `"1"`
    /// and `verbose = yes` (a boolean) matches `"true"`.
    pub fn get_choice(&self, path: &str, choices: &[&str]) -> Result<String, IniError> {
        let value = self.get_value(path)?;
        let text = match item_value_to_string(&value) {
            StringRepr::Scalar(text) => text,
            StringRepr::List(_) => {
                return Err(enhance_error_with_line_info(
                    IniError::TypeError {
                        message: "Expected a single value, found a list".into(),
                        line: 0,
                        hint: Some("Write the item once, without `[]`".into()),
                        code: Some(410),
                    },
                    path,
                    &self.raw_content,
                ));
            }
        };

        if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&text)) {
            return Ok(choice.to_string());
        }

        let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
        Err(IniError::ValidationError {
            message: format!("'{}' is not a valid choice for `{}`", text, path),
            line,
            hint: Some(format!("Choose one of: {}\n  → {}", choices.join(" | "), snippet)),
            code: Some(452),
        })
    }
}
