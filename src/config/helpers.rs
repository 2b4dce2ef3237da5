/// Find the line of `section.key` in the raw INI text, for error messages.
///
/// Returns `(0, "<key not found>")` when the path does not appear, which is
/// also the case for configs that were not built from text.
pub(super) fn find_config_line(path: &str, raw_content: &str) -> (usize, String) {
    let mut section = String::new();

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            section = name.trim().to_string();
            continue;
        }

        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let key = key.strip_suffix("[]").unwrap_or(key).trim_end();

        if path == format!("{}.{}", section, key) {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}
