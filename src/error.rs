use std::fmt;

/// The main error type for INI parsing, file lookup and typed access.
#[derive(Debug, Clone, PartialEq)]
pub enum IniError {
    /// Raised when parse input is structurally malformed. `line` is 0 when
    /// the input was not text (e.g. a nested mapping).
    InvalidData {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by the file locator when no readable file exists at a path.
    FileNotFound {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a `section.key` path does not resolve.
    NotFound {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl IniError {
    pub fn code(&self) -> Option<u32> {
        match self {
            IniError::InvalidData { code, .. }
            | IniError::FileNotFound { code, .. }
            | IniError::FileError { code, .. }
            | IniError::NotFound { code, .. }
            | IniError::TypeError { code, .. }
            | IniError::ValidationError { code, .. } => *code,
        }
    }

    pub fn is_invalid_data(&self) -> bool {
        matches!(self, IniError::InvalidData { .. })
    }

    pub fn is_file_not_found(&self) -> bool {
        matches!(self, IniError::FileNotFound { .. })
    }
}

fn at_line(line: usize) -> String {
    if line > 0 {
        format!(" at line {}", line)
    } else {
        String::new()
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::InvalidData { message, line, hint, code } =>
                write!(f, "[INI] Invalid data{}: {}{}", at_line(*line), message, suffix(hint, code)),
            IniError::FileNotFound { message, path, hint, code } =>
                write!(f, "[INI] File not found '{}': {}{}", path, message, suffix(hint, code)),
            IniError::FileError { message, path, hint, code } =>
                write!(f, "[INI] File Error '{}': {}{}", path, message, suffix(hint, code)),
            IniError::NotFound { message, hint, code } =>
                write!(f, "[INI] Not found: {}{}", message, suffix(hint, code)),
            IniError::TypeError { message, line, hint, code } =>
                write!(f, "[INI] Type Error{}: {}{}", at_line(*line), message, suffix(hint, code)),
            IniError::ValidationError { message, line, hint, code } =>
                write!(f, "[INI] Validation Error{}: {}{}", at_line(*line), message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for IniError {}
