use std::fmt;

/// The main error type for strata config loading and typed access.
///
/// The parser and the addressing layer never produce errors: malformed
/// lines, duplicate names and missing path segments all degrade to
/// "skipped" or "not found" (see `ParseReport` for the skipped-line
/// diagnostics). Errors surface only at the file boundary and when a
/// caller asks for a typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum StrataError {
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a stored value cannot be converted to the requested type.
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by typed getters when a dotted path does not resolve.
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for StrataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrataError::FileError { message, path, hint, code } =>
                write!(f, "[STRATA] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            StrataError::TypeError { message, hint, code } =>
                write!(f, "[STRATA] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            StrataError::NotFound { path, hint, code } =>
                write!(f, "[STRATA] Path '{}' not found in configuration{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for StrataError {}

impl StrataError {
    /// Helper for file-related errors when opening or saving documents.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn file_error(message: String, path: String) -> Self {
        StrataError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }

    pub fn not_found(path: &str) -> Self {
        StrataError::NotFound {
            path: path.to_string(),
            hint: Some("Check that the path exists in your config file".into()),
            code: Some(304),
        }
    }
}
