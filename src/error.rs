use thiserror::Error;
use tracing::{error, warn};

/// Error severity for user-facing display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable
    Error,    // operation failed
    Critical, // programming error, should never reach a user
}

/// Domain-specific errors for settings-kit
#[derive(Error, Debug)]
pub enum SettingsKitError {
    #[error("Search pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unknown setting '{name}' in category '{category}'")]
    UnknownSetting { category: String, name: String },

    #[error("Setting '{category}/{name}' is not of type {expected}")]
    TypeMismatch {
        category: String,
        name: String,
        expected: &'static str,
    },

    #[error("Invalid resolution '{0}'")]
    InvalidResolution(String),

    #[error("I/O failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SettingsKitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Pattern(_) => ErrorSeverity::Critical,
            Self::UnknownSetting { .. } => ErrorSeverity::Warning,
            Self::TypeMismatch { .. } => ErrorSeverity::Error,
            Self::InvalidResolution(_) => ErrorSeverity::Warning,
            Self::Io { .. } => ErrorSeverity::Error,
            Self::Json { .. } => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Pattern(_) => "Search is unavailable".to_string(),
            Self::UnknownSetting { category, name } => {
                format!("No setting named '{}' in [{}]", name, category)
            }
            Self::TypeMismatch {
                category,
                name,
                expected,
            } => format!("[{}] {} expects a {} value", category, name, expected),
            Self::InvalidResolution(text) => format!("'{}' is not a resolution", text),
            Self::Io { path, .. } => format!("Could not access {}", path),
            Self::Json { path, .. } => format!("Could not parse {}", path),
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsKitError>;

/// `map_err` adapter attaching `path` to an I/O error
pub(crate) fn io_error(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> SettingsKitError {
    let path = path.display().to_string();
    move |source| SettingsKitError::Io { path, source }
}

/// `map_err` adapter attaching `path` to a JSON error
pub(crate) fn json_error(
    path: &std::path::Path,
) -> impl FnOnce(serde_json::Error) -> SettingsKitError {
    let path = path.display().to_string();
    move |source| SettingsKitError::Json { path, source }
}

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use settings_kit::error::ResultExt;
///
/// let state = BrushState::load(&path).log_err();
/// let catalog = load_catalog(&path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// Use for "impossible" states that should crash during development
/// but degrade in production, e.g. a search pattern built from escaped
/// tokens that still fails to compile.
///
/// ```ignore
/// let search = match WordSearch::new(query) {
///     Ok(search) => search,
///     Err(err) => {
///         settings_kit::debug_panic!("escaped query failed to compile: {}", err);
///         return Vec::new();
///     }
/// };
/// ```
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_of_pattern_error_is_critical() {
        let err = regex::Regex::new("(").unwrap_err();
        let err = SettingsKitError::from(err);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.user_message(), "Search is unavailable");
    }

    #[test]
    fn test_unknown_setting_message_names_category() {
        let err = SettingsKitError::UnknownSetting {
            category: "Video".to_string(),
            name: "vsync".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.user_message(), "No setting named 'vsync' in [Video]");
        assert_eq!(
            err.to_string(),
            "Unknown setting 'vsync' in category 'Video'"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = SettingsKitError::TypeMismatch {
            category: "Water".to_string(),
            name: "rtt size".to_string(),
            expected: "int",
        };
        assert_eq!(
            err.to_string(),
            "Setting 'Water/rtt size' is not of type int"
        );
    }

    #[test]
    fn test_result_ext_passes_through_ok() {
        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
        let err: std::result::Result<u32, String> = Err("boom".to_string());
        assert_eq!(err.warn_on_err(), None);
    }
}
