use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Duplicate office id: {id}")]
    DuplicateOfficeId { id: String },

    #[error("Office not found: {id}")]
    NotFound { id: String },

    #[error("Missing {language} translation for {field}")]
    MissingTranslation { field: String, language: String },

    #[error("Office catalog is empty")]
    EmptyCatalog,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Selection,
    Localization,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateOfficeId { .. } | Self::EmptyCatalog => ErrorCategory::Catalog,
            Self::NotFound { .. } => ErrorCategory::Selection,
            Self::MissingTranslation { .. } => ErrorCategory::Localization,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // the previous selection is kept
            Self::NotFound { .. } => ErrorSeverity::Low,
            Self::MissingTranslation { .. } => ErrorSeverity::Medium,
            Self::DuplicateOfficeId { .. }
            | Self::EmptyCatalog
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DuplicateOfficeId { id } => {
                format!("Two offices share the id '{}'", id)
            }
            Self::NotFound { id } => format!("There is no office with id '{}'", id),
            Self::MissingTranslation { field, language } => {
                format!("The {} text has no '{}' translation", field, language)
            }
            Self::EmptyCatalog => "The office catalog does not list any office".to_string(),
            Self::IoError(e) => format!("Could not read a file: {}", e),
            Self::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Catalog => {
                "Give every office a unique id (or a unique city when the id is derived)"
            }
            ErrorCategory::Selection => "Pick one of the ids listed in the catalog",
            ErrorCategory::Localization => "Fill in both the 'es' and 'en' strings",
            ErrorCategory::Configuration => "Check the catalog TOML file against the documented layout",
            ErrorCategory::System => "Check file paths and permissions, then retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_errors_are_recoverable() {
        let err = DirectoryError::NotFound {
            id: "paris".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Selection);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("paris"));
    }

    #[test]
    fn test_catalog_errors_are_fatal_to_initialization() {
        let err = DirectoryError::DuplicateOfficeId {
            id: "dallas".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert!(err.severity() >= ErrorSeverity::High);
        assert_eq!(err.to_string(), "Duplicate office id: dallas");
    }

    #[test]
    fn test_json_errors_convert_to_serialization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DirectoryError::from(json_err);
        assert!(matches!(err, DirectoryError::SerializationError(_)));
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.user_friendly_message().starts_with("Could not produce JSON output"));
    }
}
