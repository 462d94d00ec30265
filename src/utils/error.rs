use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("QR encoding error: {0}")]
    QrError(#[from] qrcode::types::QrError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{path} not found")]
    InputNotFound { path: String },

    #[error("Font error ({path}): {message}")]
    FontError { path: String, message: String },

    #[error("Schema error: required column '{column}' not found (available: {available})")]
    SchemaError { column: String, available: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Row {index} ({serial}) failed: {source}")]
    RowFailed {
        index: usize,
        serial: String,
        #[source]
        source: Box<LabelError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Resource,
    Configuration,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl LabelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LabelError::InputNotFound { .. }
            | LabelError::CsvError(_)
            | LabelError::SchemaError { .. }
            | LabelError::ValidationError { .. } => ErrorCategory::Input,
            LabelError::FontError { .. } => ErrorCategory::Resource,
            LabelError::TomlError(_) | LabelError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            LabelError::ImageError(_)
            | LabelError::QrError(_)
            | LabelError::SerializationError(_) => ErrorCategory::Rendering,
            LabelError::IoError(_) => ErrorCategory::System,
            LabelError::RowFailed { source, .. } => source.category(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input
            | ErrorCategory::Configuration
            | ErrorCategory::Resource
            | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LabelError::InputNotFound { path } => format!("{} not found", path),
            LabelError::FontError { path, .. } => format!("Could not load font '{}'", path),
            LabelError::SchemaError { column, .. } => {
                format!("The input table has no '{}' column", column)
            }
            LabelError::RowFailed { index, serial, source } => format!(
                "Label {} ({}) could not be generated: {}",
                index,
                serial,
                source.user_friendly_message()
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LabelError::InputNotFound { .. } => {
                "Place the serial list at the configured data file path or pass --data-file"
            }
            LabelError::FontError { .. } => {
                "Put a TrueType/OpenType font at the configured font path or pass --font-path"
            }
            LabelError::SchemaError { .. } => "Add a header row with a 'Serial' column",
            LabelError::ValidationError { .. } | LabelError::CsvError(_) => {
                "Fix the offending row in the input table"
            }
            LabelError::TomlError(_) | LabelError::InvalidConfigValueError { .. } => {
                "Check the configuration values"
            }
            LabelError::IoError(_) => "Check that the paths involved exist and are accessible",
            LabelError::RowFailed { source, .. } => source.recovery_suggestion(),
            _ => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;
