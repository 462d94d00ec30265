use crate::utils::error::{LabelError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A serial ends up both in the QR payload and in the output file name,
/// so an empty cell cannot produce a usable label.
pub fn validate_serial(row: usize, serial: &str) -> Result<()> {
    if serial.is_empty() {
        return Err(LabelError::ValidationError {
            message: format!("row {} has an empty Serial value", row),
        });
    }
    Ok(())
}
