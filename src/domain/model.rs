use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Header of the column holding the serial numbers.
pub const SERIAL_COLUMN: &str = "Serial";

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialRecord {
    #[serde(rename = "Serial")]
    pub serial: String,
}

impl SerialRecord {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
        }
    }

    /// Text encoded in the QR symbol and drawn as the label.
    pub fn payload(&self) -> String {
        self.serial.to_uppercase()
    }

    /// Output file name; keeps the casing found in the input.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.serial)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub output_dir: String,
    pub files: Vec<PathBuf>,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
