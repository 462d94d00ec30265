use std::fs;
use std::path::{Path, PathBuf};

use crate::core::label::{self, LabelFont};
use crate::core::{qr, table, writer};
use crate::core::{ConfigProvider, ProgressReporter, Storage};
use crate::domain::model::{RunSummary, SerialRecord};
use crate::utils::error::{LabelError, Result};

/// Runs the encode, compose and write steps for every row of the input
/// table, one row at a time. The first failing row aborts the run.
pub struct BatchDriver<S: Storage, C: ConfigProvider, R: ProgressReporter> {
    storage: S,
    config: C,
    reporter: R,
}

impl<S: Storage, C: ConfigProvider, R: ProgressReporter> BatchDriver<S, C, R> {
    pub fn new(storage: S, config: C, reporter: R) -> Self {
        Self {
            storage,
            config,
            reporter,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting label generation");

        self.ensure_directories()?;
        let records = table::load_serials(self.config.data_file())?;
        let font = LabelFont::load(self.config.font_path())?;

        let total = records.len();
        self.reporter.started(total);

        let mut files = Vec::with_capacity(total);
        for (i, record) in records.iter().enumerate() {
            let index = i + 1;
            self.reporter.row(index, total, &record.serial);

            match self.render_row(record, &font) {
                Ok(path) => files.push(path),
                Err(source) => {
                    tracing::error!("Row {} ({}) failed, aborting", index, record.serial);
                    return Err(LabelError::RowFailed {
                        index,
                        serial: record.serial.clone(),
                        source: Box::new(source),
                    });
                }
            }
        }

        let summary = RunSummary {
            processed: files.len(),
            output_dir: self.storage.location().display().to_string(),
            files,
        };
        tracing::info!("Generated {} labels", summary.processed);
        self.reporter.finished(&summary);

        Ok(summary)
    }

    /// Encode, compose and write the label for a single record.
    pub fn render_row(&self, record: &SerialRecord, font: &LabelFont) -> Result<PathBuf> {
        let payload = record.payload();
        let matrix = qr::encode(&payload)?;
        let composed = label::compose(&matrix.to_image(), &payload, font);
        writer::finalize(&self.storage, composed, &record.file_name())
    }

    /// Create the data, font and output directories if they are missing.
    pub fn ensure_directories(&self) -> Result<()> {
        for file in [self.config.data_file(), self.config.font_path()] {
            if let Some(parent) = Path::new(file).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        self.storage.ensure_root()
    }
}
