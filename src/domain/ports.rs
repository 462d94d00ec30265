use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Directory the files end up in.
    fn location(&self) -> &Path;

    /// Create the storage root if it does not exist yet.
    fn ensure_root(&self) -> Result<()>;

    /// Write `data` under `name`, replacing any previous file.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn font_path(&self) -> &str;
    fn output_dir(&self) -> &str;
}

/// Receives progress events from the batch driver.
pub trait ProgressReporter {
    fn started(&self, total: usize);
    fn row(&self, index: usize, total: usize, serial: &str);
    fn finished(&self, summary: &RunSummary);
}
