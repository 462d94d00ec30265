use crate::core::Storage;
use crate::utils::error::{LabelError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Writes files into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn location(&self) -> &Path {
        &self.base_path
    }

    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// `name` must be a plain file name; files only ever land directly
    /// in the storage root.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(LabelError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a plain file name", name),
            )));
        }

        let full_path = self.base_path.join(name);
        fs::write(&full_path, data)?;
        Ok(full_path)
    }
}
