pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::batch::BatchDriver;
pub use domain::model::{RunSummary, SerialRecord};
pub use utils::error::{LabelError, Result};
pub use utils::progress::{ConsoleReporter, NoopReporter};
