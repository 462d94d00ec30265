pub mod cli;
pub mod toml_config;

pub const DEFAULT_DATA_FILE: &str = "./data/serials.csv";
pub const DEFAULT_FONT_PATH: &str = "./fonts/arial.ttf";
pub const DEFAULT_OUTPUT_DIR: &str = "./export";

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "serial-qr")]
#[command(about = "Generate labeled QR code images from a list of serial numbers")]
pub struct CliConfig {
    /// CSV file with a `Serial` column
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    /// TrueType/OpenType font used for the label
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    pub font_path: String,

    /// Directory the PNG files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// TOML file whose [paths] table replaces the path options above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "Do not print per-row progress")]
    pub quiet: bool,

    #[arg(long, help = "Print the run summary as JSON")]
    pub summary_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn font_path(&self) -> &str {
        &self.font_path
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)?;
        validate_path("font_path", &self.font_path)?;
        validate_path("output_dir", &self.output_dir)
    }
}
