use crate::config::{DEFAULT_DATA_FILE, DEFAULT_FONT_PATH, DEFAULT_OUTPUT_DIR};
use crate::core::ConfigProvider;
use crate::utils::error::{LabelError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Run configuration loaded from a TOML file.
///
/// ```toml
/// [paths]
/// data_file = "${LABEL_ROOT}/serials.csv"
/// font_path = "./fonts/arial.ttf"
/// output_dir = "./export"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_font_path")]
    pub font_path: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            font_path: default_font_path(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_font_path() -> String {
    DEFAULT_FONT_PATH.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LabelError::InvalidConfigValueError {
                field: "config".to_string(),
                value: path.display().to_string(),
                reason: format!("cannot read config file: {}", e),
            })?;
        content.parse()
    }

    /// Replace `${VAR}` with the value of the environment variable.
    /// Unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LabelError::ValidationError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl FromStr for TomlConfig {
    type Err = LabelError;

    fn from_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_file(&self) -> &str {
        &self.paths.data_file
    }

    fn font_path(&self) -> &str {
        &self.paths.font_path
    }

    fn output_dir(&self) -> &str {
        &self.paths.output_dir
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.data_file", &self.paths.data_file)?;
        validate_path("paths.font_path", &self.paths.font_path)?;
        validate_path("paths.output_dir", &self.paths.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_paths() {
        let config: TomlConfig = r#"
[paths]
data_file = "/srv/labels/serials.csv"
font_path = "/srv/labels/font.otf"
output_dir = "/srv/labels/out"
"#
        .parse()
        .unwrap();

        assert_eq!(config.data_file(), "/srv/labels/serials.csv");
        assert_eq!(config.font_path(), "/srv/labels/font.otf");
        assert_eq!(config.output_dir(), "/srv/labels/out");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: TomlConfig = "[paths]\noutput_dir = \"./labels\"\n".parse().unwrap();
        assert_eq!(config.data_file(), DEFAULT_DATA_FILE);
        assert_eq!(config.font_path(), DEFAULT_FONT_PATH);
        assert_eq!(config.output_dir(), "./labels");

        let empty: TomlConfig = "".parse().unwrap();
        assert_eq!(empty.output_dir(), DEFAULT_OUTPUT_DIR);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SERIAL_QR_TEST_ROOT", "/tmp/qr-root");
        let config: TomlConfig = r#"
[paths]
data_file = "${SERIAL_QR_TEST_ROOT}/serials.csv"
output_dir = "${SERIAL_QR_UNSET_VARIABLE}/out"
"#
        .parse()
        .unwrap();
        std::env::remove_var("SERIAL_QR_TEST_ROOT");

        assert_eq!(config.data_file(), "/tmp/qr-root/serials.csv");
        assert_eq!(config.output_dir(), "${SERIAL_QR_UNSET_VARIABLE}/out");
    }

    #[test]
    fn test_invalid_toml() {
        let err = "[paths\n".parse::<TomlConfig>().unwrap_err();
        assert!(matches!(err, LabelError::TomlError(_)));
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config: TomlConfig = "[paths]\nfont_path = \"\"\n".parse().unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[paths]\ndata_file = \"input.csv\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_file(), "input.csv");
    }

    #[test]
    fn test_missing_config_file_is_a_configuration_error() {
        let err = TomlConfig::from_file("/nonexistent/serial-qr.toml").unwrap_err();

        assert!(matches!(err, LabelError::InvalidConfigValueError { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.recovery_suggestion(), "Check the configuration values");
    }
}
