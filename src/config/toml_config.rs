use crate::config::{DEFAULT_FILE_NAME, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub file_name: Option<String>,
    pub table: Option<bool>,
    pub pretty_json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    /// `compact`（預設）或 `json`
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAYLOAD_PATH})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }

    pub fn validate_config(&self) -> Result<()> {
        let input = validation::validate_required_field("input.path", &self.input.path)?;
        validation::validate_input_path("input.path", input)?;
        validation::validate_path("output.path", self.output_path())?;
        validation::validate_file_name("output.file_name", self.file_name())?;

        if let Some(format) = &self.logging.format {
            if !["compact", "json"].contains(&format.as_str()) {
                return Err(DirectoryError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn file_name(&self) -> &str {
        self.output.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    fn table_enabled(&self) -> bool {
        self.output.table.unwrap_or(false)
    }

    fn pretty_json_enabled(&self) -> bool {
        self.output.pretty_json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
