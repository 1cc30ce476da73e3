pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_FILE_NAME: &str = crate::domain::model::Directory::FILE_NAME;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "employee-directory")]
#[command(about = "Build an employee phone number directory from a department JSON payload")]
pub struct CliConfig {
    /// JSON payload to read (`-` for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory the output files are written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// File name of the rendered directory
    #[arg(long)]
    pub file_name: Option<String>,

    /// Also write a CSV table preview of the parsed employees
    #[arg(long)]
    pub table: bool,

    /// Also write the parsed payload as pretty-printed JSON
    #[arg(long)]
    pub pretty_json: bool,

    /// Print the rendered directory to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Optional TOML configuration file; explicit flags take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 套用命令列覆蓋設定到 TOML 配置
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(input) = &self.input {
            config.input.path = Some(input.clone());
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = Some(output_path.clone());
        }
        if let Some(file_name) = &self.file_name {
            config.output.file_name = Some(file_name.clone());
        }
        if self.table {
            config.output.table = Some(true);
        }
        if self.pretty_json {
            config.output.pretty_json = Some(true);
        }
        if self.verbose {
            config.logging.verbose = Some(true);
        }
        if self.log_json {
            config.logging.format = Some("json".to_string());
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    fn table_enabled(&self) -> bool {
        self.table
    }

    fn pretty_json_enabled(&self) -> bool {
        self.pretty_json
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validation::validate_required_field("input", &self.input)?;
        validation::validate_input_path("input", input)?;
        validation::validate_path("output_path", self.output_path())?;
        validation::validate_file_name("file_name", self.file_name())?;
        Ok(())
    }
}
