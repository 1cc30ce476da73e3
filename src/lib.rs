pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{
    directory::build_directory, etl::EtlEngine, normalize::format_phone,
    pipeline::DirectoryPipeline, render::render_directory,
};
pub use domain::model::{Directory, DirectoryEntry, DirectoryOutcome, RunOutcome};
pub use utils::error::{DirectoryError, Result};
