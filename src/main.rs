use clap::Parser;
use employee_directory::core::ConfigProvider;
use employee_directory::utils::error::ErrorSeverity;
use employee_directory::utils::{logger, validation::Validate};
use employee_directory::{
    CliConfig, DirectoryPipeline, EtlEngine, LocalStorage, RunOutcome, TomlConfig,
};
use std::io::Write;

/// 沒有任何可用員工資料時的結束代碼
const EXIT_NO_ENTRIES: i32 = 4;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 有指定 TOML 時先載入，命令列參數優先
    let toml = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                cli.apply_overrides(&mut config);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let (verbose, json_logs) = match &toml {
        Some(config) => (config.verbose(), config.json_logs()),
        None => (cli.verbose, cli.log_json),
    };
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting employee-directory");
    tracing::debug!("CLI config: {:?}", cli);

    let exit_code = match toml {
        Some(config) => run(config, cli.stdout).await,
        None => {
            let print_stdout = cli.stdout;
            run(cli, print_stdout).await
        }
    };

    std::process::exit(exit_code);
}

async fn run<C: ConfigProvider + Validate>(config: C, print_stdout: bool) -> i32 {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    let storage = LocalStorage::default();
    let pipeline = DirectoryPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(RunOutcome::Written { paths, markdown }) => {
            if print_stdout {
                print!("{}", markdown);
                if let Err(e) = std::io::stdout().flush() {
                    tracing::warn!("Failed to flush stdout: {}", e);
                }
            }
            for path in &paths {
                eprintln!("📁 Output saved to: {}", path);
            }
            0
        }
        Ok(RunOutcome::NoEntries { paths }) => {
            for path in &paths {
                eprintln!("📁 Output saved to: {}", path);
            }
            eprintln!("⚠️ No employees found under `department_employees`.");
            EXIT_NO_ENTRIES
        }
        Err(e) => {
            tracing::error!(
                "❌ Directory build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    }
}
