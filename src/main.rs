use clap::Parser;
use roman_numeral::core::ConfigProvider;
use roman_numeral::utils::error::ErrorCategory;
use roman_numeral::utils::{logger, validation::Validate};
use roman_numeral::{CliConfig, NumeralServer, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 有指定設定檔時以 TOML 為準，--verbose / --json-logs 仍然有效
    let toml_config = match cli.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let json_logs = cli.json_logs || toml_config.as_ref().is_some_and(TomlConfig::json_logs);
    let level = toml_config.as_ref().and_then(TomlConfig::log_level);
    if json_logs {
        logger::init_json_logger(if cli.verbose { Some("debug") } else { level });
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting roman-numeral v{}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match toml_config {
        Some(config) => {
            tracing::info!("📁 Using configuration file: {}", cli.config.as_deref().unwrap_or_default());
            serve(config).await
        }
        None => serve(cli).await,
    }
}

async fn serve<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let server = NumeralServer::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
