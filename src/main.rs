use anyhow::Context;
use clap::Parser;
use console_calc::core::ConfigProvider;
use console_calc::utils::logger;
use console_calc::{
    resolve_settings, ArithmeticEvaluator, CliConfig, Console, Shell, ShellSettings,
};

/// Settings file first, then command-line overrides.
fn load_settings(config: &CliConfig) -> console_calc::Result<ShellSettings> {
    let file = config.load_file()?;

    let mut layers: Vec<&dyn ConfigProvider> = Vec::new();
    if let Some(file) = &file {
        layers.push(file);
    }
    layers.push(config);
    resolve_settings(&layers)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout(), std::io::stderr());
    let mut shell = Shell::new(ArithmeticEvaluator::new(), console, settings);

    let summary = shell.run().context("calculator session failed")?;
    tracing::debug!("Exiting after {} operations", summary.operations_completed);

    Ok(())
}
