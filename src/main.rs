use anyhow::Result;
use clap::Parser;

use artisan_ai::cli::Cli;
use artisan_ai::client::load_env_file;
use artisan_ai::utils::error::{AppError, report_error};
use artisan_ai::utils::logging::init_logging;
use artisan_ai::utils::OutputStyle;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    load_env_file();

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err))),
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    let config = cli.load_config()?;

    if !config.general.color {
        colored::control::set_override(false);
    }

    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let interactive = cli.interactive || config.general.interactive;
    cli.command.execute(config, config_path, interactive).await
}
