use crate::config::Config;
use crate::utils;
use crate::cli::ConfigCommands;
use crate::client::GOOGLE_API_KEY_ENV;
use crate::utils::error::AppResult;
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Init) => handle_init_command(config_path),
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    println!("⚙️  ArtisanConnect AI Configuration");
    println!("=================================");
    println!("File: {}", config_path.display());

    println!("Model:");
    println!("  Name: {}", config.model.model);
    println!("  Temperature: {}", config.model.temperature);

    println!("API:");
    println!("  Base URL: {}", config.api.base_url);
    println!("  Timeout: {}s", config.api.timeout_secs);
    let credential_source = if config.api.api_key.is_some() {
        "config file ✓".to_string()
    } else if config.credential().is_some() {
        format!("{} ✓", GOOGLE_API_KEY_ENV)
    } else {
        format!("not set (export {})", GOOGLE_API_KEY_ENV)
    };
    println!("  API key: {}", credential_source);

    println!("General:");
    println!("  Color: {}", config.general.color);
    println!("  Interactive: {}", config.general.interactive);

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  artisan-ai config show    - Show current configuration");
    println!("  artisan-ai config path    - Print the configuration file location");
    println!("  artisan-ai config init    - Create the configuration file with defaults");
    println!("  artisan-ai config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_init_command(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        utils::print_warning(&format!("Configuration already exists at {}", config_path.display()));
        return Ok(());
    }
    Config::default().save_to(config_path)?;
    utils::print_success(&format!("Configuration written to {}", config_path.display()));
    Ok(())
}

/// Overwrite the file with defaults, whatever it currently contains
pub fn reset_to_defaults(config_path: &Path) -> AppResult<()> {
    Config::default().save_to(config_path)
}

fn handle_reset_command(config_path: &Path) -> Result<()> {
    if utils::prompt_yes_no("Are you sure you want to reset configuration to defaults? This will overwrite your current settings.")? {
        reset_to_defaults(config_path)?;
        utils::print_success("Configuration reset to defaults!");
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_repairs_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\ntemperature = 5.0\n").unwrap();
        assert!(Config::load_custom(&path).is_err());

        reset_to_defaults(&path).unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\nname = \"custom\"\n").unwrap();

        handle_init_command(&path).unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.model.model, "custom");
    }
}
