use clap::{Parser, Subcommand, Args};
use std::path::PathBuf;
use anyhow::Result;
use tracing::warn;
use crate::config::Config;
use crate::commands::{buyer, catalog, configure, product, trends};
use crate::core::data::{PriceRange, StylePreference, Tone, Urgency};
use crate::utils::error::AppResult;
use crate::utils::print_warning;

#[derive(Parser)]
#[command(name = "artisan-ai")]
#[command(about = "AI-powered marketplace assistant for artisan sellers")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(short = 'i', long, global = true, help = "Prompt for any form field not given on the command line")]
    pub interactive: bool,

    #[arg(long, global = true, help = "Model identifier (overrides config)")]
    pub model: Option<String>,

    #[arg(long, global = true, help = "Sampling temperature (overrides config)")]
    pub temperature: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_file_path)
    }

    /// Load the configuration and apply the command-line overrides.
    ///
    /// `config` subcommands get the defaults plus a warning when the file or an
    /// override is invalid, so `config reset` stays usable.
    pub fn load_config(&self) -> AppResult<Config> {
        let path = self.config_path();
        if !matches!(self.command, Commands::Config(_)) {
            let mut config = Config::load_custom(&path)?;
            config.apply_overrides(self.model.clone(), self.temperature)?;
            return Ok(config);
        }

        let mut config = Config::load_custom(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "falling back to default configuration");
            print_warning(&format!("{}; using defaults", err));
            Config::default()
        });

        let mut overridden = config.clone();
        match overridden.apply_overrides(self.model.clone(), self.temperature) {
            Ok(()) => config = overridden,
            Err(err) => print_warning(&format!("Ignoring command-line overrides: {}", err)),
        }
        Ok(config)
    }
}

impl Commands {
    pub async fn execute(self, config: Config, config_path: PathBuf, interactive: bool) -> Result<()> {
        match self {
            Commands::Optimize(args) => {
                product::handle_optimize_command(&config, args, interactive).await?;
            }
            Commands::Listing(args) => {
                product::handle_listing_command(&config, args, interactive).await?;
            }
            Commands::Pricing(args) => {
                product::handle_pricing_command(&config, args, interactive).await?;
            }
            Commands::Keywords(args) => {
                product::handle_keywords_command(&config, args, interactive).await?;
            }
            Commands::Recommend(args) => {
                buyer::handle_recommend_command(&config, args, interactive).await?;
            }
            Commands::Message(args) => {
                buyer::handle_message_command(&config, args, interactive).await?;
            }
            Commands::Trends(args) => {
                trends::handle_trends_command(&config, args, interactive).await?;
            }
            Commands::Run(args) => {
                catalog::handle_run_command(&config, &args).await?;
            }
            Commands::Render(args) => {
                catalog::handle_render_command(&args)?;
            }
            Commands::Operations => {
                catalog::handle_operations_command();
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, &config_path, args.command)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize a product: listing, pricing strategy and marketing keywords
    Optimize(ProductArgs),

    /// Generate an SEO-friendly product listing
    Listing(ProductArgs),

    /// Suggest a price range and strategy for a product
    Pricing(ProductArgs),

    /// Recommend SEO keywords and hashtags for a product
    Keywords(ProductArgs),

    /// Recommend artisan products for a buyer's interests
    Recommend(RecommendArgs),

    /// Write a personalized reply to a buyer inquiry
    Message(MessageArgs),

    /// Analyze market trends for a product category
    Trends(TrendsArgs),

    /// Run any catalog operation with explicit fields
    Run(OperationArgs),

    /// Print the prompt an operation would send, without sending it
    Render(OperationArgs),

    /// List the available operations and their fields
    Operations,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct ProductArgs {
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    #[arg(short = 'd', long)]
    pub description: Option<String>,

    #[arg(short = 'm', long)]
    pub material: Option<String>,

    #[arg(short = 'l', long)]
    pub location: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RecommendArgs {
    #[arg(long, help = "What kind of artisan products interest the buyer")]
    pub interest: Option<String>,

    #[arg(long, value_enum)]
    pub style: Option<StylePreference>,

    #[arg(long, value_enum)]
    pub budget: Option<PriceRange>,
}

#[derive(Args, Debug, Default)]
pub struct MessageArgs {
    #[arg(long)]
    pub product: Option<String>,

    #[arg(long, help = "The buyer's message or question")]
    pub buyer_message: Option<String>,

    #[arg(long, value_enum)]
    pub tone: Option<Tone>,

    #[arg(long, value_enum)]
    pub urgency: Option<Urgency>,
}

#[derive(Args, Debug, Default)]
pub struct TrendsArgs {
    #[arg(short = 'c', long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct OperationArgs {
    #[arg(help = "Operation name, see `artisan-ai operations`")]
    pub operation: String,

    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write the default configuration file if it does not exist
    Init,

    /// Reset configuration to defaults
    Reset,
}
