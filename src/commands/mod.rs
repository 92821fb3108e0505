// Command handlers, one module per front-end form
pub mod buyer;
pub mod catalog;
pub mod configure;
pub mod product;
pub mod trends;

use crate::ArtisanConnect;
use crate::config::Config;
use crate::utils::OutputStyle;
use crate::utils::error::AppResult;

/// Build the shared agent once for this command and announce the model in use
pub(crate) fn connect(config: &Config) -> AppResult<ArtisanConnect> {
    let agent = ArtisanConnect::from_config(config)?;
    OutputStyle::print_model_banner(agent.operations().model_config());
    Ok(agent)
}
