use anyhow::{Result, bail};

use crate::cli::ProductArgs;
use crate::config::Config;
use crate::core::data::ProductDetails;
use crate::utils::error::AppResult;
use crate::utils::{OutputStyle, resolve_input};

const SAMPLE_NAME: &str = "Hand-carved Wooden Bird";
const SAMPLE_DESCRIPTION: &str = "A beautifully hand-carved wooden bird, perfect for home decor. Made from sustainable oak wood with intricate details.";
const SAMPLE_MATERIAL: &str = "Oak Wood";
const SAMPLE_LOCATION: &str = "Local Artisan Workshop, Vermont, USA";

/// Fill the product form from flags, prompting or falling back to the sample product
pub fn resolve_product(args: ProductArgs, interactive: bool) -> AppResult<ProductDetails> {
    if interactive {
        println!("{}", OutputStyle::header("🏺 Product Information"));
    }

    Ok(ProductDetails {
        product_name: resolve_input(args.name, "🏷️  Product Name", SAMPLE_NAME, interactive)?,
        description: resolve_input(args.description, "📝 Product Description", SAMPLE_DESCRIPTION, interactive)?,
        material: resolve_input(args.material, "🧱 Material", SAMPLE_MATERIAL, interactive)?,
        location: resolve_input(args.location, "📍 Location", SAMPLE_LOCATION, interactive)?,
    })
}

pub async fn handle_optimize_command(config: &Config, args: ProductArgs, interactive: bool) -> Result<()> {
    let product = resolve_product(args, interactive)?;
    let agent = super::connect(config)?;

    OutputStyle::print_progress("AI optimization in progress...");
    let result = agent.operations().optimize_product(&product).await;

    OutputStyle::print_result_panel("📝", "AI-Generated Product Listing", &result.listing);
    OutputStyle::print_result_panel("💰", "Smart Pricing Recommendation", &result.pricing);
    OutputStyle::print_result_panel("🏷️ ", "SEO Keywords & Hashtags", &result.keywords);

    let failures = result.failures();
    if failures > 0 {
        bail!("{} of 3 optimization requests failed", failures);
    }
    Ok(())
}

pub async fn handle_listing_command(config: &Config, args: ProductArgs, interactive: bool) -> Result<()> {
    let product = resolve_product(args, interactive)?;
    let agent = super::connect(config)?;

    let listing = agent.operations().generate_listing(&product).await?;
    OutputStyle::print_response_panel("✨", "AI-Generated Product Listing", &listing);
    Ok(())
}

pub async fn handle_pricing_command(config: &Config, args: ProductArgs, interactive: bool) -> Result<()> {
    let product = resolve_product(args, interactive)?;
    let agent = super::connect(config)?;

    let pricing = agent.operations().suggest_pricing(&product).await?;
    OutputStyle::print_response_panel("💰", "Smart Pricing Recommendation", &pricing);
    Ok(())
}

pub async fn handle_keywords_command(config: &Config, args: ProductArgs, interactive: bool) -> Result<()> {
    let product = resolve_product(args, interactive)?;
    let agent = super::connect(config)?;

    let keywords = agent.operations().recommend_keywords(&product).await?;
    OutputStyle::print_response_panel("🏷️ ", "SEO Keywords & Hashtags", &keywords);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_product_uses_flags_then_samples() {
        let args = ProductArgs {
            name: Some("Clay Bowl".to_string()),
            location: Some("Ohio".to_string()),
            ..Default::default()
        };

        let product = resolve_product(args, false).unwrap();

        assert_eq!(product.product_name, "Clay Bowl");
        assert_eq!(product.description, SAMPLE_DESCRIPTION);
        assert_eq!(product.material, "Oak Wood");
        assert_eq!(product.location, "Ohio");
    }
}
