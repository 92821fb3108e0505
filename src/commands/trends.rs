use anyhow::Result;

use crate::cli::TrendsArgs;
use crate::config::Config;
use crate::core::catalog::ANALYZE_MARKET_TRENDS;
use crate::utils::error::{AppError, AppResult};
use crate::utils::{OutputStyle, prompt_input};

/// The category has no sample value; it must be given or typed in
pub fn resolve_category(args: TrendsArgs, interactive: bool) -> AppResult<String> {
    let category = match args.category {
        Some(category) => category,
        None if interactive => prompt_input(&format!("{}: ", OutputStyle::label("📦 Product Category")))?,
        None => String::new(),
    };

    if category.trim().is_empty() {
        return Err(AppError::MissingField {
            operation: ANALYZE_MARKET_TRENDS.to_string(),
            field: "product_category".to_string(),
        });
    }
    Ok(category)
}

pub async fn handle_trends_command(config: &Config, args: TrendsArgs, interactive: bool) -> Result<()> {
    let category = resolve_category(args, interactive)?;
    let agent = super::connect(config)?;

    OutputStyle::print_progress(&format!("Analyzing market trends for {}...", category));
    let analysis = agent.operations().analyze_market_trends(&category).await?;
    OutputStyle::print_response_panel("📊", "Market Trend Analysis", &analysis);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_category_requires_value() {
        let err = resolve_category(TrendsArgs::default(), false).unwrap_err();
        assert!(matches!(err, AppError::MissingField { ref field, .. } if field == "product_category"));

        let err = resolve_category(TrendsArgs { category: Some("  ".to_string()) }, false).unwrap_err();
        assert!(matches!(err, AppError::MissingField { .. }));
    }

    #[test]
    fn test_resolve_category_passes_value_through() {
        let args = TrendsArgs { category: Some("Woven Baskets".to_string()) };
        assert_eq!(resolve_category(args, false).unwrap(), "Woven Baskets");
    }
}
