use anyhow::Result;

use crate::cli::{MessageArgs, RecommendArgs};
use crate::config::Config;
use crate::core::data::{BuyerInquiry, BuyerInterest};
use crate::utils::error::AppResult;
use crate::utils::{OutputStyle, resolve_input};

const SAMPLE_INTEREST: &str = "unique handmade jewelry with natural stones";
const SAMPLE_PRODUCT: &str = "Hand-carved Wooden Bird";
const SAMPLE_BUYER_MESSAGE: &str = "Hi! I love unique, sustainable home decor. Is this bird ethically sourced? Can you tell me more about the crafting process?";

pub fn resolve_interest(args: RecommendArgs, interactive: bool) -> AppResult<BuyerInterest> {
    Ok(BuyerInterest {
        interest: resolve_input(args.interest, "🎯 Your Interests", SAMPLE_INTEREST, interactive)?,
        style: args.style.unwrap_or_default(),
        budget: args.budget.unwrap_or_default(),
    })
}

pub fn resolve_inquiry(args: MessageArgs, interactive: bool) -> AppResult<BuyerInquiry> {
    Ok(BuyerInquiry {
        product_name: resolve_input(args.product, "🏷️  Product Name", SAMPLE_PRODUCT, interactive)?,
        message: resolve_input(args.buyer_message, "💬 Buyer's Message/Question", SAMPLE_BUYER_MESSAGE, interactive)?,
        tone: args.tone.unwrap_or_default(),
        urgency: args.urgency.unwrap_or_default(),
    })
}

pub async fn handle_recommend_command(config: &Config, args: RecommendArgs, interactive: bool) -> Result<()> {
    let interest = resolve_interest(args, interactive)?;
    let agent = super::connect(config)?;

    OutputStyle::print_progress("Finding perfect matches for you...");
    let recommendations = agent.operations().recommend_products(&interest).await?;
    OutputStyle::print_response_panel("🎁", "Personalized Product Recommendations", &recommendations);
    Ok(())
}

pub async fn handle_message_command(config: &Config, args: MessageArgs, interactive: bool) -> Result<()> {
    let inquiry = resolve_inquiry(args, interactive)?;
    let agent = super::connect(config)?;

    OutputStyle::print_progress("Crafting your personalized response...");
    let message = agent.operations().generate_buyer_message(&inquiry).await?;
    OutputStyle::print_response_panel("💌", "Your Personalized Response", &message);
    println!(
        "{}",
        OutputStyle::muted("💡 Pro tip: personalize this further with details about your workshop or product.")
    );
    Ok(())
}
