//! Core operations implementation
//!
//! `ArtisanOperations` is the hub the front end talks to: it renders an
//! operation's prompt and hands it to the shared completion client.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{
    catalog::{
        ANALYZE_MARKET_TRENDS, GENERATE_BUYER_MESSAGE, GENERATE_LISTING, RECOMMEND_KEYWORDS,
        RECOMMEND_PRODUCTS, SUGGEST_PRICING,
    },
    data::{BuyerInquiry, BuyerInterest, Fields, ModelConfig, ProductDetails},
    template,
    traits::CompletionClient,
};
use crate::utils::error::AppResult;

/// Results of the product optimizer, one per panel
///
/// Each entry is an independent invocation, so one failing does not hide
/// the others.
#[derive(Debug)]
pub struct ProductOptimization {
    pub listing: AppResult<String>,
    pub pricing: AppResult<String>,
    pub keywords: AppResult<String>,
}

impl ProductOptimization {
    pub fn failures(&self) -> usize {
        [&self.listing, &self.pricing, &self.keywords]
            .iter()
            .filter(|result| result.is_err())
            .count()
    }
}

/// Render-then-complete hub shared by every front-end command
#[derive(Clone)]
pub struct ArtisanOperations {
    client: Arc<dyn CompletionClient>,
}

impl ArtisanOperations {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn model_config(&self) -> &ModelConfig {
        self.client.model_config()
    }

    /// Render the prompt for an operation without contacting the service
    pub fn render(&self, operation: &str, fields: &Fields) -> AppResult<String> {
        template::render(operation, fields)
    }

    /// Render the operation and send it; the response is returned unchanged
    pub async fn run(&self, operation: &str, fields: &Fields) -> AppResult<String> {
        let prompt = self.render(operation, fields)?;
        self.send(operation, &prompt).await
    }

    /// Send a prompt that was already rendered for `operation`
    pub async fn send(&self, operation: &str, prompt: &str) -> AppResult<String> {
        info!(
            operation,
            model = %self.client.model_config().model,
            "requesting completion"
        );

        let response = self.client.complete(prompt).await?;
        debug!(operation, response_chars = response.len(), "completion received");
        Ok(response)
    }

    pub async fn generate_listing(&self, product: &ProductDetails) -> AppResult<String> {
        self.run(GENERATE_LISTING, &product.to_fields()).await
    }

    pub async fn suggest_pricing(&self, product: &ProductDetails) -> AppResult<String> {
        self.run(SUGGEST_PRICING, &product.to_fields()).await
    }

    pub async fn recommend_keywords(&self, product: &ProductDetails) -> AppResult<String> {
        self.run(RECOMMEND_KEYWORDS, &product.to_fields()).await
    }

    pub async fn generate_buyer_message(&self, inquiry: &BuyerInquiry) -> AppResult<String> {
        self.run(GENERATE_BUYER_MESSAGE, &inquiry.to_fields()).await
    }

    pub async fn recommend_products(&self, interest: &BuyerInterest) -> AppResult<String> {
        self.run(RECOMMEND_PRODUCTS, &interest.to_fields()).await
    }

    pub async fn analyze_market_trends(&self, category: &str) -> AppResult<String> {
        let fields = Fields::new().with("product_category", category);
        self.run(ANALYZE_MARKET_TRENDS, &fields).await
    }

    /// Listing, pricing and keywords for one product, executed in order
    pub async fn optimize_product(&self, product: &ProductDetails) -> ProductOptimization {
        ProductOptimization {
            listing: self.generate_listing(product).await,
            pricing: self.suggest_pricing(product).await,
            keywords: self.recommend_keywords(product).await,
        }
    }
}
