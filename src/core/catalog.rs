//! Fixed catalog of prompt operations
//!
//! Every operation the assistant can perform is declared here once, with the
//! ordered list of fields its template expects. Placeholders use the
//! `{field_name}` form and must match the declared field list exactly.

/// A named prompt template plus the fields it requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub template: &'static str,
}

pub const GENERATE_LISTING: &str = "generate_listing";
pub const SUGGEST_PRICING: &str = "suggest_pricing";
pub const RECOMMEND_KEYWORDS: &str = "recommend_keywords";
pub const GENERATE_BUYER_MESSAGE: &str = "generate_buyer_message";
pub const RECOMMEND_PRODUCTS: &str = "recommend_products";
pub const ANALYZE_MARKET_TRENDS: &str = "analyze_market_trends";

const PRODUCT_FIELDS: &[&str] = &["product_name", "description", "material", "location"];

static OPERATIONS: [Operation; 6] = [
    Operation {
        name: GENERATE_LISTING,
        title: "Optimized Product Listing",
        fields: PRODUCT_FIELDS,
        template: concat!(
            "You are an expert copywriter for artisan products with deep knowledge of marketplace optimization. ",
            "Create an attractive, SEO-friendly, and emotionally compelling product listing for the following item:\n\n",
            "Product Name: {product_name}\n",
            "Description: {description}\n",
            "Material: {material}\n",
            "Location: {location}\n\n",
            "Your listing should include:\n",
            "1. A catchy, SEO-optimized title\n",
            "2. An engaging product description (200-300 words) that highlights:\n",
            "   - Unique craftsmanship and artisan story\n",
            "   - Quality of materials and sustainability\n",
            "   - Emotional appeal and use cases\n",
            "   - Care instructions or special features\n",
            "3. A compelling call-to-action\n\n",
            "Write in a warm, authentic tone that connects with buyers who value handmade, unique items."
        ),
    },
    Operation {
        name: SUGGEST_PRICING,
        title: "Smart Pricing Recommendation",
        fields: PRODUCT_FIELDS,
        template: concat!(
            "As a marketplace pricing expert specializing in artisan products, analyze the following item ",
            "and provide a comprehensive pricing recommendation:\n\n",
            "Product Name: {product_name}\n",
            "Description: {description}\n",
            "Material: {material}\n",
            "Location: {location}\n\n",
            "Consider these factors in your analysis:\n",
            "- Material costs and quality\n",
            "- Time and skill required for craftsmanship\n",
            "- Market demand for similar items\n",
            "- Uniqueness and artistic value\n",
            "- Target customer segment\n",
            "- Geographic market considerations\n\n",
            "Provide:\n",
            "1. A specific price range (e.g., $45-65)\n",
            "2. A recommended optimal price point\n",
            "3. Brief justification for the pricing\n",
            "4. Tips for pricing strategy (premium vs. competitive positioning)"
        ),
    },
    Operation {
        name: RECOMMEND_KEYWORDS,
        title: "SEO Keywords & Hashtags",
        fields: &["product_name", "description", "material"],
        template: concat!(
            "As an SEO and digital marketing expert for artisan marketplaces, generate comprehensive ",
            "keyword recommendations for the following product:\n\n",
            "Product Name: {product_name}\n",
            "Description: {description}\n",
            "Material: {material}\n\n",
            "Generate:\n",
            "1. 10-12 primary SEO keywords (2-4 words each) for search optimization\n",
            "2. 8-10 social media hashtags for Instagram/Facebook\n",
            "3. 5-6 long-tail keywords for niche targeting\n",
            "4. 3-4 trending/seasonal keywords if applicable\n\n",
            "Focus on terms that buyers actually search for, including:\n",
            "- Product category terms\n",
            "- Material and technique terms\n",
            "- Style and aesthetic terms\n",
            "- Gift and occasion terms\n",
            "- Handmade/artisan terms\n\n",
            "Format as organized lists with clear categories."
        ),
    },
    Operation {
        name: GENERATE_BUYER_MESSAGE,
        title: "Personalized Buyer Response",
        fields: &["product_name", "buyer_preference"],
        template: concat!(
            "You are a skilled artisan responding to a potential buyer inquiry. Write a warm, ",
            "professional, and personalized message that builds trust and encourages purchase.\n\n",
            "Product: {product_name}\n",
            "Buyer's Message/Preference: {buyer_preference}\n\n",
            "Your response should:\n",
            "1. Address their specific questions or concerns\n",
            "2. Share relevant details about your craftsmanship process\n",
            "3. Highlight what makes this piece special\n",
            "4. Build personal connection and trust\n",
            "5. Include a gentle call-to-action\n",
            "6. Offer additional assistance\n\n",
            "Keep the tone authentic, knowledgeable, and enthusiastic about your craft. ",
            "Make the buyer feel valued and excited about the purchase."
        ),
    },
    Operation {
        name: RECOMMEND_PRODUCTS,
        title: "Personalized Product Recommendations",
        fields: &["buyer_interest"],
        template: concat!(
            "As an AI marketplace curator specializing in artisan products, provide personalized ",
            "product recommendations for a buyer with the following interests:\n\n",
            "Buyer Interests: {buyer_interest}\n\n",
            "Recommend 4-5 specific types of artisan products that would appeal to this buyer. ",
            "For each recommendation, provide:\n",
            "1. Product type/category\n",
            "2. Why it matches their interests\n",
            "3. Key features they'd appreciate\n",
            "4. Approximate price range\n",
            "5. Where they might use/display it\n\n",
            "Focus on unique, handcrafted items that align with their stated preferences. ",
            "Consider complementary items that work well together. ",
            "Make recommendations feel personal and thoughtful."
        ),
    },
    Operation {
        name: ANALYZE_MARKET_TRENDS,
        title: "Market Trend Analysis",
        fields: &["product_category"],
        template: concat!(
            "As a market research analyst for artisan products, provide insights on current ",
            "trends and opportunities for the following category:\n\n",
            "Product Category: {product_category}\n\n",
            "Analyze:\n",
            "1. Current market demand and trends\n",
            "2. Popular styles and materials\n",
            "3. Price point opportunities\n",
            "4. Seasonal considerations\n",
            "5. Target customer demographics\n",
            "6. Marketing channel recommendations\n\n",
            "Provide actionable insights for artisans in this category."
        ),
    },
];

/// All registered operations, in display order
pub fn all() -> &'static [Operation] {
    &OPERATIONS
}

/// Look up an operation by its name
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
