//! Core data structures
//!
//! Request fields, model settings and the structured form inputs that are
//! flattened into template fields before rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Field values supplied for one operation invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fields(BTreeMap<String, String>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Model settings passed through unchanged to the completion service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    #[serde(rename = "name")]
    pub model: String,
    pub temperature: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Product attributes collected by the product optimizer form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub product_name: String,
    pub description: String,
    pub material: String,
    pub location: String,
}

impl ProductDetails {
    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .with("product_name", &self.product_name)
            .with("description", &self.description)
            .with("material", &self.material)
            .with("location", &self.location)
    }
}

/// What a buyer is looking for, plus the style and budget filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerInterest {
    pub interest: String,
    pub style: StylePreference,
    pub budget: PriceRange,
}

impl BuyerInterest {
    /// Flatten into the single free-text interest the template expects
    pub fn compose(&self) -> String {
        format!("{}, {} style, budget {}", self.interest, self.style, self.budget)
    }

    pub fn to_fields(&self) -> Fields {
        Fields::new().with("buyer_interest", self.compose())
    }
}

/// A buyer's inquiry about a product, with the desired reply register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerInquiry {
    pub product_name: String,
    pub message: String,
    pub tone: Tone,
    pub urgency: Urgency,
}

impl BuyerInquiry {
    pub fn compose(&self) -> String {
        format!(
            "{}. Please respond in a {} tone for a {} buyer.",
            self.message,
            self.tone.to_string().to_lowercase(),
            self.urgency.to_string().to_lowercase()
        )
    }

    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .with("product_name", &self.product_name)
            .with("buyer_preference", self.compose())
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreference {
    #[default]
    Modern,
    Rustic,
    Vintage,
    Minimalist,
    Bohemian,
    Traditional,
}

impl fmt::Display for StylePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StylePreference::Modern => "Modern",
            StylePreference::Rustic => "Rustic",
            StylePreference::Vintage => "Vintage",
            StylePreference::Minimalist => "Minimalist",
            StylePreference::Bohemian => "Bohemian",
            StylePreference::Traditional => "Traditional",
        };
        f.write_str(label)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[value(name = "under-25")]
    Under25,
    #[value(name = "25-50")]
    From25To50,
    #[default]
    #[value(name = "50-100")]
    From50To100,
    #[value(name = "100-250")]
    From100To250,
    #[value(name = "250-plus")]
    Over250,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceRange::Under25 => "Under $25",
            PriceRange::From25To50 => "$25-$50",
            PriceRange::From50To100 => "$50-$100",
            PriceRange::From100To250 => "$100-$250",
            PriceRange::Over250 => "$250+",
        };
        f.write_str(label)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    #[value(name = "warm")]
    WarmPersonal,
    Enthusiastic,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::WarmPersonal => "Warm & Personal",
            Tone::Enthusiastic => "Enthusiastic",
        };
        f.write_str(label)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Casual,
    Interested,
    #[value(name = "ready")]
    ReadyToBuy,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Casual => "Casual",
            Urgency::Interested => "Interested",
            Urgency::ReadyToBuy => "Ready to Buy",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buyer_interest_compose() {
        let interest = BuyerInterest {
            interest: "unique handmade jewelry with natural stones".to_string(),
            style: StylePreference::Bohemian,
            budget: PriceRange::From50To100,
        };
        assert_eq!(
            interest.compose(),
            "unique handmade jewelry with natural stones, Bohemian style, budget $50-$100"
        );
        assert_eq!(interest.to_fields().get("buyer_interest"), Some(interest.compose().as_str()));
    }

    #[test]
    fn test_buyer_inquiry_compose_lowercases_tone_and_urgency() {
        let inquiry = BuyerInquiry {
            product_name: "Hand-carved Wooden Bird".to_string(),
            message: "Is this bird ethically sourced?".to_string(),
            tone: Tone::WarmPersonal,
            urgency: Urgency::ReadyToBuy,
        };
        assert_eq!(
            inquiry.compose(),
            "Is this bird ethically sourced?. Please respond in a warm & personal tone for a ready to buy buyer."
        );

        let fields = inquiry.to_fields();
        assert_eq!(fields.get("product_name"), Some("Hand-carved Wooden Bird"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_product_details_fields() {
        let product = ProductDetails {
            product_name: "Clay Bowl".to_string(),
            description: "hand-thrown".to_string(),
            material: "clay".to_string(),
            location: "Ohio".to_string(),
        };
        let fields = product.to_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get("location"), Some("Ohio"));
    }

    #[test]
    fn test_fields_from_iter_overwrites_duplicates() {
        let fields: Fields = vec![("a", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some("2"));
        assert!(fields.contains("b"));
        assert!(!fields.contains("c"));
    }

    #[test]
    fn test_model_config_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }
}
