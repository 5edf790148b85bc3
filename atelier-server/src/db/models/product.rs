//! Product Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Customization template offered by a product (engraving font + color)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTemplate {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_font() -> String {
    "Arial".to_string()
}

fn default_color() -> String {
    "#FFD700".to_string()
}

/// Product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Category slug, e.g. "keychains", "bottles", "nameplates"
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    /// GLB model URL for the 3D preview
    pub model_url: Option<String>,
    #[serde(default)]
    pub templates: Vec<ProductTemplate>,
    pub created_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub model_url: Option<String>,
    #[serde(default)]
    pub templates: Vec<ProductTemplate>,
}

/// Update product payload — unset fields are left untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<ProductTemplate>>,
}
