//! Lead categories.

use serde::{Deserialize, Serialize};

/// Badge color used when a lead has no category.
pub const UNCATEGORIZED_COLOR: &str = "#d1d5db";
/// Label used when a lead has no category.
pub const UNCATEGORIZED_TITLE: &str = "Un-Categorized";

/// A category as returned by `GET /category/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// The populated category embedded in a lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default = "default_color")]
    pub color: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self { id: category.id.clone(), title: category.title.clone(), color: category.color.clone() }
    }
}

/// Body for creating or updating a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub title: String,
    pub description: String,
    pub color: String,
}

fn default_color() -> String {
    UNCATEGORIZED_COLOR.to_owned()
}
