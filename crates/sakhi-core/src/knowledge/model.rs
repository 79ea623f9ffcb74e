//! Knowledge base domain models.

use serde::{Deserialize, Serialize};

/// Topic category of a knowledge article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Crop calendars and cultivation practices
    Crops,
    /// Pest and disease management
    Pests,
    /// Water and irrigation management
    Irrigation,
}

/// A knowledge base article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier
    pub id: String,
    /// Article headline
    pub title: String,
    /// Topic category
    pub category: Category,
    /// Short summary shown in the listing
    pub summary: String,
    /// Estimated reading time (e.g. "5 min read")
    pub read_time: String,
    /// Free-form tags used by search
    pub tags: Vec<String>,
}
