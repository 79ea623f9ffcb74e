//! Knowledge base domain module.
//!
//! This module contains the searchable article catalog behind the
//! "Knowledge Engine" panel.
//!
//! # Module Structure
//!
//! - `model`: Article domain models (`Article`, `Category`)
//! - `base`: Filterable article collection (`KnowledgeBase`)
//! - `preset`: Default article catalog

mod base;
mod model;
mod preset;

// Re-export public API
pub use base::KnowledgeBase;
pub use model::{Article, Category};
pub use preset::default_articles;
