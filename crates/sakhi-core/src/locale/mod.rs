//! Locale domain module.
//!
//! This module owns the supported UI languages and localized-string
//! lookup. The chat simulator and the presentation layer consume strings
//! by key; translation data itself lives in the `catalog` tables.
//!
//! # Module Structure
//!
//! - `catalog`: Static per-language string tables
//!
//! # Usage
//!
//! ```ignore
//! use sakhi_core::locale::{CatalogLocalizer, Language, Localizer};
//! ```

mod catalog;

use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use strum::{Display, EnumString};

/// A UI language selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English (default locale)
    #[default]
    En,
    /// Malayalam
    Ml,
}

/// Resolves string keys against the active language.
///
/// Implementations return the key itself for unmapped keys, so a missing
/// translation degrades to a visible key rather than an error.
pub trait Localizer: Send + Sync {
    /// Returns the currently active language.
    fn language(&self) -> Language;

    /// Switches the active language.
    fn set_language(&self, language: Language);

    /// Returns the localized text for `key`, or the key itself when the
    /// active language has no mapping for it.
    fn t(&self, key: &str) -> String;
}

/// Default `Localizer` backed by the built-in string catalog.
#[derive(Debug)]
pub struct CatalogLocalizer {
    language: RwLock<Language>,
}

impl CatalogLocalizer {
    pub fn new(language: Language) -> Self {
        Self {
            language: RwLock::new(language),
        }
    }
}

impl Default for CatalogLocalizer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Localizer for CatalogLocalizer {
    fn language(&self) -> Language {
        *self.language.read().unwrap()
    }

    fn set_language(&self, language: Language) {
        *self.language.write().unwrap() = language;
    }

    fn t(&self, key: &str) -> String {
        let language = self.language();
        catalog::lookup(language, key)
            .unwrap_or(key)
            .to_string()
    }
}
