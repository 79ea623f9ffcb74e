//! Default knowledge base articles.

use super::model::{Article, Category};

/// Returns the built-in article catalog.
pub fn default_articles() -> Vec<Article> {
    vec![
        Article {
            id: "kb-rice-season".to_string(),
            title: "Optimal Rice Planting Season in Kerala".to_string(),
            category: Category::Crops,
            summary: "Best practices for rice cultivation during monsoon season, including soil preparation and seed selection.".to_string(),
            read_time: "5 min read".to_string(),
            tags: vec!["rice".to_string(), "kerala".to_string(), "monsoon".to_string()],
        },
        Article {
            id: "kb-planthopper".to_string(),
            title: "Brown Planthopper Control Methods".to_string(),
            category: Category::Pests,
            summary: "Effective organic and chemical methods to control brown planthopper in rice fields.".to_string(),
            read_time: "7 min read".to_string(),
            tags: vec!["pest control".to_string(), "rice".to_string(), "organic".to_string()],
        },
        Article {
            id: "kb-drip-irrigation".to_string(),
            title: "Drip Irrigation Setup for Vegetable Gardens".to_string(),
            category: Category::Irrigation,
            summary: "Complete guide to setting up efficient drip irrigation systems for better water conservation.".to_string(),
            read_time: "10 min read".to_string(),
            tags: vec![
                "irrigation".to_string(),
                "vegetables".to_string(),
                "water conservation".to_string(),
            ],
        },
        Article {
            id: "kb-tomato-disease".to_string(),
            title: "Tomato Disease Prevention Guide".to_string(),
            category: Category::Pests,
            summary: "Common tomato diseases, their symptoms, and preventive measures for healthy crop growth.".to_string(),
            read_time: "8 min read".to_string(),
            tags: vec!["tomato".to_string(), "disease".to_string(), "prevention".to_string()],
        },
    ]
}
