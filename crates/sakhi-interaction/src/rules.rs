//! Keyword classification rules for the simulated assistant.
//!
//! The rule table is ordered; evaluation is top-to-bottom and the first
//! matching rule wins. Matching is case-insensitive substring, and a
//! keyword from either supported locale matches regardless of the active
//! language.

/// Topic branch selected for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Weather,
    Fertilizer,
    Pest,
    Market,
}

/// One classification rule: the keywords that trigger it, the reply
/// template key, and the suggestion keys attached to the reply.
pub struct ResponseRule {
    pub topic: Topic,
    pub reply_key: &'static str,
    pub suggestion_keys: [&'static str; 3],
    /// Trigger keywords, lowercase, across both supported locales.
    keywords: &'static [&'static str],
}

impl ResponseRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// The ordered rule table.
pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Weather,
        reply_key: "chat.reply.weather",
        suggestion_keys: [
            "chat.suggest.weather.1",
            "chat.suggest.weather.2",
            "chat.suggest.weather.3",
        ],
        keywords: &["weather", "കാലാവസ്ഥ"],
    },
    ResponseRule {
        topic: Topic::Fertilizer,
        reply_key: "chat.reply.fertilizer",
        suggestion_keys: [
            "chat.suggest.fertilizer.1",
            "chat.suggest.fertilizer.2",
            "chat.suggest.fertilizer.3",
        ],
        keywords: &["fertilizer", "വള"],
    },
    ResponseRule {
        topic: Topic::Pest,
        reply_key: "chat.reply.pest",
        suggestion_keys: [
            "chat.suggest.pest.1",
            "chat.suggest.pest.2",
            "chat.suggest.pest.3",
        ],
        keywords: &["pest", "കീട"],
    },
    ResponseRule {
        topic: Topic::Market,
        reply_key: "chat.reply.market",
        suggestion_keys: [
            "chat.suggest.market.1",
            "chat.suggest.market.2",
            "chat.suggest.market.3",
        ],
        keywords: &["market", "വിപണി"],
    },
];

/// Suggestion keys attached to the generic-acknowledgment branch (and to
/// the seeded greeting).
pub const STARTER_SUGGESTION_KEYS: [&str; 3] = [
    "chat.suggest.starter.1",
    "chat.suggest.starter.2",
    "chat.suggest.starter.3",
];

/// Classifies a submission against the rule table.
///
/// Returns `None` when no keyword matches; the caller falls back to the
/// generic acknowledgment.
pub fn classify(text: &str) -> Option<&'static ResponseRule> {
    let lowered = text.to_lowercase();
    RESPONSE_RULES.iter().find(|rule| rule.matches(&lowered))
}
