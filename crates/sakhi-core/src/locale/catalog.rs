//! Static per-language string tables.
//!
//! Keys are stable identifiers shared with the presentation layer and the
//! chat simulator. The `{query}` and `{crop}` markers in the generic reply
//! template are substituted by the simulator at reply time.

use super::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app.name", "Krishi Sakhi"),
        ("app.tagline", "Your AI-powered farming companion"),
        ("landing.demo.question", "Would you like to watch a quick demo?"),
        ("landing.demo.yes", "Yes, Show Demo"),
        ("landing.demo.skip", "Skip to App"),
        ("nav.home", "Home"),
        ("nav.features", "Features"),
        ("nav.about", "About"),
        ("nav.contact", "Contact Us"),
        ("nav.help", "Help & Support"),
        (
            "home.hero.title",
            "Your AI-powered Krishi Sakhi – a digital friend for every farmer",
        ),
        ("home.get.started", "Get Started"),
        ("features.advisory", "Advisory Section"),
        ("features.profile", "Profile Section"),
        ("features.queries", "Queries Section"),
        ("features.knowledge", "Knowledge Engine"),
        ("profile.create", "Create New Profile"),
        ("profile.farmer.details", "Farmer Details"),
        ("profile.farm.details", "Farm Details"),
        ("chatbot.placeholder", "Ask me anything about farming..."),
        (
            "chat.greeting",
            "Hello! I'm your Krishi Sakhi AI assistant. How can I help you with your farming today?",
        ),
        (
            "chat.reply.weather",
            "Heavy rain is expected in your area over the next two days. Protect your crops from excessive moisture and consider drainage measures.",
        ),
        (
            "chat.reply.fertilizer",
            "Based on your crop growth stage, now is the ideal time for nitrogen application. Prefer organic fertilizers for better soil health.",
        ),
        (
            "chat.reply.pest",
            "Watch for early signs of infestation on the underside of leaves. Organic methods such as neem oil work well before an outbreak spreads.",
        ),
        (
            "chat.reply.market",
            "Mandi prices have been trending upward this week. Compare rates at nearby markets before selling your produce.",
        ),
        (
            "chat.reply.generic",
            "Thank you for your question! Based on your query about {query}, I recommend checking soil moisture levels and considering organic fertilizers for {crop}.",
        ),
        ("chat.crops.generic", "your crops"),
        ("chat.suggest.starter.1", "What's the weather today?"),
        ("chat.suggest.starter.2", "Fertilizer advice"),
        ("chat.suggest.starter.3", "Pest control tips"),
        ("chat.suggest.weather.1", "Should I irrigate today?"),
        ("chat.suggest.weather.2", "How do I protect crops from rain?"),
        ("chat.suggest.weather.3", "Drainage tips for my field"),
        ("chat.suggest.fertilizer.1", "Organic fertilizer options"),
        ("chat.suggest.fertilizer.2", "When should I apply fertilizer?"),
        ("chat.suggest.fertilizer.3", "How much nitrogen per acre?"),
        ("chat.suggest.pest.1", "Organic pest control methods"),
        ("chat.suggest.pest.2", "Common pests for rice"),
        ("chat.suggest.pest.3", "How to prevent infestations?"),
        ("chat.suggest.market.1", "Best time to sell my produce"),
        ("chat.suggest.market.2", "Prices at nearby markets"),
        ("chat.suggest.market.3", "Price trend this month"),
    ])
});

static ML: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app.name", "കൃഷി സഖി"),
        ("app.tagline", "നിങ്ങളുടെ AI-പവേർഡ് കാർഷിക സഹായി"),
        ("landing.demo.question", "ഒരു ചെറിയ ഡെമോ കാണാൻ താൽപ്പര്യമുണ്ടോ?"),
        ("landing.demo.yes", "ഹ്, ഡെമോ കാണിക്കൂ"),
        ("landing.demo.skip", "ആപ്പിലേക്ക് പോകൂ"),
        ("nav.home", "ഹോം"),
        ("nav.features", "ഫീച്ചറുകൾ"),
        ("nav.about", "കുറിച്ച്"),
        ("nav.contact", "ബന്ധപ്പെടുക"),
        ("nav.help", "സഹായം"),
        (
            "home.hero.title",
            "നിങ്ങളുടെ AI-പവേർഡ് കൃഷി സഖി – എല്ലാ കർഷകർക്കും ഒരു ഡിജിറ്റൽ സുഹൃത്ത്",
        ),
        ("home.get.started", "ആരംഭിക്കുക"),
        ("features.advisory", "ഉപദേശ വിഭാഗം"),
        ("features.profile", "പ്രൊഫൈൽ വിഭാഗം"),
        ("features.queries", "ചോദ്യങ്ങൾ"),
        ("features.knowledge", "വിജ്ഞാന കേന്ദ്രം"),
        ("profile.create", "പുതിയ പ്രൊഫൈൽ സൃഷ്ടിക്കുക"),
        ("profile.farmer.details", "കർഷക വിവരങ്ങൾ"),
        ("profile.farm.details", "കൃഷിയിടം വിവരങ്ങൾ"),
        ("chatbot.placeholder", "കൃഷിയെ കുറിച്ച് എന്തും ചോദിക്കൂ..."),
        (
            "chat.greeting",
            "നമസ്കാരം! ഞാൻ നിങ്ങളുടെ കൃഷി സഖി AI സഹായി ആണ്. ഇന്ന് നിങ്ങളുടെ കൃഷിയിൽ എങ്ങനെ സഹായിക്കാം?",
        ),
        (
            "chat.reply.weather",
            "അടുത്ത രണ്ട് ദിവസങ്ങളിൽ നിങ്ങളുടെ പ്രദേശത്ത് കനത്ത മഴ പ്രതീക്ഷിക്കുന്നു. അധിക ഈർപ്പത്തിൽ നിന്ന് വിളകളെ സംരക്ഷിക്കുക, ഡ്രെയിനേജ് സൗകര്യം ഒരുക്കുക.",
        ),
        (
            "chat.reply.fertilizer",
            "വിളയുടെ വളർച്ചാ ഘട്ടം അനുസരിച്ച്, നൈട്രജൻ വളപ്രയോഗത്തിന് ഇപ്പോഴാണ് ഏറ്റവും അനുയോജ്യമായ സമയം. മണ്ണിന്റെ ആരോഗ്യത്തിന് ജൈവവളങ്ങൾ ഉപയോഗിക്കുക.",
        ),
        (
            "chat.reply.pest",
            "ഇലകളുടെ അടിവശത്ത് കീടബാധയുടെ ആദ്യ ലക്ഷണങ്ങൾ നിരീക്ഷിക്കുക. വേപ്പെണ്ണ പോലുള്ള ജൈവ മാർഗങ്ങൾ തുടക്കത്തിൽ ഫലപ്രദമാണ്.",
        ),
        (
            "chat.reply.market",
            "ഈ ആഴ്ച വിപണി വിലകൾ ഉയരുന്ന പ്രവണതയിലാണ്. വിൽക്കുന്നതിന് മുമ്പ് അടുത്തുള്ള വിപണികളിലെ നിരക്കുകൾ താരതമ്യം ചെയ്യുക.",
        ),
        (
            "chat.reply.generic",
            "നിങ്ങളുടെ ചോദ്യത്തിന് നന്ദി! {query} സംബന്ധിച്ച ചോദ്യം അനുസരിച്ച്, മണ്ണിലെ ഈർപ്പം പരിശോധിക്കാനും {crop} എന്നതിന് ജൈവവളങ്ങൾ പരിഗണിക്കാനും ശുപാർശ ചെയ്യുന്നു.",
        ),
        ("chat.crops.generic", "നിങ്ങളുടെ വിളകൾ"),
        ("chat.suggest.starter.1", "ഇന്നത്തെ കാലാവസ്ഥ എങ്ങനെ?"),
        ("chat.suggest.starter.2", "വളപ്രയോഗ നിർദ്ദേശം"),
        ("chat.suggest.starter.3", "കീടനിയന്ത്രണ നുറുങ്ങുകൾ"),
        ("chat.suggest.weather.1", "ഇന്ന് നനയ്ക്കണോ?"),
        ("chat.suggest.weather.2", "മഴയിൽ നിന്ന് വിളകളെ എങ്ങനെ സംരക്ഷിക്കാം?"),
        ("chat.suggest.weather.3", "വയലിലെ ഡ്രെയിനേജ് നുറുങ്ങുകൾ"),
        ("chat.suggest.fertilizer.1", "ജൈവവള ഓപ്ഷനുകൾ"),
        ("chat.suggest.fertilizer.2", "എപ്പോഴാണ് വളം ഇടേണ്ടത്?"),
        ("chat.suggest.fertilizer.3", "ഏക്കറിന് എത്ര നൈട്രജൻ വേണം?"),
        ("chat.suggest.pest.1", "ജൈവ കീടനിയന്ത്രണ മാർഗങ്ങൾ"),
        ("chat.suggest.pest.2", "നെല്ലിലെ സാധാരണ കീടങ്ങൾ"),
        ("chat.suggest.pest.3", "കീടബാധ എങ്ങനെ തടയാം?"),
        ("chat.suggest.market.1", "വിളവ് വിൽക്കാൻ ഏറ്റവും നല്ല സമയം"),
        ("chat.suggest.market.2", "അടുത്തുള്ള വിപണികളിലെ വിലകൾ"),
        ("chat.suggest.market.3", "ഈ മാസത്തെ വില പ്രവണത"),
    ])
});

/// Looks up `key` in the table for `language`.
pub(crate) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let table = match language {
        Language::En => &EN,
        Language::Ml => &ML,
    };
    table.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tables_cover_the_same_keys() {
        let mut en_keys: Vec<_> = EN.keys().collect();
        let mut ml_keys: Vec<_> = ML.keys().collect();
        en_keys.sort();
        ml_keys.sort();
        assert_eq!(en_keys, ml_keys);
    }

    #[test]
    fn test_generic_reply_carries_both_markers() {
        for language in [Language::En, Language::Ml] {
            let template = lookup(language, "chat.reply.generic").unwrap();
            assert!(template.contains("{query}"));
            assert!(template.contains("{crop}"));
        }
    }
}
