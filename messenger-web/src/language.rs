use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Translation tables keyed by language code.
pub fn supported_languages() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("en", include_str!("../translations/en.json")),
        ("es", include_str!("../translations/es.json")),
    ])
}
