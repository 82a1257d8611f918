use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "es",
        name: "Español",
    },
    LocaleMeta {
        code: "fr",
        name: "Français",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
    ("fr", include_str!("../../i18n/fr.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

/// Map any requested code onto a supported one; unknown codes become `en`.
#[must_use]
pub fn normalize_lang(lang: &str) -> &'static str {
    let lang = lang.trim().to_ascii_lowercase();
    let primary = lang.split(['-', '_']).next().unwrap_or_default();
    LOCALE_META
        .iter()
        .find(|m| m.code == primary)
        .map_or(LOCALE_META[0].code, |m| m.code)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_regions_and_unknowns() {
        assert_eq!(normalize_lang("es-MX"), "es");
        assert_eq!(normalize_lang("FR"), "fr");
        assert_eq!(normalize_lang("de"), "en");
        assert_eq!(normalize_lang(""), "en");
    }

    #[test]
    fn unknown_code_loads_english_table() {
        assert_eq!(load_translations("xx"), load_translations("en"));
    }
}
