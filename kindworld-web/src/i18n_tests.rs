use crate::i18n::{load_translations, locales, set_lang, t, tr};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

fn leaf_keys(value: &Value, prefix: &str, out: &mut BTreeMap<String, String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let key = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            match v {
                Value::String(s) => {
                    out.insert(key, s.clone());
                }
                other => leaf_keys(other, &key, out),
            }
        }
    }
}

fn table(lang: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let value = load_translations(lang).unwrap_or(Value::Null);
    leaf_keys(&value, "", &mut out);
    out
}

#[test]
fn every_locale_covers_the_english_keys() {
    let en: BTreeSet<_> = table("en").into_keys().collect();
    assert!(!en.is_empty());
    for meta in locales() {
        let other: BTreeSet<_> = table(meta.code).into_keys().collect();
        assert_eq!(en, other, "{} key set drifted", meta.code);
    }
}

#[test]
fn switching_language_changes_every_mapped_key() {
    let en = table("en");
    for meta in locales().iter().filter(|m| m.code != "en") {
        set_lang(meta.code);
        for (key, english) in &en {
            assert_ne!(&t(key), english, "{}:{key} is untranslated", meta.code);
        }
    }
    set_lang("en");
}

#[test]
fn unmapped_keys_render_raw_in_every_language() {
    for meta in locales() {
        set_lang(meta.code);
        assert_eq!(t("missions.no_such_key"), "missions.no_such_key");
        assert_eq!(t("nav"), "nav");
    }
    set_lang("en");
}

#[test]
fn unknown_language_falls_back_to_english() {
    assert_eq!(set_lang("xx"), "en");
    assert_eq!(t("nav.dashboard"), "Dashboard");
}

#[test]
fn welcome_interpolates_name() {
    set_lang("es");
    let mut args = BTreeMap::new();
    args.insert("name", "Sarah");
    assert_eq!(tr("dashboard.welcome", Some(&args)), "¡Bienvenido de nuevo, Sarah!");
    set_lang("en");
}
