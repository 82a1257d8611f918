use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key).and_then(|v| render_value(v, args))
    })
}

/// Translate a key to the current language, or echo the key when it is unmapped.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate with `{name}` / `{{name}}` placeholder substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// [`tr`] with inline `(name, value)` pairs.
#[must_use]
pub fn tr_with(key: &str, pairs: &[(&str, &str)]) -> String {
    let args: BTreeMap<&str, &str> = pairs.iter().copied().collect();
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn objects_are_not_leaf_strings() {
        let value = serde_json::json!({ "a": "b" });
        assert_eq!(render_value(&value, None), None);
    }

    #[test]
    fn nested_lookup_walks_dots() {
        let value = serde_json::json!({ "a": { "b": { "c": "deep" } } });
        assert_eq!(
            get_nested_value(&value, "a.b.c").and_then(Value::as_str),
            Some("deep")
        );
        assert!(get_nested_value(&value, "a.x").is_none());
    }
}
