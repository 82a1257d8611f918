use crate::i18n::locales::{load_translations, normalize_lang};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LANG_KEY: &str = "kindworld.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn build_bundle(lang: &str) -> I18nBundle {
    let lang = normalize_lang(lang);
    I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang).unwrap_or(Value::Object(serde_json::Map::new())),
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LANG_KEY).ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle(&saved_lang()));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active table, persist the choice, and update `<html lang>`.
///
/// Returns the code actually applied after normalisation.
pub fn set_lang(lang: &str) -> String {
    let bundle = build_bundle(lang);
    let applied = bundle.lang.clone();
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", &applied);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LANG_KEY, &applied);
        }
    }
    applied
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
