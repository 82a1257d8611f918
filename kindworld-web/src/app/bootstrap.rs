use anyhow::Context;
use kindworld_core::{AppConfig, AppStore, SeedCatalog};

#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use kindworld_core::Action;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

const CONFIG_JSON: &str = include_str!("../../../kindworld-core/assets/config.json");
const SEED_JSON: &str = include_str!("../../../kindworld-core/assets/seed.json");

/// Parse the embedded config and seed catalog into a fresh store.
///
/// # Errors
/// Fails when either embedded asset does not parse.
pub fn load_store(config_json: &str, seed_json: &str, id_seed: u64) -> anyhow::Result<AppStore> {
    let config = AppConfig::from_json(config_json).context("parsing app config")?;
    let seed = SeedCatalog::from_json(seed_json).context("parsing seed catalog")?;
    Ok(AppStore::new(config, seed, id_seed))
}

/// Store for the first render; a broken asset degrades to defaults.
#[must_use]
pub fn boot_store() -> AppStore {
    let id_seed = crate::dom::now_ms();
    load_store(CONFIG_JSON, SEED_JSON, id_seed).unwrap_or_else(|err| {
        log::error!("bootstrap failed: {err:#}");
        AppStore::new(AppConfig::default_config(), SeedCatalog::default(), id_seed)
    })
}

/// Restore browser-side preferences into the store once, after mount.
#[cfg(any(target_arch = "wasm32", test))]
fn restore_preferences(app_state: &AppState) {
    let lang = crate::i18n::set_lang(&crate::i18n::current_lang());
    if app_state.store.language() != lang {
        app_state.dispatcher().dispatch(Action::SetLanguage(lang));
    }
    crate::a11y::set_high_contrast(*app_state.high_contrast);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        restore_preferences(&state);
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use kindworld_core::Page;
    use yew::LocalServerRenderer;

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let restored = use_mut_ref(|| false);
        if !*restored.borrow() {
            *restored.borrow_mut() = true;
            restore_preferences(&app_state);
        }
        let missions = app_state.store.missions().len();
        html! { <span>{ format!("missions:{missions} page:{:?}", app_state.store.page()) }</span> }
    }

    #[test]
    fn bootstrap_harness_renders_seeded_store() {
        let html = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
        assert!(html.contains("missions:7"));
        assert!(html.contains("page:Landing"));
    }

    #[test]
    fn embedded_assets_load() {
        let store = load_store(CONFIG_JSON, SEED_JSON, 1).expect("embedded assets parse");
        assert_eq!(store.page(), Page::Landing);
        assert_eq!(store.certificates().len(), 6);
    }

    #[test]
    fn broken_seed_reports_context() {
        let err = load_store(CONFIG_JSON, "{ nope", 1).expect_err("bad seed");
        assert!(format!("{err:#}").contains("parsing seed catalog"));
    }
}
