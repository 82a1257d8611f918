use kindworld_core::AppStore;

pub(super) const BRIDGE_KEY: &str = "__kindworldTest";

/// JSON published for the browser harness; `null` if serialization fails.
pub(super) fn snapshot_json(store: &AppStore) -> String {
    serde_json::to_string(&store.snapshot()).unwrap_or_else(|err| {
        log::error!("snapshot serialization failed: {err}");
        String::from("null")
    })
}
