use super::shared::{BRIDGE_KEY, snapshot_json};
use crate::app::state::AppState;
use crate::dom;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

fn attach_bridge() -> Option<js_sys::Object> {
    let window = dom::window()?;
    let bridge = js_sys::Object::new();
    js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_KEY), &bridge).ok()?;
    Some(bridge)
}

fn publish(bridge: &js_sys::Object, json: &str) {
    if js_sys::Reflect::set(bridge, &JsValue::from_str("snapshot"), &JsValue::from_str(json))
        .is_err()
    {
        log::warn!("could not publish test snapshot");
    }
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<js_sys::Object>);
    let installed = use_mut_ref(|| false);
    let store = app_state.store();

    use_effect(move || {
        if !*installed.borrow() {
            *installed.borrow_mut() = true;
            if dom::test_mode_enabled() {
                *bridge_handle.borrow_mut() = attach_bridge();
            }
        }
        if let Some(bridge) = bridge_handle.borrow().as_ref() {
            publish(bridge, &snapshot_json(&store));
        }
    });
}
