use crate::app::state::AppState;
use yew::prelude::*;

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let _ = app_state;
}
