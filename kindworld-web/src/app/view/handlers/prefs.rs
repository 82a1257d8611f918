use crate::app::state::AppState;
use crate::router::Route;
use kindworld_core::{Action, NotificationId};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let dispatcher = state.dispatcher();
    Callback::from(move |code: String| {
        let applied = crate::i18n::set_lang(&code);
        dispatcher.dispatch(Action::SetLanguage(applied));
    })
}

pub fn build_toggle_hc(state: &AppState) -> Callback<bool> {
    let high_contrast = state.high_contrast.clone();
    Callback::from(move |next: bool| {
        crate::a11y::set_high_contrast(next);
        high_contrast.set(next);
    })
}

pub fn build_dismiss(state: &AppState) -> Callback<NotificationId> {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: NotificationId| dispatcher.dispatch(Action::Dismiss(id)))
}

/// Leave the 404 view for whichever page the store is on.
pub fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let page = state.store.page();
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_page(page));
        }
    })
}
