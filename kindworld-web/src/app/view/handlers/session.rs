use crate::app::state::AppState;
use kindworld_core::{Action, Page, Role};
use yew::prelude::*;

pub fn build_navigate(state: &AppState) -> Callback<Page> {
    let dispatcher = state.dispatcher();
    Callback::from(move |page: Page| dispatcher.dispatch(Action::Navigate(page)))
}

pub fn build_select_role(state: &AppState) -> Callback<Role> {
    let dispatcher = state.dispatcher();
    Callback::from(move |role: Role| dispatcher.dispatch(Action::SelectRole(role)))
}

pub fn build_sign_in(state: &AppState) -> Callback<Role> {
    let dispatcher = state.dispatcher();
    Callback::from(move |role: Role| {
        crate::a11y::set_status(&crate::i18n::t("sign_in.loading"));
        dispatcher.dispatch(Action::BeginSignIn(role));
    })
}

pub fn build_logout(state: &AppState) -> Callback<()> {
    let dispatcher = state.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(Action::Logout))
}
