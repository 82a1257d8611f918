use crate::app::state::AppState;
use kindworld_core::{Action, ActivityField, CertificateField, Modal, UserField};
use yew::prelude::*;

pub fn build_open_modal(state: &AppState) -> Callback<Modal> {
    let dispatcher = state.dispatcher();
    Callback::from(move |modal: Modal| dispatcher.dispatch(Action::OpenModal(modal)))
}

pub fn build_close_modal(state: &AppState) -> Callback<()> {
    let dispatcher = state.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(Action::CloseModal))
}

pub fn build_edit_activity(state: &AppState) -> Callback<(ActivityField, String)> {
    let dispatcher = state.dispatcher();
    Callback::from(move |(field, value): (ActivityField, String)| {
        dispatcher.dispatch(Action::EditActivity(field, value));
    })
}

pub fn build_submit_activity(state: &AppState) -> Callback<()> {
    let dispatcher = state.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(Action::SubmitActivity))
}

pub fn build_edit_certificate(state: &AppState) -> Callback<(CertificateField, String)> {
    let dispatcher = state.dispatcher();
    Callback::from(move |(field, value): (CertificateField, String)| {
        dispatcher.dispatch(Action::EditCertificate(field, value));
    })
}

pub fn build_submit_certificate(state: &AppState) -> Callback<()> {
    let dispatcher = state.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(Action::SubmitCertificate))
}

pub fn build_begin_user_edit(state: &AppState) -> Callback<u32> {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: u32| dispatcher.dispatch(Action::BeginUserEdit(id)))
}

pub fn build_edit_user(state: &AppState) -> Callback<(UserField, String)> {
    let dispatcher = state.dispatcher();
    Callback::from(move |(field, value): (UserField, String)| {
        dispatcher.dispatch(Action::EditUser(field, value));
    })
}

pub fn build_submit_user_edit(state: &AppState) -> Callback<()> {
    let dispatcher = state.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(Action::SubmitUserEdit))
}
