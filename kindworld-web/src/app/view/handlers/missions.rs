use crate::app::state::AppState;
use kindworld_core::{Action, CertificateId, JoinedFilter, MissionId};
use yew::prelude::*;

pub fn build_toggle_mission(state: &AppState) -> Callback<MissionId> {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: MissionId| dispatcher.dispatch(Action::ToggleMission(id)))
}

pub fn build_mission_query(state: &AppState) -> Callback<String> {
    let dispatcher = state.dispatcher();
    Callback::from(move |query: String| dispatcher.dispatch(Action::SetMissionQuery(query)))
}

pub fn build_mission_category(state: &AppState) -> Callback<Option<String>> {
    let dispatcher = state.dispatcher();
    Callback::from(move |category: Option<String>| {
        dispatcher.dispatch(Action::SetMissionCategory(category));
    })
}

pub fn build_joined_filter(state: &AppState) -> Callback<JoinedFilter> {
    let dispatcher = state.dispatcher();
    Callback::from(move |filter: JoinedFilter| {
        dispatcher.dispatch(Action::SetJoinedFilter(filter));
    })
}

/// Issue a certificate stamped with today's date; the saver hook writes the file.
pub fn build_download(state: &AppState) -> Callback<CertificateId> {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: CertificateId| {
        dispatcher.dispatch(Action::DownloadCertificate {
            id,
            issued_on: crate::dom::today_iso(),
            now_ms: crate::dom::now_ms(),
        });
    })
}
