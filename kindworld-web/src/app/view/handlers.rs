mod forms;
mod missions;
mod prefs;
mod session;

use crate::app::state::AppState;
use forms::{
    build_begin_user_edit, build_close_modal, build_edit_activity, build_edit_certificate,
    build_edit_user, build_open_modal, build_submit_activity, build_submit_certificate,
    build_submit_user_edit,
};
use kindworld_core::{
    ActivityField, CertificateField, CertificateId, JoinedFilter, MissionId, Modal,
    NotificationId, Page, Role, UserField,
};
use missions::{
    build_download, build_joined_filter, build_mission_category, build_mission_query,
    build_toggle_mission,
};
use prefs::{build_dismiss, build_go_home, build_lang_change, build_toggle_hc};
use session::{build_logout, build_navigate, build_select_role, build_sign_in};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<Page>,
    pub select_role: Callback<Role>,
    pub sign_in: Callback<Role>,
    pub logout: Callback<()>,
    pub toggle_mission: Callback<MissionId>,
    pub mission_query: Callback<String>,
    pub mission_category: Callback<Option<String>>,
    pub joined_filter: Callback<JoinedFilter>,
    pub open_modal: Callback<Modal>,
    pub close_modal: Callback<()>,
    pub edit_activity: Callback<(ActivityField, String)>,
    pub submit_activity: Callback<()>,
    pub edit_certificate: Callback<(CertificateField, String)>,
    pub submit_certificate: Callback<()>,
    pub begin_user_edit: Callback<u32>,
    pub edit_user: Callback<(UserField, String)>,
    pub submit_user_edit: Callback<()>,
    pub download: Callback<CertificateId>,
    pub dismiss: Callback<NotificationId>,
    pub lang_change: Callback<String>,
    pub toggle_hc: Callback<bool>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            navigate: build_navigate(state),
            select_role: build_select_role(state),
            sign_in: build_sign_in(state),
            logout: build_logout(state),
            toggle_mission: build_toggle_mission(state),
            mission_query: build_mission_query(state),
            mission_category: build_mission_category(state),
            joined_filter: build_joined_filter(state),
            open_modal: build_open_modal(state),
            close_modal: build_close_modal(state),
            edit_activity: build_edit_activity(state),
            submit_activity: build_submit_activity(state),
            edit_certificate: build_edit_certificate(state),
            submit_certificate: build_submit_certificate(state),
            begin_user_edit: build_begin_user_edit(state),
            edit_user: build_edit_user(state),
            submit_user_edit: build_submit_user_edit(state),
            download: build_download(state),
            dismiss: build_dismiss(state),
            lang_change: build_lang_change(state),
            toggle_hc: build_toggle_hc(state),
            go_home: build_go_home(state, navigator),
        }
    }
}
