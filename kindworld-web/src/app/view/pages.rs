use crate::app::view::handlers::AppHandlers;
use crate::pages::{
    certificates::CertificatesPage, dashboard::DashboardPage, landing::LandingPage,
    missions::MissionsPage, not_found::NotFound, profile::ProfilePage, sign_in::SignInPage,
};
use crate::router::Route;
use kindworld_core::{AppStore, Page};
use std::rc::Rc;
use yew::prelude::*;

pub fn render_main_view(store: &Rc<AppStore>, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    if matches!(route, None | Some(Route::NotFound)) {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    match store.page() {
        Page::Landing => {
            let on_start = handlers.navigate.reform(|()| Page::SignIn);
            html! { <LandingPage stats={store.stats()} {on_start} /> }
        }
        Page::SignIn => html! {
            <SignInPage
                selected={store.session().selected_role}
                signing_in={store.session().signing_in}
                on_select={handlers.select_role.clone()}
                on_submit={handlers.sign_in.clone()}
                on_back={handlers.navigate.reform(|()| Page::Landing)}
            />
        },
        Page::Dashboard => html! {
            <DashboardPage
                store={Rc::clone(store)}
                on_navigate={handlers.navigate.clone()}
                on_open_modal={handlers.open_modal.clone()}
                on_begin_user_edit={handlers.begin_user_edit.clone()}
            />
        },
        Page::Missions => html! {
            <MissionsPage
                store={Rc::clone(store)}
                on_toggle={handlers.toggle_mission.clone()}
                on_query={handlers.mission_query.clone()}
                on_category={handlers.mission_category.clone()}
                on_joined_filter={handlers.joined_filter.clone()}
                on_open_modal={handlers.open_modal.clone()}
            />
        },
        Page::Certificates => html! {
            <CertificatesPage
                store={Rc::clone(store)}
                on_download={handlers.download.clone()}
                on_open_modal={handlers.open_modal.clone()}
            />
        },
        Page::Profile => render_profile(store),
    }
}

fn render_profile(store: &AppStore) -> Html {
    let Some(user) = store.user() else {
        return Html::default();
    };
    let hours = store.viewer_hours();
    html! {
        <ProfilePage
            user={user.clone()}
            earned_certificates={store.certificates().earned_count(hours)}
            total_certificates={store.certificates().len()}
            lang={AttrValue::from(store.language().to_string())}
        />
    }
}
