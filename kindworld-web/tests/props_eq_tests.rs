use std::rc::Rc;

use kindworld_core::AppStore;
use kindworld_web::pages::certificates::CertificatesPageProps;
use kindworld_web::pages::dashboard::DashboardPageProps;
use kindworld_web::pages::missions::MissionsPageProps;
use yew::Callback;

fn missions_props(store: Rc<AppStore>) -> MissionsPageProps {
    MissionsPageProps {
        store,
        on_toggle: Callback::noop(),
        on_query: Callback::noop(),
        on_category: Callback::noop(),
        on_joined_filter: Callback::noop(),
        on_open_modal: Callback::noop(),
    }
}

#[test]
fn store_props_use_pointer_equality() {
    let store = Rc::new(AppStore::from_static(1));
    let twin = Rc::new(AppStore::from_static(1));

    assert!(missions_props(store.clone()) == missions_props(store.clone()));
    assert!(missions_props(store.clone()) != missions_props(twin.clone()));

    let dashboard = |store: Rc<AppStore>| DashboardPageProps {
        store,
        on_navigate: Callback::noop(),
        on_open_modal: Callback::noop(),
        on_begin_user_edit: Callback::noop(),
    };
    assert!(dashboard(store.clone()) == dashboard(store.clone()));
    assert!(dashboard(store.clone()) != dashboard(twin.clone()));

    let certificates = |store: Rc<AppStore>| CertificatesPageProps {
        store,
        on_download: Callback::noop(),
        on_open_modal: Callback::noop(),
    };
    assert!(certificates(store.clone()) == certificates(store));
    assert!(certificates(twin.clone()) != certificates(Rc::new((*twin).clone())));
}

#[test]
fn language_switch_changes_props_of_text_only_components() {
    use kindworld_core::{Action, Page, Role};
    use kindworld_web::components::footer;
    use kindworld_web::components::hours_chart;
    use kindworld_web::pages::profile::ProfilePageProps;
    use yew::AttrValue;

    let before = AppStore::from_static(1)
        .reduce(Action::Navigate(Page::SignIn))
        .reduce(Action::BeginSignIn(Role::Volunteer))
        .reduce(Action::CompleteSignIn);
    let after = before.clone().reduce(Action::SetLanguage(String::from("fr")));
    let lang = |store: &AppStore| AttrValue::from(store.language().to_string());

    let footer_props = |store: &AppStore| footer::Props { lang: lang(store) };
    assert!(footer_props(&before) != footer_props(&after));

    let chart = |store: &AppStore| hours_chart::Props {
        months: store.monthly_hours().to_vec(),
        bars: store.monthly_bars(),
        lang: lang(store),
    };
    assert!(chart(&before) == chart(&before.clone()));
    assert!(chart(&before) != chart(&after));

    let profile = |store: &AppStore| ProfilePageProps {
        user: store.user().cloned().expect("session user"),
        earned_certificates: 4,
        total_certificates: 6,
        lang: lang(store),
    };
    assert!(profile(&before) != profile(&after));
}
