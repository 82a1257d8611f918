use futures::executor::block_on;
use kindworld_core::{Action, AppStore, Page, Role};
use kindworld_web::pages::certificates::{CertificatesPage, CertificatesPageProps};
use kindworld_web::pages::dashboard::{DashboardPage, DashboardPageProps};
use kindworld_web::pages::landing::{LandingPage, LandingPageProps};
use kindworld_web::pages::missions::{MissionsPage, MissionsPageProps};
use kindworld_web::pages::not_found::NotFound;
use kindworld_web::pages::profile::{ProfilePage, ProfilePageProps};
use kindworld_web::pages::sign_in::{SignInPage, SignInPageProps};
use std::rc::Rc;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn signed_in(role: Role) -> AppStore {
    AppStore::from_static(21)
        .reduce(Action::Navigate(Page::SignIn))
        .reduce(Action::BeginSignIn(role))
        .reduce(Action::CompleteSignIn)
}

fn dashboard_html(store: AppStore) -> String {
    let props = DashboardPageProps {
        store: Rc::new(store),
        on_navigate: Callback::noop(),
        on_open_modal: Callback::noop(),
        on_begin_user_edit: Callback::noop(),
    };
    block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render())
}

#[test]
fn landing_page_shows_headline_and_stats() {
    kindworld_web::i18n::set_lang("en");
    let store = AppStore::from_static(1);
    let props = LandingPageProps {
        stats: store.stats(),
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
    assert!(html.contains("get-started-btn"));
    assert!(html.contains("Make a difference"));
    assert!(html.contains("Hours Logged"));
}

#[test]
fn landing_page_follows_language() {
    kindworld_web::i18n::set_lang("fr");
    let props = LandingPageProps {
        stats: AppStore::from_static(1).stats(),
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
    assert!(html.contains("Commencer"));
    kindworld_web::i18n::set_lang("en");
}

#[test]
fn sign_in_page_marks_selection_and_loading() {
    kindworld_web::i18n::set_lang("en");
    let idle = SignInPageProps {
        selected: Role::Organization,
        signing_in: None,
        on_select: Callback::noop(),
        on_submit: Callback::noop(),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SignInPage>::with_props(idle.clone()).render());
    assert!(html.contains("role-volunteer"));
    assert!(html.contains("role-card--selected"));
    assert!(html.contains("Sign In"));
    assert!(!html.contains("Signing in..."));

    let busy = SignInPageProps {
        signing_in: Some(Role::Organization),
        ..idle
    };
    let html = block_on(LocalServerRenderer::<SignInPage>::with_props(busy).render());
    assert!(html.contains("Signing in..."));
    assert!(html.contains("aria-busy=\"true\""));
}

#[test]
fn volunteer_dashboard_greets_and_lists_upcoming() {
    kindworld_web::i18n::set_lang("en");
    let html = dashboard_html(signed_in(Role::Volunteer));
    assert!(html.contains("Welcome back, Sarah!"));
    assert!(html.contains("stat-hours"));
    assert!(html.contains("Upcoming Missions"));
    assert!(html.contains("Next milestone"));
    assert!(!html.contains("create-activity-btn"));
    assert!(!html.contains("user-table"));
}

#[test]
fn organization_dashboard_offers_publishing() {
    kindworld_web::i18n::set_lang("en");
    let html = dashboard_html(signed_in(Role::Organization));
    assert!(html.contains("create-activity-btn"));
    assert!(html.contains("create-certificate-btn"));
    assert!(!html.contains("user-table"));
}

#[test]
fn admin_dashboard_shows_directory() {
    kindworld_web::i18n::set_lang("en");
    let html = dashboard_html(signed_in(Role::Administrator));
    assert!(html.contains("User Management"));
    assert!(html.contains("user-row-2"));
    assert!(html.contains("Michael Chen"));
    assert!(!html.contains("create-activity-btn"));
}

#[test]
fn signed_out_dashboard_renders_nothing() {
    kindworld_web::i18n::set_lang("en");
    let html = dashboard_html(AppStore::from_static(1));
    assert!(!html.contains("stat-hours"));
}

#[test]
fn missions_page_applies_filters() {
    kindworld_web::i18n::set_lang("en");
    let render = |store: AppStore| {
        let props = MissionsPageProps {
            store: Rc::new(store),
            on_toggle: Callback::noop(),
            on_query: Callback::noop(),
            on_category: Callback::noop(),
            on_joined_filter: Callback::noop(),
            on_open_modal: Callback::noop(),
        };
        block_on(LocalServerRenderer::<MissionsPage>::with_props(props).render())
    };

    let store = signed_in(Role::Volunteer).reduce(Action::Navigate(Page::Missions));
    let html = render(store.clone());
    for m in store.missions().all() {
        assert!(html.contains(&format!("mission-{}", m.id)), "{}", m.title);
    }
    assert!(html.contains("Mission Full"));

    let joined_only = store.reduce(Action::SetJoinedFilter(
        kindworld_core::JoinedFilter::JoinedOnly,
    ));
    let html = render(joined_only.clone());
    assert!(html.contains("mission-3"));
    assert!(!html.contains("mission-1\""));

    let nothing = joined_only.reduce(Action::SetMissionQuery(String::from("zzz-no-match")));
    let html = render(nothing);
    assert!(html.contains("No missions match your filters."));
}

#[test]
fn certificates_page_splits_earned_and_locked() {
    kindworld_web::i18n::set_lang("en");
    let store = signed_in(Role::Volunteer).reduce(Action::Navigate(Page::Certificates));
    let props = CertificatesPageProps {
        store: Rc::new(store),
        on_download: Callback::noop(),
        on_open_modal: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CertificatesPage>::with_props(props).render());
    assert!(html.contains("4 of 6 earned"));
    assert_eq!(html.matches("certificate-card--earned").count(), 4);
    assert_eq!(html.matches("certificate-card--locked").count(), 2);
    assert!(html.contains("220 more hours needed"));
    assert!(html.contains("470 more hours needed"));
}

#[test]
fn profile_page_summarises_certificates() {
    kindworld_web::i18n::set_lang("en");
    let store = signed_in(Role::Volunteer);
    let user = store.user().cloned().expect("session user");
    let props = ProfilePageProps {
        user,
        earned_certificates: 4,
        total_certificates: 6,
        lang: AttrValue::from("en"),
    };
    let html = block_on(LocalServerRenderer::<ProfilePage>::with_props(props).render());
    assert!(html.contains("Sarah Johnson"));
    assert!(html.contains("4 of 6 earned"));
    assert!(html.contains("My Profile"));
}

#[test]
fn not_found_page_renders_copy() {
    kindworld_web::i18n::set_lang("en");
    let props = kindworld_web::pages::not_found::Props {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Go home"));
}

#[test]
fn profile_page_renders_spanish_labels_after_a_switch() {
    let applied = kindworld_web::i18n::set_lang("es");
    let store = signed_in(Role::Volunteer).reduce(Action::SetLanguage(applied));
    let props = ProfilePageProps {
        user: store.user().cloned().expect("session user"),
        earned_certificates: 4,
        total_certificates: 6,
        lang: AttrValue::from(store.language().to_string()),
    };
    let html = block_on(LocalServerRenderer::<ProfilePage>::with_props(props).render());
    kindworld_web::i18n::set_lang("en");
    assert!(html.contains("Mi perfil"), "{html}");
    assert!(html.contains("4 de 6 obtenidos"));
    assert!(!html.contains("My Profile"));
}

#[test]
fn dashboard_lists_newest_badges_first() {
    kindworld_web::i18n::set_lang("en");
    let html = dashboard_html(signed_in(Role::Volunteer));
    let newest = html.find("Community Champion").expect("newest badge");
    let oldest = html.find("Mentor of the Year").expect("oldest badge");
    assert!(newest < oldest, "badges out of order");
}
