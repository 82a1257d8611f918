use crate::components::hours_chart::HoursChart;
use crate::components::user_table::UserTable;
use crate::i18n::{fmt_date_iso, fmt_number, fmt_pct, t, tr_with};
use kindworld_core::{AppStore, Badge, Modal, Page, Role};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct DashboardPageProps {
    pub store: Rc<AppStore>,
    pub on_navigate: Callback<Page>,
    pub on_open_modal: Callback<Modal>,
    pub on_begin_user_edit: Callback<u32>,
}

impl PartialEq for DashboardPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

fn summary_card(id: &str, value: String, key: &str) -> Html {
    html! {
        <div class="stat-card" id={id.to_string()}>
            <span class="stat-card__value">{ value }</span>
            <span class="stat-card__label">{ t(key) }</span>
        </div>
    }
}

fn publish_actions(on_open_modal: &Callback<Modal>) -> Html {
    let activity = on_open_modal.reform(|_: MouseEvent| Modal::CreateActivity);
    let template = on_open_modal.reform(|_: MouseEvent| Modal::CertificateTemplate);
    html! {
        <div class="dashboard__actions">
            <button id="create-activity-btn" type="button" class="btn btn--primary" onclick={activity}>
                { "＋ " }{ t("dashboard.create_activity") }
            </button>
            <button id="create-certificate-btn" type="button" class="btn" onclick={template}>
                { "🏅 " }{ t("dashboard.create_certificate") }
            </button>
        </div>
    }
}

fn upcoming(store: &AppStore, on_navigate: &Callback<Page>) -> Html {
    let missions = store.upcoming_missions();
    let browse = on_navigate.reform(|_: MouseEvent| Page::Missions);
    html! {
        <section class="panel upcoming">
            <h2>{ t("dashboard.upcoming") }</h2>
            if missions.is_empty() {
                <p>{ t("dashboard.no_upcoming") }</p>
            } else {
                <ul class="upcoming__list">
                    { for missions.iter().map(|m| html! {
                        <li>
                            <strong>{ m.title.clone() }</strong>
                            <span>{ fmt_date_iso(&m.date) }{ " · " }{ m.location.clone() }</span>
                        </li>
                    }) }
                </ul>
            }
            <button type="button" class="btn btn--ghost" onclick={browse}>{ t("nav.missions") }</button>
        </section>
    }
}

fn milestone(store: &AppStore) -> Html {
    let Some(next) = store.certificates().next_milestone(store.viewer_hours()) else {
        return Html::default();
    };
    let deficit = next.deficit.to_string();
    html! {
        <section class="panel milestone">
            <h2>{ tr_with("dashboard.next_milestone", &[("name", next.certificate.name.as_str())]) }</h2>
            <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={next.progress_pct.to_string()}>
                <div class="progress__bar" style={format!("width: {}%", next.progress_pct)}></div>
            </div>
            <p>{ fmt_pct(next.progress_pct) }{ " · " }{ tr_with("certificates.deficit", &[("hours", deficit.as_str())]) }</p>
        </section>
    }
}

/// Up to three badges, most recently awarded first.
fn recent_badges(badges: &[Badge]) -> Vec<&Badge> {
    let mut recent: Vec<&Badge> = badges.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(3);
    recent
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let store = &props.store;
    let Some(user) = store.user() else {
        return Html::default();
    };

    let badges = recent_badges(&user.badges);
    let admin = user.role == Role::Administrator;

    html! {
        <section class="dashboard">
            <h1>{ tr_with("dashboard.welcome", &[("name", user.first_name())]) }</h1>
            <div class="stat-cards">
                { summary_card("stat-hours", fmt_number(f64::from(user.hours)), "dashboard.hours") }
                { summary_card("stat-completed", user.completed_missions.to_string(), "dashboard.completed") }
                { summary_card("stat-organizations", user.organizations_helped.to_string(), "dashboard.organizations") }
                { summary_card("stat-rating", format!("{:.1}", user.rating), "dashboard.rating") }
            </div>
            if user.role.can_publish() {
                { publish_actions(&props.on_open_modal) }
            }
            <div class="dashboard__grid">
                <HoursChart
                    months={store.monthly_hours().to_vec()}
                    bars={store.monthly_bars()}
                    lang={AttrValue::from(store.language().to_string())}
                />
                { upcoming(store, &props.on_navigate) }
                { milestone(store) }
                <section class="panel badges">
                    <h2>{ t("dashboard.badges") }</h2>
                    if user.badges.is_empty() {
                        <p>{ t("dashboard.no_badges") }</p>
                    } else {
                        <ul class="badge-list">
                            { for badges.iter().map(|b| html! {
                                <li class="badge">
                                    <span aria-hidden="true">{ b.icon.clone() }</span>
                                    <strong>{ b.name.clone() }</strong>
                                    <time>{ fmt_date_iso(&b.date) }</time>
                                </li>
                            }) }
                        </ul>
                    }
                </section>
            </div>
            if admin {
                <section class="panel users">
                    <h2>{ t("dashboard.users_title") }</h2>
                    <UserTable
                        users={store.directory().all().to_vec()}
                        on_edit={props.on_begin_user_edit.clone()}
                    />
                </section>
            }
        </section>
    }
}
