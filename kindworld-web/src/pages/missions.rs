use crate::components::mission_card::MissionCard;
use crate::i18n::t;
use kindworld_core::{AppStore, JoinedFilter, MissionId, Modal};
use std::rc::Rc;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct MissionsPageProps {
    pub store: Rc<AppStore>,
    pub on_toggle: Callback<MissionId>,
    pub on_query: Callback<String>,
    pub on_category: Callback<Option<String>>,
    pub on_joined_filter: Callback<JoinedFilter>,
    pub on_open_modal: Callback<Modal>,
}

impl PartialEq for MissionsPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

const fn joined_filter_key(filter: JoinedFilter) -> &'static str {
    match filter {
        JoinedFilter::All => "all",
        JoinedFilter::JoinedOnly => "joined",
        JoinedFilter::OpenOnly => "open",
    }
}

fn parse_joined_filter(key: &str) -> JoinedFilter {
    match key {
        "joined" => JoinedFilter::JoinedOnly,
        "open" => JoinedFilter::OpenOnly,
        _ => JoinedFilter::All,
    }
}

fn select_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|sel| sel.value())
}

#[function_component(MissionsPage)]
pub fn missions_page(props: &MissionsPageProps) -> Html {
    let store = &props.store;
    let filter = store.mission_filter();
    let can_publish = store.user().is_some_and(|u| u.role.can_publish());
    let visible = store.visible_missions();

    let on_search = {
        let cb = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_category = {
        let cb = props.on_category.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                cb.emit((!value.is_empty()).then_some(value));
            }
        })
    };
    let on_joined = {
        let cb = props.on_joined_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                cb.emit(parse_joined_filter(&value));
            }
        })
    };
    let create = props
        .on_open_modal
        .reform(|_: MouseEvent| Modal::CreateActivity);
    let active_category = filter.category.clone().unwrap_or_default();

    html! {
        <section class="missions">
            <div class="missions__header">
                <h1>{ t("missions.title") }</h1>
                if can_publish {
                    <button id="create-activity-btn" type="button" class="btn btn--primary" onclick={create}>
                        { "＋ " }{ t("dashboard.create_activity") }
                    </button>
                }
            </div>
            <div class="missions__filters">
                <label for="mission-search" class="sr-only">{ t("missions.search") }</label>
                <input
                    id="mission-search"
                    type="search"
                    placeholder={t("missions.search")}
                    value={filter.query.clone()}
                    oninput={on_search}
                />
                <select id="mission-category" aria-label={t("forms.category")} onchange={on_category}>
                    <option value="" selected={active_category.is_empty()}>{ t("missions.all_categories") }</option>
                    { for store.missions().categories().into_iter().map(|c| html! {
                        <option value={c.clone()} selected={c == active_category}>{ c.clone() }</option>
                    }) }
                </select>
                <select id="mission-joined" aria-label={t("missions.filter_all")} onchange={on_joined}>
                    { for [JoinedFilter::All, JoinedFilter::JoinedOnly, JoinedFilter::OpenOnly].into_iter().map(|f| {
                        let key = joined_filter_key(f);
                        html! {
                            <option value={key} selected={f == filter.joined}>{ t(&format!("missions.filter_{key}")) }</option>
                        }
                    }) }
                </select>
            </div>
            if visible.is_empty() {
                <p class="empty">{ t("missions.empty") }</p>
            } else {
                <div class="mission-grid">
                    { for visible.into_iter().map(|m| html! {
                        <MissionCard key={m.id} mission={m.clone()} on_toggle={props.on_toggle.clone()} />
                    }) }
                </div>
            }
        </section>
    }
}
