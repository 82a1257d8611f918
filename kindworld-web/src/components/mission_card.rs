use crate::i18n::{t, tr_with};
use kindworld_core::{Mission, MissionId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mission: Mission,
    #[prop_or(true)]
    pub can_join: bool,
    #[prop_or_default]
    pub on_toggle: Callback<MissionId>,
}

#[function_component(MissionCard)]
pub fn mission_card(props: &Props) -> Html {
    let m = &props.mission;
    let id = m.id;
    let onclick = props.on_toggle.reform(move |_: MouseEvent| id);
    let current = m.current_participants.to_string();
    let max = m.max_participants.to_string();
    let spots = m.spots_left().to_string();
    let duration = m.duration_hours.to_string();
    let fill = m.fill_pct();

    let action = if !props.can_join {
        Html::default()
    } else if m.joined {
        html! { <button type="button" class="btn btn--ghost" data-mission={id.to_string()} {onclick}>{ t("missions.leave") }</button> }
    } else if m.is_full() {
        html! { <button type="button" class="btn" disabled=true>{ t("missions.full") }</button> }
    } else {
        html! { <button type="button" class="btn btn--primary" data-mission={id.to_string()} {onclick}>{ t("missions.join") }</button> }
    };

    html! {
        <article class={classes!("mission-card", m.joined.then_some("mission-card--joined"))} id={format!("mission-{id}")}>
            <header class="mission-card__header">
                <span class="chip">{ m.category.clone() }</span>
                <span class={classes!("chip", format!("chip--{}", m.difficulty.key()))}>
                    { t(&format!("difficulty.{}", m.difficulty.key())) }
                </span>
            </header>
            <h3>{ m.title.clone() }</h3>
            <p class="mission-card__description">{ m.description.clone() }</p>
            <ul class="mission-card__meta">
                <li>{ "📍 " }{ m.location.clone() }</li>
                <li>{ "📅 " }{ crate::i18n::fmt_date_iso(&m.date) }</li>
                <li>{ "⏱ " }{ tr_with("missions.duration", &[("hours", duration.as_str())]) }</li>
                <li>{ tr_with("missions.organizer", &[("name", m.organizer.as_str())]) }</li>
            </ul>
            <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={fill.to_string()}>
                <div class="progress__bar" style={format!("width: {fill}%")}></div>
            </div>
            <p class="mission-card__capacity">
                { tr_with("missions.participants", &[("current", current.as_str()), ("max", max.as_str())]) }
                { " · " }
                { tr_with("missions.spots_left", &[("count", spots.as_str())]) }
            </p>
            { action }
        </article>
    }
}
