use crate::i18n::{fmt_number, t};
use kindworld_core::PlatformStats;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingPageProps {
    pub stats: PlatformStats,
    pub on_start: Callback<()>,
}

fn stat(value: u32, key: &str) -> Html {
    html! {
        <div class="stat">
            <span class="stat__value">{ fmt_number(f64::from(value)) }</span>
            <span class="stat__label">{ t(key) }</span>
        </div>
    }
}

fn feature(icon: &str, key: &str) -> Html {
    html! {
        <article class="feature">
            <span class="feature__icon" aria-hidden="true">{ icon.to_string() }</span>
            <h3>{ t(&format!("landing.feature_{key}_title")) }</h3>
            <p>{ t(&format!("landing.feature_{key}_body")) }</p>
        </article>
    }
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let start = props.on_start.reform(|_: MouseEvent| ());
    let s = props.stats;
    html! {
        <section class="landing">
            <div class="hero">
                <h1>{ t("landing.title") }</h1>
                <p class="hero__subtitle">{ t("landing.subtitle") }</p>
                <button id="get-started-btn" type="button" class="btn btn--primary btn--large" onclick={start}>
                    { t("landing.cta") }
                </button>
            </div>
            <div class="stats-grid">
                { stat(s.volunteers, "landing.stats_volunteers") }
                { stat(s.organizations, "landing.stats_organizations") }
                { stat(s.hours_logged, "landing.stats_hours") }
                { stat(s.missions_completed, "landing.stats_missions") }
            </div>
            <div class="features">
                { feature("🤝", "missions") }
                { feature("🏅", "certificates") }
                { feature("📈", "impact") }
            </div>
        </section>
    }
}
