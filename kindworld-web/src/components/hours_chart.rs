use crate::i18n::t;
use kindworld_core::MonthlyHours;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub months: Vec<MonthlyHours>,
    /// Bar heights in percent of the busiest month, parallel to `months`.
    pub bars: Vec<u8>,
    pub lang: AttrValue,
}

#[function_component(HoursChart)]
pub fn hours_chart(props: &Props) -> Html {
    html! {
        <section class="hours-chart" lang={props.lang.clone()} aria-label={t("dashboard.monthly_hours")}>
            <h2>{ t("dashboard.monthly_hours") }</h2>
            <div class="hours-chart__bars">
                { for props.months.iter().zip(&props.bars).map(|(month, height)| html! {
                    <div class="hours-chart__column" title={format!("{}: {}", month.month, month.hours)}>
                        <div class="hours-chart__bar" style={format!("height: {height}%")}></div>
                        <span class="hours-chart__label">{ month.month.clone() }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
