use crate::i18n::{fmt_pct, t, tr_with};
use kindworld_core::{Certificate, CertificateId, CertificateKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub certificate: Certificate,
    pub earned: bool,
    pub progress_pct: u8,
    pub deficit: u32,
    #[prop_or_default]
    pub on_download: Callback<CertificateId>,
}

#[function_component(CertificateCard)]
pub fn certificate_card(props: &Props) -> Html {
    let c = &props.certificate;
    let required = c.required_hours.to_string();
    let kind_label = match c.kind {
        CertificateKind::Certificate => t("certificates.certificate"),
        CertificateKind::Medal => t("certificates.medal"),
    };

    let footer = if props.earned {
        let id = c.id.clone();
        let onclick = props.on_download.reform(move |_: MouseEvent| id.clone());
        html! {
            <button type="button" class="btn btn--primary" data-certificate={c.id.clone()} {onclick}>
                { "⬇ " }{ t("certificates.download") }
            </button>
        }
    } else {
        let deficit = props.deficit.to_string();
        html! {
            <>
                <div class="progress" role="progressbar" aria-label={t("certificates.progress")} aria-valuemin="0" aria-valuemax="100" aria-valuenow={props.progress_pct.to_string()}>
                    <div class="progress__bar" style={format!("width: {}%", props.progress_pct)}></div>
                </div>
                <p class="certificate-card__deficit">
                    { fmt_pct(props.progress_pct) }{ " · " }
                    { tr_with("certificates.deficit", &[("hours", deficit.as_str())]) }
                </p>
            </>
        }
    };

    html! {
        <article
            class={classes!("certificate-card", if props.earned { "certificate-card--earned" } else { "certificate-card--locked" })}
            id={c.id.clone()}
        >
            <div class="certificate-card__icon" aria-hidden="true">{ c.icon.clone() }</div>
            <div class="certificate-card__body">
                <span class="chip">{ kind_label }</span>
                <span class="chip">
                    { if props.earned { t("certificates.earned") } else { t("certificates.locked") } }
                </span>
                <h3>{ c.name.clone() }</h3>
                <p>{ c.description.clone() }</p>
                <p class="certificate-card__company">{ c.company.clone() }</p>
                <p class="certificate-card__required">{ tr_with("certificates.required", &[("hours", required.as_str())]) }</p>
                { footer }
            </div>
        </article>
    }
}
