use crate::components::certificate_card::CertificateCard;
use crate::i18n::{t, tr_with};
use kindworld_core::{AppStore, CertificateId, Modal};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct CertificatesPageProps {
    pub store: Rc<AppStore>,
    pub on_download: Callback<CertificateId>,
    pub on_open_modal: Callback<Modal>,
}

impl PartialEq for CertificatesPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[function_component(CertificatesPage)]
pub fn certificates_page(props: &CertificatesPageProps) -> Html {
    let store = &props.store;
    let statuses = store.certificate_statuses();
    let earned = statuses.iter().filter(|s| s.earned).count().to_string();
    let total = statuses.len().to_string();
    let can_publish = store.user().is_some_and(|u| u.role.can_publish());
    let create = props
        .on_open_modal
        .reform(|_: MouseEvent| Modal::CertificateTemplate);

    html! {
        <section class="certificates">
            <div class="certificates__header">
                <h1>{ t("certificates.title") }</h1>
                <p id="certificate-summary">
                    { tr_with("certificates.summary", &[("earned", earned.as_str()), ("total", total.as_str())]) }
                </p>
                if can_publish {
                    <button id="create-certificate-btn" type="button" class="btn" onclick={create}>
                        { "🏅 " }{ t("dashboard.create_certificate") }
                    </button>
                }
            </div>
            <div class="certificate-grid">
                { for statuses.iter().map(|s| html! {
                    <CertificateCard
                        key={s.certificate.id.clone()}
                        certificate={s.certificate.clone()}
                        earned={s.earned}
                        progress_pct={s.progress_pct}
                        deficit={s.deficit}
                        on_download={props.on_download.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
