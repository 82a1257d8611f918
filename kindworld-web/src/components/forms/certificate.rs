use super::fields::{SelectField, SelectOption, TextAreaField, TextField, bind, on_submit};
use crate::i18n::t;
use kindworld_core::{CertificateDraft, CertificateField, CertificateKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CertificateFormProps {
    pub draft: CertificateDraft,
    pub on_edit: Callback<(CertificateField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(CertificateForm)]
pub fn certificate_form(props: &CertificateFormProps) -> Html {
    let draft = &props.draft;
    let edit = |field| bind(&props.on_edit, field);
    let kinds: Vec<SelectOption> = [CertificateKind::Certificate, CertificateKind::Medal]
        .iter()
        .map(|k| SelectOption::new(k.key(), t(&format!("certificates.{}", k.key()))))
        .collect();
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form class="modal-form" onsubmit={on_submit(&props.on_submit)}>
            <TextField id="certificate-name" label={t("forms.name")} value={draft.name.clone()} required=true on_input={edit(CertificateField::Name)} />
            <TextField id="certificate-hours" label={t("forms.required_hours")} input_type="number" value={draft.required_hours.clone()} on_input={edit(CertificateField::RequiredHours)} />
            <TextField id="certificate-company" label={t("forms.company")} value={draft.company.clone()} on_input={edit(CertificateField::Company)} />
            <TextAreaField id="certificate-description" label={t("forms.description")} value={draft.description.clone()} on_input={edit(CertificateField::Description)} />
            <div class="field-row">
                <TextField id="certificate-icon" label={t("forms.icon")} value={draft.icon.clone()} on_input={edit(CertificateField::Icon)} />
                <SelectField id="certificate-kind" label={t("forms.kind")} value={draft.kind.key()} options={kinds} on_change={edit(CertificateField::Kind)} />
            </div>
            <div class="modal-form__actions">
                <button type="button" class="btn btn--ghost" onclick={cancel}>{ t("forms.cancel") }</button>
                <button type="submit" class="btn btn--primary">{ t("forms.submit") }</button>
            </div>
        </form>
    }
}
