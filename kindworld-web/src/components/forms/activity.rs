use super::fields::{SelectField, SelectOption, TextAreaField, TextField, bind, on_submit};
use crate::i18n::t;
use kindworld_core::{ACTIVITY_CATEGORIES, ActivityDraft, ActivityField, Difficulty};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityFormProps {
    pub draft: ActivityDraft,
    pub on_edit: Callback<(ActivityField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ActivityForm)]
pub fn activity_form(props: &ActivityFormProps) -> Html {
    let draft = &props.draft;
    let edit = |field| bind(&props.on_edit, field);
    let categories: Vec<SelectOption> = ACTIVITY_CATEGORIES
        .iter()
        .map(|c| SelectOption::new(*c, *c))
        .collect();
    let difficulties: Vec<SelectOption> = Difficulty::ALL
        .iter()
        .map(|d| SelectOption::new(d.key(), t(&format!("difficulty.{}", d.key()))))
        .collect();
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form class="modal-form" onsubmit={on_submit(&props.on_submit)}>
            <TextField id="activity-title" label={t("forms.title")} value={draft.title.clone()} required=true on_input={edit(ActivityField::Title)} />
            <TextAreaField id="activity-description" label={t("forms.description")} value={draft.description.clone()} on_input={edit(ActivityField::Description)} />
            <TextField id="activity-location" label={t("forms.location")} value={draft.location.clone()} required=true on_input={edit(ActivityField::Location)} />
            <TextField id="activity-date" label={t("forms.date")} input_type="date" value={draft.date.clone()} required=true on_input={edit(ActivityField::Date)} />
            <div class="field-row">
                <TextField id="activity-duration" label={t("forms.duration")} input_type="number" value={draft.duration.clone()} on_input={edit(ActivityField::Duration)} />
                <TextField id="activity-capacity" label={t("forms.capacity")} input_type="number" value={draft.capacity.clone()} on_input={edit(ActivityField::Capacity)} />
            </div>
            <div class="field-row">
                <SelectField id="activity-category" label={t("forms.category")} value={draft.category.clone()} options={categories} on_change={edit(ActivityField::Category)} />
                <SelectField id="activity-difficulty" label={t("forms.difficulty")} value={draft.difficulty.key()} options={difficulties} on_change={edit(ActivityField::Difficulty)} />
            </div>
            <div class="modal-form__actions">
                <button type="button" class="btn btn--ghost" onclick={cancel}>{ t("forms.cancel") }</button>
                <button type="submit" class="btn btn--primary">{ t("forms.submit") }</button>
            </div>
        </form>
    }
}
