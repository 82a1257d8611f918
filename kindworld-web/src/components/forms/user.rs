use super::fields::{SelectField, SelectOption, TextField, bind, on_submit};
use crate::i18n::t;
use kindworld_core::{Role, UserEditDraft, UserField, UserStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserFormProps {
    pub draft: UserEditDraft,
    pub on_edit: Callback<(UserField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let draft = &props.draft;
    let edit = |field| bind(&props.on_edit, field);
    let roles: Vec<SelectOption> = Role::ALL
        .iter()
        .map(|r| SelectOption::new(r.key(), t(&format!("roles.{}", r.key()))))
        .collect();
    let statuses: Vec<SelectOption> = [UserStatus::Active, UserStatus::Inactive]
        .iter()
        .map(|s| SelectOption::new(s.key(), t(&format!("users.{}", s.key()))))
        .collect();
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form class="modal-form" onsubmit={on_submit(&props.on_submit)}>
            <TextField id="user-name" label={t("forms.name")} value={draft.name.clone()} required=true on_input={edit(UserField::Name)} />
            <TextField id="user-email" label={t("forms.email")} input_type="email" value={draft.email.clone()} required=true on_input={edit(UserField::Email)} />
            <div class="field-row">
                <SelectField id="user-role" label={t("forms.role")} value={draft.role.key()} options={roles} on_change={edit(UserField::Role)} />
                <SelectField id="user-status" label={t("forms.status")} value={draft.status.key()} options={statuses} on_change={edit(UserField::Status)} />
            </div>
            <TextField id="user-hours" label={t("forms.hours")} input_type="number" value={draft.hours.clone()} on_input={edit(UserField::Hours)} />
            <div class="modal-form__actions">
                <button type="button" class="btn btn--ghost" onclick={cancel}>{ t("forms.cancel") }</button>
                <button type="submit" class="btn btn--primary">{ t("forms.submit") }</button>
            </div>
        </form>
    }
}
