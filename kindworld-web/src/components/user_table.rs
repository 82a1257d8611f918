use crate::i18n::t;
use kindworld_core::DirectoryUser;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub users: Vec<DirectoryUser>,
    pub on_edit: Callback<u32>,
}

#[function_component(UserTable)]
pub fn user_table(props: &Props) -> Html {
    html! {
        <table class="user-table">
            <thead>
                <tr>
                    <th scope="col">{ t("users.name") }</th>
                    <th scope="col">{ t("users.email") }</th>
                    <th scope="col">{ t("users.role") }</th>
                    <th scope="col">{ t("users.hours") }</th>
                    <th scope="col">{ t("users.status") }</th>
                    <th scope="col">{ t("users.joined") }</th>
                    <th scope="col"><span class="sr-only">{ t("users.edit") }</span></th>
                </tr>
            </thead>
            <tbody>
                { for props.users.iter().map(|u| {
                    let id = u.id;
                    let onclick = props.on_edit.reform(move |_: MouseEvent| id);
                    html! {
                        <tr id={format!("user-row-{id}")}>
                            <td>{ u.name.clone() }</td>
                            <td>{ u.email.clone() }</td>
                            <td>{ t(&format!("roles.{}", u.role.key())) }</td>
                            <td>{ u.hours }</td>
                            <td class={format!("status status--{}", u.status.key())}>
                                { t(&format!("users.{}", u.status.key())) }
                            </td>
                            <td>{ crate::i18n::fmt_date_iso(&u.joined) }</td>
                            <td>
                                <button type="button" class="btn btn--ghost" data-user={id.to_string()} {onclick}>
                                    { t("users.edit") }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
