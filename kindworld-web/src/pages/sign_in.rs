use crate::i18n::t;
use kindworld_core::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SignInPageProps {
    pub selected: Role,
    /// Role whose sign-in is pending; disables the form while set.
    #[prop_or_default]
    pub signing_in: Option<Role>,
    pub on_select: Callback<Role>,
    pub on_submit: Callback<Role>,
    pub on_back: Callback<()>,
}

#[function_component(SignInPage)]
pub fn sign_in_page(props: &SignInPageProps) -> Html {
    let busy = props.signing_in.is_some();
    let submit = {
        let role = props.selected;
        props.on_submit.reform(move |_: MouseEvent| role)
    };
    let back = props.on_back.reform(|_: MouseEvent| ());

    html! {
        <section class="sign-in panel">
            <h1>{ t("sign_in.title") }</h1>
            <p>{ t("sign_in.subtitle") }</p>
            <div class="role-grid" role="radiogroup" aria-label={t("sign_in.subtitle")}>
                { for Role::ALL.iter().map(|role| {
                    let role = *role;
                    let selected = role == props.selected;
                    let onclick = props.on_select.reform(move |_: MouseEvent| role);
                    html! {
                        <button
                            type="button"
                            id={format!("role-{}", role.key())}
                            class={classes!("role-card", selected.then_some("role-card--selected"))}
                            role="radio"
                            aria-checked={if selected { "true" } else { "false" }}
                            disabled={busy}
                            {onclick}
                        >
                            <span class="role-card__icon" aria-hidden="true">{ role.icon() }</span>
                            <strong>{ t(&format!("roles.{}", role.key())) }</strong>
                            <span>{ t(&format!("sign_in.{}_desc", role.key())) }</span>
                        </button>
                    }
                }) }
            </div>
            <div class="sign-in__actions">
                <button type="button" class="btn btn--ghost" onclick={back} disabled={busy}>
                    { t("sign_in.back") }
                </button>
                <button id="sign-in-btn" type="button" class="btn btn--primary" onclick={submit} disabled={busy} aria-busy={if busy { "true" } else { "false" }}>
                    { if busy { t("sign_in.loading") } else { t("sign_in.submit") } }
                </button>
            </div>
        </section>
    }
}
