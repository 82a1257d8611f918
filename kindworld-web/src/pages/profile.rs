use crate::i18n::{fmt_date_iso, t, tr_with};
use kindworld_core::User;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfilePageProps {
    pub user: User,
    pub earned_certificates: usize,
    pub total_certificates: usize,
    /// Active language, so a switch re-renders the labels.
    pub lang: AttrValue,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let u = &props.user;
    let earned = props.earned_certificates.to_string();
    let total = props.total_certificates.to_string();
    html! {
        <section class="profile" lang={props.lang.clone()}>
            <h1>{ t("profile.title") }</h1>
            <div class="profile__card panel">
                <div class="avatar" aria-hidden="true">{ u.initials() }</div>
                <div>
                    <h2>{ u.name.clone() }</h2>
                    <span class="chip">{ t(&format!("roles.{}", u.role.key())) }</span>
                </div>
                <dl class="profile__facts">
                    <dt>{ t("profile.email") }</dt><dd>{ u.email.clone() }</dd>
                    <dt>{ t("profile.phone") }</dt><dd>{ u.phone.clone() }</dd>
                    <dt>{ t("profile.location") }</dt><dd>{ u.location.clone() }</dd>
                    <dt>{ t("profile.member_since") }</dt><dd>{ fmt_date_iso(&u.member_since) }</dd>
                </dl>
                <h3>{ t("profile.bio") }</h3>
                <p>{ u.bio.clone() }</p>
            </div>
            <div class="panel">
                <h3>{ t("profile.certificates") }</h3>
                <p id="certificate-summary">
                    { tr_with("certificates.summary", &[("earned", earned.as_str()), ("total", total.as_str())]) }
                </p>
            </div>
            <div class="panel">
                <h3>{ t("profile.badges") }</h3>
                <ul class="badge-list">
                    { for u.badges.iter().map(|b| html! {
                        <li class="badge">
                            <span aria-hidden="true">{ b.icon.clone() }</span>
                            <strong>{ b.name.clone() }</strong>
                            <span>{ b.company.clone() }</span>
                            <time>{ fmt_date_iso(&b.date) }</time>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
