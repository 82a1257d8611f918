use crate::i18n::{locales, t};
use kindworld_core::{Page, Role};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
    pub high_contrast: bool,
    pub on_toggle_hc: Callback<bool>,
    #[prop_or_default]
    pub page: Page,
    /// Signed-in display name; `None` hides the tab bar and logout.
    #[prop_or_default]
    pub user_name: Option<AttrValue>,
    #[prop_or_default]
    pub role: Option<Role>,
    #[prop_or_default]
    pub on_navigate: Callback<Page>,
    #[prop_or_default]
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    let toggle_hc = {
        let cb = p.on_toggle_hc.clone();
        let next = !p.high_contrast;
        Callback::from(move |_| cb.emit(next))
    };

    let tabs = p.user_name.as_ref().map(|_| {
        html! {
            <nav class="tabs" aria-label={t("nav.dashboard")}>
                { for Page::TABS.iter().map(|tab| {
                    let tab = *tab;
                    let active = tab == p.page;
                    let onclick = p.on_navigate.reform(move |_: MouseEvent| tab);
                    html! {
                        <button
                            type="button"
                            id={format!("tab-{}", tab.label_key().trim_start_matches("nav."))}
                            class={classes!("tab", active.then_some("tab--active"))}
                            aria-current={active.then_some("page")}
                            {onclick}
                        >
                            { t(tab.label_key()) }
                        </button>
                    }
                }) }
            </nav>
        }
    });

    let account = p.user_name.as_ref().map(|name| {
        let logout = p.on_logout.reform(|_: MouseEvent| ());
        html! {
            <div class="account">
                <span class="account__name">
                    { p.role.map(Role::icon).unwrap_or_default() }{ " " }{ name.clone() }
                </span>
                <button id="logout-btn" type="button" class="btn btn--ghost" onclick={logout}>
                    { t("nav.logout") }
                </button>
            </div>
        }
    });

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("nav.skip_to_content") }</a>
            <div class="header-content">
                <span class="brand">{ "KindWorld" }</span>
                { tabs.unwrap_or_default() }
                <div class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|m| html! {
                            <option value={m.code} selected={m.code == p.current_lang}>{ m.name }</option>
                        }) }
                    </select>
                    <button
                        id="hc-toggle"
                        type="button"
                        class="btn btn--ghost"
                        aria-pressed={if p.high_contrast { "true" } else { "false" }}
                        onclick={toggle_hc}
                    >
                        { t("nav.high_contrast") }
                    </button>
                    { account.unwrap_or_default() }
                </div>
            </div>
        </header>
    }
}
