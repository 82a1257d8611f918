use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Active language; a change forces the copy to re-render.
    pub lang: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    html! {
        <footer class="site-footer" lang={props.lang.clone()}>{ t("footer.copyright") }</footer>
    }
}
