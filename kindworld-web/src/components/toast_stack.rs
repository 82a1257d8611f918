use crate::i18n::t;
use kindworld_core::{Notification, NotificationId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<Notification>,
    pub on_dismiss: Callback<NotificationId>,
}

/// Live region listing queued notifications, oldest on top.
#[function_component(ToastStack)]
pub fn toast_stack(props: &Props) -> Html {
    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            { for props.items.iter().map(|item| {
                let id = item.id;
                let dismiss = props.on_dismiss.reform(move |_: MouseEvent| id);
                html! {
                    <div class={classes!("toast", item.level.css_class())} data-toast-id={id.to_string()}>
                        <span class="toast__message">{ item.message.clone() }</span>
                        <button type="button" class="toast__dismiss" aria-label={t("toast.dismiss")} onclick={dismiss}>
                            {"✕"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
