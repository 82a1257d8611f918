mod handlers;
mod pages;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::forms::{ActivityForm, CertificateForm, UserForm};
use crate::components::modal::Modal as Dialog;
use crate::components::toast_stack::ToastStack;
use crate::i18n::t;
use crate::router::Route;
use kindworld_core::{AppStore, Modal};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let store = state.store();
    let main_view = pages::render_main_view(&store, &handlers, route);
    let user = store.user();

    html! {
        <>
            <crate::components::header::Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={store.language().to_string()}
                high_contrast={*state.high_contrast}
                on_toggle_hc={handlers.toggle_hc.clone()}
                page={store.page()}
                user_name={user.map(|u| AttrValue::from(u.name.clone()))}
                role={user.map(|u| u.role)}
                on_navigate={handlers.navigate.clone()}
                on_logout={handlers.logout.clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="app-status" class="sr-only" aria-live="polite"></div>
                { main_view }
                { render_modal(&store, &handlers) }
            </main>
            <ToastStack
                items={store.notifications().items().to_vec()}
                on_dismiss={handlers.dismiss.clone()}
            />
            <crate::components::footer::Footer lang={AttrValue::from(store.language().to_string())} />
        </>
    }
}

fn render_modal(store: &AppStore, handlers: &AppHandlers) -> Html {
    let Some(modal) = store.modal() else {
        return Html::default();
    };
    let (title, return_focus, body) = match modal {
        Modal::CreateActivity => (
            t("forms.create_activity_title"),
            "create-activity-btn",
            html! {
                <ActivityForm
                    draft={store.activity_draft().clone()}
                    on_edit={handlers.edit_activity.clone()}
                    on_submit={handlers.submit_activity.clone()}
                    on_cancel={handlers.close_modal.clone()}
                />
            },
        ),
        Modal::CertificateTemplate => (
            t("forms.certificate_template_title"),
            "create-certificate-btn",
            html! {
                <CertificateForm
                    draft={store.certificate_draft().clone()}
                    on_edit={handlers.edit_certificate.clone()}
                    on_submit={handlers.submit_certificate.clone()}
                    on_cancel={handlers.close_modal.clone()}
                />
            },
        ),
        Modal::EditUser => (
            t("forms.edit_user_title"),
            "main",
            html! {
                <UserForm
                    draft={store.user_draft().clone()}
                    on_edit={handlers.edit_user.clone()}
                    on_submit={handlers.submit_user_edit.clone()}
                    on_cancel={handlers.close_modal.clone()}
                />
            },
        ),
    };
    html! {
        <Dialog
            open=true
            title={title}
            on_close={handlers.close_modal.clone()}
            return_focus_id={Some(AttrValue::from(return_focus))}
        >
            { body }
        </Dialog>
    }
}
