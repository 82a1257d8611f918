//! Scheduled work: sign-in latency, toast expiry, and certificate saves.
//!
//! Every timer dispatches back into the reducer, so it always lands on the
//! latest store rather than the one captured when it was scheduled.

#[cfg(any(target_arch = "wasm32", test))]
use kindworld_core::{CertificateDocument, NotificationId};
#[cfg(any(target_arch = "wasm32", test))]
use std::collections::HashSet;

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use kindworld_core::Action;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Pick the schedule entries not yet armed and forget ids that are gone.
#[cfg(any(target_arch = "wasm32", test))]
fn unscheduled(
    schedule: impl IntoIterator<Item = (NotificationId, u32)>,
    armed: &mut HashSet<NotificationId>,
) -> Vec<(NotificationId, u32)> {
    let live: Vec<(NotificationId, u32)> = schedule.into_iter().collect();
    armed.retain(|id| live.iter().any(|(live_id, _)| live_id == id));
    live.into_iter()
        .filter(|(id, _)| armed.insert(*id))
        .collect()
}

/// Documents generated since the last save pass.
#[cfg(any(target_arch = "wasm32", test))]
fn unsaved<'a>(docs: &'a [CertificateDocument], saved: &mut usize) -> &'a [CertificateDocument] {
    let start = (*saved).min(docs.len());
    *saved = docs.len();
    &docs[start..]
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sign_in_timer(app_state: &AppState) {
    let signing_in = app_state.store.is_signing_in();
    let delay = app_state.store.config().sign_in_delay_ms;
    let dispatcher = app_state.dispatcher();
    use_effect_with(signing_in, move |signing_in| {
        if *signing_in {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::sleep_ms(delay).await {
                    log::error!("sign-in timer failed: {}", crate::dom::js_error_message(&err));
                }
                dispatcher.dispatch(Action::CompleteSignIn);
            });
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_notification_expiry(app_state: &AppState) {
    let armed = use_mut_ref(HashSet::<NotificationId>::new);
    let ids: Vec<NotificationId> = app_state
        .store
        .notifications()
        .items()
        .iter()
        .map(|n| n.id)
        .collect();
    let schedule: Vec<(NotificationId, u32)> =
        app_state.store.notifications().expiry_schedule().collect();
    let dispatcher = app_state.dispatcher();
    use_effect_with(ids, move |_| {
        for (id, ttl) in unscheduled(schedule, &mut armed.borrow_mut()) {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::sleep_ms(ttl).await {
                    log::error!("toast timer failed: {}", crate::dom::js_error_message(&err));
                }
                dispatcher.dispatch(Action::Expire(id));
            });
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_download_saver(app_state: &AppState) {
    let saved = use_mut_ref(|| app_state.store.downloads().len());
    let store = app_state.store();
    use_effect_with(store.downloads().len(), move |_| {
        for doc in unsaved(store.downloads(), &mut saved.borrow_mut()) {
            if let Err(err) = crate::download::save_text(&doc.file_name, &doc.body) {
                log::error!("saving {} failed: {err}", doc.file_name);
            }
        }
    });
}
