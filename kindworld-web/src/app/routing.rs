#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(any(target_arch = "wasm32", test))]
use kindworld_core::{Page, navigation_allowed};
#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use kindworld_core::Action;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Route to push after the store moved from `previous` to `page`.
#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_page(previous: Page, page: Page, current_route: Option<&Route>) -> Option<Route> {
    if previous == page {
        return None;
    }
    let new_route = Route::from_page(page);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteDecision {
    Stay,
    Navigate(Page),
    Revert(Route),
}

/// What to do when the URL changes underneath the store.
#[cfg(any(target_arch = "wasm32", test))]
fn decide_route(page: Page, signed_in: bool, route: Option<&Route>) -> RouteDecision {
    let Some(target) = route.and_then(Route::to_page) else {
        return RouteDecision::Stay;
    };
    if target == page {
        RouteDecision::Stay
    } else if navigation_allowed(page, target, signed_in) {
        RouteDecision::Navigate(target)
    } else {
        RouteDecision::Revert(Route::from_page(page))
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_page(
    app_state: &AppState,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let page = app_state.store.page();
    let previous = use_mut_ref(|| page);
    use_effect_with(page, move |page| {
        let before = std::mem::replace(&mut *previous.borrow_mut(), *page);
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_page(before, *page, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_page_with_route(
    app_state: &AppState,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let page = app_state.store.page();
    let signed_in = app_state.store.is_signed_in();
    let dispatcher = app_state.dispatcher();
    use_effect_with(route, move |route| {
        match decide_route(page, signed_in, route.as_ref()) {
            RouteDecision::Stay => {}
            RouteDecision::Navigate(target) => dispatcher.dispatch(Action::Navigate(target)),
            RouteDecision::Revert(back) => {
                log::debug!("url {route:?} not reachable from {page:?}");
                if let Some(nav) = navigator.as_ref() {
                    nav.replace(&back);
                }
            }
        }
    });
}
