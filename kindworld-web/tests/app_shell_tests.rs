use futures::executor::block_on;
use kindworld_web::app::state::use_app_state;
use kindworld_web::app::view::render_app;
use kindworld_web::router::Route;
use yew::prelude::*;
use yew::LocalServerRenderer;

#[derive(Properties, PartialEq)]
struct ShellProps {
    route: Option<Route>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let state = use_app_state();
    render_app(&state, props.route.as_ref(), None)
}

fn render(route: Option<Route>) -> String {
    kindworld_web::i18n::set_lang("en");
    block_on(LocalServerRenderer::<Shell>::with_props(ShellProps { route }).render())
}

#[test]
fn shell_renders_landmarks_around_landing() {
    let html = render(Some(Route::Home));
    assert!(html.contains("href=\"#main\""));
    assert!(html.contains("id=\"main\""));
    assert!(html.contains("id=\"app-status\""));
    assert!(html.contains("get-started-btn"));
    assert!(html.contains("lang-select"));
    assert!(!html.contains("logout-btn"));
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn unknown_route_renders_not_found_inside_shell() {
    let html = render(Some(Route::NotFound));
    assert!(html.contains("Page not found"));
    assert!(html.contains("id=\"main\""));
}

#[test]
fn missing_route_falls_back_to_not_found() {
    let html = render(None);
    assert!(html.contains("Page not found"));
}

#[test]
fn shell_chrome_follows_the_active_language() {
    kindworld_web::i18n::set_lang("es");
    let html = block_on(
        LocalServerRenderer::<Shell>::with_props(ShellProps {
            route: Some(Route::Home),
        })
        .render(),
    );
    kindworld_web::i18n::set_lang("en");
    assert!(html.contains("Hecho con cariño"), "{html}");
    assert!(html.contains("Comenzar"));
}
