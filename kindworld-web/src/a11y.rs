// Accessibility helpers

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const HC_KEY: &str = "kindworld.hc";

/// Focus ring and screen-reader utility CSS, injected ahead of the app styles.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #2f9e6f;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Write `msg` into the polite live region.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id("app-status"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Toggle the `hc` class on `<html>` and persist the choice.
pub fn set_high_contrast(enabled: bool) {
    if let Some(html) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = if enabled {
            html.class_list().add_1("hc")
        } else {
            html.class_list().remove_1("hc")
        };
    }

    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(HC_KEY, if enabled { "1" } else { "0" });
    }
}

#[must_use]
pub fn high_contrast_enabled() -> bool {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(HC_KEY).ok().flatten())
        .is_some_and(|v| v == "1")
}

const FOCUSABLE: &str =
    "button:not([disabled]), [href], input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Move focus to the first focusable element inside the container with `id`.
pub fn trap_focus_in(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let first = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|container| container.query_selector(FOCUSABLE).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(el) = first {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, FOCUSABLE);
    }
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_covers_sr_only() {
        assert!(visible_focus_css().contains(".sr-only"));
    }

    #[test]
    fn high_contrast_defaults_off_without_storage() {
        assert!(!high_contrast_enabled());
        set_high_contrast(true);
        set_status("ignored on host");
    }
}
