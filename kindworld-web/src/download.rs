//! Client-side save of generated certificate documents
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DownloadError {
    #[error("no browser document to attach the download to")]
    NoDocument,
    #[error("browser refused to {step}: {message}")]
    Browser { step: &'static str, message: String },
}

#[cfg(target_arch = "wasm32")]
fn browser(step: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> DownloadError {
    move |value| DownloadError::Browser {
        step,
        message: crate::dom::js_error_message(&value),
    }
}

/// Hand `body` to the browser as a `text/plain` file named `file_name`.
///
/// # Errors
/// Returns an error when there is no document or any Blob/URL/anchor step fails.
#[cfg(target_arch = "wasm32")]
pub fn save_text(file_name: &str, body: &str) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let document = crate::dom::document().ok_or(DownloadError::NoDocument)?;
    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(browser("create blob"))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser("create object url"))?;

    let anchor = document
        .create_element("a")
        .map_err(browser("create anchor"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DownloadError::Browser {
            step: "cast anchor",
            message: String::from("element is not an anchor"),
        })?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url).map_err(browser("revoke object url"))?;
    log::debug!("saved {file_name} ({} bytes)", body.len());
    Ok(())
}

/// Host builds have nowhere to save to.
///
/// # Errors
/// Always returns [`DownloadError::NoDocument`].
#[cfg(not(target_arch = "wasm32"))]
pub fn save_text(file_name: &str, body: &str) -> Result<(), DownloadError> {
    log::debug!("skipping save of {file_name} ({} bytes) outside a browser", body.len());
    Err(DownloadError::NoDocument)
}
