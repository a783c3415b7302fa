//! Browser glue via `web-sys`.
//!
//! Nothing here is required for the dashboard to work. Every failure is
//! reported back as a `JsValue` and logged by [`configure_platform`] or the
//! caller; none of them abort rendering.

use chrono::{DateTime, FixedOffset, Local};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlMetaElement, Url};

/// Class set on `<body>` so styles can tell the dashboard shell apart.
pub const BODY_CLASS: &str = "wtd-dashboard";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Readable text for a JS error value.
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Local wall-clock time.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Seed for the simulator, different on every page load.
pub fn random_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    millis ^ (noise << 32)
}

/// Whether the OS asks for a dark colour scheme.
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on `<html>` and update the browser chrome colour.
pub fn apply_theme(dark: bool) -> Result<(), JsValue> {
    let document = document()?;
    if let Some(root) = document.document_element() {
        root.class_list().toggle_with_force("dark", dark)?;
    }
    set_theme_color(&document, crate::theme::theme_color(dark))
}

fn set_theme_color(document: &Document, color: &str) -> Result<(), JsValue> {
    let meta = match document.query_selector("meta[name=\"theme-color\"]")? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute("name", "theme-color")?;
            let head = document
                .query_selector("head")?
                .ok_or_else(|| JsValue::from_str("no <head>"))?;
            head.append_child(&created)?;
            created
        }
    };
    let meta: HtmlMetaElement = meta.dyn_into().map_err(JsValue::from)?;
    meta.set_content(color);
    Ok(())
}

/// One-time page setup: body class and initial chrome colour. Failures are
/// logged and otherwise ignored.
pub fn configure_platform(dark: bool) {
    let result = document().and_then(|document| {
        if let Some(body) = document.body() {
            body.class_list().add_1(BODY_CLASS)?;
        }
        set_theme_color(&document, crate::theme::theme_color(dark))
    });
    if let Err(e) = result {
        log::error!("Platform configuration error: {}", describe(&e));
    }
}

/// Offer `contents` as a file download named `file_name`.
pub fn download_csv(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let document = document()?;
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into().map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    let body = document.body().ok_or_else(|| JsValue::from_str("no <body>"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;
    log::info!("Exported {} ({} bytes)", file_name, contents.len());
    Ok(())
}
