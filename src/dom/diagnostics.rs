//! Diagnostics wiring: `no-js` removal, script errors, outbound analytics,
//! broken images, and slow-load detection.

use wasm_bindgen::prelude::*;
use web_sys::{
    ErrorEvent, HtmlAnchorElement, HtmlImageElement, PerformanceObserver, PerformanceObserverEntryList,
    PerformanceObserverInit,
};

use super::{Bindings, Callback, Page, set_class, set_style, warn_unbound};
use crate::config::Config;
use crate::consts::{NO_JS_CLASS, OUTBOUND_LINK_SELECTOR};
use crate::diagnostics::{
    AnalyticsEvent, GTAG_COMMAND, LoadTiming, image_failure_message, script_error_message,
};
use crate::error::PageError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = gtag)]
    fn gtag(command: &str, action: &str, params: &JsValue) -> Result<(), JsValue>;
}

/// Drop the `no-js` marker so styles can tell the page is scripted.
pub fn remove_no_js(page: &Page) {
    let Some(root) = page.document.document_element() else {
        return;
    };
    if let Err(err) = set_class(&root, NO_JS_CLASS, false) {
        log::debug!("no-js not removed: {err}");
    }
}

/// Log uncaught script errors at warn level.
pub fn bind_error_log(page: &Page, bindings: &mut Bindings) {
    let result = bindings.listen(&page.window, "error", |event| {
        if let Some(err) = event.dyn_ref::<ErrorEvent>() {
            log::warn!("{}", script_error_message(&err.message(), &err.filename(), err.lineno()));
        }
    });
    warn_unbound("error log", result);
}

fn track_outbound(page: &Page, href: &str) -> Result<(), PageError> {
    if !page.has_global("gtag") {
        return Ok(());
    }
    let event = AnalyticsEvent::outbound_click(href);
    let params = js_sys::JSON::parse(&event.params_json()?)?;
    gtag(GTAG_COMMAND, event.action, &params)?;
    Ok(())
}

/// Report clicks on `target="_blank"` links. Never blocks the navigation.
pub fn bind_outbound_links(page: &Page, bindings: &mut Bindings) {
    for link in page.query_all(OUTBOUND_LINK_SELECTOR) {
        let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>().cloned() else {
            continue;
        };
        let page_for_cb = page.clone();
        let result = bindings.listen(&link, "click", move |_| {
            if let Err(err) = track_outbound(&page_for_cb, &anchor.href()) {
                log::warn!("Analytics tracking failed: {err}");
            }
        });
        warn_unbound("outbound link", result);
    }
}

/// Hide images that fail to load and log their source.
pub fn bind_images(page: &Page, bindings: &mut Bindings) {
    for img in page.query_all("img") {
        let Some(image) = img.dyn_ref::<HtmlImageElement>().cloned() else {
            continue;
        };
        let result = bindings.listen(&img, "error", move |_| {
            if let Err(err) = set_style(&image, "display", "none") {
                log::debug!("broken image not hidden: {err}");
            }
            log::warn!("{}", image_failure_message(&image.src()));
        });
        warn_unbound("image error", result);
    }
}

fn timing_of(entry: &JsValue) -> Option<LoadTiming> {
    let field = |name: &str| match js_sys::Reflect::get(entry, &JsValue::from_str(name)) {
        Ok(value) => value.as_f64(),
        Err(_) => None,
    };
    Some(LoadTiming {
        load_event_start: field("loadEventStart")?,
        load_event_end: field("loadEventEnd")?,
    })
}

fn observe_navigation(threshold_ms: f64, bindings: &mut Bindings) -> Result<(), PageError> {
    let callback: Callback = Closure::wrap(Box::new(move |list: JsValue, _observer: JsValue| {
        let Some(list) = list.dyn_ref::<PerformanceObserverEntryList>() else {
            return;
        };
        for entry in list.get_entries().iter() {
            if let Some(timing) = timing_of(&entry) {
                if timing.is_slow(threshold_ms) {
                    log::warn!("Page load took longer than expected ({:.0} ms)", timing.duration());
                }
            }
        }
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref())?;
    let options = PerformanceObserverInit::new(&js_sys::Array::of1(&JsValue::from_str("navigation")));
    observer.observe(&options);
    bindings.keep_callback(callback);
    Ok(())
}

/// Warn when the page's load event took longer than the configured limit.
/// Platforms without `PerformanceObserver` are skipped without comment.
pub fn watch_slow_load(page: &Page, config: &Config, bindings: &mut Bindings) {
    if !page.has_global("performance") || !page.has_global("PerformanceObserver") {
        return;
    }
    if let Err(err) = observe_navigation(config.slow_load_ms, bindings) {
        log::debug!("load timing not observed: {err}");
    }
}
