//! Smooth anchor scrolling and the throttled header shadow.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{Bindings, Page, set_style, warn_unbound};
use crate::config::Config;
use crate::consts::{ANCHOR_LINK_SELECTOR, HEADER_SELECTOR};
use crate::error::PageError;
use crate::scroll::{FrameThrottle, ScrollMode, anchor_fragment, header_emphasized, header_shadow, scroll_target};

pub fn bind(page: &Page, config: &Config, bindings: &mut Bindings) {
    bind_anchor_links(page, config, bindings);
    bind_header(page, config, bindings);
}

// =============================================================
// Anchor links
// =============================================================

fn supports_smooth_scroll(page: &Page) -> bool {
    let Some(root) = page.document.document_element() else {
        return false;
    };
    let Some(root) = root.dyn_ref::<HtmlElement>() else {
        return false;
    };
    js_sys::Reflect::has(&root.style(), &JsValue::from_str("scrollBehavior")).unwrap_or(false)
}

/// Top of `el` in document coordinates.
fn document_top(page: &Page, el: &Element) -> Result<f64, PageError> {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        return Ok(f64::from(el.offset_top()));
    }
    Ok(el.get_bounding_client_rect().top() + page.window.scroll_y()?)
}

fn scroll_to_anchor(page: &Page, href: &str, offset: f64, mode: ScrollMode) -> Result<(), PageError> {
    let Some(id) = anchor_fragment(href) else {
        return Ok(());
    };
    let Some(target) = page.document.get_element_by_id(id) else {
        log::debug!("anchor #{id} has no target");
        return Ok(());
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(document_top(page, &target)?, offset));
    options.set_behavior(match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    });
    page.window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn bind_anchor_links(page: &Page, config: &Config, bindings: &mut Bindings) {
    let mode = ScrollMode::detect(supports_smooth_scroll(page));
    let offset = config.header_offset;
    for anchor in page.query_all(ANCHOR_LINK_SELECTOR) {
        let page_for_cb = page.clone();
        let link = anchor.clone();
        let result = bindings.listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if let Err(err) = scroll_to_anchor(&page_for_cb, &href, offset, mode) {
                log::warn!("scroll to {href} failed: {err}");
            }
        });
        warn_unbound("anchor link", result);
    }
}

// =============================================================
// Header
// =============================================================

struct HeaderEffect {
    header: Element,
    throttle: RefCell<FrameThrottle>,
    threshold: f64,
    shadow: String,
    fallback_ms: u32,
}

impl HeaderEffect {
    fn update(&self, page: &Page) {
        self.throttle.borrow_mut().complete();
        let scroll_y = match page.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("scrollY unavailable: {}", PageError::from(err));
                return;
            }
        };
        let shadow = header_shadow(header_emphasized(scroll_y, self.threshold), &self.shadow);
        if let Err(err) = set_style(&self.header, "box-shadow", shadow) {
            log::warn!("header not updated: {err}");
        }
    }
}

/// Schedule one header update for the next frame, unless one is pending.
fn request_update(page: &Page, effect: &Rc<HeaderEffect>) {
    if !effect.throttle.borrow_mut().request() {
        return;
    }
    let frame_effect = Rc::clone(effect);
    let frame_page = page.clone();
    let on_frame = Closure::once_into_js(move |_ts: f64| frame_effect.update(&frame_page));
    if let Err(err) = page.window.request_animation_frame(on_frame.unchecked_ref()) {
        log::debug!("requestAnimationFrame unavailable, using timer: {}", PageError::from(err));
        let timer_effect = Rc::clone(effect);
        let timer_page = page.clone();
        Timeout::new(effect.fallback_ms, move || timer_effect.update(&timer_page)).forget();
    }
}

fn bind_header(page: &Page, config: &Config, bindings: &mut Bindings) {
    let Some(header) = page.query(HEADER_SELECTOR) else {
        log::debug!("no header on this page");
        return;
    };
    let effect = Rc::new(HeaderEffect {
        header,
        throttle: RefCell::new(FrameThrottle::new()),
        threshold: config.header_threshold,
        shadow: config.header_shadow.clone(),
        fallback_ms: config.frame_fallback_ms,
    });
    effect.update(page);

    let page_for_cb = page.clone();
    let result = bindings.listen_passive(&page.window, "scroll", move |_| request_update(&page_for_cb, &effect));
    warn_unbound("header scroll", result);
}
