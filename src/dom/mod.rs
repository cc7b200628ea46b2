//! Rendering boundary: the only code that talks to `web-sys`.
//!
//! Each submodule binds one component. Binders take the [`Page`], the
//! [`Config`](crate::config::Config), and the [`Bindings`] registry that keeps
//! their listener closures alive for the page lifetime. State lives in the
//! pure modules; handlers here translate DOM events into state updates and
//! render the result.

pub mod diagnostics;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window};

use crate::error::PageError;

/// Handles to the browser globals every binder needs.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::MissingElement("window".into()))?;
        let document = window.document().ok_or_else(|| PageError::MissingElement("document".into()))?;
        Ok(Self { window, document })
    }

    /// First element matching `selector`.
    pub fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("bad selector {selector:?}: {}", PageError::from(err));
                None
            }
        }
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("bad selector {selector:?}: {}", PageError::from(err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    /// Whether `name` is defined on `window` (feature detection).
    pub fn has_global(&self, name: &str) -> bool {
        match js_sys::Reflect::has(&self.window, &JsValue::from_str(name)) {
            Ok(found) => found,
            Err(_) => false,
        }
    }

    /// `document.readyState == "loading"`.
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), PageError> {
    let list = el.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Set an inline style property.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), PageError> {
    let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return Err(PageError::Unsupported("inline style on non-HTML element"));
    };
    el.style().set_property(property, value)?;
    Ok(())
}

/// Move keyboard focus to `el` if it is focusable.
pub fn focus(el: &Element) {
    if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
        if let Err(err) = el.focus() {
            log::debug!("focus failed: {}", PageError::from(err));
        }
    }
}

type Listener = Closure<dyn FnMut(Event)>;
pub type Callback = Closure<dyn FnMut(JsValue, JsValue)>;
type Global = Closure<dyn FnMut()>;

/// Owns every closure handed to the browser so it lives as long as the page.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    callbacks: Vec<Callback>,
    globals: Vec<Global>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `target.addEventListener(event, handler)`.
    pub fn listen<F>(&mut self, target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure: Listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push(closure);
        Ok(())
    }

    /// Like [`Bindings::listen`] with `{ passive: true }`, for scroll-rate events.
    pub fn listen_passive<F>(&mut self, target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure: Listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push(closure);
        Ok(())
    }

    /// Keep an observer callback `(entries, observer)` alive.
    pub fn keep_callback(&mut self, callback: Callback) {
        self.callbacks.push(callback);
    }

    /// Install `handler` as `window[name]` for inline markup handlers.
    pub fn expose(&mut self, window: &Window, name: &str, handler: impl FnMut() + 'static) -> Result<(), PageError> {
        let closure: Global = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
        self.globals.push(closure);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len() + self.callbacks.len() + self.globals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Log a failed binding and carry on; one missing listener never stops the rest.
pub fn warn_unbound(what: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{what} not bound: {err}");
    }
}
