//! Binds the collapsible menu: `#nav-links` and its `.hamburger` toggle.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use super::{Bindings, Page, focus, set_class, warn_unbound};
use crate::config::Config;
use crate::consts::{ACTIVE_CLASS, NAV_CONTAINER_ID, NAV_LINK_SELECTOR, NAV_TOGGLE_SELECTOR};
use crate::error::PageError;
use crate::nav::{FocusTarget, NavEvent, NavState, binds_toggle};

/// The menu's elements plus its single state cell.
pub struct NavMenu {
    container: Element,
    toggle: Element,
    state: Cell<NavState>,
    breakpoint: f64,
}

impl NavMenu {
    fn find(page: &Page, breakpoint: f64) -> Option<Self> {
        let container = page.document.get_element_by_id(NAV_CONTAINER_ID)?;
        let toggle = page.query(NAV_TOGGLE_SELECTOR)?;
        Some(Self { container, toggle, state: Cell::new(NavState::closed()), breakpoint })
    }

    /// Apply `event`, render the new state, and move focus if asked to.
    pub fn dispatch(&self, event: &NavEvent) {
        let transition = self.state.get().apply(event, self.breakpoint);
        self.state.set(transition.state);
        if let Err(err) = self.render(transition.state) {
            log::warn!("menu not rendered: {err}");
        }
        match transition.focus {
            Some(FocusTarget::FirstLink) => {
                if let Some(link) = self.first_link() {
                    focus(&link);
                }
            }
            Some(FocusTarget::Toggle) => focus(&self.toggle),
            None => {}
        }
    }

    fn render(&self, state: NavState) -> Result<(), PageError> {
        let markers = state.markers();
        set_class(&self.container, ACTIVE_CLASS, markers.container_active)?;
        set_class(&self.toggle, ACTIVE_CLASS, markers.toggle_active)?;
        self.toggle.set_attribute("aria-expanded", markers.aria_expanded)?;
        Ok(())
    }

    fn first_link(&self) -> Option<Element> {
        match self.container.query_selector("a") {
            Ok(link) => link,
            Err(err) => {
                log::debug!("menu link lookup failed: {}", PageError::from(err));
                None
            }
        }
    }

    /// Whether `event` started inside the menu or on its toggle.
    fn is_inside(&self, event: &Event) -> bool {
        let Some(node) = event.target().and_then(|target| target.dyn_ref::<Node>().cloned()) else {
            return false;
        };
        self.container.contains(Some(&node)) || self.toggle.contains(Some(&node))
    }
}

fn viewport_width(page: &Page) -> Option<f64> {
    match page.window.inner_width() {
        Ok(width) => width.as_f64(),
        Err(err) => {
            log::debug!("innerWidth unavailable: {}", PageError::from(err));
            None
        }
    }
}

/// Wire the menu. Returns `None` when the page has no collapsible menu.
pub fn bind(page: &Page, config: &Config, bindings: &mut Bindings) -> Option<Rc<NavMenu>> {
    let Some(menu) = NavMenu::find(page, config.nav_breakpoint) else {
        log::debug!("no collapsible menu on this page");
        return None;
    };
    let menu = Rc::new(menu);
    if let Err(err) = menu.render(NavState::closed()) {
        log::warn!("menu not rendered: {err}");
    }

    if binds_toggle(config.bind_controls, menu.toggle.has_attribute("onclick")) {
        let m = Rc::clone(&menu);
        let result = bindings.listen(&menu.toggle, "click", move |_| m.dispatch(&NavEvent::Toggle));
        warn_unbound("menu toggle", result);
    }

    for link in page.query_all(NAV_LINK_SELECTOR) {
        let m = Rc::clone(&menu);
        let result = bindings.listen(&link, "click", move |_| m.dispatch(&NavEvent::LinkActivated));
        warn_unbound("menu link", result);
    }

    let m = Rc::clone(&menu);
    let result = bindings.listen(&page.document, "click", move |event| {
        if !m.is_inside(&event) {
            m.dispatch(&NavEvent::OutsidePointer);
        }
    });
    warn_unbound("outside click", result);

    let m = Rc::clone(&menu);
    let result = bindings.listen(&page.document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            m.dispatch(&NavEvent::KeyDown(key.key()));
        }
    });
    warn_unbound("menu keyboard", result);

    let m = Rc::clone(&menu);
    let page_for_cb = page.clone();
    let result = bindings.listen(&page.window, "resize", move |_| {
        if let Some(width) = viewport_width(&page_for_cb) {
            m.dispatch(&NavEvent::Resize { width });
        }
    });
    warn_unbound("menu resize", result);

    Some(menu)
}
