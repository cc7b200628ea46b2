//! Theme rendering and the system dark-mode subscription.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent};

use super::storage::LocalStorage;
use super::{Bindings, Page, warn_unbound};
use crate::config::Config;
use crate::consts::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_TOGGLE_SELECTOR};
use crate::error::PageError;
use crate::store::PreferenceStore;
use crate::nav::binds_toggle;
use crate::theme::{Theme, ThemeController, ThemeHost, theme_placement};

pub type SharedTheme = Rc<RefCell<ThemeController<LocalStorage>>>;

fn host_element(page: &Page, host: ThemeHost) -> Option<Element> {
    match host {
        ThemeHost::Body => page.document.body().map(Element::from),
        ThemeHost::Root => page.document.document_element(),
    }
}

/// Write `theme` to the page's `data-theme` attribute, keeping a single carrier.
pub fn render(page: &Page, theme: Theme) {
    let placement = theme_placement(page.document.body().is_some());
    let Some(target) = host_element(page, placement.write) else {
        log::debug!("no element to carry the theme");
        return;
    };
    if let Err(err) = target.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("theme not applied: {}", PageError::from(err));
    }
    if let Some(stale) = placement.clear.and_then(|host| host_element(page, host)) {
        if let Err(err) = stale.remove_attribute(THEME_ATTRIBUTE) {
            log::debug!("stale theme not cleared: {}", PageError::from(err));
        }
    }
}

/// Flip the theme, persist it, and render it.
pub fn toggle(page: &Page, theme: &SharedTheme) {
    let next = theme.borrow_mut().toggle();
    render(page, next);
}

fn dark_scheme_query(page: &Page) -> Option<MediaQueryList> {
    match page.window.match_media(DARK_SCHEME_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("matchMedia unavailable: {}", PageError::from(err));
            None
        }
    }
}

/// Resolve and render the startup theme, then follow the system signal.
pub fn bind(page: &Page, config: &Config, bindings: &mut Bindings) -> SharedTheme {
    let query = dark_scheme_query(page);
    let system_dark = query.as_ref().is_some_and(MediaQueryList::matches);

    let mut controller = ThemeController::new(PreferenceStore::new(LocalStorage), config.storage_key.clone());
    render(page, controller.resolve_and_apply(system_dark));
    let shared = Rc::new(RefCell::new(controller));

    if let Some(query) = query {
        let theme = Rc::clone(&shared);
        let page_for_cb = page.clone();
        let result = bindings.listen(&query, "change", move |event| {
            let dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .is_some_and(MediaQueryListEvent::matches);
            let followed = theme.borrow_mut().on_system_change(dark);
            if let Some(next) = followed {
                render(&page_for_cb, next);
            }
        });
        warn_unbound("system theme listener", result);
    }

    shared
}

/// Wire every `[data-theme-toggle]` control. Needs the parsed document.
pub fn bind_controls(page: &Page, config: &Config, theme: &SharedTheme, bindings: &mut Bindings) {
    for control in page.query_all(THEME_TOGGLE_SELECTOR) {
        if !binds_toggle(config.bind_controls, control.has_attribute("onclick")) {
            continue;
        }
        let theme = Rc::clone(theme);
        let page_for_cb = page.clone();
        let result = bindings.listen(&control, "click", move |_| toggle(&page_for_cb, &theme));
        warn_unbound("theme toggle", result);
    }
}
