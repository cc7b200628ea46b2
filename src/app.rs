//! Initialization phase and the module's JavaScript entry points.
//!
//! `start` runs when the WASM module is instantiated. It reads the page
//! config, installs logging, applies the theme immediately (to avoid a flash
//! of the wrong palette), and binds everything else once the DOM is parsed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::nav::NavMenu;
use crate::dom::theme::SharedTheme;
use crate::dom::{self, Bindings, Page, warn_unbound};
use crate::error::PageError;
use crate::nav::NavEvent;

/// Live handles for the exported toggles, plus every closure the page holds.
struct App {
    page: Page,
    theme: SharedTheme,
    nav: Option<Rc<NavMenu>>,
    bindings: Bindings,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn read_config(page: &Page) -> Result<Config, PageError> {
    match page.document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(el) => Config::from_json(&el.text_content().unwrap_or_default()),
        None => Ok(Config::default()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let page = match Page::current() {
        Ok(page) => page,
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("pagekit disabled: {err}")));
            return;
        }
    };
    let (config, config_error) = match read_config(&page) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.level()) {
        log::debug!("logger already installed: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("ignoring page config: {err}");
    }

    dom::diagnostics::remove_no_js(&page);
    let mut bindings = Bindings::new();
    dom::diagnostics::bind_error_log(&page, &mut bindings);
    dom::diagnostics::watch_slow_load(&page, &config, &mut bindings);
    let theme = dom::theme::bind(&page, &config, &mut bindings);

    let loading = page.is_loading();
    if loading {
        let mut once = Some(config.clone());
        let result = bindings.listen(&page.document, "DOMContentLoaded", move |_| {
            if let Some(config) = once.take() {
                on_dom_ready(&config);
            }
        });
        warn_unbound("DOMContentLoaded", result);
    }

    APP.with(|app| {
        *app.borrow_mut() = Some(App { page, theme, nav: None, bindings });
    });

    if !loading {
        on_dom_ready(&config);
    }
}

/// Bind everything that needs the parsed document.
fn on_dom_ready(config: &Config) {
    APP.with(|app| {
        let mut app = app.borrow_mut();
        let Some(app) = app.as_mut() else {
            return;
        };
        let page = app.page.clone();
        let bindings = &mut app.bindings;

        // Theme ran before <body> existed; re-render onto it.
        dom::theme::render(&page, app.theme.borrow().current());
        dom::theme::bind_controls(&page, config, &app.theme, bindings);

        app.nav = dom::nav::bind(&page, config, bindings);
        dom::scroll::bind(&page, config, bindings);
        dom::reveal::bind(&page, config, bindings);
        dom::diagnostics::bind_outbound_links(&page, bindings);
        dom::diagnostics::bind_images(&page, bindings);

        let result = bindings.expose(&page.window, "toggleTheme", toggle_theme);
        warn_unbound("toggleTheme", result);
        let result = bindings.expose(&page.window, "toggleMenu", toggle_menu);
        warn_unbound("toggleMenu", result);

        log::debug!("page enhancements ready ({} bindings)", bindings.len());
    });
}

/// Flip between light and dark and remember the choice.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    let handles = APP.with(|app| {
        app.borrow()
            .as_ref()
            .map(|app| (app.page.clone(), Rc::clone(&app.theme)))
    });
    if let Some((page, theme)) = handles {
        dom::theme::toggle(&page, &theme);
    }
}

/// Open or close the mobile menu.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() {
    let menu = APP.with(|app| app.borrow().as_ref().and_then(|app| app.nav.clone()));
    if let Some(menu) = menu {
        menu.dispatch(&NavEvent::Toggle);
    }
}
