//! Binds `.fade-in` elements to an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Bindings, Callback, Page, set_class};
use crate::config::Config;
use crate::consts::{FADE_IN_SELECTOR, VISIBLE_CLASS};
use crate::error::PageError;
use crate::reveal::{ObserverOptions, RevealPlan, RevealSet};

fn show(el: &Element) {
    if let Err(err) = set_class(el, VISIBLE_CLASS, true) {
        log::warn!("fade-in element not revealed: {err}");
    }
}

fn reveal_all(targets: &[Element], set: &RefCell<RevealSet>) {
    for index in set.borrow_mut().reveal_all() {
        if let Some(el) = targets.get(index) {
            show(el);
        }
    }
}

fn same_element(a: &Element, b: &Element) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

fn observe(
    targets: &Rc<Vec<Element>>,
    set: &Rc<RefCell<RevealSet>>,
    options: &ObserverOptions,
    bindings: &mut Bindings,
) -> Result<(), PageError> {
    let cb_targets = Rc::clone(targets);
    let cb_set = Rc::clone(set);
    let callback: Callback = Closure::wrap(Box::new(move |entries: JsValue, observer: JsValue| {
        let Some(observer) = observer.dyn_ref::<IntersectionObserver>() else {
            return;
        };
        for entry in js_sys::Array::from(&entries).iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = cb_targets.iter().position(|el| same_element(el, &target)) else {
                continue;
            };
            if cb_set.borrow_mut().observe(index, entry.is_intersecting()) {
                show(&target);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in targets.iter() {
        observer.observe(el);
    }
    bindings.keep_callback(callback);
    Ok(())
}

pub fn bind(page: &Page, config: &Config, bindings: &mut Bindings) {
    let targets = page.query_all(FADE_IN_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let set = Rc::new(RefCell::new(RevealSet::new(targets.len())));
    let options = ObserverOptions::new(config.reveal_threshold, config.reveal_bottom_inset);
    match RevealPlan::choose(page.has_global("IntersectionObserver"), options) {
        RevealPlan::Observe(options) => {
            let targets = Rc::new(targets);
            if let Err(err) = observe(&targets, &set, &options, bindings) {
                log::warn!("fade-in observer failed, showing everything: {err}");
                reveal_all(&targets, &set);
            }
        }
        RevealPlan::RevealAll => {
            log::debug!("no IntersectionObserver, showing {} fade-in elements", targets.len());
            reveal_all(&targets, &set);
        }
    }
}
