//! IntersectionObserver binding for a [`RevealGroup`].
//!
//! ARCHITECTURE
//! ============
//! One observer per call-site group, configured with that group's threshold
//! and root margin. The observer callback only translates entries into
//! [`RevealGroup::on_visible`] reports; the group decides whether an element
//! activates. An activated element is unobserved at once, and its style write
//! runs either immediately or after the group's activation delay.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

use crate::config::RevealGroupConfig;
use crate::consts::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};
use crate::counter::{StatCounter, counter_for, progress};
use crate::error::EnhanceError;
use crate::reveal::{Activation, ActivationMode, GroupStart, RevealGroup, WatchedId};
use crate::surface::Surface;

type SharedGroup = Rc<RefCell<RevealGroup<HtmlElement>>>;

/// Observe every element of `group` until it activates.
///
/// # Errors
///
/// Returns the error thrown by the `IntersectionObserver` constructor.
pub fn observe_group(group: RevealGroup<HtmlElement>) -> Result<(), EnhanceError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(group.config().threshold));
    options.set_root_margin(&group.config().root_margin);

    let group: SharedGroup = Rc::new(RefCell::new(group));
    let group_for_cb = Rc::clone(&group);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                handle_entry(&group_for_cb, entry, &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let group = group.borrow();
    for surface in group.surfaces() {
        observer.observe(surface);
    }
    log::debug!(
        "observing {} `{}` elements (threshold {}, margin `{}`)",
        group.surfaces().len(),
        group.config().selector,
        group.config().threshold,
        group.config().root_margin
    );
    Ok(())
}

fn handle_entry(group: &SharedGroup, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
    let target = entry.target();
    let target_node: &Node = &target;
    let (activation, delay_ms) = {
        let mut group = group.borrow_mut();
        let Some(index) = group
            .surfaces()
            .iter()
            .position(|surface| surface.is_same_node(Some(target_node)))
        else {
            return;
        };
        let delay_ms = group.config().activation_delay_ms;
        (group.on_visible(WatchedId(index), entry.is_intersecting()), delay_ms)
    };
    let Some(activation) = activation else {
        return;
    };
    observer.unobserve(&target);

    if delay_ms == 0 {
        finish(group, &activation);
    } else {
        let group = Rc::clone(group);
        Timeout::new(delay_ms, move || finish(&group, &activation)).forget();
    }
}

fn finish(group: &SharedGroup, activation: &Activation) {
    let group = group.borrow();
    if let Err(err) = group.apply(activation) {
        log::warn!("`{}` activation failed: {err}", group.config().selector);
        return;
    }
    if !group.config().count_up {
        return;
    }
    let Some(surface) = group.surface(activation.id) else {
        return;
    };
    match counter_for(surface) {
        Some(counter) => count_up(surface.clone(), counter, 0),
        None => log::debug!("`{}` is not a plain numeric stat; no count-up", group.config().selector),
    }
}

fn count_up(surface: HtmlElement, counter: StatCounter, elapsed_ms: u32) {
    surface.set_text(&counter.format_at(progress(elapsed_ms, COUNTER_DURATION_MS)));
    if elapsed_ms >= COUNTER_DURATION_MS {
        return;
    }
    let next = elapsed_ms.saturating_add(COUNTER_FRAME_MS);
    Timeout::new(COUNTER_FRAME_MS, move || count_up(surface, counter, next)).forget();
}

/// Discover one group's elements and start it in `mode`.
///
/// # Errors
///
/// Returns query, immediate-write or observer construction failures.
pub fn install_group(
    document: &web_sys::Document,
    config: RevealGroupConfig,
    mode: ActivationMode,
) -> Result<(), EnhanceError> {
    let surfaces = crate::dom::query_all(document, &config.selector)?;
    if surfaces.is_empty() {
        log::debug!("no `{}` elements on page", config.selector);
        return Ok(());
    }
    let selector = config.selector.clone();
    let mut group = RevealGroup::new(config, surfaces);
    match group.start(mode)? {
        GroupStart::Settled { activated } => {
            log::debug!("`{selector}`: {activated} elements revealed without animation");
            Ok(())
        }
        GroupStart::Observe => observe_group(group),
    }
}
