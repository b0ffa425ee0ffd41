//! WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loads the module once; [`start`] samples the environment,
//! resolves the [`StartupPlan`] and installs each feature independently. While
//! the document is still loading only the theme is applied; everything else
//! waits for `DOMContentLoaded`. A
//! feature whose markup is missing is skipped quietly, and one that fails is
//! logged and skipped. Neither affects its siblings.

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::config::EnhanceConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::{self, LocalStorage};
use crate::error::EnhanceError;
use crate::startup::StartupPlan;
use crate::theme::PreferenceStore;
use crate::{nav, observer, scroll, stagger, theme};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }

    let (window, document) = match dom::window().and_then(|w| dom::document(&w).map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(err) => {
            log::warn!("page enhancements disabled: {err}");
            return;
        }
    };

    let config = load_config(&document).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        EnhanceConfig::default()
    });
    let env = dom::read_environment(&window);
    let storage = LocalStorage::open(&window);
    let plan = StartupPlan::resolve(&env, storage.load(&config.theme.storage_key).as_deref());
    log::debug!("environment {env:?} -> {plan:?}");

    if document.ready_state() != "loading" {
        enhance(&window, &document, &config, storage, plan);
        return;
    }

    // `<html>` already exists; marking it now avoids a light first paint.
    run("early theme", || theme::install_early(&document, &config.theme, plan.theme));
    let target = document.clone();
    let mut deferred = Some((config, storage));
    let result = dom::listen(&target, "DOMContentLoaded", move |_| {
        if let Some((config, storage)) = deferred.take() {
            enhance(&window, &document, &config, storage, plan);
        }
    });
    if let Err(err) = result {
        log::warn!("could not wait for DOMContentLoaded: {err}");
    }
}

/// Install every feature against a parsed document.
pub fn enhance(window: &Window, document: &Document, config: &EnhanceConfig, storage: LocalStorage, plan: StartupPlan) {
    run("theme", || theme::install(document, &config.theme, storage, plan.theme));
    run("navigation", || nav::install(document, &config.nav));
    run("smooth scroll", || scroll::install_smooth_scroll(document, &config.scroll));
    run("scroll chrome", || scroll::install_chrome(window, document, &config.scroll));
    if plan.staggers() {
        run("stagger", || stagger::install(document, &config.stagger));
    }
    for group in &config.groups {
        run(&group.selector, || observer::install_group(document, group.clone(), plan.activation));
    }
    log::info!("page enhancements ready");
}

fn run(feature: &str, install: impl FnOnce() -> Result<(), EnhanceError>) {
    if let Err(err) = install() {
        log::warn!("{feature} disabled: {err}");
    }
}

/// Defaults, overridden by the page's JSON config block when it is present.
///
/// # Errors
///
/// Returns [`EnhanceError::Config`] when the block is not valid configuration.
fn load_config(document: &Document) -> Result<EnhanceConfig, EnhanceError> {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(EnhanceConfig::default());
    };
    Ok(EnhanceConfig::from_json(&raw)?)
}
