//! Mobile navigation menu.
//!
//! The menu is a two-state toggle. Each DOM trigger maps to a pure transition
//! so the rules (outside clicks and link clicks close, the toggle flips) are
//! testable without a document.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;
use crate::error::EnhanceError;
use crate::surface::Surface;

/// Named triggers the browser glue registers listeners for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTrigger {
    /// Click on the hamburger toggle.
    ToggleClick,
    /// Click anywhere outside both the toggle and the link list.
    OutsideClick,
    /// Click on a link inside the menu.
    LinkClick,
    /// Escape key pressed.
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    #[must_use]
    pub fn handle(self, trigger: NavTrigger) -> Self {
        match trigger {
            NavTrigger::ToggleClick => Self { open: !self.open },
            NavTrigger::OutsideClick | NavTrigger::LinkClick | NavTrigger::Escape => Self { open: false },
        }
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Write this state onto the toggle button and link list.
    ///
    /// # Errors
    ///
    /// Propagates element write failures.
    pub fn render<T: Surface + ?Sized, L: Surface + ?Sized>(self, toggle: &T, links: &L, config: &NavConfig) -> Result<(), EnhanceError> {
        links.set_class(&config.open_class, self.open)?;
        toggle.set_attribute("aria-expanded", self.aria_expanded())
    }
}

#[cfg(feature = "browser")]
struct NavMenu {
    toggle: web_sys::HtmlElement,
    links: web_sys::HtmlElement,
    config: NavConfig,
    state: std::cell::Cell<NavState>,
}

#[cfg(feature = "browser")]
impl NavMenu {
    fn dispatch(&self, trigger: NavTrigger) {
        let current = self.state.get();
        let next = current.handle(trigger);
        if next == current {
            return;
        }
        self.state.set(next);
        if let Err(err) = next.render(&self.toggle, &self.links, &self.config) {
            log::warn!("navigation render: {err}");
        }
    }

    fn contains(&self, event: &web_sys::Event) -> bool {
        use wasm_bindgen::JsCast;

        let node = event
            .target()
            .and_then(|target| target.dyn_ref::<web_sys::Node>().cloned());
        self.toggle.contains(node.as_ref()) || self.links.contains(node.as_ref())
    }
}

/// Wire the mobile menu. A page without the toggle or link list has no menu.
///
/// # Errors
///
/// Returns query or listener registration failures.
#[cfg(feature = "browser")]
pub fn install(document: &web_sys::Document, config: &NavConfig) -> Result<(), EnhanceError> {
    use std::rc::Rc;
    use wasm_bindgen::JsCast;

    use crate::dom::{listen, query_all_within, query_one};

    let (Some(toggle), Some(links)) = (
        query_one(document, &config.toggle_selector)?,
        query_one(document, &config.links_selector)?,
    ) else {
        log::debug!("navigation markup not found; menu toggle disabled");
        return Ok(());
    };
    let menu = Rc::new(NavMenu {
        toggle: toggle.clone(),
        links: links.clone(),
        config: config.clone(),
        state: std::cell::Cell::new(NavState::default()),
    });

    let on_toggle = Rc::clone(&menu);
    listen(&toggle, "click", move |_| on_toggle.dispatch(NavTrigger::ToggleClick))?;

    let on_outside = Rc::clone(&menu);
    listen(document, "click", move |event| {
        if !on_outside.contains(&event) {
            on_outside.dispatch(NavTrigger::OutsideClick);
        }
    })?;

    let on_key = Rc::clone(&menu);
    listen(document, "keydown", move |event| {
        let escape = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .map_or(false, |key| key.key() == "Escape");
        if escape {
            on_key.dispatch(NavTrigger::Escape);
        }
    })?;

    for link in query_all_within(&links, "a")? {
        let on_link = Rc::clone(&menu);
        listen(&link, "click", move |_| on_link.dispatch(NavTrigger::LinkClick))?;
    }
    log::debug!("navigation menu wired");
    Ok(())
}
