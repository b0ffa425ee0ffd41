//! Scroll-driven chrome and in-page anchor navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::error::EnhanceError;
use crate::surface::Surface;

/// Navbar and back-to-top state derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollChrome {
    #[must_use]
    pub fn at(offset_y: f64, config: &ScrollConfig) -> Self {
        Self {
            navbar_scrolled: offset_y > config.navbar_threshold_px,
            back_to_top_visible: offset_y > config.back_to_top_threshold_px,
        }
    }

    /// Write the fields that differ from `previous` (all of them when `None`).
    ///
    /// Scroll events fire far more often than the state changes, so unchanged
    /// fields are never written.
    ///
    /// # Errors
    ///
    /// Propagates class write failures.
    pub fn render<S: Surface + ?Sized>(
        self,
        previous: Option<Self>,
        navbar: Option<&S>,
        back_to_top: Option<&S>,
        config: &ScrollConfig,
    ) -> Result<(), EnhanceError> {
        if let Some(navbar) = navbar {
            if previous.map_or(true, |p| p.navbar_scrolled != self.navbar_scrolled) {
                navbar.set_class(&config.navbar_class, self.navbar_scrolled)?;
            }
        }
        if let Some(button) = back_to_top {
            if previous.map_or(true, |p| p.back_to_top_visible != self.back_to_top_visible) {
                button.set_class(&config.back_to_top_class, self.back_to_top_visible)?;
            }
        }
        Ok(())
    }
}

/// Selector for the element an in-page link points at.
///
/// `None` for a bare `#`, an empty fragment, or anything that is not a fragment link.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() || fragment.chars().any(char::is_whitespace) {
        return None;
    }
    Some(href)
}

#[cfg(feature = "browser")]
struct ScrollChromeBinding {
    window: web_sys::Window,
    navbar: Option<web_sys::HtmlElement>,
    back_to_top: Option<web_sys::HtmlElement>,
    config: ScrollConfig,
    last: std::cell::Cell<Option<ScrollChrome>>,
}

#[cfg(feature = "browser")]
impl ScrollChromeBinding {
    fn sync(&self) {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        let next = ScrollChrome::at(offset, &self.config);
        match next.render(self.last.get(), self.navbar.as_ref(), self.back_to_top.as_ref(), &self.config) {
            Ok(()) => self.last.set(Some(next)),
            Err(err) => log::warn!("scroll chrome render: {err}"),
        }
    }
}

/// Wire the navbar scroll class and the back-to-top control.
///
/// # Errors
///
/// Returns query or listener registration failures.
#[cfg(feature = "browser")]
pub fn install_chrome(window: &web_sys::Window, document: &web_sys::Document, config: &ScrollConfig) -> Result<(), EnhanceError> {
    use std::rc::Rc;

    use crate::dom::{listen, listen_passive, query_one};

    let navbar = query_one(document, &config.navbar_selector)?;
    let back_to_top = query_one(document, &config.back_to_top_selector)?;
    if navbar.is_none() && back_to_top.is_none() {
        log::debug!("no navbar or back-to-top control; scroll chrome disabled");
        return Ok(());
    }

    if let Some(button) = &back_to_top {
        let window_for_cb = window.clone();
        listen(button, "click", move |event| {
            event.prevent_default();
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window_for_cb.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    let binding = Rc::new(ScrollChromeBinding {
        window: window.clone(),
        navbar,
        back_to_top,
        config: config.clone(),
        last: std::cell::Cell::new(None),
    });
    binding.sync();
    let on_scroll = Rc::clone(&binding);
    listen_passive(window, "scroll", move |_| on_scroll.sync())?;
    log::debug!("scroll chrome wired");
    Ok(())
}

/// Smooth-scroll in-page anchor links to their targets.
///
/// # Errors
///
/// Returns query or listener registration failures.
#[cfg(feature = "browser")]
pub fn install_smooth_scroll(document: &web_sys::Document, config: &ScrollConfig) -> Result<(), EnhanceError> {
    use wasm_bindgen::JsCast;

    use crate::dom::{listen, query_all};

    let anchors = query_all(document, &config.anchor_selector)?;
    for anchor in &anchors {
        let href_source = anchor.clone();
        let document = document.clone();
        listen(anchor, "click", move |event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let target = match document.query_selector(selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(err) => {
                    log::debug!("anchor `{selector}` is not a valid selector: {err:?}");
                    return;
                }
            };
            event.prevent_default();
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            if let Some(target) = target.dyn_ref::<web_sys::HtmlElement>() {
                let focus = web_sys::FocusOptions::new();
                focus.set_prevent_scroll(true);
                if let Err(err) = target.focus_with_options(&focus) {
                    log::debug!("could not focus `{selector}`: {err:?}");
                }
            }
        })?;
    }
    log::debug!("smooth scroll wired for {} anchors", anchors.len());
    Ok(())
}
