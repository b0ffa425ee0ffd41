//! Dark mode resolution and toggle.
//!
//! The theme is resolved once at startup from the stored preference and the
//! system color-scheme signal, then applied as a `data-theme` attribute on the
//! `<html>` element. A toggle flips it, re-applies and writes the new value
//! back through a [`PreferenceStore`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a store that refuses writes (private browsing,
//! quota) still leaves the page in the toggled state for this visit.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::error::EnhanceError;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse a stored value. Only `"dark"` and `"light"` are recognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Stored preference wins; an absent or unrecognised value defers to the system.
#[must_use]
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    stored.and_then(ThemeMode::parse).unwrap_or(if system_prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}

/// Key-value persistence for the single theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError>;
}

/// Owns the current theme and its persistence.
pub struct ThemeController<P> {
    mode: ThemeMode,
    store: P,
    config: ThemeConfig,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Start from an already resolved mode.
    pub fn new(store: P, config: ThemeConfig, mode: ThemeMode) -> Self {
        Self { mode, store, config }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Write the current mode onto the root element and, if present, the toggle button.
    ///
    /// # Errors
    ///
    /// Propagates attribute write failures.
    pub fn apply<R: Surface + ?Sized, B: Surface + ?Sized>(&self, root: &R, button: Option<&B>) -> Result<(), EnhanceError> {
        mark_root(root, &self.config, self.mode)?;
        if let Some(button) = button {
            button.set_attribute("aria-pressed", if self.mode.is_dark() { "true" } else { "false" })?;
            button.set_attribute("aria-label", toggle_label(self.mode))?;
        }
        Ok(())
    }

    /// Flip the theme, persist it and apply it.
    ///
    /// The new mode is saved even when rendering fails, so the stored
    /// preference always matches [`Self::mode`] when the store accepts writes.
    ///
    /// # Errors
    ///
    /// Returns the persistence failure if there was one, otherwise the apply
    /// failure. The mode is flipped either way.
    pub fn toggle<R: Surface + ?Sized, B: Surface + ?Sized>(&mut self, root: &R, button: Option<&B>) -> Result<ThemeMode, EnhanceError> {
        self.mode = self.mode.toggled();
        let saved = self.store.save(&self.config.storage_key, self.mode.as_str());
        let applied = self.apply(root, button);
        saved.and(applied)?;
        Ok(self.mode)
    }
}

/// Write `mode` onto the root element only.
///
/// # Errors
///
/// Propagates the attribute write failure.
pub fn mark_root<R: Surface + ?Sized>(root: &R, config: &ThemeConfig, mode: ThemeMode) -> Result<(), EnhanceError> {
    root.set_attribute(&config.attribute, mode.as_str())
}

/// Accessible label describing what the toggle will do next.
#[must_use]
pub fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "Switch to light mode",
        ThemeMode::Light => "Switch to dark mode",
    }
}

/// Mark `<html>` with the resolved theme before the body has been parsed.
///
/// # Errors
///
/// Returns the root lookup or attribute write failure.
#[cfg(feature = "browser")]
pub fn install_early(document: &web_sys::Document, config: &ThemeConfig, mode: ThemeMode) -> Result<(), EnhanceError> {
    let root = crate::dom::root_element(document)?;
    mark_root(&root, config, mode)?;
    log::debug!("theme `{}` applied before DOMContentLoaded", mode.as_str());
    Ok(())
}

/// Apply the resolved theme and wire the toggle button, if the page has one.
///
/// # Errors
///
/// Returns query or attribute write failures from the initial apply.
#[cfg(feature = "browser")]
pub fn install(
    document: &web_sys::Document,
    config: &ThemeConfig,
    store: crate::dom::LocalStorage,
    mode: ThemeMode,
) -> Result<(), EnhanceError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    let root = crate::dom::root_element(document)?;
    let button = crate::dom::query_one(document, &config.toggle_selector)?;
    let controller = ThemeController::new(store, config.clone(), mode);
    controller.apply(&root, button.as_ref())?;
    log::debug!("theme `{}` applied", mode.as_str());

    let Some(button) = button else {
        log::debug!("no `{}` on page; theme toggle disabled", config.toggle_selector);
        return Ok(());
    };
    let controller = Rc::new(RefCell::new(controller));
    let button_for_cb = button.clone();
    crate::dom::listen(&button, "click", move |_| {
        match controller.borrow_mut().toggle(&root, Some(&button_for_cb)) {
            Ok(next) => log::debug!("theme toggled to `{}`", next.as_str()),
            Err(err) => log::warn!("theme toggle: {err}"),
        }
    })
}
