//! Process-wide decisions made once when the page loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host environment is sampled exactly once into an [`Environment`];
//! everything downstream receives the resolved [`StartupPlan`] instead of
//! consulting media queries or storage on its own.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use crate::reveal::ActivationMode;
use crate::theme::{ThemeMode, resolve_theme};

/// Host capabilities and user preferences read at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// `prefers-reduced-motion: reduce` matched.
    pub reduced_motion: bool,
    /// `prefers-color-scheme: dark` matched.
    pub prefers_dark: bool,
    /// The host exposes `IntersectionObserver`.
    pub observer_supported: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartupPlan {
    pub activation: ActivationMode,
    pub theme: ThemeMode,
}

impl StartupPlan {
    #[must_use]
    pub fn resolve(env: &Environment, stored_theme: Option<&str>) -> Self {
        Self {
            activation: ActivationMode::resolve(env.reduced_motion, env.observer_supported),
            theme: resolve_theme(stored_theme, env.prefers_dark),
        }
    }

    /// Stagger delays only make sense when reveals animate.
    #[must_use]
    pub fn staggers(&self) -> bool {
        self.activation == ActivationMode::Observed
    }
}
