//! Enhancement configuration.
//!
//! Defaults reproduce the canonical portfolio markup contract. A page may
//! override any subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="enhance-config">
//!   { "stagger": { "containers": [".skills-grid"] } }
//! </script>
//! ```
//!
//! Missing fields keep their defaults; the whole document is validated once
//! before any feature is wired.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which box dimension a reveal writes from its data attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionProperty {
    Width,
    Height,
}

impl DimensionProperty {
    /// Inline style property written on activation.
    #[must_use]
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    /// Data attribute holding the target value in markup.
    #[must_use]
    pub fn data_attribute(self) -> &'static str {
        match self {
            Self::Width => "data-width",
            Self::Height => "data-height",
        }
    }
}

/// One independent viewport-activation call site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealGroupConfig {
    pub selector: String,
    /// Fraction of the element that must be visible before the observer reports it.
    pub threshold: f64,
    pub root_margin: String,
    /// Classes added on activation.
    pub markers: Vec<String>,
    pub dimension: Option<DimensionProperty>,
    /// Wait between the activation decision and the style write (observed mode only).
    pub activation_delay_ms: u32,
    /// Animate the element's numeric text from zero after activation.
    pub count_up: bool,
}

impl Default for RevealGroupConfig {
    fn default() -> Self {
        Self::reveal()
    }
}

impl RevealGroupConfig {
    fn viz(selector: &str, threshold: f64, dimension: Option<DimensionProperty>) -> Self {
        Self {
            selector: selector.to_owned(),
            threshold,
            root_margin: "0px".to_owned(),
            markers: vec!["animate".to_owned()],
            dimension,
            activation_delay_ms: VIZ_ACTIVATION_DELAY_MS,
            count_up: false,
        }
    }

    /// Generic scroll reveal for `.reveal` blocks.
    #[must_use]
    pub fn reveal() -> Self {
        Self {
            selector: ".reveal".to_owned(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
            markers: vec!["is-visible".to_owned(), "active".to_owned()],
            dimension: None,
            activation_delay_ms: 0,
            count_up: false,
        }
    }

    #[must_use]
    pub fn progress_bars() -> Self {
        Self::viz(".progress-fill", 0.5, Some(DimensionProperty::Width))
    }

    #[must_use]
    pub fn bar_charts() -> Self {
        Self::viz(".bar-fill", 0.3, Some(DimensionProperty::Width))
    }

    #[must_use]
    pub fn line_points() -> Self {
        Self::viz(".line-point", 0.3, Some(DimensionProperty::Height))
    }

    #[must_use]
    pub fn stat_numbers() -> Self {
        Self { activation_delay_ms: 0, count_up: true, ..Self::viz(".stat-number", 0.5, None) }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold { selector: self.selector.clone(), value: self.threshold });
        }
        if self.markers.is_empty() {
            return Err(ConfigError::NoMarkers { selector: self.selector.clone() });
        }
        Ok(())
    }
}

/// Layout groups whose reveal items cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaggerConfig {
    pub containers: Vec<String>,
    /// Items inside a container that receive a delay, in document order.
    pub item_selector: String,
    pub cycle: usize,
    pub step_ms: u32,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            containers: vec![".skills-grid".to_owned(), ".projects-grid".to_owned()],
            item_selector: ".reveal".to_owned(),
            cycle: STAGGER_CYCLE,
            step_ms: STAGGER_STEP_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub toggle_selector: String,
    pub links_selector: String,
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: NAV_TOGGLE_SELECTOR.to_owned(),
            links_selector: NAV_LINKS_SELECTOR.to_owned(),
            open_class: NAV_OPEN_CLASS.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    pub navbar_selector: String,
    pub navbar_class: String,
    pub navbar_threshold_px: f64,
    pub back_to_top_selector: String,
    pub back_to_top_class: String,
    pub back_to_top_threshold_px: f64,
    pub anchor_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_selector: NAVBAR_SELECTOR.to_owned(),
            navbar_class: NAVBAR_SCROLLED_CLASS.to_owned(),
            navbar_threshold_px: NAVBAR_SCROLL_THRESHOLD_PX,
            back_to_top_selector: BACK_TO_TOP_SELECTOR.to_owned(),
            back_to_top_class: BACK_TO_TOP_VISIBLE_CLASS.to_owned(),
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            anchor_selector: ANCHOR_LINK_SELECTOR.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub toggle_selector: String,
    pub storage_key: String,
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_selector: THEME_TOGGLE_SELECTOR.to_owned(),
            storage_key: THEME_STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
        }
    }
}

/// Complete configuration for one page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    pub groups: Vec<RevealGroupConfig>,
    pub stagger: StaggerConfig,
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub theme: ThemeConfig,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                RevealGroupConfig::reveal(),
                RevealGroupConfig::progress_bars(),
                RevealGroupConfig::bar_charts(),
                RevealGroupConfig::line_points(),
                RevealGroupConfig::stat_numbers(),
            ],
            stagger: StaggerConfig::default(),
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl EnhanceConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every group and the stagger settings.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for group in &self.groups {
            group.validate()?;
        }
        if self.stagger.cycle == 0 {
            return Err(ConfigError::ZeroStaggerCycle);
        }
        Ok(())
    }
}
