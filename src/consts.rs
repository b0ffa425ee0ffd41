//! Shared markup contract and tuning constants.

// ── Viewport activation ─────────────────────────────────────────

/// Inline style written with the per-element stagger offset.
pub const TRANSITION_DELAY_PROPERTY: &str = "transition-delay";

/// Items per stagger cycle inside a layout group.
pub const STAGGER_CYCLE: usize = 4;

/// Delay added per position within a stagger cycle, in milliseconds.
pub const STAGGER_STEP_MS: u32 = 100;

/// Wait between activation and the style write for data-visualization fills.
pub const VIZ_ACTIVATION_DELAY_MS: u32 = 200;

// ── Stat counters ───────────────────────────────────────────────

/// Total count-up duration for a stat number.
pub const COUNTER_DURATION_MS: u32 = 1500;

/// Interval between count-up frames (roughly one per 60 Hz frame).
pub const COUNTER_FRAME_MS: u32 = 16;

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_OPEN_CLASS: &str = "nav-links--open";

// ── Scroll chrome ───────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAVBAR_SCROLLED_CLASS: &str = "navbar--scrolled";
/// Scroll offset (px) past which the navbar is marked scrolled.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "back-to-top--visible";
/// Scroll offset (px) past which the back-to-top control is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Environment queries ─────────────────────────────────────────

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "enhance-config";
