//! Progressive enhancement for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by otherwise static HTML.
//! It reveals marked blocks as they scroll into view, fills progress bars and
//! charts from their data attributes, counts up stat numbers, staggers grid
//! items, and wires the mobile menu, smooth anchor scrolling, scroll-aware
//! navbar, back-to-top control and a persisted dark-mode toggle.
//!
//! All decision logic is plain Rust that writes through the [`surface::Surface`]
//! trait and runs under native `cargo test`. The `browser` feature adds the
//! `web_sys` implementations and the `#[wasm_bindgen(start)]` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | One-shot viewport activation engine and per-group binding |
//! | [`stagger`] | Transition-delay cascade within layout groups |
//! | [`counter`] | Stat-number parsing and eased count-up |
//! | [`theme`] | Theme resolution, toggle and persistence |
//! | [`nav`] | Mobile menu state machine |
//! | [`scroll`] | Navbar / back-to-top state and anchor targets |
//! | [`startup`] | Environment sampling result and startup plan |
//! | [`config`] | Page configuration with JSON overrides |
//! | [`surface`] | Element abstraction the core writes through |
//! | [`error`] | Error types |
//! | [`consts`] | Markup contract and timing constants |
//! | `dom`, `observer`, `boot` | Browser glue (`browser` feature) |

pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod stagger;
pub mod startup;
pub mod surface;
pub mod theme;

#[cfg(feature = "browser")]
pub mod boot;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod observer;

#[cfg(test)]
#[path = "fake_test.rs"]
pub(crate) mod fake;
