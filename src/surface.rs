//! The narrow element API the enhancement core writes through.
//!
//! DESIGN
//! ======
//! Every behavior in this crate ends in a handful of element mutations:
//! add a class, write an inline style, flip an attribute. Routing them through
//! [`Surface`] keeps the reveal engine, theme and navigation handlers free of
//! `web_sys` so they run under plain `cargo test`; the browser feature
//! implements the trait for `web_sys::HtmlElement`.

use crate::error::EnhanceError;

/// A single document element as seen by the enhancement core.
pub trait Surface {
    /// Read an attribute. `None` when the attribute is missing.
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), EnhanceError>;

    /// Write an inline style property.
    fn set_style(&self, property: &str, value: &str) -> Result<(), EnhanceError>;

    /// Add `class` to the class list. Adding a present class is a no-op.
    fn add_class(&self, class: &str) -> Result<(), EnhanceError>;

    /// Force `class` on or off.
    fn set_class(&self, class: &str, present: bool) -> Result<(), EnhanceError>;

    fn has_class(&self, class: &str) -> bool;

    fn text(&self) -> Option<String>;

    /// `true` when the element has element children, not just text.
    fn has_child_elements(&self) -> bool;

    fn set_text(&self, text: &str);
}

/// Read a data attribute, treating an empty value as absent.
pub fn non_empty_attribute<S: Surface + ?Sized>(surface: &S, name: &str) -> Option<String> {
    surface
        .attribute(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
