use super::*;
use crate::fake::FakeElement;

// =============================================================
// ScrollChrome
// =============================================================

#[test]
fn top_of_page_shows_nothing() {
    assert_eq!(ScrollChrome::at(0.0, &ScrollConfig::default()), ScrollChrome::default());
}

#[test]
fn thresholds_are_exclusive() {
    let config = ScrollConfig::default();
    assert!(!ScrollChrome::at(50.0, &config).navbar_scrolled);
    assert!(ScrollChrome::at(51.0, &config).navbar_scrolled);
    assert!(!ScrollChrome::at(300.0, &config).back_to_top_visible);
    assert!(ScrollChrome::at(301.0, &config).back_to_top_visible);
}

#[test]
fn between_thresholds_only_navbar_changes() {
    let chrome = ScrollChrome::at(120.0, &ScrollConfig::default());
    assert!(chrome.navbar_scrolled);
    assert!(!chrome.back_to_top_visible);
}

#[test]
fn first_render_writes_both_classes() {
    let config = ScrollConfig::default();
    let navbar = FakeElement::new();
    let button = FakeElement::new();
    ScrollChrome::at(400.0, &config)
        .render(None, Some(&navbar), Some(&button), &config)
        .expect("render");
    assert!(navbar.has_class("navbar--scrolled"));
    assert!(button.has_class("back-to-top--visible"));
}

#[test]
fn scrolling_back_up_removes_classes() {
    let config = ScrollConfig::default();
    let navbar = FakeElement::new();
    let button = FakeElement::new();
    let down = ScrollChrome::at(400.0, &config);
    down.render(None, Some(&navbar), Some(&button), &config).expect("render");
    ScrollChrome::at(0.0, &config)
        .render(Some(down), Some(&navbar), Some(&button), &config)
        .expect("render");
    assert!(!navbar.has_class("navbar--scrolled"));
    assert!(!button.has_class("back-to-top--visible"));
}

#[test]
fn unchanged_state_skips_writes() {
    let config = ScrollConfig::default();
    let navbar = FakeElement::new();
    let chrome = ScrollChrome::at(80.0, &config);
    chrome.render(None, Some(&navbar), None, &config).expect("render");
    navbar.set_class("navbar--scrolled", false).expect("manual reset");
    chrome.render(Some(chrome), Some(&navbar), None, &config).expect("render");
    assert!(!navbar.has_class("navbar--scrolled"));
}

#[test]
fn missing_elements_are_skipped() {
    let config = ScrollConfig::default();
    assert!(ScrollChrome::at(999.0, &config).render(None, None::<&FakeElement>, None, &config).is_ok());
}

// =============================================================
// anchor_target
// =============================================================

#[test]
fn fragment_links_resolve_to_selector() {
    assert_eq!(anchor_target("#projects"), Some("#projects"));
    assert_eq!(anchor_target(" #contact "), Some("#contact"));
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(anchor_target("/about#team"), None);
    assert_eq!(anchor_target("https://example.com"), None);
    assert_eq!(anchor_target(""), None);
}

#[test]
fn fragment_with_whitespace_is_ignored() {
    assert_eq!(anchor_target("#two words"), None);
}
