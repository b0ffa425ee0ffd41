//! web-sys glue shared by the browser-side feature installers.
//!
//! Everything here only exists with the `browser` feature. The core modules
//! never see these types; they talk to [`Surface`] and [`PreferenceStore`],
//! which this module implements for `HtmlElement` and `localStorage`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Storage, Window};

use crate::consts::{DARK_SCHEME_QUERY, REDUCED_MOTION_QUERY};
use crate::error::EnhanceError;
use crate::startup::Environment;
use crate::surface::Surface;
use crate::theme::PreferenceStore;

impl Surface for HtmlElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), EnhanceError> {
        Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), EnhanceError> {
        self.style().set_property(property, value)?;
        Ok(())
    }

    fn add_class(&self, class: &str) -> Result<(), EnhanceError> {
        self.class_list().add_1(class)?;
        Ok(())
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), EnhanceError> {
        self.class_list().toggle_with_force(class, present)?;
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn text(&self) -> Option<String> {
        self.text_content()
    }

    fn has_child_elements(&self) -> bool {
        self.child_element_count() > 0
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).unwrap_or_default()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        let Some(storage) = &self.storage else {
            log::debug!("no localStorage; `{key}` not persisted");
            return Ok(());
        };
        storage.set_item(key, value)?;
        Ok(())
    }
}

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::MissingWindow)
}

pub fn document(window: &Window) -> Result<Document, EnhanceError> {
    window.document().ok_or(EnhanceError::MissingDocument)
}

/// The `<html>` element.
pub fn root_element(document: &Document) -> Result<HtmlElement, EnhanceError> {
    document
        .document_element()
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        .ok_or(EnhanceError::MissingDocument)
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, EnhanceError> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, EnhanceError> {
    Ok(html_elements(&root.query_selector_all(selector)?))
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, EnhanceError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

fn media_matches(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

fn observer_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Sample the host once.
pub fn read_environment(window: &Window) -> Environment {
    Environment {
        reduced_motion: media_matches(window, REDUCED_MOTION_QUERY),
        prefers_dark: media_matches(window, DARK_SCHEME_QUERY),
        observer_supported: observer_supported(window),
    }
}

/// Attach `handler` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], registered as passive so scrolling is never blocked.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
