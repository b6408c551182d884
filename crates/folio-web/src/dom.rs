//! Thin helpers over web-sys for the mounting code.

use folio_engine::Bounds;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok((width as f32, height as f32))
}

/// Whether the primary pointer can hover with fine precision (mouse, trackpad).
pub fn has_fine_pointer(window: &Window) -> Result<bool, JsValue> {
    Ok(window
        .match_media("(hover: hover) and (pointer: fine)")?
        .is_some_and(|query| query.matches()))
}

/// The element's bounding box in viewport pixels.
pub fn bounds(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First HTML element under `root` matching `selector`.
pub fn query_html(root: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    el.style().set_property(property, value)
}

/// Create an SVG element with the given attributes and append it to `parent`.
pub fn append_svg(
    document: &Document,
    parent: &Element,
    tag: &str,
    attrs: &[(&str, String)],
) -> Result<Element, JsValue> {
    let el = document.create_element_ns(Some(SVG_NS), tag)?;
    for (name, value) in attrs {
        el.set_attribute(name, value)?;
    }
    parent.append_child(&el)?;
    Ok(el)
}

/// Watch `target` for intersection with the viewport.
///
/// `on_visible` gets the visible fraction each time the target intersects and
/// returns true once it is done, which stops observing the target for good.
pub fn observe_once(
    target: &Element,
    threshold: f32,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(f32) -> bool + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if on_visible(entry.intersection_ratio() as f32) {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(f64::from(threshold)));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    // The observer lives as long as the page.
    callback.forget();
    Ok(())
}
