use std::cell::RefCell;

use folio_engine::{scroll_progress, NavAutoHide, OnceTrigger};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::dom;

const REVEAL_THRESHOLD: f32 = 0.15;
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";

/// Add `revealed` to each `.reveal` element the first time it scrolls into view.
pub fn mount_reveal(document: &Document) -> Result<bool, JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(false);
    };
    let targets = dom::query_all(&root, ".reveal")?;
    if targets.is_empty() {
        return Ok(false);
    }
    for el in targets {
        // The observer threshold only paces callbacks; any intersection reveals.
        let mut trigger = OnceTrigger::on_intersect();
        let target = el.clone();
        dom::observe_once(&el, REVEAL_THRESHOLD, Some(REVEAL_MARGIN), move |fraction| {
            if trigger.offer(fraction) {
                if let Err(err) = target.class_list().add_1("revealed") {
                    log::warn!("reveal: {:?}", err);
                }
            }
            trigger.has_fired()
        })?;
    }
    Ok(true)
}

/// Auto-hide `.nav` on downward scroll and drive the `.scroll-progress` bar.
pub fn mount_scroll(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let nav = document.query_selector(".nav")?;
    let progress = document
        .query_selector(".scroll-progress")?
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if nav.is_none() && progress.is_none() {
        return Ok(false);
    }

    let auto_hide = RefCell::new(NavAutoHide::new(window.scroll_y()? as f32));
    let handler = {
        let window = window.clone();
        let document = document.clone();
        Closure::<dyn FnMut()>::new(move || {
            let Ok(y) = window.scroll_y() else {
                return;
            };
            let y = y as f32;
            if let Some(nav) = &nav {
                let hidden = auto_hide.borrow_mut().on_scroll(y);
                let result = if hidden {
                    nav.class_list().add_1("nav--hidden")
                } else {
                    nav.class_list().remove_1("nav--hidden")
                };
                if let Err(err) = result {
                    log::warn!("nav: {:?}", err);
                }
            }
            if let Some(bar) = &progress {
                let doc_height = document
                    .document_element()
                    .map_or(0.0, |el| el.scroll_height() as f32);
                let viewport = dom::viewport_size(&window).map_or(0.0, |(_, h)| h);
                let ratio = scroll_progress(y, doc_height, viewport);
                let _ = dom::set_style(bar, "transform", &format!("scaleX({ratio})"));
            }
        })
    };
    window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(true)
}
