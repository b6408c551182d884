use folio_engine::{magnetic_offset, Tilt};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom;
use crate::frame::sleep;

const SETTLE_MS: i32 = 500;
const TILT_SETTLE: &str = "transform 0.5s ease, box-shadow 0.5s ease";
const MAGNET_SETTLE: &str = "transform 0.5s var(--ease-out-expo)";

/// Tilt `[data-tilt]` cards toward the pointer. Fine pointers only.
pub fn mount_tilt(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let cards = hover_targets(window, document, "[data-tilt]")?;
    if cards.is_empty() {
        return Ok(false);
    }
    for card in cards {
        let on_move = {
            let card = card.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let tilt = Tilt::at(dom::bounds(&card), pointer(&event));
                let _ = dom::set_style(&card, "transform", &tilt.transform());
                let _ = dom::set_style(&card, "box-shadow", &tilt.shadow());
            })
        };
        card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let on_leave = {
            let card = card.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = dom::set_style(&card, "transition", TILT_SETTLE);
                let _ = dom::set_style(&card, "transform", &Tilt::REST.transform());
                let _ = dom::set_style(&card, "box-shadow", "");
                spawn_local(clear_transition(card.clone()));
            })
        };
        card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(true)
}

/// Pull `.btn` elements a little toward the pointer. Fine pointers only.
pub fn mount_magnetic(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let buttons = hover_targets(window, document, ".btn")?;
    if buttons.is_empty() {
        return Ok(false);
    }
    for button in buttons {
        let on_move = {
            let button = button.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let offset = magnetic_offset(dom::bounds(&button), pointer(&event));
                let _ = dom::set_style(
                    &button,
                    "transform",
                    &format!("translate({}px, {}px)", offset.x, offset.y),
                );
            })
        };
        button.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let on_leave = {
            let button = button.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = dom::set_style(&button, "transition", MAGNET_SETTLE);
                let _ = dom::set_style(&button, "transform", "");
                spawn_local(clear_transition(button.clone()));
            })
        };
        button.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(true)
}

/// Elements matching `selector`, or none at all on touch devices.
fn hover_targets(
    window: &Window,
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, JsValue> {
    if !dom::has_fine_pointer(window)? {
        return Ok(Vec::new());
    }
    let Some(root) = document.document_element() else {
        return Ok(Vec::new());
    };
    Ok(dom::query_all(&root, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn pointer(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

async fn clear_transition(el: HtmlElement) {
    if sleep(SETTLE_MS).await.is_ok() {
        let _ = dom::set_style(&el, "transition", "");
    }
}
