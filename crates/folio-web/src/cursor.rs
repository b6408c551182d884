use std::cell::RefCell;
use std::rc::Rc;

use folio_engine::CursorFollower;
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use crate::dom;
use crate::frame::next_animation_frame;

const HOVER_TARGETS: &str =
    "a, button, [role=\"button\"], .btn, .work-card, .education-card, .bento__card, .cert-tag, .roadmap__bar";

/// Mount the custom cursor. Only devices with a fine, hovering pointer get one.
pub fn mount(window: &Window, document: &Document) -> Result<bool, JsValue> {
    if !dom::has_fine_pointer(window)? {
        return Ok(false);
    }
    let Some(body) = document.document_element() else {
        return Ok(false);
    };
    let (Some(dot), Some(ring)) = (
        dom::query_html(&body, ".cursor-dot")?,
        dom::query_html(&body, ".cursor-ring")?,
    ) else {
        return Ok(false);
    };

    let cursor = Rc::new(RefCell::new(CursorFollower::new()));

    let on_move = {
        let cursor = cursor.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            cursor
                .borrow_mut()
                .set_pointer(Vec2::new(event.client_x() as f32, event.client_y() as f32));
        })
    };
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    for (kind, hovering) in [("mouseover", true), ("mouseout", false)] {
        let (dot, ring) = (dot.clone(), ring.clone());
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let over_target = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
                .is_some();
            if over_target {
                let _ = toggle_class(&ring, "cursor-ring--hover", hovering);
                let _ = toggle_class(&dot, "cursor-dot--hover", hovering);
            }
        });
        document.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    for (kind, dot_opacity, ring_opacity) in [("mouseleave", "0", "0"), ("mouseenter", "1", "0.5")] {
        let (dot, ring) = (dot.clone(), ring.clone());
        let handler = Closure::<dyn FnMut()>::new(move || {
            let _ = dom::set_style(&dot, "opacity", dot_opacity);
            let _ = dom::set_style(&ring, "opacity", ring_opacity);
        });
        document.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    spawn_local(async move {
        loop {
            if let Err(err) = next_animation_frame().await {
                log::warn!("cursor: frame loop stopped: {:?}", err);
                break;
            }
            let (dot_pos, ring_pos) = cursor.borrow_mut().step();
            if place(&dot, dot_pos).and_then(|_| place(&ring, ring_pos)).is_err() {
                log::warn!("cursor: cannot move cursor elements");
                break;
            }
        }
    });

    Ok(true)
}

fn place(el: &HtmlElement, pos: Vec2) -> Result<(), JsValue> {
    dom::set_style(el, "left", &format!("{}px", pos.x))?;
    dom::set_style(el, "top", &format!("{}px", pos.y))
}

fn toggle_class(el: &HtmlElement, class: &str, on: bool) -> Result<(), JsValue> {
    if on {
        el.class_list().add_1(class)
    } else {
        el.class_list().remove_1(class)
    }
}
