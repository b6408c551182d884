use std::cell::RefCell;
use std::rc::Rc;

use folio_engine::{FieldConfig, InputEvent, ParticleField};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::frame::next_animation_frame;
use crate::runner::FrameRunner;

const CANVAS_ID: &str = "particles";

/// Mount the particle background on `#particles`. Returns false if the page has no such canvas.
pub fn mount(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let Some(canvas) = document.get_element_by_id(CANVAS_ID) else {
        return Ok(false);
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into().map_err(JsValue::from)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()
        .map_err(JsValue::from)?;

    let (width, height) = dom::viewport_size(window)?;
    fit_canvas(&canvas, width, height);

    // The count is chosen once from the initial viewport and kept across resizes.
    let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    let field = ParticleField::for_viewport(
        FieldConfig::default(),
        Vec2::new(width, height),
        width,
        seed,
    );
    log::info!("particles: {} on {}x{}", field.len(), width, height);
    let runner = Rc::new(RefCell::new(FrameRunner::new(field)));

    let on_move = {
        let runner = runner.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            runner.borrow_mut().push_input(InputEvent::PointerMove {
                x: event.client_x() as f32,
                y: event.client_y() as f32,
            });
        })
    };
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_resize = {
        let runner = runner.clone();
        let window = window.clone();
        let canvas = canvas.clone();
        Closure::<dyn FnMut()>::new(move || match dom::viewport_size(&window) {
            Ok((width, height)) => {
                fit_canvas(&canvas, width, height);
                runner
                    .borrow_mut()
                    .push_input(InputEvent::Resize { width, height });
            }
            Err(err) => log::warn!("particles: cannot read viewport size: {:?}", err),
        })
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let document = document.clone();
    let mut surface = CanvasSurface::new(ctx);
    spawn_local(async move {
        loop {
            if let Err(err) = next_animation_frame().await {
                log::warn!("particles: frame loop stopped: {:?}", err);
                break;
            }
            runner.borrow_mut().frame(!document.hidden(), &mut surface);
        }
    });

    Ok(true)
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}
