use folio_engine::{OnceTrigger, StaggeredEntrance};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::frame::next_animation_frame;

const START_THRESHOLD: f32 = 0.2;
const BAR_TRANSITION: &str =
    "opacity 0.5s var(--ease-out-expo), transform 0.6s var(--ease-out-expo)";

/// Grow each `.roadmap`'s bars in one after another when it scrolls into view.
pub fn mount(document: &Document) -> Result<bool, JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(false);
    };
    let roadmaps = dom::query_all(&root, ".roadmap")?;
    if roadmaps.is_empty() {
        return Ok(false);
    }
    for roadmap in roadmaps {
        let bars: Vec<HtmlElement> = dom::query_all(&roadmap, ".roadmap__bar")?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let mut trigger = OnceTrigger::new(START_THRESHOLD);
        let mut pending = Some(bars);
        dom::observe_once(&roadmap, START_THRESHOLD, None, move |fraction| {
            if trigger.offer(fraction) {
                if let Some(bars) = pending.take() {
                    spawn_local(grow_bars(bars));
                }
            }
            trigger.has_fired()
        })?;
    }
    Ok(true)
}

async fn grow_bars(bars: Vec<HtmlElement>) {
    for bar in &bars {
        let collapsed = dom::set_style(bar, "opacity", "0")
            .and_then(|_| dom::set_style(bar, "transform", "scaleX(0)"))
            .and_then(|_| dom::set_style(bar, "transform-origin", "left center"));
        if let Err(err) = collapsed {
            log::warn!("roadmap: {:?}", err);
        }
    }

    let mut entrance = StaggeredEntrance::new(bars.len());
    while !entrance.is_done() {
        let due = match next_animation_frame().await {
            Ok(now) => entrance.sample(now),
            Err(err) => {
                log::warn!("roadmap: frame loop stopped: {:?}", err);
                entrance.finish()
            }
        };
        for bar in &bars[due] {
            let _ = dom::set_style(bar, "transition", BAR_TRANSITION);
            let _ = dom::set_style(bar, "opacity", "1");
            let _ = dom::set_style(bar, "transform", "scaleX(1)");
        }
    }
}
