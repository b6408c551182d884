use folio_engine::{CounterAnimation, OnceTrigger};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom;
use crate::frame::next_animation_frame;

const START_THRESHOLD: f32 = 0.3;

/// Count `.numbers__value[data-target]` elements up once `.numbers` comes into view.
pub fn mount(document: &Document) -> Result<bool, JsValue> {
    let Some(section) = document.query_selector(".numbers")? else {
        return Ok(false);
    };
    let counters: Vec<(Element, u32)> = dom::query_all(&section, ".numbers__value")?
        .into_iter()
        .filter_map(|el| {
            let target = el.get_attribute("data-target")?.trim().parse().ok()?;
            Some((el, target))
        })
        .collect();
    if counters.is_empty() {
        return Ok(false);
    }

    let mut trigger = OnceTrigger::new(START_THRESHOLD);
    let mut pending = Some(counters);
    dom::observe_once(&section, START_THRESHOLD, None, move |fraction| {
        if trigger.offer(fraction) {
            for (el, target) in pending.take().unwrap_or_default() {
                spawn_local(count_up(el, CounterAnimation::new(target)));
            }
        }
        trigger.has_fired()
    })?;
    Ok(true)
}

async fn count_up(el: Element, mut counter: CounterAnimation) {
    loop {
        let now = match next_animation_frame().await {
            Ok(now) => now,
            Err(err) => {
                log::warn!("counters: frame loop stopped: {:?}", err);
                el.set_text_content(Some(&counter.target().to_string()));
                return;
            }
        };
        let (value, done) = counter.sample(now);
        el.set_text_content(Some(&value.to_string()));
        if done {
            return;
        }
    }
}
