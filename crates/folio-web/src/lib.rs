//! Browser bindings for folio-engine.
//!
//! `folio_init` mounts every feature whose markup is present on the page.
//! A feature with missing markup is skipped with a warning; the rest still mount.

pub mod runner;

mod canvas;
mod counters;
mod cursor;
mod dom;
mod frame;
mod hover;
mod particles;
mod radar;
mod roadmap;
mod scroll;

pub use canvas::CanvasSurface;
pub use frame::next_animation_frame;
pub use runner::FrameRunner;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn folio_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        _ => {
            log::warn!("folio: no window/document, nothing mounted");
            return;
        }
    };

    report("particles", particles::mount(&window, &document));
    report("cursor", cursor::mount(&window, &document));
    report("reveal", scroll::mount_reveal(&document));
    report("scroll", scroll::mount_scroll(&window, &document));
    report("counters", counters::mount(&document));
    report("radar", radar::mount(&document));
    report("roadmap", roadmap::mount(&document));
    report("tilt", hover::mount_tilt(&window, &document));
    report("magnetic", hover::mount_magnetic(&window, &document));
    log::info!("folio: initialized");
}

fn report(feature: &str, result: Result<bool, JsValue>) {
    match result {
        Ok(true) => log::info!("{}: mounted", feature),
        Ok(false) => log::warn!("{}: not on this page, skipped", feature),
        Err(err) => log::warn!("{}: failed to mount: {:?}", feature, err),
    }
}
