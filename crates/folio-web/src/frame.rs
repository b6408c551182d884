use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::dom;

/// Wait for the next display refresh. Resolves with the frame timestamp in
/// milliseconds.
///
/// Continuous animations are written as `loop { next_animation_frame().await?; ... }`,
/// one suspension point per iteration.
pub async fn next_animation_frame() -> Result<f64, JsValue> {
    let window = dom::window()?;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    let timestamp = JsFuture::from(promise).await?;
    Ok(timestamp.as_f64().unwrap_or_default())
}

/// Wait `ms` milliseconds on the window timer.
pub async fn sleep(ms: i32) -> Result<(), JsValue> {
    let window = dom::window()?;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    JsFuture::from(promise).await?;
    Ok(())
}
