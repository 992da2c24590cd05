use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Запросить заднюю камеру (`facingMode: environment`)
pub async fn open_rear_camera() -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or("window is not available")?;
    let devices = window.navigator().media_devices().map_err(js_error)?;

    let video = Object::new();
    Reflect::set(&video, &"facingMode".into(), &"environment".into()).map_err(js_error)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_error)?;
    let stream = JsFuture::from(promise).await.map_err(js_error)?;
    stream.dyn_into::<MediaStream>().map_err(js_error)
}

/// Остановить все дорожки потока (гасит индикатор камеры)
pub fn stop(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
