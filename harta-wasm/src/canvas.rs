use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Assign `strokeStyle` directly; the typed setter is deprecated in web-sys.
pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

/// Match the canvas backing store to its CSS box and the device pixel ratio.
/// Returns the backing size in device pixels.
pub fn sync_canvas_size(window: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let dpr = window.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let target_w = (rect.width().max(1.0) * dpr).round().clamp(1.0, 10000.0) as u32;
    let target_h = (rect.height().max(1.0) * dpr).round().clamp(1.0, 10000.0) as u32;
    if canvas.width() != target_w {
        canvas.set_width(target_w);
    }
    if canvas.height() != target_h {
        canvas.set_height(target_h);
    }
    (target_w as f64, target_h as f64)
}

pub fn init_canvas(
    canvas: &HtmlCanvasElement,
) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
