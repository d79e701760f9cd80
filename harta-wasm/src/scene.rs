use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use harta_core::scene::{Segment, SceneKind, project, stroke_color};

use crate::canvas::{init_canvas, set_stroke_style, sync_canvas_size};

struct SceneState {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    segments: Vec<Segment>,
    color: &'static str,
    yaw: f64,
    pitch: f64,
}

fn draw(s: &SceneState) {
    let (w, h) = sync_canvas_size(&s.window, &s.canvas);
    s.ctx.clear_rect(0.0, 0.0, w, h);
    let scale = w.min(h) / 8.0;
    let (cx, cy) = (w / 2.0, h / 2.0);
    set_stroke_style(&s.ctx, s.color);
    s.ctx.set_line_width((scale / 120.0).clamp(1.0, 2.0));
    s.ctx.set_global_alpha(0.6);
    s.ctx.begin_path();
    for (a, b) in &s.segments {
        if let (Some(pa), Some(pb)) = (
            project(*a, s.yaw, s.pitch, scale),
            project(*b, s.yaw, s.pitch, scale),
        ) {
            s.ctx.move_to(cx + pa.0, cy + pa.1);
            s.ctx.line_to(cx + pb.0, cy + pb.1);
        }
    }
    s.ctx.stroke();
}

/// Start the decorative animation for `kind` on `canvas`. The loop runs on
/// the browser frame clock until the page is unloaded and never touches the
/// page's selection state.
pub fn start_scene(
    window: &Window,
    canvas: HtmlCanvasElement,
    kind: SceneKind,
) -> Result<(), JsValue> {
    let ctx = init_canvas(&canvas)?;
    let spin = kind.spin();
    let state = Rc::new(RefCell::new(SceneState {
        window: window.clone(),
        canvas,
        ctx,
        segments: kind.wireframe(),
        color: stroke_color(kind as usize),
        yaw: 0.0,
        pitch: 0.0,
    }));

    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        {
            let mut s = state.borrow_mut();
            s.yaw += spin.yaw;
            s.pitch += spin.pitch;
            draw(&s);
        }
        if let Some(cb) = f.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
