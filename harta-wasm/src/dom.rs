use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use harta_core::layout::{Connector, LayoutPoint};
use harta_core::stars::Star;
use harta_core::style::NodeStyle;

const STYLESHEET: &str = r#"
@keyframes harta-twinkle { 0%, 100% { opacity: 0.2; } 50% { opacity: 1; } }
.harta-main { position: relative; height: 100vh; overflow: hidden; color: white;
  background: linear-gradient(145deg, #1a1a2e, #12121c); display: flex;
  justify-content: center; align-items: center; font-family: sans-serif; }
.harta-stars { position: absolute; inset: 0; z-index: 0; overflow: hidden; pointer-events: none; }
.harta-star { position: absolute; background: white; border-radius: 50%; opacity: 0.2;
  animation: harta-twinkle 3s ease-in-out infinite; filter: drop-shadow(0 0 2px #ffffff); }
.harta-scene { position: absolute; inset: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none; }
.harta-line { position: absolute; height: 1px; background: white; top: 50%; left: 50%;
  transform-origin: left center; opacity: 0.3; z-index: 1; }
.harta-node { position: absolute; transform: translate(-50%, -50%); transition: opacity 0.3s ease; z-index: 2; }
.harta-bubble { background: rgba(255, 255, 255, 0.1); border-radius: 12px; padding: 10px 14px;
  text-align: center; cursor: pointer; }
.harta-bubble:hover { background: rgba(255, 255, 255, 0.2); box-shadow: 0 0 8px #62d0ff; }
.harta-label { position: absolute; font-size: 14px; font-weight: 600; color: #f4eaff;
  background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1);
  padding: 6px 10px; border-radius: 12px; backdrop-filter: blur(4px); white-space: nowrap;
  text-decoration: none; z-index: 2; }
.harta-label:hover { background: rgba(207, 169, 249, 0.15); }
.harta-icon { margin-right: 6px; font-size: 1.1em; color: #cfa9f9; }
.harta-glow { position: absolute; top: 50%; left: 50%; width: 340px; height: 340px;
  transform: translate(-50%, -50%); background: radial-gradient(circle, #62d0ff55 0%, transparent 80%);
  filter: blur(55px); z-index: 0; pointer-events: none; }
.harta-backdrop-icon { position: absolute; transform: translate(-50%, -50%); opacity: 0.35;
  z-index: 0; pointer-events: none; }
.harta-center { font-size: 1.5rem; font-weight: bold; }
.harta-panel { position: fixed; top: 35%; transform: translateY(-50%); width: 428px; max-height: 70vh;
  overflow-y: auto; padding: 20px; border-radius: 12px; background: rgba(17, 17, 17, 0.95);
  box-shadow: 0 0 15px #000; z-index: 999; }
.harta-panel h3 { margin-bottom: 12px; font-weight: 600; font-size: 1.3rem; color: #f9dc5c; }
.harta-panel ul { padding-left: 0; list-style: none; }
.harta-panel li { margin-bottom: 12px; font-size: 1.05rem; background: rgba(255, 255, 255, 0.05);
  padding: 10px 14px; border-radius: 8px; border-left: 4px solid #94D1E1; }
.harta-close { background: transparent; color: #fff; border: 1px solid #555; padding: 6px 12px;
  border-radius: 6px; cursor: pointer; }
.harta-authors { display: flex; flex-direction: column; align-items: center; z-index: 1; }
.harta-title { font-size: 3rem; font-weight: bold; margin-bottom: 10px; color: #62d0ff; }
.harta-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;
  padding: 40px; border-radius: 24px; max-width: 1100px; width: 100%;
  background-color: rgba(255, 255, 255, 0.05); }
.harta-card { padding: 20px; border-radius: 16px; text-align: center;
  background-color: rgba(255, 255, 255, 0.07); border: 1px solid rgba(98, 208, 255, 0.1); }
"#;

/// Create `<tag class=class>`.
pub fn element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el.dyn_into::<HtmlElement>()?)
}

pub fn text_element(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (k, v) in props {
        style.set_property(k, v)?;
    }
    Ok(())
}

pub fn install_stylesheet(document: &Document, parent: &HtmlElement) -> Result<(), JsValue> {
    let style = text_element(document, "style", "", STYLESHEET)?;
    parent.append_child(&style)?;
    Ok(())
}

/// Page container; reuses `#app` when the host page provides one.
pub fn mount_root(document: &Document) -> Result<HtmlElement, JsValue> {
    let body = document.body().ok_or("no body")?;
    let root = match document.get_element_by_id("app") {
        Some(el) => el.dyn_into::<HtmlElement>()?,
        None => {
            let el = element(document, "div", "")?;
            el.set_id("app");
            body.append_child(&el)?;
            el
        }
    };
    root.set_inner_html("");
    install_stylesheet(document, &root)?;
    let main = element(document, "main", "harta-main")?;
    root.append_child(&main)?;
    Ok(main)
}

pub fn mount_stars(
    document: &Document,
    parent: &HtmlElement,
    stars: &[Star],
) -> Result<(), JsValue> {
    let layer = element(document, "div", "harta-stars")?;
    for s in stars {
        let dot = element(document, "div", "harta-star")?;
        set_styles(
            &dot,
            &[
                ("left", format!("{:.3}%", s.x).as_str()),
                ("top", format!("{:.3}%", s.y).as_str()),
                ("width", format!("{:.2}px", s.size).as_str()),
                ("height", format!("{:.2}px", s.size).as_str()),
                ("animation-delay", format!("{:.2}s", s.delay).as_str()),
            ],
        )?;
        layer.append_child(&dot)?;
    }
    parent.append_child(&layer)?;
    Ok(())
}

/// Offset from the centre (px) and inline SVG of each backdrop icon.
const BACKDROP_ICONS: [(f64, f64, &str); 6] = [
    (
        0.0,
        -200.0,
        r#"<svg width="56" height="56" viewBox="0 0 64 64" fill="none"><text x="32" y="42" text-anchor="middle" font-size="36" fill="white" font-family="monospace">{ }</text></svg>"#,
    ),
    (
        -240.0,
        -140.0,
        r#"<svg width="48" height="64" viewBox="0 0 30 50" fill="none"><rect x="1" y="1" width="28" height="48" rx="14" stroke="white" stroke-width="2"/><line x1="15" y1="1" x2="15" y2="15" stroke="white" stroke-width="2"/></svg>"#,
    ),
    (
        240.0,
        -140.0,
        r#"<svg width="64" height="64" viewBox="0 0 64 64" fill="none"><path d="M20 12c-8 4-8 16 0 20-8 4-8 16 0 20M44 12c8 4 8 16 0 20 8 4 8 16 0 20" stroke="white" stroke-width="2"/></svg>"#,
    ),
    (
        -240.0,
        100.0,
        r#"<svg width="48" height="64" viewBox="0 0 64 64" fill="none"><path d="M20 40V20M28 42V12M36 40V18M44 44V26M20 40c0 10 24 10 24 0" stroke="white" stroke-width="2"/></svg>"#,
    ),
    (
        240.0,
        100.0,
        r#"<svg width="40" height="56" viewBox="0 0 24 24" fill="none"><path d="M12 3v9m0 0a3 3 0 003-3V6a3 3 0 00-6 0v3a3 3 0 003 3zm6 0a6 6 0 01-12 0" stroke="white" stroke-width="2"/><path d="M8 21h8M12 18v3" stroke="white" stroke-width="2"/></svg>"#,
    ),
    (
        0.0,
        200.0,
        r#"<svg width="64" height="32" viewBox="0 0 64 32" fill="none"><rect x="4" y="8" width="56" height="16" rx="4" stroke="white" stroke-width="2"/><circle cx="18" cy="16" r="4" stroke="white" stroke-width="2"/><circle cx="46" cy="16" r="4" stroke="white" stroke-width="2"/></svg>"#,
    ),
];

/// Glow plus faint line icons behind the radial menu.
pub fn mount_icon_backdrop(document: &Document, parent: &HtmlElement) -> Result<(), JsValue> {
    parent.append_child(element(document, "div", "harta-glow")?.as_ref())?;
    for (x, y, svg) in BACKDROP_ICONS {
        let icon = element(document, "div", "harta-backdrop-icon")?;
        icon.set_inner_html(svg);
        place_node(&icon, LayoutPoint { x, y })?;
        parent.append_child(&icon)?;
    }
    Ok(())
}

pub fn mount_scene_canvas(
    document: &Document,
    parent: &HtmlElement,
) -> Result<HtmlCanvasElement, JsValue> {
    let el = element(document, "canvas", "harta-scene")?;
    parent.append_child(&el)?;
    Ok(el.dyn_into::<HtmlCanvasElement>()?)
}

/// Position a heading wrapper relative to the page centre.
pub fn place_node(el: &HtmlElement, p: LayoutPoint) -> Result<(), JsValue> {
    set_styles(
        el,
        &[
            ("left", format!("calc(50% + {:.2}px)", p.x).as_str()),
            ("top", format!("calc(50% + {:.2}px)", p.y).as_str()),
        ],
    )
}

/// Position a home-map label; labels are flex-centred, so translate only.
pub fn place_label(el: &HtmlElement, p: LayoutPoint) -> Result<(), JsValue> {
    set_styles(
        el,
        &[("transform", format!("translate({:.2}px, {:.2}px)", p.x, p.y).as_str())],
    )
}

pub fn place_line(el: &HtmlElement, c: Connector) -> Result<(), JsValue> {
    set_styles(
        el,
        &[
            ("width", format!("{:.2}px", c.length).as_str()),
            ("transform", format!("rotate({:.5}rad)", c.angle).as_str()),
        ],
    )
}

pub fn apply_node_style(el: &HtmlElement, style: NodeStyle) -> Result<(), JsValue> {
    set_styles(
        el,
        &[
            ("opacity", style.opacity.to_string().as_str()),
            (
                "pointer-events",
                if style.interactive { "auto" } else { "none" },
            ),
        ],
    )?;
    if style.is_faded() {
        el.set_attribute("data-faded", "true")?;
    } else {
        el.remove_attribute("data-faded")?;
    }
    Ok(())
}
