use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use harta_content::{Authors, Catalog, HomeMap};
use harta_core::constants::DEFAULT_TITLE;
use harta_core::layout::{LayoutPoint, RadiusPolicy, radial_layout};
use harta_core::routes::{Route, route_for, title_from_param};
use harta_core::topic::Topic;

mod authors;
mod canvas;
mod dom;
mod home;
mod scene;
mod state;
mod topic_page;
mod utils;

use crate::utils::{base_url, log, strip_base, warn};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let main = dom::mount_root(&document)?;

    let base = base_url(&window);
    let pathname = window.location().pathname()?;
    let route = Route::parse(strip_base(&pathname, &base));
    log(&format!("route {:?}", route));

    match route {
        Route::Topic(code) => {
            let topic = load_catalog()
                .by_route(&code)
                .cloned()
                .unwrap_or_else(|| {
                    warn(&format!("no content for route '{}'", code));
                    Topic::untitled(&code)
                });
            topic_page::mount_topic(&window, &document, &main, topic)
        }
        Route::Subject(raw) => {
            let title = title_from_param(&raw).unwrap_or_else(|| {
                warn(&format!("could not decode subject '{}'", raw));
                DEFAULT_TITLE.to_string()
            });
            topic_page::mount_topic(&window, &document, &main, Topic::untitled(&title))
        }
        Route::Authors => match Authors::load() {
            Ok(a) => authors::mount_authors(&document, &main, &a),
            Err(e) => Err(JsValue::from_str(&format!("authors.json: {e}"))),
        },
        Route::Home => show_home(&window, &document, &main, &base),
        Route::NotFound(p) => {
            warn(&format!("unknown path '{}', showing the map", p));
            show_home(&window, &document, &main, &base)
        }
    }
}

fn show_home(
    window: &Window,
    document: &Document,
    main: &HtmlElement,
    base: &str,
) -> Result<(), JsValue> {
    let home = HomeMap::load().map_err(|e| JsValue::from_str(&format!("home.json: {e}")))?;
    home::mount_home(window, document, main, &home, base)
}

fn load_catalog() -> Catalog {
    Catalog::load().unwrap_or_else(|e| {
        warn(&format!("failed to parse topic content: {e}"));
        Catalog::default()
    })
}

#[derive(Serialize)]
struct NodeOut<'a> {
    heading: &'a str,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct TopicLayoutOut<'a> {
    title: &'a str,
    radius: f64,
    nodes: Vec<NodeOut<'a>>,
}

/// Radial positions for `count` nodes as a JSON array of `{x, y}`.
#[wasm_bindgen]
pub fn radial_layout_json(count: usize, radius: f64) -> String {
    let pts: Vec<LayoutPoint> = radial_layout(count, radius);
    serde_json::to_string(&pts).unwrap_or_else(|_| "[]".to_string())
}

/// Title, radius and heading positions of topic `code` for a host page
/// that renders on its own. Unknown codes yield `null`.
#[wasm_bindgen]
pub fn topic_layout_json(code: &str) -> String {
    let catalog = load_catalog();
    let Some(topic) = catalog.by_route(code) else {
        return "null".to_string();
    };
    let radius = RadiusPolicy::TOPIC.radius_for(0.0);
    let nodes = topic
        .headings
        .iter()
        .zip(radial_layout(topic.headings.len(), radius))
        .map(|(h, p)| NodeOut {
            heading: h,
            x: p.x,
            y: p.y,
        })
        .collect();
    let out = TopicLayoutOut {
        title: &topic.display_name,
        radius,
        nodes,
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "null".to_string())
}

/// Path for a domain's display name.
#[wasm_bindgen]
pub fn route_for_name(name: &str) -> String {
    route_for(name)
}
