use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use harta_core::constants::{CLOSE_LABEL, TOPIC_STAR_COUNT};
use harta_core::layout::RadiusPolicy;
use harta_core::page::RadialPage;
use harta_core::topic::Topic;

use crate::dom::{
    element, mount_icon_backdrop, mount_scene_canvas, mount_stars, place_line, place_node,
    set_styles, text_element,
};
use crate::scene::start_scene;
use crate::state::{PageState, Panel, Placement, attach_resize, on_click};
use crate::utils::{log, viewport_width, warn};

/// Mount a topic page into `main`.
pub fn mount_topic(
    window: &Window,
    document: &Document,
    main: &HtmlElement,
    topic: Topic,
) -> Result<(), JsValue> {
    // Authored topics should have a body for every heading; untitled ones
    // are empty by construction.
    if !topic.route.is_empty() {
        for h in topic.missing_content() {
            warn(&format!("{}: no content for heading '{}'", topic.route, h));
        }
        for k in topic.orphan_keys() {
            warn(&format!("{}: content key '{}' matches no heading", topic.route, k));
        }
    }

    let scene = topic.scene;
    let icon_backdrop = topic.icon_backdrop;
    let page = RadialPage::mount(
        topic,
        RadiusPolicy::TOPIC,
        viewport_width(window),
        TOPIC_STAR_COUNT,
        js_sys::Math::random,
    );

    mount_stars(document, main, page.stars())?;
    if icon_backdrop {
        mount_icon_backdrop(document, main)?;
    }
    if let Some(kind) = scene {
        let canvas = mount_scene_canvas(document, main)?;
        start_scene(window, canvas, kind)?;
    }

    let center = text_element(
        document,
        "div",
        "harta-node harta-bubble harta-center",
        &page.topic().display_name,
    )?;
    set_styles(&center, &[("left", "50%"), ("top", "50%")])?;
    main.append_child(&center)?;

    let mut lines = Vec::new();
    let mut nodes = Vec::new();
    for (i, (p, c)) in page.points().iter().zip(page.connectors()).enumerate() {
        let line = element(document, "div", "harta-line")?;
        place_line(&line, c)?;
        main.append_child(&line)?;
        lines.push(line);

        let node = element(document, "div", "harta-node")?;
        place_node(&node, *p)?;
        let bubble = text_element(
            document,
            "div",
            "harta-bubble",
            page.topic().heading(i).unwrap_or_default(),
        )?;
        node.append_child(&bubble)?;
        main.append_child(&node)?;
        nodes.push(node);
    }

    let panel = mount_panel(document, main)?;
    log(&format!(
        "mounted '{}' with {} headings",
        page.topic().display_name,
        nodes.len()
    ));

    let state = Rc::new(RefCell::new(PageState {
        window: window.clone(),
        document: document.clone(),
        page,
        nodes,
        placement: Placement::Absolute,
        lines,
        panel: Some(panel),
    }));

    attach_clicks(&state, &center);
    attach_resize(&state);
    state.borrow().render_selection()
}

fn mount_panel(document: &Document, main: &HtmlElement) -> Result<Panel, JsValue> {
    let root = element(document, "div", "harta-panel")?;
    let title = element(document, "h3", "")?;
    let list = element(document, "ul", "")?;
    let footer = element(document, "div", "")?;
    set_styles(&footer, &[("margin-top", "16px"), ("text-align", "right")])?;
    let close = text_element(document, "button", "harta-close", CLOSE_LABEL)?;
    footer.append_child(&close)?;
    root.append_child(&title)?;
    root.append_child(&list)?;
    root.append_child(&footer)?;
    set_styles(&root, &[("display", "none")])?;
    main.append_child(&root)?;
    Ok(Panel {
        root,
        title,
        list,
        close,
    })
}

fn attach_clicks(state: &Rc<RefCell<PageState>>, center: &HtmlElement) {
    on_click(center, state, |p| {
        p.click_center();
    });
    let (nodes, close) = {
        let s = state.borrow();
        let close = s.panel.as_ref().map(|p| p.close.clone());
        (s.nodes.clone(), close)
    };
    for (i, node) in nodes.iter().enumerate() {
        on_click(node, state, move |p| {
            p.click_heading(i);
        });
    }
    if let Some(close) = close {
        on_click(&close, state, |p| {
            p.close();
        });
    }
}
