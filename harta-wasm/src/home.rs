use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use harta_content::HomeMap;
use harta_core::constants::HOME_STAR_COUNT;
use harta_core::layout::RadiusPolicy;
use harta_core::page::RadialPage;

use crate::dom::{element, mount_scene_canvas, mount_stars, place_label, text_element};
use crate::scene::start_scene;
use crate::state::{PageState, Placement, attach_resize};
use crate::utils::{link, log, viewport_width};

/// Mount the home map: every domain as a link on a circle around a globe.
pub fn mount_home(
    window: &Window,
    document: &Document,
    main: &HtmlElement,
    home: &HomeMap,
    base: &str,
) -> Result<(), JsValue> {
    let page = RadialPage::mount(
        home.to_topic(),
        RadiusPolicy::HOME,
        viewport_width(window),
        HOME_STAR_COUNT,
        js_sys::Math::random,
    );
    mount_stars(document, main, page.stars())?;
    if let Some(kind) = home.scene {
        let canvas = mount_scene_canvas(document, main)?;
        start_scene(window, canvas, kind)?;
    }

    let mut nodes = Vec::new();
    for (domain, p) in home.domains.iter().zip(page.points()) {
        let a = element(document, "a", "harta-label")?;
        a.set_attribute("href", &link(base, &domain.href()))?;
        if let Some(glyph) = domain.glyph() {
            a.append_child(text_element(document, "span", "harta-icon", glyph)?.as_ref())?;
        }
        a.append_child(text_element(document, "span", "", &domain.name)?.as_ref())?;
        place_label(&a, *p)?;
        main.append_child(&a)?;
        nodes.push(a);
    }
    log(&format!(
        "home map: {} domains at radius {}",
        nodes.len(),
        page.radius()
    ));

    let state = Rc::new(RefCell::new(PageState {
        window: window.clone(),
        document: document.clone(),
        page,
        placement: Placement::Translate,
        nodes,
        lines: Vec::new(),
        panel: None,
    }));
    attach_resize(&state);
    Ok(())
}
