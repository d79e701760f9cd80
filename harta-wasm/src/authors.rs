use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use harta_content::{Author, Authors};
use harta_core::constants::TOPIC_STAR_COUNT;
use harta_core::stars::generate_stars;

use crate::dom::{element, mount_stars, set_styles, text_element};

fn card(document: &Document, a: &Author) -> Result<HtmlElement, JsValue> {
    let el = element(document, "div", "harta-card")?;
    let name = text_element(document, "div", "", &a.name)?;
    set_styles(&name, &[("font-weight", "bold"), ("font-size", "1.1rem")])?;
    let domain = text_element(document, "div", "", &a.domain)?;
    set_styles(&domain, &[("font-size", "0.9rem"), ("color", "#d0d0d0")])?;
    el.append_child(&name)?;
    el.append_child(&domain)?;
    Ok(el)
}

/// Mount the authors page: title, coordinator, one card per student and
/// the team lead centred on its own row.
pub fn mount_authors(
    document: &Document,
    main: &HtmlElement,
    authors: &Authors,
) -> Result<(), JsValue> {
    let stars = generate_stars(TOPIC_STAR_COUNT, js_sys::Math::random);
    mount_stars(document, main, &stars)?;

    let wrap = element(document, "div", "harta-authors")?;
    wrap.append_child(text_element(document, "h1", "harta-title", &authors.title)?.as_ref())?;
    let coordinator = text_element(document, "h3", "", &authors.coordinator)?;
    set_styles(&coordinator, &[("color", "#62d0ff"), ("margin-bottom", "40px")])?;
    wrap.append_child(&coordinator)?;

    let grid = element(document, "div", "harta-grid")?;
    for s in authors.students.iter().filter(|s| s.name != authors.lead.name) {
        grid.append_child(card(document, s)?.as_ref())?;
    }
    let lead_row = element(document, "div", "")?;
    set_styles(
        &lead_row,
        &[
            ("grid-column", "1 / -1"),
            ("display", "flex"),
            ("justify-content", "center"),
        ],
    )?;
    let lead = card(document, &authors.lead)?;
    set_styles(&lead, &[("min-width", "260px")])?;
    lead_row.append_child(&lead)?;
    grid.append_child(&lead_row)?;
    wrap.append_child(&grid)?;
    main.append_child(&wrap)?;
    Ok(())
}
