use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use harta_core::page::RadialPage;
use harta_core::panel::Side;

use crate::dom::{apply_node_style, place_label, place_line, place_node, set_styles, text_element};
use crate::utils::{viewport_width, warn};

/// DOM handles of the detail panel, built once per mount.
pub struct Panel {
    pub root: HtmlElement,
    pub title: HtmlElement,
    pub list: HtmlElement,
    pub close: HtmlElement,
}

/// How node elements are positioned around the centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// `left/top: calc(50% + offset)` heading wrappers.
    Absolute,
    /// Flex-centred labels moved with `translate`.
    Translate,
}

/// Everything one mounted radial page needs. Owned by an `Rc<RefCell<_>>`
/// that only the page's own event closures hold; a new page load builds a
/// new one.
pub struct PageState {
    pub window: Window,
    pub document: Document,
    pub page: RadialPage,
    pub placement: Placement,
    /// Heading wrappers (topic page) or domain links (home map), by index.
    pub nodes: Vec<HtmlElement>,
    /// Connector lines, by index. Empty on the home map.
    pub lines: Vec<HtmlElement>,
    pub panel: Option<Panel>,
}

impl PageState {
    pub fn render_layout(&self) -> Result<(), JsValue> {
        for (node, p) in self.nodes.iter().zip(self.page.points()) {
            match self.placement {
                Placement::Absolute => place_node(node, *p)?,
                Placement::Translate => place_label(node, *p)?,
            }
        }
        for (line, c) in self.lines.iter().zip(self.page.connectors()) {
            place_line(line, c)?;
        }
        self.render_selection()
    }

    /// Apply fade styles and fill or hide the panel for the current selection.
    pub fn render_selection(&self) -> Result<(), JsValue> {
        for (i, node) in self.nodes.iter().enumerate() {
            apply_node_style(node, self.page.node_style(i))?;
        }
        let Some(panel) = &self.panel else {
            return Ok(());
        };
        panel.list.set_inner_html("");
        let Some(view) = self.page.panel() else {
            return set_styles(&panel.root, &[("display", "none")]);
        };
        panel.title.set_text_content(Some(view.title));
        for item in view.items {
            let li = text_element(&self.document, "li", "", item)?;
            panel.list.append_child(&li)?;
        }
        let (side, other) = match view.side {
            Side::Left => ("left", "right"),
            Side::Right => ("right", "left"),
        };
        set_styles(
            &panel.root,
            &[("display", "block"), (side, "40px"), (other, "auto")],
        )
    }
}

/// Run `action` on the page when `el` is clicked, then re-render.
pub fn on_click<F>(el: &HtmlElement, state: &Rc<RefCell<PageState>>, action: F)
where
    F: Fn(&mut RadialPage) + 'static,
{
    let st = state.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let mut s = st.borrow_mut();
        action(&mut s.page);
        if let Err(e) = s.render_selection() {
            warn(&format!("render failed: {:?}", e));
        }
    }));
    el.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
}

/// Recompute positions when the viewport crosses a radius breakpoint.
pub fn attach_resize(state: &Rc<RefCell<PageState>>) {
    let st = state.clone();
    let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let mut s = st.borrow_mut();
        let width = viewport_width(&s.window);
        if s.page.resize(width)
            && let Err(e) = s.render_layout()
        {
            warn(&format!("relayout failed: {:?}", e));
        }
    }));
    state
        .borrow()
        .window
        .set_onresize(Some(onresize.as_ref().unchecked_ref()));
    onresize.forget();
}
