//! Per-mount controller shared by every radial page.
//!
//! A `RadialPage` owns the selection, the computed layout and the star field
//! of exactly one mounted page. It is created on mount and dropped on
//! navigation; nothing in it is global.

use crate::layout::{Connector, LayoutPoint, RadiusPolicy, radial_layout};
use crate::panel::{Side, panel_side};
use crate::selection::{Click, Selection};
use crate::stars::{Star, generate_stars};
use crate::style::{NodeStyle, node_style};
use crate::topic::Topic;

/// What the detail panel shows for the current selection.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    pub side: Side,
}

pub struct RadialPage {
    topic: Topic,
    policy: RadiusPolicy,
    radius: f64,
    points: Vec<LayoutPoint>,
    stars: Vec<Star>,
    selection: Selection,
}

impl RadialPage {
    pub fn mount<R>(
        topic: Topic,
        policy: RadiusPolicy,
        viewport_width: f64,
        star_count: usize,
        random: R,
    ) -> Self
    where
        R: FnMut() -> f64,
    {
        let radius = policy.radius_for(viewport_width);
        RadialPage {
            points: radial_layout(topic.headings.len(), radius),
            topic,
            policy,
            radius,
            stars: generate_stars(star_count, random),
            selection: Selection::None,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn points(&self) -> &[LayoutPoint] {
        &self.points
    }

    pub fn connectors(&self) -> impl Iterator<Item = Connector> + '_ {
        self.points.iter().copied().map(Connector::to)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn click(&mut self, click: Click) -> Selection {
        self.selection = self.selection.after(click, self.points.len());
        self.selection
    }

    pub fn click_center(&mut self) -> Selection {
        self.click(Click::Center)
    }

    pub fn click_heading(&mut self, index: usize) -> Selection {
        self.click(Click::Heading(index))
    }

    pub fn close(&mut self) -> Selection {
        self.click(Click::Close)
    }

    /// Regenerate the layout if the new width maps to another radius.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let radius = self.policy.radius_for(viewport_width);
        if radius == self.radius {
            return false;
        }
        self.radius = radius;
        self.points = radial_layout(self.topic.headings.len(), radius);
        true
    }

    pub fn node_style(&self, index: usize) -> NodeStyle {
        node_style(self.selection, index)
    }

    pub fn node_styles(&self) -> Vec<NodeStyle> {
        (0..self.points.len()).map(|i| self.node_style(i)).collect()
    }

    pub fn panel(&self) -> Option<PanelView<'_>> {
        let topic = &self.topic;
        let title = topic.title(self.selection)?;
        let side = panel_side(self.selection, &self.points)?;
        Some(PanelView {
            title,
            items: topic.body(self.selection),
            side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOPIC_STAR_COUNT;

    fn topic() -> Topic {
        let mut t = Topic::untitled("Grafică");
        t.overview = vec!["Grafica pe calculator.".to_string()];
        t.content.insert(
            t.headings[2].clone(),
            vec!["Randare".to_string(), "Shadere".to_string()],
        );
        t
    }

    fn mount(t: &Topic) -> RadialPage {
        RadialPage::mount(t.clone(), RadiusPolicy::TOPIC, 1440.0, TOPIC_STAR_COUNT, || 0.5)
    }

    #[test]
    fn mounts_closed_and_lit() {
        let t = topic();
        let page = mount(&t);
        assert_eq!(page.selection(), Selection::None);
        assert_eq!(page.points().len(), 6);
        assert_eq!(page.stars().len(), 100);
        assert!(page.panel().is_none());
        assert!(page.node_styles().iter().all(|s| *s == NodeStyle::FULL));
    }

    #[test]
    fn heading_panel() {
        let t = topic();
        let mut page = mount(&t);
        page.click_heading(2);
        let panel = page.panel().unwrap();
        assert_eq!(panel.title, "Probleme importante și deschise");
        assert_eq!(panel.items.len(), 2);
        assert_eq!(panel.side, Side::Left);
        let faded = page.node_styles().iter().filter(|s| s.is_faded()).count();
        assert_eq!(faded, 5);
    }

    #[test]
    fn empty_heading_still_opens() {
        let t = topic();
        let mut page = mount(&t);
        page.click_heading(0);
        let panel = page.panel().unwrap();
        assert!(panel.items.is_empty());
        assert_eq!(panel.side, Side::Right);
    }

    #[test]
    fn overview_panel_on_the_right() {
        let t = topic();
        let mut page = mount(&t);
        page.click_center();
        let panel = page.panel().unwrap();
        assert_eq!(panel.title, "Grafică");
        assert_eq!(panel.items, ["Grafica pe calculator.".to_string()]);
        assert_eq!(panel.side, Side::Right);
    }

    #[test]
    fn close_restores_everything() {
        let t = topic();
        for start in [Click::Center, Click::Heading(0), Click::Heading(5)] {
            let mut page = mount(&t);
            page.click(start);
            assert_eq!(page.close(), Selection::None);
            assert!(page.panel().is_none());
            assert!(page.node_styles().iter().all(|s| !s.is_faded()));
        }
    }

    #[test]
    fn resize_only_on_breakpoint() {
        let t = topic();
        let mut page = RadialPage::mount(t.clone(), RadiusPolicy::HOME, 1000.0, 0, || 0.0);
        assert_eq!(page.radius(), 340.0);
        assert!(!page.resize(1100.0));
        assert!(page.resize(1300.0));
        assert_eq!(page.radius(), 420.0);
        assert!((page.points()[0].x - 420.0).abs() < 1e-9);
        let mut fixed = mount(&t);
        assert!(!fixed.resize(400.0));
    }

    #[test]
    fn selection_survives_resize() {
        let t = topic();
        let mut page = RadialPage::mount(t.clone(), RadiusPolicy::HOME, 1000.0, 0, || 0.0);
        page.click_heading(3);
        page.resize(1600.0);
        assert_eq!(page.selection(), Selection::Heading(3));
    }

    #[test]
    fn connectors_follow_points() {
        let t = topic();
        let page = mount(&t);
        for c in page.connectors() {
            assert!((c.length - 320.0).abs() < 1e-9);
        }
    }
}
