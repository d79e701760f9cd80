//! SVG rendering of a radial map: centre title, connectors, node labels.

use harta_core::layout::{Connector, radial_layout};

/// Extra room around the circle for label boxes (px, before scaling).
const MARGIN_PX: f64 = 220.0;
const LABEL_FONT_PX: f64 = 14.0;
const TITLE_FONT_PX: f64 = 24.0;
/// Rough advance width of one glyph relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;

pub struct PosterMap<'a> {
    pub title: &'a str,
    pub labels: &'a [String],
    pub radius: f64,
    /// Draw lines from the centre to each label (topic pages do, the home
    /// map does not).
    pub connectors: bool,
}

/// Build the SVG text plus its pixel size at `scale`.
pub fn build_map_svg(map: &PosterMap<'_>, scale: f64) -> (String, u32, u32) {
    let half_w = map.radius + MARGIN_PX;
    let half_h = map.radius + MARGIN_PX / 2.0;
    let w_px = (2.0 * half_w * scale).ceil().max(1.0) as u32;
    let h_px = (2.0 * half_h * scale).ceil().max(1.0) as u32;
    let (cx, cy) = (half_w, half_h);

    let mut s = String::new();
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">\n",
        w_px,
        h_px,
        fmt_px(2.0 * half_w),
        fmt_px(2.0 * half_h)
    ));
    s.push_str(
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
         <stop offset=\"0\" stop-color=\"#1a1a2e\"/><stop offset=\"1\" stop-color=\"#12121c\"/>\
         </linearGradient></defs>\n",
    );
    s.push_str("<rect width=\"100%\" height=\"100%\" fill=\"url(#bg)\"/>\n");

    let points = radial_layout(map.labels.len(), map.radius);
    if map.connectors {
        for p in &points {
            let c = Connector::to(*p);
            s.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#fff\" stroke-opacity=\"0.3\" data-length=\"{}\"/>\n",
                fmt_px(cx),
                fmt_px(cy),
                fmt_px(cx + p.x),
                fmt_px(cy + p.y),
                fmt_px(c.length)
            ));
        }
    }

    for (label, p) in map.labels.iter().zip(&points) {
        s.push_str(&label_box(label, cx + p.x, cy + p.y, LABEL_FONT_PX, "#f4eaff"));
    }
    s.push_str(&label_box(map.title, cx, cy, TITLE_FONT_PX, "#ffffff"));
    s.push_str("</svg>\n");
    (s, w_px, h_px)
}

fn label_box(text: &str, x: f64, y: f64, font_px: f64, color: &str) -> String {
    let w = text.chars().count() as f64 * font_px * GLYPH_WIDTH + 28.0;
    let h = font_px + 20.0;
    format!(
        "<g class=\"node\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"12\" fill=\"#fff\" fill-opacity=\"0.1\"/>\
         <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\" font-size=\"{}\" font-weight=\"600\">{}</text></g>\n",
        fmt_px(x - w / 2.0),
        fmt_px(y - h / 2.0),
        fmt_px(w),
        fmt_px(h),
        fmt_px(x),
        fmt_px(y),
        color,
        fmt_px(font_px),
        svg_escape(text)
    )
}

// Near-integers print without decimals; otherwise up to two, trimmed.
fn fmt_px(v: f64) -> String {
    if (v - v.round()).abs() < 1e-6 {
        format!("{:.0}", v.round() + 0.0)
    } else {
        format!("{:.2}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

pub fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Nod {i}")).collect()
    }

    #[test]
    fn topic_map_has_lines_and_nodes() {
        let l = labels(6);
        let map = PosterMap {
            title: "Grafică",
            labels: &l,
            radius: 320.0,
            connectors: true,
        };
        let (svg, w, h) = build_map_svg(&map, 1.0);
        assert_eq!((w, h), (1080, 860));
        assert_eq!(svg.matches("<line ").count(), 6);
        assert_eq!(svg.matches("class=\"node\"").count(), 7);
        assert!(svg.contains(">Grafică</text>"));
        // First node sits on the right of the centre.
        assert!(svg.contains("x2=\"860\" y2=\"430\""));
    }

    #[test]
    fn home_map_skips_connectors() {
        let l = labels(12);
        let map = PosterMap {
            title: "Harta Informaticii",
            labels: &l,
            radius: 420.0,
            connectors: false,
        };
        let (svg, w, _) = build_map_svg(&map, 2.0);
        assert_eq!(w, 2560);
        assert!(!svg.contains("<line "));
        assert_eq!(svg.matches("class=\"node\"").count(), 13);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(svg_escape("Team Leader & Web"), "Team Leader &amp; Web");
        assert_eq!(svg_escape("<\"x\">"), "&lt;&quot;x&quot;&gt;");
    }

    #[test]
    fn px_formatting() {
        assert_eq!(fmt_px(320.0), "320");
        assert_eq!(fmt_px(-0.0000001), "0");
        assert_eq!(fmt_px(12.5), "12.5");
        assert_eq!(fmt_px(1.234), "1.23");
    }
}
