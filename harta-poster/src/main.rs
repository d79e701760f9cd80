mod svg;

use harta_content::{Catalog, HomeMap};
use harta_core::constants::{DEFAULT_TITLE, TOPIC_RADIUS_PX};
use harta_core::layout::RadiusPolicy;
use harta_core::routes::{Route, title_from_param};
use harta_core::topic::Topic;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use std::env;
use std::fs;
use std::path::Path;

use crate::svg::{PosterMap, build_map_svg};

const USAGE: &str = "Usage: harta-poster <home|CODE|subject/NAME|topic.json> <output.(svg|png)> [scale]";

/// What a poster shows: a title in the centre and labels around it.
struct Poster {
    title: String,
    labels: Vec<String>,
    radius: f64,
    connectors: bool,
}

/// Headings of an authored topic that have no body text. Untitled subject
/// pages have no content at all and report nothing.
fn content_gaps(topic: &Topic) -> Vec<&str> {
    if topic.route.is_empty() {
        return Vec::new();
    }
    topic.missing_content()
}

impl Poster {
    fn from_topic(topic: &Topic) -> Self {
        for missing in content_gaps(topic) {
            log::warn!("{}: no content for heading {missing:?}", topic.route);
        }
        Poster {
            title: topic.display_name.clone(),
            labels: topic.headings.clone(),
            radius: TOPIC_RADIUS_PX,
            connectors: true,
        }
    }
}

fn resolve_page(page: &str) -> Result<Poster, Box<dyn std::error::Error>> {
    if page == "home" {
        let home = HomeMap::load()?;
        return Ok(Poster {
            title: home.title.clone(),
            labels: home.domains.iter().map(|d| d.name.clone()).collect(),
            radius: RadiusPolicy::HOME.radius_for(f64::INFINITY),
            connectors: false,
        });
    }
    if page.ends_with(".json") {
        let txt = fs::read_to_string(page)?;
        let topic: Topic = serde_json::from_str(&txt)?;
        return Ok(Poster::from_topic(&topic));
    }
    match Route::parse(page) {
        Route::Topic(code) => {
            let catalog = Catalog::load()?;
            let topic = catalog
                .by_route(&code)
                .ok_or_else(|| format!("no topic for route {code}"))?;
            Ok(Poster::from_topic(topic))
        }
        Route::Subject(raw) => {
            let title = title_from_param(&raw).unwrap_or_else(|| {
                log::warn!("could not decode subject {raw:?}; using default title");
                DEFAULT_TITLE.to_string()
            });
            Ok(Poster::from_topic(&Topic::untitled(&title)))
        }
        Route::Authors => Err("the authors page has no radial map".into()),
        Route::Home => resolve_page("home"),
        Route::NotFound(p) => Err(format!("unknown page {p}").into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    let page = &args[1];
    let output = &args[2];
    let scale: f64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .filter(|s: &f64| *s > 0.0)
        .unwrap_or(1.0);

    let poster = resolve_page(page)?;
    let map = PosterMap {
        title: &poster.title,
        labels: &poster.labels,
        radius: poster.radius,
        connectors: poster.connectors,
    };
    let (svg, w_px, h_px) = build_map_svg(&map, scale);
    log::info!(
        "{page}: {} nodes, {}x{} px -> {output}",
        poster.labels.len(),
        w_px,
        h_px
    );

    if output.ends_with(".svg") {
        fs::write(output, svg)?;
        return Ok(());
    }
    if !output.ends_with(".png") {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let mut opt = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    // HARTA_FONT points at a font file that takes over the generic sans-serif family.
    if let Ok(font_path) = env::var("HARTA_FONT") {
        fontdb.load_font_file(&font_path)?;
        let family_name = fontdb
            .faces()
            .find(|face| matches!(&face.source, usvg::fontdb::Source::File(p) if p.as_path() == Path::new(&font_path)))
            .and_then(|face| face.families.first().map(|(n, _)| n.clone()));
        if let Some(name) = family_name {
            fontdb.set_sans_serif_family(name);
        }
    }
    if fontdb.faces().next().is_none() {
        log::warn!("no fonts found; labels will not be rendered");
    }
    opt.fontdb = std::sync::Arc::new(fontdb);
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| format!("SVG parse error: {e:?}"))?;
    let mut pixmap = tiny_skia::Pixmap::new(w_px, h_px).ok_or("pixmap alloc failed")?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    encode_png_deterministic(&pixmap, output)?;
    Ok(())
}

fn encode_png_deterministic(
    pixmap: &tiny_skia::Pixmap,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = fs::File::create(path)?;
    let mut enc = Encoder::new(file, pixmap.width(), pixmap.height());
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    enc.set_filter(FilterType::NoFilter);
    enc.set_compression(Compression::Default);
    let mut writer = enc.write_header()?;
    writer.write_image_data(pixmap.data())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use harta_core::topic::STANDARD_HEADINGS;

    #[test]
    fn resolves_topic_codes() {
        let p = resolve_page("ASD").unwrap();
        assert_eq!(p.labels.len(), 6);
        assert!(p.connectors);
        assert_eq!(p.radius, TOPIC_RADIUS_PX);
    }

    #[test]
    fn resolves_home_with_wide_radius() {
        let p = resolve_page("home").unwrap();
        assert_eq!(p.labels.len(), 12);
        assert!(!p.connectors);
        assert_eq!(p.radius, 420.0);
    }

    #[test]
    fn subject_pages_use_decoded_title() {
        let p = resolve_page("subject/Inginerie%20software").unwrap();
        assert_eq!(p.title, "Inginerie software");
        assert_eq!(p.labels, STANDARD_HEADINGS);
        let bad = resolve_page("subject/%E0%A4%A").unwrap();
        assert_eq!(bad.title, DEFAULT_TITLE);
    }

    #[test]
    fn only_authored_topics_report_gaps() {
        assert!(content_gaps(&Topic::untitled("Bioinformatică")).is_empty());
        let mut authored = Topic::untitled("Grafică");
        authored.route = "GRAFICA".to_string();
        authored
            .content
            .insert(STANDARD_HEADINGS[0].to_string(), vec!["x".to_string()]);
        assert_eq!(content_gaps(&authored), STANDARD_HEADINGS[1..].to_vec());
    }

    #[test]
    fn authors_and_unknown_pages_are_errors() {
        assert!(resolve_page("AUTORI").is_err());
        assert!(resolve_page("NOPE").is_err());
    }
}
