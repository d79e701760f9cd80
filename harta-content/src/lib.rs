//! Pre-authored page content, embedded from `content/` at compile time.

use serde::{Deserialize, Serialize};

use harta_core::routes::route_for;
use harta_core::scene::SceneKind;
use harta_core::topic::Topic;

/// Topic tables in home-map order.
const TOPIC_SOURCES: [&str; 10] = [
    include_str!("../../content/topics/ASD.json"),
    include_str!("../../content/topics/LIMBAJE.json"),
    include_str!("../../content/topics/ARH.json"),
    include_str!("../../content/topics/SO.json"),
    include_str!("../../content/topics/BAZEDATE.json"),
    include_str!("../../content/topics/AI.json"),
    include_str!("../../content/topics/GRAFICA.json"),
    include_str!("../../content/topics/IOC.json"),
    include_str!("../../content/topics/SC.json"),
    include_str!("../../content/topics/IOR.json"),
];

const HOME_SOURCE: &str = include_str!("../../content/home.json");
const AUTHORS_SOURCE: &str = include_str!("../../content/authors.json");

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub topics: Vec<Topic>,
}

impl Catalog {
    pub fn load() -> Result<Catalog, serde_json::Error> {
        let topics = TOPIC_SOURCES
            .iter()
            .map(|src| serde_json::from_str::<Topic>(src))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog { topics })
    }

    /// Topic served under path code `code` (`ASD`, `AI`, ...).
    pub fn by_route(&self, code: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.route == code)
    }
}

/// One label on the home map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Domain {
    pub fn href(&self) -> String {
        route_for(&self.name)
    }

    /// Text glyph drawn before the label for the domain's icon name.
    /// Unknown or absent icons draw nothing.
    pub fn glyph(&self) -> Option<&'static str> {
        let glyph = match self.icon.as_deref()? {
            "graph" => "◉",
            "code" => "</>",
            "template" => "▤",
            "network" => "⇄",
            "tools" => "⚒",
            "database" => "⛁",
            "ai" => "⚙",
            "brush" => "✎",
            "touch" => "☝",
            "function" => "ƒ",
            "office" => "▥",
            "dna" => "≋",
            _ => return None,
        };
        Some(glyph)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HomeMap {
    pub title: String,
    pub scene: Option<SceneKind>,
    pub domains: Vec<Domain>,
}

impl HomeMap {
    pub fn load() -> Result<HomeMap, serde_json::Error> {
        serde_json::from_str(HOME_SOURCE)
    }

    /// The map as a radial page: domains are the nodes, nothing has a body.
    pub fn to_topic(&self) -> Topic {
        Topic {
            route: String::new(),
            display_name: self.title.clone(),
            scene: self.scene,
            headings: self.domains.iter().map(|d| d.name.clone()).collect(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub domain: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Authors {
    pub title: String,
    pub coordinator: String,
    pub students: Vec<Author>,
    pub lead: Author,
}

impl Authors {
    pub fn load() -> Result<Authors, serde_json::Error> {
        serde_json::from_str(AUTHORS_SOURCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harta_core::routes::{ROUTES, Route};
    use harta_core::selection::Selection;
    use harta_core::topic::STANDARD_HEADINGS;

    #[test]
    fn every_topic_parses_with_six_headings() {
        let cat = Catalog::load().unwrap();
        assert_eq!(cat.topics.len(), 10);
        for t in &cat.topics {
            assert_eq!(t.headings.len(), 6, "{}", t.route);
            // IOR's table is written without diacritics.
            if t.route != "IOR" {
                assert_eq!(t.headings, STANDARD_HEADINGS, "{}", t.route);
            }
            assert!(!t.overview.is_empty(), "{}", t.route);
            assert!(t.scene.is_some(), "{}", t.route);
        }
    }

    #[test]
    fn shipped_content_has_no_gaps() {
        let cat = Catalog::load().unwrap();
        for t in &cat.topics {
            assert!(t.missing_content().is_empty(), "{}", t.route);
            assert!(t.orphan_keys().is_empty(), "{}", t.route);
        }
    }

    #[test]
    fn every_route_has_a_topic() {
        let cat = Catalog::load().unwrap();
        for (_, path) in ROUTES {
            let Route::Topic(code) = Route::parse(path) else {
                panic!("{path} is not a topic route");
            };
            assert!(cat.by_route(&code).is_some(), "{code}");
        }
    }

    #[test]
    fn ior_headings_keep_their_spelling() {
        let cat = Catalog::load().unwrap();
        let t = cat.by_route("IOR").unwrap();
        assert_eq!(t.heading(0), Some("Activitati principale"));
        assert!(!t.body(Selection::Heading(5)).is_empty());
    }

    #[test]
    fn lookup_by_route() {
        let cat = Catalog::load().unwrap();
        let t = cat.by_route("IOC").unwrap();
        assert_eq!(t.display_name, "Interacțiune om-computer");
        assert_eq!(t.scene, Some(SceneKind::Cursor));
        assert!(cat.by_route("BIO").is_none());
    }

    #[test]
    fn only_ioc_has_the_icon_backdrop() {
        let cat = Catalog::load().unwrap();
        let with: Vec<&str> = cat
            .topics
            .iter()
            .filter(|t| t.icon_backdrop)
            .map(|t| t.route.as_str())
            .collect();
        assert_eq!(with, vec!["IOC"]);
    }

    #[test]
    fn asd_overview_and_bodies() {
        let cat = Catalog::load().unwrap();
        let t = cat.by_route("ASD").unwrap();
        assert_eq!(t.display_name, "Algoritmi și Structuri de Date");
        assert_eq!(t.body(Selection::Heading(4)).len(), 4);
        assert!(t.body(Selection::Overview)[0].starts_with("Algoritmi și structuri de date"));
    }

    #[test]
    fn home_map() {
        let home = HomeMap::load().unwrap();
        assert_eq!(home.domains.len(), 12);
        assert_eq!(home.scene, Some(SceneKind::Globe));
        assert_eq!(home.domains[0].href(), "/ASD");
        let unmapped: Vec<&str> = home
            .domains
            .iter()
            .filter(|d| d.href().starts_with("/subject/"))
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(unmapped, vec!["Inginerie software", "Bioinformatică"]);
        assert_eq!(home.to_topic().headings.len(), 12);
    }

    #[test]
    fn every_home_domain_has_a_glyph() {
        let home = HomeMap::load().unwrap();
        for d in &home.domains {
            assert!(d.glyph().is_some(), "{}", d.name);
        }
        assert_eq!(home.domains[1].glyph(), Some("</>"));
        let bare = Domain {
            name: "Robotică".to_string(),
            icon: Some("rocket".to_string()),
        };
        assert_eq!(bare.glyph(), None);
    }

    #[test]
    fn authors_page() {
        let a = Authors::load().unwrap();
        assert_eq!(a.students.len(), 12);
        assert_eq!(a.lead.domain, "Team Leader & Web");
    }
}
