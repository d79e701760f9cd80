use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scene::SceneKind;
use crate::selection::Selection;

/// Headings every authored topic page uses, in display order.
pub const STANDARD_HEADINGS: [&str; 6] = [
    "Activități principale",
    "Relații cu alte subdomenii",
    "Probleme importante și deschise",
    "Persoane importante",
    "Forumuri importante",
    "Dimensiune locală și globală",
];

/// One subdomain page: a centre title, six radial headings and the body
/// text behind each of them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Topic {
    /// Path segment the page is served under (`ASD`, `AI`, ...).
    #[serde(default)]
    pub route: String,
    pub display_name: String,
    #[serde(default)]
    pub scene: Option<SceneKind>,
    /// Soft glow and faint line icons behind the radial menu.
    #[serde(default)]
    pub icon_backdrop: bool,
    pub headings: Vec<String>,
    /// Paragraphs shown when the centre node is selected.
    #[serde(default)]
    pub overview: Vec<String>,
    /// Bullets per heading. Keys are not checked against `headings`.
    #[serde(default)]
    pub content: HashMap<String, Vec<String>>,
}

impl Topic {
    /// Page for a subject that has no authored content yet.
    pub fn untitled(display_name: &str) -> Topic {
        Topic {
            route: String::new(),
            display_name: display_name.to_string(),
            scene: None,
            icon_backdrop: false,
            headings: STANDARD_HEADINGS.iter().map(|h| h.to_string()).collect(),
            overview: Vec::new(),
            content: HashMap::new(),
        }
    }

    pub fn heading(&self, index: usize) -> Option<&str> {
        self.headings.get(index).map(String::as_str)
    }

    /// Body items for `selection`. Anything unknown reads as empty.
    pub fn body(&self, selection: Selection) -> &[String] {
        match selection {
            Selection::None => &[],
            Selection::Overview => &self.overview,
            Selection::Heading(i) => self
                .heading(i)
                .and_then(|h| self.content.get(h))
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Panel title for `selection`.
    pub fn title(&self, selection: Selection) -> Option<&str> {
        match selection {
            Selection::None => None,
            Selection::Overview => Some(&self.display_name),
            Selection::Heading(i) => self.heading(i),
        }
    }

    /// Headings whose lookup would render an empty panel.
    pub fn missing_content(&self) -> Vec<&str> {
        self.headings
            .iter()
            .filter(|h| self.content.get(h.as_str()).is_none_or(|v| v.is_empty()))
            .map(String::as_str)
            .collect()
    }

    /// Content keys that match no heading; usually a typo in the table.
    pub fn orphan_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .content
            .keys()
            .filter(|k| !self.headings.iter().any(|h| h == *k))
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Topic {
        let mut t = Topic::untitled("Bioinformatică");
        t.overview = vec!["Despre".to_string()];
        t.content
            .insert("Activități principale".to_string(), vec!["a".into(), "b".into()]);
        // Key spelled differently from the heading.
        t.content
            .insert("Foruri importante".to_string(), vec!["c".into()]);
        t
    }

    #[test]
    fn body_per_selection() {
        let t = sample();
        assert!(t.body(Selection::None).is_empty());
        assert_eq!(t.body(Selection::Overview), ["Despre".to_string()]);
        assert_eq!(t.body(Selection::Heading(0)).len(), 2);
    }

    #[test]
    fn mismatched_key_renders_empty() {
        let t = sample();
        assert_eq!(t.heading(4), Some("Forumuri importante"));
        assert!(t.body(Selection::Heading(4)).is_empty());
        assert!(t.body(Selection::Heading(42)).is_empty());
        assert_eq!(t.orphan_keys(), vec!["Foruri importante"]);
    }

    #[test]
    fn missing_content_lists_headings() {
        let t = sample();
        let missing = t.missing_content();
        assert_eq!(missing.len(), 5);
        assert!(!missing.contains(&"Activități principale"));
        assert!(missing.contains(&"Forumuri importante"));
    }

    #[test]
    fn titles() {
        let t = sample();
        assert_eq!(t.title(Selection::Overview), Some("Bioinformatică"));
        assert_eq!(t.title(Selection::Heading(1)), Some("Relații cu alte subdomenii"));
        assert_eq!(t.title(Selection::None), None);
    }
}
