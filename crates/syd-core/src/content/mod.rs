//! The static content graph.
//!
//! The complete, immutable set of screens and their linkage. The bilingual
//! content itself is a given input, embedded as a JSON asset and parsed
//! once; the code here only loads, indexes and validates it.

use crate::error::{Result, SydError};
use crate::language::Language;
use crate::screen::{ExternalLink, Screen};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The embedded demo deck.
const DEMO_CONTENT: &str = include_str!("demo.json");

static DEMO_GRAPH: Lazy<ContentGraph> = Lazy::new(|| {
    // The asset is embedded and covered by tests; a parse failure here is a
    // build defect, not a runtime condition.
    ContentGraph::from_json(DEMO_CONTENT).expect("embedded demo content must parse")
});

/// An immutable directed graph of screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGraph {
    pub version: String,
    pub title: String,
    /// Whether the shell shows the language selector.
    pub language_selector: bool,
    pub languages: Vec<Language>,
    pub screens: Vec<Screen>,
}

impl ContentGraph {
    /// Parses a graph from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let graph: ContentGraph = serde_json::from_str(json)?;
        Ok(graph)
    }

    /// Returns the embedded demo deck.
    pub fn demo() -> &'static ContentGraph {
        &DEMO_GRAPH
    }

    /// Looks up a screen by id.
    pub fn get(&self, screen_id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == screen_id)
    }

    /// True when the id resolves to a screen.
    pub fn contains(&self, screen_id: &str) -> bool {
        self.get(screen_id).is_some()
    }

    /// The external links of the applications screen, if present.
    pub fn external_links(&self) -> &[ExternalLink] {
        self.get("applications_hub")
            .map(|s| s.links.as_slice())
            .unwrap_or(&[])
    }

    /// Checks the navigation-closure invariant: every action target and
    /// `next` pointer resolves to a screen of this graph.
    ///
    /// Returns the list of dangling references, one `from -> to` pair per
    /// unresolved edge. An empty list means the graph is closed.
    pub fn dangling_edges(&self) -> Vec<(String, String)> {
        let mut dangling = Vec::new();
        for screen in &self.screens {
            for target in screen.outgoing_targets() {
                if !self.contains(target) {
                    dangling.push((screen.id.clone(), target.to_string()));
                }
            }
        }
        dangling
    }

    /// Validates the graph: unique ids and navigation closure.
    pub fn validate(&self) -> Result<()> {
        for (i, screen) in self.screens.iter().enumerate() {
            if self.screens[..i].iter().any(|s| s.id == screen.id) {
                return Err(SydError::internal(format!(
                    "duplicate screen id '{}'",
                    screen.id
                )));
            }
        }

        let dangling = self.dangling_edges();
        if !dangling.is_empty() {
            let edges: Vec<String> = dangling
                .iter()
                .map(|(from, to)| format!("{from} -> {to}"))
                .collect();
            return Err(SydError::internal(format!(
                "content graph has dangling edges: {}",
                edges.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenType;
    use crate::session::START_SCREEN_ID;

    #[test]
    fn test_demo_graph_parses_and_validates() {
        let graph = ContentGraph::demo();
        graph.validate().unwrap();
        assert!(graph.language_selector);
        assert_eq!(graph.languages.len(), 2);
    }

    #[test]
    fn test_demo_graph_contains_start_screen() {
        let graph = ContentGraph::demo();
        let start = graph.get(START_SCREEN_ID).unwrap();
        assert_eq!(start.screen_type, ScreenType::Dashboard);
        assert!(!start.actions.is_empty());
    }

    #[test]
    fn test_navigation_closure() {
        // Every action target and `next` pointer must resolve.
        assert!(ContentGraph::demo().dangling_edges().is_empty());
    }

    #[test]
    fn test_applications_screen_lists_external_links() {
        let links = ContentGraph::demo().external_links();
        assert!(!links.is_empty());
        assert!(links.iter().all(|l| l.href.starts_with("https://")));
    }

    #[test]
    fn test_unknown_id_is_absent_not_a_panic() {
        assert!(!ContentGraph::demo().contains("teleport_bay"));
        assert!(ContentGraph::demo().get("teleport_bay").is_none());
    }
}
