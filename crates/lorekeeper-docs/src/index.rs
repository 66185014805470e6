//! The document index served to the text resolver.

use std::collections::HashMap;
use std::path::Path;

use lorekeeper_core::reader::FileReader;

use crate::keywords::KeywordIndex;
use crate::primary::{Section, parse_primary};
use crate::topic::{TopicDocument, parse_topic};

/// Parsed advisory documentation: the primary document's section table, the
/// per-topic documents, and the keyword index derived from the sections.
///
/// Owned by the advisory controller; collaborators reach it only through
/// the controller's load operations. A load from an unreadable source is
/// non-fatal — the index keeps serving whatever was previously loaded, or
/// stays empty if nothing ever was.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    sections: Vec<Section>,
    topics: HashMap<String, TopicDocument>,
    keywords: KeywordIndex,
}

impl DocumentIndex {
    /// Creates an empty index. Every lookup returns empty until a document
    /// is loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole section table with the parse of `text` and
    /// rebuilds the keyword index.
    pub fn load_primary_text(&mut self, text: &str) {
        self.sections = parse_primary(text);
        self.keywords.rebuild(&self.sections);
        tracing::debug!(sections = self.sections.len(), "primary document loaded");
    }

    /// Loads the primary document from `path` through `reader`.
    ///
    /// An unreadable source logs a warning and leaves previously loaded
    /// content serving.
    pub fn load_primary(&mut self, reader: &dyn FileReader, path: &Path) {
        match reader.read_text(path) {
            Ok(text) => self.load_primary_text(&text),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "primary document unavailable");
            }
        }
    }

    /// Parses `text` as the topic document for `topic_id`. Topics are
    /// independent: loading one never touches another.
    pub fn load_topic_text(&mut self, topic_id: &str, text: &str) {
        self.topics.insert(topic_id.to_owned(), parse_topic(text));
        tracing::debug!(topic_id, "topic document loaded");
    }

    /// Loads the topic document for `topic_id` from `path` through
    /// `reader`, with the same degraded-mode failure handling as
    /// [`DocumentIndex::load_primary`].
    pub fn load_topic(&mut self, topic_id: &str, reader: &dyn FileReader, path: &Path) {
        match reader.read_text(path) {
            Ok(text) => self.load_topic_text(topic_id, &text),
            Err(error) => {
                tracing::warn!(%error, topic_id, path = %path.display(), "topic document unavailable");
            }
        }
    }

    /// Finds a section body by keyword: exact case-insensitive name match
    /// first, otherwise the first name containing `keyword` as a substring,
    /// in insertion order. First match wins; returns an empty string when
    /// nothing matches.
    #[must_use]
    pub fn find_section(&self, keyword: &str) -> String {
        let lowered = keyword.to_lowercase();
        if let Some(section) = self.sections.iter().find(|s| s.name == lowered) {
            return section.body.clone();
        }
        self.sections
            .iter()
            .find(|s| s.name.contains(&lowered))
            .map(|s| s.body.clone())
            .unwrap_or_default()
    }

    /// Body of the first keyword-indexed section for the fixed category
    /// `label`, if any section matched it.
    #[must_use]
    pub fn category_section(&self, label: &str) -> Option<&str> {
        let name = self.keywords.sections_for(label).first()?;
        self.sections
            .iter()
            .find(|s| &s.name == name)
            .map(|s| s.body.as_str())
    }

    /// Topic document registered under `topic_id`, by exact identifier.
    #[must_use]
    pub fn topic(&self, topic_id: &str) -> Option<&TopicDocument> {
        self.topics.get(topic_id)
    }

    /// Number of sections currently in the table.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use lorekeeper_test_support::{FailingReader, InMemoryReader};

    use super::DocumentIndex;

    #[test]
    fn test_find_section_is_empty_when_nothing_loaded() {
        let index = DocumentIndex::new();

        assert_eq!(index.find_section("controls"), "");
    }

    #[test]
    fn test_find_section_prefers_exact_match_over_substring() {
        let mut index = DocumentIndex::new();
        index.load_primary_text("# Controls overview\nlong form\n# Controls\nshort form");

        assert_eq!(index.find_section("Controls"), "short form");
    }

    #[test]
    fn test_find_section_falls_back_to_first_substring_match() {
        let mut index = DocumentIndex::new();
        index.load_primary_text("# Basic controls\nWASD\n# Advanced controls\ncombos");

        assert_eq!(index.find_section("controls"), "WASD");
    }

    #[test]
    fn test_reload_replaces_the_section_table() {
        let mut index = DocumentIndex::new();
        index.load_primary_text("# Tips\nold");

        index.load_primary_text("# Scoring\npoints");

        assert_eq!(index.find_section("tips"), "");
        assert_eq!(index.find_section("scoring"), "points");
    }

    #[test]
    fn test_unreadable_primary_source_keeps_previous_content() {
        let mut index = DocumentIndex::new();
        index.load_primary_text("# Tips\nsave often");

        index.load_primary(&FailingReader, Path::new("docs/missing.md"));

        assert_eq!(index.find_section("tips"), "save often");
    }

    #[test]
    fn test_topics_are_independent_stores() {
        let mut index = DocumentIndex::new();
        index.load_topic_text("port_scanner", "## Objective\nFind open ports");
        index.load_topic_text("firewall", "## Objective\nBlock intruders");

        assert_eq!(
            index.topic("port_scanner").unwrap().objective,
            "Find open ports"
        );
        assert_eq!(index.topic("firewall").unwrap().objective, "Block intruders");
        assert!(index.topic("Port_Scanner").is_none());
    }

    #[test]
    fn test_topic_loads_through_a_reader() {
        let reader = InMemoryReader::new()
            .with_file("docs/topics/port_scanner.md", "## Objetivo\nFind open ports");
        let mut index = DocumentIndex::new();

        index.load_topic("port_scanner", &reader, Path::new("docs/topics/port_scanner.md"));
        index.load_topic("ghost", &reader, Path::new("docs/topics/ghost.md"));

        assert_eq!(
            index.topic("port_scanner").unwrap().objective,
            "Find open ports"
        );
        assert!(index.topic("ghost").is_none());
    }

    #[test]
    fn test_category_section_serves_the_first_indexed_section() {
        let mut index = DocumentIndex::new();
        index.load_primary_text("# Lore\nstory\n# Keyboard controls\nWASD\n# Pad controls\nsticks");

        assert_eq!(index.category_section("controls"), Some("WASD"));
        assert_eq!(index.category_section("scoring"), None);
    }
}
