//! Keyword index over the primary document's sections.

use std::collections::HashMap;

use crate::primary::Section;

/// Keyword substrings per fixed category label, English and Spanish
/// variants. A section is indexed under a label when its name contains any
/// of the label's keywords.
const KEYWORDS: &[(&str, &[&str])] = &[
    ("tutorial", &["tutorial", "introduc", "inicio"]),
    ("controls", &["control", "input", "tecla"]),
    ("navigation", &["navigation", "navega", "map"]),
    ("tips", &["tip", "consejo", "hint"]),
    ("mechanics", &["mechanic", "mecánica", "mecanica", "regla"]),
    ("scoring", &["scoring", "score", "punt"]),
];

/// Derived lookup from category label to the matching section names, in
/// section insertion order. Rebuilt in full every time the section table
/// changes.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    entries: HashMap<&'static str, Vec<String>>,
}

impl KeywordIndex {
    /// Rebuilds the index from scratch over `sections`.
    pub fn rebuild(&mut self, sections: &[Section]) {
        self.entries.clear();
        for &(label, keywords) in KEYWORDS {
            let names: Vec<String> = sections
                .iter()
                .filter(|section| keywords.iter().any(|k| section.name.contains(k)))
                .map(|section| section.name.clone())
                .collect();
            if !names.is_empty() {
                self.entries.insert(label, names);
            }
        }
    }

    /// Section names indexed under `label`, in insertion order. Empty for
    /// an unknown label or when nothing matched.
    #[must_use]
    pub fn sections_for(&self, label: &str) -> &[String] {
        self.entries.get(label).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::KeywordIndex;
    use crate::primary::parse_primary;

    #[test]
    fn test_sections_are_indexed_by_name_keyword() {
        let sections =
            parse_primary("# Basic controls\nWASD\n# Advanced controls\ncombos\n# Lore\nstory");
        let mut index = KeywordIndex::default();

        index.rebuild(&sections);

        assert_eq!(
            index.sections_for("controls"),
            ["basic controls", "advanced controls"]
        );
        assert!(index.sections_for("scoring").is_empty());
    }

    #[test]
    fn test_spanish_section_names_are_indexed() {
        let sections = parse_primary("# Consejos\nguarda la partida\n# Mecanicas\nturnos");
        let mut index = KeywordIndex::default();

        index.rebuild(&sections);

        assert_eq!(index.sections_for("tips"), ["consejos"]);
        assert_eq!(index.sections_for("mechanics"), ["mecanicas"]);
    }

    #[test]
    fn test_rebuild_replaces_previous_entries() {
        let mut index = KeywordIndex::default();
        index.rebuild(&parse_primary("# Controls\nWASD"));

        index.rebuild(&parse_primary("# Scoring\npoints"));

        assert!(index.sections_for("controls").is_empty());
        assert_eq!(index.sections_for("scoring"), ["scoring"]);
    }

    #[test]
    fn test_unknown_label_is_empty() {
        let index = KeywordIndex::default();

        assert!(index.sections_for("weather").is_empty());
    }
}
