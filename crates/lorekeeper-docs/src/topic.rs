//! Parsing of per-topic minigame documents.

use serde::Serialize;

/// Marker that opens a bullet line under a list category.
const BULLET_MARKER: char = '-';

/// Structured advisory content for one game topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicDocument {
    /// What the player is trying to do.
    pub objective: String,
    /// How to play.
    pub controls: String,
    /// Ordered advice entries.
    pub tips: Vec<String>,
    /// Ordered rules-of-play entries.
    pub mechanics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopicCategory {
    Objective,
    Controls,
    Tips,
    Mechanics,
}

/// Marker substrings per category. Matched case-insensitively against a
/// second-level header; the first set that matches wins, checked in this
/// order. Spanish variants first, matching the source document convention.
const MARKER_SETS: &[(TopicCategory, &[&str])] = &[
    (TopicCategory::Objective, &["objetivo", "objective"]),
    (TopicCategory::Controls, &["control"]),
    (TopicCategory::Tips, &["consejo", "tip"]),
    (
        TopicCategory::Mechanics,
        &["mecánica", "mecanica", "mechanic"],
    ),
];

fn classify(header: &str) -> Option<TopicCategory> {
    let lowered = header.to_lowercase();
    MARKER_SETS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| lowered.contains(marker)))
        .map(|(category, _)| *category)
}

/// Number of leading `#` marker characters, if the trimmed line is a header.
fn header_level(trimmed: &str) -> Option<usize> {
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    (level > 0).then_some(level)
}

/// Parses a topic document.
///
/// Only second-level (`##`) headers open a category; any other header
/// closes the current one. Objective and controls accumulate their body
/// lines as joined text; tips and mechanics collect one entry per bullet
/// line (leading dash after trimming), marker stripped, and ignore
/// everything else.
#[must_use]
pub fn parse_topic(text: &str) -> TopicDocument {
    let mut doc = TopicDocument::default();
    let mut current: Option<TopicCategory> = None;
    let mut objective_lines: Vec<&str> = Vec::new();
    let mut controls_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(level) = header_level(trimmed) {
            current = if level == 2 {
                classify(trimmed.trim_start_matches('#').trim())
            } else {
                None
            };
            continue;
        }
        match current {
            Some(TopicCategory::Objective) => objective_lines.push(line),
            Some(TopicCategory::Controls) => controls_lines.push(line),
            Some(TopicCategory::Tips) => push_bullet(&mut doc.tips, trimmed),
            Some(TopicCategory::Mechanics) => push_bullet(&mut doc.mechanics, trimmed),
            None => {}
        }
    }

    doc.objective = objective_lines.join("\n").trim().to_owned();
    doc.controls = controls_lines.join("\n").trim().to_owned();
    doc
}

fn push_bullet(entries: &mut Vec<String>, trimmed: &str) {
    if let Some(rest) = trimmed.strip_prefix(BULLET_MARKER) {
        let entry = rest.trim();
        if !entry.is_empty() {
            entries.push(entry.to_owned());
        }
    }
}
