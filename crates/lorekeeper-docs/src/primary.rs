//! Line-based parsing of the primary advisory document.

/// Marker that opens a section header line.
const HEADER_MARKER: char = '#';

/// One named section of the primary document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text with the marker stripped, trimmed, and lower-cased.
    pub name: String,
    /// Body lines joined with `\n`, embedded newlines preserved.
    pub body: String,
}

/// Splits `text` into named sections.
///
/// A line whose trimmed form starts with `#` opens a section; everything up
/// to the next header line is its body, and the final section closes at end
/// of input. Lines before the first header belong to no section and are
/// dropped. A header name repeated within one document overwrites the body
/// parsed earlier (last write wins, no merge).
#[must_use]
pub fn parse_primary(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with(HEADER_MARKER) {
            if let Some((name, body_lines)) = current.take() {
                close_section(&mut sections, name, &body_lines);
            }
            let name = trimmed
                .trim_start_matches(HEADER_MARKER)
                .trim()
                .to_lowercase();
            current = Some((name, Vec::new()));
        } else if let Some((_, body_lines)) = current.as_mut() {
            body_lines.push(line);
        }
    }
    if let Some((name, body_lines)) = current.take() {
        close_section(&mut sections, name, &body_lines);
    }
    sections
}

fn close_section(sections: &mut Vec<Section>, name: String, body_lines: &[&str]) {
    let body = body_lines.join("\n").trim().to_owned();
    if let Some(existing) = sections.iter_mut().find(|s| s.name == name) {
        existing.body = body;
    } else {
        sections.push(Section { name, body });
    }
}
