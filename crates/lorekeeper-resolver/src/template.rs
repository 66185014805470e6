//! Named-placeholder template substitution.

/// Renders `template`, replacing each `{name}` placeholder with the value
/// registered for `name` in `args`. Unknown placeholders render empty; text
/// outside placeholders passes through verbatim; an unclosed brace is
/// treated as literal text.
#[must_use]
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if let Some((_, value)) = args.iter().find(|(key, _)| *key == name) {
                    out.push_str(value);
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn test_placeholders_are_replaced_by_name() {
        let text = render(
            "{context} in {area}",
            &[("context", "Welcome"), ("area", "the lab")],
        );

        assert_eq!(text, "Welcome in the lab");
    }

    #[test]
    fn test_unknown_placeholder_renders_empty() {
        assert_eq!(render("a{missing}b", &[]), "ab");
    }

    #[test]
    fn test_literal_text_passes_through() {
        assert_eq!(render("no placeholders here", &[]), "no placeholders here");
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        assert_eq!(render("tail {open", &[("open", "x")]), "tail {open");
    }

    #[test]
    fn test_repeated_placeholder_is_replaced_each_time() {
        assert_eq!(render("{x}-{x}", &[("x", "a")]), "a-a");
    }
}
