//! Test translator — a catalog-backed `Translator` stub.

use std::collections::HashMap;

use lorekeeper_core::translate::Translator;

/// A translator serving registered strings, falling back to the key itself
/// for anything unregistered (the degradation real backends are expected to
/// show). Registered strings may carry `{name}` placeholders for
/// `translate_args`.
#[derive(Debug, Default)]
pub struct TranslatorStub {
    entries: HashMap<String, String>,
}

impl TranslatorStub {
    /// Creates a stub with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `text` for `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }
}

impl Translator for TranslatorStub {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }

    fn translate_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}
