//! Localized string lookup consumed by the resolver.

/// Opaque string-keyed translation lookup.
///
/// The advisory core only ever selects message keys; the actual prose lives
/// with the collaborator (UI/localization backend) implementing this trait.
/// Implementations are expected to return the key itself when it is not in
/// their catalog, so a missing translation degrades visibly instead of
/// silently.
pub trait Translator: Send + Sync {
    /// Resolves a message key to localized text.
    fn translate(&self, key: &str) -> String;

    /// Resolves a message key, substituting named arguments into its
    /// `{name}` placeholders.
    fn translate_args(&self, key: &str, args: &[(&str, &str)]) -> String;
}
