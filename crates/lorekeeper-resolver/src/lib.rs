//! Lorekeeper — advisory text resolution.
//!
//! Given a validated gameplay event and the document index, produces the
//! text to display: selects a message key per category, pulls documentation
//! excerpts where the rules call for them, and runs the result through the
//! per-category display template.

pub mod keys;
pub mod resolve;
pub mod template;
