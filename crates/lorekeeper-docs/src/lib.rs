//! Lorekeeper — document index bounded context.
//!
//! Parses the primary advisory document and per-topic documents into
//! lookup tables served to the text resolver: a named section table, a
//! per-topic structured record, and a keyword index for category-based
//! retrieval.

pub mod index;
pub mod keywords;
pub mod primary;
pub mod topic;
