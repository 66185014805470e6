//! Lorekeeper Advisor — the event-driven advisory controller.
//!
//! Consumes gameplay events, drives the text resolver against the document
//! index, and emits display and lifecycle notifications while tracking
//! player progress. Processing is strictly sequential: a single worker task
//! owns the queue and the state machine, so events are advised in FIFO
//! arrival order and at most one process step is ever active.

pub mod config;
pub mod controller;
pub mod progress;
pub mod scheduler;
mod worker;
