//! moodjour - Terminal mood journal
//!
//! Saves free-form journal entries tagged with a mood, either chosen by the
//! user or inferred from keywords in the text, keeps them as an append-only
//! history in a key-value store, and exports that history as plain text or
//! JSON.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
