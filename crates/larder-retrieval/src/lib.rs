//! # larder-retrieval
//!
//! Turns pantry terms into an FTS5 query, runs it against the corpus
//! store, and enriches every hit. Observing an empty corpus triggers
//! background ingestion and returns empty for the current call.

pub mod engine;
pub mod query;

pub use engine::RetrievalEngine;
pub use query::build_match_expression;
