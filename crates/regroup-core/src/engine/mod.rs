//! # Engine Module
//!
//! The stateful layer that turns a loaded roster into a best-found grouping.
//!
//! - **Configuration** ([`config`]) - group count, trial depth, and the optional
//!   random seed, behind a validating builder
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events for
//!   host user interfaces
//! - **Scoring** ([`scoring`]) - the pure intra-group pair-score sum
//! - **Search** ([`search`]) - the randomized-restart trial loop and incumbent
//! - **Error Handling** ([`error`]) - engine-specific error types and propagation

pub mod config;
pub mod error;
pub mod progress;
pub mod scoring;
pub mod search;
