//! # Regroup Core Library
//!
//! A library for forming balanced student groups that avoid repeat pairings,
//! based on randomized restart search over a matrix of pairwise relationship scores.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`StudentRegistry`,
//!   `RelationshipMatrix`, `Partition`) and roster I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the search.
//!   It includes configuration, progress reporting, the pure scoring function, and the
//!   randomized-restart `Search` itself.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together into the two phases of the grouping
//!   cycle: [`workflows::optimize`] proposes a grouping, and [`workflows::confirm`]
//!   writes the accepted grouping back into the relationship scores.

pub mod core;
pub mod engine;
pub mod workflows;
