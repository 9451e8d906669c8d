//! # Workflows Module
//!
//! The public API layer: complete grouping procedures built from the engine
//! and core primitives.
//!
//! A grouping cycle has two phases that may run as separate invocations with
//! no shared memory. [`optimize`] proposes a grouping and returns a
//! serializable [`optimize::GroupingResult`]; the host persists it however it
//! likes (file, cache, database row) and later hands it to [`confirm`],
//! which reinforces the relationship scores of every pair that was grouped
//! together. Declining a proposal is simply running [`optimize`] again.

pub mod confirm;
pub mod optimize;
