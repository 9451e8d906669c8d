//! Foundation layer: stateless data models and roster I/O.

pub mod io;
pub mod models;
