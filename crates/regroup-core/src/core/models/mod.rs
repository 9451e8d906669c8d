pub mod group;
pub mod partition;
pub mod registry;
pub mod relationship;
pub mod student;
