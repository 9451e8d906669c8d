use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::roster::RosterError;
use crate::core::models::partition::PartitionFull;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Roster data error: {source}")]
    Roster {
        #[from]
        source: RosterError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Assignment failed: {source}")]
    Assignment {
        #[from]
        source: PartitionFull,
    },

    #[error("Search already completed; create a new search to run again")]
    SearchConsumed,

    #[error("Score update failed: {0}")]
    ScoreUpdate(String),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
