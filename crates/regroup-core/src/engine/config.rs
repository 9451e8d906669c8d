use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Tuning knobs for one optimization run.
///
/// `attempted_depth` is the sole resource bound: a caller wanting a time
/// budget must translate it into a depth externally. `num_groups` larger
/// than the student count is tolerated (trailing groups stay empty) and is
/// flagged at optimize time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeConfig {
    pub num_groups: usize,
    pub attempted_depth: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            num_groups: 5,
            attempted_depth: 1000,
            seed: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct OptimizeConfigBuilder {
    num_groups: Option<usize>,
    attempted_depth: Option<usize>,
    seed: Option<u64>,
}

impl OptimizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_groups(mut self, n: usize) -> Self {
        self.num_groups = Some(n);
        self
    }
    pub fn attempted_depth(mut self, depth: usize) -> Self {
        self.attempted_depth = Some(depth);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<OptimizeConfig, ConfigError> {
        let defaults = OptimizeConfig::default();
        let num_groups = self.num_groups.unwrap_or(defaults.num_groups);
        if num_groups == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "num_groups",
                reason: "must be at least 1".to_string(),
            });
        }
        let attempted_depth = self.attempted_depth.unwrap_or(defaults.attempted_depth);
        if attempted_depth == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "attempted_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(OptimizeConfig {
            num_groups,
            attempted_depth,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_applies_documented_defaults() {
        let config = OptimizeConfigBuilder::new().build().unwrap();
        assert_eq!(config.num_groups, 5);
        assert_eq!(config.attempted_depth, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn build_accepts_explicit_values() {
        let config = OptimizeConfigBuilder::new()
            .num_groups(3)
            .attempted_depth(50)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(config.num_groups, 3);
        assert_eq!(config.attempted_depth, 50);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn zero_groups_is_rejected() {
        let err = OptimizeConfigBuilder::new().num_groups(0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "num_groups",
                ..
            }
        ));
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = OptimizeConfigBuilder::new()
            .attempted_depth(0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "attempted_depth",
                ..
            }
        ));
    }
}
