use crate::cli::OptimizeArgs;
use crate::error::{CliError, Result};
use regroup::engine::config::{OptimizeConfig, OptimizeConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub optimize: FileOptimizeConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOptimizeConfig {
    #[serde(rename = "num-groups")]
    pub num_groups: Option<usize>,

    #[serde(rename = "attempted-depth")]
    pub attempted_depth: Option<usize>,

    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let config: FileConfig = toml::from_str(&text).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded configuration file: {:?}", config);
        Ok(config)
    }
}

/// Merges the optional config file under the CLI flags; flags win.
pub fn build_config(args: &OptimizeArgs) -> Result<OptimizeConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut builder = OptimizeConfigBuilder::new();
    if let Some(n) = args.num_groups.or(file_config.optimize.num_groups) {
        builder = builder.num_groups(n);
    }
    if let Some(depth) = args.depth.or(file_config.optimize.attempted_depth) {
        builder = builder.attempted_depth(depth);
    }
    if let Some(seed) = args.seed.or(file_config.optimize.seed) {
        builder = builder.seed(seed);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}
