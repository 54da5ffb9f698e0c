use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::ruleset::RuleSet;
use crate::search::eval::{EvalWeights, MAX_EVAL};
use crate::search::resources::SearchLimits;

/// Engine configuration.
///
/// Every section falls back to its default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "rules": { "capture_rule": "longest_chain" }, "limits": { "max_depth": 8 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rules: RuleSet,
    pub weights: EvalWeights,
    pub limits: SearchLimits,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

impl EngineConfig {
    pub fn new(rules: RuleSet, weights: EvalWeights, limits: SearchLimits) -> Self {
        Self {
            rules,
            weights,
            limits,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_depth == 0 {
            return Err(ConfigError::Invalid {
                reason: "limits.max_depth must be >= 1".to_string(),
            });
        }
        if self.limits.max_nodes == 0 {
            return Err(ConfigError::Invalid {
                reason: "limits.max_nodes must be >= 1".to_string(),
            });
        }
        if self.weights.man <= 0 || self.weights.king <= 0 {
            return Err(ConfigError::Invalid {
                reason: "piece weights must be positive".to_string(),
            });
        }
        let worst = self.weights.worst_case();
        if worst >= i64::from(MAX_EVAL) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "weights allow heuristic scores up to {worst}, must stay below {MAX_EVAL}"
                ),
            });
        }
        Ok(())
    }
}
