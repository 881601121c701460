use serde::Deserialize;
use std::fs;

use crate::error::{Error, Result};

/// Training hyperparameters, loadable from a TOML or JSON file.
///
/// `Default` yields the constants the shipped driver trains with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Feature dimensionality of one flattened image.
    pub n_input: usize,
    /// Hidden layer width.
    pub n_hidden: usize,
    /// Gaussian corruption scale.
    pub scale: f32,
    /// Adam learning rate.
    pub learning_rate: f32,
    /// Rows per training block.
    pub batch_size: usize,
    /// Number of training epochs.
    pub epochs: usize,
    /// Print the epoch cost every `display_step` epochs.
    pub display_step: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            n_input: 784,
            n_hidden: 200,
            scale: 0.01,
            learning_rate: 0.001,
            batch_size: 128,
            epochs: 20,
            display_step: 1,
        }
    }
}

impl TrainConfig {
    /// Load configuration from the given path. Supports TOML or JSON based
    /// on the file extension. Missing fields fall back to their defaults.
    pub fn from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        if path.ends_with(".json") {
            serde_json::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_training_constants() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.n_input, 784);
        assert_eq!(cfg.n_hidden, 200);
        assert_eq!(cfg.scale, 0.01);
        assert_eq!(cfg.learning_rate, 0.001);
        assert_eq!(cfg.batch_size, 128);
        assert_eq!(cfg.epochs, 20);
        assert_eq!(cfg.display_step, 1);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let path = std::env::temp_dir().join("noisecoder_cfg_test.toml");
        std::fs::write(&path, "epochs = 3\nbatch_size = 16\n").unwrap();
        let cfg = TrainConfig::from_path(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.epochs, 3);
        assert_eq!(cfg.batch_size, 16);
        assert_eq!(cfg.n_hidden, 200);
        let _ = std::fs::remove_file(&path);
    }
}
