use crate::clusterer::{ClusterError, DEFAULT_MAX_ITERS};
use crate::generator::{GeneratorConfig, EXERCISE_CLUSTERS, EXERCISE_POINTS, EXERCISE_SEED};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shape of the colour-the-clusters exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub n: usize,
    pub k: usize,
    pub seed: u64,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            n: EXERCISE_POINTS,
            k: EXERCISE_CLUSTERS,
            seed: EXERCISE_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    pub max_iters: usize,
    /// Seed for centroid sampling; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub exercise: ExerciseConfig,
    pub generator: GeneratorConfig,
    pub kmeans: KMeansConfig,
}

impl AppConfig {
    /// Read a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        self.generator.validate()?;

        if self.exercise.k == 0 || self.exercise.k > self.exercise.n {
            return Err(ClusterError::InvalidParameter(format!(
                "exercise needs 1 <= k <= n, got k = {} and n = {}",
                self.exercise.k, self.exercise.n
            )));
        }

        if self.kmeans.max_iters == 0 {
            return Err(ClusterError::InvalidParameter(
                "kmeans.max_iters must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clusterer::Metric;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.exercise.n, 10);
        assert_eq!(config.exercise.k, 3);
        assert_eq!(config.exercise.seed, 20250423);
        assert_eq!(config.generator.pull_factor, 0.6);
        assert_eq!(config.generator.bootstrap_iters, 8);
        assert_eq!(config.kmeans.max_iters, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "exercise": { "seed": 7 }, "generator": { "bootstrap_metric": "chebyshev" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.exercise.seed, 7);
        assert_eq!(config.exercise.n, 10);
        assert_eq!(config.generator.bootstrap_metric, Metric::Chebyshev);
        assert_eq!(config.generator.pull_factor, 0.6);
    }

    #[test]
    fn test_validate_rejects_impossible_exercise() {
        let mut config = AppConfig::default();
        config.exercise.k = 11;
        assert!(config.validate().is_err());

        config.exercise.k = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("clusterlab-config-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{ "kmeans": { "max_iters": 12, "seed": 99 } }"#)
            .unwrap();

        let config = AppConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.kmeans.max_iters, 12);
        assert_eq!(config.kmeans.seed, Some(99));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = AppConfig::load(Path::new("/nonexistent/clusterlab.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None).unwrap();
        assert_eq!(config.exercise, ExerciseConfig::default());
    }
}
