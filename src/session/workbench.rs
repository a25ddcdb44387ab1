use super::cache::CentroidCache;
use super::error::SessionError;
use super::history::{RunHistory, RunParams, RunRecord};
use crate::clusterer::{dbscan, kmeans, Metric};
use crate::config::AppConfig;
use crate::datasets::{self, Dataset};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Host-side state for the free clustering playground
pub struct Workbench {
    datasets: Vec<Dataset>,
    active: usize,
    cache: CentroidCache,
    history: RunHistory,
    rng: ChaCha8Rng,
    max_iters: usize,
}

impl Workbench {
    /// Load the built-in datasets with the first one active
    pub fn new(config: &AppConfig) -> Result<Self, SessionError> {
        let datasets = datasets::builtin(config)?;
        let seed = config.kmeans.seed.unwrap_or_else(rand::random);

        Ok(Self {
            datasets,
            active: 0,
            cache: CentroidCache::new(),
            history: RunHistory::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_iters: config.kmeans.max_iters,
        })
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn active_dataset(&self) -> Option<&Dataset> {
        self.datasets.get(self.active)
    }

    /// Switch datasets; cached centroids belong to the old one and are dropped
    pub fn select_dataset(&mut self, name: &str) -> Result<(), SessionError> {
        let index = self
            .datasets
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| SessionError::UnknownDataset(name.to_string()))?;

        if index != self.active {
            self.active = index;
            self.cache.invalidate();
            tracing::debug!(dataset = name, "switched dataset");
        }

        Ok(())
    }

    /// Run k-means on the active dataset.
    ///
    /// With `reuse_seed` the starting centroids of the previous run with the same
    /// `k` are reused when available.
    pub fn run_kmeans(
        &mut self,
        k: usize,
        metric: Metric,
        reuse_seed: bool,
    ) -> Result<&RunRecord, SessionError> {
        let dataset = self
            .datasets
            .get(self.active)
            .ok_or_else(|| SessionError::UnknownDataset("<none>".to_string()))?;
        let fingerprint = dataset.fingerprint();

        let cached = if reuse_seed {
            self.cache.get(&fingerprint, k)
        } else {
            None
        };
        if cached.is_some() {
            tracing::debug!(k, "reusing cached centroids");
        }

        let result = kmeans(
            &dataset.points,
            k,
            metric,
            cached,
            self.max_iters,
            &mut self.rng,
        )?;

        let record = RunRecord::new(
            dataset.name.clone(),
            RunParams::KMeans {
                k,
                metric,
                iterations: result.iterations,
                converged: result.converged,
            },
            result.points,
        );

        if k > 0 {
            self.cache.insert(fingerprint, k, result.initial_centroids);
        }

        Ok(self.history.push(record))
    }

    pub fn run_dbscan(
        &mut self,
        eps: f64,
        min_pts: usize,
        metric: Metric,
    ) -> Result<&RunRecord, SessionError> {
        let dataset = self
            .datasets
            .get(self.active)
            .ok_or_else(|| SessionError::UnknownDataset("<none>".to_string()))?;
        let result = dbscan(&dataset.points, eps, min_pts, metric)?;

        let record = RunRecord::new(
            dataset.name.clone(),
            RunParams::Dbscan {
                eps,
                min_pts,
                metric,
                clusters: result.cluster_count,
                noise: result.noise_count,
            },
            result.points,
        );

        Ok(self.history.push(record))
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    pub fn toggle_run(&mut self, id: Uuid) -> Result<bool, SessionError> {
        self.history
            .toggle_visibility(id)
            .ok_or(SessionError::UnknownRun(id))
    }

    pub fn remove_run(&mut self, id: Uuid) -> Result<RunRecord, SessionError> {
        self.history.remove(id).ok_or(SessionError::UnknownRun(id))
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn cache(&self) -> &CentroidCache {
        &self.cache
    }
}
