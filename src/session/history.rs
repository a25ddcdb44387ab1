use crate::clusterer::{LabeledPoint, Metric};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters a saved run was made with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum RunParams {
    KMeans {
        k: usize,
        metric: Metric,
        iterations: usize,
        converged: bool,
    },
    Dbscan {
        eps: f64,
        min_pts: usize,
        metric: Metric,
        clusters: usize,
        noise: usize,
    },
}

/// One clustering run kept for side-by-side display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub dataset: String,
    pub params: RunParams,
    pub points: Vec<LabeledPoint>,
    pub visible: bool,
}

impl RunRecord {
    pub fn new(dataset: impl Into<String>, params: RunParams, points: Vec<LabeledPoint>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            dataset: dataset.into(),
            params,
            points,
            visible: true,
        }
    }
}

/// Saved runs, oldest first
#[derive(Debug, Default)]
pub struct RunHistory {
    runs: Vec<RunRecord>,
}

impl RunHistory {
    pub fn push(&mut self, record: RunRecord) -> &RunRecord {
        self.runs.push(record);
        &self.runs[self.runs.len() - 1]
    }

    pub fn get(&self, id: Uuid) -> Option<&RunRecord> {
        self.runs.iter().find(|r| r.id == id)
    }

    /// Flip a run's visibility, returning the new state
    pub fn toggle_visibility(&mut self, id: Uuid) -> Option<bool> {
        let run = self.runs.iter_mut().find(|r| r.id == id)?;
        run.visible = !run.visible;
        Some(run.visible)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<RunRecord> {
        let pos = self.runs.iter().position(|r| r.id == id)?;
        Some(self.runs.remove(pos))
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn visible(&self) -> impl Iterator<Item = &RunRecord> {
        self.runs.iter().filter(|r| r.visible)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunRecord> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
