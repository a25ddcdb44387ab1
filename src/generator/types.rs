use crate::clusterer::{ClusterError, Metric, Point};
use serde::{Deserialize, Serialize};

/// Axis-aligned drawing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Region {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        let finite = [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite());

        if !finite || self.min_x >= self.max_x || self.min_y >= self.max_y {
            return Err(ClusterError::InvalidParameter(format!(
                "region must have positive width and height, got x {}..{} y {}..{}",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }

        Ok(())
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new(0.0, 10.0, 0.0, 10.0)
    }
}

/// Knobs of the synthetic point generator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub region: Region,
    /// Share of the distance to its bootstrap centroid each point travels
    pub pull_factor: f64,
    pub bootstrap_iters: usize,
    pub bootstrap_metric: Metric,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            pull_factor: 0.6,
            bootstrap_iters: 8,
            bootstrap_metric: Metric::Euclidean,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ClusterError> {
        self.region.validate()?;

        if !(0.0..=1.0).contains(&self.pull_factor) {
            return Err(ClusterError::InvalidParameter(format!(
                "pull_factor must lie in [0, 1], got {}",
                self.pull_factor
            )));
        }

        if self.bootstrap_iters == 0 {
            return Err(ClusterError::InvalidParameter(
                "bootstrap_iters must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Exercise point with its hidden ground-truth cluster and the learner's colouring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPoint {
    pub id: usize,
    #[serde(flatten)]
    pub point: Point,
    pub cluster_id: usize,
    #[serde(default)]
    pub assigned_colour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl GeneratedPoint {
    pub fn new(id: usize, point: Point, cluster_id: usize) -> Self {
        Self {
            id,
            point,
            cluster_id,
            assigned_colour: None,
            is_correct: None,
        }
    }

    /// Recolour the point; any earlier verdict no longer applies
    pub fn assign_colour(&mut self, colour: impl Into<String>) {
        self.assigned_colour = Some(colour.into());
        self.is_correct = None;
    }

    pub fn clear_colour(&mut self) {
        self.assigned_colour = None;
        self.is_correct = None;
    }
}
