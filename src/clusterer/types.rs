use serde::{Deserialize, Serialize};

/// Label reserved for points that belong to no cluster
pub const NOISE: i32 = -1;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `factor` of the way towards `target`
    pub fn lerp(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + factor * (target.x - self.x),
            y: self.y + factor * (target.y - self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A point paired with the cluster a clustering pass put it in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    #[serde(flatten)]
    pub point: Point,
    /// Cluster index, or [`NOISE`]
    pub cluster: i32,
}

impl LabeledPoint {
    pub fn new(point: Point, cluster: i32) -> Self {
        Self { point, cluster }
    }

    pub fn is_noise(&self) -> bool {
        self.cluster == NOISE
    }
}

/// Output of a centroid-based run
#[derive(Debug, Clone, Serialize)]
pub struct KMeansResult {
    pub points: Vec<LabeledPoint>,
    /// Centroids the run started from, reusable to replay it
    pub initial_centroids: Vec<Point>,
    pub centroids: Vec<Point>,
    pub iterations: usize,
    pub converged: bool,
}

/// Output of a density-based run
#[derive(Debug, Clone, Serialize)]
pub struct DbscanResult {
    pub points: Vec<LabeledPoint>,
    pub cluster_count: usize,
    pub noise_count: usize,
}
