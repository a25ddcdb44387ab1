use super::error::ClusterError;
use super::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance norm used by both clusterers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// L1
    Manhattan,
    /// L2
    #[default]
    Euclidean,
    /// L∞
    Chebyshev,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Manhattan, Metric::Euclidean, Metric::Chebyshev];

    pub fn distance(self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();

        match self {
            Metric::Manhattan => dx + dy,
            Metric::Euclidean => dx.hypot(dy),
            Metric::Chebyshev => dx.max(dy),
        }
    }

    /// Short label shown to learners
    pub fn label(self) -> &'static str {
        match self {
            Metric::Manhattan => "L1",
            Metric::Euclidean => "L2",
            Metric::Chebyshev => "L∞",
        }
    }
}

pub fn distance(a: Point, b: Point, metric: Metric) -> f64 {
    metric.distance(a, b)
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l1" | "manhattan" => Ok(Metric::Manhattan),
            "l2" | "euclidean" => Ok(Metric::Euclidean),
            "linf" | "l∞" | "chebyshev" => Ok(Metric::Chebyshev),
            other => Err(ClusterError::UnknownMetric(other.to_string())),
        }
    }
}
