use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Cannot seed {k} distinct centroids from {n} points")]
    TooFewPoints { k: usize, n: usize },

    #[error("Unknown metric: {0} (expected l1, l2 or linf)")]
    UnknownMetric(String),
}
