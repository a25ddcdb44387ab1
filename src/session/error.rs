use crate::clusterer::ClusterError;
use crate::validator::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("No saved run with id {0}")]
    UnknownRun(Uuid),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
