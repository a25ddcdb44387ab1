// Public API exports
pub mod clusterer;
pub mod config;
pub mod datasets;
pub mod generator;
pub mod session;
pub mod validator;

// Re-export main types for convenience
pub use clusterer::{
    dbscan, distance, kmeans, kmeans_seeded, ClusterError, DbscanResult, KMeansResult,
    LabeledPoint, Metric, Point, DEFAULT_MAX_ITERS, NOISE,
};

pub use generator::{generate, generate_with, GeneratedPoint, GeneratorConfig, Region};

pub use validator::{validate, Validation, ValidationError};

pub use config::AppConfig;

pub use datasets::Dataset;

pub use session::{CentroidCache, ExerciseSession, RunHistory, RunRecord, SessionError, Workbench};
