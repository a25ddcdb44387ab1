mod centroid;
mod dbscan;
mod error;
mod kmeans;
mod metric;
mod types;


pub use centroid::compute_centroid;
pub use dbscan::dbscan;
pub use error::ClusterError;
pub use kmeans::{assign_to_nearest, kmeans, kmeans_seeded, DEFAULT_MAX_ITERS};
pub use metric::{distance, Metric};
pub use types::{DbscanResult, KMeansResult, LabeledPoint, Point, NOISE};
