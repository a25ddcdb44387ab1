//! State the host application keeps between calls into the clustering core.

mod cache;
mod error;
mod exercise;
mod history;
mod workbench;

#[cfg(test)]
mod tests;

pub use cache::CentroidCache;
pub use error::SessionError;
pub use exercise::ExerciseSession;
pub use history::{RunHistory, RunParams, RunRecord};
pub use workbench::Workbench;
