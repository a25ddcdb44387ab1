use crate::clusterer::Point;
use std::collections::HashMap;

/// Starting centroids of the latest k-means run per `(dataset fingerprint, k)`.
///
/// Lets a learner rerun k-means with another metric from the same start.
#[derive(Debug, Default)]
pub struct CentroidCache {
    entries: HashMap<(String, usize), Vec<Point>>,
}

impl CentroidCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fingerprint: &str, k: usize) -> Option<&[Point]> {
        self.entries
            .get(&(fingerprint.to_string(), k))
            .map(|c| c.as_slice())
    }

    pub fn insert(&mut self, fingerprint: impl Into<String>, k: usize, centroids: Vec<Point>) {
        self.entries.insert((fingerprint.into(), k), centroids);
    }

    /// Drop every entry, called whenever the active dataset changes
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
