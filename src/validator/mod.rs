#[cfg(test)]
mod tests;

use crate::generator::GeneratedPoint;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Assignment incomplete: {missing} point(s) still need a colour")]
    Incomplete { missing: usize },

    #[error("No point with id {0}")]
    UnknownPoint(usize),
}

/// Scored copy of a colouring
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    pub points: Vec<GeneratedPoint>,
    pub correct_count: usize,
}

impl Validation {
    pub fn is_success(&self) -> bool {
        self.correct_count == self.points.len()
    }
}

/// Score a complete colouring against the hidden clusters.
///
/// Refuses to score while any point is uncoloured.
pub fn validate(points: &[GeneratedPoint]) -> Result<Validation, ValidationError> {
    let missing = points
        .iter()
        .filter(|p| p.assigned_colour.is_none())
        .count();

    if missing > 0 {
        return Err(ValidationError::Incomplete { missing });
    }

    let scored = score(points);
    let correct_count = scored.iter().filter(|p| p.is_correct == Some(true)).count();

    tracing::info!(
        correct = correct_count,
        total = scored.len(),
        "validated colouring"
    );

    Ok(Validation {
        points: scored,
        correct_count,
    })
}

/// Mark every point correct iff its cluster and its colour map to each other one to one.
///
/// An uncoloured point is always incorrect.
pub fn score(points: &[GeneratedPoint]) -> Vec<GeneratedPoint> {
    let mut colours_of: HashMap<usize, HashSet<Option<&str>>> = HashMap::new();
    let mut clusters_of: HashMap<&str, HashSet<usize>> = HashMap::new();

    for p in points {
        let colour = p.assigned_colour.as_deref();
        colours_of.entry(p.cluster_id).or_default().insert(colour);
        if let Some(colour) = colour {
            clusters_of.entry(colour).or_default().insert(p.cluster_id);
        }
    }

    points
        .iter()
        .map(|p| {
            let correct = match p.assigned_colour.as_deref() {
                None => false,
                Some(colour) => {
                    let cluster_uniform = colours_of
                        .get(&p.cluster_id)
                        .is_some_and(|set| set.len() == 1);
                    let colour_exclusive = clusters_of
                        .get(colour)
                        .is_some_and(|set| set.len() == 1);
                    cluster_uniform && colour_exclusive
                }
            };

            let mut scored = p.clone();
            scored.is_correct = Some(correct);
            scored
        })
        .collect()
}
