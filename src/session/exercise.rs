use crate::clusterer::ClusterError;
use crate::config::AppConfig;
use crate::generator::{generate_with, GeneratedPoint};
use crate::validator::{self, ValidationError};

/// Colour-the-clusters exercise.
///
/// Geometry is generated once; resetting only wipes the learner's colours.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    points: Vec<GeneratedPoint>,
}

impl ExerciseSession {
    pub fn new(config: &AppConfig) -> Result<Self, ClusterError> {
        let shape = &config.exercise;
        let points = generate_with(shape.n, shape.k, shape.seed, &config.generator)?;
        Ok(Self::from_points(points))
    }

    pub fn from_points(points: Vec<GeneratedPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeneratedPoint] {
        &self.points
    }

    pub fn assign_colour(
        &mut self,
        id: usize,
        colour: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.point_mut(id)?.assign_colour(colour);
        Ok(())
    }

    pub fn clear_colour(&mut self, id: usize) -> Result<(), ValidationError> {
        self.point_mut(id)?.clear_colour();
        Ok(())
    }

    /// Forget every colour and verdict, keeping the points where they are
    pub fn reset(&mut self) {
        for p in &mut self.points {
            p.clear_colour();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.points.iter().all(|p| p.assigned_colour.is_some())
    }

    /// Score the colouring in place and return the number of correct points
    pub fn validate(&mut self) -> Result<usize, ValidationError> {
        let result = validator::validate(&self.points)?;
        self.points = result.points;
        Ok(result.correct_count)
    }

    /// Whether the latest verdict marks every point correct
    pub fn is_solved(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(|p| p.is_correct == Some(true))
    }

    fn point_mut(&mut self, id: usize) -> Result<&mut GeneratedPoint, ValidationError> {
        self.points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ValidationError::UnknownPoint(id))
    }
}
