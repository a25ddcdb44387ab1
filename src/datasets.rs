//! Built-in point sets a learner can pick from. All are drawn from fixed seeds.

use crate::clusterer::{ClusterError, Point};
use crate::config::AppConfig;
use crate::generator::{generate_with, seeded};
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::f64::consts::PI;

/// Names accepted by [`by_name`], in display order
pub const BUILTIN_NAMES: [&str; 4] = ["exercise", "blobs", "moons", "rings"];

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub name: String,
    pub points: Vec<Point>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// SHA-256 over the coordinates, hex encoded
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for p in &self.points {
            hasher.update(p.x.to_le_bytes());
            hasher.update(p.y.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Every built-in dataset
pub fn builtin(config: &AppConfig) -> Result<Vec<Dataset>, ClusterError> {
    BUILTIN_NAMES
        .iter()
        .filter_map(|name| by_name(name, config).transpose())
        .collect()
}

/// Look up a built-in dataset, `None` for an unknown name
pub fn by_name(name: &str, config: &AppConfig) -> Result<Option<Dataset>, ClusterError> {
    let points: Vec<Point> = match name {
        "exercise" => {
            let shape = &config.exercise;
            generate_with(shape.n, shape.k, shape.seed, &config.generator)?
                .into_iter()
                .map(|p| p.point)
                .collect()
        }
        "blobs" => blobs(),
        "moons" => moons(),
        "rings" => rings(),
        _ => return Ok(None),
    };

    Ok(Some(Dataset::new(name, points)))
}

/// Three compact square blobs, 20 points each
fn blobs() -> Vec<Point> {
    let mut rng = seeded(1);
    let centres = [(2.5, 2.5), (7.5, 3.0), (5.0, 7.5)];

    centres
        .iter()
        .flat_map(|&(cx, cy)| (0..20).map(move |_| (cx, cy)))
        .map(|(cx, cy)| {
            Point::new(
                cx + rng.gen_range(-1.0..=1.0),
                cy + rng.gen_range(-1.0..=1.0),
            )
        })
        .collect()
}

/// Two interleaved half circles, 30 points each
fn moons() -> Vec<Point> {
    let mut rng = seeded(2);
    let mut points = Vec::with_capacity(60);

    for i in 0..30 {
        let t = PI * i as f64 / 29.0;
        points.push(Point::new(
            3.0 + 3.0 * t.cos() + rng.gen_range(-0.15..=0.15),
            4.0 + 3.0 * t.sin() + rng.gen_range(-0.15..=0.15),
        ));
    }

    for i in 0..30 {
        let t = PI * i as f64 / 29.0;
        points.push(Point::new(
            3.0 + 3.0 * (1.0 - t.cos()) + rng.gen_range(-0.15..=0.15),
            4.0 + 3.0 * (0.5 - t.sin()) + rng.gen_range(-0.15..=0.15),
        ));
    }

    points
}

/// Two concentric rings around the centre of the canvas
fn rings() -> Vec<Point> {
    let mut rng = seeded(3);
    let mut points = Vec::with_capacity(70);

    for (radius, count) in [(1.5, 25), (4.0, 45)] {
        for _ in 0..count {
            let angle = rng.gen_range(0.0..2.0 * PI);
            let r = radius + rng.gen_range(-0.2..=0.2);
            points.push(Point::new(5.0 + r * angle.cos(), 5.0 + r * angle.sin()));
        }
    }

    points
}
