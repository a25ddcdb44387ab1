mod rng;
mod types;


pub use rng::{seeded, EXERCISE_SEED};
pub use types::{GeneratedPoint, GeneratorConfig, Region};

use crate::clusterer::{kmeans, ClusterError, Point};
use rand::Rng;

/// Point count of the lesson exercise
pub const EXERCISE_POINTS: usize = 10;

/// Cluster count of the lesson exercise
pub const EXERCISE_CLUSTERS: usize = 3;

/// [`generate_with`] using the default region and pull factor
pub fn generate(n: usize, k: usize, seed: u64) -> Result<Vec<GeneratedPoint>, ClusterError> {
    generate_with(n, k, seed, &GeneratorConfig::default())
}

/// Draw `n` points with hidden ground truth for `k` clusters.
///
/// Raw points are drawn uniformly over the region, grouped by a short k-means
/// pass sharing the same random stream, then pulled towards their group centre
/// so the clusters read clearly on screen. The bootstrap group becomes the
/// point's `cluster_id`.
pub fn generate_with(
    n: usize,
    k: usize,
    seed: u64,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedPoint>, ClusterError> {
    config.validate()?;

    if k == 0 {
        return Err(ClusterError::InvalidParameter(
            "cannot generate points for zero clusters".to_string(),
        ));
    }

    let region = config.region;
    let mut rng = seeded(seed);

    // 1. Uniform raw points
    let raw: Vec<Point> = (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(region.min_x..=region.max_x),
                rng.gen_range(region.min_y..=region.max_y),
            )
        })
        .collect();

    // 2. Bootstrap grouping
    let bootstrap = kmeans(
        &raw,
        k,
        config.bootstrap_metric,
        None,
        config.bootstrap_iters,
        &mut rng,
    )?;

    // 3. Tighten each group around its centroid
    let points: Vec<GeneratedPoint> = bootstrap
        .points
        .iter()
        .enumerate()
        .map(|(id, lp)| {
            let cluster_id = lp.cluster as usize;
            let pulled = match bootstrap.centroids.get(cluster_id) {
                Some(&centroid) => lp.point.lerp(centroid, config.pull_factor),
                None => lp.point,
            };
            GeneratedPoint::new(id, region.clamp(pulled), cluster_id)
        })
        .collect();

    tracing::info!(
        n,
        k,
        seed,
        bootstrap_iterations = bootstrap.iterations,
        "generated exercise points"
    );

    Ok(points)
}
