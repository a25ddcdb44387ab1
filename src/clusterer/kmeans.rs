use crate::clusterer::{
    centroid::compute_centroid,
    error::ClusterError,
    metric::Metric,
    types::{KMeansResult, LabeledPoint, Point},
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Round limit used when the caller has no preference
pub const DEFAULT_MAX_ITERS: usize = 50;

/// Lloyd's algorithm over 2D points.
///
/// `initial_centroids` is only honoured when it holds exactly `k` points, otherwise
/// `k` distinct input points are drawn from `rng`. With `k == 0` every point is
/// labeled `0` and no centroids are produced.
pub fn kmeans<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    metric: Metric,
    initial_centroids: Option<&[Point]>,
    max_iters: usize,
    rng: &mut R,
) -> Result<KMeansResult, ClusterError> {
    if k == 0 {
        return Ok(KMeansResult {
            points: points.iter().map(|&p| LabeledPoint::new(p, 0)).collect(),
            initial_centroids: vec![],
            centroids: vec![],
            iterations: 0,
            converged: true,
        });
    }

    if max_iters == 0 {
        return Err(ClusterError::InvalidParameter(
            "max_iters must be at least 1".to_string(),
        ));
    }

    // 1. Starting centroids
    let mut centroids = match initial_centroids {
        Some(given) if given.len() == k => given.to_vec(),
        Some(given) => {
            tracing::warn!(
                expected = k,
                got = given.len(),
                "ignoring initial centroids of the wrong length"
            );
            seed_centroids(points, k, rng)?
        }
        None => seed_centroids(points, k, rng)?,
    };
    let initial = centroids.clone();

    let mut assignments: Vec<Option<usize>> = vec![None; points.len()];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iters {
        iterations += 1;

        // 2. Assign each point to its nearest centroid
        let mut changed = false;
        for (slot, &p) in assignments.iter_mut().zip(points) {
            let best = nearest_centroid(p, &centroids, metric);
            if *slot != Some(best) {
                changed = true;
                *slot = Some(best);
            }
        }

        if !changed {
            converged = true;
            break;
        }

        // 3. Recompute centroids, empty ones stay put
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members = points
                .iter()
                .zip(&assignments)
                .filter(|&(_, a)| *a == Some(c))
                .map(|(p, _)| p);

            if let Some(mean) = compute_centroid(members) {
                *centroid = mean;
            }
        }
    }

    tracing::debug!(k, %metric, iterations, converged, "k-means finished");

    let labeled = points
        .iter()
        .zip(&assignments)
        .map(|(&p, a)| LabeledPoint::new(p, a.unwrap_or(0) as i32))
        .collect();

    Ok(KMeansResult {
        points: labeled,
        initial_centroids: initial,
        centroids,
        iterations,
        converged,
    })
}

/// [`kmeans`] driven by a ChaCha stream seeded from `seed`
pub fn kmeans_seeded(
    points: &[Point],
    k: usize,
    metric: Metric,
    initial_centroids: Option<&[Point]>,
    max_iters: usize,
    seed: u64,
) -> Result<KMeansResult, ClusterError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    kmeans(points, k, metric, initial_centroids, max_iters, &mut rng)
}

/// Label every point with the index of its nearest centroid
pub fn assign_to_nearest(points: &[Point], centroids: &[Point], metric: Metric) -> Vec<LabeledPoint> {
    points
        .iter()
        .map(|&p| LabeledPoint::new(p, nearest_centroid(p, centroids, metric) as i32))
        .collect()
}

/// Index of the closest centroid; the lowest index wins ties
fn nearest_centroid(p: Point, centroids: &[Point], metric: Metric) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;

    for (c, &center) in centroids.iter().enumerate() {
        let d = metric.distance(p, center);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }

    best
}

/// Pick `k` distinct input points with a partial Fisher-Yates shuffle
fn seed_centroids<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Point>, ClusterError> {
    if k > points.len() {
        return Err(ClusterError::TooFewPoints { k, n: points.len() });
    }

    let mut indices: Vec<usize> = (0..points.len()).collect();
    let (chosen, _) = indices.partial_shuffle(rng, k);

    Ok(chosen.iter().map(|&i| points[i]).collect())
}
