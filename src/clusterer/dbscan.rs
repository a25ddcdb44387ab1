use crate::clusterer::{
    error::ClusterError,
    metric::Metric,
    types::{DbscanResult, LabeledPoint, Point, NOISE},
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Unvisited,
    Noise,
    Cluster(usize),
}

/// Density-based clustering (DBSCAN).
///
/// Points are scanned in input order and cluster ids are handed out in the order
/// core points are discovered, so the result is fully determined by the input.
/// Noise found early can still be claimed later as a border point.
pub fn dbscan(
    points: &[Point],
    eps: f64,
    min_pts: usize,
    metric: Metric,
) -> Result<DbscanResult, ClusterError> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(ClusterError::InvalidParameter(format!(
            "eps must be a positive finite number, got {}",
            eps
        )));
    }

    if min_pts < 1 {
        return Err(ClusterError::InvalidParameter(
            "min_pts must be at least 1".to_string(),
        ));
    }

    let n = points.len();
    let mut states = vec![State::Unvisited; n];
    let mut queued = vec![false; n];
    let mut next_cluster = 0usize;

    for i in 0..n {
        if states[i] != State::Unvisited {
            continue;
        }

        let neighbors = region_query(points, i, eps, metric);
        if neighbors.len() < min_pts {
            states[i] = State::Noise;
            continue;
        }

        let cluster = next_cluster;
        next_cluster += 1;
        states[i] = State::Cluster(cluster);

        let mut queue: VecDeque<usize> = VecDeque::new();
        for &j in &neighbors {
            if j != i && !queued[j] {
                queued[j] = true;
                queue.push_back(j);
            }
        }

        while let Some(j) = queue.pop_front() {
            match states[j] {
                State::Noise => {
                    // border point, never expanded
                    states[j] = State::Cluster(cluster);
                    continue;
                }
                State::Cluster(_) => continue,
                State::Unvisited => {}
            }

            states[j] = State::Cluster(cluster);

            let expansion = region_query(points, j, eps, metric);
            if expansion.len() >= min_pts {
                for &m in &expansion {
                    // noise reached from a core point becomes a border point
                    let claimable = matches!(states[m], State::Unvisited | State::Noise);
                    if claimable && !queued[m] {
                        queued[m] = true;
                        queue.push_back(m);
                    }
                }
            }
        }
    }

    let labeled: Vec<LabeledPoint> = points
        .iter()
        .zip(&states)
        .map(|(&p, state)| match state {
            State::Cluster(c) => LabeledPoint::new(p, *c as i32),
            _ => LabeledPoint::new(p, NOISE),
        })
        .collect();

    let noise_count = labeled.iter().filter(|p| p.is_noise()).count();

    tracing::debug!(
        eps,
        min_pts,
        %metric,
        clusters = next_cluster,
        noise = noise_count,
        "dbscan finished"
    );

    Ok(DbscanResult {
        points: labeled,
        cluster_count: next_cluster,
        noise_count,
    })
}

/// Indices of every point within `eps` of `points[center]`, itself included, in input order
fn region_query(points: &[Point], center: usize, eps: f64, metric: Metric) -> Vec<usize> {
    let origin = points[center];

    points
        .iter()
        .enumerate()
        .filter(|&(_, &p)| metric.distance(origin, p) <= eps)
        .map(|(i, _)| i)
        .collect()
}
