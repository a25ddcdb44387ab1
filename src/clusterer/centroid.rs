use super::types::Point;

/// Arithmetic mean of a set of points, `None` when the set is empty
pub fn compute_centroid<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Point> {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut n = 0usize;

    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        n += 1;
    }

    if n == 0 {
        return None;
    }

    let n = n as f64;
    Some(Point::new(sum_x / n, sum_y / n))
}
