// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Closest Pair
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closest pair of planar points.
//!
//! The point set is sorted by x and by y once, then the recursion splits
//! the x-order at its midpoint and keeps both orders consistent in each
//! half. The combine step scans the vertical strip within delta of the
//! dividing line; in y-order, any pair closer than delta sits within the
//! next 7 strip neighbors (the standard packing bound), so the scan is
//! linear.

use divcon_types::error::{DivconError, DivconResult};
use divcon_types::point::Point;

/// Find a pair of points at minimum Euclidean distance.
///
/// `leaf_size` is the sub-problem size at or below which the recursion
/// switches to the exhaustive scan; it must be at least 2. Fewer than two
/// points is an explicit no-pair outcome, not an error.
pub fn closest_pair(points: &[Point], leaf_size: usize) -> DivconResult<Option<(Point, Point)>> {
    if leaf_size < 2 {
        return Err(DivconError::InvalidInput(format!(
            "leaf_size must be >= 2, got {leaf_size}"
        )));
    }
    if points.len() < 2 {
        return Ok(None);
    }
    let mut by_x = points.to_vec();
    by_x.sort_by(|p, q| p.x.total_cmp(&q.x));
    let mut by_y = points.to_vec();
    by_y.sort_by(|p, q| p.y.total_cmp(&q.y));
    Ok(closest_rec(&by_x, &by_y, leaf_size))
}

/// Exhaustive O(n²) scan, the verification baseline.
pub fn closest_pair_naive(points: &[Point]) -> Option<(Point, Point)> {
    let mut best = None;
    let mut min_dist = f64::INFINITY;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let dist = points[i].distance(&points[j]);
            if dist < min_dist {
                best = Some((points[i], points[j]));
                min_dist = dist;
            }
        }
    }
    best
}

fn closest_rec(p_x: &[Point], p_y: &[Point], leaf_size: usize) -> Option<(Point, Point)> {
    if p_x.len() <= leaf_size {
        return closest_pair_naive(p_x);
    }
    let mid = p_x.len() / 2;
    let (l_x, r_x) = p_x.split_at(mid);
    // Points with x strictly below the right half's first x go left, so
    // each half sees a y-order consistent with the global sort.
    let pivot = r_x[0].x;
    let (l_y, r_y): (Vec<Point>, Vec<Point>) = p_y.iter().copied().partition(|p| p.x < pivot);

    let left = closest_rec(l_x, &l_y, leaf_size);
    let right = closest_rec(r_x, &r_y, leaf_size);
    // A side with a single point yields no pair; the other side alone then
    // sets delta.
    let best = nearer(left, right);
    let delta = match &best {
        Some((p, q)) => p.distance(q),
        None => return None,
    };
    nearer(best, closest_split_pair(p_x, p_y, delta))
}

/// Best pair straddling the dividing line, if any beats `delta`.
fn closest_split_pair(p_x: &[Point], p_y: &[Point], delta: f64) -> Option<(Point, Point)> {
    let pivot = p_x[p_x.len() / 2].x;
    let strip: Vec<Point> = p_y
        .iter()
        .copied()
        .filter(|p| (p.x - pivot).abs() <= delta)
        .collect();
    let mut best = None;
    let mut min_dist = delta;
    for i in 0..strip.len() {
        for j in i + 1..(i + 8).min(strip.len()) {
            let dist = strip[i].distance(&strip[j]);
            if dist < min_dist {
                best = Some((strip[i], strip[j]));
                min_dist = dist;
            }
        }
    }
    best
}

fn nearer(a: Option<(Point, Point)>, b: Option<(Point, Point)>) -> Option<(Point, Point)> {
    match (a, b) {
        (Some(p), Some(q)) => {
            if p.0.distance(&p.1) <= q.0.distance(&q.1) {
                Some(p)
            } else {
                Some(q)
            }
        }
        (Some(p), None) => Some(p),
        (None, q) => q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_distance(pair: Option<(Point, Point)>) -> f64 {
        let (p, q) = pair.expect("a pair exists");
        p.distance(&q)
    }

    #[test]
    fn test_four_point_rectangle() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        ];
        let pair = closest_pair(&points, 2).expect("valid leaf size");
        assert_eq!(pair_distance(pair), 3.0, "short rectangle side wins");
    }

    #[test]
    fn test_leaf_size_below_two_is_rejected() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(closest_pair(&points, 1).is_err());
        assert!(closest_pair(&points, 0).is_err());
    }

    #[test]
    fn test_fewer_than_two_points_is_no_pair() {
        assert_eq!(closest_pair(&[], 2).expect("valid leaf size"), None);
        assert_eq!(
            closest_pair(&[Point::new(1.0, 1.0)], 2).expect("valid leaf size"),
            None
        );
    }

    #[test]
    fn test_two_points() {
        let points = [Point::new(-1.0, 0.0), Point::new(2.0, 4.0)];
        let pair = closest_pair(&points, 2).expect("valid leaf size");
        assert_eq!(pair_distance(pair), 5.0);
    }

    #[test]
    fn test_split_pair_straddles_the_divide() {
        // The two closest points end up on opposite sides of the x-median,
        // so only the strip scan can find them.
        let points = [
            Point::new(-10.0, 0.0),
            Point::new(-9.0, 5.0),
            Point::new(-0.1, 0.0),
            Point::new(0.1, 0.0),
            Point::new(9.0, 5.0),
            Point::new(10.0, 0.0),
        ];
        let pair = closest_pair(&points, 2).expect("valid leaf size");
        let dist = pair_distance(pair);
        assert!((dist - 0.2).abs() < 1e-12, "expected 0.2, got {dist}");
    }

    #[test]
    fn test_matches_naive_on_grid_with_one_tight_pair() {
        let mut points = Vec::new();
        for i in 0..6 {
            for j in 0..6 {
                points.push(Point::new(i as f64 * 2.0, j as f64 * 2.0));
            }
        }
        points.push(Point::new(7.3, 7.25));
        let pair = closest_pair(&points, 3).expect("valid leaf size");
        let naive = closest_pair_naive(&points);
        assert_eq!(pair_distance(pair), pair_distance(naive));
    }

    #[test]
    fn test_duplicate_points_give_zero_distance() {
        let points = [
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(1.0, 1.0),
            Point::new(-3.0, 2.0),
        ];
        let pair = closest_pair(&points, 2).expect("valid leaf size");
        assert_eq!(pair_distance(pair), 0.0);
    }
}
