// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Input Generators
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pseudo-random input generation for the demo runs.
//!
//! Every generator takes the RNG as an explicit parameter; the caller
//! seeds it once (`StdRng::seed_from_u64`) so runs are reproducible.

use divcon_types::point::Point;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

/// `n` points with standard-normal coordinates.
pub fn random_points(rng: &mut impl Rng, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.sample::<f64, _>(StandardNormal),
                rng.sample::<f64, _>(StandardNormal),
            )
        })
        .collect()
}

/// `n`×`n` matrix with uniform integer entries in [-max_value, max_value].
pub fn random_matrix(rng: &mut impl Rng, n: usize, max_value: i64) -> Array2<i64> {
    Array2::from_shape_fn((n, n), |_| rng.gen_range(-max_value..=max_value))
}

/// `n` uniform integers in [lo, hi], repeats allowed.
pub fn random_integers(rng: &mut impl Rng, n: usize, lo: i64, hi: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(lo..=hi)).collect()
}

/// Strictly increasing distinct integers of length `n`.
///
/// With probability 1/2 a true fixed point is embedded: a position `p` gets
/// the value `p`, everything before it draws distinct values below `p`,
/// everything after it distinct values above. The other half of the time
/// the array is a plain distinct sorted sample, which may or may not
/// contain a fixed point.
pub fn fixed_point_array(rng: &mut impl Rng, n: usize) -> Vec<i64> {
    assert!(n > 0, "array length must be >= 1");
    let n_i = n as i64;
    if rng.gen_bool(0.5) {
        let p = rng.gen_range(0..n) as i64;
        let mut below: Vec<i64> = (-2 * n_i..p).collect();
        below.shuffle(rng);
        below.truncate(p as usize);
        let mut above: Vec<i64> = (p + 1..2 * n_i).collect();
        above.shuffle(rng);
        above.truncate(n - p as usize - 1);

        let mut array = below;
        array.push(p);
        array.extend(above);
        array.sort_unstable();
        array
    } else {
        let mut pool: Vec<i64> = (-n_i / 4..=4 * n_i).collect();
        pool.shuffle(rng);
        pool.truncate(n);
        pool.sort_unstable();
        pool
    }
}

/// Unimodal array of length `n`: 0..peak ascending, then the tail of the
/// range descending. The peak position is uniform in 0..n.
pub fn unimodal_array(rng: &mut impl Rng, n: usize) -> Vec<i64> {
    assert!(n > 0, "array length must be >= 1");
    let peak = rng.gen_range(0..n) as i64;
    let mut array: Vec<i64> = (0..peak).collect();
    array.extend((peak..n as i64).rev());
    array
}
