// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Strassen
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Strassen matrix multiplication.
//!
//! Seven quadrant products per level instead of eight, giving
//! O(n^log2(7)) ≈ O(n^2.807) against the O(n³) triple loop. Quadrants are
//! `ArrayView2` slices, so splitting copies nothing; only the p-term
//! operand sums allocate.
//!
//! Integer entries keep the cross-check against the naive product exact.

use divcon_types::error::{DivconError, DivconResult};
use ndarray::{s, Array2, ArrayView2};

/// Multiply two square power-of-two matrices with Strassen recursion.
///
/// `leaf_size` is the dimension at or below which a block is multiplied
/// with the naive triple loop; it must be at least 1. Operands that are
/// not square, not equally sized, or not power-of-two sized are rejected
/// before any recursion — there is no padding or hybrid fallback.
pub fn strassen_multiply(
    x: &Array2<i64>,
    y: &Array2<i64>,
    leaf_size: usize,
) -> DivconResult<Array2<i64>> {
    if leaf_size < 1 {
        return Err(DivconError::InvalidInput(
            "leaf_size must be >= 1".to_string(),
        ));
    }
    let n = x.nrows();
    if x.ncols() != n || y.nrows() != n || y.ncols() != n {
        return Err(DivconError::InvalidInput(format!(
            "Strassen operands must be square and equally sized, got {}x{} and {}x{}",
            x.nrows(),
            x.ncols(),
            y.nrows(),
            y.ncols()
        )));
    }
    if !n.is_power_of_two() {
        return Err(DivconError::InvalidInput(format!(
            "Strassen operand size must be a power of two, got {n}"
        )));
    }
    Ok(strassen_rec(x.view(), y.view(), leaf_size))
}

/// Naive O(n³) triple-loop product for any compatible shapes, the
/// verification baseline.
pub fn naive_multiply(x: &Array2<i64>, y: &Array2<i64>) -> DivconResult<Array2<i64>> {
    if x.ncols() != y.nrows() {
        return Err(DivconError::ShapeMismatch {
            left_rows: x.nrows(),
            left_cols: x.ncols(),
            right_rows: y.nrows(),
            right_cols: y.ncols(),
        });
    }
    Ok(multiply_block(x.view(), y.view()))
}

fn strassen_rec(x: ArrayView2<i64>, y: ArrayView2<i64>, leaf_size: usize) -> Array2<i64> {
    let n = x.nrows();
    if n <= leaf_size {
        return multiply_block(x, y);
    }
    let half = n / 2;
    let a = x.slice(s![..half, ..half]);
    let b = x.slice(s![..half, half..]);
    let c = x.slice(s![half.., ..half]);
    let d = x.slice(s![half.., half..]);
    let e = y.slice(s![..half, ..half]);
    let f = y.slice(s![..half, half..]);
    let g = y.slice(s![half.., ..half]);
    let h = y.slice(s![half.., half..]);

    let fh = &f - &h;
    let ab = &a + &b;
    let cd = &c + &d;
    let ge = &g - &e;
    let ad = &a + &d;
    let eh = &e + &h;
    let bd = &b - &d;
    let gh = &g + &h;
    let ac = &a - &c;
    let ef = &e + &f;

    let p1 = strassen_rec(a, fh.view(), leaf_size);
    let p2 = strassen_rec(ab.view(), h, leaf_size);
    let p3 = strassen_rec(cd.view(), e, leaf_size);
    let p4 = strassen_rec(d, ge.view(), leaf_size);
    let p5 = strassen_rec(ad.view(), eh.view(), leaf_size);
    let p6 = strassen_rec(bd.view(), gh.view(), leaf_size);
    let p7 = strassen_rec(ac.view(), ef.view(), leaf_size);

    let q1 = &(&p4 + &p5) + &(&p6 - &p2);
    let q2 = &p1 + &p2;
    let q3 = &p3 + &p4;
    let q4 = &(&p1 + &p5) - &(&p3 + &p7);

    let mut out = Array2::zeros((n, n));
    out.slice_mut(s![..half, ..half]).assign(&q1);
    out.slice_mut(s![..half, half..]).assign(&q2);
    out.slice_mut(s![half.., ..half]).assign(&q3);
    out.slice_mut(s![half.., half..]).assign(&q4);
    out
}

/// Triple-loop product of two compatible blocks.
fn multiply_block(x: ArrayView2<i64>, y: ArrayView2<i64>) -> Array2<i64> {
    let rows = x.nrows();
    let inner = x.ncols();
    let cols = y.ncols();
    let mut out = Array2::zeros((rows, cols));
    for r in 0..rows {
        for c in 0..cols {
            let mut t = 0i64;
            for k in 0..inner {
                t += x[[r, k]] * y[[k, c]];
            }
            out[[r, c]] = t;
        }
    }
    out
}
