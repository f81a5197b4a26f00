// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Karatsuba
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Karatsuba big-integer multiplication.
//!
//! Splitting both operands at m = min(len) / 2 digits from the right gives
//! x = a·10^m + b and y = c·10^m + d, and the product needs only three
//! half-size multiplications:
//!   x·y = ac·10^(2m) + ((a+b)(c+d) - ac - bd)·10^m + bd
//!
//! The recursion works on little-endian digit slices, so each split is a
//! `split_at` with no digit copying.

use divcon_types::bigint::{
    add_magnitudes, scalar_mul, shift_pow10, sub_magnitudes, BigInt,
};

/// Multiply two arbitrary-precision integers with Karatsuba recursion.
///
/// The result is negative exactly when the operand signs differ and the
/// product is nonzero. Empty digit sequences cannot reach this function:
/// `BigInt` construction rejects them with `InvalidInput`.
pub fn karatsuba(x: &BigInt, y: &BigInt) -> BigInt {
    let magnitude = mul_magnitudes(x.magnitude(), y.magnitude());
    BigInt::from_magnitude(magnitude, x.is_negative() != y.is_negative())
}

/// Schoolbook O(n²) long multiplication, the verification baseline.
pub fn long_multiply(x: &BigInt, y: &BigInt) -> BigInt {
    let xm = x.magnitude();
    let ym = y.magnitude();
    let mut out = vec![0u8; xm.len() + ym.len()];
    for (i, &xd) in xm.iter().enumerate() {
        let mut carry = 0u32;
        for (j, &yd) in ym.iter().enumerate() {
            let t = out[i + j] as u32 + xd as u32 * yd as u32 + carry;
            out[i + j] = (t % 10) as u8;
            carry = t / 10;
        }
        let mut k = i + ym.len();
        while carry > 0 {
            let t = out[k] as u32 + carry;
            out[k] = (t % 10) as u8;
            carry = t / 10;
            k += 1;
        }
    }
    BigInt::from_magnitude(out, x.is_negative() != y.is_negative())
}

/// Recursive product of two little-endian digit magnitudes.
///
/// Base case: either operand is a single digit. The split point is always
/// derived from the shorter operand, so unequal lengths split cleanly.
fn mul_magnitudes(x: &[u8], y: &[u8]) -> Vec<u8> {
    if x.len() == 1 {
        return scalar_mul(y, x[0]);
    }
    if y.len() == 1 {
        return scalar_mul(x, y[0]);
    }
    let m = x.len().min(y.len()) / 2;
    // Little-endian: the low m digits come first.
    let (xb, xa) = x.split_at(m); // x = xa·10^m + xb
    let (yd, yc) = y.split_at(m); // y = yc·10^m + yd

    let ac = mul_magnitudes(xa, yc);
    let bd = mul_magnitudes(xb, yd);
    let cross = mul_magnitudes(&add_magnitudes(xa, xb), &add_magnitudes(yc, yd));
    // (a+b)(c+d) - ac - bd >= 0, so the magnitude subtraction cannot underflow.
    let mid = sub_magnitudes(&sub_magnitudes(&cross, &ac), &bd);

    let high = shift_pow10(&ac, 2 * m);
    let combined = add_magnitudes(&high, &shift_pow10(&mid, m));
    add_magnitudes(&combined, &bd)
}
