// ─────────────────────────────────────────────────────────────────────
// DivCon Core — BigInt
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Arbitrary-precision decimal integers.
//!
//! Digits are stored little-endian, one decimal digit per byte. The
//! magnitude-level helpers (`add_magnitudes`, `sub_magnitudes`, ...) operate
//! on raw digit slices so recursive multiplication can split an operand by
//! slicing instead of copying.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::{DivconError, DivconResult};

/// Signed arbitrary-precision decimal integer.
///
/// Canonical form: no leading zeros (little-endian: no trailing zeros),
/// zero is the single digit `0` and is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            negative: false,
            digits: vec![0],
        }
    }

    /// Assemble from a little-endian magnitude produced by digit arithmetic.
    ///
    /// Trims non-significant high zeros; a zero magnitude is never negative.
    /// Panics on an empty magnitude or a byte that is not a decimal digit —
    /// both indicate a bug in the caller, not bad user input.
    pub fn from_magnitude(mut digits: Vec<u8>, negative: bool) -> Self {
        assert!(!digits.is_empty(), "empty digit magnitude");
        assert!(
            digits.iter().all(|&d| d < 10),
            "magnitude byte out of decimal range"
        );
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        let negative = negative && digits != [0];
        BigInt { negative, digits }
    }

    /// Number of decimal digits in the magnitude.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Little-endian magnitude digits.
    pub fn magnitude(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Multiply by 10^m.
    pub fn shl_pow10(&self, m: usize) -> Self {
        BigInt::from_magnitude(shift_pow10(&self.digits, m), self.negative)
    }
}

impl FromStr for BigInt {
    type Err = DivconError;

    /// Parse an optionally negated decimal numeral.
    ///
    /// An empty string (or a bare sign) is an empty digit sequence and is
    /// rejected before any arithmetic can see it.
    fn from_str(s: &str) -> DivconResult<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(DivconError::InvalidInput(
                "empty digit sequence".to_string(),
            ));
        }
        let mut digits = Vec::with_capacity(body.len());
        for ch in body.chars().rev() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(DivconError::InvalidInput(format!(
                        "invalid decimal digit {ch:?} in {s:?}"
                    )))
                }
            }
        }
        Ok(BigInt::from_magnitude(digits, negative))
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        let mut mag = value.unsigned_abs();
        let mut digits = Vec::new();
        loop {
            digits.push((mag % 10) as u8);
            mag /= 10;
            if mag == 0 {
                break;
            }
        }
        BigInt::from_magnitude(digits, value < 0)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::from(value as i128)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for &d in self.digits.iter().rev() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitudes(&self.digits, &other.digits),
            (true, true) => cmp_magnitudes(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_magnitude(self.digits.clone(), !self.negative)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return BigInt::from_magnitude(
                add_magnitudes(&self.digits, &rhs.digits),
                self.negative,
            );
        }
        match cmp_magnitudes(&self.digits, &rhs.digits) {
            Ordering::Less => BigInt::from_magnitude(
                sub_magnitudes(&rhs.digits, &self.digits),
                rhs.negative,
            ),
            _ => BigInt::from_magnitude(
                sub_magnitudes(&self.digits, &rhs.digits),
                self.negative,
            ),
        }
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

/// Compare two little-endian digit magnitudes numerically.
///
/// Accepts non-canonical slices (high zeros) so intermediate split results
/// can be compared without copying.
pub fn cmp_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    let la = significant_len(a);
    let lb = significant_len(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for i in (0..la).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Add two little-endian digit magnitudes.
pub fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n + 1);
    let mut carry = 0u8;
    for i in 0..n {
        let t = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(t % 10);
        carry = t / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Subtract little-endian magnitude `b` from `a`.
///
/// Panics if `b > a`; signed callers must order the operands first.
pub fn sub_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert!(
        cmp_magnitudes(a, b) != Ordering::Less,
        "magnitude subtraction underflow"
    );
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    for i in 0..a.len() {
        let mut t = a[i] as i8 - borrow - b.get(i).copied().unwrap_or(0) as i8;
        if t < 0 {
            t += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(t as u8);
    }
    out
}

/// Multiply a little-endian magnitude by a single decimal digit.
pub fn scalar_mul(digits: &[u8], d: u8) -> Vec<u8> {
    assert!(d < 10, "scalar factor must be a decimal digit");
    if d == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0u8;
    for &x in digits {
        let t = x * d + carry;
        out.push(t % 10);
        carry = t / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Multiply a little-endian magnitude by 10^m.
///
/// Zero stays a bare zero so shifted zero terms do not grow.
pub fn shift_pow10(digits: &[u8], m: usize) -> Vec<u8> {
    if digits.iter().all(|&d| d == 0) {
        return vec![0];
    }
    let mut out = vec![0u8; m];
    out.extend_from_slice(digits);
    out
}

fn significant_len(digits: &[u8]) -> usize {
    let mut n = digits.len();
    while n > 1 && digits[n - 1] == 0 {
        n -= 1;
    }
    n
}
