// ─────────────────────────────────────────────────────────────────────
// DivCon Core — DivCon Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Divide-and-conquer algorithm kernels.
//!
//! Each module pairs one recursive algorithm with a naive baseline used for
//! output-equivalence checks:
//!
//! - `karatsuba` – big-integer multiplication, three half-size products
//! - `inversions` – merge sort with the inversion count folded into the merge
//! - `monotone` – fixed-point and unimodal-peak binary searches
//! - `closest_pair` – planar closest pair with the bounded strip scan
//! - `strassen` – matrix multiplication with seven quadrant products

pub mod closest_pair;
pub mod inversions;
pub mod karatsuba;
pub mod monotone;
pub mod strassen;
