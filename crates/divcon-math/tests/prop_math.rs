// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Property-Based Tests (proptest) for divcon-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for divcon-math using proptest.
//!
//! Every divide-and-conquer kernel must agree with its naive baseline:
//! Karatsuba vs long multiplication (and i128), merge-count vs pairwise
//! count, both monotone searches vs linear scans, strip-scan closest pair
//! vs exhaustive scan, Strassen vs the triple loop.

use divcon_math::closest_pair::{closest_pair, closest_pair_naive};
use divcon_math::inversions::{count_inversions, count_inversions_naive};
use divcon_math::karatsuba::{karatsuba, long_multiply};
use divcon_math::monotone::{
    fixed_point, fixed_point_naive, unimodal_peak, unimodal_peak_naive,
};
use divcon_math::strassen::{naive_multiply, strassen_multiply};
use divcon_types::bigint::BigInt;
use divcon_types::point::Point;
use ndarray::Array2;
use proptest::prelude::*;

// ── Karatsuba ────────────────────────────────────────────────────────

proptest! {
    /// Karatsuba equals i128 multiplication on machine-range operands.
    #[test]
    fn karatsuba_matches_i128(a in -1_000_000_000_000_000i128..1_000_000_000_000_000i128,
                              b in -1_000_000_000_000_000i128..1_000_000_000_000_000i128) {
        let product = karatsuba(&BigInt::from(a), &BigInt::from(b));
        prop_assert_eq!(product, BigInt::from(a * b));
    }

    /// Karatsuba equals schoolbook long multiplication on arbitrary digit
    /// sequences, including wildly unequal lengths.
    #[test]
    fn karatsuba_matches_long_multiply(
        x_digits in prop::collection::vec(0u8..10, 1..60),
        y_digits in prop::collection::vec(0u8..10, 1..60),
        x_neg in any::<bool>(),
        y_neg in any::<bool>(),
    ) {
        let x = BigInt::from_magnitude(x_digits, x_neg);
        let y = BigInt::from_magnitude(y_digits, y_neg);
        prop_assert_eq!(karatsuba(&x, &y), long_multiply(&x, &y));
    }
}

// ── Inversion counting ───────────────────────────────────────────────

proptest! {
    /// The merge-based count equals the O(n²) pairwise count, and the
    /// returned sequence is a sorted permutation of the input.
    #[test]
    fn inversions_match_naive(array in prop::collection::vec(-1000i64..1000, 0..200)) {
        let (sorted, inversions) = count_inversions(&array);
        prop_assert_eq!(inversions, count_inversions_naive(&array));

        let mut expected = array.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected, "output must be the sorted permutation");
    }
}

// ── Monotone searches ────────────────────────────────────────────────

proptest! {
    /// On strictly increasing distinct integers the search agrees with the
    /// linear scan about existence, and any found index is a true fixed
    /// point.
    #[test]
    fn fixed_point_agrees_with_scan(
        values in prop::collection::btree_set(-500i64..500, 1..100)
    ) {
        let array: Vec<i64> = values.into_iter().collect();
        let found = fixed_point(&array);
        let scanned = fixed_point_naive(&array);
        prop_assert_eq!(found.is_some(), scanned.is_some());
        if let Some(i) = found {
            prop_assert_eq!(array[i], i as i64, "array[{}] must equal {}", i, i);
        }
    }

    /// The peak search lands on the same index as the exhaustive argmax.
    #[test]
    fn unimodal_peak_matches_argmax(n in 1usize..500, peak_seed in any::<u64>()) {
        let peak = (peak_seed % n as u64) as i64;
        let mut array: Vec<i64> = (0..peak).collect();
        array.extend((peak..n as i64).rev());
        prop_assert_eq!(unimodal_peak(&array), unimodal_peak_naive(&array));
    }
}

// ── Closest pair ─────────────────────────────────────────────────────

proptest! {
    /// The recursive search finds a pair at exactly the naive minimum
    /// distance, for every admissible leaf size.
    #[test]
    fn closest_pair_matches_naive(
        coords in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 2..60),
        leaf_size in 2usize..6,
    ) {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let pair = closest_pair(&points, leaf_size)
            .expect("leaf size is admissible")
            .expect("two or more points always yield a pair");
        let (np, nq) = closest_pair_naive(&points).expect("two or more points");
        prop_assert_eq!(pair.0.distance(&pair.1), np.distance(&nq));
    }
}

// ── Strassen ─────────────────────────────────────────────────────────

fn square_pair() -> impl Strategy<Value = (Array2<i64>, Array2<i64>)> {
    prop_oneof![Just(1usize), Just(2), Just(4), Just(8)].prop_flat_map(|n| {
        (
            prop::collection::vec(-100i64..100, n * n),
            prop::collection::vec(-100i64..100, n * n),
        )
            .prop_map(move |(xs, ys)| {
                let x = Array2::from_shape_vec((n, n), xs).expect("n*n entries");
                let y = Array2::from_shape_vec((n, n), ys).expect("n*n entries");
                (x, y)
            })
    })
}

proptest! {
    /// Strassen equals the triple loop exactly, entry for entry, at every
    /// leaf size.
    #[test]
    fn strassen_matches_naive((x, y) in square_pair(), leaf_size in 1usize..4) {
        let product = strassen_multiply(&x, &y, leaf_size).expect("valid operands");
        let reference = naive_multiply(&x, &y).expect("compatible shapes");
        prop_assert_eq!(product, reference);
    }
}
