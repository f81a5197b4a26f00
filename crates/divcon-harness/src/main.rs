// ─────────────────────────────────────────────────────────────────────
// DivCon Core — CLI Runner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Demo runner: one subcommand per kernel. Each run executes the
//! divide-and-conquer algorithm and its naive baseline on the same input,
//! times both, and checks that the outputs agree.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use divcon_harness::{gen, io, timer};
use divcon_math::closest_pair::{closest_pair, closest_pair_naive};
use divcon_math::inversions::{count_inversions, count_inversions_naive};
use divcon_math::karatsuba::{karatsuba, long_multiply};
use divcon_math::monotone::{
    fixed_point, fixed_point_naive, unimodal_peak, unimodal_peak_naive,
};
use divcon_math::strassen::{naive_multiply, strassen_multiply};
use divcon_types::bigint::BigInt;
use divcon_types::config::RunConfig;
use divcon_types::error::DivconResult;

#[derive(Parser)]
#[command(
    name = "divcon",
    about = "Divide-and-conquer algorithm demos with naive cross-checks"
)]
struct Cli {
    /// Seed for generated inputs; overrides the config file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON run configuration supplying defaults for all parameters.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Multiply two big integers and verify against long multiplication.
    Karatsuba {
        /// Left operand (decimal numeral of arbitrary length).
        #[arg(long)]
        x: Option<String>,
        /// Right operand.
        #[arg(long)]
        y: Option<String>,
    },
    /// Count inversions in a file of integers (one per line) or in a
    /// generated array.
    Inversions {
        #[arg(long)]
        in_file: Option<PathBuf>,
        /// Generated array length when no file is given.
        #[arg(long)]
        n: Option<usize>,
    },
    /// Find array[i] == i in a strictly increasing generated array.
    FixedPoint {
        #[arg(long)]
        n: Option<usize>,
    },
    /// Find the peak of a generated unimodal array.
    Unimodal {
        #[arg(long)]
        n: Option<usize>,
    },
    /// Find the closest pair among generated standard-normal points.
    ClosestPair {
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        leaf_size: Option<usize>,
    },
    /// Multiply generated random square matrices with Strassen.
    Strassen {
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        leaf_size: Option<usize>,
        #[arg(long)]
        max_value: Option<i64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> DivconResult<()> {
    let config = match &cli.config {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    config.validate()?;
    let seed = cli.seed.unwrap_or(config.seed);
    let mut rng = StdRng::seed_from_u64(seed);

    match cli.command {
        Command::Karatsuba { x, y } => {
            let x = BigInt::from_str(&x.unwrap_or(config.karatsuba.x))?;
            let y = BigInt::from_str(&y.unwrap_or(config.karatsuba.y))?;
            let (product, _) = timer::time("karatsuba", || karatsuba(&x, &y));
            let (reference, _) = timer::time("long_multiply", || long_multiply(&x, &y));
            assert_eq!(product, reference, "karatsuba disagrees with long multiplication");
            println!("{product}");
        }
        Command::Inversions { in_file, n } => {
            let data = match in_file.or(config.inversions.in_file) {
                Some(path) => io::read_integers(&path)?,
                None => {
                    let n = n.unwrap_or(config.inversions.n);
                    gen::random_integers(&mut rng, n, -(n as i64), n as i64)
                }
            };
            let ((sorted, inversions), _) =
                timer::time("count_inversions", || count_inversions(&data));
            let (reference, _) =
                timer::time("count_inversions_naive", || count_inversions_naive(&data));
            assert_eq!(inversions, reference, "merge count disagrees with pairwise count");
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            println!("{inversions}");
        }
        Command::FixedPoint { n } => {
            let n = n.unwrap_or(config.fixed_point.n);
            let array = gen::fixed_point_array(&mut rng, n);
            let (found, _) = timer::time("fixed_point", || fixed_point(&array));
            let (scanned, _) = timer::time("fixed_point_naive", || fixed_point_naive(&array));
            // Several indices may satisfy array[i] == i; the searches must
            // only agree about existence.
            assert_eq!(found.is_some(), scanned.is_some());
            if let Some(i) = found {
                assert_eq!(array[i], i as i64, "reported index is not a fixed point");
            }
            println!("{found:?}");
        }
        Command::Unimodal { n } => {
            let n = n.unwrap_or(config.unimodal.n);
            let array = gen::unimodal_array(&mut rng, n);
            let (peak, _) = timer::time("unimodal_peak", || unimodal_peak(&array));
            let (reference, _) =
                timer::time("unimodal_peak_naive", || unimodal_peak_naive(&array));
            assert_eq!(peak, reference, "peak search disagrees with argmax");
            println!("{peak:?}");
        }
        Command::ClosestPair { n, leaf_size } => {
            let n = n.unwrap_or(config.closest_pair.n);
            let leaf_size = leaf_size.unwrap_or(config.closest_pair.leaf_size);
            let points = gen::random_points(&mut rng, n);
            let (pair, _) =
                timer::time("closest_pair", || closest_pair(&points, leaf_size));
            let pair = pair?;
            let (reference, _) =
                timer::time("closest_pair_naive", || closest_pair_naive(&points));
            match (pair, reference) {
                (Some((p, q)), Some((rp, rq))) => {
                    let dist = p.distance(&q);
                    assert_eq!(
                        dist,
                        rp.distance(&rq),
                        "recursive distance disagrees with naive distance"
                    );
                    println!("{p:?} {q:?}");
                    println!("distance = {dist}");
                }
                (None, None) => println!("no pair"),
                _ => panic!("recursive and naive search disagree about pair existence"),
            }
        }
        Command::Strassen { n, leaf_size, max_value } => {
            let n = n.unwrap_or(config.strassen.n);
            let leaf_size = leaf_size.unwrap_or(config.strassen.leaf_size);
            let max_value = max_value.unwrap_or(config.strassen.max_value);
            let x = gen::random_matrix(&mut rng, n, max_value);
            let y = gen::random_matrix(&mut rng, n, max_value);
            let (product, _) =
                timer::time("strassen_multiply", || strassen_multiply(&x, &y, leaf_size));
            let product = product?;
            let (reference, _) = timer::time("naive_multiply", || naive_multiply(&x, &y));
            let reference = reference?;
            let equal = product == reference;
            println!("{equal}");
            assert!(equal, "Strassen disagrees with the triple loop");
        }
    }
    Ok(())
}
