// ─────────────────────────────────────────────────────────────────────
// DivCon Core — File Input
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! File-based input for the inversion-count demo.

use std::path::Path;

use divcon_types::error::{DivconError, DivconResult};

/// Read one integer per line.
///
/// Surrounding whitespace is tolerated; anything else (including a blank
/// line) is a parse failure naming the file and line.
pub fn read_integers(path: &Path) -> DivconResult<Vec<i64>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.trim().parse::<i64>().map_err(|_| {
                DivconError::ParseError(format!(
                    "{}:{}: expected an integer, got {:?}",
                    path.display(),
                    idx + 1,
                    line
                ))
            })
        })
        .collect()
}
