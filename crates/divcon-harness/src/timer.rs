// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Timing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wall-clock timing for top-level algorithm invocations.

use std::time::{Duration, Instant};

/// Timer that reports through the `log` facade when dropped, so every
/// exit path of the enclosing scope is measured.
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: impl Into<String>) -> Self {
        ScopedTimer {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Elapsed time since construction.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::info!(
            "{} took {:.6} seconds",
            self.label,
            self.start.elapsed().as_secs_f64()
        );
    }
}

/// Time a single call, returning its result and the elapsed wall-clock
/// duration.
pub fn time<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    log::info!("{label} took {:.6} seconds", elapsed.as_secs_f64());
    (result, elapsed)
}
