// ─────────────────────────────────────────────────────────────────────
// DivCon Core — DivCon Harness
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collaborators around the algorithm kernels: seeded input generation,
//! scoped timing, and file-based input. The kernels themselves stay pure;
//! everything impure lives here.

pub mod gen;
pub mod io;
pub mod timer;
