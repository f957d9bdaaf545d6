//! Stages 4 to 7: fundamental angles, irregular rewrites, counts, and the
//! printable vertex configuration.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::cfg::{SolverCfg, CONVERGENCE_FACTOR, DBL_EPSILON};
use crate::error::{WythoffError, WythoffResult};
use crate::rational::{complement, denominator, format_fraction, numerator};
use crate::symbol::DIRHOMBIC_INDEX;

use super::types::SchwarzDecomposition;

/// Solves the fundamental right spherical triangles.
///
/// Newton-style update of `gamma[0]` against the residual
/// `pi - sum(m[j] * gamma[j])`; the other angles follow from Napier's rule
/// `cos(pi/n[j]) = cos(pi/n[0]) / sin(gamma[0]) * sin(gamma[j])`.
pub fn solve_fundamental_angles(
    text: &str,
    mut d: SchwarzDecomposition,
    cfg: &SolverCfg,
) -> WythoffResult<SchwarzDecomposition> {
    let n = &d.sides;
    let m = &d.incidence;
    if n.len() == 1 {
        d.gamma = vec![PI / m[0]];
        return Ok(d);
    }

    let mut gamma: Vec<f64> = n.iter().map(|&s| FRAC_PI_2 - PI / s).collect();
    for _ in 0..cfg.max_iterations {
        let delta = PI - m.iter().zip(&gamma).map(|(m, g)| m * g).sum::<f64>();
        if delta.abs() < CONVERGENCE_FACTOR * DBL_EPSILON {
            d.gamma = gamma;
            return Ok(d);
        }
        let sigma: f64 = m.iter().zip(&gamma).map(|(m, g)| m * g.tan()).sum();
        gamma[0] += delta * gamma[0].tan() / sigma;
        if !(0.0..=PI).contains(&gamma[0]) {
            return Err(WythoffError::convergence(text, "gamma out of bounds"));
        }
        let cosa = (PI / n[0]).cos() / gamma[0].sin();
        for j in 1..n.len() {
            gamma[j] = ((PI / n[j]).cos() / cosa).asin();
        }
    }
    Err(WythoffError::convergence(
        text,
        format!("no convergence after {} iterations", cfg.max_iterations),
    ))
}

/// The two hand-derived rewrites.
///
/// - `p q r|` with one even denominator: drop the `{2r}` type and add
///   retrograde `{2p}` and `{2q}`.
/// - Table entry 80: start from `|5/3 3 5/2`, replace the snub triangles by
///   four equatorial squares and add the missing retrograde `{3/2}`.
pub fn handle_exceptions(mut d: SchwarzDecomposition) -> SchwarzDecomposition {
    if let Some(even) = d.even.filter(|_| d.face_types() == 3) {
        for j in even + 1..3 {
            d.sides[j - 1] = d.sides[j];
            d.gamma[j - 1] = d.gamma[j];
        }
        d.sides.resize(4, 0.0);
        d.incidence.resize(4, 0.0);
        d.gamma.resize(4, 0.0);
        d.sides[2] = complement(d.sides[1]);
        d.gamma[2] = -d.gamma[1];
        d.sides[3] = complement(d.sides[0]);
        d.incidence[3] = 1.0;
        d.gamma[3] = -d.gamma[0];
        d.rot = vec![0, 1, 3, 2];
    }

    if d.index == Some(DIRHOMBIC_INDEX) {
        d.hemi = true;
        d.density = 0;
        d.sides.resize(5, 0.0);
        d.incidence.resize(5, 0.0);
        d.gamma.resize(5, 0.0);
        for j in (1..=3).rev() {
            d.incidence[j] = 1.0;
            d.sides[j] = d.sides[j - 1];
            d.gamma[j] = d.gamma[j - 1];
        }
        d.sides[0] = 4.0;
        d.incidence[0] = 4.0;
        d.gamma[0] = FRAC_PI_2;
        d.incidence[4] = 1.0;
        d.sides[4] = complement(d.sides[1]);
        d.gamma[4] = -d.gamma[1];

        d.rot.resize(8, 0);
        for j in (1..6).step_by(2) {
            d.rot[j] += 1;
        }
        d.rot[6] = 0;
        d.rot[7] = 4;
        let snub = d.snub.get_or_insert_with(Vec::new);
        snub.resize(8, false);
        snub[6] = true;
        snub[7] = false;
    }
    d
}

/// Edge and face counts. Also revises the density when type-0 faces are
/// spherically concave, and computes `chi` for the bar-free entry.
pub fn calc_counts(mut d: SchwarzDecomposition) -> SchwarzDecomposition {
    let v = d.vertex_count as i64;
    let mut edges = 0;
    d.face_counts.clear();
    for (n, m) in d.sides.iter().zip(&d.incidence) {
        let t = v * numerator(*m);
        edges += t;
        d.face_counts.push((t / numerator(*n)) as usize);
    }
    d.edge_count = (edges / 2) as usize;
    d.face_count = d.face_counts.iter().sum();

    if d.density != 0 && d.gamma[0] > FRAC_PI_2 {
        d.density = d.face_counts[0] as i64 - d.density;
    }
    if d.index == Some(DIRHOMBIC_INDEX) {
        d.chi = d.euler();
    }
    d
}

/// Vertex configuration such as `(3.4.3.4)` or `(5/2.3.5/2.3)/2`.
pub fn vertex_configuration(d: &SchwarzDecomposition) -> String {
    let faces: Vec<String> = d
        .rot
        .iter()
        .map(|&t| format_fraction(d.sides[t]))
        .collect();
    let mut s = format!("({})", faces.join("."));
    let den = denominator(d.incidence[0]);
    if den != 1 {
        s.push_str(&format!("/{den}"));
    }
    s
}
