//! Stage 2: split the Schwarz triangle into face types.
//!
//! The raw decomposition depends on the bar position. It is then normalized
//! in three passes: sort by decreasing side count (digons last), merge
//! repeated types, strip digons. Type 0 after normalization seeds the angle
//! solve and the vertex expansion, so the order of these passes matters.

use crate::cfg::DBL_EPSILON;
use crate::error::{WythoffError, WythoffResult};
use crate::rational::{complement, denominator, numerator};
use crate::symbol::{SymbolShape, WythoffSymbol};

use super::types::{MoebiusTriangle, SchwarzDecomposition};

/// Raw face types for one symbol shape, before normalization.
pub fn raw_decomposition(
    sym: &WythoffSymbol,
    tri: &MoebiusTriangle,
) -> WythoffResult<SchwarzDecomposition> {
    let p = sym.params;
    let g = tri.order;
    let mut d = SchwarzDecomposition {
        index: sym.index,
        symmetry: tri.symmetry,
        order: g,
        density: tri.density,
        chi: tri.chi,
        vertex_count: 0,
        edge_count: 0,
        face_count: 0,
        hemi: false,
        one_sided: false,
        even: None,
        sides: Vec::new(),
        incidence: Vec::new(),
        gamma: Vec::new(),
        rot: Vec::new(),
        snub: None,
        face_counts: Vec::new(),
    };
    let mut vertices = g;

    match sym.shape() {
        SymbolShape::Vertex => {
            let valency = 2 * numerator(p[0]);
            vertices = g / valency;
            d.sides = vec![p[2], p[3]];
            d.incidence = vec![p[0], p[0]];
            d.rot = (0..valency as usize).map(|k| k % 2).collect();
        }
        SymbolShape::Edge => {
            vertices = g / 2;
            d.sides = vec![2.0 * p[3], p[0], p[1]];
            d.incidence = vec![2.0, 1.0, 1.0];
            d.rot = vec![0, 1, 0, 2];
            // p == q' up to round-off.
            if (p[0] - complement(p[1])).abs() < DBL_EPSILON {
                d.hemi = true;
                d.density = 0;
                if p[0] != 2.0 && !(p[3] == 3.0 && (p[0] == 3.0 || p[1] == 3.0)) {
                    d.one_sided = true;
                    vertices /= 2;
                    d.chi /= 2;
                }
            }
        }
        SymbolShape::Even => {
            for j in 0..3 {
                if denominator(p[j]) % 2 == 0 {
                    if p[(j + 1) % 3] != p[(j + 2) % 3] {
                        d.even = Some(j);
                        d.chi -= g / numerator(p[j]) / 2;
                        d.one_sided = true;
                        d.density = 0;
                    } else {
                        // p = q gives a doubled 2 2r|p.
                        d.density /= 2;
                    }
                    vertices /= 2;
                }
            }
            d.sides = vec![2.0 * p[0], 2.0 * p[1], 2.0 * p[2]];
            d.incidence = vec![1.0; 3];
            d.rot = vec![0, 1, 2];
        }
        SymbolShape::Snub | SymbolShape::Dirhombic => {
            // Only the "white" triangles carry a vertex.
            vertices = g / 2;
            d.sides = vec![3.0, p[1], p[2], p[3]];
            d.incidence = vec![3.0, 1.0, 1.0, 1.0];
            d.rot = vec![0, 1, 0, 2, 0, 3];
            d.snub = Some(vec![true, false, true, false, true, false]);
        }
    }

    if vertices <= 0 {
        return Err(WythoffError::symbol(&sym.text, "symbol yields no vertices"));
    }
    d.vertex_count = vertices as usize;
    Ok(d)
}

/// Bubble sort by decreasing side count with digons pushed to the end.
pub fn sort_face_types(mut d: SchwarzDecomposition) -> SchwarzDecomposition {
    let mut bound = d.face_types().saturating_sub(1);
    while bound != 0 {
        let last = bound;
        bound = 0;
        for j in 0..last {
            let (a, b) = (d.sides[j], d.sides[j + 1]);
            if (a < b || a == 2.0) && b != 2.0 {
                d.sides.swap(j, j + 1);
                d.incidence.swap(j, j + 1);
                for r in d.rot.iter_mut() {
                    if *r == j {
                        *r = j + 1;
                    } else if *r == j + 1 {
                        *r = j;
                    }
                }
                if d.even == Some(j) {
                    d.even = Some(j + 1);
                } else if d.even == Some(j + 1) {
                    d.even = Some(j);
                }
                bound = j;
            }
        }
    }
    d
}

/// Merges runs of equal side counts, then drops digon types and every
/// rotation step that crossed one.
pub fn merge_face_types(mut d: SchwarzDecomposition) -> SchwarzDecomposition {
    let mut head = 0;
    while head < d.face_types() && d.sides[head] != 2.0 {
        let mut j = head + 1;
        while j < d.face_types() && d.sides[j] == d.sides[head] {
            d.incidence[head] += d.incidence[j];
            j += 1;
        }
        let k = j - head - 1;
        if k != 0 {
            d.sides.drain(head + 1..j);
            d.incidence.drain(head + 1..j);
            for r in d.rot.iter_mut() {
                if *r >= j {
                    *r -= k;
                } else if *r > head {
                    *r = head;
                }
            }
            if let Some(e) = d.even.as_mut() {
                if *e >= j {
                    *e -= k;
                }
            }
        }
        head += 1;
    }

    // A lone digon type still counts as one (hosohedron).
    let keep = head.max(1);
    if keep < d.face_types() {
        d.sides.truncate(keep);
        d.incidence.truncate(keep);
        let kept: Vec<bool> = d.rot.iter().map(|&r| r < keep).collect();
        if let Some(snub) = d.snub.as_mut() {
            *snub = snub
                .iter()
                .zip(&kept)
                .filter_map(|(&s, &k)| k.then_some(s))
                .collect();
        }
        d.rot.retain(|&r| r < keep);
    }
    d
}
