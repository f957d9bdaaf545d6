//! Stage 3: human-readable names. Cosmetic; nothing downstream reads them.

use crate::rational::{complement, format_fraction};
use crate::symbol::{lookup, WythoffSymbol};

use super::types::SchwarzDecomposition;

/// `(name, dual name)` from the table, or a guess from the structure.
pub fn guess_names(sym: &WythoffSymbol, d: &SchwarzDecomposition) -> (String, String) {
    if let Some(entry) = sym.index.and_then(lookup) {
        return (entry.name.to_string(), entry.dual.to_string());
    }
    let p = sym.params;
    let n = &d.sides;
    let single = d.face_types() == 1;

    if d.symmetry == 2 {
        if p[0] == 0.0 {
            if single {
                return named("octahedron", "cube");
            }
            let basis = if n[0] == 3.0 { n[1] } else { n[0] };
            return dihedral(basis, "antiprism", "deltohedron");
        }
        if p[3] == 0.0 || (p[2] == 0.0 && p[3] == 2.0) {
            if single {
                return named("cube", "octahedron");
            }
            let basis = if n[0] == 4.0 { n[1] } else { n[0] };
            return dihedral(basis, "prism", "dipyramid");
        }
        if p[1] == 0.0 && p[0] != 2.0 {
            return dihedral(d.incidence[0], "hosohedron", "dihedron");
        }
        return dihedral(n[0], "dihedron", "hosohedron");
    }

    let prefix = match d.symmetry {
        3 => "tetr",
        4 => "oct",
        _ => "icos",
    };
    let kind = if d.one_sided {
        "one-sided "
    } else if d.density == 1 {
        "convex "
    } else {
        "nonconvex "
    };
    (
        format!("{prefix}ahedral {kind}isogonal polyhedron"),
        format!("{prefix}ahedral {kind}isohedral polyhedron"),
    )
}

fn named(name: &str, dual: &str) -> (String, String) {
    (name.to_string(), dual.to_string())
}

fn dihedral(basis: f64, name: &str, dual: &str) -> (String, String) {
    let s = format_fraction(if basis < 2.0 { complement(basis) } else { basis });
    (format!("{s}-gonal {name}"), format!("{s}-gonal {dual}"))
}
