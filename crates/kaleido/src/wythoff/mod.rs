//! Kaleidoscopic construction of uniform polyhedra from Wythoff symbols.
//!
//! Purpose
//! - Turn a symbol such as `5|2 3` into the full combinatorial and metric
//!   structure of the polyhedron: face types, counts, density, Euler
//!   characteristic, unit-sphere vertices, neighbor rotations, face
//!   incidence and edge lists.
//!
//! Pipeline (strict order; each stage reads only what the previous wrote)
//! 1. Moebius triangle: symmetry type, group order, nominal density and chi.
//! 2. Schwarz decomposition: face types per bar position, then sort, merge,
//!    and strip digons.
//! 3. Names (cosmetic).
//! 4. Fundamental angles by Newton iteration.
//! 5. Irregular rewrites (even denominators in `p q r|`, table entry 80).
//! 6. Edge and face counts.
//! 7. Vertex configuration string (cosmetic).
//! 8. Vertices by BFS rotation.
//! 9. Faces by walking the vertex/face incidence.
//! 10. Edge and dual edge lists.
//!
//! Failures are fatal and carry the symbol text; nothing is truncated.

mod angles;
mod decompose;
mod faces;
mod moebius;
mod names;
mod types;
mod vertices;

pub use angles::{
    calc_counts, handle_exceptions, solve_fundamental_angles, vertex_configuration,
};
pub use decompose::{merge_face_types, raw_decomposition, sort_face_types};
pub use faces::{calc_edges, calc_faces, polar_reciprocal, EdgeSet, FaceSet};
pub use moebius::find_moebius_triangle;
pub use names::guess_names;
pub use types::{MoebiusTriangle, PolyhedronGeometry, SchwarzDecomposition};
pub use vertices::{calc_vertices, rotate, VertexSet};

use tracing::debug;

use crate::cfg::SolverCfg;
use crate::error::WythoffResult;
use crate::symbol::WythoffSymbol;

/// Stages 1, 2, 4, 5 and 6: everything up to the counts.
pub fn decompose_symbol(
    sym: &WythoffSymbol,
    cfg: &SolverCfg,
) -> WythoffResult<SchwarzDecomposition> {
    let text = sym.text.as_str();
    let tri = find_moebius_triangle(sym)?;
    debug!(symbol = text, k = tri.symmetry, g = tri.order, d = tri.density, chi = tri.chi, "moebius");

    let d = merge_face_types(sort_face_types(raw_decomposition(sym, &tri)?));
    debug!(symbol = text, n = d.face_types(), m = d.valency(), v = d.vertex_count, "schwarz");

    let d = solve_fundamental_angles(text, d, cfg)?;
    let d = calc_counts(handle_exceptions(d));
    debug!(
        symbol = text,
        v = d.vertex_count,
        e = d.edge_count,
        f = d.face_count,
        chi = d.chi,
        density = d.density,
        "counts"
    );
    Ok(d)
}

/// A fully solved uniform polyhedron.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    pub symbol: WythoffSymbol,
    pub decomposition: SchwarzDecomposition,
    pub name: String,
    pub dual_name: String,
    pub configuration: String,
    pub geometry: PolyhedronGeometry,
}

impl Polyhedron {
    /// Parses and solves with default tolerances.
    pub fn from_symbol(text: &str) -> WythoffResult<Self> {
        Self::solve(WythoffSymbol::parse(text)?, &SolverCfg::default())
    }

    pub fn solve(symbol: WythoffSymbol, cfg: &SolverCfg) -> WythoffResult<Self> {
        let d = decompose_symbol(&symbol, cfg)?;
        let text = symbol.text.as_str();
        let (name, dual_name) = guess_names(&symbol, &d);
        let configuration = vertex_configuration(&d);

        let vs = calc_vertices(text, &d, cfg)?;
        let fs = calc_faces(text, &d, &vs)?;
        let es = calc_edges(text, &d, &vs, &fs)?;
        debug!(
            symbol = text,
            name = name.as_str(),
            faces = fs.poles.len(),
            edges = es.edges.len(),
            "solved"
        );

        let geometry = PolyhedronGeometry {
            vertices: vs.vertices,
            adjacency: vs.adjacency,
            face_incidence: fs.incidence,
            face_poles: fs.poles,
            face_types: fs.types,
            edges: es.edges,
            dual_edges: es.dual_edges,
            anti: es.anti,
        };
        Ok(Self {
            symbol,
            decomposition: d,
            name,
            dual_name,
            configuration,
            geometry,
        })
    }

    /// Side count (as a fraction value) of face `f`.
    #[inline]
    pub fn face_sides(&self, f: usize) -> f64 {
        self.decomposition.sides[self.geometry.face_types[f]]
    }
}

#[cfg(test)]
mod tests;
