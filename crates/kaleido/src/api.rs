//! Curated surface for callers outside the crate (CLI, benches).
//!
//! Prefer these re-exports over reaching into submodules; internal stage
//! helpers stay reachable through `crate::wythoff` for tests and debugging.

// Symbols
pub use crate::rational::{format_fraction, Rational};
pub use crate::symbol::{entries as uniform_entries, lookup as uniform_entry, UniformEntry};
pub use crate::symbol::{SymbolShape, WythoffSymbol, UNIFORM_COUNT};
// Solver
pub use crate::cfg::SolverCfg;
pub use crate::wythoff::{decompose_symbol, Polyhedron, PolyhedronGeometry, SchwarzDecomposition};
// Faces
pub use crate::cfg::FanCfg;
pub use crate::face_builder::{build_faces, face_lists, triangulate, FaceKind, FanMesh, PolygonFace};
// Meshes and operators
pub use crate::cfg::MeshCfg;
pub use crate::conway::{apply_chain, parse_chain, Op, Selection};
pub use crate::error::{ChainError, MeshError, WythoffError};
pub use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

/// Half-edge mesh of a solved polyhedron; face roles follow the face types.
pub fn solid_mesh(p: &Polyhedron, cfg: &MeshCfg) -> Result<Mesh, MeshOrSolveError> {
    let faces = build_faces(p)?;
    Ok(Mesh::from_polygon_faces(&p.geometry.vertices, &faces, cfg)?)
}

/// Either stage of `solid_mesh` failing.
#[derive(Debug, thiserror::Error)]
pub enum MeshOrSolveError {
    #[error(transparent)]
    Solve(#[from] WythoffError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octahedron_through_the_surface() {
        let p = Polyhedron::from_symbol("4|2 3").unwrap();
        let m = solid_mesh(&p, &MeshCfg::default()).unwrap();
        assert_eq!((m.vertex_count(), m.edge_count(), m.face_count()), (6, 12, 8));
        let ops = parse_chain("d").unwrap();
        let cube = apply_chain(&m, &ops).unwrap();
        assert_eq!(cube.face_count(), 6);
        assert!(uniform_entry(1).is_some());
    }
}
