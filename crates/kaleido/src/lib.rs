//! Uniform polyhedra from Wythoff symbols, and Conway operators on the result.
//!
//! Pipeline
//! - `symbol`: text (`"5/2 3|3"`, `"#41"`) to a validated `WythoffSymbol`.
//! - `wythoff`: the ten-stage solver, from the Moebius triangle to vertex
//!   coordinates, face incidence and names.
//! - `face_builder`: ordered polygon loops per face, plus fan triangulation.
//! - `mesh`: a half-edge mesh with per-element roles.
//! - `conway`: topology operators and textual chains of them.
//!
//! Tolerances live in `cfg`; every fallible stage reports through `error`.

pub mod api;
pub mod cfg;
pub mod conway;
pub mod error;
pub mod face_builder;
pub mod mesh;
pub mod rational;
pub mod symbol;
pub mod wythoff;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{FanCfg, MeshCfg, SolverCfg};
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{FanCfg, MeshCfg, SolverCfg};
    pub use crate::conway::{apply_chain, parse_chain, Op, Selection};
    pub use crate::error::{ChainError, MeshError, WythoffError};
    pub use crate::face_builder::{build_faces, PolygonFace};
    pub use crate::mesh::{Mesh, Role};
    pub use crate::rational::Rational;
    pub use crate::symbol::WythoffSymbol;
    pub use crate::wythoff::Polyhedron;
    pub use nalgebra::Vector3 as Vec3;
}
