//! Half-edge polygon mesh.
//!
//! Purpose
//! - Generic manifold container for everything downstream of the Wythoff
//!   solver: Conway operators read one `Mesh` and build a fresh one.
//!
//! Why this design (short)
//! - Index arenas instead of linked objects: relations are `usize` newtypes,
//!   so a mesh is `Clone` and no lifetimes leak into the operator code.
//! - Meshes are immutable once built. Operators collect positions and face
//!   loops and call the constructor again, which re-runs pairing; there is no
//!   in-place surgery to keep consistent.
//! - Face insertion is all-or-nothing (see `build`).

mod build;
mod query;
mod types;

pub use types::{Face, FaceId, Halfedge, HalfedgeId, Mesh, Role, Vertex, VertexId};
