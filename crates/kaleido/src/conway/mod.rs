//! Conway operators over half-edge meshes.
//!
//! Purpose
//! - Topological transforms (dual, ambo, kis, gyro, truncate, chamfer,
//!   subdivide, offset, extrude, ribbon, and the compound join, ortho,
//!   expand, bevel, meta, needle and zip) that each read one `Mesh` and
//!   return a new one. Nothing is edited in place.
//!
//! Why this design (short)
//! - Every operator fills a `MeshBuilder`: new points are keyed by the
//!   element they derive from (`Key`), so a point shared by two output faces
//!   is created once no matter which face asks first.
//! - `MeshBuilder::finish` goes through `Mesh::with_roles`, which re-runs
//!   pairing. That is the one postcondition all operators share.
//! - Output roles record provenance (`Existing` for faces that descend from
//!   input faces, `New`/`NewAlt` for synthesized ones) so a later operator
//!   in a chain can select on them.

mod ambo;
mod bevel;
mod chain;
mod chamfer;
mod dual;
mod expand;
mod extrude;
mod gyro;
mod join;
mod kis;
mod meta_ortho;
mod offset;
mod ribbon;
mod select;
mod subdivide;
mod truncate;
mod zip;

pub use ambo::ambo;
pub use bevel::bevel;
pub use chain::{apply_chain, parse_chain, Op};
pub use chamfer::chamfer;
pub use dual::dual;
pub use expand::expand;
pub use extrude::extrude;
pub use gyro::gyro;
pub use join::{join, needle};
pub use kis::kis;
pub use meta_ortho::{meta, ortho};
pub use offset::{offset, offset_per_vertex};
pub use ribbon::ribbon;
pub use select::Selection;
pub use subdivide::subdivide;
pub use truncate::truncate;
pub use zip::zip;

use std::collections::HashMap;

use nalgebra::Vector3;
use tracing::debug;

use crate::error::MeshResult;
use crate::mesh::{HalfedgeId, Mesh, Role};

/// Identity of a derived point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Key {
    /// Copy (possibly displaced) of an input vertex.
    Vertex(usize),
    /// Point derived from an input face, usually its centroid.
    Face(usize),
    /// Point on a half-edge, near its destination.
    Edge(usize),
    /// Point on a half-edge, near its origin.
    EdgeFar(usize),
}

/// Accumulates positions, loops and roles for a new mesh.
#[derive(Debug, Default)]
pub(crate) struct MeshBuilder {
    positions: Vec<Vector3<f64>>,
    vertex_roles: Vec<Role>,
    faces: Vec<Vec<usize>>,
    face_roles: Vec<Role>,
    keyed: HashMap<Key, usize>,
}

impl MeshBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends an anonymous point.
    pub(crate) fn push(&mut self, at: Vector3<f64>, role: Role) -> usize {
        self.positions.push(at);
        self.vertex_roles.push(role);
        self.positions.len() - 1
    }

    /// Index of the point for `key`, created from `at` on first use.
    pub(crate) fn point(
        &mut self,
        key: Key,
        role: Role,
        at: impl FnOnce() -> Vector3<f64>,
    ) -> usize {
        if let Some(&i) = self.keyed.get(&key) {
            return i;
        }
        let i = self.push(at(), role);
        self.keyed.insert(key, i);
        i
    }

    #[inline]
    pub(crate) fn get(&self, key: Key) -> Option<usize> {
        self.keyed.get(&key).copied()
    }

    pub(crate) fn face(&mut self, lp: Vec<usize>, role: Role) {
        self.faces.push(lp);
        self.face_roles.push(role);
    }

    /// Overwrites a position after the fact (planarization passes).
    pub(crate) fn move_point(&mut self, i: usize, at: Vector3<f64>) {
        self.positions[i] = at;
    }

    #[inline]
    pub(crate) fn position(&self, i: usize) -> Vector3<f64> {
        self.positions[i]
    }

    /// Builds the mesh under the source mesh's policy.
    pub(crate) fn finish(self, op: &'static str, source: &Mesh) -> MeshResult<Mesh> {
        let mesh = Mesh::with_roles(
            self.positions,
            &self.faces,
            &self.face_roles,
            &self.vertex_roles,
            &source.cfg(),
        )?;
        debug!(
            op,
            v = mesh.vertex_count(),
            e = mesh.edge_count(),
            f = mesh.face_count(),
            "conway"
        );
        Ok(mesh)
    }
}

/// The lower id of a half-edge and its pair: one id per undirected edge.
#[inline]
pub(crate) fn undirected(mesh: &Mesh, h: HalfedgeId) -> usize {
    mesh.pair(h).map_or(h.0, |p| p.0.min(h.0))
}

#[cfg(test)]
mod tests;
