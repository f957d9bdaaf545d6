//! Arena types for the half-edge mesh.
//!
//! All relations are indices into the owning `Mesh`; nothing borrows across
//! elements, so cloning a mesh is a plain structural copy.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::cfg::MeshCfg;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfedgeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Provenance tag carried through operators; selections filter on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Ignored,
    #[default]
    Existing,
    New,
    NewAlt,
    ExistingAlt,
}

impl Role {
    /// Cyclic mapping used to color faces by type: `0 -> Ignored`, `1 -> Existing`, ...
    pub fn from_index(i: usize) -> Self {
        match i % 5 {
            0 => Role::Ignored,
            1 => Role::Existing,
            2 => Role::New,
            3 => Role::NewAlt,
            _ => Role::ExistingAlt,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Ignored => "ignored",
            Role::Existing => "existing",
            Role::New => "new",
            Role::NewAlt => "new_alt",
            Role::ExistingAlt => "existing_alt",
        }
    }

    #[inline]
    pub fn is_existing(self) -> bool {
        matches!(self, Role::Existing | Role::ExistingAlt)
    }

    #[inline]
    pub fn is_new(self) -> bool {
        matches!(self, Role::New | Role::NewAlt)
    }
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub position: Vector3<f64>,
    /// One half-edge pointing *into* this vertex; `None` for isolated vertices.
    pub halfedge: Option<HalfedgeId>,
    pub role: Role,
}

/// Directed edge inside one face. `vertex` is the destination.
#[derive(Clone, Debug)]
pub struct Halfedge {
    pub vertex: VertexId,
    pub next: HalfedgeId,
    pub prev: HalfedgeId,
    /// Opposite half-edge of the neighboring face; `None` on the boundary.
    pub pair: Option<HalfedgeId>,
    pub face: FaceId,
}

#[derive(Clone, Debug)]
pub struct Face {
    pub halfedge: HalfedgeId,
    pub role: Role,
}

/// Manifold polygon mesh over index arenas.
///
/// Invariants after every constructor:
/// - walking `next` from any half-edge returns to it after `sides` steps;
/// - `prev` and `next` are mutual inverses;
/// - `pair.pair == self` whenever `pair` is set, and a pair runs the
///   opposite way between the same two vertices;
/// - at most one half-edge per ordered `(from, to)`.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) halfedges: Vec<Halfedge>,
    pub(crate) faces: Vec<Face>,
    /// `(from, to) -> half-edge` for pairing and conflict checks.
    pub(crate) keys: HashMap<(usize, usize), HalfedgeId>,
    /// Build policy, inherited by meshes derived through operators.
    pub(crate) cfg: MeshCfg,
}

impl Mesh {
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn halfedges(&self) -> &[Halfedge] {
        &self.halfedges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.0]
    }

    #[inline]
    pub fn halfedge(&self, h: HalfedgeId) -> &Halfedge {
        &self.halfedges[h.0]
    }

    #[inline]
    pub fn face(&self, f: FaceId) -> &Face {
        &self.faces[f.0]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn cfg(&self) -> MeshCfg {
        self.cfg
    }

    #[inline]
    pub fn position(&self, v: VertexId) -> Vector3<f64> {
        self.vertices[v.0].position
    }

    /// Half-edge running `from -> to`, if present.
    #[inline]
    pub fn find_halfedge(&self, from: VertexId, to: VertexId) -> Option<HalfedgeId> {
        self.keys.get(&(from.0, to.0)).copied()
    }

    pub fn face_roles(&self) -> Vec<Role> {
        self.faces.iter().map(|f| f.role).collect()
    }

    pub fn vertex_roles(&self) -> Vec<Role> {
        self.vertices.iter().map(|v| v.role).collect()
    }
}
