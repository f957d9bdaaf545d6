//! Construction from explicit face lists.
//!
//! Pipeline
//! - Validate each loop (at least three corners, indices in range, no
//!   repeated neighbors).
//! - Add faces one at a time. A face is checked against the key table in
//!   full before any half-edge is created, so a rejected face leaves no
//!   trace. On conflict the reversed loop is tried once.
//! - Pair every half-edge with its `(to, from)` twin in one pass at the end.

use std::collections::HashMap;

use nalgebra::Vector3;
use tracing::warn;

use crate::cfg::MeshCfg;
use crate::error::{MeshError, MeshResult};
use crate::face_builder::{face_lists, PolygonFace};

use super::types::{Face, FaceId, Halfedge, HalfedgeId, Mesh, Role, Vertex, VertexId};

impl Mesh {
    /// Mesh with every face and vertex tagged `Existing`.
    pub fn new(
        positions: Vec<Vector3<f64>>,
        faces: &[Vec<usize>],
        cfg: &MeshCfg,
    ) -> MeshResult<Self> {
        Self::with_roles(positions, faces, &[], &[], cfg)
    }

    /// Mesh with explicit roles. Missing role entries default to `Existing`.
    pub fn with_roles(
        positions: Vec<Vector3<f64>>,
        faces: &[Vec<usize>],
        face_roles: &[Role],
        vertex_roles: &[Role],
        cfg: &MeshCfg,
    ) -> MeshResult<Self> {
        let count = positions.len();
        let vertices = positions
            .into_iter()
            .enumerate()
            .map(|(i, position)| Vertex {
                position,
                halfedge: None,
                role: vertex_roles.get(i).copied().unwrap_or_default(),
            })
            .collect();
        let mut mesh = Mesh {
            vertices,
            halfedges: Vec::new(),
            faces: Vec::with_capacity(faces.len()),
            keys: HashMap::new(),
            cfg: *cfg,
        };

        for (i, lp) in faces.iter().enumerate() {
            let role = face_roles.get(i).copied().unwrap_or_default();
            if let Err(err) = validate_loop(i, lp, count) {
                if cfg.lenient {
                    warn!(face = i, %err, "skipping face");
                    continue;
                }
                return Err(err);
            }
            let Err((from, to)) = mesh.try_add_face(lp, role) else {
                continue;
            };
            let reversed: Vec<usize> = lp.iter().rev().copied().collect();
            if mesh.try_add_face(&reversed, role).is_ok() {
                continue;
            }
            let err = MeshError::FaceAddConflict { face: i, from, to };
            if cfg.lenient {
                warn!(face = i, %err, "skipping face");
                continue;
            }
            return Err(err);
        }
        mesh.pair_halfedges();
        Ok(mesh)
    }

    /// Mesh from solved polygon loops; the face role cycles with the face type.
    pub fn from_polygon_faces(
        positions: &[Vector3<f64>],
        faces: &[PolygonFace],
        cfg: &MeshCfg,
    ) -> MeshResult<Self> {
        let loops = face_lists(faces);
        let roles: Vec<Role> = faces.iter().map(|f| Role::from_index(f.face_type)).collect();
        Self::with_roles(positions.to_vec(), &loops, &roles, &[], cfg)
    }

    /// Adds one face or reports the first colliding `(from, to)` key.
    fn try_add_face(&mut self, lp: &[usize], role: Role) -> Result<(), (usize, usize)> {
        let n = lp.len();
        let key = |i: usize| (lp[i], lp[(i + 1) % n]);
        for i in 0..n {
            let k = key(i);
            if self.keys.contains_key(&k) || (0..i).any(|j| key(j) == k) {
                return Err(k);
            }
        }

        let base = self.halfedges.len();
        let face = FaceId(self.faces.len());
        for i in 0..n {
            let (_, to) = key(i);
            let h = HalfedgeId(base + i);
            self.halfedges.push(Halfedge {
                vertex: VertexId(to),
                next: HalfedgeId(base + (i + 1) % n),
                prev: HalfedgeId(base + (i + n - 1) % n),
                pair: None,
                face,
            });
            self.keys.insert(key(i), h);
            self.vertices[to].halfedge.get_or_insert(h);
        }
        // Anchor on the edge into lp[0] so face_vertices reproduces the loop.
        self.faces.push(Face {
            halfedge: HalfedgeId(base + n - 1),
            role,
        });
        Ok(())
    }

    fn pair_halfedges(&mut self) {
        for i in 0..self.halfedges.len() {
            let h = HalfedgeId(i);
            let from = self.from_vertex(h);
            let to = self.halfedges[i].vertex;
            let pair = self.find_halfedge(to, from);
            self.halfedges[i].pair = pair;
        }
    }

    /// Checks the structural invariants; returns the first violation.
    pub fn validate(&self) -> MeshResult<()> {
        let broken = |h: usize, reason: &'static str| MeshError::Inconsistent {
            halfedge: h,
            reason,
        };
        for (i, he) in self.halfedges.iter().enumerate() {
            let h = HalfedgeId(i);
            if self.halfedge(he.next).prev != h || self.halfedge(he.prev).next != h {
                return Err(broken(i, "next/prev are not inverse"));
            }
            if self.halfedge(he.next).face != he.face {
                return Err(broken(i, "next leaves the face"));
            }
            if let Some(p) = he.pair {
                let twin = self.halfedge(p);
                if twin.pair != Some(h) {
                    return Err(broken(i, "pair is not mutual"));
                }
                if twin.vertex != self.from_vertex(h) || self.from_vertex(p) != he.vertex {
                    return Err(broken(i, "pair does not reverse the edge"));
                }
            } else if self.find_halfedge(he.vertex, self.from_vertex(h)).is_some() {
                return Err(broken(i, "unpaired half-edge has a twin"));
            }
        }
        for (f, face) in self.faces.iter().enumerate() {
            let sides = self.face_halfedges(FaceId(f)).len();
            let mut h = face.halfedge;
            for _ in 0..sides {
                h = self.halfedge(h).next;
            }
            if h != face.halfedge {
                return Err(broken(face.halfedge.0, "face loop does not close"));
            }
        }
        Ok(())
    }
}

fn validate_loop(face: usize, lp: &[usize], count: usize) -> MeshResult<()> {
    let n = lp.len();
    if n < 3 {
        return Err(MeshError::DegenerateFace { face, sides: n });
    }
    if let Some(&vertex) = lp.iter().find(|&&v| v >= count) {
        return Err(MeshError::VertexOutOfRange {
            face,
            vertex,
            count,
        });
    }
    if (0..n).any(|i| lp[i] == lp[(i + 1) % n]) {
        return Err(MeshError::DegenerateFace { face, sides: n });
    }
    Ok(())
}
