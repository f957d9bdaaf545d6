use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role};

use super::{Key, MeshBuilder};

/// Dual of ambo: one quad per edge spanning its two endpoints and the
/// centroids of its two faces.
///
/// Quads are `New`; a boundary edge gets the triangle over its one face
/// instead (`NewAlt`).
pub fn join(mesh: &Mesh) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for h in mesh.edges() {
        let [u, v, cf] = edge_triangle(&mut b, mesh, h);
        match mesh.pair(h) {
            Some(p) => {
                let cg = center(&mut b, mesh, mesh.halfedge(p).face);
                b.face(vec![u, cg, v, cf], Role::New);
            }
            None => b.face(vec![u, v, cf], Role::NewAlt),
        }
    }
    b.finish("join", mesh)
}

/// Splits every join quad along its face-to-face diagonal.
///
/// The result is the dual of the truncation: old vertices keep their
/// place, each face gains its centroid, and each interior edge becomes two
/// triangles (`New`, `NewAlt`).
pub fn needle(mesh: &Mesh) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for h in mesh.edges() {
        let [u, v, cf] = edge_triangle(&mut b, mesh, h);
        match mesh.pair(h) {
            Some(p) => {
                let cg = center(&mut b, mesh, mesh.halfedge(p).face);
                b.face(vec![u, cg, cf], Role::New);
                b.face(vec![cg, v, cf], Role::NewAlt);
            }
            None => b.face(vec![u, v, cf], Role::NewAlt),
        }
    }
    b.finish("needle", mesh)
}

/// Both ends of `h` and the centroid of its face, in that order.
fn edge_triangle(b: &mut MeshBuilder, mesh: &Mesh, h: HalfedgeId) -> [usize; 3] {
    let (a, z) = (mesh.from_vertex(h), mesh.halfedge(h).vertex);
    let u = b.point(Key::Vertex(a.0), Role::Existing, || mesh.position(a));
    let v = b.point(Key::Vertex(z.0), Role::Existing, || mesh.position(z));
    let cf = center(b, mesh, mesh.halfedge(h).face);
    [u, v, cf]
}

#[inline]
fn center(b: &mut MeshBuilder, mesh: &Mesh, f: FaceId) -> usize {
    b.point(Key::Face(f.0), Role::New, || mesh.centroid(f))
}
