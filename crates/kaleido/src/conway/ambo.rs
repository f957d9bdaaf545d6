use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

use super::{undirected, Key, MeshBuilder};

/// Rectification: edge midpoints become the vertices.
///
/// Faces shrink to the loop of their edge midpoints (`Existing`); each vertex
/// becomes the loop of its incident midpoints (`New`). A boundary vertex
/// closes its loop through a copy of itself.
pub fn ambo(mesh: &Mesh) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    let mid = |b: &mut MeshBuilder, h: HalfedgeId| {
        b.point(Key::Edge(undirected(mesh, h)), Role::New, || mesh.midpoint(h))
    };

    for f in 0..mesh.face_count() {
        let lp = mesh
            .face_halfedges(FaceId(f))
            .into_iter()
            .map(|h| mid(&mut b, h))
            .collect();
        b.face(lp, Role::Existing);
    }

    for i in 0..mesh.vertex_count() {
        let v = VertexId(i);
        let he = mesh.vertex_halfedges(v);
        let Some(&first) = he.first() else {
            continue;
        };
        let mut lp: Vec<usize> = he.iter().map(|&h| mid(&mut b, h)).collect();
        let out = mesh.next(first);
        if mesh.pair(out).is_none() {
            lp.push(b.point(Key::Vertex(i), Role::NewAlt, || mesh.position(v)));
            lp.push(mid(&mut b, out));
        }
        if lp.len() >= 3 {
            b.face(lp, Role::New);
        }
    }
    b.finish("ambo", mesh)
}
