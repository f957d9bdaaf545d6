use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

use super::{undirected, Key, MeshBuilder};

/// Midpoint subdivision.
///
/// Every face is replaced by the loop of its edge midpoints (`Existing`) plus
/// one corner triangle per vertex (`New`). Old vertices are pushed out by
/// `offset` along their normals.
pub fn subdivide(mesh: &Mesh, offset: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for i in 0..mesh.vertex_count() {
        let v = VertexId(i);
        b.push(mesh.position(v) + mesh.vertex_normal(v) * offset, Role::Existing);
    }
    let mid = |b: &mut MeshBuilder, h: HalfedgeId| {
        b.point(Key::Edge(undirected(mesh, h)), Role::New, || mesh.midpoint(h))
    };
    for h in 0..mesh.halfedges().len() {
        mid(&mut b, HalfedgeId(h));
    }

    for f in 0..mesh.face_count() {
        let lp = mesh
            .face_halfedges(FaceId(f))
            .into_iter()
            .map(|h| mid(&mut b, h))
            .collect();
        b.face(lp, Role::Existing);
    }

    for i in 0..mesh.vertex_count() {
        // Each incoming half-edge is the one in its face that ends at `i`.
        for h in mesh.vertex_halfedges(VertexId(i)) {
            let tri = vec![i, mid(&mut b, mesh.next(h)), mid(&mut b, h)];
            b.face(tri, Role::New);
        }
    }
    b.finish("subdivide", mesh)
}
