use crate::error::MeshResult;
use crate::mesh::{FaceId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder};

/// Face centroids become vertices; vertex fans become faces.
///
/// A boundary vertex closes its face through the midpoints of its two
/// boundary edges and a copy of itself, so open input stays manifold.
/// Isolated vertices are dropped. Each new face inherits its vertex's role.
pub fn dual(mesh: &Mesh) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for f in 0..mesh.face_count() {
        b.point(Key::Face(f), Role::New, || mesh.centroid(FaceId(f)));
    }
    for h in mesh.boundary_halfedges() {
        b.point(Key::Edge(h.0), Role::New, || mesh.midpoint(h));
    }

    for i in 0..mesh.vertex_count() {
        let v = VertexId(i);
        let he = mesh.vertex_halfedges(v);
        let (Some(&first), Some(&last)) = (he.first(), he.last()) else {
            continue;
        };
        let mut lp: Vec<usize> = he
            .iter()
            .map(|&h| {
                let f = mesh.halfedge(h).face;
                b.point(Key::Face(f.0), Role::New, || mesh.centroid(f))
            })
            .collect();
        if mesh.pair(last).is_none() {
            let out = mesh.next(first);
            lp.push(b.point(Key::Edge(last.0), Role::New, || mesh.midpoint(last)));
            lp.push(b.point(Key::Vertex(i), Role::NewAlt, || mesh.position(v)));
            lp.push(b.point(Key::Edge(out.0), Role::New, || mesh.midpoint(out)));
        }
        if lp.len() >= 3 {
            b.face(lp, mesh.vertex(v).role);
        }
    }
    b.finish("dual", mesh)
}
