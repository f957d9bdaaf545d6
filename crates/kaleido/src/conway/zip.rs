use crate::error::MeshResult;
use crate::mesh::{FaceId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder};

/// Dual of kis: one point per half-edge, inside its face.
///
/// Each face keeps its shape over its points (`Existing`); each interior
/// vertex of valence `d` becomes a `2d`-gon over the points next to it
/// (`New`). Points sit at the edge midpoint moved `ratio` of the way toward
/// the face centroid.
pub fn zip(mesh: &Mesh, ratio: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let c = mesh.centroid(f);
        let lp = mesh
            .face_halfedges(f)
            .into_iter()
            .map(|h| {
                b.point(Key::Edge(h.0), Role::New, || mesh.midpoint(h).lerp(&c, ratio))
            })
            .collect();
        b.face(lp, Role::Existing);
    }

    for i in 0..mesh.vertex_count() {
        let he = mesh.vertex_halfedges(VertexId(i));
        if he.len() < 3 || he.iter().any(|&h| mesh.pair(h).is_none()) {
            continue;
        }
        let lp: Option<Vec<usize>> = he
            .iter()
            .flat_map(|&h| [b.get(Key::Edge(mesh.next(h).0)), b.get(Key::Edge(h.0))])
            .collect();
        if let Some(lp) = lp {
            b.face(lp, Role::New);
        }
    }
    b.finish("zip", mesh)
}
