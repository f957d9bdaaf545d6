use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder, Selection};

/// Cuts selected vertices off at `amount` along each incident edge.
///
/// Faces keep their place (`Existing`) with each selected corner replaced by
/// two cut points. Every selected interior vertex becomes a new face over
/// its cut points (`New`); boundary vertices are cut but get no face.
/// Unselected vertices survive unchanged as `Ignored`.
pub fn truncate(mesh: &Mesh, amount: f64, vertices: Selection) -> MeshResult<Mesh> {
    let included = vertices.vertices(mesh);
    let mut b = MeshBuilder::new();
    // Cut point on `h` near its destination.
    let cut = |b: &mut MeshBuilder, h: HalfedgeId| {
        b.point(Key::Edge(h.0), Role::New, || mesh.point_along(h, amount))
    };
    // Cut point near the origin of `h`, shared with the twin when there is one.
    let cut_far = |b: &mut MeshBuilder, h: HalfedgeId| match mesh.pair(h) {
        Some(p) => cut(b, p),
        None => b.point(Key::EdgeFar(h.0), Role::New, || mesh.point_along(h, 1.0 - amount)),
    };

    for f in 0..mesh.face_count() {
        let mut lp = Vec::new();
        for h in mesh.face_halfedges(FaceId(f)) {
            let v = mesh.halfedge(h).vertex;
            if included[v.0] {
                lp.push(cut(&mut b, h));
                lp.push(cut_far(&mut b, mesh.next(h)));
            } else {
                lp.push(b.point(Key::Vertex(v.0), Role::Ignored, || mesh.position(v)));
            }
        }
        if lp.len() >= 3 {
            b.face(lp, Role::Existing);
        }
    }

    for (i, _) in included.iter().enumerate().filter(|(_, &keep)| keep) {
        let he = mesh.vertex_halfedges(VertexId(i));
        if he.len() < 3 || he.iter().any(|&h| mesh.pair(h).is_none()) {
            continue;
        }
        let lp = he.into_iter().map(|h| cut(&mut b, h)).collect();
        b.face(lp, Role::New);
    }
    b.finish("truncate", mesh)
}
