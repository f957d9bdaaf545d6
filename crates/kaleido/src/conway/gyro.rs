use crate::error::MeshResult;
use crate::mesh::{FaceId, Mesh, Role};

use super::{Key, MeshBuilder};

/// Chiral pentagonal subdivision.
///
/// Each half-edge `u -> v` of face `F` yields the pentagon
/// `[center(F), near u, near v, v, near v on the next edge]`, where "near"
/// points sit at `ratio` along the edge from the named end. The winding
/// fixes the handedness. Face centers move by `offset` along the face
/// normal, old vertices by `-offset` along the vertex normal.
pub fn gyro(mesh: &Mesh, ratio: f64, offset: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let center = b.point(Key::Face(i), Role::New, || {
            mesh.centroid(f) + mesh.face_normal(f) * offset
        });
        let he = mesh.face_halfedges(f);
        let odd = he.len() % 2 == 1;
        for (j, &h) in he.iter().enumerate() {
            let v = mesh.halfedge(h).vertex;
            let seed = b.point(Key::Vertex(v.0), Role::Existing, || {
                mesh.position(v) - mesh.vertex_normal(v) * offset
            });
            let near_v = b.point(Key::Edge(h.0), Role::NewAlt, || mesh.point_along(h, ratio));

            let next = mesh.next(h);
            let after = match mesh.pair(next) {
                Some(p) => b.point(Key::Edge(p.0), Role::NewAlt, || mesh.point_along(p, ratio)),
                None => b.point(Key::EdgeFar(next.0), Role::NewAlt, || {
                    mesh.point_along(next, 1.0 - ratio)
                }),
            };
            let near_u = match mesh.pair(h) {
                Some(p) => b.point(Key::Edge(p.0), Role::NewAlt, || mesh.point_along(p, ratio)),
                None => b.point(Key::EdgeFar(h.0), Role::NewAlt, || {
                    mesh.point_along(h, 1.0 - ratio)
                }),
            };

            let role = if j % 2 == 0 || odd {
                Role::New
            } else {
                Role::NewAlt
            };
            b.face(vec![center, near_u, near_v, seed, after], role);
        }
    }
    b.finish("gyro", mesh)
}
