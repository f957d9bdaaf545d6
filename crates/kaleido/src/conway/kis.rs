use crate::error::MeshResult;
use crate::mesh::{FaceId, Mesh, Role};

use super::{Key, MeshBuilder, Selection};

/// Raises a pyramid on every selected face.
///
/// The apex sits at `centroid + normal * offset`. Unselected faces are kept
/// as they are and tagged `Ignored`. On even-sided faces the pyramid
/// triangles alternate `New`/`NewAlt`.
pub fn kis(mesh: &Mesh, offset: f64, faces: Selection) -> MeshResult<Mesh> {
    let included = faces.faces(mesh);
    let mut b = MeshBuilder::new();
    for v in mesh.vertices() {
        b.push(v.position, Role::Existing);
    }

    for (i, &keep) in included.iter().enumerate() {
        let f = FaceId(i);
        if !keep {
            let lp = mesh.face_vertices(f).into_iter().map(|v| v.0).collect();
            b.face(lp, Role::Ignored);
            continue;
        }
        let apex = b.point(Key::Face(i), Role::New, || {
            mesh.centroid(f) + mesh.face_normal(f) * offset
        });
        let he = mesh.face_halfedges(f);
        let even = he.len() % 2 == 0;
        for (k, &h) in he.iter().enumerate() {
            let role = if even && k % 2 == 1 {
                Role::NewAlt
            } else {
                Role::New
            };
            let tri = vec![mesh.from_vertex(h).0, mesh.halfedge(h).vertex.0, apex];
            b.face(tri, role);
        }
    }
    b.finish("kis", mesh)
}
