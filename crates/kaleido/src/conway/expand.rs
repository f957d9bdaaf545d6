use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder};

/// Cantellation (ambo applied twice).
///
/// Every face shrinks toward its centroid by `ratio` (`Existing`), every
/// interior vertex becomes the loop of the corners around it (`New`) and
/// every interior edge a quad between its two shrunk faces (`NewAlt`).
pub fn expand(mesh: &Mesh, ratio: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let c = mesh.centroid(f);
        let lp = mesh
            .face_halfedges(f)
            .into_iter()
            .map(|h| {
                b.point(Key::Edge(h.0), Role::Existing, || {
                    mesh.position(mesh.halfedge(h).vertex).lerp(&c, ratio)
                })
            })
            .collect();
        b.face(lp, Role::Existing);
    }

    let corner = |b: &MeshBuilder, h: HalfedgeId| b.get(Key::Edge(h.0));
    for i in 0..mesh.vertex_count() {
        let he = mesh.vertex_halfedges(VertexId(i));
        if he.len() < 3 || he.iter().any(|&h| mesh.pair(h).is_none()) {
            continue;
        }
        let lp: Option<Vec<usize>> = he.iter().map(|&h| corner(&b, h)).collect();
        if let Some(lp) = lp {
            b.face(lp, Role::New);
        }
    }

    for h in mesh.edges() {
        let Some(p) = mesh.pair(h) else {
            continue;
        };
        let quad = [h, mesh.prev(h), p, mesh.prev(p)].map(|e| corner(&b, e));
        if let [Some(zf), Some(af), Some(ag), Some(zg)] = quad {
            b.face(vec![zf, af, ag, zg], Role::NewAlt);
        }
    }
    b.finish("expand", mesh)
}
