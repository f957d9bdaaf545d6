use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder};

/// Truncated ambo: every edge becomes a quad, every `n`-gon a `2n`-gon and
/// every interior vertex of valence `d` a `2d`-gon.
///
/// Each face carries two points per side, `ratio` in from either end and
/// pulled `ratio` of the way toward the centroid.
pub fn bevel(mesh: &Mesh, ratio: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let c = mesh.centroid(f);
        let mut lp = Vec::new();
        for h in mesh.face_halfedges(f) {
            lp.push(b.point(Key::EdgeFar(h.0), Role::New, || {
                mesh.point_along(h, 1.0 - ratio).lerp(&c, ratio)
            }));
            lp.push(b.point(Key::Edge(h.0), Role::New, || {
                mesh.point_along(h, ratio).lerp(&c, ratio)
            }));
        }
        b.face(lp, Role::Existing);
    }

    // Point of `h` near its destination, and near its origin.
    let near = |b: &MeshBuilder, h: HalfedgeId| b.get(Key::Edge(h.0));
    let far = |b: &MeshBuilder, h: HalfedgeId| b.get(Key::EdgeFar(h.0));

    for i in 0..mesh.vertex_count() {
        let he = mesh.vertex_halfedges(VertexId(i));
        if he.len() < 3 || he.iter().any(|&h| mesh.pair(h).is_none()) {
            continue;
        }
        let lp: Option<Vec<usize>> = he
            .iter()
            .flat_map(|&h| [far(&b, mesh.next(h)), near(&b, h)])
            .collect();
        if let Some(lp) = lp {
            b.face(lp, Role::New);
        }
    }

    for h in mesh.edges() {
        let Some(p) = mesh.pair(h) else {
            continue;
        };
        if let (Some(zf), Some(af), Some(ag), Some(zg)) =
            (near(&b, h), far(&b, h), near(&b, p), far(&b, p))
        {
            b.face(vec![zf, af, ag, zg], Role::NewAlt);
        }
    }
    b.finish("bevel", mesh)
}
