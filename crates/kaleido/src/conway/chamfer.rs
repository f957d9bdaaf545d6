use nalgebra::Vector3;

use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder};

/// Bevels every edge.
///
/// Each face shrinks toward its centroid by `ratio` (`Existing`); each
/// interior edge becomes a hexagon joining its two endpoints to the four
/// nearby inset corners (`New`). Old vertices then slide along their normals
/// onto the plane of each adjacent hexagon; when a vertex borders several
/// hexagons the last one processed wins.
pub fn chamfer(mesh: &Mesh, ratio: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    // Old vertices survive only as hexagon tips, i.e. on interior edges.
    let mut tip = vec![false; mesh.vertex_count()];
    for h in mesh.edges().into_iter().filter(|&h| mesh.pair(h).is_some()) {
        tip[mesh.from_vertex(h).0] = true;
        tip[mesh.halfedge(h).vertex.0] = true;
    }
    for (i, _) in tip.iter().enumerate().filter(|(_, &t)| t) {
        b.point(Key::Vertex(i), Role::Existing, || mesh.position(VertexId(i)));
    }

    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let c = mesh.centroid(f);
        let lp = mesh
            .face_halfedges(f)
            .into_iter()
            .map(|h| {
                b.point(Key::Edge(h.0), Role::New, || {
                    mesh.position(mesh.halfedge(h).vertex).lerp(&c, ratio)
                })
            })
            .collect();
        b.face(lp, Role::Existing);
    }

    let inset = |b: &MeshBuilder, h: HalfedgeId| b.get(Key::Edge(h.0));
    let mut planes = Vec::new();
    for h in mesh.edges() {
        let Some(p) = mesh.pair(h) else {
            continue;
        };
        let (a, z) = (mesh.from_vertex(h), mesh.halfedge(h).vertex);
        let corners = [
            inset(&b, h),
            inset(&b, mesh.prev(h)),
            inset(&b, p),
            inset(&b, mesh.prev(p)),
        ];
        let tips = (b.get(Key::Vertex(a.0)), b.get(Key::Vertex(z.0)));
        let ([Some(zf), Some(af), Some(ag), Some(zg)], (Some(ai), Some(zi))) = (corners, tips)
        else {
            continue;
        };
        b.face(vec![zi, zf, af, ai, ag, zg], Role::New);
        planes.push(([(a, ai), (z, zi)], [zf, af, ag]));
    }

    for (ends, [p0, p1, p2]) in planes {
        let (p0, p1, p2) = (b.position(p0), b.position(p1), b.position(p2));
        let normal = (p1 - p0).cross(&(p2 - p0));
        for (v, i) in ends {
            if let Some(at) = onto_plane(mesh, v, p0, normal) {
                b.move_point(i, at);
            }
        }
    }
    b.finish("chamfer", mesh)
}

/// Moves `v` along its vertex normal onto the plane through `origin`.
fn onto_plane(
    mesh: &Mesh,
    v: VertexId,
    origin: Vector3<f64>,
    normal: Vector3<f64>,
) -> Option<Vector3<f64>> {
    let start = mesh.position(v);
    let dir = mesh.vertex_normal(v);
    let denom = dir.dot(&normal);
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let t = (origin - start).dot(&normal) / denom;
    Some(start + dir * t)
}
