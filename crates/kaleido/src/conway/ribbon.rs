use std::collections::HashMap;

use nalgebra::Vector3;

use crate::error::MeshResult;
use crate::mesh::{HalfedgeId, Mesh, Role, VertexId};

use super::{Key, MeshBuilder};

/// Replaces the surface by a band of width `2 * offset` along every edge.
///
/// Each vertex becomes a small face (`New`) whose corners sit inside the
/// adjacent faces, where the two incident edges, shifted by `offset` in the
/// face plane, meet. Each interior edge becomes a quad between the corners
/// of its two faces (`Existing`); the original faces turn into holes.
///
/// With `boundaries`, open vertices are closed by two extra points outside
/// the mesh and boundary edges get quads too. `smooth` (clamped to `0..=0.5`)
/// splits every edge quad into three by inserting points that fraction of
/// the way in from each end (`NewAlt` for the end pieces).
pub fn ribbon(mesh: &Mesh, offset: f64, boundaries: bool, smooth: f64) -> MeshResult<Mesh> {
    let smooth = smooth.clamp(0.0, 0.5);
    let mut b = MeshBuilder::new();
    let corner = |b: &mut MeshBuilder, h: HalfedgeId| {
        b.point(Key::Edge(h.0), Role::New, || corner_point(mesh, h, offset))
    };
    // Per open vertex: (point behind it on the incoming boundary edge,
    // point ahead of it on the outgoing one).
    let mut outside: HashMap<usize, (usize, usize)> = HashMap::new();

    for i in 0..mesh.vertex_count() {
        let v = VertexId(i);
        let he = mesh.vertex_halfedges(v);
        let (Some(&first), Some(&last)) = (he.first(), he.last()) else {
            continue;
        };
        let open = mesh.pair(last).is_none();
        if open && !boundaries {
            continue;
        }
        let mut lp: Vec<usize> = he.iter().map(|&h| corner(&mut b, h)).collect();
        if open {
            let normal = mesh.vertex_normal(v);
            let at = mesh.position(v);
            let (back, ahead) = (mesh.edge_vector(last), mesh.edge_vector(mesh.next(first)));
            let behind = b.push(
                at - unit(back) * offset - unit(normal.cross(&back)) * offset,
                Role::NewAlt,
            );
            let ahead = b.push(
                at + unit(ahead) * offset - unit(normal.cross(&ahead)) * offset,
                Role::NewAlt,
            );
            lp.extend([behind, ahead]);
            outside.insert(i, (behind, ahead));
        }
        if lp.len() >= 3 {
            b.face(lp, Role::New);
        }
    }

    for h in mesh.edges() {
        let (ag, zg) = match mesh.pair(h) {
            Some(p) => (corner(&mut b, p), corner(&mut b, mesh.prev(p))),
            None => {
                let a = mesh.from_vertex(h).0;
                let z = mesh.halfedge(h).vertex.0;
                match (outside.get(&a), outside.get(&z)) {
                    (Some(&(_, ahead)), Some(&(behind, _))) => (ahead, behind),
                    _ => continue,
                }
            }
        };
        let zf = corner(&mut b, h);
        let af = corner(&mut b, mesh.prev(h));
        if smooth > 0.0 {
            let (pzf, paf) = (b.position(zf), b.position(af));
            let (pag, pzg) = (b.position(ag), b.position(zg));
            let n0 = b.push(pzf + (paf - pzf) * smooth, Role::NewAlt);
            let n1 = b.push(paf + (pzf - paf) * smooth, Role::NewAlt);
            let n2 = b.push(pag + (pzg - pag) * smooth, Role::NewAlt);
            let n3 = b.push(pzg + (pag - pzg) * smooth, Role::NewAlt);
            b.face(vec![n0, n1, n2, n3], Role::Existing);
            b.face(vec![zf, n0, n3, zg], Role::NewAlt);
            b.face(vec![n1, af, ag, n2], Role::NewAlt);
        } else {
            b.face(vec![zf, af, ag, zg], Role::Existing);
        }
    }
    b.finish("ribbon", mesh)
}

/// Where the two edges at the destination of `h`, shifted inward by
/// `offset` in the plane of `h`'s face, meet.
fn corner_point(mesh: &Mesh, h: HalfedgeId, offset: f64) -> Vector3<f64> {
    let n = mesh.face_normal(mesh.halfedge(h).face);
    let d1 = mesh.edge_vector(h);
    let d2 = mesh.edge_vector(mesh.next(h));
    let at = mesh.position(mesh.halfedge(h).vertex);
    closest_point(
        at + unit(n.cross(&d1)) * offset,
        d1,
        at + unit(n.cross(&d2)) * offset,
        d2,
    )
}

/// Midpoint of the shortest segment between two lines; the midpoint of the
/// anchors when the lines are parallel.
fn closest_point(p1: Vector3<f64>, d1: Vector3<f64>, p2: Vector3<f64>, d2: Vector3<f64>) -> Vector3<f64> {
    let w = p1 - p2;
    let (a, b, c) = (d1.dot(&d1), d1.dot(&d2), d2.dot(&d2));
    let (d, e) = (d1.dot(&w), d2.dot(&w));
    let den = a * c - b * b;
    if den.abs() <= f64::EPSILON * a * c {
        return (p1 + p2) / 2.0;
    }
    let s = (b * e - c * d) / den;
    let t = (a * e - b * d) / den;
    (p1 + d1 * s + p2 + d2 * t) / 2.0
}

#[inline]
fn unit(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
}
