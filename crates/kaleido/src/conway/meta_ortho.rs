use crate::error::MeshResult;
use crate::mesh::{FaceId, HalfedgeId, Mesh, Role};

use super::{undirected, Key, MeshBuilder};

/// Join applied twice: every `n`-gon splits into `n` quads, each over the
/// centroid, two edge midpoints and the corner between them.
pub fn ortho(mesh: &Mesh) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    let mid = |b: &mut MeshBuilder, h: HalfedgeId| {
        b.point(Key::Edge(undirected(mesh, h)), Role::NewAlt, || mesh.midpoint(h))
    };
    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let c = b.point(Key::Face(i), Role::New, || mesh.centroid(f));
        let he = mesh.face_halfedges(f);
        let even = he.len() % 2 == 0;
        for (k, &h) in he.iter().enumerate() {
            let v = mesh.halfedge(h).vertex;
            let corner = b.point(Key::Vertex(v.0), Role::Existing, || mesh.position(v));
            let quad = vec![c, mid(&mut b, h), corner, mid(&mut b, mesh.next(h))];
            let role = if even && k % 2 == 1 {
                Role::NewAlt
            } else {
                Role::New
            };
            b.face(quad, role);
        }
    }
    b.finish("ortho", mesh)
}

/// Kis over join: each `n`-gon becomes `2n` triangles around its centroid,
/// which is raised by `offset` along the face normal.
pub fn meta(mesh: &Mesh, offset: f64) -> MeshResult<Mesh> {
    let mut b = MeshBuilder::new();
    let mid = |b: &mut MeshBuilder, h: HalfedgeId| {
        b.point(Key::Edge(undirected(mesh, h)), Role::NewAlt, || mesh.midpoint(h))
    };
    for i in 0..mesh.face_count() {
        let f = FaceId(i);
        let c = b.point(Key::Face(i), Role::New, || {
            mesh.centroid(f) + mesh.face_normal(f) * offset
        });
        for h in mesh.face_halfedges(f) {
            let (a, z) = (mesh.from_vertex(h), mesh.halfedge(h).vertex);
            let u = b.point(Key::Vertex(a.0), Role::Existing, || mesh.position(a));
            let v = b.point(Key::Vertex(z.0), Role::Existing, || mesh.position(z));
            let m = mid(&mut b, h);
            b.face(vec![c, u, m], Role::New);
            b.face(vec![c, m, v], Role::NewAlt);
        }
    }
    b.finish("meta", mesh)
}
