use crate::error::MeshResult;
use crate::mesh::{Mesh, Role};

use super::{offset, MeshBuilder};

/// Thickens the surface into a shell.
///
/// The top sheet is the input moved by `distance` along the vertex normals,
/// with its original winding (`New`). The bottom sheet is the input itself,
/// reversed (`Existing`). With `symmetric` the two sheets sit at
/// `+distance/2` and `-distance/2` instead. Every boundary edge is bridged by
/// a quad (`NewAlt`), so a closed input yields two closed shells and an open
/// one a single closed shell.
pub fn extrude(mesh: &Mesh, distance: f64, symmetric: bool) -> MeshResult<Mesh> {
    let (top, bottom) = if symmetric {
        (offset(mesh, distance / 2.0)?, offset(mesh, -distance / 2.0)?)
    } else {
        (offset(mesh, distance)?, mesh.clone())
    };
    let n = mesh.vertex_count();
    let (bottom_pos, faces) = bottom.to_face_lists();
    let (top_pos, _) = top.to_face_lists();

    let mut b = MeshBuilder::new();
    for p in bottom_pos {
        b.push(p, Role::Existing);
    }
    for p in top_pos {
        b.push(p, Role::New);
    }
    for lp in &faces {
        b.face(lp.iter().rev().copied().collect(), Role::Existing);
    }
    for lp in &faces {
        b.face(lp.iter().map(|&v| v + n).collect(), Role::New);
    }
    for h in mesh.boundary_halfedges() {
        let (a, z) = (mesh.from_vertex(h).0, mesh.halfedge(h).vertex.0);
        b.face(vec![a, z, z + n, a + n], Role::NewAlt);
    }
    b.finish("extrude", mesh)
}
