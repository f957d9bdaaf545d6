use tracing::debug;

use crate::error::MeshResult;
use crate::mesh::{Mesh, VertexId};

/// Moves every vertex by `distance` along its normal. Topology and roles are kept.
pub fn offset(mesh: &Mesh, distance: f64) -> MeshResult<Mesh> {
    offset_per_vertex(mesh, &vec![distance; mesh.vertex_count()])
}

/// Per-vertex displacement along the vertex normal. Vertices past the end of
/// `weights` stay put.
pub fn offset_per_vertex(mesh: &Mesh, weights: &[f64]) -> MeshResult<Mesh> {
    let positions = (0..mesh.vertex_count())
        .map(|i| {
            let v = VertexId(i);
            let w = weights.get(i).copied().unwrap_or(0.0);
            mesh.position(v) + mesh.vertex_normal(v) * w
        })
        .collect();
    let (_, faces) = mesh.to_face_lists();
    let out = Mesh::with_roles(
        positions,
        &faces,
        &mesh.face_roles(),
        &mesh.vertex_roles(),
        &mesh.cfg(),
    )?;
    debug!(op = "offset", v = out.vertex_count(), f = out.face_count(), "conway");
    Ok(out)
}
