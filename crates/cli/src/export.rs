//! JSON documents written by the CLI.

use anyhow::{Context, Result};
use kaleido::api::{Mesh, Polyhedron};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Counts and names of a solved polyhedron.
#[derive(Debug, Serialize)]
pub struct SolveSummary {
    pub symbol: String,
    pub index: Option<usize>,
    pub name: String,
    pub dual_name: String,
    pub configuration: String,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub chi: i64,
    pub density: i64,
    pub hemi: bool,
    pub one_sided: bool,
}

impl SolveSummary {
    pub fn new(p: &Polyhedron) -> Self {
        let d = &p.decomposition;
        Self {
            symbol: p.symbol.to_string(),
            index: p.symbol.index,
            name: p.name.clone(),
            dual_name: p.dual_name.clone(),
            configuration: p.configuration.clone(),
            vertices: d.vertex_count,
            edges: d.edge_count,
            faces: d.face_count,
            chi: d.chi,
            density: d.density,
            hemi: d.hemi,
            one_sided: d.one_sided,
        }
    }
}

/// Indexed face-vertex mesh with per-element roles.
#[derive(Debug, Serialize)]
pub struct MeshExport {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
    pub vertex_roles: Vec<&'static str>,
    pub face_roles: Vec<&'static str>,
    pub metadata: serde_json::Value,
}

impl MeshExport {
    pub fn new(mesh: &Mesh, metadata: serde_json::Value) -> Self {
        let (positions, faces) = mesh.to_face_lists();
        Self {
            vertices: positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
            faces,
            vertex_roles: mesh.vertex_roles().into_iter().map(|r| r.name()).collect(),
            face_roles: mesh.face_roles().into_iter().map(|r| r.name()).collect(),
            metadata,
        }
    }
}

/// Pretty JSON to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}
