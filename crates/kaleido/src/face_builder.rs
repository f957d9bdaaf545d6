//! Polygon loops and fan triangulation for solved polyhedra.
//!
//! Purpose
//! - Recover each face as an ordered vertex loop by walking the vertex/face
//!   incidence of a `Polyhedron`, oriented so the Newell normal agrees with
//!   the face pole.
//! - Fan-triangulate the loops. Star faces (`n/d` with `1 < d < n - 1`) fan
//!   from an auxiliary center vertex; all such centers are appended to the
//!   position list in one pass before any triangle is emitted, so indices
//!   stay stable across faces.

use nalgebra::Vector3;

use crate::cfg::FanCfg;
use crate::error::{WythoffError, WythoffResult};
use crate::rational::Rational;
use crate::wythoff::Polyhedron;

/// How a polygon face is triangulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceKind {
    /// `{n}` or `{n/(n-1)}`: a plain fan covers it.
    ConvexLike,
    /// Self-intersecting star; needs an auxiliary center.
    Concave,
}

/// One face of a solved polyhedron.
#[derive(Clone, Debug)]
pub struct PolygonFace {
    pub vertices: Vec<usize>,
    pub face_type: usize,
    /// Side count as a fraction, e.g. `5/2` for a pentagram.
    pub configuration: Rational,
    /// Foot of the perpendicular from the origin onto the face plane.
    pub center: Vector3<f64>,
}

impl PolygonFace {
    pub fn kind(&self) -> FaceKind {
        let n = self.configuration.numerator();
        let d = self.configuration.denominator();
        if d == 1 || d == n - 1 {
            FaceKind::ConvexLike
        } else {
            FaceKind::Concave
        }
    }

    /// Expected corner count (the numerator of the configuration).
    #[inline]
    pub fn corners(&self) -> usize {
        self.configuration.numerator().max(0) as usize
    }
}

/// Builds the polygon loop of every face.
pub fn build_faces(p: &Polyhedron) -> WythoffResult<Vec<PolygonFace>> {
    let g = &p.geometry;
    let text = p.symbol.text.as_str();
    let m = p.decomposition.valency();
    let n_faces = g.face_poles.len();

    // Seed: first (vertex, slot) bordering each face.
    let mut seeds = vec![None; n_faces];
    for (v, slots) in g.face_incidence.iter().enumerate() {
        for (s, &f) in slots.iter().enumerate() {
            if seeds[f].is_none() {
                seeds[f] = Some((v, s));
            }
        }
    }

    let lost = |f: usize, msg: &str| {
        WythoffError::overflow(text, "face loops", format!("face {f}: {msg}"))
    };
    let mut faces = Vec::with_capacity(n_faces);
    for (f, seed) in seeds.into_iter().enumerate() {
        let (v0, s0) = seed.ok_or_else(|| lost(f, "no incident vertex"))?;
        let configuration = Rational::from_float(p.face_sides(f));
        let corners = configuration.numerator().max(3) as usize;

        let mut verts = vec![v0];
        let mut visited = vec![false; g.vertices.len()];
        visited[v0] = true;
        let (mut prev, mut cur) = (v0, g.adjacency[v0][s0]);
        while cur != v0 && verts.len() < corners {
            if visited[cur] {
                return Err(lost(f, "walk revisits a vertex"));
            }
            visited[cur] = true;
            verts.push(cur);
            let inc = &g.face_incidence[cur];
            let nbrs = &g.adjacency[cur];
            let k = nbrs
                .iter()
                .position(|&x| x == prev)
                .ok_or_else(|| lost(f, "asymmetric adjacency"))?;
            let next = if inc[k] == f {
                nbrs[(k + 1) % m]
            } else if inc[(k + m - 1) % m] == f {
                nbrs[(k + m - 1) % m]
            } else {
                return Err(lost(f, "edge does not border the face"));
            };
            prev = cur;
            cur = next;
        }

        let pole = g.face_poles[f];
        if newell(&g.vertices, &verts).dot(&pole) < 0.0 {
            verts[1..].reverse();
        }
        let dir = pole.normalize();
        faces.push(PolygonFace {
            center: dir * dir.dot(&g.vertices[v0]),
            vertices: verts,
            face_type: g.face_types[f],
            configuration,
        });
    }
    Ok(faces)
}

/// Plain index loops, the mesh exchange format.
pub fn face_lists(faces: &[PolygonFace]) -> Vec<Vec<usize>> {
    faces.iter().map(|f| f.vertices.clone()).collect()
}

/// Triangles over the original positions plus appended auxiliary centers.
#[derive(Clone, Debug)]
pub struct FanMesh {
    pub positions: Vec<Vector3<f64>>,
    pub triangles: Vec<[usize; 3]>,
    /// Index of the first auxiliary center in `positions`.
    pub aux_start: usize,
}

pub fn triangulate(positions: &[Vector3<f64>], faces: &[PolygonFace], cfg: &FanCfg) -> FanMesh {
    let aux_start = positions.len();
    let mut out = positions.to_vec();
    let centers: Vec<Option<usize>> = faces
        .iter()
        .map(|f| {
            let needs = f.kind() == FaceKind::Concave || cfg.center_convex;
            needs.then(|| {
                out.push(f.center);
                out.len() - 1
            })
        })
        .collect();

    let mut triangles = Vec::new();
    for (face, center) in faces.iter().zip(centers) {
        let v = &face.vertices;
        let n = v.len();
        if n < 3 {
            continue;
        }
        match center {
            Some(c) => {
                for i in 0..n {
                    let (a, b) = (v[i], v[(i + 1) % n]);
                    triangles.push([c, a, b]);
                    if cfg.double_sided && face.kind() == FaceKind::Concave {
                        triangles.push([c, b, a]);
                    }
                }
            }
            None => {
                for i in 1..n - 1 {
                    triangles.push([v[0], v[i], v[i + 1]]);
                }
            }
        }
    }
    FanMesh {
        positions: out,
        triangles,
        aux_start,
    }
}

fn newell(points: &[Vector3<f64>], loop_: &[usize]) -> Vector3<f64> {
    let n = loop_.len();
    (0..n).fold(Vector3::zeros(), |acc, i| {
        acc + points[loop_[i]].cross(&points[loop_[(i + 1) % n]])
    })
}
