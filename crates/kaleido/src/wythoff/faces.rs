//! Stages 9 and 10: face incidence and edge lists.
//!
//! For orientable polyhedra the two faces at a directed edge are the one on
//! the left and the one on the right. For one-sided polyhedra the vertex
//! figure is a papillon (crossed parallelogram); there the two faces are the
//! side face and the diagonal face, and the walk alternates accordingly.

use nalgebra::Vector3;
use std::f64::consts::PI;
use tracing::warn;

use crate::cfg::POLAR_EPS;
use crate::error::{WythoffError, WythoffResult};

use super::types::SchwarzDecomposition;
use super::vertices::VertexSet;

const UNSET: usize = usize::MAX;

/// Output of the face stage.
#[derive(Clone, Debug)]
pub struct FaceSet {
    pub poles: Vec<Vector3<f64>>,
    pub types: Vec<usize>,
    pub incidence: Vec<Vec<usize>>,
}

/// Output of the edge stage.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
    pub edges: Vec<(usize, usize)>,
    pub dual_edges: Vec<(usize, usize)>,
    pub anti: Vec<bool>,
}

/// Polar reciprocal of the plane through `a`, `b`, `c`.
///
/// Returns `p` with `p.a = p.b = p.c = r`, or the unit normal when the plane
/// passes through the origin.
pub fn polar_reciprocal(
    r: f64,
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    c: &Vector3<f64>,
) -> Vector3<f64> {
    let p = (b - a).cross(&(c - a));
    let k = p.dot(a);
    if k.abs() < POLAR_EPS {
        p / p.norm()
    } else {
        p * (r / k)
    }
}

pub fn calc_faces(
    text: &str,
    d: &SchwarzDecomposition,
    vs: &VertexSet,
) -> WythoffResult<FaceSet> {
    let m = d.valency();
    let n_vertices = vs.vertices.len();
    // Hemi faces pass through the center; the in-radius comes from type 1.
    // Dihedral `2 2|r` is flagged hemi but keeps a single type once the
    // digons are stripped.
    let h = usize::from(d.hemi && d.face_types() > 1);
    let min_r = 1.0 / ((PI / d.sides[h]).tan() * d.gamma[h].tan()).abs();
    let adj = &vs.adjacency;
    let v = &vs.vertices;

    let mut incidence = vec![vec![UNSET; m]; n_vertices];
    let mut poles = Vec::with_capacity(d.face_count);
    let mut types = Vec::with_capacity(d.face_count);
    let overflow = |msg: &str| WythoffError::overflow(text, "faces", msg.to_string());

    for i in 0..n_vertices {
        for j in 0..m {
            if incidence[i][j] != UNSET {
                continue;
            }
            let f = poles.len();
            if f == d.face_count {
                return Err(overflow("too many faces"));
            }
            incidence[i][j] = f;
            poles.push(polar_reciprocal(
                min_r,
                &v[i],
                &v[adj[i][j]],
                &v[adj[i][(j + 1) % m]],
            ));
            let offset = if adj[i][0] < adj[i][m - 1] {
                j as isize
            } else {
                -(j as isize) - 2
            };
            let slot = (vs.first_rot[i] as isize + offset).rem_euclid(m as isize) as usize;
            types.push(d.rot[slot]);
            let pap = if d.one_sided {
                (vs.first_rot[i] + j) % 2
            } else {
                0
            };

            let (mut at, mut slot) = (i, j);
            let mut steps = 0;
            loop {
                let from = at;
                at = adj[from][slot];
                if at == i {
                    break;
                }
                steps += 1;
                if steps > n_vertices * m {
                    return Err(overflow("face walk does not close"));
                }
                slot = adj[at]
                    .iter()
                    .position(|&x| x == from)
                    .ok_or_else(|| overflow("asymmetric vertex adjacency"))?;
                if d.one_sided && (slot + vs.first_rot[at]) % 2 == pap {
                    incidence[at][slot] = f;
                    slot = (slot + 1) % m;
                } else {
                    slot = (slot + m - 1) % m;
                    incidence[at][slot] = f;
                }
            }
        }
    }

    if poles.len() < d.face_count {
        warn!(
            symbol = text,
            found = poles.len(),
            expected = d.face_count,
            "fewer faces than predicted"
        );
    }
    Ok(FaceSet {
        poles,
        types,
        incidence,
    })
}

/// Each undirected edge once (`i < j`) with the dual edge between the two
/// faces sharing it. Hemi polyhedra orient each dual edge as a ray towards
/// its ideal vertex and record the direction parity in `anti`.
pub fn calc_edges(
    text: &str,
    d: &SchwarzDecomposition,
    vs: &VertexSet,
    fs: &FaceSet,
) -> WythoffResult<EdgeSet> {
    let m = d.valency();
    let mut out = EdgeSet::default();
    for (i, nbrs) in vs.adjacency.iter().enumerate() {
        for (j, &t) in nbrs.iter().enumerate() {
            if i >= t {
                continue;
            }
            if out.edges.len() == d.edge_count {
                return Err(WythoffError::overflow(text, "edges", "too many edges"));
            }
            out.edges.push((i, t));
            let prev = fs.incidence[i][(j + m - 1) % m];
            let cur = fs.incidence[i][j];
            if d.hemi {
                let (a, b) = if fs.types[cur] != 0 {
                    (cur, prev)
                } else {
                    (prev, cur)
                };
                out.dual_edges.push((a, b));
                out.anti.push(fs.poles[a].dot(&fs.poles[b]) > 0.0);
            } else {
                out.dual_edges.push((prev, cur));
            }
        }
    }
    Ok(out)
}
