//! Stage 8: vertex coordinates by breadth-first rotation.
//!
//! Neighbors of a vertex are obtained from its BFS parent by a cyclic
//! sequence of rotations about the vertex axis; `first_rot[i]` is the first
//! step of that sequence at vertex `i`. For non-snub polyhedra the sense of
//! rotation flips between parent and child, so such children fill their
//! neighbor list from the end.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::cfg::SolverCfg;
use crate::error::{WythoffError, WythoffResult};

use super::types::SchwarzDecomposition;

/// Output of the vertex stage.
#[derive(Clone, Debug)]
pub struct VertexSet {
    pub vertices: Vec<Vector3<f64>>,
    pub adjacency: Vec<Vec<usize>>,
    pub first_rot: Vec<usize>,
}

/// Rotates `v` about the unit `axis` by `angle` (right-handed).
#[inline]
pub fn rotate(v: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let a = axis * v.dot(axis);
    a + (v - a) * angle.cos() + axis.cross(v) * angle.sin()
}

#[inline]
fn same(a: &Vector3<f64>, b: &Vector3<f64>, eps: f64) -> bool {
    (a - b).iter().all(|c| c.abs() < eps)
}

pub fn calc_vertices(
    text: &str,
    d: &SchwarzDecomposition,
    cfg: &SolverCfg,
) -> WythoffResult<VertexSet> {
    let m = d.valency();
    let expected = d.vertex_count;
    if expected < 2 || m < 2 {
        return Err(WythoffError::overflow(
            text,
            "vertices",
            format!("degenerate decomposition: V = {expected}, M = {m}"),
        ));
    }

    let cosa = (PI / d.sides[0]).cos() / d.gamma[0].sin();
    let mut vertices = vec![
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(
            2.0 * cosa * (1.0 - cosa * cosa).sqrt(),
            0.0,
            2.0 * cosa * cosa - 1.0,
        ),
    ];
    let mut adjacency = vec![vec![0usize; m]; 2];
    let mut first_rot = vec![0usize; 2];
    // Fill the neighbor list from the end (clockwise sense).
    let mut backward = vec![false; 2];
    adjacency[0][0] = 1;
    match &d.snub {
        None => {
            backward[1] = true;
            adjacency[1][m - 1] = 0;
        }
        Some(snub) => {
            first_rot[1] = if snub[m - 1] { 0 } else { m - 1 };
            adjacency[1][0] = 0;
        }
    }

    let mut i = 0;
    while i < vertices.len() {
        let (steps, sign): (Vec<usize>, f64) = if backward[i] {
            ((0..m - 1).rev().collect(), -1.0)
        } else {
            ((1..m).collect(), 1.0)
        };
        let mut k = first_rot[i];
        for j in steps {
            let from = if backward[i] {
                adjacency[i][j + 1]
            } else {
                adjacency[i][j - 1]
            };
            let temp = rotate(&vertices[from], &vertices[i], sign * 2.0 * d.gamma[d.rot[k]]);
            let last = k;
            k = (k + 1) % m;

            let found = vertices.iter().position(|v| same(v, &temp, cfg.dedup_eps));
            let target = match found {
                Some(t) => t,
                None => {
                    if vertices.len() == expected {
                        return Err(WythoffError::overflow(
                            text,
                            "vertices",
                            format!("too many vertices (expected {expected})"),
                        ));
                    }
                    let new = vertices.len();
                    vertices.push(temp);
                    adjacency.push(vec![0; m]);
                    match &d.snub {
                        None => {
                            first_rot.push(k);
                            if backward[i] {
                                backward.push(false);
                                adjacency[new][0] = i;
                            } else {
                                backward.push(true);
                                adjacency[new][m - 1] = i;
                            }
                        }
                        Some(snub) => {
                            let start = if !snub[last] {
                                last
                            } else if !snub[k] {
                                (k + 1) % m
                            } else {
                                k
                            };
                            first_rot.push(start);
                            backward.push(false);
                            adjacency[new][0] = i;
                        }
                    }
                    new
                }
            };
            adjacency[i][j] = target;
        }
        i += 1;
    }

    if vertices.len() != expected {
        return Err(WythoffError::overflow(
            text,
            "vertices",
            format!("found {} of {expected} vertices", vertices.len()),
        ));
    }
    Ok(VertexSet {
        vertices,
        adjacency,
        first_rot,
    })
}
