//! Textual operator chains such as `"k0.1@sides5,d,a"`.
//!
//! Grammar
//! - Tokens are separated by commas and applied left to right.
//! - A token is an operator letter, optional numeric parameters separated by
//!   `:`, and an optional `@selection` suffix (kis and truncate only).
//! - Letters: `d` dual, `a` ambo, `k` kis, `g` gyro, `t` truncate,
//!   `c` chamfer, `u` subdivide, `p` offset, `x` extrude, `r` ribbon,
//!   `j` join, `o` ortho, `e` expand, `b` bevel, `m` meta, `n` needle,
//!   `z` zip.
//!   Flags (`x` symmetric, `r` boundaries) are `0` or `1`.

use tracing::debug;

use crate::error::{ChainError, MeshResult};
use crate::mesh::Mesh;

use super::{
    ambo, bevel, chamfer, dual, expand, extrude, gyro, join, kis, meta, needle, offset, ortho,
    ribbon, subdivide, truncate, zip, Selection,
};

/// One step of a chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Dual,
    Ambo,
    Kis { offset: f64, faces: Selection },
    Gyro { ratio: f64, offset: f64 },
    Truncate { amount: f64, vertices: Selection },
    Chamfer { ratio: f64 },
    Subdivide { offset: f64 },
    Offset { distance: f64 },
    Extrude { distance: f64, symmetric: bool },
    Ribbon { offset: f64, boundaries: bool, smooth: f64 },
    Join,
    Ortho,
    Expand { ratio: f64 },
    Bevel { ratio: f64 },
    Meta { offset: f64 },
    Needle,
    Zip { ratio: f64 },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Dual => "dual",
            Op::Ambo => "ambo",
            Op::Kis { .. } => "kis",
            Op::Gyro { .. } => "gyro",
            Op::Truncate { .. } => "truncate",
            Op::Chamfer { .. } => "chamfer",
            Op::Subdivide { .. } => "subdivide",
            Op::Offset { .. } => "offset",
            Op::Extrude { .. } => "extrude",
            Op::Ribbon { .. } => "ribbon",
            Op::Join => "join",
            Op::Ortho => "ortho",
            Op::Expand { .. } => "expand",
            Op::Bevel { .. } => "bevel",
            Op::Meta { .. } => "meta",
            Op::Needle => "needle",
            Op::Zip { .. } => "zip",
        }
    }

    pub fn apply(&self, mesh: &Mesh) -> MeshResult<Mesh> {
        match *self {
            Op::Dual => dual(mesh),
            Op::Ambo => ambo(mesh),
            Op::Kis { offset, faces } => kis(mesh, offset, faces),
            Op::Gyro { ratio, offset } => gyro(mesh, ratio, offset),
            Op::Truncate { amount, vertices } => truncate(mesh, amount, vertices),
            Op::Chamfer { ratio } => chamfer(mesh, ratio),
            Op::Subdivide { offset } => subdivide(mesh, offset),
            Op::Offset { distance } => offset(mesh, distance),
            Op::Extrude {
                distance,
                symmetric,
            } => extrude(mesh, distance, symmetric),
            Op::Ribbon {
                offset,
                boundaries,
                smooth,
            } => ribbon(mesh, offset, boundaries, smooth),
            Op::Join => join(mesh),
            Op::Ortho => ortho(mesh),
            Op::Expand { ratio } => expand(mesh, ratio),
            Op::Bevel { ratio } => bevel(mesh, ratio),
            Op::Meta { offset } => meta(mesh, offset),
            Op::Needle => needle(mesh),
            Op::Zip { ratio } => zip(mesh, ratio),
        }
    }
}

/// Parses a comma-separated chain. Empty input is an empty chain.
pub fn parse_chain(text: &str) -> Result<Vec<Op>, ChainError> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_op)
        .collect()
}

fn parse_op(token: &str) -> Result<Op, ChainError> {
    let bad = |message: String| ChainError::BadParameter {
        token: token.to_string(),
        message,
    };
    let (body, selection) = match token.split_once('@') {
        Some((body, sel)) => (body, Some(sel.parse::<Selection>()?)),
        None => (token, None),
    };
    let mut chars = body.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ChainError::UnknownOperator(token.to_string()))?;
    let rest = chars.as_str();
    let params = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(':')
            .map(|p| {
                p.parse::<f64>()
                    .map_err(|_| bad(format!("{p:?} is not a number")))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let arity = |max: usize| {
        if params.len() > max {
            Err(bad(format!("takes at most {max} parameters")))
        } else {
            Ok(())
        }
    };
    let param = |i: usize, default: f64| params.get(i).copied().unwrap_or(default);
    let flag = |i: usize| params.get(i).map_or(false, |&x| x != 0.0);
    let sel = selection.unwrap_or_default();
    let selectable = matches!(letter, 'k' | 't');
    if selection.is_some() && !selectable {
        return Err(bad("does not take a selection".to_string()));
    }

    let op = match letter {
        'd' => {
            arity(0)?;
            Op::Dual
        }
        'a' => {
            arity(0)?;
            Op::Ambo
        }
        'k' => {
            arity(1)?;
            Op::Kis {
                offset: param(0, 0.0),
                faces: sel,
            }
        }
        'g' => {
            arity(2)?;
            Op::Gyro {
                ratio: param(0, 1.0 / 3.0),
                offset: param(1, 0.0),
            }
        }
        't' => {
            arity(1)?;
            Op::Truncate {
                amount: param(0, 0.3),
                vertices: sel,
            }
        }
        'c' => {
            arity(1)?;
            Op::Chamfer {
                ratio: param(0, 1.0 / 3.0),
            }
        }
        'u' => {
            arity(1)?;
            Op::Subdivide {
                offset: param(0, 0.0),
            }
        }
        'p' => {
            arity(1)?;
            Op::Offset {
                distance: param(0, 0.1),
            }
        }
        'x' => {
            arity(2)?;
            Op::Extrude {
                distance: param(0, 0.1),
                symmetric: flag(1),
            }
        }
        'r' => {
            arity(3)?;
            Op::Ribbon {
                offset: param(0, 0.1),
                boundaries: flag(1),
                smooth: param(2, 0.0),
            }
        }
        'j' => {
            arity(0)?;
            Op::Join
        }
        'o' => {
            arity(0)?;
            Op::Ortho
        }
        'e' => {
            arity(1)?;
            Op::Expand {
                ratio: param(0, 0.25),
            }
        }
        'b' => {
            arity(1)?;
            Op::Bevel {
                ratio: param(0, 0.25),
            }
        }
        'm' => {
            arity(1)?;
            Op::Meta {
                offset: param(0, 0.0),
            }
        }
        'n' => {
            arity(0)?;
            Op::Needle
        }
        'z' => {
            arity(1)?;
            Op::Zip {
                ratio: param(0, 1.0 / 3.0),
            }
        }
        _ => return Err(ChainError::UnknownOperator(token.to_string())),
    };
    Ok(op)
}

/// Applies `ops` in order, each to the previous result.
pub fn apply_chain(mesh: &Mesh, ops: &[Op]) -> Result<Mesh, ChainError> {
    let mut cur = mesh.clone();
    for (step, op) in ops.iter().enumerate() {
        cur = op.apply(&cur).map_err(|source| ChainError::Mesh {
            op: op.name(),
            source,
        })?;
        debug!(step, op = op.name(), f = cur.face_count(), "chain step");
    }
    Ok(cur)
}
