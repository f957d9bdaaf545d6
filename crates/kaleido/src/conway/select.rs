//! Face and vertex selection predicates.
//!
//! A selection is evaluated over the whole mesh at once and yields one flag
//! per element, so `Random` draws from a single seeded stream and the result
//! does not depend on evaluation order.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::SELECT_TOLERANCE;
use crate::error::ChainError;
use crate::mesh::{FaceId, Mesh, Role, VertexId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    /// Faces with exactly `n` sides; vertices with valence `n`.
    Sides(usize),
    /// Everything but `n`-sided faces (`n`-valent vertices).
    NotSides(usize),
    EvenSided,
    OddSided,
    FacingUp,
    FacingDown,
    FacingLevel,
    /// Normal points toward the origin.
    FacingIn,
    /// Normal points away from the origin.
    FacingOut,
    TopHalf,
    Existing,
    New,
    NewAlt,
    AllNew,
    Ignored,
    /// Odd index.
    Odd,
    /// Even index.
    Even,
    OnlyFirst,
    ExceptFirst,
    /// No boundary edge.
    Inner,
    /// At least one boundary edge.
    Outer,
    /// Each element with probability 1/2, from a seeded stream.
    Random(u64),
    None,
}

impl Selection {
    /// One flag per face of `mesh`.
    pub fn faces(&self, mesh: &Mesh) -> Vec<bool> {
        let mut rng = self.rng();
        (0..mesh.face_count())
            .map(|i| {
                let f = FaceId(i);
                let role = mesh.face(f).role;
                match *self {
                    Selection::Sides(n) => mesh.sides(f) == n,
                    Selection::NotSides(n) => mesh.sides(f) != n,
                    Selection::EvenSided => mesh.sides(f) % 2 == 0,
                    Selection::OddSided => mesh.sides(f) % 2 == 1,
                    Selection::FacingUp => mesh.face_normal(f).y > SELECT_TOLERANCE,
                    Selection::FacingDown => mesh.face_normal(f).y < -SELECT_TOLERANCE,
                    Selection::FacingLevel => mesh.face_normal(f).y.abs() < SELECT_TOLERANCE,
                    Selection::FacingIn => facing(mesh.face_normal(f), mesh.centroid(f)) < -SELECT_TOLERANCE,
                    Selection::FacingOut => facing(mesh.face_normal(f), mesh.centroid(f)) > SELECT_TOLERANCE,
                    Selection::TopHalf => mesh.centroid(f).y > 0.0,
                    Selection::Inner => mesh
                        .face_halfedges(f)
                        .into_iter()
                        .all(|h| mesh.pair(h).is_some()),
                    Selection::Outer => mesh
                        .face_halfedges(f)
                        .into_iter()
                        .any(|h| mesh.pair(h).is_none()),
                    _ => self.common(i, role, &mut rng),
                }
            })
            .collect()
    }

    /// One flag per vertex of `mesh`.
    pub fn vertices(&self, mesh: &Mesh) -> Vec<bool> {
        let mut rng = self.rng();
        (0..mesh.vertex_count())
            .map(|i| {
                let v = VertexId(i);
                let role = mesh.vertex(v).role;
                match *self {
                    Selection::Sides(n) => mesh.valence(v) == n,
                    Selection::NotSides(n) => mesh.valence(v) != n,
                    Selection::EvenSided => mesh.valence(v) % 2 == 0,
                    Selection::OddSided => mesh.valence(v) % 2 == 1,
                    Selection::FacingUp => mesh.vertex_normal(v).y > SELECT_TOLERANCE,
                    Selection::FacingDown => mesh.vertex_normal(v).y < -SELECT_TOLERANCE,
                    Selection::FacingLevel => mesh.vertex_normal(v).y.abs() < SELECT_TOLERANCE,
                    Selection::FacingIn => facing(mesh.vertex_normal(v), mesh.position(v)) < -SELECT_TOLERANCE,
                    Selection::FacingOut => facing(mesh.vertex_normal(v), mesh.position(v)) > SELECT_TOLERANCE,
                    Selection::TopHalf => mesh.position(v).y > 0.0,
                    Selection::Inner => !mesh.is_boundary_vertex(v),
                    Selection::Outer => mesh.is_boundary_vertex(v),
                    _ => self.common(i, role, &mut rng),
                }
            })
            .collect()
    }

    /// Predicates that only look at the index and the role.
    fn common(&self, i: usize, role: Role, rng: &mut Option<StdRng>) -> bool {
        match *self {
            Selection::All => true,
            Selection::None => false,
            Selection::Existing => role.is_existing(),
            Selection::New => role == Role::New,
            Selection::NewAlt => role == Role::NewAlt,
            Selection::AllNew => role.is_new(),
            Selection::Ignored => role == Role::Ignored,
            Selection::Odd => i % 2 == 1,
            Selection::Even => i % 2 == 0,
            Selection::OnlyFirst => i == 0,
            Selection::ExceptFirst => i != 0,
            Selection::Random(_) => rng.as_mut().map_or(false, |r| r.gen_bool(0.5)),
            _ => false,
        }
    }

    fn rng(&self) -> Option<StdRng> {
        match *self {
            Selection::Random(seed) => Some(StdRng::seed_from_u64(seed)),
            _ => None,
        }
    }
}

/// Cosine between a normal and the direction from the origin to `at`.
fn facing(normal: Vector3<f64>, at: Vector3<f64>) -> f64 {
    at.try_normalize(f64::EPSILON)
        .map_or(0.0, |dir| normal.dot(&dir))
}

impl FromStr for Selection {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |message: &str| ChainError::BadParameter {
            token: s.to_string(),
            message: message.to_string(),
        };
        let number = |rest: &str| rest.parse::<u64>().map_err(|_| bad("expected an integer"));
        let sel = match s {
            "all" => Selection::All,
            "none" => Selection::None,
            "evensided" => Selection::EvenSided,
            "oddsided" => Selection::OddSided,
            "up" => Selection::FacingUp,
            "down" => Selection::FacingDown,
            "level" => Selection::FacingLevel,
            "in" => Selection::FacingIn,
            "out" => Selection::FacingOut,
            "top" => Selection::TopHalf,
            "existing" => Selection::Existing,
            "new" => Selection::New,
            "newalt" => Selection::NewAlt,
            "allnew" => Selection::AllNew,
            "ignored" => Selection::Ignored,
            "odd" => Selection::Odd,
            "even" => Selection::Even,
            "first" => Selection::OnlyFirst,
            "exceptfirst" => Selection::ExceptFirst,
            "inner" => Selection::Inner,
            "outer" => Selection::Outer,
            _ => {
                if let Some(rest) = s.strip_prefix("sides") {
                    Selection::Sides(number(rest)? as usize)
                } else if let Some(rest) = s.strip_prefix("notsides") {
                    Selection::NotSides(number(rest)? as usize)
                } else if let Some(rest) = s.strip_prefix("random") {
                    Selection::Random(number(rest)?)
                } else {
                    return Err(bad("unknown selection"));
                }
            }
        };
        Ok(sel)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Selection::Sides(n) => return write!(f, "sides{n}"),
            Selection::NotSides(n) => return write!(f, "notsides{n}"),
            Selection::Random(seed) => return write!(f, "random{seed}"),
            Selection::All => "all",
            Selection::None => "none",
            Selection::EvenSided => "evensided",
            Selection::OddSided => "oddsided",
            Selection::FacingUp => "up",
            Selection::FacingDown => "down",
            Selection::FacingLevel => "level",
            Selection::FacingIn => "in",
            Selection::FacingOut => "out",
            Selection::TopHalf => "top",
            Selection::Existing => "existing",
            Selection::New => "new",
            Selection::NewAlt => "newalt",
            Selection::AllNew => "allnew",
            Selection::Ignored => "ignored",
            Selection::Odd => "odd",
            Selection::Even => "even",
            Selection::OnlyFirst => "first",
            Selection::ExceptFirst => "exceptfirst",
            Selection::Inner => "inner",
            Selection::Outer => "outer",
        };
        f.write_str(name)
    }
}
