//! Error types for symbol parsing, the Wythoff pipeline, and mesh surgery.

use thiserror::Error;

/// Fatal failures of the kaleidoscopic construction.
///
/// Every variant carries the symbol text as given by the caller so a failure
/// can be reproduced from the message alone.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WythoffError {
    /// Malformed text, numerator too large, incompatible numerators, or a
    /// nonpositive density.
    #[error("invalid Wythoff symbol {symbol:?}: {message}")]
    Symbol { symbol: String, message: String },

    /// The fundamental-angle iteration left its valid range or did not settle.
    #[error("fundamental angles diverged for {symbol:?}: {message}")]
    Convergence { symbol: String, message: String },

    /// More vertices, faces or edges appeared than the decomposition predicts.
    #[error("topology overflow for {symbol:?} in {stage}: {message}")]
    TopologyOverflow {
        symbol: String,
        stage: &'static str,
        message: String,
    },
}

impl WythoffError {
    pub(crate) fn symbol(symbol: &str, message: impl Into<String>) -> Self {
        Self::Symbol {
            symbol: symbol.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn convergence(symbol: &str, message: impl Into<String>) -> Self {
        Self::Convergence {
            symbol: symbol.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn overflow(symbol: &str, stage: &'static str, message: impl Into<String>) -> Self {
        Self::TopologyOverflow {
            symbol: symbol.to_string(),
            stage,
            message: message.into(),
        }
    }
}

/// Failures while building a half-edge mesh from face lists.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A face needs at least three distinct corners.
    #[error("face {face} has {sides} corners (need at least 3)")]
    DegenerateFace { face: usize, sides: usize },

    /// A face references a vertex index past the end of the position list.
    #[error("face {face} references vertex {vertex}, but the mesh has {count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        count: usize,
    },

    /// The face collides with an existing half-edge in both windings.
    #[error("face {face} conflicts with half-edge {from}->{to} in both windings")]
    FaceAddConflict { face: usize, from: usize, to: usize },

    /// A structural invariant does not hold at this half-edge.
    #[error("half-edge {halfedge}: {reason}")]
    Inconsistent {
        halfedge: usize,
        reason: &'static str,
    },
}

/// Failures while parsing or applying an operator chain.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChainError {
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),

    #[error("bad parameter in {token:?}: {message}")]
    BadParameter { token: String, message: String },

    #[error("operator {op} failed: {source}")]
    Mesh {
        op: &'static str,
        #[source]
        source: MeshError,
    },
}

/// Result type for the Wythoff pipeline.
pub type WythoffResult<T> = std::result::Result<T, WythoffError>;

/// Result type for mesh construction and operators.
pub type MeshResult<T> = std::result::Result<T, MeshError>;
