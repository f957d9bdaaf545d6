//! Stage values of the Wythoff pipeline.
//!
//! Each stage consumes the previous value and returns a new one, so a test can
//! stop the pipeline anywhere and inspect the intermediate state.

use nalgebra::Vector3;

/// Symmetry group of the Moebius triangle `(2 3 K)` or `(2 2 n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoebiusTriangle {
    /// 2 dihedral, 3 tetrahedral, 4 octahedral, 5 icosahedral.
    pub symmetry: i64,
    /// Number of Moebius triangles covering the sphere.
    pub order: i64,
    /// Nominal covering density of the Schwarz triangle.
    pub density: i64,
    /// Nominal Euler characteristic.
    pub chi: i64,
}

/// Face-type decomposition of one Wythoff symbol.
///
/// Per-type arrays share an index: face type `t` has `sides[t]` sides,
/// appears `incidence[t]` times around each vertex, and has fundamental
/// half-angle `gamma[t]`. `rot[k]` is the face type crossed by the k-th
/// rotation step around a vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct SchwarzDecomposition {
    pub index: Option<usize>,
    pub symmetry: i64,
    pub order: i64,
    pub density: i64,
    pub chi: i64,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub face_count: usize,
    pub hemi: bool,
    pub one_sided: bool,
    /// Face type with an even denominator in a `p q r|` symbol that needs
    /// the retrograde rewrite.
    pub even: Option<usize>,
    pub sides: Vec<f64>,
    pub incidence: Vec<f64>,
    pub gamma: Vec<f64>,
    pub rot: Vec<usize>,
    /// Snub step parity, present only for snub symbols.
    pub snub: Option<Vec<bool>>,
    pub face_counts: Vec<usize>,
}

impl SchwarzDecomposition {
    /// Number of face types (N).
    #[inline]
    pub fn face_types(&self) -> usize {
        self.sides.len()
    }

    /// Faces around each vertex (M).
    #[inline]
    pub fn valency(&self) -> usize {
        self.rot.len()
    }

    /// `V - E + F` from the counts.
    #[inline]
    pub fn euler(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.face_count as i64
    }
}

/// Coordinates and incidence of a solved polyhedron.
///
/// `adjacency[v][j]` is the j-th neighbor of vertex `v` in rotation order;
/// `face_incidence[v][j]` is the face between neighbors `j` and `j + 1`.
#[derive(Clone, Debug)]
pub struct PolyhedronGeometry {
    pub vertices: Vec<Vector3<f64>>,
    pub adjacency: Vec<Vec<usize>>,
    pub face_incidence: Vec<Vec<usize>>,
    /// Polar reciprocals of the face planes (dual vertices).
    pub face_poles: Vec<Vector3<f64>>,
    pub face_types: Vec<usize>,
    pub edges: Vec<(usize, usize)>,
    pub dual_edges: Vec<(usize, usize)>,
    /// For hemi polyhedra: whether each dual edge runs parallel to its
    /// ideal vertex direction. Empty otherwise.
    pub anti: Vec<bool>,
}
