//! Tolerance defaults and small runtime configs.
//!
//! Policy
//! - Numeric thresholds of the kaleidoscopic construction are fixed constants;
//!   they are part of the algorithm, not tuning knobs.
//! - The few behaviors a caller may reasonably want to change live in small
//!   `Copy` structs with a `Default`, passed explicitly to the stage that needs them.

/// Machine epsilon for `f64`, used for the hemi test and the convergence bound.
pub(crate) const DBL_EPSILON: f64 = f64::EPSILON;
/// Vertex dedup tolerance on the unit sphere (componentwise).
pub(crate) const BIG_EPSILON: f64 = 3e-2;
/// A face plane closer than this to the origin is treated as passing through it.
pub(crate) const POLAR_EPS: f64 = 1e-6;
/// Angle iteration stops once `|delta| < CONVERGENCE_FACTOR * DBL_EPSILON`.
pub(crate) const CONVERGENCE_FACTOR: f64 = 11.0;
/// Upper bound on fundamental-angle iterations before reporting divergence.
pub(crate) const MAX_ANGLE_ITERATIONS: usize = 200;
/// Direction tolerance for facing-style selections.
pub(crate) const SELECT_TOLERANCE: f64 = 0.02;

/// Wythoff solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolverCfg {
    /// Componentwise tolerance when matching rotated vertices to known ones.
    pub dedup_eps: f64,
    /// Iteration cap for the fundamental-angle solve.
    pub max_iterations: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            dedup_eps: BIG_EPSILON,
            max_iterations: MAX_ANGLE_ITERATIONS,
        }
    }
}

/// Half-edge mesh construction policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshCfg {
    /// Skip (and log) faces that conflict in both windings instead of failing.
    /// Needed for one-sided polyhedra, which admit no consistent orientation.
    pub lenient: bool,
}

/// Fan triangulation options for polygon faces.
#[derive(Clone, Copy, Debug, Default)]
pub struct FanCfg {
    /// Also give convex-like faces an auxiliary center vertex.
    pub center_convex: bool,
    /// Emit both windings for concave (star) faces.
    pub double_sided: bool,
}
