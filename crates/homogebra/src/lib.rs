//! Numeric kernel of a projective-geometry editor.
//!
//! Layers
//! - `complex`: the scalar type, `f64` pairs with tolerance-based predicates.
//! - `matrix`: `SquaredMatrix<T>`, an N×N system with one augmentation column,
//!   solved by Gauss-Jordan elimination.
//! - `projective`: homogeneous triples, closed-form 3×3 matrices,
//!   homographies, point/line/conic equations and incidence constructions.
//! - `conic`: scan-line root solving used to draw conics.
//! - `sample`: seeded random draws for tests, benches and the CLI.
//!
//! API Policy
//! - Structural misuse (ragged rows, NaN, mismatched sizes) is an
//!   `Err(InvalidArgument)`; numeric degeneracy is `None`.
//! - Tolerances live in `tol` and nowhere else.

pub mod complex;
pub mod conic;
pub mod error;
pub mod matrix;
pub mod projective;
pub mod sample;
pub mod tol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::Complex;
pub use conic::{solve_quadratic, Axis, ConicRootSolver, Roots};
pub use error::InvalidArgument;
pub use matrix::{Field, SquaredMatrix};
pub use projective::{
    ConicEquation, HomogeneousCoordinate, LineEquation, Pair, PointEquation, Transform,
    Transformation, TransformationMatrix,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::conic::{solve_quadratic, Axis, ConicRootSolver, Roots};
    pub use crate::projective::{
        intersection, line_through, ConicEquation, HomogeneousCoordinate, LineEquation, Pair,
        PointEquation, RealPosition, Transform, Transformation, TransformationMatrix, Var,
    };
    pub use crate::{Complex, InvalidArgument, SquaredMatrix};
}
