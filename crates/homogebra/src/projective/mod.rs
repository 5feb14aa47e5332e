//! Complex projective plane ℂP²: coordinates, 3×3 matrices, homographies.
//!
//! Purpose
//! - Represent points/lines as homogeneous triples and conics as quadratic
//!   forms over ℂ, and move them with elements of PGL(3, ℂ).
//! - Fit the homography determined by four point correspondences.
//!
//! Conventions
//! - Triples are equal as projective entities when proportional; use
//!   `HomogeneousCoordinate::normalized` or `is_proportional` to compare.
//! - Singular matrices and degenerate point configurations give `None`.
//! - The closed-form 3×3 inverse tests `det.is_zero()` (`tol::EPS`); the
//!   generic solver used inside the constructions tests pivots against
//!   `tol::PIVOT_EPS`.

mod construct;
mod coordinate;
mod equation;
mod matrix;
mod transformation;

pub use construct::{intersection, line_through};
pub use coordinate::{HomogeneousCoordinate, RealPosition, Var};
pub use equation::{ConicEquation, LineEquation, Pair, PointEquation, Transform};
pub use matrix::{MatrixRow, TransformationMatrix};
pub use transformation::{Transformation, REFERENCE_FRAME};
