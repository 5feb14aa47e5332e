//! Tolerance constants shared by the whole kernel.
//!
//! Policy
//! - Fixed constants, no process-wide mutable state. Call sites never compare
//!   floating results against exact zero; they go through these values.

/// Zero/real test for complex scalars (`Complex::is_zero`, `Complex::is_real`)
/// and the determinant test of the closed-form 3×3 inverse.
pub const EPS: f64 = 1e-10;

/// Pivot threshold of the generic Gauss-Jordan solver. A pivot whose modulus
/// falls below it after row exchange is treated as exactly singular.
pub const PIVOT_EPS: f64 = 1e-12;
