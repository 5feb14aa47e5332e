//! JSON documents read and written by the driver.
//!
//! A complex number is either a bare JSON number (real) or a pair
//! `[re, im]`. Triples, matrices and conics are built from that encoding.

use anyhow::{Context, Result};
use homogebra::{Complex, ConicEquation, HomogeneousCoordinate, TransformationMatrix};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Real(f64),
    Pair([f64; 2]),
}

impl From<Scalar> for Complex {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Real(re) => Complex::real(re),
            Scalar::Pair([re, im]) => Complex::new(re, im),
        }
    }
}

impl From<Complex> for Scalar {
    fn from(z: Complex) -> Self {
        if z.im == 0.0 {
            Scalar::Real(z.re)
        } else {
            Scalar::Pair([z.re, z.im])
        }
    }
}

pub type Triple = [Scalar; 3];

pub fn to_point(t: &Triple) -> HomogeneousCoordinate {
    HomogeneousCoordinate::from_array(t.map(Complex::from))
}

pub fn from_point(p: &HomogeneousCoordinate) -> Triple {
    p.to_array().map(Scalar::from)
}

/// Input of `fit`: four preimages and their images, in order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Correspondences {
    pub from: [Triple; 4],
    pub to: [Triple; 4],
}

impl Correspondences {
    pub fn points(&self) -> ([HomogeneousCoordinate; 4], [HomogeneousCoordinate; 4]) {
        (self.from.map(|t| to_point(&t)), self.to.map(|t| to_point(&t)))
    }
}

/// A stored transformation, rows first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixDoc {
    pub matrix: [Triple; 3],
}

impl MatrixDoc {
    pub fn to_matrix(&self) -> TransformationMatrix {
        TransformationMatrix::from_rows(self.matrix.map(|row| row.map(Complex::from)))
    }
}

impl From<&TransformationMatrix> for MatrixDoc {
    fn from(m: &TransformationMatrix) -> Self {
        Self {
            matrix: (*m.rows()).map(|row| row.map(Scalar::from)),
        }
    }
}

/// Conic coefficients: `[x², y², z²]` and `[xy, yz, xz]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConicDoc {
    pub squares: Triple,
    pub pair_products: Triple,
}

impl ConicDoc {
    pub fn to_conic(&self) -> ConicEquation {
        ConicEquation::new(self.squares.map(Complex::from), self.pair_products.map(Complex::from))
    }
}

/// Output of `map`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MappedDoc {
    pub image: Triple,
    pub normalized: Triple,
    /// `[x, y]` when the image is a real finite point.
    pub position: Option<[f64; 2]>,
    pub at_infinity: bool,
}

/// Output of `trace`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceDoc {
    pub axis: String,
    pub samples: usize,
    pub points: Vec<[f64; 2]>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_accept_numbers_and_pairs() {
        let t: Triple = serde_json::from_str("[1, [2.5, -1], 0]").unwrap();
        let p = to_point(&t);
        assert_eq!(p.x, Complex::real(1.0));
        assert_eq!(p.y, Complex::new(2.5, -1.0));
        assert_eq!(p.z, Complex::ZERO);

        let back = serde_json::to_value(from_point(&p)).unwrap();
        assert_eq!(back, serde_json::json!([1.0, [2.5, -1.0], 0.0]));
    }

    #[test]
    fn malformed_scalar_is_rejected() {
        assert!(serde_json::from_str::<Triple>(r#"[1, "two", 3]"#).is_err());
        assert!(serde_json::from_str::<Triple>("[1, [1, 2, 3], 3]").is_err());
    }

    #[test]
    fn matrix_doc_keeps_row_order() {
        let m = TransformationMatrix::from_rows([
            [Complex::real(1.0), Complex::real(2.0), Complex::real(3.0)],
            [Complex::real(4.0), Complex::new(0.0, 5.0), Complex::real(6.0)],
            [Complex::real(7.0), Complex::real(8.0), Complex::real(9.0)],
        ]);
        let doc = MatrixDoc::from(&m);
        assert_eq!(doc.matrix[1][1], Scalar::Pair([0.0, 5.0]));
        assert_eq!(doc.to_matrix(), m);
    }
}
