//! Rotation matrices
//!
//! Right-handed 3x3 rotation matrices about each coordinate axis. The
//! formulas are written once, generically over a [`Scalar`], and work for
//! plain `f64` angles as well as symbolic expressions from
//! [`symbolic::Expr`]. The choice between numeric and symbolic algebra is
//! made statically by the angle type.

pub mod symbolic;

use std::collections::HashMap;

use ndarray::Array2;

use self::symbolic::{Expr, SymbolicError};

/// Scalar operations the rotation formulas need.
pub trait Scalar: Clone {
    fn zero() -> Self;
    fn one() -> Self;
    fn cos(&self) -> Self;
    fn sin(&self) -> Self;
    fn neg(&self) -> Self;
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn cos(&self) -> Self {
        f64::cos(*self)
    }

    fn sin(&self) -> Self {
        f64::sin(*self)
    }

    fn neg(&self) -> Self {
        -*self
    }
}

impl Scalar for Expr {
    fn zero() -> Self {
        Expr::num(0.0)
    }

    fn one() -> Self {
        Expr::num(1.0)
    }

    fn cos(&self) -> Self {
        Expr::cos(self)
    }

    fn sin(&self) -> Self {
        Expr::sin(self)
    }

    fn neg(&self) -> Self {
        -self.clone()
    }
}

/// A 3x3 row-major matrix over any scalar type.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix3<T>(pub [[T; 3]; 3]);

impl<T: Scalar> Matrix3<T> {
    /// Transposed copy of this matrix
    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Matrix3([
            [m[0][0].clone(), m[1][0].clone(), m[2][0].clone()],
            [m[0][1].clone(), m[1][1].clone(), m[2][1].clone()],
            [m[0][2].clone(), m[1][2].clone(), m[2][2].clone()],
        ])
    }
}

impl Matrix3<f64> {
    /// The identity matrix
    pub fn identity() -> Self {
        Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Matrix product `self * other`
    pub fn dot(&self, other: &Self) -> Self {
        let a = &self.0;
        let b = &other.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Matrix3(out)
    }

    /// Determinant by cofactor expansion
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Copy into an `ndarray` matrix
    pub fn to_array(&self) -> Array2<f64> {
        let flat: Vec<f64> = self.0.iter().flatten().copied().collect();
        Array2::from_shape_vec((3, 3), flat).expect("3x3 shape always holds")
    }
}

impl Matrix3<Expr> {
    /// Evaluate every entry with the given symbol bindings.
    pub fn eval(&self, bindings: &HashMap<String, f64>) -> Result<Matrix3<f64>, SymbolicError> {
        let m = &self.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[i][j].eval(bindings)?;
            }
        }
        Ok(Matrix3(out))
    }
}

/// Rotation about the x-axis.
pub fn rot_x<T: Scalar>(angle: &T) -> Matrix3<T> {
    let c = angle.cos();
    let s = angle.sin();
    Matrix3([
        [T::one(), T::zero(), T::zero()],
        [T::zero(), c.clone(), s.clone()],
        [T::zero(), s.neg(), c],
    ])
}

/// Rotation about the y-axis.
pub fn rot_y<T: Scalar>(angle: &T) -> Matrix3<T> {
    let c = angle.cos();
    let s = angle.sin();
    Matrix3([
        [c.clone(), T::zero(), s.neg()],
        [T::zero(), T::one(), T::zero()],
        [s, T::zero(), c],
    ])
}

/// Rotation about the z-axis.
pub fn rot_z<T: Scalar>(angle: &T) -> Matrix3<T> {
    let c = angle.cos();
    let s = angle.sin();
    Matrix3([
        [c.clone(), s.clone(), T::zero()],
        [s.neg(), c, T::zero()],
        [T::zero(), T::zero(), T::one()],
    ])
}
