// src/numerics/types/square.rs
// Members that only exist for square shapes: identity, trace, determinant,
// inversion and normalization.

use crate::numerics::config::Tolerance;
use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::fixed::{FixedMatrix, Matrix2, Matrix3, Matrix4};
use crate::numerics::types::traits::FloatingPoint;

/// Closed-form determinant and adjugate for a square size.
///
/// Implemented for 2x2, 3x3 and 4x4. `inverse = adjugate / determinant`.
pub trait SquareMatrix<T: FloatingPoint>: Sized {
    fn determinant(&self) -> T;

    /// Transposed cofactor matrix.
    fn adjugate(&self) -> Self;
}

impl<T: FloatingPoint, const N: usize> FixedMatrix<T, N, N> {
    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_fn(|x, y| if x == y { T::one() } else { T::zero() })
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum += self.data[i][i];
        }
        sum
    }

    pub fn diagonal(&self) -> [T; N] {
        core::array::from_fn(|i| self.data[i][i])
    }
}

impl<T: FloatingPoint, const N: usize> FixedMatrix<T, N, N>
where
    Self: SquareMatrix<T>,
{
    fn checked_determinant(&self, tolerance: &Tolerance) -> Result<T> {
        let det = self.determinant();
        if tolerance.is_singular(det.to_f64()) {
            tracing::debug!(determinant = det.to_f64(), size = N, "matrix is singular");
            return Err(MatrixError::Singular {
                determinant: det.to_f64(),
            });
        }
        Ok(det)
    }

    /// Inverse under an explicit singularity threshold.
    pub fn inverted_with(&self, tolerance: &Tolerance) -> Result<Self> {
        let det = self.checked_determinant(tolerance)?;
        let inv_det = T::one() / det;
        Ok(self.adjugate().map(|v| v * inv_det))
    }

    /// Inverse using [`Tolerance::default`].
    ///
    /// # Examples
    /// ```
    /// use glmatrix::{Matrix2, MatrixError};
    ///
    /// let m = Matrix2::new([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = m.inverted().unwrap();
    /// assert!((m * inv).approx_eq(&Matrix2::identity(), 1e-12));
    ///
    /// let singular = Matrix2::new([[0.0, 0.0], [0.0, 0.0]]);
    /// assert!(matches!(singular.inverted(), Err(MatrixError::Singular { .. })));
    /// ```
    pub fn inverted(&self) -> Result<Self> {
        self.inverted_with(&Tolerance::default())
    }

    /// Invert in place. On failure the matrix is left untouched.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverted()?;
        Ok(())
    }

    /// Copy with every element divided by the determinant.
    pub fn normalized_with(&self, tolerance: &Tolerance) -> Result<Self> {
        let det = self.checked_determinant(tolerance)?;
        Ok(self.map(|v| v / det))
    }

    pub fn normalized(&self) -> Result<Self> {
        self.normalized_with(&Tolerance::default())
    }

    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }
}

impl<T: FloatingPoint> SquareMatrix<T> for Matrix2<T> {
    fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.data;
        a * d - b * c
    }

    fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.data;
        Self::new([[d, -b], [-c, a]])
    }
}

impl<T: FloatingPoint> SquareMatrix<T> for Matrix3<T> {
    fn determinant(&self) -> T {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.data;
        a00 * a11 * a22 + a01 * a12 * a20 + a02 * a10 * a21
            - a02 * a11 * a20
            - a00 * a12 * a21
            - a01 * a10 * a22
    }

    fn adjugate(&self) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.data;
        Self::new([
            [a11 * a22 - a12 * a21, a02 * a21 - a01 * a22, a01 * a12 - a02 * a11],
            [a12 * a20 - a10 * a22, a00 * a22 - a02 * a20, a02 * a10 - a00 * a12],
            [a10 * a21 - a11 * a20, a01 * a20 - a00 * a21, a00 * a11 - a01 * a10],
        ])
    }
}

/// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
struct Minors<T> {
    s: [T; 6],
    c: [T; 6],
}

fn minors4<T: FloatingPoint>(m: &Matrix4<T>) -> Minors<T> {
    let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
        m.data;
    Minors {
        s: [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
        ],
        c: [
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ],
    }
}

impl<T: FloatingPoint> SquareMatrix<T> for Matrix4<T> {
    fn determinant(&self) -> T {
        let Minors { s, c } = minors4(self);
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    fn adjugate(&self) -> Self {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.data;
        let Minors { s, c } = minors4(self);
        Self::new([
            [
                a11 * c[5] - a12 * c[4] + a13 * c[3],
                -a01 * c[5] + a02 * c[4] - a03 * c[3],
                a31 * s[5] - a32 * s[4] + a33 * s[3],
                -a21 * s[5] + a22 * s[4] - a23 * s[3],
            ],
            [
                -a10 * c[5] + a12 * c[2] - a13 * c[1],
                a00 * c[5] - a02 * c[2] + a03 * c[1],
                -a30 * s[5] + a32 * s[2] - a33 * s[1],
                a20 * s[5] - a22 * s[2] + a23 * s[1],
            ],
            [
                a10 * c[4] - a11 * c[2] + a13 * c[0],
                -a00 * c[4] + a01 * c[2] - a03 * c[0],
                a30 * s[4] - a31 * s[2] + a33 * s[0],
                -a20 * s[4] + a21 * s[2] - a23 * s[0],
            ],
            [
                -a10 * c[3] + a11 * c[1] - a12 * c[0],
                a00 * c[3] - a01 * c[1] + a02 * c[0],
                -a30 * s[3] + a31 * s[1] - a32 * s[0],
                a20 * s[3] - a21 * s[1] + a22 * s[0],
            ],
        ])
    }
}

// Conversions between neighbouring square sizes: shrinking keeps the
// upper-left block, growing pads with the identity.

impl<T: FloatingPoint> From<Matrix3<T>> for Matrix2<T> {
    fn from(m: Matrix3<T>) -> Self {
        Self::from_fn(|x, y| m.data[y][x])
    }
}

impl<T: FloatingPoint> From<Matrix2<T>> for Matrix3<T> {
    fn from(m: Matrix2<T>) -> Self {
        let mut out = Self::identity();
        for y in 0..2 {
            for x in 0..2 {
                out.data[y][x] = m.data[y][x];
            }
        }
        out
    }
}

impl<T: FloatingPoint> From<Matrix4<T>> for Matrix3<T> {
    fn from(m: Matrix4<T>) -> Self {
        Self::from_fn(|x, y| m.data[y][x])
    }
}

impl<T: FloatingPoint> From<Matrix3<T>> for Matrix4<T> {
    fn from(m: Matrix3<T>) -> Self {
        let mut out = Self::identity();
        for y in 0..3 {
            for x in 0..3 {
                out.data[y][x] = m.data[y][x];
            }
        }
        out
    }
}
