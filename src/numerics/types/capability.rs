// src/numerics/types/capability.rs
// Shape/element contract shared by every matrix type, and the dynamic-shape
// algorithms written against it.

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::Matrix;

/// Common surface of the dynamic `Matrix` and every fixed-size matrix.
///
/// Elements are addressed as `(x, y)` where **`x` is the column and `y` is
/// the row**. Values are exposed as `f64` regardless of the storage type so
/// that shapes and precisions can be mixed freely on the dynamic path.
pub trait MatrixLike {
    /// Number of rows.
    fn row_size(&self) -> usize;

    /// Number of columns.
    fn column_size(&self) -> usize;

    /// Element in column `x`, row `y`. Callers must stay inside the shape;
    /// implementations may panic otherwise.
    fn element(&self, x: usize, y: usize) -> f64;

    /// `(rows, columns)`
    fn shape(&self) -> (usize, usize) {
        (self.row_size(), self.column_size())
    }

    fn checked_element(&self, x: usize, y: usize) -> Result<f64> {
        if x >= self.column_size() || y >= self.row_size() {
            return Err(MatrixError::out_of_range(x, y, self.column_size(), self.row_size()));
        }
        Ok(self.element(x, y))
    }

    /// Copy of the contents as a list of rows.
    fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.row_size())
            .map(|y| (0..self.column_size()).map(|x| self.element(x, y)).collect())
            .collect()
    }
}

impl<M: MatrixLike + ?Sized> MatrixLike for &M {
    fn row_size(&self) -> usize {
        (**self).row_size()
    }

    fn column_size(&self) -> usize {
        (**self).column_size()
    }

    fn element(&self, x: usize, y: usize) -> f64 {
        (**self).element(x, y)
    }
}

fn elementwise<A, B>(
    operation: &'static str,
    left: &A,
    right: &B,
    op: impl Fn(f64, f64) -> f64,
) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if left.shape() != right.shape() {
        return Err(MatrixError::size_mismatch(operation, left.shape(), right.shape()));
    }

    let (rows, columns) = left.shape();
    let mut data = Vec::with_capacity(MatrixError::element_count(rows, columns)?);
    for y in 0..rows {
        for x in 0..columns {
            data.push(op(left.element(x, y), right.element(x, y)));
        }
    }
    Ok(Matrix::from_parts(rows, columns, data))
}

/// Element-wise sum of two matrices of identical shape.
pub fn add<A, B>(left: &A, right: &B) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    elementwise("add", left, right, |a, b| a + b)
}

/// Element-wise difference of two matrices of identical shape.
pub fn subtract<A, B>(left: &A, right: &B) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    elementwise("subtract", left, right, |a, b| a - b)
}

/// Matrix product `left * right`.
///
/// Requires `right.row_size() == left.column_size()`; the result has
/// `left.row_size()` rows and `right.column_size()` columns.
pub fn multiply<A, B>(left: &A, right: &B) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if right.row_size() != left.column_size() {
        return Err(MatrixError::size_mismatch("multiply", left.shape(), right.shape()));
    }

    let rows = left.row_size();
    let columns = right.column_size();
    let inner = left.column_size();
    let mut data = vec![0.0; MatrixError::element_count(rows, columns)?];
    for y in 0..rows {
        for x in 0..columns {
            let mut sum = 0.0;
            for m in 0..inner {
                sum += left.element(m, y) * right.element(x, m);
            }
            data[y * columns + x] = sum;
        }
    }
    Ok(Matrix::from_parts(rows, columns, data))
}

/// Structural equality: same shape and identical elements.
pub fn equals<A, B>(left: &A, right: &B) -> bool
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if left.shape() != right.shape() {
        return false;
    }
    let (rows, columns) = left.shape();
    (0..rows).all(|y| (0..columns).all(|x| left.element(x, y) == right.element(x, y)))
}

/// Same shape and every element within `epsilon`.
pub fn approx_equals<A, B>(left: &A, right: &B, epsilon: f64) -> bool
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if left.shape() != right.shape() {
        return false;
    }
    let (rows, columns) = left.shape();
    (0..rows).all(|y| {
        (0..columns).all(|x| (left.element(x, y) - right.element(x, y)).abs() <= epsilon)
    })
}
