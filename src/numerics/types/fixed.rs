// src/numerics/types/fixed.rs
// Compile-time sized matrices. The nine public shapes (2x2 through 4x4) are
// aliases of `FixedMatrix`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numerics::config::Tolerance;
use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::capability::{self, MatrixLike};
use crate::numerics::types::matrix::{write_rows, Matrix};
use crate::numerics::types::traits::FloatingPoint;

/// Dense `R x C` matrix (R rows, C columns) stored inline as `[[T; C]; R]`.
///
/// Element access uses the crate-wide `(x, y)` convention where **`x` is the
/// column and `y` is the row**, so `m[(2, 0)]` is row 0, column 2.
///
/// Values of this type are plain data: they may be shared across threads for
/// reading, but concurrent mutation of one instance has to be serialized by
/// the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedMatrix<T: FloatingPoint, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

pub type Matrix2<T = f64> = FixedMatrix<T, 2, 2>;
pub type Matrix2x3<T = f64> = FixedMatrix<T, 2, 3>;
pub type Matrix2x4<T = f64> = FixedMatrix<T, 2, 4>;
pub type Matrix3<T = f64> = FixedMatrix<T, 3, 3>;
pub type Matrix3x2<T = f64> = FixedMatrix<T, 3, 2>;
pub type Matrix3x4<T = f64> = FixedMatrix<T, 3, 4>;
pub type Matrix4<T = f64> = FixedMatrix<T, 4, 4>;
pub type Matrix4x2<T = f64> = FixedMatrix<T, 4, 2>;
pub type Matrix4x3<T = f64> = FixedMatrix<T, 4, 3>;

impl<T: FloatingPoint, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLUMNS: usize = C;

    /// Construct a matrix from its rows.
    pub fn new(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Build every element from its `(x, y)` = (column, row) position.
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|y| core::array::from_fn(|x| f(x, y))),
        }
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// One matrix (all elements = 1)
    pub fn one() -> Self {
        Self {
            data: [[T::one(); C]; R],
        }
    }

    /// Build from row-major flat data; fails when fewer than `R * C` values
    /// are given.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        if values.len() < R * C {
            return Err(MatrixError::InsufficientData {
                expected: R * C,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|x, y| values[y * C + x]))
    }

    /// Build from a 2D array whose **first dimension is the column**
    /// (`grid[x][y]`). Fails when there are fewer than `C` columns or a
    /// column holds fewer than `R` values.
    pub fn try_from_columns<S: AsRef<[T]>>(grid: &[S]) -> Result<Self> {
        if grid.len() < C {
            return Err(MatrixError::InsufficientData {
                expected: R * C,
                actual: grid.iter().map(|c| c.as_ref().len()).sum(),
            });
        }
        if let Some(short) = grid[..C].iter().map(|c| c.as_ref()).find(|c| c.len() < R) {
            return Err(MatrixError::InsufficientData {
                expected: R,
                actual: short.len(),
            });
        }
        Ok(Self::from_fn(|x, y| grid[x].as_ref()[y]))
    }

    pub fn row_size(&self) -> usize {
        R
    }

    pub fn column_size(&self) -> usize {
        C
    }

    fn check(x: usize, y: usize) -> Result<()> {
        if x >= C || y >= R {
            return Err(MatrixError::out_of_range(x, y, C, R));
        }
        Ok(())
    }

    /// Element in column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        Self::check(x, y)?;
        Ok(self.data[y][x])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        Self::check(x, y)?;
        self.data[y][x] = value;
        Ok(())
    }

    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }

    /// Swap rows and columns: an `R x C` matrix becomes `C x R`.
    pub fn transpose(&self) -> FixedMatrix<T, C, R> {
        FixedMatrix::from_fn(|x, y| self.data[x][y])
    }

    /// Single precision copy laid out for GL uniform upload.
    ///
    /// Exactly `R * C` floats with `data[x + y * C] = self[(x, y)]`. Because
    /// transforms in this crate follow the row-vector convention, this
    /// row-major dump is the column-major layout GL expects for the
    /// equivalent column-vector matrix.
    pub fn gl_data(&self) -> Vec<f32> {
        let mut out = vec![0.0f32; R * C];
        for y in 0..R {
            for x in 0..C {
                out[x + y * C] = self.data[y][x].to_f32();
            }
        }
        out
    }

    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_fn(|x, y| f(self.data[y][x]))
    }

    /// Every element within `epsilon` of the corresponding one in `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    pub fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.approx_eq(other, T::from_f64(tolerance.comparison_epsilon))
    }

    /// Runtime-checked product against any matrix shape. Used when no
    /// statically typed `*` exists for the operand pair.
    pub fn multiply_dynamic<M: MatrixLike + ?Sized>(&self, other: &M) -> Result<Matrix> {
        tracing::trace!(left = ?(R, C), right = ?other.shape(), "dynamic matrix multiply");
        capability::multiply(self, other)
    }

    pub fn add_dynamic<M: MatrixLike + ?Sized>(&self, other: &M) -> Result<Matrix> {
        tracing::trace!(left = ?(R, C), right = ?other.shape(), "dynamic matrix add");
        capability::add(self, other)
    }

    pub fn subtract_dynamic<M: MatrixLike + ?Sized>(&self, other: &M) -> Result<Matrix> {
        tracing::trace!(left = ?(R, C), right = ?other.shape(), "dynamic matrix subtract");
        capability::subtract(self, other)
    }

    fn check_row(row: usize) -> Result<()> {
        if row >= R {
            return Err(MatrixError::out_of_range(0, row, C, R));
        }
        Ok(())
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
        Self::check_row(r1)?;
        Self::check_row(r2)?;
        self.data.swap(r1, r2);
        Ok(())
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: T) -> Result<()> {
        Self::check_row(row)?;
        for value in self.data[row].iter_mut() {
            *value *= scalar;
        }
        Ok(())
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: T) -> Result<()> {
        Self::check_row(target)?;
        Self::check_row(source)?;
        let source_row = self.data[source];
        for (value, s) in self.data[target].iter_mut().zip(source_row) {
            *value += s * scalar;
        }
        Ok(())
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> MatrixLike for FixedMatrix<T, R, C> {
    fn row_size(&self) -> usize {
        R
    }

    fn column_size(&self) -> usize {
        C
    }

    fn element(&self, x: usize, y: usize) -> f64 {
        self.data[y][x].to_f64()
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Index<(usize, usize)>
    for FixedMatrix<T, R, C>
{
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        if let Err(err) = Self::check(x, y) {
            panic!("{}", err);
        }
        &self.data[y][x]
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> IndexMut<(usize, usize)>
    for FixedMatrix<T, R, C>
{
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        if let Err(err) = Self::check(x, y) {
            panic!("{}", err);
        }
        &mut self.data[y][x]
    }
}

// Same-shape arithmetic

impl<T: FloatingPoint, const R: usize, const C: usize> Add for FixedMatrix<T, R, C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_fn(|x, y| self.data[y][x] + other.data[y][x])
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Sub for FixedMatrix<T, R, C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_fn(|x, y| self.data[y][x] - other.data[y][x])
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Neg for FixedMatrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> AddAssign for FixedMatrix<T, R, C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> SubAssign for FixedMatrix<T, R, C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// `(R x K) * (K x C) -> (R x C)`. Every valid shape pairing type-checks;
/// mismatched inner dimensions are rejected at compile time.
impl<T: FloatingPoint, const R: usize, const K: usize, const C: usize> Mul<FixedMatrix<T, K, C>>
    for FixedMatrix<T, R, K>
{
    type Output = FixedMatrix<T, R, C>;

    fn mul(self, rhs: FixedMatrix<T, K, C>) -> FixedMatrix<T, R, C> {
        let mut result = [[T::zero(); C]; R];
        for (out_row, lhs_row) in result.iter_mut().zip(self.data.iter()) {
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut sum = T::zero();
                for (m, value) in lhs_row.iter().enumerate() {
                    sum += *value * rhs.data[m][x];
                }
                *out = sum;
            }
        }
        FixedMatrix { data: result }
    }
}

macro_rules! impl_scalar_ops {
    ($t:ty) => {
        impl<const R: usize, const C: usize> Mul<$t> for FixedMatrix<$t, R, C> {
            type Output = Self;

            fn mul(self, scalar: $t) -> Self {
                self.map(|v| v * scalar)
            }
        }

        impl<const R: usize, const C: usize> Mul<FixedMatrix<$t, R, C>> for $t {
            type Output = FixedMatrix<$t, R, C>;

            fn mul(self, matrix: FixedMatrix<$t, R, C>) -> FixedMatrix<$t, R, C> {
                matrix * self
            }
        }

        impl<const R: usize, const C: usize> Div<$t> for FixedMatrix<$t, R, C> {
            type Output = Self;

            fn div(self, scalar: $t) -> Self {
                self.map(|v| v / scalar)
            }
        }

        impl<const R: usize, const C: usize> MulAssign<$t> for FixedMatrix<$t, R, C> {
            fn mul_assign(&mut self, scalar: $t) {
                *self = *self * scalar;
            }
        }

        impl<const R: usize, const C: usize> DivAssign<$t> for FixedMatrix<$t, R, C> {
            fn div_assign(&mut self, scalar: $t) {
                *self = *self / scalar;
            }
        }
    };
}

impl_scalar_ops!(f32);
impl_scalar_ops!(f64);

// Precision boundary: widening is a plain `From`, narrowing is explicit.

impl<const R: usize, const C: usize> From<FixedMatrix<f32, R, C>> for FixedMatrix<f64, R, C> {
    fn from(m: FixedMatrix<f32, R, C>) -> Self {
        Self::from_fn(|x, y| m.data[y][x] as f64)
    }
}

impl<const R: usize, const C: usize> FixedMatrix<f64, R, C> {
    /// Narrow to single precision. Kept as a named method so the loss of
    /// precision is visible at the call site.
    pub fn to_single_precision(&self) -> FixedMatrix<f32, R, C> {
        FixedMatrix::from_fn(|x, y| self.data[y][x] as f32)
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> From<FixedMatrix<T, R, C>> for Matrix {
    fn from(m: FixedMatrix<T, R, C>) -> Self {
        Matrix::from_matrix(&m)
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> TryFrom<&Matrix> for FixedMatrix<T, R, C> {
    type Error = MatrixError;

    fn try_from(m: &Matrix) -> Result<Self> {
        if m.shape() != (R, C) {
            return Err(MatrixError::size_mismatch("convert", m.shape(), (R, C)));
        }
        Ok(Self::from_fn(|x, y| T::from_f64(m.element(x, y))))
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, R, C, |x, y| self.data[y][x])
    }
}

// serde: a flat row-major tuple of R * C elements

impl<T, const R: usize, const C: usize> Serialize for FixedMatrix<T, R, C>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(R * C)?;
        for value in self.data.iter().flatten() {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

struct ElementsVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

impl<'de, T, const R: usize, const C: usize> Visitor<'de> for ElementsVisitor<T, R, C>
where
    T: FloatingPoint + Deserialize<'de>,
{
    type Value = FixedMatrix<T, R, C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} matrix elements", R * C)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut data = [[T::zero(); C]; R];
        for (y, row) in data.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(y * C + x, &self))?;
            }
        }
        Ok(FixedMatrix { data })
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for FixedMatrix<T, R, C>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(R * C, ElementsVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix2x3 {
        Matrix2x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let m = sample();
        assert_eq!(m.row_size(), 2);
        assert_eq!(m.column_size(), 3);
        assert_eq!(Matrix2x3::<f64>::ROWS, 2);
        assert_eq!(Matrix2x3::<f64>::COLUMNS, 3);

        // (x, y) = (column, row)
        assert_eq!(m[(2, 0)], 3.0);
        assert_eq!(m.get(0, 1), Ok(4.0));
        assert_eq!(
            m.get(3, 0),
            Err(MatrixError::IndexOutOfRange { x: 3, y: 0, columns: 3, rows: 2 })
        );

        let z = Matrix3::<f32>::zero();
        assert_eq!(z, Matrix3::new([[0.0; 3]; 3]));
        assert_eq!(z, Matrix3::default());

        let o = Matrix3::<f32>::one();
        assert_eq!(o, Matrix3::new([[1.0; 3]; 3]));
    }

    #[test]
    #[should_panic(expected = "Index (1, 2) is out of range")]
    fn test_index_out_of_range_panics() {
        let m = sample();
        let _ = m[(1, 2)];
    }

    #[test]
    fn test_set_and_index_mut() {
        let mut m = Matrix2::<f64>::zero();
        m.set(1, 0, 5.0).unwrap();
        m[(0, 1)] = 7.0;
        assert_eq!(m.as_rows(), &[[0.0, 5.0], [7.0, 0.0]]);
        assert!(m.set(0, 2, 1.0).is_err());
    }

    #[test]
    fn test_try_from_slice() {
        let m = Matrix2x3::try_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 99.0]).unwrap();
        assert_eq!(m, sample());

        assert_eq!(
            Matrix2x3::<f64>::try_from_slice(&[1.0; 5]),
            Err(MatrixError::InsufficientData { expected: 6, actual: 5 })
        );
    }

    #[test]
    fn test_try_from_columns() {
        let columns = [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
        let m = Matrix2x3::try_from_columns(&columns).unwrap();
        assert_eq!(m, sample());

        let too_few = [[1.0, 4.0], [2.0, 5.0]];
        assert!(matches!(
            Matrix2x3::<f64>::try_from_columns(&too_few),
            Err(MatrixError::InsufficientData { .. })
        ));

        let short_column = vec![vec![1.0, 4.0], vec![2.0], vec![3.0, 6.0]];
        assert_eq!(
            Matrix2x3::<f64>::try_from_columns(&short_column),
            Err(MatrixError::InsufficientData { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_matrix_add_sub_scale() {
        let a = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = Matrix3::new([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);

        let sum = a + b;
        assert_eq!(sum.as_rows()[0], [10.0, 10.0, 10.0]);

        let diff = a - b;
        assert_eq!(diff.as_rows()[2], [4.0, 6.0, 8.0]);

        let scaled: Matrix3<f64> = a * 2.0;
        assert_eq!(scaled.as_rows()[1], [8.0, 10.0, 12.0]);
        assert_eq!(2.0 * a, scaled);
        assert_eq!(scaled / 2.0, a);
        assert_eq!(-a + a, Matrix3::zero());

        let mut c = a;
        c += b;
        c -= b;
        c *= 3.0;
        c /= 3.0;
        assert_eq!(c, a);
        // inputs are untouched
        assert_eq!(a.as_rows()[0], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_matrix_matrix_mul() {
        let a = Matrix3::new([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = Matrix3::new([[9.0f32, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);

        let c = a * b;

        assert_eq!(c.as_rows()[0], [30.0, 24.0, 18.0]);
        assert_eq!(c.as_rows()[1], [84.0, 69.0, 54.0]);
        assert_eq!(c.as_rows()[2], [138.0, 114.0, 90.0]);
    }

    #[test]
    fn test_mul_matches_written_out_4x4() {
        let a = Matrix4::new([
            [1.0, -2.0, 3.0, 0.5],
            [4.0, 0.0, -1.0, 2.0],
            [0.25, 7.0, 1.0, -3.0],
            [2.0, 1.0, 0.0, 1.0],
        ]);
        let b = Matrix4::new([
            [0.0, 1.0, 2.0, -1.0],
            [3.0, -0.5, 1.0, 4.0],
            [1.0, 2.0, -2.0, 0.0],
            [5.0, 0.0, 1.0, 1.0],
        ]);
        let (p, q) = (a.as_rows(), b.as_rows());
        let expected: [[f64; 4]; 4] = core::array::from_fn(|y| {
            core::array::from_fn(|x| {
                p[y][0] * q[0][x] + p[y][1] * q[1][x] + p[y][2] * q[2][x] + p[y][3] * q[3][x]
            })
        });

        assert_eq!((a * b).as_rows(), &expected);
        assert_eq!((a * b).as_rows()[0], [-0.5, 8.0, -5.5, -8.5]);
    }

    #[test]
    fn test_rectangular_mul_shapes() {
        let a = sample();
        let b = Matrix3x4::new([
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
        ]);
        let c: Matrix2x4 = a * b;
        assert_eq!(c.as_rows(), &[[1.0, 2.0, 3.0, 6.0], [4.0, 5.0, 6.0, 15.0]]);

        let d: Matrix2 = a * a.transpose();
        assert_eq!(d.as_rows(), &[[14.0, 32.0], [32.0, 77.0]]);
    }

    #[test]
    fn test_dynamic_fallback() {
        let a = sample();
        let dynamic = Matrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();

        let product = a.multiply_dynamic(&dynamic).unwrap();
        assert_eq!(product.to_rows(), vec![vec![6.0], vec![15.0]]);

        assert!(matches!(
            a.multiply_dynamic(&a),
            Err(MatrixError::SizeMismatch { operation: "multiply", .. })
        ));

        let sum = a.add_dynamic(&Matrix::from(sample())).unwrap();
        assert_eq!(sum.row(1), Ok(vec![8.0, 10.0, 12.0]));
        assert!(a.subtract_dynamic(&a.transpose()).is_err());
    }

    #[test]
    fn test_transpose() {
        let t: Matrix3x2 = sample().transpose();
        assert_eq!(t.as_rows(), &[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn test_gl_data_layout() {
        let m = sample();
        let gl = m.gl_data();
        assert_eq!(gl.len(), 6);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(gl[x + y * 3], m[(x, y)] as f32);
            }
        }
        assert_eq!(gl, vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_precision_boundary() {
        let narrow = Matrix2::new([[0.5f32, 1.5], [-2.0, 4.0]]);
        let wide: Matrix2 = narrow.into();
        assert_eq!(wide.as_rows(), &[[0.5, 1.5], [-2.0, 4.0]]);
        assert_eq!(wide.to_single_precision(), narrow);

        let lossy = Matrix2::new([[0.1, 0.0], [0.0, 0.0]]).to_single_precision();
        assert_eq!(lossy[(0, 0)], 0.1f32);
    }

    #[test]
    fn test_dynamic_conversions() {
        let dynamic = Matrix::from(sample());
        assert_eq!(dynamic.shape(), (2, 3));
        assert_eq!(dynamic.get(2, 1), Ok(6.0));

        let back = Matrix2x3::<f64>::try_from(&dynamic).unwrap();
        assert_eq!(back, sample());

        let wrong = Matrix3x2::<f64>::try_from(&dynamic);
        assert!(matches!(wrong, Err(MatrixError::SizeMismatch { .. })));
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix3::<f64>::zero();
        m.set(0, 0, 1.0).unwrap();
        m.set(1, 1, 1.0).unwrap();
        m.set(2, 2, 1.0).unwrap();

        // swap rows 0 and 1
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m.as_rows()[0], [0.0, 1.0, 0.0]);
        assert_eq!(m.as_rows()[1], [1.0, 0.0, 0.0]);

        // scale row 0 by 2
        m.scale_row(0, 2.0).unwrap();
        assert_eq!(m.as_rows()[0], [0.0, 2.0, 0.0]);

        // add row1 * 3 into row0
        m.add_row_multiple(0, 1, 3.0).unwrap();
        assert_eq!(m.as_rows()[0], [3.0, 2.0, 0.0]);

        assert!(m.swap_rows(0, 3).is_err());
        assert!(m.scale_row(5, 1.0).is_err());
    }

    #[test]
    fn test_approx_eq() {
        let a = sample();
        let b = a + Matrix2x3::from_fn(|_, _| 1e-12);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(a.approx_eq_with(&b, &Tolerance::default()));
        assert!(!a.approx_eq_with(&b, &Tolerance::exact()));
    }

    #[test]
    fn test_display() {
        let m = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
        assert_eq!(format!("{:.1}", m), "[1.0, 2.0]\n[3.0, 4.0]");
    }

    #[test]
    fn test_matrix_roundtrip() {
        let config = bincode::config::standard();
        let m = Matrix3::new([
            [1.0f32, 2.0f32, 3.0f32],
            [4.0f32, 5.0f32, 6.0f32],
            [7.0f32, 8.0f32, 9.0f32],
        ]);

        let encoded = bincode::serde::encode_to_vec(m, config).unwrap();
        let (decoded, _): (Matrix3<f32>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(m, decoded);

        let rect = sample();
        let encoded = bincode::serde::encode_to_vec(rect, config).unwrap();
        let (decoded, _): (Matrix2x3, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(rect, decoded);
    }
}
