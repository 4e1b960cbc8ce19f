// src/numerics/types/accessors.rs
// Row/column vector access and matrix-vector products for each fixed shape.

use core::ops::Mul;

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::fixed::FixedMatrix;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::{Vector2, Vector3, Vector4};

/// `$row_vec` holds one row (C components), `$col_vec` one column (R components).
macro_rules! shape_accessors {
    (
        $rows:literal x $cols:literal, $row_vec:ident, $col_vec:ident,
        rows: [$($row:ident, $set_row:ident => $ri:literal);+],
        columns: [$($col:ident, $set_col:ident => $ci:literal);+]
    ) => {
        impl<T: FloatingPoint> FixedMatrix<T, $rows, $cols> {
            /// Construct a matrix from its row vectors.
            pub fn from_rows($($row: $row_vec<T>),+) -> Self {
                Self::new([$($row.to_array()),+])
            }

            $(
                pub fn $row(&self) -> $row_vec<T> {
                    $row_vec::from_array(self.data[$ri])
                }

                pub fn $set_row(&mut self, value: $row_vec<T>) {
                    self.data[$ri] = value.to_array();
                }
            )+

            $(
                pub fn $col(&self) -> $col_vec<T> {
                    $col_vec::from_array(core::array::from_fn(|y| self.data[y][$ci]))
                }

                pub fn $set_col(&mut self, value: $col_vec<T>) {
                    for (row, v) in self.data.iter_mut().zip(value.to_array()) {
                        row[$ci] = v;
                    }
                }
            )+

            /// Row `y` as a vector.
            pub fn row(&self, y: usize) -> Result<$row_vec<T>> {
                match self.data.get(y) {
                    Some(row) => Ok($row_vec::from_array(*row)),
                    None => Err(MatrixError::out_of_range(0, y, $cols, $rows)),
                }
            }

            /// Column `x` as a vector.
            pub fn column(&self, x: usize) -> Result<$col_vec<T>> {
                if x >= $cols {
                    return Err(MatrixError::out_of_range(x, 0, $cols, $rows));
                }
                Ok($col_vec::from_array(core::array::from_fn(|y| self.data[y][x])))
            }

            pub fn set_row(&mut self, y: usize, value: $row_vec<T>) -> Result<()> {
                match self.data.get_mut(y) {
                    Some(row) => {
                        *row = value.to_array();
                        Ok(())
                    }
                    None => Err(MatrixError::out_of_range(0, y, $cols, $rows)),
                }
            }

            pub fn set_column(&mut self, x: usize, value: $col_vec<T>) -> Result<()> {
                if x >= $cols {
                    return Err(MatrixError::out_of_range(x, 0, $cols, $rows));
                }
                for (row, v) in self.data.iter_mut().zip(value.to_array()) {
                    row[x] = v;
                }
                Ok(())
            }
        }

        /// Column-vector product `M * v`.
        impl<T: FloatingPoint> Mul<$row_vec<T>> for FixedMatrix<T, $rows, $cols> {
            type Output = $col_vec<T>;

            fn mul(self, rhs: $row_vec<T>) -> $col_vec<T> {
                let v = rhs.to_array();
                $col_vec::from_array(core::array::from_fn(|y| {
                    let mut sum = T::zero();
                    for x in 0..$cols {
                        sum += self.data[y][x] * v[x];
                    }
                    sum
                }))
            }
        }

        /// Row-vector product `v * M`.
        impl<T: FloatingPoint> Mul<FixedMatrix<T, $rows, $cols>> for $col_vec<T> {
            type Output = $row_vec<T>;

            fn mul(self, rhs: FixedMatrix<T, $rows, $cols>) -> $row_vec<T> {
                let v = self.to_array();
                $row_vec::from_array(core::array::from_fn(|x| {
                    let mut sum = T::zero();
                    for y in 0..$rows {
                        sum += v[y] * rhs.data[y][x];
                    }
                    sum
                }))
            }
        }
    };
}

shape_accessors!(
    2 x 2, Vector2, Vector2,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1],
    columns: [column0, set_column0 => 0; column1, set_column1 => 1]
);

shape_accessors!(
    2 x 3, Vector3, Vector2,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1],
    columns: [column0, set_column0 => 0; column1, set_column1 => 1; column2, set_column2 => 2]
);

shape_accessors!(
    2 x 4, Vector4, Vector2,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1],
    columns: [
        column0, set_column0 => 0; column1, set_column1 => 1;
        column2, set_column2 => 2; column3, set_column3 => 3
    ]
);

shape_accessors!(
    3 x 2, Vector2, Vector3,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1; row2, set_row2 => 2],
    columns: [column0, set_column0 => 0; column1, set_column1 => 1]
);

shape_accessors!(
    3 x 3, Vector3, Vector3,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1; row2, set_row2 => 2],
    columns: [column0, set_column0 => 0; column1, set_column1 => 1; column2, set_column2 => 2]
);

shape_accessors!(
    3 x 4, Vector4, Vector3,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1; row2, set_row2 => 2],
    columns: [
        column0, set_column0 => 0; column1, set_column1 => 1;
        column2, set_column2 => 2; column3, set_column3 => 3
    ]
);

shape_accessors!(
    4 x 2, Vector2, Vector4,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1; row2, set_row2 => 2; row3, set_row3 => 3],
    columns: [column0, set_column0 => 0; column1, set_column1 => 1]
);

shape_accessors!(
    4 x 3, Vector3, Vector4,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1; row2, set_row2 => 2; row3, set_row3 => 3],
    columns: [column0, set_column0 => 0; column1, set_column1 => 1; column2, set_column2 => 2]
);

shape_accessors!(
    4 x 4, Vector4, Vector4,
    rows: [row0, set_row0 => 0; row1, set_row1 => 1; row2, set_row2 => 2; row3, set_row3 => 3],
    columns: [
        column0, set_column0 => 0; column1, set_column1 => 1;
        column2, set_column2 => 2; column3, set_column3 => 3
    ]
);
