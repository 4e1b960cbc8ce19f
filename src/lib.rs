//! Dense matrices for 2D/3D graphics math.
//!
//! Two families share one capability surface ([`MatrixLike`]):
//!
//! - [`Matrix`], a runtime-sized `f64` matrix whose shape errors are reported
//!   as [`MatrixError`] values;
//! - [`FixedMatrix`] and its nine aliases [`Matrix2`] through [`Matrix4x3`]
//!   (`MatrixRxC` is R rows by C columns), whose shapes are checked by the
//!   compiler.
//!
//! Two-axis accessors take `(x, y)` with **`x` the column and `y` the row**.
//! Transform factories follow the row-vector convention `v' = v * M`, except
//! for `Matrix3x4`, which shares the same linear block but keeps its
//! translation in the last column.
//!
//! Every type is a plain value with no interior mutability, so they are
//! `Send + Sync`. Sharing a matrix that is being mutated across threads is
//! the caller's responsibility.
//!
//! ```
//! use glmatrix::prelude::*;
//!
//! let m = Matrix4::translation(5.0, 0.0, 0.0);
//! assert_eq!(m.transform_point(Vector3::zero()), Vector3::new(5.0, 0.0, 0.0));
//! ```

pub mod numerics;

pub use numerics::config::Tolerance;
pub use numerics::error::{MatrixError, Result};
pub use numerics::types::capability::{self, MatrixLike};
pub use numerics::types::fixed::{
    FixedMatrix, Matrix2, Matrix2x3, Matrix2x4, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x2,
    Matrix4x3,
};
pub use numerics::types::matrix::Matrix;
pub use numerics::types::point::{Point2, Point3};
pub use numerics::types::square::SquareMatrix;
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::{Vector2, Vector3, Vector4};

pub mod prelude {
    pub use crate::{
        FixedMatrix, FloatingPoint, Matrix, Matrix2, Matrix2x3, Matrix2x4, Matrix3, Matrix3x2,
        Matrix3x4, Matrix4, Matrix4x2, Matrix4x3, MatrixError, MatrixLike, Point2, Point3,
        SquareMatrix, Tolerance, Vector2, Vector3, Vector4,
    };
}
