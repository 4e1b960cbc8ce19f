// src/numerics/types/transform.rs
// Geometric factories. Angles are in radians. Every factory targets the
// row-vector convention `v' = v * M`. Every shape with a 3x3 linear block
// keeps it in the leading rows and columns; `Matrix3x4` carries its
// translation in the last column.

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::fixed::{
    Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3,
};
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::{Vector2, Vector3, Vector4};

type Block3<T> = [[T; 3]; 3];

fn axis_angle_block<T: FloatingPoint>(axis: Vector3<T>, angle: T) -> Block3<T> {
    let axis = axis.normalized();
    let (x, y, z) = (axis.x, axis.y, axis.z);

    let cos = (-angle).cos();
    let sin = (-angle).sin();
    let t = T::one() - cos;

    let t_xx = t * x * x;
    let t_xy = t * x * y;
    let t_xz = t * x * z;
    let t_yy = t * y * y;
    let t_yz = t * y * z;
    let t_zz = t * z * z;

    let sin_x = sin * x;
    let sin_y = sin * y;
    let sin_z = sin * z;

    [
        [t_xx + cos, t_xy - sin_z, t_xz + sin_y],
        [t_xy + sin_z, t_yy + cos, t_yz - sin_x],
        [t_xz - sin_y, t_yz + sin_x, t_zz + cos],
    ]
}

fn rotation_x_block<T: FloatingPoint>(angle: T) -> Block3<T> {
    let (c, s) = (angle.cos(), angle.sin());
    let (o, l) = (T::zero(), T::one());
    [[l, o, o], [o, c, s], [o, -s, c]]
}

fn rotation_y_block<T: FloatingPoint>(angle: T) -> Block3<T> {
    let (c, s) = (angle.cos(), angle.sin());
    let (o, l) = (T::zero(), T::one());
    [[c, o, -s], [o, l, o], [s, o, c]]
}

fn rotation_z_block<T: FloatingPoint>(angle: T) -> Block3<T> {
    let (c, s) = (angle.cos(), angle.sin());
    let (o, l) = (T::zero(), T::one());
    [[c, s, o], [-s, c, o], [o, o, l]]
}

fn scale_block<T: FloatingPoint>(x: T, y: T, z: T) -> Block3<T> {
    let o = T::zero();
    [[x, o, o], [o, y, o], [o, o, z]]
}

fn rotation_2d<T: FloatingPoint>(angle: T) -> [[T; 2]; 2] {
    let (c, s) = (angle.cos(), angle.sin());
    [[c, s], [-s, c]]
}

impl<T: FloatingPoint> Matrix3<T> {
    fn from_block(block: Block3<T>) -> Self {
        Self::new(block)
    }
}

impl<T: FloatingPoint> Matrix4<T> {
    fn from_block(block: Block3<T>) -> Self {
        let mut out = Self::identity();
        for (y, row) in block.iter().enumerate() {
            out.data[y][..3].copy_from_slice(row);
        }
        out
    }
}

impl<T: FloatingPoint> Matrix4x3<T> {
    fn from_block(block: Block3<T>) -> Self {
        let mut out = Self::zero();
        out.data[..3].copy_from_slice(&block);
        out
    }
}

impl<T: FloatingPoint> Matrix3x4<T> {
    fn from_block(block: Block3<T>) -> Self {
        let mut out = Self::zero();
        for (y, row) in block.iter().enumerate() {
            out.data[y][..3].copy_from_slice(row);
        }
        out
    }
}

/// Rotation and scale factories shared by the shapes with a 3x3 linear block.
macro_rules! linear_3d_factories {
    ($($ty:ident),+) => {$(
        impl<T: FloatingPoint> $ty<T> {
            /// Rotation of `angle` radians around `axis`. The axis does not
            /// need to be normalized.
            pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
                Self::from_block(axis_angle_block(axis, angle))
            }

            pub fn rotation_x(angle: T) -> Self {
                Self::from_block(rotation_x_block(angle))
            }

            pub fn rotation_y(angle: T) -> Self {
                Self::from_block(rotation_y_block(angle))
            }

            pub fn rotation_z(angle: T) -> Self {
                Self::from_block(rotation_z_block(angle))
            }

            /// Uniform scale.
            pub fn scale(factor: T) -> Self {
                Self::from_block(scale_block(factor, factor, factor))
            }

            pub fn scale_xyz(x: T, y: T, z: T) -> Self {
                Self::from_block(scale_block(x, y, z))
            }
        }
    )+};
}

linear_3d_factories!(Matrix3, Matrix4, Matrix4x3, Matrix3x4);

impl<T: FloatingPoint> Matrix2<T> {
    pub fn rotation(angle: T) -> Self {
        Self::new(rotation_2d(angle))
    }

    pub fn scale(factor: T) -> Self {
        Self::scale_xy(factor, factor)
    }

    pub fn scale_xy(x: T, y: T) -> Self {
        let o = T::zero();
        Self::new([[x, o], [o, y]])
    }
}

impl<T: FloatingPoint> Matrix2x3<T> {
    pub fn rotation(angle: T) -> Self {
        let [[a, b], [c, d]] = rotation_2d(angle);
        Self::new([[a, b, T::zero()], [c, d, T::zero()]])
    }

    pub fn scale(factor: T) -> Self {
        Self::scale_xy(factor, factor)
    }

    pub fn scale_xy(x: T, y: T) -> Self {
        let o = T::zero();
        Self::new([[x, o, o], [o, y, o]])
    }
}

impl<T: FloatingPoint> Matrix3x2<T> {
    /// 2D rotation; the third row (translation) is zero.
    pub fn rotation(angle: T) -> Self {
        let [r0, r1] = rotation_2d(angle);
        Self::new([r0, r1, [T::zero(); 2]])
    }

    pub fn scale(factor: T) -> Self {
        Self::scale_xy(factor, factor)
    }

    pub fn scale_xy(x: T, y: T) -> Self {
        let o = T::zero();
        Self::new([[x, o], [o, y], [o, o]])
    }

    pub fn translation(x: T, y: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new([[l, o], [o, l], [x, y]])
    }

    /// `(p.x, p.y, 1) * M`
    pub fn transform_point(&self, p: Vector2<T>) -> Vector2<T> {
        Vector2::new(p.x, p.y) * Matrix2::new([self.data[0], self.data[1]])
            + Vector2::from_array(self.data[2])
    }
}

impl<T: FloatingPoint> Matrix4<T> {
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut out = Self::identity();
        out.data[3] = [x, y, z, T::one()];
        out
    }

    /// Orthographic projection centred on the view axis.
    pub fn orthographic(width: T, height: T, near: T, far: T) -> Self {
        let half_w = width / T::two();
        let half_h = height / T::two();
        Self::orthographic_off_center(-half_w, half_w, -half_h, half_h, near, far)
    }

    pub fn orthographic_off_center(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let inv_rl = T::one() / (right - left);
        let inv_tb = T::one() / (top - bottom);
        let inv_fn = T::one() / (far - near);

        let mut out = Self::identity();
        out.data[0][0] = T::two() * inv_rl;
        out.data[1][1] = T::two() * inv_tb;
        out.data[2][2] = -T::two() * inv_fn;
        out.data[3] = [
            -(right + left) * inv_rl,
            -(top + bottom) * inv_tb,
            -(far + near) * inv_fn,
            T::one(),
        ];
        out
    }

    /// Perspective projection from a vertical field of view.
    ///
    /// # Errors
    ///
    /// `ArgumentOutOfRange` when `fovy` is outside `(0, π]`, when `aspect`,
    /// `near` or `far` is not positive, or when `near` is not below `far`.
    /// NaN never passes a check.
    pub fn perspective_field_of_view(fovy: T, aspect: T, near: T, far: T) -> Result<Self> {
        let pi = T::from_f64(core::f64::consts::PI);
        if !(fovy > T::zero() && fovy <= pi) {
            return Err(out_of_range("fovy", fovy, "must be in (0, pi]"));
        }
        if !(aspect > T::zero()) {
            return Err(out_of_range("aspect", aspect, "must be positive"));
        }
        if !(near > T::zero()) {
            return Err(out_of_range("near", near, "must be positive"));
        }
        if !(far > T::zero()) {
            return Err(out_of_range("far", far, "must be positive"));
        }

        let max_y = near * (fovy / T::two()).tan();
        let min_y = -max_y;
        let min_x = min_y * aspect;
        let max_x = max_y * aspect;

        Self::perspective_off_center(min_x, max_x, min_y, max_y, near, far)
    }

    pub fn perspective_off_center(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self> {
        if !(near > T::zero()) {
            return Err(out_of_range("near", near, "must be positive"));
        }
        if !(far > T::zero()) {
            return Err(out_of_range("far", far, "must be positive"));
        }
        if !(near < far) {
            return Err(out_of_range("near", near, "must be less than far"));
        }

        let o = T::zero();
        let x = T::two() * near / (right - left);
        let y = T::two() * near / (top - bottom);
        let a = (right + left) / (right - left);
        let b = (top + bottom) / (top - bottom);
        let c = -(far + near) / (far - near);
        let d = -(T::two() * far * near) / (far - near);

        Ok(Self::new([
            [x, o, o, o],
            [o, y, o, o],
            [a, b, c, -T::one()],
            [o, o, d, o],
        ]))
    }

    /// World-to-camera transform looking from `eye` at `target`.
    pub fn look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Self {
        let z = (eye - target).normalized();
        let x = up.cross(&z).normalized();
        let y = z.cross(&x).normalized();

        let o = T::zero();
        Self::new([
            [x.x, y.x, z.x, o],
            [x.y, y.y, z.y, o],
            [x.z, y.z, z.z, o],
            [-x.dot(&eye), -y.dot(&eye), -z.dot(&eye), T::one()],
        ])
    }

    /// `(p, 1) * M`, without the perspective divide.
    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        (Vector4::from_vector3(p, T::one()) * *self).truncate()
    }

    /// `(v, 0) * M`; translation does not apply.
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        (Vector4::from_vector3(v, T::zero()) * *self).truncate()
    }

    pub fn extract_translation(&self) -> Vector3<T> {
        let [x, y, z, _] = self.data[3];
        Vector3::new(x, y, z)
    }

    /// Length of each basis row.
    pub fn extract_scale(&self) -> Vector3<T> {
        let len = |y: usize| {
            let [a, b, c, _] = self.data[y];
            Vector3::new(a, b, c).length()
        };
        Vector3::new(len(0), len(1), len(2))
    }

    pub fn clear_translation(&mut self) {
        let w = self.data[3][3];
        self.data[3] = [T::zero(), T::zero(), T::zero(), w];
    }
}

impl<T: FloatingPoint> Matrix4x3<T> {
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut out = Self::from_block(scale_block(T::one(), T::one(), T::one()));
        out.data[3] = [x, y, z];
        out
    }
}

impl<T: FloatingPoint> Matrix3x4<T> {
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut out = Self::from_block(scale_block(T::one(), T::one(), T::one()));
        out.data[0][3] = x;
        out.data[1][3] = y;
        out.data[2][3] = z;
        out
    }
}

fn out_of_range<T: FloatingPoint>(name: &'static str, value: T, reason: &'static str) -> MatrixError {
    tracing::debug!(name, value = value.to_f64(), reason, "rejected projection argument");
    MatrixError::ArgumentOutOfRange {
        name,
        value: value.to_f64(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::square::SquareMatrix;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-12;

    fn assert_vec3_close(a: Vector3, b: Vector3) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_translation_moves_origin() {
        let m = Matrix4::translation(5.0, 0.0, 0.0);
        let origin = Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin * m, Vector4::new(5.0, 0.0, 0.0, 1.0));
        assert_eq!(m.transform_point(Vector3::zero()), Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(m.transform_vector(Vector3::unit_x()), Vector3::unit_x());
    }

    #[test]
    fn test_rotation_composition() {
        let (a, b) = (0.3, 1.1);
        let composed = Matrix4::rotation_z(a) * Matrix4::rotation_z(b);
        assert!(composed.approx_eq(&Matrix4::rotation_z(a + b), EPS));

        let composed2 = Matrix2::rotation(a) * Matrix2::rotation(b);
        assert!(composed2.approx_eq(&Matrix2::rotation(a + b), EPS));

        let composed3 = Matrix3::rotation_x(a) * Matrix3::rotation_x(b);
        assert!(composed3.approx_eq(&Matrix3::rotation_x(a + b), EPS));
    }

    #[test]
    fn test_elementary_rotations_row_vector_convention() {
        // +90 degrees about z takes x to y
        let m = Matrix3::rotation_z(FRAC_PI_2);
        assert_vec3_close(Vector3::unit_x() * m, Vector3::unit_y());

        let m = Matrix3::rotation_x(FRAC_PI_2);
        assert_vec3_close(Vector3::unit_y() * m, Vector3::unit_z());

        let m = Matrix3::rotation_y(FRAC_PI_2);
        assert_vec3_close(Vector3::unit_z() * m, Vector3::unit_x());
    }

    #[test]
    fn test_axis_angle_matches_elementary_rotations() {
        for angle in [0.0, 0.4, FRAC_PI_4, 2.0, -1.3] {
            assert!(Matrix3::from_axis_angle(Vector3::unit_x(), angle)
                .approx_eq(&Matrix3::rotation_x(angle), EPS));
            assert!(Matrix3::from_axis_angle(Vector3::unit_y(), angle)
                .approx_eq(&Matrix3::rotation_y(angle), EPS));
            assert!(Matrix4::from_axis_angle(Vector3::new(0.0, 0.0, 3.0), angle)
                .approx_eq(&Matrix4::rotation_z(angle), EPS));
        }
    }

    #[test]
    fn test_axis_angle_is_orthonormal() {
        let m = Matrix3::from_axis_angle(Vector3::new(1.0, 2.0, -0.5), 0.77);
        assert!((m * m.transpose()).approx_eq(&Matrix3::identity(), EPS));
        assert!((m.determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rectangular_layouts() {
        let m43 = Matrix4x3::translation(1.0, 2.0, 3.0);
        assert_eq!(m43.row3(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m43.row0(), Vector3::new(1.0, 0.0, 0.0));

        let m34 = Matrix3x4::translation(1.0, 2.0, 3.0);
        assert_eq!(m34.column3(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m34 * Vector4::new(0.0, 0.0, 0.0, 1.0), Vector3::new(1.0, 2.0, 3.0));

        // same linear block as the square factory, zero fourth column
        let r34 = Matrix3x4::rotation_z(0.6);
        let r3 = Matrix3::rotation_z(0.6);
        assert_eq!(r34.row0(), Vector4::from_vector3(r3.row0(), 0.0));
        assert_eq!(r34.row1(), Vector4::from_vector3(r3.row1(), 0.0));
        assert_eq!(r34.row2(), Vector4::from_vector3(r3.row2(), 0.0));
        assert_eq!(r34.column3(), Vector3::zero());

        let axis = Vector3::new(1.0, 2.0, -0.5);
        let a34 = Matrix3x4::from_axis_angle(axis, 0.9);
        let a3 = Matrix3::from_axis_angle(axis, 0.9);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(a34[(x, y)], a3[(x, y)]);
            }
        }
        assert_eq!(Matrix3x4::rotation_x(0.3)[(2, 1)], Matrix3::rotation_x(0.3)[(2, 1)]);

        let r43 = Matrix4x3::scale_xyz(2.0, 3.0, 4.0);
        assert_eq!(r43.row3(), Vector3::zero());
        assert_eq!(r43.column1(), Vector4::new(0.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn test_2d_factories() {
        let s = Matrix2::scale_xy(2.0, 3.0);
        assert_eq!(Vector2::new(1.0, 1.0) * s, Vector2::new(2.0, 3.0));
        assert_eq!(Matrix2::scale(4.0).trace(), 8.0);

        let r23 = Matrix2x3::rotation(PI);
        assert_eq!(r23.column2(), Vector2::zero());

        let m = Matrix3x2::translation(3.0, -1.0) * Matrix2::identity();
        assert_eq!(m.transform_point(Vector2::new(1.0, 1.0)), Vector2::new(4.0, 0.0));

        let rs = Matrix3x2::rotation(FRAC_PI_2);
        let p = rs.transform_point(Vector2::new(1.0, 0.0));
        assert!((p - Vector2::new(0.0, 1.0)).length() < EPS);
        assert_eq!(Matrix3x2::scale(2.0).row2(), Vector2::zero());
    }

    #[test]
    fn test_orthographic() {
        let m = Matrix4::orthographic(2.0, 2.0, 0.0, 1.0);
        assert_eq!(m.as_rows()[0][0], 1.0);
        assert_eq!(m.as_rows()[2][2], -2.0);
        assert_eq!(m.row3(), Vector4::new(0.0, 0.0, -1.0, 1.0));

        let off = Matrix4::orthographic_off_center(0.0, 4.0, 0.0, 2.0, 1.0, 3.0);
        let corner = off.transform_point(Vector3::new(4.0, 2.0, -1.0));
        assert_vec3_close(corner, Vector3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn test_perspective() {
        let m = Matrix4::perspective_field_of_view(FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
        assert!((m.as_rows()[0][0] - 1.0).abs() < EPS);
        assert!((m.as_rows()[1][1] - 1.0).abs() < EPS);
        assert_eq!(m.as_rows()[2][3], -1.0);
        assert!((m.as_rows()[3][2] - (-20.0 / 9.0)).abs() < EPS);

        // near plane maps to depth -1
        let clip = Vector4::new(0.0, 0.0, -1.0, 1.0) * m;
        assert!((clip.z / clip.w + 1.0).abs() < EPS);
    }

    #[test]
    fn test_perspective_rejects_invalid_arguments() {
        let bad = [
            (0.0, 1.0, 1.0, 10.0),
            (PI + 0.01, 1.0, 1.0, 10.0),
            (1.0, 0.0, 1.0, 10.0),
            (1.0, 1.0, 0.0, 10.0),
            (1.0, 1.0, 1.0, -1.0),
            (1.0, 1.0, 10.0, 1.0),
            (f64::NAN, 1.0, 1.0, 10.0),
            (1.0, f64::NAN, 1.0, 10.0),
            (1.0, 1.0, f64::NAN, 10.0),
            (1.0, 1.0, 1.0, f64::NAN),
        ];
        for (fovy, aspect, near, far) in bad {
            assert!(matches!(
                Matrix4::perspective_field_of_view(fovy, aspect, near, far),
                Err(MatrixError::ArgumentOutOfRange { .. })
            ));
        }

        assert!(Matrix4::perspective_field_of_view(PI, 1.0, 1.0, 2.0).is_ok());
        for (near, far) in [(f64::NAN, 10.0), (1.0, f64::NAN), (f64::NAN, f64::NAN)] {
            assert!(matches!(
                Matrix4::perspective_off_center(-1.0, 1.0, -1.0, 1.0, near, far),
                Err(MatrixError::ArgumentOutOfRange { .. })
            ));
        }
        assert_eq!(
            Matrix4::perspective_off_center(-1.0, 1.0, -1.0, 1.0, 2.0, 2.0),
            Err(MatrixError::ArgumentOutOfRange {
                name: "near",
                value: 2.0,
                reason: "must be less than far"
            })
        );
    }

    #[test]
    fn test_look_at() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let m = Matrix4::look_at(eye, Vector3::zero(), Vector3::unit_y());
        assert!(m.approx_eq(&Matrix4::translation(0.0, 0.0, -5.0), EPS));

        let m = Matrix4::look_at(Vector3::new(3.0, 4.0, -2.0), Vector3::new(1.0, 0.0, 0.0), Vector3::unit_y());
        assert_vec3_close(m.transform_point(Vector3::new(3.0, 4.0, -2.0)), Vector3::zero());
        let mut linear = m;
        linear.clear_translation();
        assert!((linear * linear.transpose()).approx_eq(&Matrix4::identity(), 1e-9));
    }

    #[test]
    fn test_extract_and_clear() {
        let mut m = Matrix4::scale_xyz(2.0, 3.0, 4.0) * Matrix4::translation(1.0, 2.0, 3.0);
        assert_eq!(m.extract_translation(), Vector3::new(1.0, 2.0, 3.0));
        assert_vec3_close(m.extract_scale(), Vector3::new(2.0, 3.0, 4.0));

        m.clear_translation();
        assert_eq!(m.extract_translation(), Vector3::zero());
        assert_eq!(m.as_rows()[3][3], 1.0);
    }

    #[test]
    fn test_single_precision_factories() {
        let m = Matrix4::<f32>::rotation_z(core::f32::consts::FRAC_PI_2);
        let v = Vector4::new(1.0f32, 0.0, 0.0, 1.0) * m;
        assert!((v.y - 1.0).abs() < 1e-6);
        assert_eq!(m.gl_data().len(), 16);
    }
}
