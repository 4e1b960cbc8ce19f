// src/numerics/types/point.rs
// Points are aliases of the vector types.

use super::vector::{Vector2, Vector3};

/// Point2 is an alias to Vector2 to represent positions in the plane.
pub type Point2<T = f64> = Vector2<T>;

/// Point3 is an alias to Vector3 to represent points in space.
///
/// The alias keeps generic template parameterization.
pub type Point3<T = f64> = Vector3<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_alias_behaviour() {
        let p: Point3 = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.x, 1.0_f64);

        let q: Point2<f32> = Point2::new(0.5, 0.25);
        assert_eq!(q.y, 0.25_f32);
    }

    #[test]
    fn test_point3_bincode_roundtrip() {
        let config = bincode::config::standard();
        let p: Point3<f64> = Point3::new(1.1, 2.2, 3.3);

        let encoded = bincode::serde::encode_to_vec(p, config).unwrap();
        let (decoded, _): (Point3<f64>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(p, decoded);
    }
}
