// src/numerics/types/vector.rs
// Vector2/3/4 generic implementations with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;

macro_rules! vector_type {
    (
        $(#[$meta:meta])*
        $name:ident, $n:literal, ($($field:ident),+), ($($unit:ident => $axis:ident),+)
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $name<T: FloatingPoint = f64> {
            $(pub $field: T,)+
        }

        impl<T: FloatingPoint> $name<T> {
            /// Number of components.
            pub const DIMENSION: usize = $n;

            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Vector with every component set to `value`.
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            pub fn one() -> Self {
                Self::splat(T::one())
            }

            $(
                pub fn $unit() -> Self {
                    let mut v = Self::zero();
                    v.$axis = T::one();
                    v
                }
            )+

            pub fn dot(&self, other: &Self) -> T {
                let mut sum = T::zero();
                $(sum += self.$field * other.$field;)+
                sum
            }

            /// Return the squared length (avoids sqrt)
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Unit-length copy of the vector. A zero vector stays zero.
            pub fn normalized(&self) -> Self {
                let length = self.length();
                if length == T::zero() {
                    return *self;
                }
                *self / length
            }

            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            pub fn from_array(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }

            pub fn map(self, f: impl Fn(T) -> T) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
        }

        impl $name<f64> {
            /// Explicit narrowing to single precision.
            pub fn to_single_precision(&self) -> $name<f32> {
                $name { $($field: self.$field as f32),+ }
            }
        }

        impl From<$name<f32>> for $name<f64> {
            fn from(v: $name<f32>) -> Self {
                Self { $($field: v.$field as f64),+ }
            }
        }

        impl<T> Serialize for $name<T>
        where
            T: FloatingPoint + Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                ($(&self.$field,)+).serialize(serializer)
            }
        }

        impl<'de, T> Deserialize<'de> for $name<T>
        where
            T: FloatingPoint + Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let array = <[T; $n]>::deserialize(deserializer)?;
                Ok(Self::from_array(array))
            }
        }

        impl<T: FloatingPoint> Add for $name<T> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl<T: FloatingPoint> Sub for $name<T> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl<T: FloatingPoint> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: FloatingPoint> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, scalar: T) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl<T: FloatingPoint> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, scalar: T) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl<T: FloatingPoint> AddAssign for $name<T> {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl<T: FloatingPoint> SubAssign for $name<T> {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        // Conversions between vectors and arrays [T; N]

        impl<T: FloatingPoint> From<[T; $n]> for $name<T> {
            fn from(array: [T; $n]) -> Self {
                Self::from_array(array)
            }
        }

        impl<T: FloatingPoint> From<&[T; $n]> for $name<T> {
            fn from(array: &[T; $n]) -> Self {
                Self::from_array(*array)
            }
        }

        impl<T: FloatingPoint> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: FloatingPoint> From<&$name<T>> for [T; $n] {
            fn from(v: &$name<T>) -> Self {
                v.to_array()
            }
        }
    };
}

vector_type!(
    /// Two component vector, also used as a row of a two-column matrix.
    Vector2, 2, (x, y), (unit_x => x, unit_y => y)
);

vector_type!(
    /// Vector3 is a simple 3D vector type with template-able numeric type.
    Vector3, 3, (x, y, z), (unit_x => x, unit_y => y, unit_z => z)
);

vector_type!(
    /// Homogeneous 4D vector.
    Vector4, 4, (x, y, z, w), (unit_x => x, unit_y => y, unit_z => z, unit_w => w)
);

// Conversions between vectors and tuples

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
            z: tuple.2,
        }
    }
}

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<T: FloatingPoint> Vector4<T> {
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    /// Drop the w component.
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}
