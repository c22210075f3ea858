use approx::AbsDiffEq;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{
    common::{FloatValueType, ValueType},
    vector::Vec3,
};

// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A three-dimensional position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl<T> Point3<T>
where
    T: ValueType,
{
    /// Creates a new `Point3`.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans());
        p
    }

    /// Creates a new `Point3` at the origin.
    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Checks if this `Point3` contains NaNs.
    pub fn has_nans(&self) -> bool {
        // Not all T have is_nan() so rely on NaN != NaN
        self.x != self.x || self.y != self.y || self.z != self.z
    }
}

impl<T> Sub for Point3<T>
where
    T: ValueType,
{
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn add(self, other: Vec3<T>) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T> AddAssign<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T> Sub<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn sub(self, other: Vec3<T>) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> SubAssign<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn sub_assign(&mut self, other: Vec3<T>) {
        *self = *self - other;
    }
}

impl<T> AbsDiffEq for Point3<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}
