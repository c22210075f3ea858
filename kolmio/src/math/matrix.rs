use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::{common::FloatValueType, vector::Vec3, vector::Vec4};

/// A row-major 4x4 `Matrix4x4`.
///
/// The whole crate uses the row vector convention: a point is a 1x4 row
/// multiplied against the matrix, translations live on row 3 and in a product
/// `a * b` the effect of `a` is applied first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        Self {
            m: [
                [T::one(), T::zero(), T::zero(), T::zero()],
                [T::zero(), T::one(), T::zero(), T::zero()],
                [T::zero(), T::zero(), T::one(), T::zero()],
                [T::zero(), T::zero(), T::zero(), T::one()],
            ],
        }
    }

    /// Creates a new `Matrix4x4` filled with zeros.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        // NaNs are the rare special case so no need to early out
        self.m
            .iter()
            // Not all T have is_nan() so rely on NaN != NaN
            .flat_map(|row| row.iter().map(|t| t != t))
            .any(|p| p)
    }

    /// Returns the `i`th row of this `Matrix4x4`.
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns the `i`th column of this `Matrix4x4`.
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
                [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
            ],
        }
    }

    /// Returns the inverse of this `Matrix4x4`, assuming it is a pure
    /// rotation+translation.
    ///
    /// The rotation block of such a matrix is orthonormal so its inverse is
    /// the transpose, and the inverse translation falls out as negated dot
    /// products against the transposed columns. Much cheaper than a general
    /// inverse, but a matrix with scale or skew silently produces garbage.
    /// The precondition is only checked by a debug assert.
    pub fn rigid_inverse(&self) -> Self {
        debug_assert!(self.is_rigid());

        let m = &self.m;
        let mut inv = Self::zeros();
        // Transposed rotation block
        for r in 0..3 {
            for c in 0..3 {
                inv.m[r][c] = m[c][r];
            }
        }
        // Translation row against the transposed columns
        inv.m[3][0] = -(m[3][0] * inv.m[0][0] + m[3][1] * inv.m[1][0] + m[3][2] * inv.m[2][0]);
        inv.m[3][1] = -(m[3][0] * inv.m[0][1] + m[3][1] * inv.m[1][1] + m[3][2] * inv.m[2][1]);
        inv.m[3][2] = -(m[3][0] * inv.m[0][2] + m[3][1] * inv.m[1][2] + m[3][2] * inv.m[2][2]);
        inv.m[3][3] = T::one();

        inv
    }

    /// Checks that the rotation block is orthonormal and the last column is
    /// (0,0,0,1) within a loose epsilon.
    #[cfg(debug_assertions)]
    fn is_rigid(&self) -> bool {
        let eps = T::from_f64(1e-3).unwrap();
        let row = |i: usize| Vec3::new(self.m[i][0], self.m[i][1], self.m[i][2]);

        let mut rigid = true;
        for i in 0..3 {
            rigid &= (row(i).len_sqr() - T::one()).abs() < eps;
            rigid &= row(i).dot(row((i + 1) % 3)).abs() < eps;
            rigid &= self.m[i][3].abs() < eps;
        }
        rigid && (self.m[3][3] - T::one()).abs() < eps
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        debug_assert!(!ret.has_nans());
        ret
    }
}

impl<'a, T> Mul<Vec4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec4<T>;

    /// Applies this `Matrix4x4` to a homogeneous row vector.
    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let m = &self.m;
        Vec4::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }
}

impl<'a, T> Mul<Vec3<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    /// Applies the rotation block of this `Matrix4x4` to a direction,
    /// ignoring translation.
    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        Vec3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].abs_diff_eq(&other.m[row][col], epsilon) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].relative_eq(&other.m[row][col], epsilon, max_relative) {
                    return false;
                }
            }
        }
        true
    }
}
