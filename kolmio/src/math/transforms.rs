use super::{common::FloatValueType, matrix::Matrix4x4, vector::Vec3};

// Fixed-form matrices in the row vector convention. These are plain data
// variants of Matrix4x4, so factory functions instead of types.

/// Creates a new `Matrix4x4` that is a rotation of `deg` degrees around the x-axis.
pub fn rotation_x<T>(deg: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let rad = deg.to_radians();
    let cos_theta = rad.cos();
    let sin_theta = rad.sin();
    Matrix4x4::new([
        [T::one(), T::zero(), T::zero(), T::zero()],
        [T::zero(), cos_theta, -sin_theta, T::zero()],
        [T::zero(), sin_theta, cos_theta, T::zero()],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a new `Matrix4x4` that is a rotation of `deg` degrees around the y-axis.
pub fn rotation_y<T>(deg: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let rad = deg.to_radians();
    let cos_theta = rad.cos();
    let sin_theta = rad.sin();
    Matrix4x4::new([
        [cos_theta, T::zero(), sin_theta, T::zero()],
        [T::zero(), T::one(), T::zero(), T::zero()],
        [-sin_theta, T::zero(), cos_theta, T::zero()],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a new `Matrix4x4` that is a rotation of `deg` degrees around the z-axis.
pub fn rotation_z<T>(deg: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let rad = deg.to_radians();
    let cos_theta = rad.cos();
    let sin_theta = rad.sin();
    Matrix4x4::new([
        [cos_theta, -sin_theta, T::zero(), T::zero()],
        [sin_theta, cos_theta, T::zero(), T::zero()],
        [T::zero(), T::zero(), T::one(), T::zero()],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a new `Matrix4x4` that is a translation by `delta`.
pub fn translation<T>(delta: Vec3<T>) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    Matrix4x4::new([
        [T::one(), T::zero(), T::zero(), T::zero()],
        [T::zero(), T::one(), T::zero(), T::zero()],
        [T::zero(), T::zero(), T::one(), T::zero()],
        [delta.x, delta.y, delta.z, T::one()],
    ])
}

/// Creates a new perspective projection `Matrix4x4`.
///
/// `fov_rad` is the vertical field of view in radians and `aspect` is
/// height/width. Cell (2,3) routes the incoming z into w so the subsequent
/// perspective divide produces the 1/z foreshortening.
pub fn perspective<T>(fov_rad: T, aspect: T, near: T, far: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let two = T::from_f64(2.0).unwrap();
    let f = T::one() / (fov_rad / two).tan();
    let mut m = Matrix4x4::zeros();
    m.m[0][0] = aspect * f;
    m.m[1][1] = f;
    m.m[2][2] = far / (far - near);
    m.m[3][2] = -(far * near) / (far - near);
    m.m[2][3] = T::one();
    m
}
