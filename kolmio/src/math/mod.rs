mod common;
pub mod matrix;
pub mod point;
pub mod transforms;
pub mod vector;

pub use common::{FloatValueType, ValueType};
pub use matrix::Matrix4x4;
pub use point::Point3;
pub use vector::{Vec2, Vec3, Vec4};
