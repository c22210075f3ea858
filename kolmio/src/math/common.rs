use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::{Float, Num};

/// Generic types that can be stored in the math containers
pub trait ValueType: Num + PartialOrd + ToPrimitive + FromPrimitive + Copy {}

/// Generic floating point types the transform math is defined over
pub trait FloatValueType: ValueType + Float {}

// Impls for all matching types
impl<T> ValueType for T where T: Num + PartialOrd + ToPrimitive + FromPrimitive + Copy {}
impl<T> FloatValueType for T where T: ValueType + Float {}
