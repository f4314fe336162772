//! Quaternion algebra over `[x, y, z, w]` values and scalars.
//!
//! The closed-form operations live in [`quaternion`]; [`operand`] adds the
//! mixed scalar/quaternion entry points `add`, `sub`, `mul` and `div`.

mod io;
pub mod error;
pub mod quaternion;
pub mod operand;
pub mod vector;
pub mod matrix;
pub mod random;
pub mod eval;
pub mod config;

pub use crate::error::{QuatError, QuatResult};
pub use crate::quaternion::{
    Quaternion,
    copy, negative, inverse,
    add_quaternion_quaternion, add_quaternion_scalar, add_scalar_quaternion,
    sub_quaternion_quaternion, sub_quaternion_scalar, sub_scalar_quaternion,
    mul_quaternion_quaternion, mul_quaternion_scalar, mul_scalar_quaternion,
    div_quaternion_quaternion, div_quaternion_scalar, div_scalar_quaternion,
};
pub use crate::operand::{Operand, MathType, math_type, add, sub, mul, div};
pub use crate::vector::Vec3;
pub use crate::matrix::Mat3x3;
