//! Polymorphic arithmetic over scalars and quaternions.
//!
//! `add`, `sub`, `mul` and `div` accept any mix of scalar and quaternion
//! operands and pick the matching closed-form function from
//! [`crate::quaternion`] with a 2 x 2 match on the operand kinds.

use std::fmt;

use crate::quaternion::{self, Quaternion};

/// Kind of an operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MathType {
    Scalar,
    Quaternion,
}
impl fmt::Display for MathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathType::Scalar => write!(f, "Scalar"),
            MathType::Quaternion => write!(f, "Quaternion"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Operand {
    Scalar(f64),
    Quaternion(Quaternion),
}
impl Operand {
    pub fn math_type(&self) -> MathType {
        math_type(self)
    }

    /// Quaternion view of the operand; scalars embed as `(0, 0, 0, s)`.
    pub fn to_quaternion(&self) -> Quaternion {
        match *self {
            Operand::Scalar(s) => Quaternion::from_scalar(s),
            Operand::Quaternion(q) => q,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            Operand::Scalar(s) => Some(s),
            Operand::Quaternion(_) => None,
        }
    }

    pub fn as_quaternion(&self) -> Option<Quaternion> {
        match *self {
            Operand::Scalar(_) => None,
            Operand::Quaternion(q) => Some(q),
        }
    }

    pub fn near(&self, other: Operand, eps: f64) -> bool {
        match (*self, other) {
            (Operand::Scalar(a), Operand::Scalar(b)) => (a - b).abs() <= eps,
            (Operand::Quaternion(a), Operand::Quaternion(b)) => a.near(b, eps),
            _ => false,
        }
    }
}

pub fn math_type(a: &Operand) -> MathType {
    match a {
        Operand::Scalar(_) => MathType::Scalar,
        Operand::Quaternion(_) => MathType::Quaternion,
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Operand {
        Operand::Scalar(s)
    }
}

impl From<Quaternion> for Operand {
    fn from(q: Quaternion) -> Operand {
        Operand::Quaternion(q)
    }
}

impl From<[f64; 4]> for Operand {
    fn from(arr: [f64; 4]) -> Operand {
        Operand::Quaternion(arr.into())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(s) => fmt::Display::fmt(s, f),
            Operand::Quaternion(q) => fmt::Display::fmt(q, f),
        }
    }
}

pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    match (a.into(), b.into()) {
        (Operand::Quaternion(a), Operand::Quaternion(b)) => quaternion::add_quaternion_quaternion(a, b).into(),
        (Operand::Quaternion(a), Operand::Scalar(b))     => quaternion::add_quaternion_scalar(a, b).into(),
        (Operand::Scalar(a), Operand::Quaternion(b))     => quaternion::add_scalar_quaternion(a, b).into(),
        (Operand::Scalar(a), Operand::Scalar(b))         => Operand::Scalar(a + b),
    }
}

pub fn sub(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    match (a.into(), b.into()) {
        (Operand::Quaternion(a), Operand::Quaternion(b)) => quaternion::sub_quaternion_quaternion(a, b).into(),
        (Operand::Quaternion(a), Operand::Scalar(b))     => quaternion::sub_quaternion_scalar(a, b).into(),
        (Operand::Scalar(a), Operand::Quaternion(b))     => quaternion::sub_scalar_quaternion(a, b).into(),
        (Operand::Scalar(a), Operand::Scalar(b))         => Operand::Scalar(a - b),
    }
}

pub fn mul(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    match (a.into(), b.into()) {
        (Operand::Quaternion(a), Operand::Quaternion(b)) => quaternion::mul_quaternion_quaternion(a, b).into(),
        (Operand::Quaternion(a), Operand::Scalar(b))     => quaternion::mul_quaternion_scalar(a, b).into(),
        (Operand::Scalar(a), Operand::Quaternion(b))     => quaternion::mul_scalar_quaternion(a, b).into(),
        (Operand::Scalar(a), Operand::Scalar(b))         => Operand::Scalar(a * b),
    }
}

pub fn div(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    match (a.into(), b.into()) {
        (Operand::Quaternion(a), Operand::Quaternion(b)) => quaternion::div_quaternion_quaternion(a, b).into(),
        (Operand::Quaternion(a), Operand::Scalar(b))     => quaternion::div_quaternion_scalar(a, b).into(),
        (Operand::Scalar(a), Operand::Quaternion(b))     => quaternion::div_scalar_quaternion(a, b).into(),
        (Operand::Scalar(a), Operand::Scalar(b))         => Operand::Scalar(a / b),
    }
}


#[test]
fn classifies_operands() {
    assert_eq!(math_type(&Operand::from(1.0)), MathType::Scalar);
    assert_eq!(Operand::from([0.0, 0.0, 0.0, 1.0]).math_type(), MathType::Quaternion);
    assert_eq!(format!("{}{}", MathType::Quaternion, MathType::Scalar), "QuaternionScalar");
}

#[test]
fn dispatches_quaternion_product() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-1.0, 0.5, 2.0, 1.0);
    assert_eq!(mul(a, b), Operand::Quaternion(quaternion::mul_quaternion_quaternion(a, b)));
    assert_eq!(div(a, b), Operand::Quaternion(quaternion::div_quaternion_quaternion(a, b)));
}

#[test]
fn dispatches_scalar_scaling_both_ways() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let scaled = Operand::from([3.0, 6.0, 9.0, 12.0]);
    assert_eq!(mul(3.0, a), scaled);
    assert_eq!(mul(a, 3.0), scaled);
}

#[test]
fn scalar_embedding_in_add_and_sub() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(add(a, 2.0), Operand::from([1.0, 2.0, 3.0, 6.0]));
    assert_eq!(add(2.0, a), add(a, 2.0));
    assert_eq!(sub(a, 2.0), Operand::from([1.0, 2.0, 3.0, 2.0]));
    assert_eq!(sub(2.0, a), Operand::from([-1.0, -2.0, -3.0, -2.0]));

    // same as going through the explicit embedding
    let s = Operand::from(2.0).to_quaternion();
    assert_eq!(sub(2.0, a), Operand::Quaternion(s - a));
}

#[test]
fn scalar_by_quaternion_division() {
    let b = Quaternion::new(0.0, 0.0, 0.0, 2.0);
    assert_eq!(div(4.0, b), Operand::from([0.0, 0.0, 0.0, 2.0]));
    assert!(div(1.0, Quaternion::new(1.0, 1.0, 1.0, 1.0))
        .near(Operand::from([-0.25, -0.25, -0.25, 0.25]), 1e-12));
}

#[test]
fn scalar_pair_stays_scalar() {
    assert_eq!(add(1.0, 2.0), Operand::Scalar(3.0));
    assert_eq!(sub(1.0, 2.0), Operand::Scalar(-1.0));
    assert_eq!(mul(1.5, 2.0), Operand::Scalar(3.0));
    assert_eq!(div(1.0, 4.0), Operand::Scalar(0.25));
}
