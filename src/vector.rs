use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

/// Vector part of a quaternion, or a point being rotated.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    pub fn normalized(&self) -> Self {
        let len = self.len();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    pub fn near(&self, other: Vec3, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
        && (self.y - other.y).abs() <= eps
        && (self.z - other.z).abs() <= eps
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        [vec.x, vec.y, vec.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}


#[test]
fn cross_of_axes() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));

    let v = Vec3::new(1.5, -2.0, 0.25);
    let w = Vec3::new(-3.0, 0.5, 4.0);
    assert_eq!(v.cross(w).dot(v), 0.0);
}

#[test]
fn near_includes_tolerance() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert!(v.near(Vec3::new(1.5, 2.0, 3.0), 0.5));
    assert!(!v.near(Vec3::new(1.5, 2.0, 3.0), 0.25));
}

#[test]
fn normalized_test() {
    let v = Vec3::new(3.0, 0.0, 4.0).normalized();
    assert!((v.len() - 1.0).abs() < 1e-12);
    assert!(v.near(Vec3::new(0.6, 0.0, 0.8), 1e-12));
}
