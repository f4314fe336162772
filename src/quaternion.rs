use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::{QuatError, QuatResult};
use crate::vector::Vec3;

/// A quaternion `[x, y, z, w]`: vector part `(x, y, z)`, scalar part `w`.
///
/// Laid out as four consecutive `f64`s so it can be viewed as `[f64; 4]`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}
impl Quaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Reals embed as `(0, 0, 0, s)`.
    pub fn from_scalar(s: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, s)
    }

    pub fn from_parts(v: Vec3, w: f64) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Rotation of `radians` around `axis`. The axis does not need to be
    /// normalized.
    pub fn from_axis_angle(axis: Vec3, radians: f64) -> Self {
        let half = radians * 0.5;
        Self::from_parts(axis.normalized() * half.sin(), half.cos())
    }

    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn scalar(&self) -> f64 {
        self.w
    }

    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z + self.w*self.w
    }

    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    pub fn dot(&self, other: Quaternion) -> f64 {
        self.x*other.x + self.y*other.y + self.z*other.z + self.w*other.w
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn normalized(&self) -> Self {
        div_quaternion_scalar(*self, self.norm())
    }

    pub fn inverse(&self) -> Self {
        inverse(*self)
    }

    /// Rotates `v` by this quaternion: the vector part of `q * v * q^-1`,
    /// expanded with cross products. `q` need not be unit length.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let uv = u.cross(v);
        v + (uv * self.w + u.cross(uv)) * (2.0 / self.norm_sq())
    }

    /// Component-wise comparison within `eps`.
    pub fn near(&self, other: Quaternion, eps: f64) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|c| c.is_finite())
    }
}

/// Returns a new quaternion with the same components.
pub fn copy(q: Quaternion) -> Quaternion {
    Quaternion::new(q.x, q.y, q.z, q.w)
}

pub fn negative(q: Quaternion) -> Quaternion {
    Quaternion::new(-q.x, -q.y, -q.z, -q.w)
}

/// Conjugate over squared norm. A zero quaternion yields non-finite
/// components.
pub fn inverse(q: Quaternion) -> Quaternion {
    let d = 1.0 / q.norm_sq();
    Quaternion::new(-q.x * d, -q.y * d, -q.z * d, q.w * d)
}

pub fn add_quaternion_quaternion(a: Quaternion, b: Quaternion) -> Quaternion {
    Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
}

pub fn add_quaternion_scalar(a: Quaternion, b: f64) -> Quaternion {
    Quaternion::new(a.x, a.y, a.z, a.w + b)
}

pub fn add_scalar_quaternion(a: f64, b: Quaternion) -> Quaternion {
    Quaternion::new(b.x, b.y, b.z, a + b.w)
}

pub fn sub_quaternion_quaternion(a: Quaternion, b: Quaternion) -> Quaternion {
    Quaternion::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
}

pub fn sub_quaternion_scalar(a: Quaternion, b: f64) -> Quaternion {
    Quaternion::new(a.x, a.y, a.z, a.w - b)
}

pub fn sub_scalar_quaternion(a: f64, b: Quaternion) -> Quaternion {
    Quaternion::new(-b.x, -b.y, -b.z, a - b.w)
}

pub fn mul_quaternion_scalar(q: Quaternion, k: f64) -> Quaternion {
    Quaternion::new(k * q.x, k * q.y, k * q.z, k * q.w)
}

pub fn mul_scalar_quaternion(k: f64, q: Quaternion) -> Quaternion {
    Quaternion::new(k * q.x, k * q.y, k * q.z, k * q.w)
}

/// Hamilton product `a * b`.
pub fn mul_quaternion_quaternion(a: Quaternion, b: Quaternion) -> Quaternion {
    Quaternion::new(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
        a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// `a * b^-1`, expanded in closed form.
pub fn div_quaternion_quaternion(a: Quaternion, b: Quaternion) -> Quaternion {
    let d = 1.0 / (b.w * b.w + b.x * b.x + b.y * b.y + b.z * b.z);
    Quaternion::new(
        (a.x * b.w - a.w * b.x - a.y * b.z + a.z * b.y) * d,
        (a.x * b.z - a.w * b.y + a.y * b.w - a.z * b.x) * d,
        (a.y * b.x + a.z * b.w - a.w * b.z - a.x * b.y) * d,
        (a.w * b.w + a.x * b.x + a.y * b.y + a.z * b.z) * d,
    )
}

pub fn div_quaternion_scalar(q: Quaternion, k: f64) -> Quaternion {
    Quaternion::new(q.x / k, q.y / k, q.z / k, q.w / k)
}

/// `a * b^-1` with `a` a scalar.
pub fn div_scalar_quaternion(a: f64, b: Quaternion) -> Quaternion {
    let d = 1.0 / (b.x * b.x + b.y * b.y + b.z * b.z + b.w * b.w);
    Quaternion::new(-a * b.x * d, -a * b.y * d, -a * b.z * d, a * b.w * d)
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        negative(self)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        add_quaternion_quaternion(self, other)
    }
}

impl Add<f64> for Quaternion {
    type Output = Self;

    fn add(self, other: f64) -> Self::Output {
        add_quaternion_scalar(self, other)
    }
}

impl Add<Quaternion> for f64 {
    type Output = Quaternion;

    fn add(self, other: Quaternion) -> Self::Output {
        add_scalar_quaternion(self, other)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        sub_quaternion_quaternion(self, other)
    }
}

impl Sub<f64> for Quaternion {
    type Output = Self;

    fn sub(self, other: f64) -> Self::Output {
        sub_quaternion_scalar(self, other)
    }
}

impl Sub<Quaternion> for f64 {
    type Output = Quaternion;

    fn sub(self, other: Quaternion) -> Self::Output {
        sub_scalar_quaternion(self, other)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        mul_quaternion_quaternion(self, other)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        mul_quaternion_scalar(self, other)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, other: Quaternion) -> Self::Output {
        mul_scalar_quaternion(self, other)
    }
}

impl Div for Quaternion {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        div_quaternion_quaternion(self, other)
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        div_quaternion_scalar(self, other)
    }
}

impl Div<Quaternion> for f64 {
    type Output = Quaternion;

    fn div(self, other: Quaternion) -> Self::Output {
        div_scalar_quaternion(self, other)
    }
}

impl From<f64> for Quaternion {
    fn from(s: f64) -> Quaternion {
        Quaternion::from_scalar(s)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        bytemuck::cast(arr)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> [f64; 4] {
        bytemuck::cast(q)
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuatError;

    fn try_from(components: &[f64]) -> QuatResult<Quaternion> {
        match *components {
            [x, y, z, w] => Ok(Quaternion::new(x, y, z, w)),
            _ => Err(QuatError::InvalidOperand(components.len())),
        }
    }
}

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(q: cgmath::Quaternion<f64>) -> Quaternion {
        Quaternion::new(q.v.x, q.v.y, q.v.z, q.s)
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(q: Quaternion) -> cgmath::Quaternion<f64> {
        cgmath::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}, {:.p$}, {:.p$}]",
                self.x,
                self.y,
                self.z,
                self.w,
            ),
            None => write!(f, "[{}, {}, {}, {}]",
                self.x,
                self.y,
                self.z,
                self.w,
            ),
        }
    }
}


#[cfg(test)]
const EPS: f64 = 1e-9;

#[cfg(test)]
fn samples(count: usize) -> Vec<Quaternion> {
    let mut rand = crate::random::Randf64::seed(0x5eed);
    (0..count).map(|_| rand.quaternion_in(-10.0..10.0)).collect()
}

#[test]
fn add_negative_is_zero() {
    for a in samples(64) {
        assert!((a + negative(a)).near(Quaternion::zero(), EPS));
    }
}

#[test]
fn add_commutes() {
    let qs = samples(64);
    for pair in qs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a + b).near(b + a, EPS));
    }
}

#[test]
fn mul_by_inverse_is_identity() {
    for a in samples(64) {
        assert!((a * inverse(a)).near(Quaternion::identity(), EPS));
    }
}

#[test]
fn div_matches_mul_by_inverse() {
    let qs = samples(64);
    for pair in qs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a / b).near(a * inverse(b), EPS));
    }
}

#[test]
fn scalar_div_matches_mul_by_inverse() {
    let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
    assert!((2.5 / q).near(Quaternion::from_scalar(2.5) * inverse(q), EPS));
}

#[test]
fn scalar_touches_only_w() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a + 0.5, Quaternion::new(1.0, 2.0, 3.0, 4.5));
    assert_eq!(0.5 + a, a + 0.5);
    assert_eq!(a - 0.5, Quaternion::new(1.0, 2.0, 3.0, 3.5));
    assert_eq!(0.5 - a, Quaternion::new(-1.0, -2.0, -3.0, -3.5));
}

#[test]
fn scalar_mul_scales_everything() {
    let a = Quaternion::new(1.0, -2.0, 3.0, -4.0);
    let scaled = Quaternion::new(2.0, -4.0, 6.0, -8.0);
    assert_eq!(2.0 * a, scaled);
    assert_eq!(a * 2.0, scaled);
    assert_eq!(a / 0.5, scaled);
}

#[test]
fn hamilton_product() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a * b, Quaternion::new(24.0, 48.0, 48.0, -6.0));
    assert!(a * b != b * a);
}

#[test]
fn i_times_j_is_k() {
    let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    assert_eq!(i * j, Quaternion::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(j * i, Quaternion::new(0.0, 0.0, -1.0, 0.0));
}

#[test]
fn identity_is_self_inverse() {
    assert_eq!(inverse(Quaternion::identity()), Quaternion::identity());
}

#[test]
fn copy_is_independent() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let mut c = copy(q);
    assert_eq!(c, q);
    c.x = 9.0;
    assert_eq!(q.x, 1.0);
}

#[test]
fn zero_norm_division_is_not_finite() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(!inverse(Quaternion::zero()).is_finite());
    assert!(!(a / Quaternion::zero()).is_finite());
    assert!(!(1.0 / Quaternion::zero()).is_finite());
    assert!(!(a / 0.0).is_finite());
}

#[test]
fn slice_length_is_checked() {
    let ok: &[f64] = &[1.0, 2.0, 3.0, 4.0];
    assert_eq!(Quaternion::try_from(ok).ok(), Some(Quaternion::new(1.0, 2.0, 3.0, 4.0)));

    let short: &[f64] = &[1.0, 2.0, 3.0];
    assert!(matches!(Quaternion::try_from(short), Err(QuatError::InvalidOperand(3))));

    let long: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0];
    assert!(matches!(Quaternion::try_from(long), Err(QuatError::InvalidOperand(5))));
}

#[test]
fn rotate_about_z() {
    let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), std::f64::consts::FRAC_PI_2);
    let v = q.rotate(Vec3::new(1.0, 0.0, 0.0));
    assert!(v.near(Vec3::new(0.0, 1.0, 0.0), EPS));
}

#[test]
fn array_and_cgmath_views() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(<[f64; 4]>::from(q), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]), q);

    let cg: cgmath::Quaternion<f64> = q.into();
    assert_eq!(cg.s, 4.0);
    assert_eq!(Quaternion::from(cg), q);
}

#[test]
fn display_precision() {
    let q = Quaternion::new(1.0, 0.5, -0.25, 2.0);
    assert_eq!(format!("{q}"), "[1, 0.5, -0.25, 2]");
    assert_eq!(format!("{q:.2}"), "[1.00, 0.50, -0.25, 2.00]");
}

#[test]
fn inverse_is_conjugate_over_norm() {
    let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
    assert!(inverse(q).near(q.conjugate() / q.norm_sq(), EPS));
    assert!((q.dot(q) - q.norm_sq()).abs() < EPS);
    assert!((q.normalized().norm() - 1.0).abs() < EPS);
    assert_eq!(q.vector(), Vec3::new(1.0, -2.0, 0.5));
    assert_eq!(q.scalar(), 3.0);
}

#[test]
fn rotate_matches_sandwich_product() {
    let mut rand = crate::random::Randf64::seed(11);
    for _ in 0..32 {
        let q = rand.quaternion_in(-3.0..3.0);
        let v = rand.vec3_in(-5.0..5.0);
        let sandwich = (q * Quaternion::from_parts(v, 0.0) * inverse(q)).vector();
        assert!(q.rotate(v).near(sandwich, EPS));
    }
}
