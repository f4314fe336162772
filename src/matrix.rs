use std::ops::Mul;

use crate::vector::Vec3;
use crate::quaternion::Quaternion;

/// Column major 3 x 3 matrix.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Mat3x3 {
    pub c0: Vec3,
    pub c1: Vec3,
    pub c2: Vec3,
}
impl Mat3x3 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c0r0: f64, c0r1: f64, c0r2: f64,
        c1r0: f64, c1r1: f64, c1r2: f64,
        c2r0: f64, c2r1: f64, c2r2: f64,
    ) -> Self {
        Self::from_cols(
            Vec3::new(c0r0, c0r1, c0r2),
            Vec3::new(c1r0, c1r1, c1r2),
            Vec3::new(c2r0, c2r1, c2r2),
        )
    }

    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self {
            c0,
            c1,
            c2,
        }
    }

    pub fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Embeds the matrix in a 4 x 4 homogeneous transform, column major.
    pub fn to_homogeneous(&self) -> [[f64; 4]; 4] {
        [
            [self.c0.x, self.c0.y, self.c0.z, 0.0],
            [self.c1.x, self.c1.y, self.c1.z, 0.0],
            [self.c2.x, self.c2.y, self.c2.z, 0.0],
            [0.0,       0.0,       0.0,       1.0],
        ]
    }
}

impl From<Mat3x3> for [[f64; 3]; 3] {
    fn from(mat: Mat3x3) -> [[f64; 3]; 3] {
        [mat.c0.into(), mat.c1.into(), mat.c2.into()]
    }
}

impl From<Quaternion> for Mat3x3 {
    /// Convert a unit quaternion to a 3 x 3 rotation matrix.
    fn from(quat: Quaternion) -> Mat3x3 {
        let x2 = quat.x + quat.x;
        let y2 = quat.y + quat.y;
        let z2 = quat.z + quat.z;

        let xx2 = x2 * quat.x;
        let xy2 = x2 * quat.y;
        let xz2 = x2 * quat.z;

        let yy2 = y2 * quat.y;
        let yz2 = y2 * quat.z;
        let zz2 = z2 * quat.z;

        let wy2 = y2 * quat.w;
        let wz2 = z2 * quat.w;
        let wx2 = x2 * quat.w;

        Mat3x3::new(
            1.0 - yy2 - zz2, xy2 + wz2,       xz2 - wy2,
            xy2 - wz2,       1.0 - xx2 - zz2, yz2 + wx2,
            xz2 + wy2,       yz2 - wx2,       1.0 - xx2 - yy2,
        )
    }
}

impl Mul<Vec3> for Mat3x3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }
}

impl Mul for Mat3x3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Mat3x3::from_cols(self * other.c0, self * other.c1, self * other.c2)
    }
}

#[test]
fn identity_quaternion_gives_identity_matrix() {
    assert_eq!(Mat3x3::from(Quaternion::identity()), Mat3x3::identity());
}

#[test]
fn matrix_agrees_with_rotate() {
    let mut rand = crate::random::Randf64::seed(7);
    for _ in 0..32 {
        let q = rand.quaternion_in(-1.0..1.0).normalized();
        let v = rand.vec3_in(-5.0..5.0);
        assert!((Mat3x3::from(q) * v).near(q.rotate(v), 1e-9));
    }
}

#[test]
fn composition_matches_product() {
    let a = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 0.7);
    let b = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), -1.3);
    let v = Vec3::new(0.3, -2.0, 1.5);
    let lhs = Mat3x3::from(a) * Mat3x3::from(b) * v;
    assert!(lhs.near((a * b).rotate(v), 1e-9));
}

#[test]
fn homogeneous_embedding() {
    let m = Mat3x3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 9.0,
    );
    let h = m.to_homogeneous();
    assert_eq!(h[1], [4.0, 5.0, 6.0, 0.0]);
    assert_eq!(h[3], [0.0, 0.0, 0.0, 1.0]);
}
