use std::ops::Range;

use crate::quaternion::Quaternion;
use crate::vector::Vec3;

/// Constant for converting u64 numbers to f64s in [0,1).
/// It is the maximum value of mantissa plus one.
pub const F64_MANTISSA: f64 = (1u64 << f64::MANTISSA_DIGITS) as f64; // is 2^53


/// Xorshift generator. Deterministic for a given seed.
pub struct Randf64 {
    state: u64,
}
impl Randf64 {
    pub fn new() -> Self {
        Self {
            state: 555555555,
        }
    }
    pub fn seed(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        Self {
            state: if seed == 0 { 555555555 } else { seed },
        }
    }
    pub fn next(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        (self.state >> 11) as f64 / F64_MANTISSA
    }
    pub fn next_in(&mut self, range: Range<f64>) -> f64 {
        (range.end - range.start) * self.next() + range.start
    }
    pub fn vec3_in(&mut self, range: Range<f64>) -> Vec3 {
        Vec3::new(
            self.next_in(range.clone()),
            self.next_in(range.clone()),
            self.next_in(range),
        )
    }
    pub fn quaternion_in(&mut self, range: Range<f64>) -> Quaternion {
        Quaternion::new(
            self.next_in(range.clone()),
            self.next_in(range.clone()),
            self.next_in(range.clone()),
            self.next_in(range),
        )
    }
}
impl Default for Randf64 {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn stays_in_range() {
    let mut rand = Randf64::new();
    for _ in 0..1000 {
        let v = rand.next_in(-2.0..3.0);
        assert!((-2.0..3.0).contains(&v));
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut a = Randf64::seed(42);
    let mut b = Randf64::seed(42);
    assert_eq!(a.quaternion_in(0.0..1.0), b.quaternion_in(0.0..1.0));
}
