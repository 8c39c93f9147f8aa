// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D vector (or point) of `f64` components.
///
/// `Vec2 * Vec2` is the dot product, `Vec2 * f64` scales.
#[derive(PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

/// Shorthand for `Vec2::new(x, y)`.
#[inline]
pub fn v2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    /// Constructs a new vector.
    #[inline]
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::default()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of `self` and `other`.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Squared length.
    #[inline]
    pub fn len_sq(self) -> f64 {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn len(self) -> f64 {
        self.len_sq().sqrt()
    }

    /// Returns a unit vector with the same direction.
    ///
    /// Panics if the vector has zero length.
    pub fn normalize(self) -> Vec2 {
        let len = self.len();
        assert!(len > 0.0, "can only normalize vector if length is non-zero");
        Vec2::new(self.x / len, self.y / len)
    }

    /// Like `normalize`, but returns `fallback` for a zero-length vector.
    pub fn normalize_or(self, fallback: Vec2) -> Vec2 {
        let len = self.len();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            fallback
        }
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn dist_sq(self, other: Vec2) -> f64 {
        (self - other).len_sq()
    }

    /// Distance to `other`.
    #[inline]
    pub fn dist(self, other: Vec2) -> f64 {
        (self - other).len()
    }

    /// Rotates counter-clockwise about the origin by `angle` radians.
    pub fn rotate(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates counter-clockwise about `pivot` by `angle` radians.
    pub fn rotate_around(self, pivot: Vec2, angle: f64) -> Vec2 {
        pivot + (self - pivot).rotate(angle)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = f64;
    fn mul(self, rhs: Vec2) -> f64 {
        self.dot(rhs)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vec2, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Vec2, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

/// A unit direction paired with a signed length.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct DirVec2 {
    dir: Vec2,
    len: f64,
}

impl DirVec2 {
    /// Constructs a new `DirVec2`, normalizing `dir`.
    ///
    /// Panics if `dir` has zero length.
    pub fn new(dir: Vec2, len: f64) -> DirVec2 {
        DirVec2 {
            dir: dir.normalize(),
            len,
        }
    }

    /// The unit direction.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /// The signed length.
    #[inline]
    pub fn len(&self) -> f64 {
        self.len
    }

    /// Same length, opposite direction.
    pub fn flip(&self) -> DirVec2 {
        DirVec2 {
            dir: -self.dir,
            len: self.len,
        }
    }
}

impl From<DirVec2> for Vec2 {
    fn from(val: DirVec2) -> Vec2 {
        val.dir * val.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_products() {
        assert_eq!(v2(1.0, 2.0) * v2(3.0, 4.0), 11.0);
        assert_eq!(v2(1.0, 0.0).cross(v2(0.0, 1.0)), 1.0);
        assert_eq!(v2(0.0, 1.0).cross(v2(1.0, 0.0)), -1.0);
        assert_eq!(v2(2.0, 3.0).perp(), v2(-3.0, 2.0));
    }

    #[test]
    fn test_rotate() {
        assert_abs_diff_eq!(v2(1.0, 0.0).rotate(FRAC_PI_2), v2(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(v2(3.0, 2.0).rotate_around(v2(2.0, 2.0), PI), v2(1.0, 2.0), epsilon = 1e-12);
        let p = v2(-4.5, 2.25);
        assert_abs_diff_eq!(p.rotate(1.3).rotate(-1.3), p, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize() {
        assert_abs_diff_eq!(v2(3.0, 4.0).normalize(), v2(0.6, 0.8), epsilon = 1e-12);
        assert_eq!(Vec2::zero().normalize_or(v2(1.0, 0.0)), v2(1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_normalize_zero() {
        Vec2::zero().normalize();
    }

    #[test]
    fn test_dir_vec() {
        let dir = DirVec2::new(v2(0.0, -2.0), 3.0);
        assert_eq!(dir.dir(), v2(0.0, -1.0));
        assert_eq!(dir.flip().dir(), v2(0.0, 1.0));
        assert_eq!(Vec2::from(dir), v2(0.0, -3.0));
    }
}
