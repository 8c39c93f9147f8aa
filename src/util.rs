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

//! Scalar helpers shared by the geometry code and exposed to callers.

/// Converts an angle in degrees to radians.
#[inline]
pub fn radian(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Linear interpolation between `a` and `b`; `t = 0` gives `a`, `t = 1` gives `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamps `val` into `[min, max]`.
pub fn constrain<T: PartialOrd>(val: T, min: T, max: T) -> T {
    assert!(min <= max, "requires min <= max");
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Maps `val` from the range `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (val - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Rounds half away from zero, like `f64::round`, but returns an integer.
#[inline]
pub fn round(val: f64) -> i64 {
    val.round() as i64
}

/// Floor to an integer without going through `f64::floor`.
#[inline]
pub fn fast_floor(val: f64) -> i64 {
    let truncated = val as i64;
    if val < truncated as f64 {
        truncated - 1
    } else {
        truncated
    }
}

/// Deterministic hash-based noise in `[0, 1]` for an index and a seed.
///
/// The same `(index, seed)` pair always yields the same value, which makes it
/// usable for reproducible jitter without carrying an RNG around.
pub fn fast_random(index: i64, seed: i64) -> f64 {
    let mut h = (index as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((seed as u64).rotate_left(32));
    h ^= h >> 30;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 27;
    h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^= h >> 31;
    // top 53 bits give an exact f64 in [0, 1)
    (h >> 11) as f64 / (1u64 << 53) as f64
}

// Roots of a*t^2 + b*t + c = 0 in ascending order. A zero discriminant
// gives the double root twice, so tangent rays still count as hits.
pub(crate) fn quad_roots(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        None
    } else if a == 0.0 {
        if b == 0.0 {
            None
        } else {
            let t = -c / b;
            Some((t, t))
        }
    } else {
        // numerically stable form, avoids cancellation between -b and sqrt
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        let (t1, t2) = if q == 0.0 {
            (0.0, 0.0)
        } else {
            (q / a, c / q)
        };
        Some((t1.min(t2), t1.max(t2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    #[test]
    fn test_radian() {
        for i in 0..=360 {
            assert!((radian(i as f64) - (i as f64) * std::f64::consts::PI / 180.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_lerp_and_map() {
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert!((map(0.5, 0.0, 1.0, 50.0, 100.0) - 75.0).abs() < 1e-12);
        assert!(map(0.5, 0.0, 1.0, -100.0, 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_constrain() {
        for i in 0..10 {
            let c = constrain(i, 3, 6);
            let cf = constrain(i as f64, 3.0, 6.0);
            if i <= 3 {
                assert_eq!(c, 3);
                assert_eq!(cf, 3.0);
            } else if i < 6 {
                assert_eq!(c, i);
                assert_eq!(cf, i as f64);
            } else {
                assert_eq!(c, 6);
                assert_eq!(cf, 6.0);
            }
        }
    }

    #[test]
    fn test_round() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..100 {
            let val: f64 = rng.random_range(0.0..100.0);
            assert_eq!(round(val), val.round() as i64);
        }
        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.5), -3);
    }

    #[test]
    fn test_fast_floor() {
        let mut rng = Pcg64::seed_from_u64(11);
        for _ in 0..100_000 {
            let val: f64 = rng.random_range(-1e9..1e9);
            assert_eq!(fast_floor(val), val.floor() as i64);
        }
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(3.0), 3);
        assert_eq!(fast_floor(-3.0), -3);
    }

    #[test]
    fn test_fast_random() {
        let mut i = 0;
        while i < 1_000_000 {
            let val = fast_random(i, 12345);
            assert!((0.0..=1.0).contains(&val));
            i += 500;
        }
        assert_eq!(fast_random(42, 9), fast_random(42, 9));
        assert_ne!(fast_random(42, 9), fast_random(43, 9));
        assert_ne!(fast_random(42, 9), fast_random(42, 10));
    }

    #[test]
    fn test_quad_roots() {
        assert_eq!(quad_roots(1.0, -3.0, 2.0), Some((1.0, 2.0)));
        assert_eq!(quad_roots(1.0, -2.0, 1.0), Some((1.0, 1.0)));
        assert_eq!(quad_roots(1.0, 0.0, 1.0), None);
        assert_eq!(quad_roots(0.0, 2.0, -1.0), Some((0.5, 0.5)));
        assert_eq!(quad_roots(0.0, 0.0, 1.0), None);
    }
}
