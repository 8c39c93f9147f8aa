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

use std::cmp::Ordering;

// N64 wraps a non-NaN f64 value and implements Ord, so that distances and
// dot products can be fed to min_by_key/max_by_key when selecting the
// nearest face, the farthest vertex and so on.

pub fn n64(val: f64) -> N64 {
    N64::from(val)
}

#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub struct N64 {
    val: f64,
}

impl From<f64> for N64 {
    fn from(val: f64) -> N64 {
        assert!(!val.is_nan(), "unexpected NaN in geometry computation");
        N64 { val }
    }
}

impl From<N64> for f64 {
    fn from(val: N64) -> f64 {
        val.val
    }
}

impl Eq for N64 {}

impl Ord for N64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.val.total_cmp(&other.val)
    }
}

impl PartialOrd for N64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns `true` if `val` is within `tolerance` of zero.
#[inline]
pub fn near_zero(val: f64, tolerance: f64) -> bool {
    val.abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let vals = [3.0, -1.5, 7.25, 0.0];
        let max = vals.iter().cloned().max_by_key(|&v| n64(v)).unwrap();
        let min = vals.iter().cloned().min_by_key(|&v| n64(v)).unwrap();
        assert_eq!(max, 7.25);
        assert_eq!(min, -1.5);
        assert_eq!(f64::from(n64(2.5)), 2.5);
    }

    #[test]
    #[should_panic]
    fn test_nan_rejected() {
        n64(f64::NAN);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(1e-9, 1e-7));
        assert!(near_zero(-1e-7, 1e-7));
        assert!(!near_zero(2e-7, 1e-7));
    }
}
