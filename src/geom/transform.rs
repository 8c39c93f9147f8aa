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


use crate::geom::{v2, Vec2};
use serde::{Deserialize, Serialize};

/// Position, rotation and size of an entity.
///
/// `pos` is the minimum corner when the transform is used as an axis-aligned
/// rectangle; `size` extends in the positive x and y directions.
#[derive(PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transform {
    /// The anchor position.
    pub pos: Vec2,
    /// Rotation in radians, counter-clockwise.
    pub rotation: f64,
    /// Width and height.
    pub size: Vec2,
}

impl Transform {
    /// Constructs an unrotated transform from a corner and a size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Transform {
        Transform {
            pos: v2(x, y),
            rotation: 0.0,
            size: v2(width, height),
        }
    }

    /// Returns a copy with the given rotation.
    pub fn rotated(self, rotation: f64) -> Transform {
        Transform { rotation, ..self }
    }

    /// Width, i.e. `size.x`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Height, i.e. `size.y`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// The lowest x coordinate of the axis-aligned rectangle.
    pub fn min_x(&self) -> f64 {
        self.pos.x
    }

    /// The lowest y coordinate of the axis-aligned rectangle.
    pub fn min_y(&self) -> f64 {
        self.pos.y
    }

    /// The highest x coordinate of the axis-aligned rectangle.
    pub fn max_x(&self) -> f64 {
        self.pos.x + self.size.x
    }

    /// The highest y coordinate of the axis-aligned rectangle.
    pub fn max_y(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// The centre of the axis-aligned rectangle.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let transform = Transform::new(3.0, 5.0, 4.0, 6.0);
        assert_eq!(transform.min_x(), 3.0);
        assert_eq!(transform.min_y(), 5.0);
        assert_eq!(transform.max_x(), 7.0);
        assert_eq!(transform.max_y(), 11.0);
        assert_eq!(transform.center(), v2(5.0, 8.0));
        assert_eq!(transform.rotated(1.5).rotation, 1.5);
        assert_eq!(transform.rotated(1.5).size, transform.size);
    }
}
