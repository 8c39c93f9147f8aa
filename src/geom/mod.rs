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


//! Module containing geometry primitives and the collision kernel.

mod gjk;
mod hull;
mod ray;
mod shape;
mod transform;
mod vec;

use crate::config::KernelConfig;

pub use self::hull::{bounding_sphere, convex_hull, in_circle, in_rect, polygon_centroid, rect_in_rect};
pub use self::ray::RayCastResult;
pub use self::shape::*;
pub use self::transform::Transform;
pub use self::vec::*;

/// Runs the narrow-phase test between two shapes.
///
/// The returned normal points from `b` towards `a`.
pub fn collision(a: &Shape, b: &Shape) -> Collision {
    a.collision(b)
}

/// `collision` with explicit tolerances and iteration caps.
pub fn collision_with(a: &Shape, b: &Shape, config: &KernelConfig) -> Collision {
    a.collision_with(b, config)
}
