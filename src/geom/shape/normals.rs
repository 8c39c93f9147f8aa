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


use crate::config::KernelConfig;
use crate::geom::gjk::{self, GjkOutcome};
use crate::geom::shape::Shape;
use crate::geom::{DirVec2, Vec2};
use log::trace;

/// Outcome of the narrow-phase test between two shapes.
///
/// `normal` points from the other shape towards this one. Its length is the
/// penetration depth: positive when overlapping, negative (the gap) when
/// apart.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Collision {
    collision: bool,
    normal: DirVec2,
}

impl Collision {
    /// Returns `true` if the shapes overlap or touch.
    #[inline]
    pub fn collision(&self) -> bool {
        self.collision
    }

    /// Separation direction with the signed depth as its length.
    #[inline]
    pub fn normal(&self) -> DirVec2 {
        self.normal
    }

    /// Signed penetration depth.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.normal.len()
    }
}

// Circles are handled as their centre point (the "core") inflated by their
// radius, so GJK only ever sees vertex sets.
pub(super) fn collision(a: &Shape, b: &Shape, config: &KernelConfig) -> Collision {
    let margin = a.radius() + b.radius();
    let normal = match gjk::gjk(a.absolutes(), b.absolutes(), config) {
        GjkOutcome::Separated {
            distance,
            closest_a,
            closest_b,
        } => {
            let dir = (closest_a - closest_b).normalize_or(fallback_dir(a, b));
            DirVec2::new(dir, margin - distance)
        }
        GjkOutcome::Overlap(simplex) => {
            match gjk::epa(a.absolutes(), b.absolutes(), &simplex, config) {
                Some((normal, depth)) => DirVec2::new(-normal, depth + margin),
                None => DirVec2::new(fallback_dir(a, b), margin),
            }
        }
    };
    let collision = normal.len() >= -config.linear_tolerance;
    trace!(
        "{:?} vs {:?}: collision = {}, depth = {}",
        a.kind(),
        b.kind(),
        collision,
        normal.len()
    );
    Collision { collision, normal }
}

fn fallback_dir(a: &Shape, b: &Shape) -> Vec2 {
    (a.centroid() - b.centroid()).normalize_or(Vec2::new(1.0, 0.0))
}
