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


use crate::float::{n64, near_zero};
use crate::geom::Vec2;
use crate::util::quad_roots;

/// The outcome of a ray cast against a shape.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct RayCastResult {
    hit: bool,
    point: Vec2,
    strike_length: f64,
}

impl RayCastResult {
    /// A hit at `point`, `strike_length` away from the ray origin.
    pub fn hit(point: Vec2, strike_length: f64) -> RayCastResult {
        RayCastResult {
            hit: true,
            point,
            strike_length,
        }
    }

    /// No hit. The point is the zero vector and the strike length is infinite.
    pub fn miss() -> RayCastResult {
        RayCastResult {
            hit: false,
            point: Vec2::zero(),
            strike_length: f64::INFINITY,
        }
    }

    /// Returns `true` if the ray struck the shape.
    #[inline]
    pub fn did_hit(&self) -> bool {
        self.hit
    }

    /// The point struck. Meaningless when `did_hit()` is `false`.
    #[inline]
    pub fn point(&self) -> Vec2 {
        self.point
    }

    /// Distance from the ray origin to the point struck.
    #[inline]
    pub fn strike_length(&self) -> f64 {
        self.strike_length
    }
}

// All routines below take a unit `dir`. A start point inside (or on) the
// shape is reported as a hit at distance zero.

pub(crate) fn ray_circle(center: Vec2, radius: f64, origin: Vec2, dir: Vec2, max_distance: f64) -> RayCastResult {
    let offset = origin - center;
    let c = offset.len_sq() - radius * radius;
    if c <= 0.0 {
        return RayCastResult::hit(origin, 0.0);
    }
    match quad_roots(1.0, 2.0 * (offset * dir), c) {
        Some((entry, _)) if entry >= 0.0 && entry <= max_distance => {
            RayCastResult::hit(origin + dir * entry, entry)
        }
        _ => RayCastResult::miss(),
    }
}

pub(crate) fn ray_point(point: Vec2, origin: Vec2, dir: Vec2, max_distance: f64, tolerance: f64) -> RayCastResult {
    let offset = point - origin;
    let along = offset * dir;
    if along < -tolerance || !near_zero(offset.cross(dir), tolerance) {
        return RayCastResult::miss();
    }
    let along = along.max(0.0);
    if along <= max_distance {
        RayCastResult::hit(point, along)
    } else {
        RayCastResult::miss()
    }
}

pub(crate) fn ray_polygon(
    vertices: &[Vec2],
    origin: Vec2,
    dir: Vec2,
    max_distance: f64,
    tolerance: f64,
) -> RayCastResult {
    if polygon_contains(vertices, origin, tolerance) {
        return RayCastResult::hit(origin, 0.0);
    }
    let nearest = (0..vertices.len())
        .filter_map(|i| {
            let start = vertices[i];
            let edge = vertices[(i + 1) % vertices.len()] - start;
            ray_segment(origin, dir, start, edge)
        })
        .min_by_key(|&t| n64(t));
    match nearest {
        Some(t) if t <= max_distance => RayCastResult::hit(origin + dir * t, t),
        _ => RayCastResult::miss(),
    }
}

// distance along the ray to the segment start + s * edge, s in [0, 1]
fn ray_segment(origin: Vec2, dir: Vec2, start: Vec2, edge: Vec2) -> Option<f64> {
    let denom = dir.cross(edge);
    if denom == 0.0 {
        // parallel, the adjacent faces report any hit
        return None;
    }
    let offset = start - origin;
    let t = offset.cross(edge) / denom;
    let s = offset.cross(dir) / denom;
    if t >= 0.0 && (0.0..=1.0).contains(&s) {
        Some(t)
    } else {
        None
    }
}

/// Point-in-convex-polygon test, inclusive of the boundary within
/// `tolerance`, for either winding.
pub(crate) fn polygon_contains(vertices: &[Vec2], point: Vec2, tolerance: f64) -> bool {
    match vertices.len() {
        0 => false,
        1 => vertices[0].dist(point) <= tolerance,
        2 => {
            let edge = vertices[1] - vertices[0];
            let t = if edge.len_sq() == 0.0 {
                0.0
            } else {
                ((point - vertices[0]) * edge / edge.len_sq()).max(0.0).min(1.0)
            };
            (vertices[0] + edge * t).dist(point) <= tolerance
        }
        len => {
            let mut left = false;
            let mut right = false;
            for i in 0..len {
                let start = vertices[i];
                let edge = vertices[(i + 1) % len] - start;
                // signed distance of the point from the edge line
                let side = edge.cross(point - start) / edge.len().max(f64::MIN_POSITIVE);
                if side > tolerance {
                    left = true;
                } else if side < -tolerance {
                    right = true;
                }
            }
            !(left && right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;
    use approx::assert_abs_diff_eq;

    const TOLERANCE: f64 = 1e-7;

    fn square() -> Vec<Vec2> {
        vec![v2(0.0, 0.0), v2(2.0, 0.0), v2(2.0, 2.0), v2(0.0, 2.0)]
    }

    #[test]
    fn test_circle_boundary() {
        let center = v2(505.0, 0.0);
        let hit = ray_circle(center, 5.0, v2(515.0, 0.0), v2(-1.0, 0.0), 5.0);
        assert!(hit.did_hit());
        assert_eq!(hit.point(), v2(510.0, 0.0));
        assert_abs_diff_eq!(hit.strike_length(), 5.0, epsilon = 1e-9);
        let miss = ray_circle(center, 5.0, v2(515.0, 0.0), v2(-1.0, 0.0), 4.99);
        assert!(!miss.did_hit());
    }

    #[test]
    fn test_circle_behind_and_inside() {
        let center = v2(0.0, 0.0);
        assert!(!ray_circle(center, 1.0, v2(5.0, 0.0), v2(1.0, 0.0), 100.0).did_hit());
        let inside = ray_circle(center, 1.0, v2(0.5, 0.0), v2(1.0, 0.0), 100.0);
        assert_eq!(inside, RayCastResult::hit(v2(0.5, 0.0), 0.0));
        // grazing ray still counts
        let tangent = ray_circle(center, 1.0, v2(-5.0, 1.0), v2(1.0, 0.0), 100.0);
        assert!(tangent.did_hit());
        assert_abs_diff_eq!(tangent.point(), v2(0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_polygon_nearest_face() {
        let hit = ray_polygon(&square(), v2(-3.0, 1.0), v2(1.0, 0.0), 10.0, TOLERANCE);
        assert!(hit.did_hit());
        assert_abs_diff_eq!(hit.point(), v2(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.strike_length(), 3.0, epsilon = 1e-12);
        assert!(!ray_polygon(&square(), v2(-3.0, 1.0), v2(1.0, 0.0), 2.99, TOLERANCE).did_hit());
        assert!(ray_polygon(&square(), v2(-3.0, 1.0), v2(1.0, 0.0), 3.0, TOLERANCE).did_hit());
        assert!(!ray_polygon(&square(), v2(-3.0, 1.0), v2(-1.0, 0.0), 10.0, TOLERANCE).did_hit());
        assert!(!ray_polygon(&square(), v2(-3.0, 3.0), v2(1.0, 0.0), 10.0, TOLERANCE).did_hit());
    }

    #[test]
    fn test_polygon_through_corner() {
        let dir = v2(1.0, 1.0).normalize();
        let hit = ray_polygon(&square(), v2(-1.0, -1.0), dir, 10.0, TOLERANCE);
        assert!(hit.did_hit());
        assert_abs_diff_eq!(hit.point(), v2(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.strike_length(), 2.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_start_inside() {
        let hit = ray_polygon(&square(), v2(1.0, 1.0), v2(0.0, 1.0), 10.0, TOLERANCE);
        assert_eq!(hit, RayCastResult::hit(v2(1.0, 1.0), 0.0));
    }

    #[test]
    fn test_point() {
        let point = v2(4.0, 0.0);
        let hit = ray_point(point, Vec2::zero(), v2(1.0, 0.0), 4.0, TOLERANCE);
        assert_eq!(hit, RayCastResult::hit(point, 4.0));
        assert!(!ray_point(point, Vec2::zero(), v2(1.0, 0.0), 3.0, TOLERANCE).did_hit());
        assert!(!ray_point(point, Vec2::zero(), v2(0.0, 1.0), 10.0, TOLERANCE).did_hit());
        assert!(!ray_point(point, Vec2::zero(), v2(-1.0, 0.0), 10.0, TOLERANCE).did_hit());
    }

    #[test]
    fn test_polygon_contains() {
        let square = square();
        assert!(polygon_contains(&square, v2(1.0, 1.0), TOLERANCE));
        assert!(polygon_contains(&square, v2(2.0, 1.0), TOLERANCE));
        assert!(!polygon_contains(&square, v2(2.1, 1.0), TOLERANCE));
        let clockwise: Vec<Vec2> = square.iter().rev().cloned().collect();
        assert!(polygon_contains(&clockwise, v2(0.5, 1.5), TOLERANCE));
        assert!(!polygon_contains(&clockwise, v2(-0.5, 1.5), TOLERANCE));
        let segment = [v2(0.0, 0.0), v2(2.0, 0.0)];
        assert!(polygon_contains(&segment, v2(1.0, 0.0), TOLERANCE));
        assert!(!polygon_contains(&segment, v2(3.0, 0.0), TOLERANCE));
    }

    #[test]
    fn test_miss() {
        let miss = RayCastResult::miss();
        assert!(!miss.did_hit());
        assert_eq!(miss.strike_length(), f64::INFINITY);
    }
}
