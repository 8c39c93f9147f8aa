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


use crate::float::n64;
use crate::geom::{Transform, Vec2};
use log::debug;

// Stateless point-set helpers: convex hull, area centroid, bounding radius
// and the containment predicates used for picking.

// relative area below which a polygon is treated as a line or a point
const DEGENERATE_AREA: f64 = 1e-12;

/// Computes the convex hull of `points` using Andrew's monotone chain.
///
/// The hull is returned counter-clockwise, starting from the vertex with the
/// lowest x (then lowest y). Duplicate, interior and collinear points are
/// dropped, so the result is never longer than the input. With fewer than
/// three distinct points, the distinct points are returned in sorted order.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| n64(a.x).cmp(&n64(b.x)).then(n64(a.y).cmp(&n64(b.y))));
    sorted.dedup();
    if sorted.len() < 3 {
        debug!("convex hull of {} distinct points is degenerate", sorted.len());
        return sorted;
    }

    let mut lower: Vec<Vec2> = Vec::with_capacity(sorted.len());
    for &point in &sorted {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], point) <= 0.0 {
            lower.pop();
        }
        lower.push(point);
    }

    let mut upper: Vec<Vec2> = Vec::with_capacity(sorted.len());
    for &point in sorted.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], point) <= 0.0 {
            upper.pop();
        }
        upper.push(point);
    }

    // each chain ends where the other starts
    lower.pop();
    upper.pop();
    lower.extend(upper);
    if lower.len() < 3 {
        debug!("convex hull of {} points is collinear", points.len());
    }
    lower
}

// > 0 for a counter-clockwise turn a -> b -> c
#[inline]
fn turn(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b - a).cross(c - a)
}

/// Computes the area-weighted centroid of a convex polygon.
///
/// Winding order does not matter. Zero-area input (a single point, a line
/// segment, collinear vertices) falls back to the vertex average, and an
/// empty slice gives the zero vector.
pub fn polygon_centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::zero();
    }
    // work relative to the first vertex to keep the cross products small
    let origin = points[0];
    let mut twice_area = 0.0;
    let mut abs_sum = 0.0;
    let mut weighted = Vec2::zero();
    for i in 0..points.len() {
        let a = points[i] - origin;
        let b = points[(i + 1) % points.len()] - origin;
        let cross = a.cross(b);
        twice_area += cross;
        abs_sum += cross.abs();
        weighted += (a + b) * cross;
    }
    if abs_sum == 0.0 || twice_area.abs() <= DEGENERATE_AREA * abs_sum.max(1.0) {
        return vertex_average(points);
    }
    origin + weighted * (1.0 / (3.0 * twice_area))
}

fn vertex_average(points: &[Vec2]) -> Vec2 {
    let sum = points.iter().fold(Vec2::zero(), |acc, &p| acc + p);
    sum * (1.0 / points.len() as f64)
}

/// Returns the radius of the smallest circle about `centroid` that contains
/// every point, i.e. the largest distance from `centroid` to a point.
///
/// The centroid is taken as given and is not recomputed.
pub fn bounding_sphere(centroid: Vec2, points: &[Vec2]) -> f64 {
    points
        .iter()
        .map(|&p| n64(p.dist(centroid)))
        .max()
        .map(f64::from)
        .unwrap_or(0.0)
}

/// Returns `true` if `point` lies inside or on the circle.
#[inline]
pub fn in_circle(point: Vec2, center: Vec2, radius: f64) -> bool {
    point.dist_sq(center) <= radius * radius
}

/// Returns `true` if `point` lies inside or on the axis-aligned rectangle with
/// minimum corner `(x, y)` and the given size.
pub fn in_rect(point: Vec2, x: f64, y: f64, width: f64, height: f64) -> bool {
    point.x >= x && point.x <= x + width && point.y >= y && point.y <= y + height
}

/// Returns `true` if the axis-aligned rectangle `inner` lies entirely within
/// `outer`. Rotation is ignored.
pub fn rect_in_rect(inner: &Transform, outer: &Transform) -> bool {
    inner.min_x() >= outer.min_x()
        && inner.min_y() >= outer.min_y()
        && inner.max_x() <= outer.max_x()
        && inner.max_y() <= outer.max_y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn random_points(rng: &mut Pcg64, count: usize, extent: f64) -> Vec<Vec2> {
        (0..count)
            .map(|_| v2(rng.random_range(-extent..extent), rng.random_range(-extent..extent)))
            .collect()
    }

    fn is_counter_clockwise_convex(hull: &[Vec2]) -> bool {
        (0..hull.len()).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            turn(a, b, c) > 0.0
        })
    }

    #[test]
    fn test_hull_square_with_interior() {
        let points = [
            v2(1.0, 1.0),
            v2(0.0, 0.0),
            v2(2.0, 2.0),
            v2(2.0, 0.0),
            v2(1.0, 0.0),
            v2(0.0, 2.0),
            v2(0.0, 0.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull, vec![v2(0.0, 0.0), v2(2.0, 0.0), v2(2.0, 2.0), v2(0.0, 2.0)]);
    }

    #[test]
    fn test_hull_degenerate() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[v2(1.0, 1.0), v2(1.0, 1.0)]), vec![v2(1.0, 1.0)]);
        let line = convex_hull(&[v2(2.0, 2.0), v2(0.0, 0.0), v2(1.0, 1.0)]);
        assert_eq!(line, vec![v2(0.0, 0.0), v2(2.0, 2.0)]);
    }

    #[test]
    fn test_hull_random() {
        let mut rng = Pcg64::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let count = rng.random_range(4..54);
            let points = random_points(&mut rng, count, 500.0);
            let hull = convex_hull(&points);
            assert!(hull.len() >= 3 && hull.len() <= points.len());
            assert!(is_counter_clockwise_convex(&hull));
            assert!(hull.iter().all(|h| points.contains(h)));
        }
    }

    #[test]
    fn test_centroid() {
        let square = [v2(0.0, 0.0), v2(2.0, 0.0), v2(2.0, 2.0), v2(0.0, 2.0)];
        assert_abs_diff_eq!(polygon_centroid(&square), v2(1.0, 1.0), epsilon = 1e-12);
        let triangle = [v2(-3.0, 0.0), v2(0.0, 3.0), v2(3.0, 0.0)];
        assert_abs_diff_eq!(polygon_centroid(&triangle), v2(0.0, 1.0), epsilon = 1e-12);
        // area weighting differs from the vertex average here
        let pentagon = [v2(-3.0, 2.0), v2(0.0, 0.0), v2(5.0, 2.0), v2(3.0, 6.0), v2(-1.0, 5.0)];
        let centroid = polygon_centroid(&pentagon);
        assert_abs_diff_eq!(centroid.x, 1.046, epsilon = 1e-3);
        assert_abs_diff_eq!(centroid.y, 2.954, epsilon = 1e-3);
    }

    #[test]
    fn test_centroid_degenerate() {
        assert_eq!(polygon_centroid(&[]), Vec2::zero());
        assert_eq!(polygon_centroid(&[v2(4.0, -1.0)]), v2(4.0, -1.0));
        let line = [v2(0.0, 0.0), v2(1.0, 1.0), v2(4.0, 4.0)];
        assert_abs_diff_eq!(polygon_centroid(&line), v2(5.0 / 3.0, 5.0 / 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_sphere() {
        let mut rng = Pcg64::seed_from_u64(99);
        for _ in 0..10 {
            let count = rng.random_range(4..19);
            let points = random_points(&mut rng, count, 500.0);
            let hull = convex_hull(&points);
            let centroid = polygon_centroid(&hull);
            let radius = bounding_sphere(centroid, &hull);
            for &point in &hull {
                assert!(radius >= centroid.dist(point));
            }
            assert!(hull.iter().any(|&p| p.dist(centroid) == radius));
        }
        assert_eq!(bounding_sphere(v2(1.0, 1.0), &[]), 0.0);
    }

    #[test]
    fn test_in_circle() {
        let mut rng = Pcg64::seed_from_u64(123_456_789);
        for _ in 0..100 {
            let center = v2(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            let point = v2(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            let radius = rng.random_range(0.0..10.0);
            let expected = center.dist_sq(point) <= radius * radius;
            assert_eq!(in_circle(point, center, radius), expected);
        }
        assert!(in_circle(v2(3.0, 4.0), Vec2::zero(), 5.0));
        assert!(!in_circle(v2(3.0, 4.01), Vec2::zero(), 5.0));
    }

    #[test]
    fn test_in_rect() {
        let point = v2(4.0, 4.0);
        assert!(in_rect(point, 0.0, 0.0, 10.0, 10.0));
        assert!(!in_rect(point, 0.0, 5.0, 10.0, 10.0));
        assert!(in_rect(v2(10.0, 0.0), 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_rect_in_rect() {
        let outer = Transform::new(0.0, 0.0, 10.0, 10.0);
        let inside = Transform::new(1.0, 1.0, 7.0, 9.0);
        let not_inside = Transform::new(1.0, 1.0, 7.0, 19.0);
        assert!(rect_in_rect(&inside, &outer));
        assert!(!rect_in_rect(&not_inside, &outer));
    }
}
