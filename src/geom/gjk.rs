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
use crate::float::n64;
use crate::geom::{v2, Vec2};
use log::warn;

// GJK distance and EPA penetration on the Minkowski difference of two convex
// point sets. Shapes hand in their absolute vertices as the "core"; circle
// radii are added on top by the caller.

/// Returns the first vertex of `points` with the greatest dot product with
/// `dir`. Ties keep the earlier vertex, so a zero `dir` yields `points[0]`.
pub(crate) fn support_vertex(points: &[Vec2], dir: Vec2) -> Vec2 {
    let mut best = points[0];
    let mut best_dot = best * dir;
    for &point in &points[1..] {
        let dot = point * dir;
        if dot > best_dot {
            best = point;
            best_dot = dot;
        }
    }
    best
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct SimplexVertex {
    // w = a - b
    w: Vec2,
    a: Vec2,
    b: Vec2,
}

fn support_diff(a: &[Vec2], b: &[Vec2], dir: Vec2) -> SimplexVertex {
    let pa = support_vertex(a, dir);
    let pb = support_vertex(b, -dir);
    SimplexVertex { w: pa - pb, a: pa, b: pb }
}

pub(crate) enum GjkOutcome {
    /// The origin lies in (or on) the Minkowski difference. The simplex is
    /// the last one built; it is a triangle when the origin is strictly
    /// enclosed.
    Overlap(Vec<SimplexVertex>),
    /// The cores are apart by `distance`, realised by the two witness points.
    Separated {
        distance: f64,
        closest_a: Vec2,
        closest_b: Vec2,
    },
}

// closest point of the current simplex to the origin, as weights over the
// simplex vertices
struct Closest {
    point: Vec2,
    weights: [f64; 3],
}

impl Closest {
    fn witnesses(&self, simplex: &[SimplexVertex]) -> (Vec2, Vec2) {
        simplex
            .iter()
            .zip(self.weights.iter())
            .fold((Vec2::zero(), Vec2::zero()), |(a, b), (vertex, &weight)| {
                (a + vertex.a * weight, b + vertex.b * weight)
            })
    }

    fn separated(&self, simplex: &[SimplexVertex]) -> GjkOutcome {
        let (closest_a, closest_b) = self.witnesses(simplex);
        GjkOutcome::Separated {
            distance: self.point.len(),
            closest_a,
            closest_b,
        }
    }
}

/// Runs GJK on the Minkowski difference `a - b`.
pub(crate) fn gjk(a: &[Vec2], b: &[Vec2], config: &KernelConfig) -> GjkOutcome {
    let tolerance = config.linear_tolerance;
    let initial_dir = (a[0] - b[0]).normalize_or(Vec2::new(1.0, 0.0));
    let mut simplex = vec![support_diff(a, b, -initial_dir)];
    let mut closest = Closest {
        point: simplex[0].w,
        weights: [1.0, 0.0, 0.0],
    };

    for _ in 0..config.max_gjk_iterations {
        let v = closest.point;
        if v.len_sq() <= tolerance * tolerance {
            return GjkOutcome::Overlap(simplex);
        }
        let vertex = support_diff(a, b, -v);

        // no support point gets meaningfully closer to the origin than v
        if v * v - v * vertex.w <= tolerance * v.len() {
            return closest.separated(&simplex);
        }
        if simplex.iter().any(|s| s.w.dist_sq(vertex.w) <= tolerance * tolerance) {
            return closest.separated(&simplex);
        }

        simplex.push(vertex);
        closest = match reduce(&mut simplex) {
            Some(closest) => closest,
            None => return GjkOutcome::Overlap(simplex),
        };
    }

    warn!("GJK did not converge within {} iterations", config.max_gjk_iterations);
    if closest.point.len_sq() <= tolerance * tolerance {
        GjkOutcome::Overlap(simplex)
    } else {
        closest.separated(&simplex)
    }
}

// Shrinks the simplex to the feature closest to the origin and returns that
// closest point, or None when the origin is strictly inside a triangle.
fn reduce(simplex: &mut Vec<SimplexVertex>) -> Option<Closest> {
    match simplex.len() {
        2 => Some(reduce_segment(simplex, 0, 1)),
        3 => reduce_triangle(simplex),
        len => unreachable!("simplex of {} vertices", len),
    }
}

// closest point of segment (simplex[i], simplex[j]) to the origin;
// the simplex is rewritten to hold only the active vertices
fn reduce_segment(simplex: &mut Vec<SimplexVertex>, i: usize, j: usize) -> Closest {
    let (p, q) = (simplex[i], simplex[j]);
    let t = segment_param(p.w, q.w);
    if t <= 0.0 {
        *simplex = vec![p];
        Closest { point: p.w, weights: [1.0, 0.0, 0.0] }
    } else if t >= 1.0 {
        *simplex = vec![q];
        Closest { point: q.w, weights: [1.0, 0.0, 0.0] }
    } else {
        *simplex = vec![p, q];
        Closest {
            point: p.w + (q.w - p.w) * t,
            weights: [1.0 - t, t, 0.0],
        }
    }
}

// parameter of the point on p + t * (q - p) closest to the origin, unclamped
fn segment_param(p: Vec2, q: Vec2) -> f64 {
    let edge = q - p;
    let len_sq = edge.len_sq();
    if len_sq == 0.0 {
        0.0
    } else {
        -(p * edge) / len_sq
    }
}

fn reduce_triangle(simplex: &mut Vec<SimplexVertex>) -> Option<Closest> {
    let (p, q, r) = (simplex[0].w, simplex[1].w, simplex[2].w);
    let pq = q - p;
    let pr = r - p;
    let area = pq.cross(pr);
    if area.abs() <= f64::EPSILON * pq.len_sq().max(pr.len_sq()) {
        return Some(reduce_flat_triangle(simplex));
    }

    // Voronoi regions of the triangle, origin as the query point
    let d1 = pq * -p;
    let d2 = pr * -p;
    if d1 <= 0.0 && d2 <= 0.0 {
        return Some(reduce_to_vertex(simplex, 0));
    }
    let d3 = pq * -q;
    let d4 = pr * -q;
    if d3 >= 0.0 && d4 <= d3 {
        return Some(reduce_to_vertex(simplex, 1));
    }
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return Some(reduce_segment(simplex, 0, 1));
    }
    let d5 = pq * -r;
    let d6 = pr * -r;
    if d6 >= 0.0 && d5 <= d6 {
        return Some(reduce_to_vertex(simplex, 2));
    }
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return Some(reduce_segment(simplex, 0, 2));
    }
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        return Some(reduce_segment(simplex, 1, 2));
    }
    None
}

fn reduce_to_vertex(simplex: &mut Vec<SimplexVertex>, i: usize) -> Closest {
    let vertex = simplex[i];
    *simplex = vec![vertex];
    Closest { point: vertex.w, weights: [1.0, 0.0, 0.0] }
}

// collinear triangle: take the best of its three edges
fn reduce_flat_triangle(simplex: &mut Vec<SimplexVertex>) -> Closest {
    let original = simplex.clone();
    let (i, j) = [(0, 1), (0, 2), (1, 2)]
        .iter()
        .cloned()
        .min_by_key(|&(i, j)| {
            let (p, q) = (original[i].w, original[j].w);
            let t = segment_param(p, q).max(0.0).min(1.0);
            n64((p + (q - p) * t).len_sq())
        })
        .unwrap_or((0, 1));
    reduce_segment(simplex, i, j)
}

/// Penetration of two overlapping cores, as the outward normal of the
/// Minkowski difference boundary nearest the origin and the depth along it.
///
/// A point or segment simplex (origin on the boundary) is first grown into a
/// triangle. `None` is returned when the Minkowski difference has no area,
/// which only happens when the cores are merely touching.
pub(crate) fn epa(
    a: &[Vec2],
    b: &[Vec2],
    simplex: &[SimplexVertex],
    config: &KernelConfig,
) -> Option<(Vec2, f64)> {
    let mut polytope: Vec<Vec2> = simplex.iter().map(|s| s.w).collect();
    grow_to_triangle(a, b, &mut polytope, config.linear_tolerance)?;
    if (polytope[1] - polytope[0]).cross(polytope[2] - polytope[0]) < 0.0 {
        polytope.swap(1, 2);
    }

    let mut best = None;
    for _ in 0..config.max_epa_iterations {
        let (index, normal, distance) = closest_edge(&polytope)?;
        best = Some((normal, distance));
        let support = support_diff(a, b, normal).w;
        if support * normal - distance <= config.linear_tolerance {
            return best;
        }
        polytope.insert(index + 1, support);
    }

    warn!("EPA did not converge within {} iterations", config.max_epa_iterations);
    best
}

fn grow_to_triangle(a: &[Vec2], b: &[Vec2], polytope: &mut Vec<Vec2>, tolerance: f64) -> Option<()> {
    if polytope.len() == 1 {
        let start = polytope[0];
        let next = [v2(1.0, 0.0), v2(-1.0, 0.0), v2(0.0, 1.0), v2(0.0, -1.0)]
            .iter()
            .map(|&dir| support_diff(a, b, dir).w)
            .find(|w| w.dist(start) > tolerance)?;
        polytope.push(next);
    }
    if polytope.len() == 2 {
        let (start, edge) = (polytope[0], polytope[1] - polytope[0]);
        let side = edge.perp();
        let next = [side, -side]
            .iter()
            .map(|&dir| support_diff(a, b, dir).w)
            .find(|&w| edge.cross(w - start).abs() > tolerance * edge.len())?;
        polytope.push(next);
    }
    Some(())
}

// edge of a counter-clockwise polytope nearest the origin:
// (start index, outward unit normal, distance)
fn closest_edge(polytope: &[Vec2]) -> Option<(usize, Vec2, f64)> {
    (0..polytope.len())
        .filter_map(|i| {
            let start = polytope[i];
            let edge = polytope[(i + 1) % polytope.len()] - start;
            if edge.len_sq() == 0.0 {
                return None;
            }
            let normal = Vec2::new(edge.y, -edge.x).normalize();
            Some((i, normal, normal * start))
        })
        .min_by_key(|&(_, _, distance)| n64(distance))
}
