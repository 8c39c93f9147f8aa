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
use crate::error::{GeomError, Result};
use crate::geom::gjk::support_vertex;
use crate::geom::hull::{bounding_sphere, convex_hull, polygon_centroid};
use crate::geom::ray::{self, RayCastResult};
use crate::geom::{v2, DirVec2, Vec2};
use log::trace;

mod normals;

pub use self::normals::Collision;

/// Enumeration of kinds of shapes.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum ShapeKind {
    /// A single point.
    Point,
    /// Circle. Has one vertex (its centre) and a radius.
    Circle,
    /// Three vertices.
    Triangle,
    /// Four vertices, assumed convex.
    Quadrilateral,
    /// Any number of vertices, made convex on construction.
    Polygon,
}

/// The bare rotation mode, without its pivot.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum RotationType {
    /// Rotate about the shape's own centroid.
    AroundCenter,
    /// Rotate about the world origin.
    AroundOrigin,
    /// Rotate about a caller-supplied pivot.
    AroundPoint,
}

/// How a shape is rotated.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Rotation {
    /// Rotate every vertex about the shape's centroid. The position is kept.
    AroundCenter,
    /// Rotate every vertex about `(0, 0)`. The position orbits the origin.
    AroundOrigin,
    /// Rotate every vertex about the given pivot. The position orbits it.
    AroundPoint(Vec2),
}

impl Rotation {
    /// Builds a rotation from loosely typed parts.
    ///
    /// Fails with `MissingRotationType` if `kind` is `None`, and with
    /// `MissingPivot` if `kind` is `AroundPoint` and `pivot` is `None`.
    /// The pivot is ignored by the other modes.
    pub fn from_parts(kind: Option<RotationType>, pivot: Option<Vec2>) -> Result<Rotation> {
        match kind {
            None => Err(GeomError::MissingRotationType),
            Some(RotationType::AroundCenter) => Ok(Rotation::AroundCenter),
            Some(RotationType::AroundOrigin) => Ok(Rotation::AroundOrigin),
            Some(RotationType::AroundPoint) => pivot
                .map(Rotation::AroundPoint)
                .ok_or(GeomError::MissingPivot),
        }
    }

    /// Returns the mode without its pivot.
    pub fn kind(&self) -> RotationType {
        match self {
            Rotation::AroundCenter => RotationType::AroundCenter,
            Rotation::AroundOrigin => RotationType::AroundOrigin,
            Rotation::AroundPoint(_) => RotationType::AroundPoint,
        }
    }
}

/// A convex shape placed in the world.
///
/// The shape keeps its vertices relative to a local origin (`relatives`) and
/// a cached copy in world space (`absolutes`, each relative plus `pos`).
/// Every mutating method refreshes the cache before returning, so the two
/// never disagree. Vertex order and count never change after construction.
#[derive(PartialEq, Clone, Debug)]
pub struct Shape {
    kind: ShapeKind,
    relatives: Vec<Vec2>,
    absolutes: Vec<Vec2>,
    pos: Vec2,
    rotation: f64,
    radius: f64,
}

impl Shape {
    fn with_vertices(kind: ShapeKind, relatives: Vec<Vec2>, radius: f64) -> Shape {
        assert!(!relatives.is_empty(), "shape requires at least one vertex");
        Shape {
            kind,
            absolutes: relatives.clone(),
            relatives,
            pos: Vec2::zero(),
            rotation: 0.0,
            radius,
        }
    }

    /// Constructs a point shape at `point`.
    pub fn point(point: Vec2) -> Shape {
        Shape::with_vertices(ShapeKind::Point, vec![point], 0.0)
    }

    /// Constructs a circle with the given centre offset and radius.
    ///
    /// The radius must be non-negative.
    pub fn circle(center: Vec2, radius: f64) -> Shape {
        assert!(radius >= 0.0, "circle radius must be non-negative");
        Shape::with_vertices(ShapeKind::Circle, vec![center], radius)
    }

    /// Constructs a triangle. The vertex order is kept as given.
    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Shape {
        Shape::with_vertices(ShapeKind::Triangle, vec![a, b, c], 0.0)
    }

    /// Constructs a convex quadrilateral. The vertex order is kept as given.
    pub fn quadrilateral(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Shape {
        Shape::with_vertices(ShapeKind::Quadrilateral, vec![a, b, c, d], 0.0)
    }

    /// Constructs the convex polygon spanned by `points`.
    ///
    /// If the points already walk the convex hull (in either winding, from
    /// any starting vertex), the given order is kept. Otherwise the points
    /// are replaced by their counter-clockwise convex hull. Panics if
    /// `points` is empty.
    pub fn convex_polygon(points: &[Vec2]) -> Shape {
        assert!(!points.is_empty(), "polygon requires at least one vertex");
        let hull = convex_hull(points);
        let relatives = if in_hull_order(points, &hull) {
            points.to_vec()
        } else {
            trace!("polygon of {} points replaced by a hull of {}", points.len(), hull.len());
            hull
        };
        Shape::with_vertices(ShapeKind::Polygon, relatives, 0.0)
    }

    /// Constructs an axis-aligned rectangle with its minimum corner at
    /// `(x, y)` as a quadrilateral.
    pub fn aa_rect(x: f64, y: f64, width: f64, height: f64) -> Shape {
        Shape::quadrilateral(
            v2(x, y),
            v2(x + width, y),
            v2(x + width, y + height),
            v2(x, y + height),
        )
    }

    /// Moves the shape to `pos` and returns it.
    pub fn place(mut self, pos: Vec2) -> Shape {
        self.set_position(pos);
        self
    }

    /// Returns the kind of shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the world anchor of the local origin.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Returns the total angle the shape has been rotated by, in radians.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the circle radius, or `0.0` for other kinds.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Vertex offsets from the local origin.
    #[inline]
    pub fn relatives(&self) -> &[Vec2] {
        &self.relatives
    }

    /// Vertices in world space.
    #[inline]
    pub fn absolutes(&self) -> &[Vec2] {
        &self.absolutes
    }

    /// Number of vertices. Points and circles have one.
    #[inline]
    pub fn vertices(&self) -> usize {
        self.absolutes.len()
    }

    /// The edges of the shape in world space, each as `(start, end)`, wrapping
    /// from the last vertex to the first. Points and circles have none.
    pub fn faces(&self) -> Vec<(Vec2, Vec2)> {
        match self.kind {
            ShapeKind::Point | ShapeKind::Circle => Vec::new(),
            ShapeKind::Triangle | ShapeKind::Quadrilateral | ShapeKind::Polygon => {
                let len = self.absolutes.len();
                (0..len)
                    .map(|i| (self.absolutes[i], self.absolutes[(i + 1) % len]))
                    .collect()
            }
        }
    }

    /// The area centroid in world space; the centre for points and circles.
    pub fn centroid(&self) -> Vec2 {
        self.pos + self.relative_centroid()
    }

    fn relative_centroid(&self) -> Vec2 {
        match self.kind {
            ShapeKind::Point | ShapeKind::Circle => self.relatives[0],
            ShapeKind::Triangle | ShapeKind::Quadrilateral | ShapeKind::Polygon => {
                polygon_centroid(&self.relatives)
            }
        }
    }

    /// The circle about the centroid that contains the whole shape. A circle
    /// is its own bounding sphere.
    pub fn bounding_sphere(&self) -> Shape {
        if self.kind == ShapeKind::Circle {
            return self.clone();
        }
        let centroid = self.centroid();
        Shape::circle(centroid, bounding_sphere(centroid, &self.absolutes))
    }

    /// Moves the local origin to `pos`.
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.update_absolutes();
    }

    /// Moves the shape by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        let pos = self.pos + delta;
        self.set_position(pos);
    }

    /// Rotates the shape counter-clockwise by `angle` radians.
    ///
    /// Rotating by `angle` and then by `-angle` with the same `rotation`
    /// restores the vertices, up to floating point error.
    pub fn rotate(&mut self, angle: f64, rotation: Rotation) {
        match rotation {
            Rotation::AroundCenter => {
                let center = self.relative_centroid();
                for vertex in self.relatives.iter_mut() {
                    *vertex = vertex.rotate_around(center, angle);
                }
            }
            Rotation::AroundOrigin => {
                self.rotate_relatives(angle);
                self.pos = self.pos.rotate(angle);
            }
            Rotation::AroundPoint(pivot) => {
                self.rotate_relatives(angle);
                self.pos = self.pos.rotate_around(pivot, angle);
            }
        }
        self.rotation += angle;
        self.update_absolutes();
    }

    /// Validating form of `rotate` for loosely typed input.
    ///
    /// The shape is left untouched when the arguments are rejected.
    pub fn try_rotate(&mut self, angle: f64, kind: Option<RotationType>, pivot: Option<Vec2>) -> Result<()> {
        let rotation = Rotation::from_parts(kind, pivot)?;
        self.rotate(angle, rotation);
        Ok(())
    }

    fn rotate_relatives(&mut self, angle: f64) {
        for vertex in self.relatives.iter_mut() {
            *vertex = vertex.rotate(angle);
        }
    }

    fn update_absolutes(&mut self) {
        let pos = self.pos;
        for (absolute, &relative) in self.absolutes.iter_mut().zip(self.relatives.iter()) {
            *absolute = relative + pos;
        }
    }

    /// Returns the point of the shape farthest in `dir`.
    ///
    /// For polygons this is the first vertex with the greatest dot product,
    /// in vertex order. For circles it is the boundary point in `dir`. A zero
    /// `dir` returns the first vertex (the centre, for circles).
    pub fn support_point(&self, dir: Vec2) -> Vec2 {
        match self.kind {
            ShapeKind::Circle => self.absolutes[0] + dir.normalize_or(Vec2::zero()) * self.radius,
            ShapeKind::Point | ShapeKind::Triangle | ShapeKind::Quadrilateral | ShapeKind::Polygon => {
                support_vertex(&self.absolutes, dir)
            }
        }
    }

    /// Returns `true` if `point` lies inside or on the shape.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let tolerance = KernelConfig::DEFAULT.linear_tolerance;
        match self.kind {
            ShapeKind::Circle => self.absolutes[0].dist(point) <= self.radius + tolerance,
            ShapeKind::Point | ShapeKind::Triangle | ShapeKind::Quadrilateral | ShapeKind::Polygon => {
                ray::polygon_contains(&self.absolutes, point, tolerance)
            }
        }
    }

    /// Casts a ray from `origin` along `dir` and returns the nearest hit no
    /// farther than `max_distance` (inclusive).
    ///
    /// `dir` need not be unit length; a zero `dir` never hits. A ray starting
    /// inside the shape hits at its origin with a strike length of zero.
    pub fn ray_cast(&self, origin: Vec2, dir: Vec2, max_distance: f64) -> RayCastResult {
        self.ray_cast_with(origin, dir, max_distance, &KernelConfig::DEFAULT)
    }

    /// `ray_cast` with explicit tolerances.
    pub fn ray_cast_with(&self, origin: Vec2, dir: Vec2, max_distance: f64, config: &KernelConfig) -> RayCastResult {
        if dir.len_sq() == 0.0 || max_distance < 0.0 {
            return RayCastResult::miss();
        }
        let dir = dir.normalize();
        let tolerance = config.linear_tolerance;
        match self.kind {
            ShapeKind::Circle => ray::ray_circle(self.absolutes[0], self.radius, origin, dir, max_distance),
            ShapeKind::Point => ray::ray_point(self.absolutes[0], origin, dir, max_distance, tolerance),
            ShapeKind::Triangle | ShapeKind::Quadrilateral | ShapeKind::Polygon => {
                ray::ray_polygon(&self.absolutes, origin, dir, max_distance, tolerance)
            }
        }
    }

    /// Returns `true` if the two shapes overlap or touch.
    pub fn intersection(&self, other: &Shape) -> bool {
        self.collision(other).collision()
    }

    /// Runs the narrow-phase test against `other`.
    pub fn collision(&self, other: &Shape) -> Collision {
        self.collision_with(other, &KernelConfig::DEFAULT)
    }

    /// `collision` with explicit tolerances and iteration caps.
    pub fn collision_with(&self, other: &Shape, config: &KernelConfig) -> Collision {
        normals::collision(self, other, config)
    }

    /// Returns a normal vector that points in the direction from `other` to
    /// `self`.
    ///
    /// The length of this vector is the minimum distance that `self` would
    /// need to be moved along this direction so that it is no longer
    /// overlapping `other`. If the shapes are not overlapping to begin with,
    /// the length is negative, and describes the minimum distance that `self`
    /// would need to be moved so that it is just touching `other`.
    pub fn normal_from(&self, other: &Shape) -> DirVec2 {
        self.collision(other).normal()
    }
}

// true if `points` is a cyclic rotation of `hull`, forwards or backwards
fn in_hull_order(points: &[Vec2], hull: &[Vec2]) -> bool {
    let len = hull.len();
    if points.len() != len {
        return false;
    }
    let start = match hull.iter().position(|&v| v == points[0]) {
        Some(start) => start,
        None => return false,
    };
    let forwards = (0..len).all(|i| points[i] == hull[(start + i) % len]);
    let backwards = (0..len).all(|i| points[i] == hull[(start + len - i) % len]);
    forwards || backwards
}
