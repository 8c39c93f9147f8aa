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


//! A 2D collision detection kernel for convex shapes.
//!
//! Shapes (`geom::Shape`) are points, circles, triangles, quadrilaterals and
//! convex polygons placed in the world. The kernel answers intersection
//! queries with GJK (plus EPA for the penetration depth), casts rays,
//! builds convex hulls and computes centroids and bounding circles.
//!
//! A `Collider` wraps a shape with a set of 15 collision layers and a mask
//! of layers it reacts to; the bitmask check runs before any geometry. A
//! `ColliderSet` runs the pairwise, shape and ray queries over many
//! colliders at once.
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod geom;
pub mod util;
mod collider;
mod config;
mod error;
mod float;

pub use crate::collider::{encode, encode_layer, Collider, ColliderId, ColliderSet, LayerMask, LAYER_COUNT};
pub use crate::config::KernelConfig;
pub use crate::error::{GeomError, Result};
