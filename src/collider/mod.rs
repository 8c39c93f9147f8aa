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


//! Layer/mask filtering on top of the geometry kernel.

mod collider_set;
mod layers;

use crate::config::KernelConfig;
use crate::geom::{Collision, RayCastResult, Shape, Vec2};

pub use self::collider_set::{ColliderId, ColliderSet};
pub use self::layers::{encode, encode_layer, LayerMask, LAYER_COUNT};

/// A shape together with the layers it is on and the layers it reacts to.
///
/// Two colliders may collide when either one's layers meet the other's mask.
/// The narrow phase is only consulted after that check passes.
#[derive(PartialEq, Clone, Debug)]
pub struct Collider {
    shape: Shape,
    layers: LayerMask,
    mask: LayerMask,
}

impl Collider {
    /// Wraps `shape` with empty layers and mask.
    pub fn new(shape: Shape) -> Collider {
        Collider {
            shape,
            layers: LayerMask::empty(),
            mask: LayerMask::empty(),
        }
    }

    /// Sets the layers and returns `self`.
    pub fn with_layers(mut self, layers: LayerMask) -> Collider {
        self.layers = layers;
        self
    }

    /// Sets the mask and returns `self`.
    pub fn with_mask(mut self, mask: LayerMask) -> Collider {
        self.mask = mask;
        self
    }

    /// The owned shape.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable access to the owned shape, e.g. to move or rotate it.
    #[inline]
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Adds the collider to (or removes it from) layer `layer`.
    pub fn set_layer(&mut self, layer: u8, value: bool) {
        self.layers.set(layer, value);
    }

    /// Adds (or removes) layer `layer` from the layers this collider reacts to.
    pub fn set_mask(&mut self, layer: u8, value: bool) {
        self.mask.set(layer, value);
    }

    /// Returns `true` if the collider is on layer `layer`.
    pub fn is_on_layer(&self, layer: u8) -> bool {
        self.layers.contains(layer)
    }

    /// Returns `true` if the collider reacts to layer `layer`.
    pub fn has_mask(&self, layer: u8) -> bool {
        self.mask.contains(layer)
    }

    /// The raw layer bits, layer `0` at bit 14.
    pub fn layers(&self) -> u16 {
        self.layers.bits()
    }

    /// The raw mask bits, layer `0` at bit 14.
    pub fn mask(&self) -> u16 {
        self.mask.bits()
    }

    pub(crate) fn layer_set(&self) -> LayerMask {
        self.layers
    }

    pub(crate) fn mask_set(&self) -> LayerMask {
        self.mask
    }

    /// Returns `true` if the bitmask filter lets the two colliders interact.
    pub fn can_collide_with(&self, other: &Collider) -> bool {
        filter_pass(self.layers, self.mask, other.layers, other.mask)
    }

    /// Runs the narrow phase against `other` if the bitmask filter passes.
    ///
    /// Returns `None` when the filter rejects the pair or the shapes do not
    /// intersect.
    pub fn collision_with(&self, other: &Collider) -> Option<Collision> {
        self.collision_with_config(other, &KernelConfig::DEFAULT)
    }

    pub(crate) fn collision_with_config(&self, other: &Collider, config: &KernelConfig) -> Option<Collision> {
        if !self.can_collide_with(other) {
            return None;
        }
        let collision = self.shape.collision_with(&other.shape, config);
        if collision.collision() {
            Some(collision)
        } else {
            None
        }
    }

    /// Returns `true` if the colliders may interact and their shapes intersect.
    pub fn collides_with(&self, other: &Collider) -> bool {
        self.collision_with(other).is_some()
    }

    /// Casts a ray against the owned shape. Layers are not consulted.
    pub fn ray_cast(&self, origin: Vec2, dir: Vec2, max_distance: f64) -> RayCastResult {
        self.shape.ray_cast(origin, dir, max_distance)
    }
}

pub(crate) fn filter_pass(layers_1: LayerMask, mask_1: LayerMask, layers_2: LayerMask, mask_2: LayerMask) -> bool {
    layers_1.intersects(mask_2) || layers_2.intersects(mask_1)
}
