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


use crate::collider::{filter_pass, Collider, LayerMask};
use crate::config::KernelConfig;
use crate::float::n64;
use crate::geom::{Collision, RayCastResult, Shape, Vec2};
use fnv::FnvHashMap;
use log::{debug, trace};

/// Caller-chosen key of a collider within a `ColliderSet`.
pub type ColliderId = u64;

/// A flat collection of colliders keyed by id.
///
/// Every query tests each candidate against the layer/mask filter before
/// running the narrow phase. There is no spatial index, so queries visit all
/// colliders.
pub struct ColliderSet {
    colliders: FnvHashMap<ColliderId, Collider>,
    config: KernelConfig,
}

impl ColliderSet {
    /// Constructs an empty set whose queries use `config`.
    pub fn new(config: KernelConfig) -> ColliderSet {
        ColliderSet {
            colliders: FnvHashMap::default(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Adds a collider under `id`. Panics if there is an id clash.
    pub fn add(&mut self, id: ColliderId, collider: Collider) {
        assert!(!self.colliders.contains_key(&id), "collider id {} already in use", id);
        debug!("adding collider {} ({:?})", id, collider.shape().kind());
        self.colliders.insert(id, collider);
    }

    /// Removes and returns the collider with the given `id`, if present.
    pub fn remove(&mut self, id: ColliderId) -> Option<Collider> {
        let removed = self.colliders.remove(&id);
        if removed.is_some() {
            debug!("removed collider {}", id);
        }
        removed
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(&id)
    }

    /// Mutable access, e.g. to move or rotate the owned shape between ticks.
    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// All ids in increasing order.
    pub fn ids(&self) -> Vec<ColliderId> {
        let mut ids: Vec<ColliderId> = self.colliders.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns every pair of colliders that pass the layer/mask filter and
    /// whose shapes intersect.
    ///
    /// Within a pair the smaller id comes first, and pairs are sorted. The
    /// collision normal points from the second collider towards the first.
    pub fn overlapping_pairs(&self) -> Vec<(ColliderId, ColliderId, Collision)> {
        let ids = self.ids();
        let mut result = Vec::new();
        for (i, &id_1) in ids.iter().enumerate() {
            let collider_1 = &self.colliders[&id_1];
            for &id_2 in &ids[i + 1..] {
                let collider_2 = &self.colliders[&id_2];
                if let Some(collision) = collider_1.collision_with_config(collider_2, &self.config) {
                    result.push((id_1, id_2, collision));
                }
            }
        }
        trace!("{} overlapping pairs among {} colliders", result.len(), ids.len());
        result
    }

    /// Returns the ids of all colliders that a probe on `layers` with `mask`
    /// may collide with and whose shapes intersect `shape`, in increasing
    /// order.
    pub fn query_overlaps(&self, shape: &Shape, layers: LayerMask, mask: LayerMask) -> Vec<ColliderId> {
        let mut result: Vec<ColliderId> = self
            .colliders
            .iter()
            .filter(|(_, collider)| filter_pass(layers, mask, collider.layer_set(), collider.mask_set()))
            .filter(|(_, collider)| collider.shape().collision_with(shape, &self.config).collision())
            .map(|(&id, _)| id)
            .collect();
        result.sort();
        trace!("shape query matched {} colliders", result.len());
        result
    }

    /// Casts a ray against every collider on a layer in `mask` and returns
    /// the nearest hit. Ties go to the smaller id.
    pub fn ray_cast(
        &self,
        origin: Vec2,
        dir: Vec2,
        max_distance: f64,
        mask: LayerMask,
    ) -> Option<(ColliderId, RayCastResult)> {
        self.ids()
            .into_iter()
            .map(|id| (id, &self.colliders[&id]))
            .filter(|(_, collider)| collider.layer_set().intersects(mask))
            .map(|(id, collider)| {
                let hit = collider.shape().ray_cast_with(origin, dir, max_distance, &self.config);
                (id, hit)
            })
            .filter(|(_, hit)| hit.did_hit())
            .min_by_key(|(_, hit)| n64(hit.strike_length()))
    }
}

impl Default for ColliderSet {
    fn default() -> ColliderSet {
        ColliderSet::new(KernelConfig::default())
    }
}
