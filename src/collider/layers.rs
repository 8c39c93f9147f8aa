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


use serde::{Deserialize, Serialize};

/// Number of usable layers. Layer indices run from `0` to `LAYER_COUNT - 1`.
pub const LAYER_COUNT: u8 = 15;

/// Returns the bit of layer `layer`: layer `0` is the highest used bit
/// (`1 << 14`) and layer `14` the lowest (`1`).
///
/// Panics if `layer >= LAYER_COUNT`.
#[inline]
pub fn encode_layer(layer: u8) -> u16 {
    assert!(layer < LAYER_COUNT, "layer {} out of range 0..{}", layer, LAYER_COUNT);
    1 << (LAYER_COUNT - 1 - layer)
}

/// Combines several layer indices into one bit set.
pub fn encode(layers: &[u8]) -> u16 {
    layers.iter().fold(0, |bits, &layer| bits | encode_layer(layer))
}

/// A set of collision layers, stored as 15 bits of a `u16`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash, Serialize, Deserialize)]
pub struct LayerMask(u16);

impl LayerMask {
    /// The empty set.
    pub fn empty() -> LayerMask {
        LayerMask(0)
    }

    /// Wraps raw bits as produced by `encode`. Bits above the used range are
    /// dropped.
    pub fn from_bits(bits: u16) -> LayerMask {
        LayerMask(bits & ((1 << LAYER_COUNT) - 1))
    }

    /// Builds a set from layer indices.
    pub fn from_layers(layers: &[u8]) -> LayerMask {
        LayerMask(encode(layers))
    }

    /// The raw bits, layer `0` at bit 14.
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if layer `layer` is in the set.
    #[inline]
    pub fn contains(self, layer: u8) -> bool {
        self.0 & encode_layer(layer) != 0
    }

    /// Adds or removes layer `layer`.
    pub fn set(&mut self, layer: u8, value: bool) {
        if value {
            self.0 |= encode_layer(layer);
        } else {
            self.0 &= !encode_layer(layer);
        }
    }

    /// Returns `true` if the two sets share a layer.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}
