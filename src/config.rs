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


//! Tunable tolerances for the narrow phase.

use serde::{Deserialize, Serialize};

/// Tolerances and iteration caps used by the GJK/EPA narrow phase and the
/// ray caster.
///
/// The host application may load this from its own configuration file; the
/// kernel only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Distances at or below this value count as touching.
    pub linear_tolerance: f64,
    /// Upper bound on GJK refinement steps for one query.
    pub max_gjk_iterations: usize,
    /// Upper bound on EPA expansion steps for one query.
    pub max_epa_iterations: usize,
}

impl KernelConfig {
    /// The configuration used by the free functions that take no config.
    pub const DEFAULT: KernelConfig = KernelConfig {
        linear_tolerance: 1e-7,
        max_gjk_iterations: 64,
        max_epa_iterations: 64,
    };
}

impl Default for KernelConfig {
    fn default() -> KernelConfig {
        KernelConfig::DEFAULT
    }
}
