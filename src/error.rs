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


//! Errors surfaced at the API boundary.

use thiserror::Error;

/// Errors raised by validated entry points of the kernel.
///
/// These are caller-programming errors: they are reported eagerly and are
/// not meant to be retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// A rotation was requested without naming a rotation mode.
    #[error("a rotation type must be specified")]
    MissingRotationType,

    /// `AroundPoint` rotation was requested without a pivot point.
    #[error("rotation around a point requires a pivot point")]
    MissingPivot,
}

/// Result alias for fallible kernel operations.
pub type Result<T> = std::result::Result<T, GeomError>;
