// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Typed report fields, one module per field kind.
//!
//! Each field decodes itself from a single raw token via
//! [`Field::from_token`](crate::Field::from_token) and renders itself
//! through [`fmt::Display`](std::fmt::Display).

mod altimeter;
mod observation_time;
mod sky_condition;
mod temperature;
mod visibility;
mod weather;
mod wind;

pub use altimeter::Altimeter;
pub use observation_time::ObservationTime;
pub use sky_condition::{Coverage, SkyCondition};
pub use temperature::Temperature;
pub use visibility::Visibility;
pub use weather::{Intensity, Phenomenon, WeatherCondition, MAX_PHENOMENA};
pub use wind::Wind;
