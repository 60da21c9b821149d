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

use std::fmt;

use crate::error::FieldKind;
use crate::field::{Field, Scanner};
use crate::Error;

/// Sky coverage of a cloud layer.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coverage {
    Clear,
    Few,
    Scattered,
    Broken,
    Overcast,
    /// Rendering fallback for layers built outside of decoding. Never
    /// produced by [`from_code`](Coverage::from_code).
    Unknown,
}

impl Coverage {
    /// Looks up a 3-letter coverage code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "SKC" | "CLR" => Some(Self::Clear),
            "FEW" => Some(Self::Few),
            "SCT" => Some(Self::Scattered),
            "BKN" => Some(Self::Broken),
            "OVC" => Some(Self::Overcast),
            _ => None,
        }
    }

    /// The canonical name used when rendering the layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Few => "few",
            Self::Scattered => "scattered",
            Self::Broken => "broken",
            Self::Overcast => "overcast",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One cloud deck: a coverage level and its base altitude in feet.
///
/// Decoded from a 3-letter coverage code with the base in hundreds of
/// feet, e.g. `SCT025` for scattered clouds at 2500 ft. A clear sky
/// (`SKC`/`CLR`) has no base; its altitude is pinned to 0 even when the
/// token carries one.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyCondition {
    pub coverage: Coverage,
    pub base: u32,
}

impl Field for SkyCondition {
    const KIND: FieldKind = FieldKind::SkyCondition;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        let code = scanner.take(3)?;
        let coverage = Coverage::from_code(code).ok_or_else(|| scanner.malformed())?;

        let base = match coverage {
            Coverage::Clear => {
                // the altitude group, if any, is ignored for a clear sky
                if !scanner.is_empty() {
                    scanner.digits(3)?;
                }
                0
            }
            _ => scanner.digits(3)? * 100,
        };

        scanner.finish()?;

        Ok(Self { coverage, base })
    }
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coverage {
            Coverage::Clear => write!(f, "{}", self.coverage),
            _ => write!(f, "{} at {} ft", self.coverage, self.base),
        }
    }
}
