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

/// Visibility in whole statute miles, decoded from `{distance}SM`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    pub distance: u16,
}

impl Field for Visibility {
    const KIND: FieldKind = FieldKind::Visibility;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        let distance = scanner.number()?;
        scanner.literal("SM")?;
        scanner.finish()?;

        let distance = u16::try_from(distance).map_err(|_| Error::malformed(Self::KIND, token))?;

        Ok(Self { distance })
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SM", self.distance)
    }
}
