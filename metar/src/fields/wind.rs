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

/// Surface wind of a reading.
///
/// Decoded from `{direction}{speed}KT` with an optional gust group, e.g.
/// `05004KT` or `21018G26KT`. Direction is in degrees, speed and gust in
/// knots.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wind {
    pub direction: u16,
    pub speed: u16,
    pub gust: Option<u16>,
}

impl Field for Wind {
    const KIND: FieldKind = FieldKind::Wind;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        let direction = scanner.digits(3)? as u16;
        let speed = scanner.digits(2)? as u16;

        let gust = if scanner.accept(b'G') {
            Some(scanner.digits(2)? as u16)
        } else {
            None
        };

        scanner.literal("KT")?;
        scanner.finish()?;

        Ok(Self {
            direction,
            speed,
            gust,
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gust {
            Some(gust) => write!(
                f,
                "{}° at {} kt, gusting {} kt",
                self.direction, self.speed, gust
            ),
            None => write!(f, "{}° at {} kt", self.direction, self.speed),
        }
    }
}
