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

/// Altimeter setting in inches of mercury.
///
/// Decoded from `A` followed by 4 digits in hundredths, e.g. `A3042` for
/// 30.42 inHg.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Altimeter {
    pub in_hg: f32,
}

impl Field for Altimeter {
    const KIND: FieldKind = FieldKind::Altimeter;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        scanner.literal("A")?;
        let hundredths = scanner.digits(4)?;
        scanner.finish()?;

        Ok(Self {
            in_hg: hundredths as f32 / 100.0,
        })
    }
}

impl fmt::Display for Altimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} inHg", self.in_hg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_inches_of_mercury() {
        let altimeter = Altimeter::from_token("A3042").expect("altimeter should decode");
        assert_eq!(altimeter.in_hg, 30.42);

        let altimeter = Altimeter::from_token("A2992").expect("altimeter should decode");
        assert_eq!(altimeter.in_hg, 29.92);
    }

    #[test]
    fn rejects_a_missing_marker() {
        assert!(Altimeter::from_token("3042").is_err());
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(Altimeter::from_token("A304").is_err());
        assert!(Altimeter::from_token("A30421").is_err());
        assert!(Altimeter::from_token("A30X2").is_err());
        assert!(Altimeter::from_token("A").is_err());
    }

    #[test]
    fn renders_two_decimal_digits() {
        let altimeter = Altimeter::from_token("A3000").expect("altimeter should decode");
        assert_eq!(altimeter.to_string(), "30.00 inHg");
    }
}
