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

/// Temperature and dewpoint in whole degrees Celsius.
///
/// Decoded from two signed 2-digit values, each with an optional leading
/// `M` marking it negative. A single separator byte between the values is
/// skipped by position, not inspected, so `05/03`, `0503` and `05M03` all
/// decode; in the last one the `M` belongs to the dewpoint.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    pub temperature: i16,
    pub dewpoint: i16,
}

impl Temperature {
    /// The temperature in Fahrenheit.
    ///
    /// The conversion truncates `celsius * 1.8 + 32` toward zero, so a
    /// 3 °C value reads 37 °F, not 38.
    pub fn temperature_fahrenheit(&self) -> i16 {
        Self::fahrenheit(self.temperature)
    }

    /// The dewpoint in Fahrenheit, truncated like the temperature.
    pub fn dewpoint_fahrenheit(&self) -> i16 {
        Self::fahrenheit(self.dewpoint)
    }

    fn fahrenheit(celsius: i16) -> i16 {
        (f32::from(celsius) * 1.8 + 32.0) as i16
    }

    fn value(scanner: &mut Scanner) -> Result<i16, Error> {
        let negative = scanner.accept(b'M');
        let value = scanner.digits(2)? as i16;
        Ok(if negative { -value } else { value })
    }
}

impl Field for Temperature {
    const KIND: FieldKind = FieldKind::Temperature;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        let temperature = Self::value(&mut scanner)?;

        // one separator byte unless the dewpoint follows back-to-back
        if !scanner
            .peek()
            .is_some_and(|byte| byte.is_ascii_digit() || byte.eq_ignore_ascii_case(&b'M'))
        {
            scanner.skip();
        }

        let dewpoint = Self::value(&mut scanner)?;
        scanner.finish()?;

        Ok(Self {
            temperature,
            dewpoint,
        })
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} °C ({} °F), dewpoint {} °C ({} °F)",
            self.temperature,
            self.temperature_fahrenheit(),
            self.dewpoint,
            self.dewpoint_fahrenheit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_separated_values() {
        let temp = Temperature::from_token("05/03").expect("temperature should decode");

        assert_eq!(temp.temperature, 5);
        assert_eq!(temp.dewpoint, 3);
    }

    #[test]
    fn decodes_negative_values() {
        let temp = Temperature::from_token("M05M12").expect("temperature should decode");
        assert_eq!(temp.temperature, -5);
        assert_eq!(temp.dewpoint, -12);

        let temp = Temperature::from_token("05M03").expect("temperature should decode");
        assert_eq!(temp.temperature, 5);
        assert_eq!(temp.dewpoint, -3);

        let temp = Temperature::from_token("M02/M04").expect("temperature should decode");
        assert_eq!(temp.temperature, -2);
        assert_eq!(temp.dewpoint, -4);
    }

    #[test]
    fn decodes_back_to_back_values() {
        let temp = Temperature::from_token("0503").expect("temperature should decode");

        assert_eq!(temp.temperature, 5);
        assert_eq!(temp.dewpoint, 3);
    }

    #[test]
    fn skips_the_separator_by_position() {
        // the separator byte is not inspected
        let temp = Temperature::from_token("05X03").expect("temperature should decode");

        assert_eq!(temp.temperature, 5);
        assert_eq!(temp.dewpoint, 3);
    }

    #[test]
    fn rejects_short_and_malformed_tokens() {
        assert!(Temperature::from_token("05").is_err());
        assert!(Temperature::from_token("05/").is_err());
        assert!(Temperature::from_token("05/0").is_err());
        assert!(Temperature::from_token("5/3").is_err());
        assert!(Temperature::from_token("AB/CD").is_err());
        assert!(Temperature::from_token("05/034").is_err());
        assert!(Temperature::from_token("").is_err());
    }

    #[test]
    fn fahrenheit_truncates_toward_zero() {
        let temp = Temperature::from_token("05/03").expect("temperature should decode");

        // 5 °C = 41.0 °F, 3 °C = 37.4 °F truncated to 37
        assert_eq!(temp.temperature_fahrenheit(), 41);
        assert_eq!(temp.dewpoint_fahrenheit(), 37);

        let temp = Temperature::from_token("M04M40").expect("temperature should decode");

        // -4 °C = 24.8 °F truncates to 24, -40 °C is -40 in both scales
        assert_eq!(temp.temperature_fahrenheit(), 24);
        assert_eq!(temp.dewpoint_fahrenheit(), -40);
    }

    #[test]
    fn renders_both_units() {
        let temp = Temperature::from_token("05/03").expect("temperature should decode");
        assert_eq!(temp.to_string(), "5 °C (41 °F), dewpoint 3 °C (37 °F)");
    }
}
