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

/// Most phenomena that can be grouped behind one intensity marker.
pub const MAX_PHENOMENA: usize = 5;

/// Intensity marker of a weather condition group.
///
/// The marker is optional on a group; a group without one reports the
/// phenomena at their ordinary intensity.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intensity {
    /// `-` marker.
    Light,
    /// `+` marker.
    Heavy,
}

impl Intensity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A present-weather phenomenon from the METAR code table.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phenomenon {
    // precipitation
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    UnknownPrecipitation,
    // obscuration
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    // other
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
    // descriptors
    Thunderstorm,
    Showers,
    Freezing,
    Shallow,
    Partial,
    Patches,
    Drifting,
    Blowing,
    Vicinity,
}

impl Phenomenon {
    /// Looks up a two-letter phenomenon code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "DZ" => Some(Self::Drizzle),
            "RA" => Some(Self::Rain),
            "SN" => Some(Self::Snow),
            "SG" => Some(Self::SnowGrains),
            "IC" => Some(Self::IceCrystals),
            "PL" => Some(Self::IcePellets),
            "GR" => Some(Self::Hail),
            "GS" => Some(Self::SmallHail),
            "UP" => Some(Self::UnknownPrecipitation),
            "BR" => Some(Self::Mist),
            "FG" => Some(Self::Fog),
            "FU" => Some(Self::Smoke),
            "VA" => Some(Self::VolcanicAsh),
            "DU" => Some(Self::Dust),
            "SA" => Some(Self::Sand),
            "HZ" => Some(Self::Haze),
            "PY" => Some(Self::Spray),
            "PO" => Some(Self::DustWhirls),
            "SQ" => Some(Self::Squalls),
            "FC" => Some(Self::FunnelCloud),
            "SS" => Some(Self::Sandstorm),
            "DS" => Some(Self::Duststorm),
            "TS" => Some(Self::Thunderstorm),
            "SH" => Some(Self::Showers),
            "FZ" => Some(Self::Freezing),
            "MI" => Some(Self::Shallow),
            "PR" => Some(Self::Partial),
            "BC" => Some(Self::Patches),
            "DR" => Some(Self::Drifting),
            "BL" => Some(Self::Blowing),
            "VC" => Some(Self::Vicinity),
            _ => None,
        }
    }

    /// The two-letter code of this phenomenon.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Drizzle => "DZ",
            Self::Rain => "RA",
            Self::Snow => "SN",
            Self::SnowGrains => "SG",
            Self::IceCrystals => "IC",
            Self::IcePellets => "PL",
            Self::Hail => "GR",
            Self::SmallHail => "GS",
            Self::UnknownPrecipitation => "UP",
            Self::Mist => "BR",
            Self::Fog => "FG",
            Self::Smoke => "FU",
            Self::VolcanicAsh => "VA",
            Self::Dust => "DU",
            Self::Sand => "SA",
            Self::Haze => "HZ",
            Self::Spray => "PY",
            Self::DustWhirls => "PO",
            Self::Squalls => "SQ",
            Self::FunnelCloud => "FC",
            Self::Sandstorm => "SS",
            Self::Duststorm => "DS",
            Self::Thunderstorm => "TS",
            Self::Showers => "SH",
            Self::Freezing => "FZ",
            Self::Shallow => "MI",
            Self::Partial => "PR",
            Self::Patches => "BC",
            Self::Drifting => "DR",
            Self::Blowing => "BL",
            Self::Vicinity => "VC",
        }
    }

    /// The display name of this phenomenon.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::SnowGrains => "snow grains",
            Self::IceCrystals => "ice crystals",
            Self::IcePellets => "ice pellets",
            Self::Hail => "hail",
            Self::SmallHail => "small hail",
            Self::UnknownPrecipitation => "unknown precipitation",
            Self::Mist => "mist",
            Self::Fog => "fog",
            Self::Smoke => "smoke",
            Self::VolcanicAsh => "volcanic ash",
            Self::Dust => "widespread dust",
            Self::Sand => "sand",
            Self::Haze => "haze",
            Self::Spray => "spray",
            Self::DustWhirls => "dust whirls",
            Self::Squalls => "squalls",
            Self::FunnelCloud => "funnel cloud",
            Self::Sandstorm => "sandstorm",
            Self::Duststorm => "duststorm",
            Self::Thunderstorm => "thunderstorm",
            Self::Showers => "showers",
            Self::Freezing => "freezing",
            Self::Shallow => "shallow",
            Self::Partial => "partial",
            Self::Patches => "patches",
            Self::Drifting => "low drifting",
            Self::Blowing => "blowing",
            Self::Vicinity => "in the vicinity",
        }
    }
}

impl fmt::Display for Phenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One weather condition group.
///
/// A group is an optional intensity marker followed by one to
/// [`MAX_PHENOMENA`] two-letter phenomenon codes with no separator, e.g.
/// `+TSRA` for a heavy thunderstorm with rain. The phenomena keep their
/// report order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherCondition {
    pub intensity: Option<Intensity>,
    pub phenomena: Vec<Phenomenon>,
}

impl Field for WeatherCondition {
    const KIND: FieldKind = FieldKind::Weather;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        let intensity = if scanner.accept(b'+') {
            Some(Intensity::Heavy)
        } else if scanner.accept(b'-') {
            Some(Intensity::Light)
        } else {
            None
        };

        let mut phenomena = Vec::new();
        while !scanner.is_empty() {
            // input left over beyond the group's cardinality
            if phenomena.len() == MAX_PHENOMENA {
                return Err(scanner.malformed());
            }

            let code = scanner.take(2)?;
            let phenomenon = Phenomenon::from_code(code).ok_or_else(|| scanner.malformed())?;
            phenomena.push(phenomenon);
        }

        // a bare intensity marker or an empty token is not a group
        if phenomena.is_empty() {
            return Err(scanner.malformed());
        }

        Ok(Self {
            intensity,
            phenomena,
        })
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(intensity) = &self.intensity {
            write!(f, "{intensity} ")?;
        }

        for (i, phenomenon) in self.phenomena.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{phenomenon}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_heavy_thunderstorm_with_rain() {
        let group = WeatherCondition::from_token("+TSRA").expect("group should decode");

        assert_eq!(group.intensity, Some(Intensity::Heavy));
        assert_eq!(
            group.phenomena,
            vec![Phenomenon::Thunderstorm, Phenomenon::Rain]
        );
    }

    #[test]
    fn decodes_light_and_unmarked_groups() {
        let group = WeatherCondition::from_token("-fzdz").expect("group should decode");
        assert_eq!(group.intensity, Some(Intensity::Light));
        assert_eq!(
            group.phenomena,
            vec![Phenomenon::Freezing, Phenomenon::Drizzle]
        );

        let group = WeatherCondition::from_token("BR").expect("group should decode");
        assert_eq!(group.intensity, None);
        assert_eq!(group.phenomena, vec![Phenomenon::Mist]);
    }

    #[test]
    fn keeps_report_order_up_to_the_cap() {
        let group = WeatherCondition::from_token("VCSHRASNPL").expect("group should decode");

        assert_eq!(
            group.phenomena,
            vec![
                Phenomenon::Vicinity,
                Phenomenon::Showers,
                Phenomenon::Rain,
                Phenomenon::Snow,
                Phenomenon::IcePellets,
            ]
        );
    }

    #[test]
    fn rejects_unrecognized_codes() {
        // XX is not in the table, even though YY never gets read
        assert!(WeatherCondition::from_token("XXYY").is_err());
        assert!(WeatherCondition::from_token("RAXX").is_err());
    }

    #[test]
    fn rejects_odd_remainders_and_empty_groups() {
        assert!(WeatherCondition::from_token("RAS").is_err());
        assert!(WeatherCondition::from_token("+").is_err());
        assert!(WeatherCondition::from_token("-").is_err());
        assert!(WeatherCondition::from_token("").is_err());
    }

    #[test]
    fn rejects_input_beyond_five_codes() {
        assert!(WeatherCondition::from_token("VCSHRASNPLDZ").is_err());
    }

    #[test]
    fn every_code_round_trips_through_the_table() {
        let codes = [
            "DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS", "UP", "BR", "FG", "FU", "VA", "DU",
            "SA", "HZ", "PY", "PO", "SQ", "FC", "SS", "DS", "TS", "SH", "FZ", "MI", "PR", "BC",
            "DR", "BL", "VC",
        ];
        assert_eq!(codes.len(), 31);

        for code in codes {
            let phenomenon = Phenomenon::from_code(code).expect("code should be in the table");
            assert_eq!(phenomenon.code(), code);
            assert!(!phenomenon.name().is_empty());
        }
    }

    #[test]
    fn renders_intensity_word_and_names() {
        let group = WeatherCondition::from_token("+TSRA").expect("group should decode");
        assert_eq!(group.to_string(), "heavy thunderstorm, rain");

        let group = WeatherCondition::from_token("BR").expect("group should decode");
        assert_eq!(group.to_string(), "mist");
    }
}
