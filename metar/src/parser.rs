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

//! Report line decoding.
//!
//! A report is one or more newline-separated lines, each a sequence of
//! whitespace-delimited field tokens. The decoding flow is:
//! **Line → Tokens → shape classification → field decoders**.
//!
//! Classification is context-free: each token is matched on its format
//! alone and handed to the field that owns the format:
//!
//! - `"051253Z"` → observation time (6 digits and a `Z`)
//! - `"05004KT"` → wind (ends in `KT`)
//! - `"10SM"` → visibility (digits and `SM`)
//! - `"A3042"` → altimeter (`A` and 4 digits)
//! - `"SCT025"` → sky condition (coverage keyword)
//! - `"05/03"` → temperature/dewpoint (leading digit or `M`)
//! - `"+TSRA"` → weather group (everything else; the code table rejects
//!   what the format does not cover)

use log::{debug, trace, warn};

use crate::error::ParseError;
use crate::field::Field;
use crate::fields::{
    Altimeter, Coverage, ObservationTime, SkyCondition, Temperature, Visibility, WeatherCondition,
    Wind,
};
use crate::report::{Reading, Report};
use crate::Error;

impl Report {
    /// Decodes one or more newline-separated report lines.
    ///
    /// Each non-blank line becomes one [`Reading`]; blank lines are
    /// skipped. Decoding stops at the first malformed token.
    ///
    /// # Errors
    ///
    /// Returns the first token error together with the 1-based line it
    /// occurred on.
    ///
    /// # Examples
    ///
    /// ```
    /// use metar::Report;
    ///
    /// # fn main() -> Result<(), metar::ParseError> {
    /// let report = Report::decode("KUNV 051253Z 05004KT 10SM SKC 05/03 A3042")?;
    /// assert_eq!(report.count(), 1);
    /// assert_eq!(report.readings()[0].station, "KUNV");
    /// # Ok(())
    /// # }
    /// ```
    pub fn decode(input: &str) -> Result<Self, ParseError> {
        let mut report = Self::new();

        for (index, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let number = index + 1;
            debug!("decoding report line {number}: {line:?}");

            decode_line(line, report.begin_reading()).map_err(|source| {
                warn!("line {number}: {source}");
                ParseError::new(number, source)
            })?;
        }

        debug!("report decoded: {} reading(s)", report.count());
        Ok(report)
    }
}

fn decode_line(line: &str, reading: &mut Reading) -> Result<(), Error> {
    for token in line.split_whitespace() {
        // report-type markers ahead of the station identifier
        if reading.station.is_empty() && matches!(token, "METAR" | "SPECI") {
            continue;
        }

        if reading.station.is_empty() {
            trace!("station: {token}");
            reading.station = token.to_string();
            continue;
        }

        match token {
            "COR" => reading.corrected = true,
            "AUTO" => (),
            _ => decode_token(token, reading)?,
        }
    }

    Ok(())
}

fn decode_token(token: &str, reading: &mut Reading) -> Result<(), Error> {
    let bytes = token.as_bytes();

    if is_observation_time(bytes) {
        trace!("observation time: {token}");
        reading.time = Some(ObservationTime::from_token(token)?);
    } else if is_wind(bytes) {
        trace!("wind: {token}");
        reading.wind = Some(Wind::from_token(token)?);
    } else if is_visibility(bytes) {
        trace!("visibility: {token}");
        reading.visibility = Some(Visibility::from_token(token)?);
    } else if is_altimeter(bytes) {
        trace!("altimeter: {token}");
        reading.altimeter = Some(Altimeter::from_token(token)?);
    } else if is_sky_condition(token) {
        trace!("sky condition: {token}");
        reading.sky.push(SkyCondition::from_token(token)?);
    } else if is_temperature(bytes) {
        trace!("temperature/dewpoint: {token}");
        reading.temperature = Some(Temperature::from_token(token)?);
    } else {
        // everything else speaks the present-weather vocabulary; the
        // code table rejects what the grammar does not know
        trace!("weather: {token}");
        reading.weather.push(WeatherCondition::from_token(token)?);
    }

    Ok(())
}

fn is_observation_time(bytes: &[u8]) -> bool {
    bytes.len() == 7
        && bytes[..6].iter().all(u8::is_ascii_digit)
        && bytes[6].eq_ignore_ascii_case(&b'Z')
}

fn is_wind(bytes: &[u8]) -> bool {
    bytes.first().is_some_and(u8::is_ascii_digit)
        && bytes.len() > 2
        && bytes[bytes.len() - 2..].eq_ignore_ascii_case(b"KT")
}

fn is_visibility(bytes: &[u8]) -> bool {
    bytes.first().is_some_and(u8::is_ascii_digit)
        && bytes.len() > 2
        && bytes[bytes.len() - 2..].eq_ignore_ascii_case(b"SM")
}

fn is_altimeter(bytes: &[u8]) -> bool {
    bytes.first().is_some_and(|byte| byte.eq_ignore_ascii_case(&b'A'))
        && bytes.len() > 1
        && bytes[1].is_ascii_digit()
}

fn is_sky_condition(token: &str) -> bool {
    token
        .get(..3)
        .is_some_and(|code| Coverage::from_code(code).is_some())
}

fn is_temperature(bytes: &[u8]) -> bool {
    match bytes.first() {
        Some(byte) if byte.is_ascii_digit() => true,
        Some(byte) if byte.eq_ignore_ascii_case(&b'M') => {
            bytes.get(1).is_some_and(u8::is_ascii_digit)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldKind;
    use crate::fields::{Intensity, Phenomenon};

    const SAMPLE: &str = "KUNV 051253Z 05004KT 10SM SKC 05/03 A3042";

    #[test]
    fn decodes_the_sample_line() {
        let report = Report::decode(SAMPLE).expect("report should decode");
        assert_eq!(report.count(), 1);

        let reading = &report.readings()[0];
        assert_eq!(reading.station, "KUNV");
        assert!(!reading.corrected);

        let wind = reading.wind.expect("wind should be set");
        assert_eq!(wind.direction, 50);
        assert_eq!(wind.speed, 4);
        assert_eq!(wind.gust, None);

        assert_eq!(reading.visibility.expect("visibility should be set").distance, 10);

        assert_eq!(reading.sky.len(), 1);
        assert_eq!(reading.sky[0].coverage, Coverage::Clear);
        assert_eq!(reading.sky[0].base, 0);

        let temp = reading.temperature.expect("temperature should be set");
        assert_eq!(temp.temperature, 5);
        assert_eq!(temp.temperature_fahrenheit(), 41);
        assert_eq!(temp.dewpoint, 3);
        assert_eq!(temp.dewpoint_fahrenheit(), 37);

        assert_eq!(reading.altimeter.expect("altimeter should be set").in_hg, 30.42);

        assert!(reading.weather.is_empty());
        assert!(reading.time.is_some());
    }

    #[test]
    fn decodes_weather_groups_in_order() {
        let report =
            Report::decode("KPIT 201955Z 22015G25KT 3SM -RA BR OVC010 18/16 A2992")
                .expect("report should decode");
        let reading = &report.readings()[0];

        assert_eq!(reading.weather.len(), 2);
        assert_eq!(reading.weather[0].intensity, Some(Intensity::Light));
        assert_eq!(reading.weather[0].phenomena, vec![Phenomenon::Rain]);
        assert_eq!(reading.weather[1].intensity, None);
        assert_eq!(reading.weather[1].phenomena, vec![Phenomenon::Mist]);

        assert_eq!(reading.wind.expect("wind should be set").gust, Some(25));
    }

    #[test]
    fn marks_corrected_reports() {
        let report = Report::decode("KUNV 051253Z COR 05004KT").expect("report should decode");
        assert!(report.readings()[0].corrected);
    }

    #[test]
    fn skips_report_type_markers() {
        let report = Report::decode("METAR KUNV 051253Z AUTO 05004KT")
            .expect("report should decode");

        let reading = &report.readings()[0];
        assert_eq!(reading.station, "KUNV");
        assert!(reading.wind.is_some());
    }

    #[test]
    fn decodes_one_reading_per_line() {
        let input = "KUNV 051253Z 05004KT 10SM SKC 05/03 A3042\n\
                     KPIT 051955Z 22015KT 3SM BKN020 18/16 A2992";
        let report = Report::decode(input).expect("report should decode");

        assert_eq!(report.count(), 2);
        assert_eq!(report.readings()[0].station, "KUNV");
        assert_eq!(report.readings()[1].station, "KPIT");
    }

    #[test]
    fn skips_blank_lines() {
        let report = Report::decode("\nKUNV 051253Z\n\n").expect("report should decode");
        assert_eq!(report.count(), 1);
    }

    #[test]
    fn reports_the_failing_line() {
        let input = "KUNV 051253Z 05004KT\nKPIT 051955Z XXYY";
        let err = Report::decode(input).expect_err("report should not decode");

        assert_eq!(err.line(), 2);
        assert_eq!(
            err.error(),
            &Error::MalformedToken {
                field: FieldKind::Weather,
                text: "XXYY".to_string(),
            }
        );
    }

    #[test]
    fn unrecognized_vocabulary_is_malformed() {
        assert!(Report::decode("KUNV XXYY").is_err());
        assert!(Report::decode("KUNV 1234X").is_err());
    }
}
