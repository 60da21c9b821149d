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

use crate::fields::{
    Altimeter, ObservationTime, SkyCondition, Temperature, Visibility, WeatherCondition, Wind,
};

/// One decoded report line.
///
/// A reading is created by [`Report::begin_reading`] and mutated field by
/// field while its report line is decoded; fields the line does not carry
/// stay absent. Once the line ends the reading is only read.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// The reporting station's identifier, e.g. `KUNV`.
    pub station: String,
    pub time: Option<ObservationTime>,
    /// Set when the report line carries a correction marker.
    pub corrected: bool,
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    /// Weather condition groups in report order.
    pub weather: Vec<WeatherCondition>,
    /// Sky coverage layers in report order.
    pub sky: Vec<SkyCondition>,
    pub temperature: Option<Temperature>,
    pub altimeter: Option<Altimeter>,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.corrected {
            writeln!(f, "Station: {} (corrected)", self.station)?;
        } else {
            writeln!(f, "Station: {}", self.station)?;
        }

        if let Some(time) = &self.time {
            writeln!(f, "Zulu time: {}", time.zulu.format("%c"))?;
            writeln!(f, "Local time: {}", time.local.format("%c"))?;
        }

        if let Some(wind) = &self.wind {
            writeln!(f, "Wind: {wind}")?;
        }

        if let Some(visibility) = &self.visibility {
            writeln!(f, "Visibility: {visibility}")?;
        }

        if !self.weather.is_empty() {
            write!(f, "Weather: ")?;
            for (i, group) in self.weather.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{group}")?;
            }
            writeln!(f)?;
        }

        for layer in &self.sky {
            writeln!(f, "Sky: {layer}")?;
        }

        if let Some(temperature) = &self.temperature {
            writeln!(f, "Temperature: {temperature}")?;
        }

        if let Some(altimeter) = &self.altimeter {
            writeln!(f, "Altimeter: {altimeter}")?;
        }

        Ok(())
    }
}

/// An ordered collection of readings decoded from one report.
///
/// Readings are appended while the report is decoded and owned by the
/// report for their whole lifetime. A completed report is not mutated
/// again; there is no removal.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    readings: Vec<Reading>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new reading, appended at the end of the report.
    ///
    /// The returned handle is only meant to live for the report line
    /// being decoded.
    pub fn begin_reading(&mut self) -> &mut Reading {
        self.readings.push(Reading::default());
        self.readings
            .last_mut()
            .expect("reading was just appended")
    }

    /// The number of readings in the report.
    pub fn count(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if the report holds no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The readings in decode order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for reading in self {
            write!(f, "{reading}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Coverage;

    #[test]
    fn begin_reading_appends_in_order() {
        let mut report = Report::new();
        assert!(report.is_empty());

        report.begin_reading().station = "KUNV".to_string();
        report.begin_reading().station = "EDDH".to_string();

        assert_eq!(report.count(), 2);
        assert_eq!(report.readings()[0].station, "KUNV");
        assert_eq!(report.readings()[1].station, "EDDH");
    }

    #[test]
    fn renders_station_verbatim() {
        let mut report = Report::new();
        report.begin_reading().station = "KUNV".to_string();

        let text = report.to_string();
        assert!(text.contains("KUNV"));
    }

    #[test]
    fn renders_corrected_marker() {
        let mut report = Report::new();
        let reading = report.begin_reading();
        reading.station = "KUNV".to_string();
        reading.corrected = true;

        assert!(report.to_string().contains("KUNV (corrected)"));
    }

    #[test]
    fn renders_each_sky_layer_on_its_own_line() {
        let mut report = Report::new();
        let reading = report.begin_reading();
        reading.station = "KUNV".to_string();
        reading.sky.push(SkyCondition {
            coverage: Coverage::Scattered,
            base: 2500,
        });
        reading.sky.push(SkyCondition {
            coverage: Coverage::Broken,
            base: 5000,
        });

        let text = report.to_string();
        assert!(text.contains("Sky: scattered at 2500 ft\n"));
        assert!(text.contains("Sky: broken at 5000 ft\n"));
    }

    #[test]
    fn report_text_concatenates_readings() {
        let mut report = Report::new();
        report.begin_reading().station = "KUNV".to_string();
        report.begin_reading().station = "EDDH".to_string();

        let text = report.to_string();
        let kunv = text.find("KUNV").expect("first station should render");
        let eddh = text.find("EDDH").expect("second station should render");
        assert!(kunv < eddh);
    }
}
