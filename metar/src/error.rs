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

use std::error;
use std::fmt;

/// The report field a token is decoded as.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FieldKind {
    Station,
    ObservationTime,
    Wind,
    Visibility,
    SkyCondition,
    Weather,
    Temperature,
    Altimeter,
}

impl FieldKind {
    /// The token shape this field expects.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Station => "a station identifier",
            Self::ObservationTime => "ddhhmm followed by Z",
            Self::Wind => "dddssKT or dddssGggKT",
            Self::Visibility => "a whole number followed by SM",
            Self::SkyCondition => "SKC or CLR, or FEW, SCT, BKN or OVC with a 3-digit base",
            Self::Weather => "an optional + or - followed by up to 5 phenomenon codes",
            Self::Temperature => "two signed 2-digit Celsius values",
            Self::Altimeter => "A followed by 4 digits",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Station => "station",
            Self::ObservationTime => "observation time",
            Self::Wind => "wind",
            Self::Visibility => "visibility",
            Self::SkyCondition => "sky condition",
            Self::Weather => "weather",
            Self::Temperature => "temperature/dewpoint",
            Self::Altimeter => "altimeter",
        };
        write!(f, "{name}")
    }
}

/// Error decoding a single report token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The token does not match the shape or vocabulary of the field it
    /// was decoded as.
    MalformedToken { field: FieldKind, text: String },
}

impl Error {
    pub(crate) fn malformed(field: FieldKind, text: &str) -> Self {
        Self::MalformedToken {
            field,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken { field, text } => {
                write!(f, "{field} is \"{text}\" but should be {}", field.expected())
            }
        }
    }
}

impl error::Error for Error {}

/// Error decoding a report, with the line the decode failed on.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    line: usize,
    source: Error,
}

impl ParseError {
    pub(crate) fn new(line: usize, source: Error) -> Self {
        Self { line, source }
    }

    /// The 1-based report line the decode failed on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The token error the decode failed with.
    pub fn error(&self) -> &Error {
        &self.source
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.source)
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}
