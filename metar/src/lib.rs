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

//! METAR routine weather report decoder.
//!
//! This crate decodes METAR reports into typed [`Reading`]s collected in a
//! [`Report`], and renders them back to human-readable text. Every field of
//! a report line — observation time, wind, visibility, sky condition,
//! weather, temperature and altimeter — is a type in [`fields`] that
//! decodes itself from a single raw token and knows how to display itself.
//!
//! # Examples
//!
//! Decode a report and read its typed fields:
//!
//! ```
//! use metar::Report;
//!
//! # fn main() -> Result<(), metar::ParseError> {
//! let report = Report::decode("KUNV 051253Z 05004KT 10SM SKC 05/03 A3042")?;
//! let reading = &report.readings()[0];
//!
//! assert_eq!(reading.station, "KUNV");
//!
//! let wind = reading.wind.expect("report carries wind");
//! println!("{} blows {}", reading.station, wind);
//! # Ok(())
//! # }
//! ```
//!
//! Fields can also be decoded on their own, e.g. from a tokenizer that
//! splits report lines itself:
//!
//! ```
//! use metar::fields::Wind;
//! use metar::Field;
//!
//! # fn main() -> Result<(), metar::Error> {
//! let wind = Wind::from_token("21018G26KT")?;
//! assert_eq!(wind.gust, Some(26));
//! # Ok(())
//! # }
//! ```

mod error;
mod field;
mod parser;
mod report;

pub mod fields;

pub use error::{Error, FieldKind, ParseError};
pub use field::Field;
pub use report::{Reading, Report};
