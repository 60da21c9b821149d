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

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Utc};

use crate::error::FieldKind;
use crate::field::{Field, Scanner};
use crate::Error;

/// The observation time of a reading.
///
/// A report encodes its observation time as day-of-month, hour and minute
/// in UTC with a trailing `Z`, e.g. `051253Z`. Month and year are not part
/// of the token; they are resolved against the local wall clock at decode
/// time. A parsed day smaller than the current day-of-month refers to a
/// month that has begun since the report was issued and advances the
/// resolved month by one, December rolling into January of the next year.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationTime {
    /// The observation time in UTC.
    pub zulu: DateTime<Utc>,
    /// The observation time shifted by the local UTC offset captured when
    /// the token was decoded.
    pub local: DateTime<FixedOffset>,
}

impl ObservationTime {
    /// Resolves day, hour and minute against the wall clock `now`.
    fn resolve(day: u32, hour: u32, minute: u32, now: DateTime<Local>) -> Option<Self> {
        let (mut year, mut month) = (now.year(), now.month());

        if day != now.day() && day < now.day() {
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        let zulu = Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()?;
        let local = zulu.with_timezone(now.offset());

        Some(Self { zulu, local })
    }
}

impl Field for ObservationTime {
    const KIND: FieldKind = FieldKind::ObservationTime;

    fn from_token(token: &str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(Self::KIND, token);

        let day = scanner.digits(2)?;
        let hour = scanner.digits(2)?;
        let minute = scanner.digits(2)?;
        scanner.literal("Z")?;
        scanner.finish()?;

        // Day, hour or minute values that don't form a real calendar date
        // surface here as a decode error.
        Self::resolve(day, hour, minute, Local::now())
            .ok_or_else(|| Error::malformed(Self::KIND, token))
    }
}
