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

use crate::error::{Error, FieldKind};

/// A report field type decoded from a single token.
///
/// This trait is implemented by all METAR fields. Each field is decoded
/// [`from_token`](Field::from_token) and owns its value; the raw token is
/// not kept.
pub trait Field: Sized {
    /// The field kind reported on decode errors.
    const KIND: FieldKind;

    /// Decode this field from a raw token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not match the field's shape or
    /// vocabulary.
    fn from_token(token: &str) -> Result<Self, Error>;
}

/////////////////////////////////////////////////////////////////////////////
// Scanner
/////////////////////////////////////////////////////////////////////////////

/// Cursor over a token's bytes.
///
/// Field decoders read fixed-width digit runs, markers and literals from
/// the cursor. Any mismatch fails with the field's kind and the whole
/// token, so a decoder never has to assemble its own error.
pub(crate) struct Scanner<'a> {
    field: FieldKind,
    token: &'a str,
    index: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(field: FieldKind, token: &'a str) -> Self {
        Self {
            field,
            token,
            index: 0,
        }
    }

    /// The error for the token under the cursor.
    pub fn malformed(&self) -> Error {
        Error::malformed(self.field, self.token)
    }

    /// The next byte, without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.token.as_bytes().get(self.index).copied()
    }

    /// Returns `true` if the whole token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.index >= self.token.len()
    }

    /// Reads exactly `n` ASCII digits as an unsigned number.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `n` bytes remain or any of them is
    /// not a digit.
    pub fn digits(&mut self, n: usize) -> Result<u32, Error> {
        let bytes = self
            .token
            .as_bytes()
            .get(self.index..self.index + n)
            .ok_or_else(|| self.malformed())?;

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(self.malformed());
        }

        self.index += n;
        Ok(bytes
            .iter()
            .fold(0, |value, byte| value * 10 + u32::from(byte & 0x0F)))
    }

    /// Reads one or more ASCII digits as an unsigned number.
    ///
    /// # Errors
    ///
    /// Returns an error if the next byte is not a digit or the run does
    /// not fit a `u32`.
    pub fn number(&mut self) -> Result<u32, Error> {
        let start = self.index;
        while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
            self.index += 1;
        }

        if self.index == start || self.index - start > 9 {
            return Err(self.malformed());
        }

        Ok(self.token.as_bytes()[start..self.index]
            .iter()
            .fold(0, |value, byte| value * 10 + u32::from(byte & 0x0F)))
    }

    /// Consumes the marker if the next byte matches it (case-insensitive).
    pub fn accept(&mut self, marker: u8) -> bool {
        if self.peek().is_some_and(|byte| byte.eq_ignore_ascii_case(&marker)) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the literal (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not continue with the literal.
    pub fn literal(&mut self, literal: &str) -> Result<(), Error> {
        let bytes = self
            .token
            .as_bytes()
            .get(self.index..self.index + literal.len())
            .ok_or_else(|| self.malformed())?;

        if bytes.eq_ignore_ascii_case(literal.as_bytes()) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    /// Reads the next `n` bytes as a string slice.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `n` bytes remain or the slice would
    /// split a multi-byte character.
    pub fn take(&mut self, n: usize) -> Result<&'a str, Error> {
        let s = self
            .token
            .get(self.index..self.index + n)
            .ok_or_else(|| self.malformed())?;
        self.index += n;
        Ok(s)
    }

    /// Skips one byte, whatever it is.
    pub fn skip(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    /// Fails unless the whole token was consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if unconsumed input remains.
    pub fn finish(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
