/*
 * Copyright (C) 2026 taylor.fish <contact@taylor.fish>
 *
 * This file is part of properuri.
 *
 * properuri is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * properuri is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with properuri. If not, see <https://www.gnu.org/licenses/>.
 */

//! Converting logical characters to UTF-8.

use super::unit::LogicalChar;

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::iter::Take;

/// The UTF-8 encoding of one logical character: between one and four bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Utf8Sequence {
    bytes: [u8; 4],
    len: u8,
}

impl Utf8Sequence {
    fn from_array<const N: usize>(array: [u8; N]) -> Self {
        let mut bytes = [0; 4];
        bytes[..N].copy_from_slice(&array);
        Self {
            bytes,
            len: N as u8,
        }
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

impl Debug for Utf8Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_tuple("Utf8Sequence").field(&self.as_bytes()).finish()
    }
}

impl IntoIterator for Utf8Sequence {
    type Item = u8;
    type IntoIter = Take<array::IntoIter<u8, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.bytes).take(usize::from(self.len))
    }
}

/// Encodes `ch` as UTF-8.
///
/// Pairs always produce four bytes, computed from
/// [`LogicalChar::code_point`], so malformed surrogate sequences still yield
/// a four-byte sequence rather than an error.
pub fn to_utf8_bytes(ch: LogicalChar) -> Utf8Sequence {
    let c = ch.code_point();
    match ch {
        LogicalChar::Single(_) if c < 0x80 => Utf8Sequence::from_array([c as u8]),
        LogicalChar::Single(_) if c < 0x800 => Utf8Sequence::from_array([
            (0xc0 | (c >> 6)) as u8,
            (0x80 | (c & 0x3f)) as u8,
        ]),
        LogicalChar::Single(_) => Utf8Sequence::from_array([
            (0xe0 | (c >> 12)) as u8,
            (0x80 | ((c >> 6) & 0x3f)) as u8,
            (0x80 | (c & 0x3f)) as u8,
        ]),
        LogicalChar::Pair(..) => Utf8Sequence::from_array([
            (0xf0 | (c >> 18)) as u8,
            (0x80 | ((c >> 12) & 0x3f)) as u8,
            (0x80 | ((c >> 6) & 0x3f)) as u8,
            (0x80 | (c & 0x3f)) as u8,
        ]),
    }
}
