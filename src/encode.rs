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

//! Functions and types for percent-encoding text.

use super::exception::{is_exception, ExceptionSet};
#[cfg(feature = "alloc")]
use super::iter::ErrAdapter;
use super::iter::Flatten;
#[cfg(feature = "alloc")]
use super::unit::is_low_surrogate;
use super::unit::{logical_char_indices, LogicalChar, LogicalCharIndices};
use super::utf8::to_utf8_bytes;

use core::array;
use core::iter::{FusedIterator, Take};

#[cfg(feature = "alloc")]
use alloc::string::String;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The longest output for one logical character: four `%XX` triplets.
const MAX_ENCODED_LEN: usize = 12;

/// A malformed surrogate sequence, found by the strict encoding functions.
///
/// Offsets count UTF-16 code units from the start of the input.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A high surrogate was followed by a unit that is not a low surrogate.
    #[error(
        "unpaired high surrogate {unit:#06x} at offset {offset} \
         (followed by {next:#06x})"
    )]
    UnpairedHighSurrogate { offset: usize, unit: u16, next: u16 },
    /// The input ended right after a high surrogate.
    #[error("high surrogate {unit:#06x} at offset {offset} ends the input")]
    TruncatedSurrogate { offset: usize, unit: u16 },
    /// A low surrogate appeared without a high surrogate before it.
    #[error("lone low surrogate {unit:#06x} at offset {offset}")]
    LoneLowSurrogate { offset: usize, unit: u16 },
}

/// Alias of <code>[Result]\<T, [EncodeError]></code>.
pub type EncodeResult<T> = Result<T, EncodeError>;

#[cfg(feature = "alloc")]
fn check_surrogates(
    offset: usize,
    ch: LogicalChar,
) -> EncodeResult<LogicalChar> {
    match ch {
        LogicalChar::Single(_) => Ok(ch),
        LogicalChar::Pair(unit, _) if is_low_surrogate(unit) => {
            Err(EncodeError::LoneLowSurrogate {
                offset,
                unit,
            })
        }
        LogicalChar::Pair(unit, None) => Err(EncodeError::TruncatedSurrogate {
            offset,
            unit,
        }),
        LogicalChar::Pair(unit, Some(next)) if !is_low_surrogate(next) => {
            Err(EncodeError::UnpairedHighSurrogate {
                offset,
                unit,
                next,
            })
        }
        LogicalChar::Pair(..) => Ok(ch),
    }
}

type EncodedChars = Take<array::IntoIter<char, MAX_ENCODED_LEN>>;

fn encode_char(
    ch: LogicalChar,
    exceptions: &ExceptionSet<'_>,
) -> EncodedChars {
    let mut out = ['\0'; MAX_ENCODED_LEN];
    let len = match ch {
        LogicalChar::Single(c) if is_exception(ch, exceptions) => {
            out[0] = c;
            1
        }
        _ => to_utf8_bytes(ch).into_iter().enumerate().fold(0, |_, (i, b)| {
            out[i * 3] = '%';
            out[i * 3 + 1] = char::from(HEX_DIGITS[usize::from(b >> 4)]);
            out[i * 3 + 2] = char::from(HEX_DIGITS[usize::from(b & 0xf)]);
            i * 3 + 3
        }),
    };
    IntoIterator::into_iter(out).take(len)
}

struct CharsToEncoded<'a, I> {
    iter: LogicalCharIndices<I>,
    exceptions: ExceptionSet<'a>,
}

impl<I> Iterator for CharsToEncoded<'_, I>
where
    I: Iterator<Item = u16>,
{
    type Item = EncodedChars;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, ch) = self.iter.next()?;
        if ch.to_char().is_none() {
            log::debug!(
                "encoding malformed surrogate sequence at offset {}: {:?}",
                offset,
                ch,
            );
        }
        Some(encode_char(ch, &self.exceptions))
    }
}

impl<I: Iterator<Item = u16>> FusedIterator for CharsToEncoded<'_, I> {}

/// An iterator over the percent-encoded form of a sequence of UTF-16 code
/// units.
///
/// Created by [`encode_to_chars`]. Malformed surrogate sequences are encoded
/// as if they were valid pairs; see [`LogicalChar::code_point`].
pub struct CharEncoder<'a, I>(Flatten<CharsToEncoded<'a, I>, EncodedChars>);

impl<'a, I: Iterator<Item = u16>> CharEncoder<'a, I> {
    pub(crate) fn new(units: I, exceptions: &ExceptionSet<'a>) -> Self {
        Self(Flatten::new(CharsToEncoded {
            iter: logical_char_indices(units),
            exceptions: *exceptions,
        }))
    }
}

impl<I> Iterator for CharEncoder<'_, I>
where
    I: Iterator<Item = u16>,
{
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.0.pending().map_or(0, ExactSizeIterator::len);
        let (lower, upper) = self.0.outer().iter.units().size_hint();
        (
            // Each logical character spans at most two units and produces at
            // least one char.
            pending.saturating_add(lower / 2 + lower % 2),
            upper
                // A single unit produces at most three `%XX` triplets, except
                // for a trailing high surrogate, which produces four.
                .and_then(|n| n.checked_mul(9))
                .and_then(|n| n.checked_add(3))
                .and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<I: Iterator<Item = u16>> FusedIterator for CharEncoder<'_, I> {}

/// Percent-encodes UTF-16 code units, leaving characters in `exceptions`
/// unescaped.
///
/// This function never fails: surrogates are always paired with the unit
/// that follows them, whether or not that unit is a low surrogate.
pub fn encode_to_chars<'a, I>(
    units: I,
    exceptions: &ExceptionSet<'a>,
) -> CharEncoder<'a, I::IntoIter>
where
    I: IntoIterator<Item = u16>,
{
    CharEncoder::new(units.into_iter(), exceptions)
}

/// Percent-encodes UTF-16 code units into a [`String`].
///
/// See [`encode_to_chars`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string<I>(units: I, exceptions: &ExceptionSet<'_>) -> String
where
    I: IntoIterator<Item = u16>,
{
    encode_to_chars(units, exceptions).collect()
}

/// Percent-encodes `text`, leaving characters in `exceptions` unescaped.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_str(text: &str, exceptions: &ExceptionSet<'_>) -> String {
    encode_to_string(text.encode_utf16(), exceptions)
}

/// Percent-encodes UTF-16 code units into a [`String`], failing on the first
/// malformed surrogate sequence.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn try_encode_to_string<I>(
    units: I,
    exceptions: &ExceptionSet<'_>,
) -> EncodeResult<String>
where
    I: IntoIterator<Item = u16>,
{
    let mut chars = ErrAdapter::new(
        logical_char_indices(units)
            .map(|(offset, ch)| check_surrogates(offset, ch)),
    );
    let encoded: String =
        Flatten::new((&mut chars).map(|ch| encode_char(ch, exceptions)))
            .collect();
    chars.take_err().map_or(Ok(encoded), Err)
}


#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::exception::{URI, URI_COMPONENT};

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn hex_is_uppercase_and_padded() {
        assert_eq!(encode_str("\r", &URI), "%0D");
        assert_eq!(encode_str("\u{ff}", &URI), "%C3%BF");
        assert_eq!(encode_str(" ", &URI_COMPONENT), "%20");
    }

    #[test]
    fn strict_agrees_with_lenient_on_valid_input() {
        let text = "https://example.com/\u{e4}\u{1f600}?q=a b#\u{29ed}";
        for set in [&URI, &URI_COMPONENT] {
            assert_eq!(
                try_encode_to_string(utf16(text), set),
                Ok(encode_str(text, set)),
            );
        }
    }

    #[test]
    fn strict_rejects_malformed_surrogates() {
        assert_eq!(
            try_encode_to_string([0x61, 0xd83d, 0x41], &URI),
            Err(EncodeError::UnpairedHighSurrogate {
                offset: 1,
                unit: 0xd83d,
                next: 0x41,
            }),
        );
        assert_eq!(
            try_encode_to_string([0x61, 0x62, 0xd83d], &URI),
            Err(EncodeError::TruncatedSurrogate {
                offset: 2,
                unit: 0xd83d,
            }),
        );
        assert_eq!(
            try_encode_to_string([0xd83d, 0xde00, 0xde00, 0x41], &URI),
            Err(EncodeError::LoneLowSurrogate {
                offset: 2,
                unit: 0xde00,
            }),
        );
    }

    #[test]
    fn size_hint_bounds_output() {
        for text in ["", "a", "a b", "\u{29ed}\u{29ed}", "\u{1f600}x"] {
            let total = encode_to_chars(utf16(text), &URI).count();
            let mut encoder = encode_to_chars(utf16(text), &URI);
            for consumed in 0..=total {
                let (lower, upper) = encoder.size_hint();
                let remaining = total - consumed;
                assert!(lower <= remaining, "{:?}", text);
                assert!(upper.map_or(true, |n| remaining <= n), "{:?}", text);
                encoder.next();
            }
        }
        let encoder = encode_to_chars([0xd83d], &URI);
        assert!(encoder.size_hint().1.map_or(true, |n| n >= 12));
    }

    #[test]
    fn display_of_errors() {
        let err = EncodeError::TruncatedSurrogate {
            offset: 3,
            unit: 0xd83d,
        };
        assert_eq!(
            err.to_string(),
            "high surrogate 0xd83d at offset 3 ends the input",
        );
    }
}
