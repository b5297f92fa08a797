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

//! Splitting UTF-16 code units into logical characters.

use core::iter::{Fuse, FusedIterator};

const LOW_SURROGATES: core::ops::Range<u16> = 0xdc00..0xe000;

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    LOW_SURROGATES.contains(&unit)
}

/// One code point as read from UTF-16 input, spanning one or two code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalChar {
    /// A code unit outside the surrogate range.
    Single(char),
    /// A code unit in the surrogate range, joined with the unit that followed
    /// it, or [`None`] if the input ended.
    ///
    /// Any surrogate starts a pair, high or low, and the following unit is
    /// taken whatever its value. Use [`Self::to_char`] to check whether the
    /// two units actually form a valid surrogate pair.
    Pair(u16, Option<u16>),
}

impl LogicalChar {
    fn from_units(first: u16, next: impl FnOnce() -> Option<u16>) -> Self {
        // `from_u32` fails exactly for the surrogate range.
        char::from_u32(u32::from(first))
            .map_or_else(|| Self::Pair(first, next()), Self::Single)
    }

    /// The number of code units this character was read from.
    pub fn len_utf16(&self) -> usize {
        match self {
            Self::Single(_) | Self::Pair(_, None) => 1,
            Self::Pair(_, Some(_)) => 2,
        }
    }

    /// The code point this character stands for.
    ///
    /// Pairs are combined from the low ten bits of each unit without checking
    /// that they are a high and a low surrogate. A missing second unit counts
    /// as zero.
    pub fn code_point(&self) -> u32 {
        match *self {
            Self::Single(c) => u32::from(c),
            Self::Pair(high, low) => {
                let high = u32::from(high & 0x3ff);
                let low = u32::from(low.unwrap_or(0) & 0x3ff);
                0x10000 + ((high << 10) | low)
            }
        }
    }

    /// Converts this logical character to a [`char`], if it is well-formed:
    /// either a single unit, or a high surrogate followed by a low one.
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Single(c) => Some(c),
            Self::Pair(high, Some(low))
                if !is_low_surrogate(high) && is_low_surrogate(low) =>
            {
                char::from_u32(self.code_point())
            }
            Self::Pair(..) => None,
        }
    }
}

impl From<char> for LogicalChar {
    fn from(c: char) -> Self {
        let mut units = [0; 2];
        match *c.encode_utf16(&mut units) {
            [high, low] => Self::Pair(high, Some(low)),
            _ => Self::Single(c),
        }
    }
}

/// Reads the logical character starting at `cursor` in `units`.
///
/// Returns the character together with the number of code units it spans,
/// which is how far the cursor should advance. Returns [`None`] once
/// `cursor` reaches the end of `units`.
pub fn logical_char_at(
    units: &[u16],
    cursor: usize,
) -> Option<(LogicalChar, usize)> {
    let first = *units.get(cursor)?;
    let ch = LogicalChar::from_units(first, || units.get(cursor + 1).copied());
    Some((ch, ch.len_utf16()))
}

/// An iterator over the logical characters of a sequence of code units,
/// paired with the offset (in code units) where each one starts.
///
/// Created by [`logical_char_indices`].
#[derive(Clone, Debug)]
pub struct LogicalCharIndices<I> {
    units: Fuse<I>,
    offset: usize,
}

impl<I: Iterator> LogicalCharIndices<I> {
    pub(crate) fn new(units: I) -> Self {
        Self {
            units: units.fuse(),
            offset: 0,
        }
    }
}

impl<I> LogicalCharIndices<I> {
    /// The offset of the next logical character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn units(&self) -> &Fuse<I> {
        &self.units
    }
}

impl<I> Iterator for LogicalCharIndices<I>
where
    I: Iterator<Item = u16>,
{
    type Item = (usize, LogicalChar);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.units.next()?;
        let units = &mut self.units;
        let ch = LogicalChar::from_units(first, || units.next());
        let offset = self.offset;
        self.offset += ch.len_utf16();
        Some((offset, ch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.units.size_hint();
        // Every logical character takes at most two units.
        (lower / 2 + lower % 2, upper)
    }
}

impl<I: Iterator<Item = u16>> FusedIterator for LogicalCharIndices<I> {}

/// Splits `units` into logical characters.
pub fn logical_char_indices<I>(units: I) -> LogicalCharIndices<I::IntoIter>
where
    I: IntoIterator<Item = u16>,
{
    LogicalCharIndices::new(units.into_iter())
}
