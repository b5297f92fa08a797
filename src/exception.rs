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

//! Sets of characters that are passed through without percent-encoding.

use super::unit::LogicalChar;

/// A single pass-through rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exception {
    /// Matches exactly this character.
    Literal(char),
    /// Matches any character in this inclusive range.
    Range(char, char),
}

impl Exception {
    /// Checks whether `ch` matches this rule.
    ///
    /// Only characters read from a single code unit can match. Surrogate
    /// pairs never do, even if the rule covers their code point.
    pub fn matches(&self, ch: LogicalChar) -> bool {
        let c = match ch {
            LogicalChar::Single(c) => c,
            LogicalChar::Pair(..) => return false,
        };
        match *self {
            Self::Literal(literal) => c == literal,
            Self::Range(start, end) => (start..=end).contains(&c),
        }
    }
}

/// An ordered collection of [`Exception`]s.
///
/// A character is left unescaped if it matches any rule in the set.
#[derive(Clone, Copy, Debug)]
pub struct ExceptionSet<'a> {
    rules: &'a [Exception],
}

impl<'a> ExceptionSet<'a> {
    pub const fn new(rules: &'a [Exception]) -> Self {
        Self {
            rules,
        }
    }

    pub fn rules(&self) -> &'a [Exception] {
        self.rules
    }

    /// Checks whether `ch` matches any rule in this set.
    pub fn contains(&self, ch: LogicalChar) -> bool {
        self.rules.iter().any(|rule| rule.matches(ch))
    }
}

/// Checks whether `ch` should be passed through unescaped under
/// `exceptions`.
pub fn is_exception(ch: LogicalChar, exceptions: &ExceptionSet<'_>) -> bool {
    exceptions.contains(ch)
}

use Exception::{Literal, Range};

/// Characters left unescaped in a full URI: every RFC 3986 reserved
/// character (gen-delims and sub-delims) and every unreserved character.
pub const URI: ExceptionSet<'static> = ExceptionSet::new(&[
    // gen-delims
    Literal(':'),
    Literal('/'),
    Literal('?'),
    Literal('#'),
    Literal('['),
    Literal(']'),
    Literal('@'),
    // sub-delims
    Literal('!'),
    Literal('$'),
    Literal('&'),
    Literal('\''),
    Literal('('),
    Literal(')'),
    Literal('*'),
    Literal('+'),
    Literal(','),
    Literal(';'),
    Literal('='),
    // unreserved
    Range('a', 'z'),
    Range('A', 'Z'),
    Range('0', '9'),
    Literal('-'),
    Literal('.'),
    Literal('_'),
    Literal('~'),
]);

/// Characters left unescaped in a URI component, as in RFC 5987: the
/// sub-delims `! ' ( ) *` and every unreserved character.
///
/// The remaining sub-delims (`$ & + , ; =`) and all gen-delims are encoded.
pub const URI_COMPONENT: ExceptionSet<'static> = ExceptionSet::new(&[
    // sub-delims
    Literal('!'),
    Literal('\''),
    Literal('('),
    Literal(')'),
    Literal('*'),
    // unreserved
    Range('a', 'z'),
    Range('A', 'Z'),
    Range('0', '9'),
    Literal('-'),
    Literal('.'),
    Literal('_'),
    Literal('~'),
]);
