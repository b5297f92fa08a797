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

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

//! Percent-encoding for URIs that follows RFC 3986 and RFC 5987 exactly.
//!
//! Every character outside the chosen [exception set](ExceptionSet) is
//! replaced by its UTF-8 bytes, written as `%XX` with uppercase hex digits.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use properuri::{encode_uri, encode_uri_component};
//!
//! assert_eq!(encode_uri("https://example.com/a b"), "https://example.com/a%20b");
//! assert_eq!(encode_uri_component("a&b=\u{a9}"), "a%26b%3D%C2%A9");
//! assert_eq!(encode_uri(None), "");
//! # }
//! ```
//!
//! Text that may hold unpaired surrogates can be encoded from its UTF-16
//! code units. The lenient functions encode such sequences anyway; the
//! `try_` functions reject them with an [`EncodeError`].

pub mod encode;
pub mod exception;
mod iter;
pub mod unit;
pub mod utf8;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::string::String;

pub use encode::encode_to_chars;
pub use encode::{EncodeError, EncodeResult};
#[cfg(feature = "alloc")]
pub use encode::{encode_str, encode_to_string, try_encode_to_string};

pub use exception::{Exception, ExceptionSet};
pub use exception::{URI, URI_COMPONENT};

pub use unit::LogicalChar;

/// Percent-encodes a full URI.
///
/// Reserved characters (`: / ? # [ ] @ ! $ & ' ( ) * + , ; =`) and
/// unreserved characters (`A-Z a-z 0-9 - . _ ~`) are left as they are.
/// [`None`] produces an empty string.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_uri<'a, S>(uri: S) -> String
where
    S: Into<Option<&'a str>>,
{
    uri.into().map_or_else(String::new, |uri| encode_str(uri, &URI))
}

/// Percent-encodes a URI component.
///
/// Only `! ' ( ) *` and unreserved characters (`A-Z a-z 0-9 - . _ ~`) are
/// left as they are. [`None`] produces an empty string.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_uri_component<'a, S>(component: S) -> String
where
    S: Into<Option<&'a str>>,
{
    component
        .into()
        .map_or_else(String::new, |component| {
            encode_str(component, &URI_COMPONENT)
        })
}

/// Like [`encode_uri`], but takes UTF-16 code units.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_uri_utf16(uri: &[u16]) -> String {
    encode_to_string(uri.iter().copied(), &URI)
}

/// Like [`encode_uri_component`], but takes UTF-16 code units.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_uri_component_utf16(component: &[u16]) -> String {
    encode_to_string(component.iter().copied(), &URI_COMPONENT)
}

/// Like [`encode_uri_utf16`], but fails on malformed surrogate sequences.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn try_encode_uri_utf16(uri: &[u16]) -> EncodeResult<String> {
    try_encode_to_string(uri.iter().copied(), &URI)
}

/// Like [`encode_uri_component_utf16`], but fails on malformed surrogate
/// sequences.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn try_encode_uri_component_utf16(
    component: &[u16],
) -> EncodeResult<String> {
    try_encode_to_string(component.iter().copied(), &URI_COMPONENT)
}
