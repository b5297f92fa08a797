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

use core::iter::FusedIterator;

/// Like [`core::iter::Flatten`], but lets the outer iterator and the
/// partially consumed inner iterator be inspected for size hints.
pub struct Flatten<I, Sub> {
    iter: I,
    sub: Option<Sub>,
}

impl<I, Sub> Flatten<I, Sub> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            sub: None,
        }
    }

    pub fn outer(&self) -> &I {
        &self.iter
    }

    pub fn pending(&self) -> Option<&Sub> {
        self.sub.as_ref()
    }
}

impl<I, Sub: Iterator> Iterator for Flatten<I, Sub>
where
    I: Iterator<Item = Sub>,
{
    type Item = Sub::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.sub.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            match self.iter.next() {
                Some(sub) => self.sub = Some(sub),
                None => {
                    self.sub = None;
                    return None;
                }
            }
        }
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let init = match self.sub {
            Some(sub) => sub.fold(init, &mut f),
            None => init,
        };
        self.iter.fold(init, |b, sub| sub.fold(b, &mut f))
    }
}

impl<I, Sub: Iterator> FusedIterator for Flatten<I, Sub> where
    I: FusedIterator<Item = Sub>
{
}

/// Turns an iterator of `Result<T, E>` into an iterator of `T` that stops at
/// the first error. The error can then be fetched with [`Self::take_err`].
#[cfg(feature = "alloc")]
pub struct ErrAdapter<I, Err> {
    iter: I,
    err: Option<Err>,
}

#[cfg(feature = "alloc")]
impl<I, Err> ErrAdapter<I, Err> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            err: None,
        }
    }

    pub fn take_err(&mut self) -> Option<Err> {
        self.err.take()
    }
}

#[cfg(feature = "alloc")]
impl<I, Err, T> Iterator for ErrAdapter<I, Err>
where
    I: Iterator<Item = Result<T, Err>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.err.is_some() {
            return None;
        }
        match self.iter.next()? {
            Ok(item) => Some(item),
            Err(e) => {
                self.err = Some(e);
                None
            }
        }
    }
}
