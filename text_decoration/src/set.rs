// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sorted decoration collection and fragment lookup.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Decoration, DecorationStyle};

/// An ordered collection of decorations, sorted ascending by range start.
///
/// The sort order is established on ingestion: [`DecorationSet::set_decorations`],
/// [`DecorationSet::insert`], and the [`FromIterator`]/[`Extend`] impls all keep it, and the
/// sort is stable so decorations with equal starts keep the order they were supplied in.
/// Overlapping decorations are allowed and are drawn on top of each other in set order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of the set, sorting by range start.
    pub fn set_decorations(&mut self, decorations: impl IntoIterator<Item = Decoration>) {
        self.decorations.clear();
        self.decorations.extend(decorations);
        self.sort();
    }

    /// Inserts a single decoration after any existing decorations with the same start.
    pub fn insert(&mut self, decoration: Decoration) {
        let ix = self
            .decorations
            .partition_point(|d| d.start() <= decoration.start());
        self.decorations.insert(ix, decoration);
    }

    /// Removes all decorations.
    pub fn clear(&mut self) {
        self.decorations.clear();
    }

    /// Number of decorations in the set.
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Returns `true` if the set holds no decorations.
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// The decorations in ascending start order.
    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Iterates the decorations in ascending start order.
    pub fn iter(&self) -> core::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    /// Returns the decorations intersecting `range` whose style passes `filter`.
    ///
    /// See [`Intersections`] for the exact semantics.
    pub fn intersecting<F>(&self, range: Range<usize>, filter: F) -> Intersections<'_, F>
    where
        F: FnMut(&DecorationStyle) -> bool,
    {
        Intersections {
            decorations: self.decorations.iter(),
            range,
            filter,
            index: 0,
        }
    }

    fn sort(&mut self) {
        self.decorations.sort_by_key(Decoration::start);
    }
}

impl FromIterator<Decoration> for DecorationSet {
    fn from_iter<T: IntoIterator<Item = Decoration>>(iter: T) -> Self {
        let mut set = Self::new();
        set.set_decorations(iter);
        set
    }
}

impl Extend<Decoration> for DecorationSet {
    fn extend<T: IntoIterator<Item = Decoration>>(&mut self, iter: T) {
        self.decorations.extend(iter);
        self.sort();
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = core::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorations.iter()
    }
}

/// A decoration that intersects a fragment, with its clipped range.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<'a> {
    /// The intersecting decoration.
    pub decoration: &'a Decoration,
    /// The decoration's range clipped to the fragment's range. Never empty.
    pub range: Range<usize>,
    /// Position of this decoration among the filter-passing decorations visited so far in this
    /// lookup.
    ///
    /// Only meaningful within a single lookup; it is intended for alternating styles.
    pub index: usize,
}

/// Iterator over the decorations that intersect a document range.
///
/// Created by [`DecorationSet::intersecting`]. Yields decorations in set order. The scan stops
/// at the first decoration whose start is at or past the end of the range, since no later
/// decoration can intersect it. Decorations whose style fails the filter are skipped without
/// being counted. Decorations with an empty intersection are skipped but still counted, so
/// [`Intersection::index`] numbers every filter-passing decoration visited.
#[derive(Clone, Debug)]
pub struct Intersections<'a, F> {
    decorations: core::slice::Iter<'a, Decoration>,
    range: Range<usize>,
    filter: F,
    index: usize,
}

impl<'a, F> Iterator for Intersections<'a, F>
where
    F: FnMut(&DecorationStyle) -> bool,
{
    type Item = Intersection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let decoration = self.decorations.next()?;
            if decoration.start() >= self.range.end {
                // Exhaust the slice so a later call does not resume past the cut-off.
                self.decorations = [].iter();
                return None;
            }
            if !(self.filter)(&decoration.style()) {
                continue;
            }
            let index = self.index;
            self.index += 1;
            if let Some(range) = decoration.intersection(&self.range) {
                return Some(Intersection {
                    decoration,
                    range,
                    index,
                });
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.decorations.len()))
    }
}

impl<F> core::iter::FusedIterator for Intersections<'_, F> where
    F: FnMut(&DecorationStyle) -> bool
{
}
