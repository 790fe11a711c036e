// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::Error;

/// A validated half-open range of document offsets.
///
/// Invariants:
///
/// - `start <= end`
/// - `end` is within the document it was validated against
///
/// This is the form in which ranges cross from the decoration overlay into the layout
/// service, so that [`TextFragment`](crate::TextFragment) implementations never see a reversed
/// or out-of-bounds range.
///
/// `DocumentRange` does not record which document it was validated for. It is the caller's
/// responsibility to only use it with the same document content.
///
/// ## Example
///
/// ```
/// use text_decoration::{DocumentRange, ErrorKind};
///
/// let range = DocumentRange::new(2..5, 10).unwrap();
/// assert_eq!(range.len(), 3);
/// assert_eq!(DocumentRange::new(2..11, 10).unwrap_err().kind(), ErrorKind::InvalidBounds);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentRange {
    start: usize,
    end: usize,
}

impl DocumentRange {
    /// Returns a validated `DocumentRange` for a document of `document_len` offsets.
    #[inline]
    pub fn new(range: Range<usize>, document_len: usize) -> Result<Self, Error> {
        if range.start > range.end {
            return Err(Error::invalid_range(range.start, range.end, document_len));
        }
        if range.end > document_len {
            return Err(Error::invalid_bounds(range.start, range.end, document_len));
        }
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Creates a `DocumentRange` without validation.
    ///
    /// This is intended for callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of offsets covered.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no offsets.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<DocumentRange> for Range<usize> {
    #[inline]
    fn from(value: DocumentRange) -> Self {
        value.as_range()
    }
}
