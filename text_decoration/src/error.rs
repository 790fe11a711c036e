// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Error produced when a document range cannot be mapped to geometry.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the length of the
/// document at the time of failure. Drawing never propagates these errors: the offending
/// decoration is skipped for the fragment being drawn and the error is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start offset of the attempted range.
    start: usize,

    /// The end offset (exclusive) of the attempted range.
    end: usize,

    /// The length of the document at the time of failure.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports document length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start offset of the attempted range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end offset of the attempted range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The attempted range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The length of the document at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            start,
            end,
            len,
        }
    }

    /// Creates an error for a layout service that cannot produce segments for `range`.
    ///
    /// [`TextFragment`](crate::TextFragment) implementations return this when the range is
    /// valid for the document but the fragment has no geometry for it.
    pub fn segment_unavailable(range: Range<usize>, len: usize) -> Self {
        Self {
            kind: ErrorKind::SegmentUnavailable,
            start: range.start,
            end: range.end,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for document length {}",
                self.start, self.end, self.len
            ),
            ErrorKind::SegmentUnavailable => write!(
                f,
                "no segment geometry for range {}..{} (document length {})",
                self.start, self.end, self.len
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided range had `start > end`.
    InvalidRange,

    /// The range extends past the end of the document.
    InvalidBounds,

    /// The layout service has no geometry for the range.
    SegmentUnavailable,
}
