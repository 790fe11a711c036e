// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine's side of the overlay.

use core::ops::Range;

use peniko::kurbo::Rect;
use smallvec::SmallVec;

use crate::{DocumentRange, Error};

/// One renderable chunk of laid-out text, supplied by the layout engine.
///
/// A fragment is commonly one paragraph with its wrapped lines. The decoration overlay only
/// reads from it for the duration of a draw call.
pub trait TextFragment {
    /// The document offsets covered by this fragment.
    fn document_range(&self) -> Range<usize>;

    /// Length of the whole document the fragment belongs to.
    ///
    /// Ranges are validated against this before they are passed to
    /// [`TextFragment::for_each_segment`].
    fn document_len(&self) -> usize;

    /// The fragment's frame in document coordinates.
    ///
    /// Segment rectangles are shifted up by the frame's `y0` to make them fragment-local.
    fn layout_frame(&self) -> Rect;

    /// Invokes `f` with one rectangle, in document coordinates, per contiguous visual run of
    /// `range`.
    ///
    /// A range that wraps across lines, or that is split by bidi reordering, produces several
    /// rectangles. Returning an error skips the range; rectangles already passed to `f` for it
    /// are discarded.
    fn for_each_segment(&self, range: DocumentRange, f: &mut dyn FnMut(Rect)) -> Result<(), Error>;
}

impl<T: TextFragment + ?Sized> TextFragment for &T {
    fn document_range(&self) -> Range<usize> {
        (**self).document_range()
    }

    fn document_len(&self) -> usize {
        (**self).document_len()
    }

    fn layout_frame(&self) -> Rect {
        (**self).layout_frame()
    }

    fn for_each_segment(&self, range: DocumentRange, f: &mut dyn FnMut(Rect)) -> Result<(), Error> {
        (**self).for_each_segment(range, f)
    }
}

/// Maps `range` to fragment-local segment rectangles that intersect `dirty`.
///
/// Each rectangle reported by the fragment is shifted vertically by the fragment frame's
/// origin; horizontal offsets (such as a gutter) are left to the caller. Rectangles that do
/// not overlap `dirty` are dropped. Mapping the same range twice yields the same rectangles.
pub fn segment_rects<F>(
    fragment: &F,
    range: DocumentRange,
    dirty: Rect,
) -> Result<SmallVec<[Rect; 2]>, Error>
where
    F: TextFragment + ?Sized,
{
    let origin_y = fragment.layout_frame().y0;
    let mut rects = SmallVec::new();
    fragment.for_each_segment(range, &mut |segment| {
        let local = Rect::new(
            segment.x0,
            segment.y0 - origin_y,
            segment.x1,
            segment.y1 - origin_y,
        );
        if overlaps(local, dirty) {
            rects.push(local);
        }
    })?;
    Ok(rects)
}

/// Whether two rectangles share a region of positive area.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
