// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`parley`] layout exposed as a decoratable fragment.

use core::ops::Range;

use parley::editing::{Cursor, Selection};
use parley::layout::{Affinity, Layout};
use parley::style::Brush;
use text_decoration::kurbo::Rect;
use text_decoration::{DocumentRange, Error, TextFragment};

/// One paragraph of a document, laid out by [`parley`].
///
/// `layout` must have been built from `text[range]`; `y_offset` is where the paragraph starts
/// in the document. Segment rectangles are reported in document coordinates.
#[derive(Clone)]
pub struct ParleyFragment<'a, B: Brush> {
    layout: &'a Layout<B>,
    text: &'a str,
    range: Range<usize>,
    y_offset: f64,
}

impl<'a, B: Brush> ParleyFragment<'a, B> {
    /// Wraps the layout of `text[range]`, placed `y_offset` down the document.
    pub fn new(layout: &'a Layout<B>, text: &'a str, range: Range<usize>, y_offset: f64) -> Self {
        Self {
            layout,
            text,
            range,
            y_offset,
        }
    }

    /// The wrapped layout.
    pub fn layout(&self) -> &'a Layout<B> {
        self.layout
    }

    /// The paragraph's text.
    pub fn text(&self) -> &'a str {
        self.text.get(self.range.clone()).unwrap_or_default()
    }

    /// Converts a document range to a range of layout byte indices.
    fn local_range(&self, range: DocumentRange) -> Result<Range<usize>, Error> {
        let unavailable = || Error::segment_unavailable(range.as_range(), self.text.len());
        if range.start() < self.range.start || range.end() > self.range.end {
            return Err(unavailable());
        }
        if !self.text.is_char_boundary(range.start()) || !self.text.is_char_boundary(range.end())
        {
            return Err(unavailable());
        }
        Ok(range.start() - self.range.start..range.end() - self.range.start)
    }
}

impl<B: Brush> core::fmt::Debug for ParleyFragment<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyFragment")
            .field("range", &self.range)
            .field("y_offset", &self.y_offset)
            .field("text_len", &self.text.len())
            .finish_non_exhaustive()
    }
}

impl<B: Brush> TextFragment for ParleyFragment<'_, B> {
    fn document_range(&self) -> Range<usize> {
        self.range.clone()
    }

    fn document_len(&self) -> usize {
        self.text.len()
    }

    fn layout_frame(&self) -> Rect {
        Rect::new(
            0.0,
            self.y_offset,
            f64::from(self.layout.width()),
            self.y_offset + f64::from(self.layout.height()),
        )
    }

    fn for_each_segment(&self, range: DocumentRange, f: &mut dyn FnMut(Rect)) -> Result<(), Error> {
        let local = self.local_range(range)?;
        if local.is_empty() {
            return Ok(());
        }
        let selection = Selection::new(
            Cursor::from_byte_index::<B>(self.layout, local.start, Affinity::Downstream),
            Cursor::from_byte_index::<B>(self.layout, local.end, Affinity::Upstream),
        );
        selection.geometry_with::<B>(self.layout, |bb, _line| {
            f(Rect::new(
                bb.x0,
                bb.y0 + self.y_offset,
                bb.x1,
                bb.y1 + self.y_offset,
            ));
        });
        Ok(())
    }
}
