// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::{Cell, RefCell};
use core::ops::Range;

use alloc::vec::Vec;

use crate::kurbo::Rect;
use crate::{DocumentRange, Error, TextFragment};

/// Width of one character cell.
pub(crate) const CELL_WIDTH: f64 = 10.0;
/// Height of one visual line.
pub(crate) const LINE_HEIGHT: f64 = 12.0;

/// A fragment of monospace text wrapped every `columns` characters.
pub(crate) struct GridFragment {
    range: Range<usize>,
    document_len: usize,
    columns: usize,
    origin_y: f64,
    unavailable: Option<Range<usize>>,
    requests: RefCell<Vec<Range<usize>>>,
    calls: Cell<usize>,
}

impl GridFragment {
    /// A fragment covering `range` of a document exactly as long as the fragment's end.
    pub(crate) fn new(range: Range<usize>, columns: usize) -> Self {
        Self {
            document_len: range.end,
            range,
            columns,
            origin_y: 0.0,
            unavailable: None,
            requests: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    pub(crate) fn with_document_len(mut self, document_len: usize) -> Self {
        self.document_len = document_len;
        self
    }

    pub(crate) fn with_origin_y(mut self, origin_y: f64) -> Self {
        self.origin_y = origin_y;
        self
    }

    /// Makes the segment service fail for any range overlapping `range`.
    pub(crate) fn with_unavailable(mut self, range: Range<usize>) -> Self {
        self.unavailable = Some(range);
        self
    }

    /// Ranges the segment service has been asked for, in order.
    pub(crate) fn requests(&self) -> Vec<Range<usize>> {
        self.requests.borrow().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    fn cell_x(column: usize) -> f64 {
        column as f64 * CELL_WIDTH
    }

    fn line_y(&self, line: usize) -> f64 {
        self.origin_y + line as f64 * LINE_HEIGHT
    }
}

impl TextFragment for GridFragment {
    fn document_range(&self) -> Range<usize> {
        self.range.clone()
    }

    fn document_len(&self) -> usize {
        self.document_len
    }

    fn layout_frame(&self) -> Rect {
        let lines = (self.range.end - self.range.start).div_ceil(self.columns).max(1);
        Rect::new(
            0.0,
            self.origin_y,
            Self::cell_x(self.columns),
            self.line_y(lines),
        )
    }

    fn for_each_segment(&self, range: DocumentRange, f: &mut dyn FnMut(Rect)) -> Result<(), Error> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(range.as_range());
        if let Some(unavailable) = &self.unavailable {
            if range.start() < unavailable.end && unavailable.start < range.end() {
                return Err(Error::segment_unavailable(range.as_range(), self.document_len));
            }
        }
        let mut start = range.start();
        while start < range.end() {
            let local = start - self.range.start;
            let line = local / self.columns;
            let line_end = self.range.start + (line + 1) * self.columns;
            let end = range.end().min(line_end);
            let column = local % self.columns;
            f(Rect::new(
                Self::cell_x(column),
                self.line_y(line),
                Self::cell_x(column + (end - start)),
                self.line_y(line + 1),
            ));
            start = end;
        }
        Ok(())
    }
}

/// A dirty rectangle covering everything.
pub(crate) fn everything() -> Rect {
    Rect::new(-1.0e6, -1.0e6, 1.0e6, 1.0e6)
}
