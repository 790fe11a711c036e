// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass decoration drawing for a single fragment.

use peniko::kurbo::Rect;

use crate::{
    Decoration, DecorationMetrics, DecorationPainter, DecorationSet, DecorationStyle,
    DocumentRange, TextFragment, draw_background, draw_underline, segment_rects,
};

/// Draws the decorations of a [`DecorationSet`] over text fragments.
///
/// The renderer owns the set; the host replaces it with
/// [`set_decorations`](Self::set_decorations) whenever annotations change and calls
/// [`draw_decorations`](Self::draw_decorations) from each fragment's draw callback. Nothing is
/// cached between draw calls, so drawing is idempotent.
#[derive(Clone, Debug, Default)]
pub struct DecorationRenderer {
    decorations: DecorationSet,
    metrics: DecorationMetrics,
}

impl DecorationRenderer {
    /// Creates a renderer with no decorations and default metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with no decorations and the given metrics.
    pub fn with_metrics(metrics: DecorationMetrics) -> Self {
        Self {
            decorations: DecorationSet::new(),
            metrics,
        }
    }

    /// The metrics used for drawing.
    pub fn metrics(&self) -> &DecorationMetrics {
        &self.metrics
    }

    /// Replaces the metrics used for drawing.
    pub fn set_metrics(&mut self, metrics: DecorationMetrics) {
        self.metrics = metrics;
    }

    /// The current decorations.
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Mutable access to the current decorations.
    pub fn decorations_mut(&mut self) -> &mut DecorationSet {
        &mut self.decorations
    }

    /// Replaces all decorations, sorting them by range start.
    pub fn set_decorations(&mut self, decorations: impl IntoIterator<Item = Decoration>) {
        self.decorations.set_decorations(decorations);
    }

    /// Enumerates the visible segments of decorations that intersect `fragment`.
    ///
    /// For every decoration whose style passes `filter` and whose range intersects the
    /// fragment, the clipped range is mapped to fragment-local rectangles and `f` is invoked
    /// with `(decoration, rect, index)` for each rectangle overlapping `dirty`. `index` counts
    /// the filter-passing decorations visited so far in this call.
    ///
    /// A range that cannot be mapped skips that decoration for this fragment and is logged.
    pub fn segments<T, F, G>(&self, fragment: &T, dirty: Rect, filter: F, mut f: G)
    where
        T: TextFragment + ?Sized,
        F: FnMut(&DecorationStyle) -> bool,
        G: FnMut(&Decoration, Rect, usize),
    {
        if self.decorations.is_empty() {
            return;
        }
        let fragment_range = fragment.document_range();
        let document_len = fragment.document_len();
        for hit in self.decorations.intersecting(fragment_range.clone(), filter) {
            let rects = DocumentRange::new(hit.range.clone(), document_len)
                .and_then(|range| segment_rects(fragment, range, dirty));
            let rects = match rects {
                Ok(rects) => rects,
                Err(err) => {
                    log::warn!(
                        "skipping decoration {:?} in fragment {:?}: {err}",
                        hit.decoration.range(),
                        fragment_range,
                    );
                    continue;
                }
            };
            for rect in rects {
                f(hit.decoration, rect, hit.index);
            }
        }
    }

    /// Draws the background decorations intersecting `fragment`.
    pub fn draw_backgrounds<T, P>(&self, fragment: &T, dirty: Rect, painter: &mut P)
    where
        T: TextFragment + ?Sized,
        P: DecorationPainter + ?Sized,
    {
        self.segments(
            fragment,
            dirty,
            DecorationStyle::is_background,
            |decoration, rect, _| draw_background(painter, decoration, rect, &self.metrics),
        );
    }

    /// Draws the underline decorations intersecting `fragment`.
    pub fn draw_underlines<T, P>(&self, fragment: &T, dirty: Rect, painter: &mut P)
    where
        T: TextFragment + ?Sized,
        P: DecorationPainter + ?Sized,
    {
        self.segments(
            fragment,
            dirty,
            DecorationStyle::is_underline,
            |decoration, rect, _| draw_underline(painter, decoration, rect, &self.metrics),
        );
    }

    /// Draws a fragment with its decorations.
    ///
    /// Backgrounds are painted first, then `draw_text` is invoked to paint the fragment's
    /// glyphs, then underlines are painted on top.
    pub fn draw_decorations<T, P>(
        &self,
        fragment: &T,
        dirty: Rect,
        painter: &mut P,
        draw_text: impl FnOnce(&mut P),
    ) where
        T: TextFragment + ?Sized,
        P: DecorationPainter + ?Sized,
    {
        log::trace!(
            "drawing decorations for fragment {:?} in {dirty:?}",
            fragment.document_range()
        );
        self.draw_backgrounds(fragment, dirty, painter);
        draw_text(painter);
        self.draw_underlines(fragment, dirty, painter);
    }
}
