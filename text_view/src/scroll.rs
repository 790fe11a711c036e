// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text view scrolls inside a clip view whose leading edge is covered by a gutter (line
//! numbers, fold markers). Everything here works in document coordinates: the clip origin is
//! the document point under the clip view's top-left corner, so the first visible column of
//! text is `gutter_width` to its right.
//!
//! All scroll operations clamp the clip origin to the content bounds.

use text_decoration::kurbo::{Point, Rect, Size, Vec2};

const TARGET: &str = "text_view::scroll";

/// Scroll state of a text view with a gutter overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollGeometry {
    content_size: Size,
    viewport_size: Size,
    clip_origin: Point,
    gutter_width: f64,
    line_fragment_padding: f64,
}

impl ScrollGeometry {
    /// Creates scroll state for `content_size` shown through a `viewport_size` clip view,
    /// scrolled to the beginning of the document, with no gutter.
    pub fn new(content_size: Size, viewport_size: Size) -> Self {
        Self {
            content_size,
            viewport_size,
            clip_origin: Point::ZERO,
            gutter_width: 0.0,
            line_fragment_padding: 0.0,
        }
    }

    /// Sets the gutter width, keeping the first text column at the leading edge.
    pub fn with_gutter_width(mut self, gutter_width: f64) -> Self {
        let shift = gutter_width - self.gutter_width;
        self.gutter_width = gutter_width;
        self.clip_origin = self.clamp(self.clip_origin - Vec2::new(shift, 0.0));
        self
    }

    /// Sets the padding applied on both sides of an empty (caret) rectangle before scrolling
    /// it into view.
    pub fn with_line_fragment_padding(mut self, padding: f64) -> Self {
        self.line_fragment_padding = padding;
        self
    }

    /// Width of the gutter overlay.
    pub fn gutter_width(&self) -> f64 {
        self.gutter_width
    }

    /// Padding applied around caret rectangles.
    pub fn line_fragment_padding(&self) -> f64 {
        self.line_fragment_padding
    }

    /// Size of the scrollable content.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Resizes the content, re-clamping the scroll position.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.clip_origin = self.clamp(self.clip_origin);
    }

    /// Size of the clip view, gutter included.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Resizes the clip view, re-clamping the scroll position.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
        self.clip_origin = self.clamp(self.clip_origin);
    }

    /// The document point under the clip view's top-left corner.
    pub fn clip_origin(&self) -> Point {
        self.clip_origin
    }

    /// The clip view's bounds in document coordinates, gutter included.
    pub fn clip_bounds(&self) -> Rect {
        Rect::from_origin_size(self.clip_origin, self.viewport_size)
    }

    /// The content frame.
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.content_size)
    }

    /// The part of the content that is visible beside the gutter.
    pub fn visible_rect(&self) -> Rect {
        let clip = self.clip_bounds();
        let text_x0 = (clip.x0 + self.gutter_width).min(clip.x1);
        Rect::new(text_x0, clip.y0, clip.x1, clip.y1).intersect(self.frame())
    }

    /// Scrolls so that `point` is the top-left corner of the visible text area.
    pub fn scroll(&mut self, point: Point) {
        let origin = self.clamp(point - Vec2::new(self.gutter_width, 0.0));
        log::debug!(target: TARGET, "scroll to {point:?}: clip origin {origin:?}");
        self.clip_origin = origin;
    }

    /// Scrolls the minimum distance that makes `rect` visible beside the gutter.
    ///
    /// An empty-width `rect` (a caret) is padded by the line fragment padding on both sides.
    /// Returns whether the scroll position changed; `None` never scrolls.
    pub fn scroll_to_visible(&mut self, rect: Option<Rect>) -> bool {
        let Some(rect) = rect else {
            log::debug!(target: TARGET, "scroll to visible: no segment");
            return false;
        };
        let target = self.adjusted(rect);
        let clip = self.clip_bounds();
        let origin = self.clamp(Point::new(
            scroll_axis(clip.x0, clip.width(), target.x0, target.x1),
            scroll_axis(clip.y0, clip.height(), target.y0, target.y1),
        ));
        let changed = origin != self.clip_origin;
        log::debug!(
            target: TARGET,
            "scroll {rect:?} to visible: clip origin {:?} -> {origin:?}",
            self.clip_origin
        );
        self.clip_origin = origin;
        changed
    }

    /// Scrolls so that `selection` starts half a page below the top of the visible area.
    ///
    /// `None` leaves the scroll position unchanged.
    pub fn center_selection_in_visible_area(&mut self, selection: Option<Rect>) {
        let Some(rect) = selection else {
            log::debug!(target: TARGET, "center selection: no selection");
            return;
        };
        let target = self.adjusted(rect);
        let half_page = self.visible_rect().height() / 2.0;
        let origin = self.clamp(Point::new(target.x0, target.y0 - half_page));
        log::debug!(target: TARGET, "center {rect:?}: clip origin {origin:?}");
        self.clip_origin = origin;
    }

    /// Scrolls up by the visible height.
    pub fn page_up(&mut self) {
        let visible = self.visible_rect();
        self.scroll(Point::new(visible.x0, visible.y0 - visible.height()));
    }

    /// Scrolls down by the visible height.
    pub fn page_down(&mut self) {
        let visible = self.visible_rect();
        self.scroll(Point::new(visible.x0, visible.y0 + visible.height()));
    }

    /// Same as [`page_up`](Self::page_up); the selection is the host's business.
    pub fn page_up_and_modify_selection(&mut self) {
        self.page_up();
    }

    /// Same as [`page_down`](Self::page_down); the selection is the host's business.
    pub fn page_down_and_modify_selection(&mut self) {
        self.page_down();
    }

    /// Scrolls to the top of the content, keeping the horizontal position.
    pub fn scroll_to_beginning_of_document(&mut self) {
        let x = self.visible_rect().x0;
        self.scroll(Point::new(x, self.frame().y0));
    }

    /// Scrolls to the bottom of the content, keeping the horizontal position.
    pub fn scroll_to_end_of_document(&mut self) {
        let x = self.visible_rect().x0;
        self.scroll(Point::new(x, self.frame().y1));
    }

    /// Pads caret rectangles and extends `rect` leftward so it clears the gutter.
    fn adjusted(&self, rect: Rect) -> Rect {
        let mut rect = rect;
        if rect.width() == 0.0 {
            rect.x0 -= self.line_fragment_padding;
            rect.x1 += self.line_fragment_padding;
        }
        rect.x0 -= self.gutter_width;
        rect
    }

    fn clamp(&self, origin: Point) -> Point {
        let min_x = -self.gutter_width;
        let max_x = (self.content_size.width - self.viewport_size.width).max(min_x);
        let max_y = (self.content_size.height - self.viewport_size.height).max(0.0);
        Point::new(origin.x.clamp(min_x, max_x), origin.y.clamp(0.0, max_y))
    }
}

/// The new origin along one axis that brings `min..max` into `origin..origin + extent`.
///
/// Spans larger than the extent are aligned to their start.
fn scroll_axis(origin: f64, extent: f64, min: f64, max: f64) -> f64 {
    if min < origin {
        min
    } else if max > origin + extent {
        if max - min > extent { min } else { max - extent }
    } else {
        origin
    }
}
