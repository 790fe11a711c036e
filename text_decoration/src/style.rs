// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-style drawing routines.

use peniko::Color;
use peniko::kurbo::{BezPath, Ellipse, Line, Point, Rect, RoundedRect};

use crate::{Decoration, DecorationMetrics, Marker};

/// A drawing surface for decorations.
///
/// Coordinates are fragment-local. Implementations exist for recording
/// ([`Recorder`](crate::Recorder)) and, behind the `tiny_skia` feature, for rasterising into a
/// Tiny-Skia pixmap.
pub trait DecorationPainter {
    /// Fills a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Strokes a straight line.
    fn stroke_line(&mut self, line: Line, width: f64, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fills an ellipse.
    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color);

    /// Fills a closed path.
    fn fill_path(&mut self, path: &BezPath, color: Color);
}

impl<P: DecorationPainter + ?Sized> DecorationPainter for &mut P {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        (**self).fill_rounded_rect(rect, color);
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        (**self).stroke_line(line, width, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        (**self).fill_ellipse(ellipse, color);
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        (**self).fill_path(path, color);
    }
}

/// The geometry of an underline marker.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerShape {
    /// Filled ellipse inscribed in the marker's bounding square.
    Ellipse(Ellipse),
    /// Filled square.
    Rect(Rect),
    /// Filled polygon.
    Path(BezPath),
}

/// Builds the shape for `marker` centered at `center` inside a square of side `size`.
///
/// Returns `None` for [`Marker::None`].
pub fn marker_shape(marker: Marker, center: Point, size: f64) -> Option<MarkerShape> {
    let half = size / 2.0;
    let Point { x, y } = center;
    let bounds = Rect::from_center_size(center, (size, size));
    match marker {
        Marker::Circle => Some(MarkerShape::Ellipse(Ellipse::from_rect(bounds))),
        Marker::Square => Some(MarkerShape::Rect(bounds)),
        Marker::Triangle => {
            let mut path = BezPath::new();
            path.move_to((x - half, y - half));
            path.line_to((x + half, y));
            path.line_to((x - half, y + half));
            path.close_path();
            Some(MarkerShape::Path(path))
        }
        Marker::Diamond => {
            let mut path = BezPath::new();
            path.move_to((x, y - half));
            path.line_to((x + half, y));
            path.line_to((x, y + half));
            path.line_to((x - half, y));
            path.close_path();
            Some(MarkerShape::Path(path))
        }
        Marker::None => None,
    }
}

/// Paints a background highlight for one segment rectangle.
///
/// The rectangle is extended vertically by [`DecorationMetrics::background_inset`] and the
/// corners are rounded by the decoration's thickness.
pub fn draw_background<P>(
    painter: &mut P,
    decoration: &Decoration,
    rect: Rect,
    metrics: &DecorationMetrics,
) where
    P: DecorationPainter + ?Sized,
{
    let rect = rect.inflate(0.0, metrics.background_inset);
    painter.fill_rounded_rect(
        RoundedRect::from_rect(rect, decoration.thickness()),
        decoration.color(),
    );
}

/// Paints an underline and its start marker for one segment rectangle.
///
/// The stroke runs along the bottom of the rectangle, [`DecorationMetrics::underline_offset`]
/// below it; the marker is centered on the stroke's start. Backgrounds are ignored.
pub fn draw_underline<P>(
    painter: &mut P,
    decoration: &Decoration,
    rect: Rect,
    metrics: &DecorationMetrics,
) where
    P: DecorationPainter + ?Sized,
{
    let Some(marker) = decoration.marker() else {
        return;
    };
    let color = decoration.color();
    let y = rect.y1 + metrics.underline_offset;
    painter.stroke_line(
        Line::new((rect.x0, y), (rect.x1, y)),
        metrics.underline_width,
        color,
    );
    match marker_shape(marker, Point::new(rect.x0, y), metrics.marker_size) {
        Some(MarkerShape::Ellipse(ellipse)) => painter.fill_ellipse(ellipse, color),
        Some(MarkerShape::Rect(square)) => painter.fill_rect(square, color),
        Some(MarkerShape::Path(path)) => painter.fill_path(&path, color),
        None => {}
    }
}
