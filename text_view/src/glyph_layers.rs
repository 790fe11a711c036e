// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-glyph layer placement.

use alloc::vec::Vec;

use text_decoration::kurbo::{Point, Rect};
use text_decoration::peniko::Color;

/// A glyph positioned within its line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph identifier within the run's font.
    pub id: u32,
    /// Position relative to the line's typographic bounds.
    pub position: Point,
    /// The glyph's bounding rectangle in glyph space.
    pub bounds: Rect,
}

/// A run of glyphs sharing one font and color.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRun {
    /// Foreground color, if the text specifies one.
    pub color: Option<Color>,
    /// The glyphs in visual order.
    pub glyphs: Vec<PositionedGlyph>,
}

/// One visual line of a layout fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFragment {
    /// Typographic bounds of the line in fragment-local coordinates.
    pub typographic_bounds: Rect,
    /// Origin of the glyphs relative to the line's typographic bounds.
    pub glyph_origin: Point,
    /// The line's glyph runs.
    pub runs: Vec<GlyphRun>,
}

/// Placement of a single glyph on its own layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphLayer {
    /// Glyph identifier.
    pub glyph: u32,
    /// Fill color.
    pub color: Color,
    /// Layer frame in fragment-local coordinates.
    pub frame: Rect,
    /// Origin of the layer's own bounds; the glyph is drawn at this layer's zero point.
    pub bounds_origin: Point,
    /// Backing-store scale the glyph is rasterised at.
    pub content_scale: f64,
}

/// Computes one layer per glyph so glyphs can be moved or animated individually.
///
/// Each layer spans the full line height and is as wide as the glyph's bounding rectangle
/// extends to the right of the glyph origin. The layer's bounds are shifted so the baseline
/// lands at the glyph origin. Runs without a color use `default_color`. Layers start at a content
/// scale of `1.0`; a [`FragmentView`](crate::FragmentView) hosting them keeps it in sync with the
/// display.
pub fn glyph_layers(lines: &[LineFragment], default_color: Color) -> Vec<GlyphLayer> {
    let mut layers = Vec::new();
    for line in lines {
        let bounds = line.typographic_bounds;
        let height = bounds.height();
        for run in &line.runs {
            let color = run.color.unwrap_or(default_color);
            for glyph in &run.glyphs {
                let origin = Point::new(bounds.x0 + glyph.position.x, bounds.y0 + glyph.position.y);
                layers.push(GlyphLayer {
                    glyph: glyph.id,
                    color,
                    frame: Rect::new(
                        origin.x,
                        origin.y,
                        origin.x + glyph.bounds.x1,
                        origin.y + height,
                    ),
                    bounds_origin: Point::new(0.0, -(height - line.glyph_origin.y)),
                    content_scale: 1.0,
                });
            }
        }
    }
    layers
}
