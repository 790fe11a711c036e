// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration painter implementation using Tiny-Skia.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, PixmapMut, Stroke, Transform};

use crate::DecorationPainter;
use crate::kurbo::{Affine, BezPath, Ellipse, Line, PathEl, Rect, RoundedRect, Shape};
use crate::peniko::Color;

/// Tolerance used when flattening curved shapes into Tiny-Skia paths.
const TOLERANCE: f64 = 0.1;

/// Paints decorations into a Tiny-Skia pixmap.
///
/// Decoration geometry is fragment-local; set a transform with
/// [`TinySkiaPainter::set_transform`] to place the fragment in the pixmap.
pub struct TinySkiaPainter<'a> {
    pixmap: PixmapMut<'a>,
    transform: Transform,
    paint: Paint<'static>,
}

impl<'a> TinySkiaPainter<'a> {
    /// Creates a painter drawing into `pixmap` with an identity transform.
    pub fn new(pixmap: PixmapMut<'a>) -> Self {
        Self {
            pixmap,
            transform: Transform::identity(),
            paint: Paint::default(),
        }
    }

    /// Sets the transform applied to everything drawn afterwards.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = to_transform(transform);
    }

    /// Returns the underlying pixmap.
    pub fn into_inner(self) -> PixmapMut<'a> {
        self.pixmap
    }

    fn set_color(&mut self, color: Color) {
        let rgba8 = color.to_rgba8();
        self.paint
            .set_color(tiny_skia::Color::from_rgba8(rgba8.r, rgba8.g, rgba8.b, rgba8.a));
    }

    fn fill_shape(&mut self, shape: &impl Shape, color: Color) {
        let Some(path) = to_path(shape) else {
            return;
        };
        self.set_color(color);
        self.pixmap.fill_path(
            &path,
            &self.paint,
            FillRule::Winding,
            self.transform,
            None,
        );
    }
}

impl core::fmt::Debug for TinySkiaPainter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TinySkiaPainter")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl DecorationPainter for TinySkiaPainter<'_> {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.fill_shape(&rect, color);
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Tiny-Skia works in f32; decoration stroke widths are small."
    )]
    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        let Some(path) = to_path(&line) else {
            return;
        };
        self.set_color(color);
        let stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &self.paint, &stroke, self.transform, None);
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Tiny-Skia works in f32; truncation is acceptable for pixel coordinates."
    )]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = tiny_skia::Rect::from_ltrb(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.x1 as f32,
            rect.y1 as f32,
        ) else {
            return;
        };
        self.set_color(color);
        self.pixmap.fill_rect(rect, &self.paint, self.transform, None);
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        self.fill_shape(&ellipse, color);
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.fill_shape(path, color);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Tiny-Skia works in f32; truncation is acceptable for pixel coordinates."
)]
fn to_path(shape: &impl Shape) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32);
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Tiny-Skia works in f32; truncation is acceptable for transforms."
)]
fn to_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}
