// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Decoration draws range-tagged annotations over laid-out text fragments.
//!
//! A host view keeps a [`DecorationSet`] of [`Decoration`]s, each covering a half-open range of
//! document offsets. When a [`TextFragment`] (typically one paragraph of laid-out text) is
//! redrawn, the [`DecorationRenderer`]:
//!
//! 1. finds the decorations that intersect the fragment's document range, stopping the scan at
//!    the first decoration that starts past the fragment,
//! 2. maps each clipped range to fragment-local segment rectangles through the fragment's own
//!    geometry service, skipping rectangles outside the dirty rectangle, and
//! 3. paints background highlights before the fragment's glyphs and underlines with their
//!    markers after them, through a [`DecorationPainter`].
//!
//! The layout engine itself is not part of this crate; it is reached only through the
//! [`TextFragment`] trait.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//! - `tiny_skia`: Implements [`DecorationPainter`] for a Tiny-Skia pixmap.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! ## Example
//!
//! ```
//! use text_decoration::kurbo::Rect;
//! use text_decoration::peniko::color::palette::css;
//! use text_decoration::{
//!     Decoration, DecorationRenderer, DocumentRange, DrawCommand, Error, Marker, Recorder,
//!     TextFragment,
//! };
//!
//! /// One line of monospace text, 10 units per character.
//! struct Line;
//!
//! impl TextFragment for Line {
//!     fn document_range(&self) -> core::ops::Range<usize> {
//!         0..10
//!     }
//!     fn document_len(&self) -> usize {
//!         10
//!     }
//!     fn layout_frame(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 100.0, 12.0)
//!     }
//!     fn for_each_segment(
//!         &self,
//!         range: DocumentRange,
//!         f: &mut dyn FnMut(Rect),
//!     ) -> Result<(), Error> {
//!         f(Rect::new(range.start() as f64 * 10.0, 0.0, range.end() as f64 * 10.0, 12.0));
//!         Ok(())
//!     }
//! }
//!
//! let mut renderer = DecorationRenderer::new();
//! renderer.set_decorations([
//!     Decoration::underline(3..8, Marker::Circle, css::RED),
//!     Decoration::background(0..5, css::YELLOW),
//! ]);
//!
//! let mut recorder = Recorder::new();
//! renderer.draw_decorations(&Line, Rect::new(0.0, 0.0, 100.0, 12.0), &mut recorder, |_| {});
//! assert!(matches!(recorder.commands()[0], DrawCommand::FillRoundedRect { .. }));
//! ```
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use peniko;
pub use peniko::kurbo;

mod decoration;
mod error;
mod fragment;
mod metrics;
mod range;
mod recorder;
mod render;
mod set;
mod style;

pub mod renderers;

#[cfg(test)]
mod tests;

pub use decoration::{Decoration, DecorationStyle, Marker};
pub use error::{Error, ErrorKind};
pub use fragment::{TextFragment, segment_rects};
pub use metrics::DecorationMetrics;
pub use range::DocumentRange;
pub use recorder::{DrawCommand, Recorder};
pub use render::DecorationRenderer;
pub use set::{DecorationSet, Intersection, Intersections};
pub use style::{DecorationPainter, MarkerShape, draw_background, draw_underline, marker_shape};
