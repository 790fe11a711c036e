// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `text_view`: the view-side glue around [`text_decoration`].
//!
//! This crate holds the pieces of a TextKit-style text view that sit between the layout engine
//! and the screen, expressed as plain geometry so they can be driven by any windowing layer:
//!
//! - [`FragmentView`]: hosts one layout fragment, runs the two-pass decorated draw, and places
//!   text attachment views once the fragment's layout is ready.
//! - [`glyph_layers`]: computes one layer frame per glyph, for hosts that animate glyphs
//!   individually.
//! - [`ScrollGeometry`]: scroll-offset math for a clip view with a gutter overlaid on its
//!   leading edge (page up/down, scroll to a range, center the selection).
//!
//! Scroll computations are logged at `debug` level under the `text_view::scroll` target.
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwarded to [`text_decoration`].
//! - `libm`: Forwarded to [`text_decoration`].
//! - `parley`: Adds [`ParleyFragment`], exposing a [`parley`] layout as a
//!   [`TextFragment`](text_decoration::TextFragment). Implies `std`.

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

mod fragment_view;
pub use fragment_view::{AttachmentSource, FragmentView, PlacedAttachment, TextAttachment};

mod glyph_layers;
pub use glyph_layers::{GlyphLayer, GlyphRun, LineFragment, PositionedGlyph, glyph_layers};

/// Scroll-offset math for a text view with a gutter overlay.
pub mod scroll;
pub use scroll::ScrollGeometry;

#[cfg(feature = "parley")]
mod parley_fragment;
#[cfg(feature = "parley")]
pub use parley_fragment::ParleyFragment;

#[cfg(test)]
mod tests;
