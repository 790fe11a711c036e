// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A view hosting a single layout fragment.

use alloc::vec::Vec;

use text_decoration::kurbo::{Point, Rect};
use text_decoration::{DecorationPainter, DecorationRenderer, TextFragment};

use crate::GlyphLayer;

/// An attachment character within a fragment and the view that displays it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAttachment<V> {
    /// Document offset of the attachment character.
    pub location: usize,
    /// The view displaying the attachment, if the host has produced one yet.
    pub view: Option<V>,
}

/// Access to the attachments of a layout fragment.
///
/// Attachment frames are only meaningful once the fragment reports
/// [`is_layout_ready`](Self::is_layout_ready).
pub trait AttachmentSource {
    /// Host view handle used for attachments.
    type View: Clone + PartialEq;

    /// Whether the layout engine has finished laying out this fragment.
    fn is_layout_ready(&self) -> bool;

    /// The attachments contained in this fragment.
    fn attachments(&self) -> &[TextAttachment<Self::View>];

    /// The frame of the attachment at `location`, in fragment-local coordinates.
    fn attachment_frame(&self, location: usize) -> Option<Rect>;
}

/// An attachment view inserted into a [`FragmentView`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedAttachment<V> {
    /// The attachment's view.
    pub view: V,
    /// Origin of the view in fragment-local coordinates.
    pub origin: Point,
}

/// Hosts one layout fragment: draws it with its decorations and positions its attachments.
///
/// Attachment layout is explicit and two-phase. After creating the view, and whenever the
/// layout engine may have progressed, the host calls [`poll_layout`](Self::poll_layout); the
/// first call that finds the fragment ready lays out the attachments. Later layout passes go
/// through [`layout_subviews`](Self::layout_subviews).
///
/// The view also owns the fragment's per-glyph layers, if the host uses them, and keeps their
/// content scale in step with the display the view is shown on.
pub struct FragmentView<F: AttachmentSource> {
    fragment: F,
    frame: Rect,
    subviews: Vec<PlacedAttachment<F::View>>,
    awaiting_layout: bool,
    glyph_layers: Vec<GlyphLayer>,
    content_scale: f64,
}

impl<F: AttachmentSource> FragmentView<F> {
    /// Creates a view for `fragment` occupying `frame` in its parent.
    pub fn new(fragment: F, frame: Rect) -> Self {
        Self {
            fragment,
            frame,
            subviews: Vec::new(),
            awaiting_layout: true,
            glyph_layers: Vec::new(),
            content_scale: 1.0,
        }
    }

    /// The hosted fragment.
    pub fn fragment(&self) -> &F {
        &self.fragment
    }

    /// The view's frame in its parent.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Moves or resizes the view.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Scale factor of the display the view is shown on.
    pub fn content_scale(&self) -> f64 {
        self.content_scale
    }

    /// Updates the display scale of the view and every glyph layer.
    ///
    /// Call this when the view moves to another display or the display's scale changes. Returns
    /// `true` if the scale changed, in which case the glyph layers need to be rasterised again.
    pub fn set_content_scale(&mut self, scale: f64) -> bool {
        if scale == self.content_scale {
            return false;
        }
        log::debug!("content scale {} -> {scale}", self.content_scale);
        self.content_scale = scale;
        for layer in &mut self.glyph_layers {
            layer.content_scale = scale;
        }
        true
    }

    /// The glyph layers hosted by this view.
    pub fn glyph_layers(&self) -> &[GlyphLayer] {
        &self.glyph_layers
    }

    /// Replaces the hosted glyph layers, adopting the view's content scale.
    pub fn set_glyph_layers(&mut self, layers: impl IntoIterator<Item = GlyphLayer>) {
        let scale = self.content_scale;
        self.glyph_layers.clear();
        self.glyph_layers
            .extend(layers.into_iter().map(|layer| GlyphLayer {
                content_scale: scale,
                ..layer
            }));
    }

    /// The attachment views inserted so far, in insertion order.
    pub fn attachments(&self) -> &[PlacedAttachment<F::View>] {
        &self.subviews
    }

    /// Whether the fragment's layout is available.
    pub fn is_ready(&self) -> bool {
        self.fragment.is_layout_ready()
    }

    /// Lays out attachments the first time the fragment is found ready.
    ///
    /// Returns `true` if attachments were laid out by this call.
    pub fn poll_layout(&mut self) -> bool {
        if !self.awaiting_layout || !self.is_ready() {
            return false;
        }
        self.awaiting_layout = false;
        self.layout_attachments();
        true
    }

    /// The view's layout pass; always repositions attachments.
    pub fn layout_subviews(&mut self) {
        self.layout_attachments();
    }

    /// Positions every attachment view at the origin of its attachment frame.
    ///
    /// Views are inserted the first time they are seen and moved afterwards. Attachments
    /// without a view, or without a frame, are skipped. Returns the number of views positioned.
    pub fn layout_attachments(&mut self) -> usize {
        let mut placed = 0;
        for attachment in self.fragment.attachments() {
            let Some(view) = &attachment.view else {
                continue;
            };
            let Some(frame) = self.fragment.attachment_frame(attachment.location) else {
                log::debug!("no frame for attachment at {}", attachment.location);
                continue;
            };
            let origin = frame.origin();
            match self.subviews.iter_mut().find(|sub| sub.view == *view) {
                Some(existing) => existing.origin = origin,
                None => self.subviews.push(PlacedAttachment {
                    view: view.clone(),
                    origin,
                }),
            }
            placed += 1;
        }
        placed
    }
}

impl<F: AttachmentSource> core::fmt::Debug for FragmentView<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FragmentView")
            .field("frame", &self.frame)
            .field("attachments", &self.subviews.len())
            .field("awaiting_layout", &self.awaiting_layout)
            .field("glyph_layers", &self.glyph_layers.len())
            .field("content_scale", &self.content_scale)
            .finish_non_exhaustive()
    }
}

impl<F: AttachmentSource + TextFragment> FragmentView<F> {
    /// The view's draw callback.
    ///
    /// `dirty` is the region being redrawn, in the view's coordinates. Background decorations
    /// are drawn first, then `draw_text` paints the fragment's glyphs, then underlines.
    pub fn draw<P>(
        &self,
        dirty: Rect,
        painter: &mut P,
        decorations: &DecorationRenderer,
        draw_text: impl FnOnce(&F, &mut P),
    ) where
        P: DecorationPainter + ?Sized,
    {
        decorations.draw_decorations(&self.fragment, dirty, painter, |painter| {
            draw_text(&self.fragment, painter);
        });
    }
}
