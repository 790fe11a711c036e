// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorations and their styles.

use core::ops::Range;

use peniko::Color;

/// Shape drawn at the start of each underline segment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    /// A filled circle.
    Circle,
    /// A filled square.
    Square,
    /// A filled triangle pointing towards the end of the line.
    Triangle,
    /// A filled rhombus.
    Diamond,
    /// No marker; only the underline stroke is drawn.
    #[default]
    None,
}

/// How a [`Decoration`] is drawn.
///
/// Backgrounds are painted beneath the text of a fragment, underlines above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecorationStyle {
    /// A filled rounded rectangle behind the text.
    Background,
    /// A straight stroke below the text with a marker at the start of every segment.
    Underline(Marker),
}

impl DecorationStyle {
    /// Returns `true` for [`DecorationStyle::Background`].
    #[allow(
        clippy::trivially_copy_pass_by_ref,
        reason = "Passed directly as a lookup filter over `&DecorationStyle`."
    )]
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Returns `true` for any [`DecorationStyle::Underline`].
    #[allow(
        clippy::trivially_copy_pass_by_ref,
        reason = "Passed directly as a lookup filter over `&DecorationStyle`."
    )]
    pub fn is_underline(&self) -> bool {
        matches!(self, Self::Underline(_))
    }
}

/// A styled annotation attached to a range of document offsets.
///
/// Decorations are immutable once created. The range is half-open; an empty (or reversed)
/// range is accepted but never intersects anything and so is never drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    range: Range<usize>,
    style: DecorationStyle,
    color: Color,
    thickness: f64,
}

impl Decoration {
    /// The thickness given to decorations that do not set one.
    pub const DEFAULT_THICKNESS: f64 = 1.0;

    /// Creates a decoration over `range` with the given `style` and `color`.
    pub fn new(range: Range<usize>, style: DecorationStyle, color: Color) -> Self {
        Self {
            range,
            style,
            color,
            thickness: Self::DEFAULT_THICKNESS,
        }
    }

    /// Creates a background highlight over `range`.
    pub fn background(range: Range<usize>, color: Color) -> Self {
        Self::new(range, DecorationStyle::Background, color)
    }

    /// Creates an underline over `range` with a `marker` at the start of each segment.
    pub fn underline(range: Range<usize>, marker: Marker, color: Color) -> Self {
        Self::new(range, DecorationStyle::Underline(marker), color)
    }

    /// Returns this decoration with the given thickness.
    ///
    /// For backgrounds the thickness is the corner radius of the highlight.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// The document range covered by this decoration.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The first document offset covered by this decoration.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The drawing style.
    pub fn style(&self) -> DecorationStyle {
        self.style
    }

    /// The marker drawn by an underline, or `None` for backgrounds.
    pub fn marker(&self) -> Option<Marker> {
        match self.style {
            DecorationStyle::Background => None,
            DecorationStyle::Underline(marker) => Some(marker),
        }
    }

    /// Fill and stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Corner radius for backgrounds.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns `true` if the range covers no offsets.
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Returns the part of this decoration's range that lies within `range`, if it is non-empty.
    pub fn intersection(&self, range: &Range<usize>) -> Option<Range<usize>> {
        let start = self.range.start.max(range.start);
        let end = self.range.end.min(range.end);
        (start < end).then_some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::{Decoration, DecorationStyle, Marker};
    use peniko::color::palette::css;

    #[test]
    fn clips_to_fragment_on_every_side() {
        let fragment = 10..20;
        let containing = Decoration::background(0..30, css::YELLOW);
        let contained = Decoration::background(12..15, css::YELLOW);
        let leading = Decoration::background(5..12, css::YELLOW);
        let trailing = Decoration::background(18..25, css::YELLOW);
        assert_eq!(containing.intersection(&fragment), Some(10..20));
        assert_eq!(contained.intersection(&fragment), Some(12..15));
        assert_eq!(leading.intersection(&fragment), Some(10..12));
        assert_eq!(trailing.intersection(&fragment), Some(18..20));
    }

    #[test]
    fn touching_ranges_do_not_intersect() {
        let fragment = 10..20;
        let before = Decoration::background(0..10, css::YELLOW);
        let after = Decoration::background(20..30, css::YELLOW);
        assert_eq!(before.intersection(&fragment), None);
        assert_eq!(after.intersection(&fragment), None);
    }

    #[test]
    fn empty_range_never_intersects() {
        let empty = Decoration::underline(12..12, Marker::Circle, css::RED);
        assert!(empty.is_empty());
        assert_eq!(empty.intersection(&(0..100)), None);
    }

    #[test]
    fn marker_follows_style() {
        let background = Decoration::background(0..1, css::YELLOW);
        let underline = Decoration::underline(0..1, Marker::Diamond, css::RED);
        assert_eq!(background.marker(), None);
        assert_eq!(underline.marker(), Some(Marker::Diamond));
        assert!(background.style().is_background());
        assert_eq!(underline.style(), DecorationStyle::Underline(Marker::Diamond));
    }
}
