// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Fixed dimensions used when painting decorations, in layout units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecorationMetrics {
    /// How far a background extends above and below its segment rectangle.
    pub background_inset: f64,
    /// Distance from the bottom of a segment rectangle to the underline.
    pub underline_offset: f64,
    /// Stroke width of the underline.
    pub underline_width: f64,
    /// Side length of the square bounding an underline marker.
    pub marker_size: f64,
}

impl Default for DecorationMetrics {
    fn default() -> Self {
        Self {
            background_inset: 1.0,
            underline_offset: 2.0,
            underline_width: 1.5,
            marker_size: 5.0,
        }
    }
}
