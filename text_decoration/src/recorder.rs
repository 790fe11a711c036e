// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred decoration drawing.
//!
//! Draw calls are recorded into a [`Recorder`] rather than executed immediately. The recorded
//! commands can be inspected (the test suite asserts on them) or replayed into any other
//! [`DecorationPainter`] later.

use alloc::vec::Vec;
use core::ops::Range;

use peniko::Color;
use peniko::kurbo::{BezPath, Ellipse, Line, Rect, RoundedRect};

use crate::DecorationPainter;

/// A single recorded draw call.
///
/// The shape variants correspond 1:1 to the methods on [`DecorationPainter`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a rounded rectangle.
    FillRoundedRect {
        /// The shape to fill.
        rect: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// Stroke a line.
    StrokeLine {
        /// The line to stroke.
        line: Line,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Fill a rectangle.
    FillRect {
        /// The rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Fill an ellipse.
    FillEllipse {
        /// The ellipse to fill.
        ellipse: Ellipse,
        /// Fill color.
        color: Color,
    },
    /// Fill a closed path.
    FillPath {
        /// The path to fill.
        path: BezPath,
        /// Fill color.
        color: Color,
    },
    /// The fragment's own glyphs for the given document range were drawn.
    ///
    /// Never produced by the decoration routines; hosts push it from their text drawing
    /// callback so that the relative order of decorations and text can be checked.
    Text(Range<usize>),
}

/// Records draw commands in the order they are issued.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Removes and returns all recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Forgets all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replays the recorded commands into `painter`.
    ///
    /// [`DrawCommand::Text`] markers are skipped.
    pub fn replay<P: DecorationPainter + ?Sized>(&self, painter: &mut P) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRoundedRect { rect, color } => {
                    painter.fill_rounded_rect(*rect, *color);
                }
                DrawCommand::StrokeLine { line, width, color } => {
                    painter.stroke_line(*line, *width, *color);
                }
                DrawCommand::FillRect { rect, color } => painter.fill_rect(*rect, *color),
                DrawCommand::FillEllipse { ellipse, color } => {
                    painter.fill_ellipse(*ellipse, *color);
                }
                DrawCommand::FillPath { path, color } => painter.fill_path(path, *color),
                DrawCommand::Text(_) => {}
            }
        }
    }
}

impl DecorationPainter for Recorder {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.push(DrawCommand::StrokeLine { line, width, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        self.push(DrawCommand::FillEllipse { ellipse, color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }
}
