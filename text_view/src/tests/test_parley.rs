// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use parley::fontique::{Blob, Collection, CollectionOptions, SourceCache};
use parley::layout::Layout;
use parley::style::{FontStack, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, LayoutContext};
use text_decoration::kurbo::{Line, Rect};
use text_decoration::peniko::color::palette::css;
use text_decoration::{
    Decoration, DecorationRenderer, DocumentRange, DrawCommand, ErrorKind, Marker, Recorder,
    TextFragment,
};

use crate::ParleyFragment;

const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";
const FONT_NAME: &str = "DejaVu Sans Mono";

fn font_context() -> FontContext {
    let mut collection = Collection::new(CollectionOptions {
        shared: false,
        system_fonts: false,
    });
    let font_data = std::fs::read(FONT_PATH)
        .unwrap_or_else(|err| panic!("failed to read {FONT_PATH}: {err}"));
    collection.register_fonts(Blob::new(Arc::new(font_data)), None);
    collection
        .family_id(FONT_NAME)
        .unwrap_or_else(|| panic!("{FONT_NAME} font not found"));
    FontContext {
        collection,
        source_cache: SourceCache::default(),
    }
}

/// Lays out `text` in 10 px monospace, wrapped at `width`.
fn build_layout(font_cx: &mut FontContext, text: &str, width: f32) -> Layout<()> {
    let mut layout_cx = LayoutContext::new();
    let mut builder = layout_cx.ranged_builder(font_cx, text, 1.0, true);
    builder.push_default(StyleProperty::FontStack(FontStack::from(FONT_NAME)));
    builder.push_default(StyleProperty::FontSize(10.0));
    let mut layout: Layout<()> = builder.build(text);
    let width = Some(width);
    layout.break_all_lines(width);
    layout.align(width, Alignment::Start, AlignmentOptions::default());
    layout
}

fn segments(fragment: &ParleyFragment<'_, ()>, range: DocumentRange) -> Vec<Rect> {
    let mut rects = Vec::new();
    fragment
        .for_each_segment(range, &mut |rect| rects.push(rect))
        .unwrap();
    rects
}

#[test]
fn fragment_reports_document_placement() {
    let layout = Layout::<()>::new();
    let fragment = ParleyFragment::new(&layout, "hello world", 6..11, 20.0);
    assert_eq!(fragment.document_range(), 6..11);
    assert_eq!(fragment.document_len(), 11);
    assert_eq!(fragment.text(), "world");
    assert_eq!(fragment.layout_frame(), Rect::new(0.0, 20.0, 0.0, 20.0));

    let debug = alloc::format!("{fragment:?}");
    assert!(debug.starts_with("ParleyFragment"), "{debug}");
    assert!(debug.contains("range: 6..11"), "{debug}");
    assert!(debug.contains("y_offset: 20.0"), "{debug}");
}

#[test]
fn ranges_outside_fragment_are_unavailable() {
    let layout = Layout::<()>::new();
    let fragment = ParleyFragment::new(&layout, "hello world", 6..11, 0.0);
    let range = DocumentRange::new(0..3, 11).unwrap();
    let err = fragment.for_each_segment(range, &mut |_| {}).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SegmentUnavailable);
    assert_eq!(err.range(), 0..3);
}

#[test]
fn ranges_splitting_a_character_are_unavailable() {
    let layout = Layout::<()>::new();
    // `é` occupies bytes 1..3.
    let fragment = ParleyFragment::new(&layout, "héllo", 0..6, 0.0);
    let range = DocumentRange::new(0..2, 6).unwrap();
    let err = fragment.for_each_segment(range, &mut |_| {}).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SegmentUnavailable);
}

#[test]
fn empty_range_has_no_segments() {
    let layout = Layout::<()>::new();
    let fragment = ParleyFragment::new(&layout, "hello", 0..5, 0.0);
    let mut segments = 0;
    fragment
        .for_each_segment(DocumentRange::new(2..2, 5).unwrap(), &mut |_| segments += 1)
        .unwrap();
    assert_eq!(segments, 0);
}

#[test]
fn wrapped_range_yields_one_rect_per_line() {
    let mut font_cx = font_context();
    let text = "aaaa bbbb cccc";
    // Each word plus its space is about 30 px wide, so every word gets its own line.
    let layout = build_layout(&mut font_cx, text, 40.0);
    assert_eq!(layout.len(), 3, "expected three lines");

    let fragment = ParleyFragment::new(&layout, text, 0..text.len(), 0.0);
    let rects = segments(&fragment, DocumentRange::new(2..12, text.len()).unwrap());
    assert_eq!(rects.len(), 3, "one rect per line: {rects:?}");
    assert!(rects[0].x0 > 0.0, "first rect starts inside the first line");
    assert_eq!(rects[1].x0, 0.0);
    assert_eq!(rects[2].x0, 0.0);
    for pair in rects.windows(2) {
        assert!(pair[0].y0 < pair[1].y0, "lines are stacked: {rects:?}");
        assert!(pair[0].y1 <= pair[1].y0 + 1e-3, "lines do not overlap: {rects:?}");
    }
}

#[test]
fn rects_are_shifted_by_y_offset() {
    let mut font_cx = font_context();
    let text = "aaaa bbbb cccc";
    let layout = build_layout(&mut font_cx, text, 40.0);
    let range = DocumentRange::new(0..text.len(), text.len()).unwrap();

    let at_top = ParleyFragment::new(&layout, text, 0..text.len(), 0.0);
    let below = ParleyFragment::new(&layout, text, 0..text.len(), 37.5);
    let top_rects = segments(&at_top, range);
    let shifted = segments(&below, range);
    assert_eq!(top_rects.len(), shifted.len());
    for (top, moved) in top_rects.iter().zip(&shifted) {
        assert_eq!(moved.x0, top.x0);
        assert_eq!(moved.x1, top.x1);
        assert_eq!(moved.y0, top.y0 + 37.5);
        assert_eq!(moved.y1, top.y1 + 37.5);
    }
    assert_eq!(below.layout_frame().y0, 37.5);
}

#[test]
fn decorations_over_second_paragraph_are_fragment_local() {
    let mut font_cx = font_context();
    let document = "first\naaaa bbbb cccc";
    let paragraph = 6..document.len();
    let layout = build_layout(&mut font_cx, &document[paragraph.clone()], 40.0);
    let fragment = ParleyFragment::new(&layout, document, paragraph, 20.0);

    let first_word = segments(&fragment, DocumentRange::new(6..10, document.len()).unwrap());
    assert_eq!(first_word.len(), 1);
    let segment = first_word[0];
    assert_eq!(segment.y0, 20.0, "segments are in document coordinates");

    let mut renderer = DecorationRenderer::new();
    renderer.set_decorations([Decoration::underline(6..10, Marker::None, css::RED)]);
    let mut recorder = Recorder::new();
    let dirty = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    renderer.draw_decorations(&fragment, dirty, &mut recorder, |_| {});

    let y = (segment.y1 - 20.0) + 2.0;
    assert_eq!(
        recorder.commands(),
        [DrawCommand::StrokeLine {
            line: Line::new((segment.x0, y), (segment.x1, y)),
            width: 1.5,
            color: css::RED,
        }]
    );
    assert!(y < 20.0, "stroke sits under the first line, not 20 px down");
}
