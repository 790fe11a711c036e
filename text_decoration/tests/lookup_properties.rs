// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for decoration lookup.

use core::ops::Range;

use proptest::prelude::*;
use text_decoration::peniko::color::palette::css;
use text_decoration::{Decoration, DecorationSet, DecorationStyle, Marker};

fn decoration() -> impl Strategy<Value = Decoration> {
    (0_usize..200, 0_usize..40, any::<bool>()).prop_map(|(start, len, background)| {
        if background {
            Decoration::background(start..start + len, css::YELLOW)
        } else {
            Decoration::underline(start..start + len, Marker::Circle, css::RED)
        }
    })
}

fn fragment() -> impl Strategy<Value = Range<usize>> {
    (0_usize..220, 0_usize..60).prop_map(|(start, len)| start..start + len)
}

fn brute_force(
    set: &DecorationSet,
    range: &Range<usize>,
    filter: impl Fn(&DecorationStyle) -> bool,
) -> Vec<(Range<usize>, Range<usize>)> {
    set.iter()
        .filter(|d| filter(&d.style()))
        .filter_map(|d| {
            let start = d.start().max(range.start);
            let end = d.range().end.min(range.end);
            (start < end).then(|| (d.range(), start..end))
        })
        .collect()
}

proptest! {
    /// Lookup returns exactly the intersecting, filter-passing decorations in set order.
    #[test]
    fn lookup_matches_brute_force(
        decorations in prop::collection::vec(decoration(), 0..40),
        range in fragment(),
        backgrounds_only in any::<bool>(),
    ) {
        let set: DecorationSet = decorations.into_iter().collect();
        let filter = |style: &DecorationStyle| !backgrounds_only || style.is_background();
        let found: Vec<_> = set
            .intersecting(range.clone(), filter)
            .map(|hit| (hit.decoration.range(), hit.range))
            .collect();
        prop_assert_eq!(found, brute_force(&set, &range, filter));
    }

    /// Results come out in ascending start order.
    #[test]
    fn lookup_is_sorted(
        decorations in prop::collection::vec(decoration(), 0..40),
        range in fragment(),
    ) {
        let set: DecorationSet = decorations.into_iter().collect();
        let starts: Vec<usize> = set
            .intersecting(range, |_| true)
            .map(|hit| hit.decoration.start())
            .collect();
        prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Decorations starting at or after the fragment end are never examined.
    #[test]
    fn lookup_stops_at_fragment_end(
        decorations in prop::collection::vec(decoration(), 0..40),
        range in fragment(),
    ) {
        let set: DecorationSet = decorations.into_iter().collect();
        let mut examined = 0_usize;
        let hits = set
            .intersecting(range.clone(), |_| {
                examined += 1;
                true
            })
            .count();
        let before_end = set.iter().filter(|d| d.start() < range.end).count();
        prop_assert_eq!(examined, before_end);
        prop_assert!(hits <= before_end);
    }

    /// Clipped ranges are never empty and lie within both the decoration and the fragment.
    #[test]
    fn clipped_ranges_are_contained(
        decorations in prop::collection::vec(decoration(), 0..40),
        range in fragment(),
    ) {
        let set: DecorationSet = decorations.into_iter().collect();
        for hit in set.intersecting(range.clone(), |_| true) {
            prop_assert!(hit.range.start < hit.range.end);
            prop_assert!(hit.range.start >= range.start && hit.range.end <= range.end);
            let own = hit.decoration.range();
            prop_assert!(hit.range.start >= own.start && hit.range.end <= own.end);
        }
    }
}
