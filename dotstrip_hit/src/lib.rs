// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotstrip Hit: precise hit testing over paging-indicator geometry.
//!
//! Hosts that support tapping a marker to jump to its page need "which
//! marker is at this point?" answered in the same geometry the sequencer
//! draws with. This crate recomputes nominal marker circles from the style
//! and scores candidates by distance to their centers, so overlapping
//! markers (negative spacing) resolve to the nearest one.
//!
//! Markers are tested at their raw radius regardless of which layers are
//! visible: a marker whose fill is transparent is still a tap target.
//!
//! ```rust
//! use dotstrip_hit::{hit_marker, TapParams};
//! use dotstrip_indicator::IndicatorStyle;
//! use kurbo::{Insets, Point};
//!
//! let style = IndicatorStyle {
//!     radius: 10.0,
//!     spacing: 5.0,
//!     ..IndicatorStyle::default()
//! };
//!
//! // Marker centers sit at x = 10, 35, 60 for a three-page strip.
//! let tap = Point::new(36.0, 10.0);
//! let hit = hit_marker(&style, 3, Insets::ZERO, tap, &TapParams::default());
//! assert_eq!(hit.expect("tap lands on the middle marker").index, 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use dotstrip_indicator::{IndicatorStyle, marker_center};
use kurbo::{Insets, Point};

/// Parameters controlling marker hit tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapParams {
    /// Tolerance in local units added to each marker's nominal radius.
    ///
    /// Touch hosts typically inflate tap targets well past the visual
    /// circle.
    pub tolerance: f64,
}

/// A resolved marker hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerHit {
    /// Index of the marker, and therefore of the page it stands for.
    pub index: usize,
    /// Distance from the point to the nominal circle: `0.0` inside, how far
    /// the radius was exceeded otherwise. Lower is a closer hit.
    pub distance: f64,
}

/// Distance from `pt` to the nearest marker center, with its index.
fn nearest_center(
    style: &IndicatorStyle,
    count: usize,
    padding: Insets,
    pt: Point,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for index in 0..count {
        let distance = marker_center(style, padding, index).distance(pt);
        if best.is_none_or(|(_, current)| distance < current) {
            best = Some((index, distance));
        }
    }
    best
}

fn to_hit(style: &IndicatorStyle, index: usize, center_distance: f64) -> MarkerHit {
    MarkerHit {
        index,
        distance: (center_distance - style.radius).max(0.0),
    }
}

/// Finds the marker whose nominal circle contains `pt`, within tolerance.
///
/// Returns `None` when the point misses every marker. When circles overlap,
/// the marker with the nearest center wins.
#[must_use]
pub fn hit_marker(
    style: &IndicatorStyle,
    count: usize,
    padding: Insets,
    pt: Point,
    params: &TapParams,
) -> Option<MarkerHit> {
    let limit = style.radius + params.tolerance;
    nearest_center(style, count, padding, pt)
        .filter(|&(_, distance)| distance <= limit)
        .map(|(index, distance)| to_hit(style, index, distance))
}

/// Finds the marker with the nearest center, regardless of distance.
///
/// Useful for snapping a release to a page when the pointer ends up between
/// markers. Returns `None` only for an empty strip.
#[must_use]
pub fn nearest_marker(
    style: &IndicatorStyle,
    count: usize,
    padding: Insets,
    pt: Point,
) -> Option<MarkerHit> {
    nearest_center(style, count, padding, pt)
        .map(|(index, distance)| to_hit(style, index, distance))
}
