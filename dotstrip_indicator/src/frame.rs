// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame marker layout: the circles a renderer must draw right now.

use kurbo::{Insets, Point};
use smallvec::SmallVec;

use crate::{IndicatorStyle, LayerFlags, Orientation, PagerState};

/// Which style paint a draw command uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// Unselected marker fill.
    Normal,
    /// Stroke ring around an unselected marker.
    Stroke,
    /// The interpolated selected marker.
    Selected,
}

/// A single circle to draw, in physical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerDraw {
    /// Circle center, with axis mapping already applied.
    pub center: Point,
    /// Circle radius for this layer.
    pub radius: f64,
    /// Which paint the renderer should use.
    pub role: MarkerRole,
}

/// Everything a renderer must draw for one frame.
///
/// Produced fresh on every draw request; the computation is O(count), so
/// nothing is cached between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Per-marker draws in index order, fill before ring for each marker.
    pub markers: SmallVec<[MarkerDraw; 8]>,
    /// The selected marker, drawn over the normal markers.
    pub selected: Option<MarkerDraw>,
}

impl Frame {
    /// Returns `true` if nothing should be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.selected.is_none()
    }

    /// All draws in paint order: normal markers first, then the selected
    /// marker on top.
    pub fn draws(&self) -> impl Iterator<Item = &MarkerDraw> {
        self.markers.iter().chain(self.selected.as_ref())
    }
}

/// Long- and short-axis center offsets of the first marker: one radius in
/// from the before-edge padding on each axis.
fn axis_offsets(style: &IndicatorStyle, padding: Insets) -> (f64, f64) {
    match style.orientation {
        Orientation::Horizontal => (style.radius + padding.x0, style.radius + padding.y0),
        Orientation::Vertical => (style.radius + padding.y0, style.radius + padding.x0),
    }
}

/// Center of marker `index`, padding applied and axes mapped.
#[must_use]
pub fn marker_center(style: &IndicatorStyle, padding: Insets, index: usize) -> Point {
    let (long_offset, short_offset) = axis_offsets(style, padding);
    let long = long_offset + (2.0 * style.radius + style.spacing) * index as f64;
    style.orientation.point(long, short_offset)
}

/// Center of the selected marker at fractional progress `position + offset`.
///
/// An affine function of `offset`, so the selected marker moves continuously
/// with scroll progress and lands exactly on the next marker's center as the
/// offset wraps from just under one back to zero.
#[must_use]
pub fn selected_center(
    style: &IndicatorStyle,
    padding: Insets,
    position: usize,
    offset: f64,
) -> Point {
    let (long_offset, short_offset) = axis_offsets(style, padding);
    let long = long_offset + (2.0 * style.radius + style.spacing) * (position as f64 + offset);
    style.orientation.point(long, short_offset)
}

/// Computes the draw list for one frame of the indicator.
///
/// An empty strip, or a one-page strip with `single_show` disabled, yields
/// an empty frame; this is the only suppression rule. Otherwise every marker
/// emits its layers independently:
///
/// - a fill at [`IndicatorStyle::ring_radius`] when the normal paint is
///   visible,
/// - a stroke ring at the raw radius whenever a stroke width is configured,
///   even under a transparent normal paint,
/// - plus one selected marker at the raw radius (no ring) when the selected
///   paint is visible.
#[must_use]
pub fn compute_frame(state: &PagerState, style: &IndicatorStyle, padding: Insets) -> Frame {
    let mut frame = Frame::default();
    if state.count == 0 || (state.count == 1 && !style.single_show) {
        return frame;
    }

    let layers = style.layers();
    let ring_radius = style.ring_radius();

    for index in 0..state.count {
        let center = marker_center(style, padding, index);
        if layers.contains(LayerFlags::NORMAL_FILL) {
            frame.markers.push(MarkerDraw {
                center,
                radius: ring_radius,
                role: MarkerRole::Normal,
            });
        }
        if layers.contains(LayerFlags::STROKE_RING) {
            frame.markers.push(MarkerDraw {
                center,
                radius: style.radius,
                role: MarkerRole::Stroke,
            });
        }
    }

    if layers.contains(LayerFlags::SELECTED) {
        frame.selected = Some(MarkerDraw {
            center: selected_center(style, padding, state.current, state.offset),
            radius: style.radius,
            role: MarkerRole::Selected,
        });
    }

    frame
}
