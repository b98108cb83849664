// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-agnostic measurement of the space a marker strip needs.

use kurbo::{Insets, Size};

use crate::{IndicatorStyle, Orientation};

/// Measurement axis, relative to the strip's layout direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The direction markers advance in.
    Long,
    /// Perpendicular to the layout direction; all markers share one
    /// position here, so its extent is count-independent.
    Short,
}

/// Size constraint supplied by the host for one physical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeSpec {
    /// The host dictates the size; content is ignored.
    Exact(f64),
    /// The content may use up to this much space.
    AtMost(f64),
    /// No constraint; the natural content size wins.
    Unspecified,
}

impl SizeSpec {
    /// Resolves this constraint against a natural content size.
    #[must_use]
    pub fn resolve(self, natural: f64) -> f64 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(size) => natural.min(size),
            Self::Unspecified => natural,
        }
    }
}

/// Natural content extent of the strip along `axis`.
///
/// This is the minimum space needed to draw `count` markers without
/// clipping, padding included. The trailing `1.0` is slack for float
/// rounding at draw time, so the last marker never clips by a fraction of
/// a pixel.
#[must_use]
pub fn natural_extent(
    axis: Axis,
    style: &IndicatorStyle,
    count: usize,
    padding_before: f64,
    padding_after: f64,
) -> f64 {
    match axis {
        Axis::Long => {
            let gaps = count.saturating_sub(1) as f64;
            padding_before
                + 2.0 * style.radius * count as f64
                + style.spacing * gaps
                + padding_after
                + 1.0
        }
        Axis::Short => padding_before + 2.0 * style.radius + padding_after + 1.0,
    }
}

/// Measures one axis under the host's constraint.
#[must_use]
pub fn measure_axis(
    axis: Axis,
    spec: SizeSpec,
    style: &IndicatorStyle,
    count: usize,
    padding_before: f64,
    padding_after: f64,
) -> f64 {
    spec.resolve(natural_extent(axis, style, count, padding_before, padding_after))
}

/// Measures both physical axes, mapping width and height onto the long and
/// short axes according to the style's orientation.
#[must_use]
pub fn measure_size(
    style: &IndicatorStyle,
    count: usize,
    padding: Insets,
    width: SizeSpec,
    height: SizeSpec,
) -> Size {
    match style.orientation {
        Orientation::Horizontal => Size::new(
            measure_axis(Axis::Long, width, style, count, padding.x0, padding.x1),
            measure_axis(Axis::Short, height, style, count, padding.y0, padding.y1),
        ),
        Orientation::Vertical => Size::new(
            measure_axis(Axis::Short, width, style, count, padding.x0, padding.x1),
            measure_axis(Axis::Long, height, style, count, padding.y0, padding.y1),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, SizeSpec, measure_axis, measure_size, natural_extent};
    use crate::{IndicatorStyle, Orientation};
    use kurbo::Insets;

    fn style(radius: f64, spacing: f64) -> IndicatorStyle {
        IndicatorStyle {
            radius,
            spacing,
            ..IndicatorStyle::default()
        }
    }

    #[test]
    fn long_extent_covers_all_markers() {
        // 5 markers of diameter 20 with 4 gaps of 5, plus the slack pixel.
        let style = style(10.0, 5.0);
        assert_eq!(natural_extent(Axis::Long, &style, 5, 0.0, 0.0), 121.0);
    }

    #[test]
    fn short_extent_is_count_independent() {
        let style = style(10.0, 5.0);
        let one = natural_extent(Axis::Short, &style, 1, 2.0, 3.0);
        let many = natural_extent(Axis::Short, &style, 50, 2.0, 3.0);
        assert_eq!(one, 26.0);
        assert_eq!(one, many);
    }

    #[test]
    fn empty_and_single_strips_measure_sanely() {
        let style = style(10.0, 5.0);
        // No markers: padding plus slack only, never negative.
        assert_eq!(natural_extent(Axis::Long, &style, 0, 0.0, 0.0), 1.0);
        // One marker: the gap term contributes nothing.
        assert_eq!(natural_extent(Axis::Long, &style, 1, 0.0, 0.0), 21.0);
    }

    #[test]
    fn exact_mode_echoes_the_request() {
        let style = style(10.0, 5.0);
        assert_eq!(
            measure_axis(Axis::Long, SizeSpec::Exact(37.0), &style, 5, 0.0, 0.0),
            37.0
        );
        assert_eq!(
            measure_axis(Axis::Short, SizeSpec::Exact(0.0), &style, 5, 9.0, 9.0),
            0.0
        );
    }

    #[test]
    fn at_most_never_exceeds_the_available_size() {
        let style = style(10.0, 5.0);
        assert_eq!(
            measure_axis(Axis::Long, SizeSpec::AtMost(50.0), &style, 5, 0.0, 0.0),
            50.0
        );
        assert_eq!(
            measure_axis(Axis::Long, SizeSpec::AtMost(500.0), &style, 5, 0.0, 0.0),
            121.0
        );
    }

    #[test]
    fn orientation_swaps_which_physical_axis_is_long() {
        let padding = Insets::new(1.0, 2.0, 3.0, 4.0);
        let horizontal = style(5.0, 0.0);
        let size = measure_size(
            &horizontal,
            2,
            padding,
            SizeSpec::Unspecified,
            SizeSpec::Unspecified,
        );
        assert_eq!(size.width, 1.0 + 20.0 + 3.0 + 1.0);
        assert_eq!(size.height, 2.0 + 10.0 + 4.0 + 1.0);

        let vertical = IndicatorStyle {
            orientation: Orientation::Vertical,
            ..horizontal
        };
        let size = measure_size(
            &vertical,
            2,
            padding,
            SizeSpec::Unspecified,
            SizeSpec::Unspecified,
        );
        assert_eq!(size.width, 1.0 + 10.0 + 3.0 + 1.0);
        assert_eq!(size.height, 2.0 + 20.0 + 4.0 + 1.0);
    }
}
