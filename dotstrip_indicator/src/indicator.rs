// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller pairing style, paging state, and padding.

use kurbo::{Insets, Size};

use crate::{
    Frame, IndicatorStyle, PagerState, Paint, ScrollPhase, SizeSpec, compute_frame, measure_size,
};

/// Host-facing paging indicator.
///
/// This type owns the style and state records and forwards host callbacks
/// into the pure measurement and frame functions. It performs no drawing
/// and holds no platform resources; hosts translate each returned [`Frame`]
/// into actual draw calls.
///
/// Setters are plain field updates and trigger no computation on their own;
/// measurement and frame building happen when the host asks. All methods
/// are synchronous and O(count). The type is plain data: hosts that take
/// events on more than one thread are responsible for serializing access.
#[derive(Clone, Debug, PartialEq)]
pub struct PageIndicator {
    style: IndicatorStyle,
    state: PagerState,
    padding: Insets,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new(IndicatorStyle::default())
    }
}

impl PageIndicator {
    /// Creates an indicator with the given style and an empty page set.
    #[must_use]
    pub fn new(style: IndicatorStyle) -> Self {
        Self {
            style,
            state: PagerState::new(0),
            padding: Insets::ZERO,
        }
    }

    /// Returns the current style.
    #[must_use]
    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// Returns a mutable reference to the style for batched edits.
    pub fn style_mut(&mut self) -> &mut IndicatorStyle {
        &mut self.style
    }

    /// Replaces the style wholesale.
    pub fn set_style(&mut self, style: IndicatorStyle) {
        self.style = style;
    }

    /// Returns the paging state.
    #[must_use]
    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Returns a mutable reference to the paging state.
    pub fn state_mut(&mut self) -> &mut PagerState {
        &mut self.state
    }

    /// Returns the padding around the strip.
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Sets the padding around the strip.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Sets the marker radius.
    pub fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius.is_finite(), "radius must be finite; got {radius:?}");
        self.style.radius = radius;
    }

    /// Sets the edge-to-edge marker spacing.
    pub fn set_spacing(&mut self, spacing: f64) {
        debug_assert!(spacing.is_finite(), "spacing must be finite; got {spacing:?}");
        self.style.spacing = spacing;
    }

    /// Sets the stroke ring width. `0.0` disables the ring.
    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        debug_assert!(
            stroke_width.is_finite(),
            "stroke width must be finite; got {stroke_width:?}"
        );
        self.style.stroke_width = stroke_width;
    }

    /// Sets the paint for unselected marker fills.
    pub fn set_normal_paint(&mut self, paint: Paint) {
        self.style.normal = paint;
    }

    /// Sets the paint for the selected marker.
    pub fn set_selected_paint(&mut self, paint: Paint) {
        self.style.selected = paint;
    }

    /// Sets the paint for stroke rings.
    pub fn set_stroke_paint(&mut self, paint: Paint) {
        self.style.stroke = paint;
    }

    /// Sets whether a one-page strip still renders its marker.
    pub fn set_single_show(&mut self, single_show: bool) {
        self.style.single_show = single_show;
    }

    /// Sets the page count.
    pub fn set_count(&mut self, count: usize) {
        self.state.set_count(count);
    }

    /// Sets whether fractional scroll progress moves the indicator.
    pub fn set_slideable(&mut self, slideable: bool) {
        self.state.slideable = slideable;
    }

    /// Handles a discrete page-selected event.
    pub fn page_selected(&mut self, position: usize) {
        self.state.page_selected(position);
    }

    /// Handles a fractional page-scrolled event; no-op unless slideable.
    pub fn page_scrolled(&mut self, position: usize, offset: f64) {
        self.state.page_scrolled(position, offset);
    }

    /// Records the pager's scroll phase.
    pub fn scroll_phase_changed(&mut self, phase: ScrollPhase) {
        self.state.scroll_phase_changed(phase);
    }

    /// Measures both physical axes under the host's constraints.
    #[must_use]
    pub fn measure(&self, width: SizeSpec, height: SizeSpec) -> Size {
        measure_size(&self.style, self.state.count, self.padding, width, height)
    }

    /// Natural size of the strip with no host constraints.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.measure(SizeSpec::Unspecified, SizeSpec::Unspecified)
    }

    /// Computes the draw list for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        compute_frame(&self.state, &self.style, self.padding)
    }

    /// The page index to persist across a lifecycle boundary.
    #[must_use]
    pub fn saved_position(&self) -> usize {
        self.state.current
    }

    /// Restores a persisted page index; the fractional offset restarts at
    /// zero.
    pub fn restore_position(&mut self, position: usize) {
        self.state.restore(position);
    }
}

#[cfg(test)]
mod tests {
    use super::PageIndicator;
    use crate::{IndicatorStyle, Paint, SizeSpec};
    use kurbo::Insets;

    fn indicator() -> PageIndicator {
        let mut indicator = PageIndicator::new(IndicatorStyle {
            radius: 10.0,
            spacing: 5.0,
            ..IndicatorStyle::default()
        });
        indicator.set_count(3);
        indicator
    }

    #[test]
    fn events_drive_the_frame() {
        let mut indicator = indicator();
        indicator.page_scrolled(1, 0.5);

        let frame = indicator.frame();
        assert_eq!(frame.markers.len(), 3);
        assert_eq!(frame.selected.expect("opaque selected paint").center.x, 47.5);
    }

    #[test]
    fn non_slideable_indicators_only_move_on_selection() {
        let mut indicator = indicator();
        indicator.set_slideable(false);

        indicator.page_scrolled(1, 0.5);
        assert_eq!(indicator.state().current, 0);

        indicator.page_selected(2);
        assert_eq!(indicator.state().current, 2);
        assert_eq!(indicator.state().offset, 0.0);
    }

    #[test]
    fn measure_maps_constraints_through_padding() {
        let mut indicator = indicator();
        indicator.set_padding(Insets::uniform(2.0));

        let size = indicator.measure(SizeSpec::Unspecified, SizeSpec::AtMost(20.0));
        // Long: 2 + 60 + 10 + 2 + 1; short: min(2 + 20 + 2 + 1, 20).
        assert_eq!(size.width, 75.0);
        assert_eq!(size.height, 20.0);

        let exact = indicator.measure(SizeSpec::Exact(40.0), SizeSpec::Exact(12.0));
        assert_eq!((exact.width, exact.height), (40.0, 12.0));
    }

    #[test]
    fn style_setters_are_plain_field_updates() {
        let mut indicator = indicator();
        indicator.set_radius(6.0);
        indicator.set_spacing(1.5);
        indicator.set_stroke_width(2.0);
        indicator.set_normal_paint(Paint::new(0x11223344));
        indicator.set_single_show(false);

        let style = indicator.style();
        assert_eq!(style.radius, 6.0);
        assert_eq!(style.spacing, 1.5);
        assert_eq!(style.stroke_width, 2.0);
        assert_eq!(style.normal, Paint::new(0x11223344));
        assert!(!style.single_show);
    }

    #[test]
    fn only_the_position_survives_a_restart() {
        let mut indicator = indicator();
        indicator.page_scrolled(2, 0.7);

        let saved = indicator.saved_position();
        assert_eq!(saved, 2);

        let mut restored = indicator.clone();
        restored.restore_position(saved);
        assert_eq!(restored.state().current, 2);
        assert_eq!(restored.state().offset, 0.0);
    }
}
