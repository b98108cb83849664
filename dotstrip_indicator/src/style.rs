// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration for a marker strip: orientation, metrics, and paints.

use kurbo::Point;

/// Direction markers are laid out in.
///
/// The axis markers advance along is the *long* axis; the perpendicular axis,
/// which all markers share a position on, is the *short* axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Markers form a row; the long axis maps to `x`.
    #[default]
    Horizontal,
    /// Markers form a column; the long axis maps to `y`.
    Vertical,
}

impl Orientation {
    /// Maps a `(long, short)` coordinate pair onto physical `(x, y)`.
    ///
    /// Every emitted center goes through this single mapping site, so
    /// swapping the orientation swaps `(x, y)` of every marker exactly.
    #[must_use]
    pub const fn point(self, long: f64, short: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(long, short),
            Self::Vertical => Point::new(short, long),
        }
    }
}

/// A solid ARGB8888 color for one marker layer.
///
/// The only channel the sequencer reads is alpha, which decides whether a
/// layer is emitted at all; the full color value is passed through for the
/// renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paint {
    /// Color in `0xAARRGGBB` form.
    pub color: u32,
}

impl Paint {
    /// Creates a paint from an `0xAARRGGBB` color.
    #[must_use]
    pub const fn new(color: u32) -> Self {
        Self { color }
    }

    /// Alpha channel of the color.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.color >> 24) as u8
    }

    /// Returns `true` if draws with this paint are visible at all.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.alpha() > 0
    }
}

bitflags::bitflags! {
    /// Draw layers active under a given style.
    ///
    /// Stroke visibility depends only on the stroke width, never on the
    /// normal fill's alpha: a fully transparent fill still shows its ring.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u8 {
        /// Per-marker fill drawn with the normal paint.
        const NORMAL_FILL = 0b0000_0001;
        /// Per-marker stroke ring drawn with the stroke paint.
        const STROKE_RING = 0b0000_0010;
        /// The interpolated selected marker, drawn with the selected paint.
        const SELECTED    = 0b0000_0100;
    }
}

/// Style for a marker strip, immutable over a single measure/draw cycle.
///
/// Hosts own attribute/theme resolution and write these fields directly.
/// None of them are validated here: negative spacing overlaps markers, a
/// zero radius collapses them, and both stay well-defined geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    /// Layout direction of the strip.
    pub orientation: Orientation,
    /// Marker circle radius.
    pub radius: f64,
    /// Gap between adjacent marker edges. May be negative to overlap.
    pub spacing: f64,
    /// Stroke ring width. `0.0` disables the ring entirely.
    pub stroke_width: f64,
    /// Paint for unselected marker fills.
    pub normal: Paint,
    /// Paint for the selected marker.
    pub selected: Paint,
    /// Paint for stroke rings.
    pub stroke: Paint,
    /// Whether a one-page strip still renders its marker.
    pub single_show: bool,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            radius: 4.0,
            spacing: 8.0,
            stroke_width: 0.0,
            normal: Paint::new(0xFFCC_CCCC),
            selected: Paint::new(0xFFFF_FFFF),
            stroke: Paint::new(0xFF88_8888),
            single_show: true,
        }
    }
}

impl IndicatorStyle {
    /// Fill radius drawn under the stroke ring.
    ///
    /// Shrinking the fill by half the stroke width keeps the ring centered
    /// on the nominal circle boundary instead of inflating the marker.
    #[must_use]
    pub fn ring_radius(&self) -> f64 {
        if self.stroke_width > 0.0 {
            self.radius - self.stroke_width / 2.0
        } else {
            self.radius
        }
    }

    /// Draw layers active under this style.
    #[must_use]
    pub fn layers(&self) -> LayerFlags {
        let mut layers = LayerFlags::empty();
        if self.normal.is_visible() {
            layers |= LayerFlags::NORMAL_FILL;
        }
        if self.stroke_width > 0.0 {
            layers |= LayerFlags::STROKE_RING;
        }
        if self.selected.is_visible() {
            layers |= LayerFlags::SELECTED;
        }
        layers
    }
}
