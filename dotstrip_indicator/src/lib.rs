// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotstrip Indicator: renderer-agnostic paging-indicator geometry.
//!
//! This crate computes the layout and per-frame draw list for a strip of
//! fixed-size circular markers indicating position within a paginated
//! sequence ("page 3 of 7"), including continuous interpolation of the
//! selected marker while the user drags between pages.
//!
//! The core concepts are:
//!
//! - [`IndicatorStyle`]: orientation, marker metrics, and per-layer paints.
//! - [`PagerState`]: host-owned page count, current page, and scroll
//!   progress.
//! - [`natural_extent`] / [`measure_axis`] / [`measure_size`]: axis-agnostic
//!   measurement under exact, at-most, and unconstrained sizing modes.
//! - [`compute_frame`]: a pure function from state + style to a [`Frame`],
//!   the ordered list of circles a renderer must draw.
//! - [`PageIndicator`]: a small controller that owns style, state, and
//!   padding and forwards host callbacks into the pure functions.
//!
//! This crate deliberately does **not** know about widgets, gesture
//! recognition, animation timing, or any particular rendering surface.
//! Host frameworks are responsible for:
//!
//! - Resolving themes/attributes into an [`IndicatorStyle`].
//! - Forwarding page-changed and page-scrolled events into [`PagerState`].
//! - Translating each [`Frame`] into actual draw calls.
//! - Persisting the current page across restarts (only the page index needs
//!   to survive; the fractional offset always restarts at zero).
//!
//! ## Minimal example
//!
//! ```rust
//! use dotstrip_indicator::{PageIndicator, SizeSpec};
//!
//! let mut indicator = PageIndicator::default();
//! indicator.set_count(5);
//!
//! // Mid-drag between pages 1 and 2.
//! indicator.page_scrolled(1, 0.5);
//!
//! let size = indicator.measure(SizeSpec::Unspecified, SizeSpec::AtMost(12.0));
//! assert!(size.height <= 12.0);
//!
//! let frame = indicator.frame();
//! assert_eq!(frame.markers.len(), 5);
//!
//! // The selected marker sits halfway between the second and third markers.
//! let selected = frame.selected.expect("selected paint is opaque by default");
//! assert!(selected.center.x > frame.markers[1].center.x);
//! assert!(selected.center.x < frame.markers[2].center.x);
//! ```
//!
//! All coordinates live in a caller-chosen 2D space (typically logical
//! pixels) and are expected to be finite.
//!
//! This crate is `no_std`.

#![no_std]

mod frame;
mod indicator;
mod measure;
mod state;
mod style;

pub use frame::{Frame, MarkerDraw, MarkerRole, compute_frame, marker_center, selected_center};
pub use indicator::PageIndicator;
pub use measure::{Axis, SizeSpec, measure_axis, measure_size, natural_extent};
pub use state::{PagerState, ScrollPhase};
pub use style::{IndicatorStyle, LayerFlags, Orientation, Paint};
