// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host adapter translating indicator frames into draw calls.
//!
//! This example plays the role a widget toolkit would: it resolves a style,
//! forwards pager events, measures under host constraints, and turns each
//! frame into backend "draw calls" (printed here).
//!
//! Run:
//! - `cargo run -p dotstrip_demos --example indicator_host`

use dotstrip_hit::{TapParams, hit_marker};
use dotstrip_indicator::{
    Frame, IndicatorStyle, MarkerRole, Orientation, PageIndicator, SizeSpec,
};
use kurbo::{Insets, Point};

/// Pretend renderer: one line per circle, selected drawn last.
fn draw(frame: &Frame, style: &IndicatorStyle) {
    if frame.is_empty() {
        println!("  (nothing to draw)");
        return;
    }
    for cmd in frame.draws() {
        let color = match cmd.role {
            MarkerRole::Normal => style.normal.color,
            MarkerRole::Stroke => style.stroke.color,
            MarkerRole::Selected => style.selected.color,
        };
        println!(
            "  circle @ ({:.1}, {:.1}) r={:.1} color=#{color:08X} [{:?}]",
            cmd.center.x, cmd.center.y, cmd.radius, cmd.role
        );
    }
}

fn main() {
    // Theme resolution, host-side: stroked markers with generous spacing.
    let style = IndicatorStyle {
        radius: 10.0,
        spacing: 5.0,
        stroke_width: 4.0,
        ..IndicatorStyle::default()
    };
    let mut indicator = PageIndicator::new(style);
    indicator.set_count(3);
    indicator.set_padding(Insets::uniform(2.0));

    // Measure pass: the host gives an exact width and a bounded height.
    let size = indicator.measure(SizeSpec::Exact(120.0), SizeSpec::AtMost(40.0));
    println!("measured: {:.1} x {:.1}", size.width, size.height);

    println!("\n== page 0, at rest ==");
    draw(&indicator.frame(), indicator.style());

    indicator.page_scrolled(0, 0.5);
    println!("\n== dragging, halfway to page 1 ==");
    draw(&indicator.frame(), indicator.style());

    indicator.page_selected(1);
    println!("\n== page 1, settled ==");
    draw(&indicator.frame(), indicator.style());

    // The same strip as a vertical column: every (x, y) pair swaps.
    indicator.style_mut().orientation = Orientation::Vertical;
    println!("\n== vertical column, page 1 ==");
    draw(&indicator.frame(), indicator.style());
    indicator.style_mut().orientation = Orientation::Horizontal;

    // Tap-to-jump: the host's gesture layer asks which marker was hit.
    let tap = Point::new(63.0, 12.0);
    let params = TapParams { tolerance: 8.0 };
    let count = indicator.state().count;
    match hit_marker(indicator.style(), count, indicator.padding(), tap, &params) {
        Some(hit) => {
            println!("\ntap @ ({:.0}, {:.0}) -> page {}", tap.x, tap.y, hit.index);
            indicator.page_selected(hit.index);
            draw(&indicator.frame(), indicator.style());
        }
        None => println!("\ntap @ ({:.0}, {:.0}) missed the strip", tap.x, tap.y),
    }

    // Lifecycle boundary: only the page index survives a restart.
    let saved = indicator.saved_position();
    let mut restored = PageIndicator::new(*indicator.style());
    restored.set_padding(indicator.padding());
    restored.set_count(count);
    restored.restore_position(saved);
    assert_eq!(
        restored.frame().selected,
        indicator.frame().selected,
        "restored indicator rests on the saved page"
    );
    println!("\nrestored at page {saved}");
}
