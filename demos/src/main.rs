// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted headless gallery session.
//!
//! Drives a [`Gallery`] through a drag-and-glide, a zoom preset change,
//! and a full detail-view round trip on a synthetic 16ms clock, printing
//! the state a renderer would consume. Useful for eyeballing the
//! interaction model without wiring up a windowing stack.

use kurbo::{Point, Size};
use vitrine_gallery::{Gallery, GalleryItem, ItemId};
use vitrine_grid::GridConfig;

const FRAME_MS: f64 = 16.0;

fn items() -> Vec<GalleryItem> {
    (0..96)
        .map(|i| GalleryItem {
            id: ItemId(i),
            image_url: format!("https://example.com/works/{i:02}.jpg"),
            title: format!("Untitled No. {}", i + 1),
            description: String::from("Silver gelatin print. Tokyo, 1974."),
        })
        .collect()
}

/// Advances the clock frame by frame, printing a state line every quarter
/// second, until `until_ms` of scripted time has passed.
fn run(gallery: &mut Gallery, clock: &mut f64, until_ms: f64, label: &str) {
    let end = *clock + until_ms;
    let mut next_report = *clock;
    while *clock < end {
        *clock += FRAME_MS;
        gallery.tick(*clock);
        for cue in gallery.drain_cues() {
            println!("[{:>8.0}ms] cue: {cue:?}", *clock);
        }
        if *clock >= next_report {
            let offset = gallery.pan_offset();
            println!(
                "[{:>8.0}ms] {label}: offset=({:.1}, {:.1}) zoom={:.2}",
                *clock,
                offset.x,
                offset.y,
                gallery.zoom_level(),
            );
            next_report += 250.0;
        }
    }
}

fn main() {
    let config = GridConfig {
        item_size: 320.0,
        base_gap: 16.0,
        rows: 8,
        cols: 12,
    };
    let view = Size::new(1440.0, 900.0);
    let mut clock = 0.0;
    let mut gallery = Gallery::new(items(), config, view, 0.6, false, clock);

    println!("== intro ==");
    run(&mut gallery, &mut clock, 3_200.0, "intro");

    println!("== drag and glide ==");
    gallery.pointer_down(Point::new(900.0, 500.0), clock);
    for step in 1..=8 {
        clock += FRAME_MS;
        gallery.pointer_move(
            Point::new(900.0 - f64::from(step) * 40.0, 500.0 - f64::from(step) * 10.0),
            clock,
        );
        gallery.tick(clock);
    }
    gallery.pointer_up(clock);
    run(&mut gallery, &mut clock, 2_400.0, "glide");

    println!("== zoom preset 1.0 ==");
    gallery.set_zoom(1.0, clock);
    run(&mut gallery, &mut clock, 2_200.0, "zoom");

    println!("== detail round trip ==");
    let picked = gallery
        .cell_at_view_point(Point::new(700.0, 430.0))
        .unwrap_or(0);
    gallery.select_cell(picked, clock);
    run(&mut gallery, &mut clock, 2_000.0, "open");
    let frame = gallery.frame(clock);
    if let Some(chrome) = &frame.chrome {
        println!(
            "detail open on #{} \"{}\" ({} caption lines)",
            chrome.caption.number,
            chrome.caption.title,
            chrome.caption.lines.len(),
        );
    }
    gallery.next_item(clock);
    run(&mut gallery, &mut clock, 700.0, "next");
    gallery.prev_item(clock);
    run(&mut gallery, &mut clock, 700.0, "prev");
    gallery.close_detail(clock);
    run(&mut gallery, &mut clock, 1_600.0, "close");

    let frame = gallery.frame(clock);
    let revealed = frame.cells.iter().filter(|c| c.occlusion < 0.5).count();
    println!(
        "session done: {} cells, {} revealed, overlay={}",
        frame.cells.len(),
        revealed,
        frame.overlay.is_some(),
    );
}
