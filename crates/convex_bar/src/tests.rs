//! Behavioral tests for the whole bar, driven by a manual clock

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use convex_animation::{Easing, ManualClock};
use convex_core::{Color, DrawCommand, DrawList, Point};

use crate::bar::ConvexBar;
use crate::config::{BarConfig, TransitionOrigin};
use crate::error::BarError;
use crate::style::{SlotContext, StylePolicy, TabItem, TabStyle};

const WIDTH: f32 = 300.0;
const EPSILON: f32 = 1e-5;

fn items(count: usize) -> Vec<TabItem> {
    (0..count).map(|i| TabItem::new(format!("icon{i}"))).collect()
}

fn build(style: TabStyle, count: usize, clock: &ManualClock) -> ConvexBar {
    let mut bar = ConvexBar::builder()
        .style(style)
        .items(items(count))
        .clock(clock.clone())
        .build()
        .unwrap();
    bar.start();
    bar
}

/// Records every index passed to the tap callback
fn recorder() -> (Rc<RefCell<Vec<usize>>>, impl FnMut(usize) + 'static) {
    let taps = Rc::new(RefCell::new(Vec::new()));
    let sink = taps.clone();
    (taps, move |index| sink.borrow_mut().push(index))
}

struct Dots {
    fixed: bool,
}

impl StylePolicy for Dots {
    fn is_fixed_center(&self) -> bool {
        self.fixed
    }

    fn render_slot_content(&self, slot: &SlotContext) -> DrawList {
        let radius = if slot.active { 4.0 } else { 2.0 };
        let mut list = DrawList::new();
        list.fill_circle(slot.center(), radius, Color::WHITE);
        list
    }
}

#[test]
fn test_fixed_styles_keep_curve_centered() {
    for style in [TabStyle::Fixed, TabStyle::FixedCircle] {
        let clock = ManualClock::new();
        let mut bar = build(style, 5, &clock);
        assert_eq!(bar.render(WIDTH).center_fraction, 0.5);

        for index in [0, 4, 1, 3, 2, 0] {
            let outcome = bar.on_tab_tapped(index).unwrap();
            assert!(!outcome.animating);
            for _ in 0..4 {
                let frame = bar.render(WIDTH);
                assert_eq!(frame.center_fraction, 0.5);
                assert!(!frame.animating);
                assert_eq!(frame.convex_index(), 2);
                clock.advance_ms(40);
            }
        }
    }
}

#[test]
fn test_reactive_rest_positions() {
    for count in 1..=6 {
        let clock = ManualClock::new();
        let mut bar = build(TabStyle::ReactCircle, count, &clock);
        for index in (0..count).rev() {
            bar.on_tab_tapped(index).unwrap();
            clock.advance_ms(150);
            let expected = (2 * index + 1) as f32 / (2 * count) as f32;
            let frame = bar.render(WIDTH);
            assert!((frame.center_fraction - expected).abs() < EPSILON);
            assert_eq!(bar.rest_fraction(index), expected);
            assert!(!frame.animating);
        }
    }
}

#[test]
fn test_transition_boundaries_and_monotonicity() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 5, &clock);

    bar.on_tab_tapped(4).unwrap();
    assert_eq!(bar.render(WIDTH).center_fraction, 0.1);

    let mut previous = 0.1;
    for _ in 0..15 {
        clock.advance_ms(10);
        let fraction = bar.render(WIDTH).center_fraction;
        assert!((0.1..=0.9).contains(&fraction), "{fraction} out of range");
        assert!(fraction >= previous, "curve moved backwards");
        previous = fraction;
    }

    let frame = bar.render(WIDTH);
    assert_eq!(frame.center_fraction, 0.9);
    assert!(!frame.animating);
}

#[test]
fn test_new_tap_replaces_running_transition() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 5, &clock);

    bar.on_tab_tapped(4).unwrap();
    clock.advance_ms(50);
    let mid = bar.render(WIDTH).center_fraction;
    assert!(mid > 0.1 && mid < 0.9);

    // Starts from the rest position of slot 4, not from the live value
    bar.on_tab_tapped(2).unwrap();
    assert_eq!(bar.render(WIDTH).center_fraction, 0.9);

    clock.advance_ms(150);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.5);
}

#[test]
fn test_live_origin_redirects_from_current_position() {
    let clock = ManualClock::new();
    let config = BarConfig {
        transition_origin: TransitionOrigin::Live,
        ..Default::default()
    };
    let mut bar = ConvexBar::builder()
        .config(config)
        .items(items(5))
        .clock(clock.clone())
        .build()
        .unwrap();
    bar.start();

    bar.on_tab_tapped(4).unwrap();
    clock.advance_ms(50);
    let mid = bar.render(WIDTH).center_fraction;

    bar.on_tab_tapped(2).unwrap();
    assert!((bar.render(WIDTH).center_fraction - mid).abs() < EPSILON);

    clock.advance_ms(150);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.5);
}

#[test]
fn test_tapping_active_tab_still_notifies() {
    for style in [TabStyle::Fixed, TabStyle::React, TabStyle::ReactCircle] {
        let clock = ManualClock::new();
        let (taps, callback) = recorder();
        let mut bar = ConvexBar::builder()
            .style(style)
            .items(items(3))
            .clock(clock.clone())
            .on_tap(callback)
            .build()
            .unwrap();
        bar.start();

        let outcome = bar.on_tab_tapped(0).unwrap();
        assert!(!outcome.changed);
        assert!(!outcome.animating);
        assert!(!bar.is_animating());
        assert_eq!(*taps.borrow(), vec![0]);
    }
}

#[test]
fn test_construction_validation() {
    let err = ConvexBar::builder()
        .style(TabStyle::Fixed)
        .items(items(4))
        .build()
        .unwrap_err();
    assert!(matches!(err, BarError::Configuration(_)));
    assert!(err.to_string().contains("slot count must be odd"));

    for style in [
        TabStyle::Fixed,
        TabStyle::FixedCircle,
        TabStyle::React,
        TabStyle::ReactCircle,
    ] {
        let err = ConvexBar::builder().style(style).build().unwrap_err();
        assert!(matches!(err, BarError::Configuration(_)), "{style:?}");
    }

    let err = ConvexBar::builder()
        .custom_style(Dots { fixed: false })
        .count(0)
        .build()
        .unwrap_err();
    assert!(matches!(err, BarError::Configuration(_)));

    // Reactive styles accept even counts
    assert!(ConvexBar::builder()
        .style(TabStyle::ReactCircle)
        .items(items(4))
        .build()
        .is_ok());
}

#[test]
fn test_builder_rejects_inconsistent_input() {
    let mismatch = ConvexBar::builder().items(items(3)).count(4).build();
    assert!(matches!(mismatch, Err(BarError::Configuration(_))));

    let no_policy = ConvexBar::builder()
        .style(TabStyle::Custom)
        .items(items(3))
        .build();
    assert!(matches!(no_policy, Err(BarError::Configuration(_))));

    let no_items = ConvexBar::builder().count(3).build();
    assert!(matches!(no_items, Err(BarError::Configuration(_))));

    let out_of_range = ConvexBar::builder()
        .items(items(3))
        .initial_active_index(3)
        .build();
    assert!(matches!(out_of_range, Err(BarError::Configuration(_))));

    let bad_top = ConvexBar::builder()
        .config(BarConfig {
            top: 10.0,
            ..Default::default()
        })
        .items(items(3))
        .build();
    assert!(matches!(bad_top, Err(BarError::Configuration(_))));
}

#[test]
fn test_reactive_tap_sequence() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 5, &clock);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.1);

    let outcome = bar.on_tab_tapped(0).unwrap();
    assert!(!outcome.changed && !outcome.animating);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.1);

    let outcome = bar.on_tab_tapped(4).unwrap();
    assert!(outcome.changed && outcome.animating);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.1);
    clock.advance_ms(150);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.9);

    let outcome = bar.on_tab_tapped(2).unwrap();
    assert!(outcome.animating);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.9);
    clock.advance_ms(150);
    let frame = bar.render(WIDTH);
    assert_eq!(frame.center_fraction, 0.5);
    assert_eq!(frame.convex_index(), 2);
    assert!(frame.overlay.active);
}

#[test]
fn test_fixed_bar_overlay_active_only_on_center() {
    let clock = ManualClock::new();
    let (taps, callback) = recorder();
    let mut bar = ConvexBar::builder()
        .style(TabStyle::Fixed)
        .items(items(3))
        .clock(clock.clone())
        .on_tap(callback)
        .build()
        .unwrap();
    bar.start();

    for (index, center_active) in [(0, false), (1, true), (2, false)] {
        bar.on_tab_tapped(index).unwrap();
        let frame = bar.render(WIDTH);
        assert_eq!(frame.center_fraction, 0.5);
        assert_eq!(frame.convex_index(), 1);
        assert_eq!(frame.overlay.active, center_active);
        assert!(frame.slots[index].active);
    }
    assert_eq!(*taps.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_interceptor_vetoes_tap() {
    let clock = ManualClock::new();
    let (taps, callback) = recorder();
    let mut bar = ConvexBar::builder()
        .items(items(5))
        .clock(clock.clone())
        .on_tap(callback)
        .on_tab_notify(|index| index != 2)
        .build()
        .unwrap();
    bar.start();

    let outcome = bar.on_tab_tapped(2).unwrap();
    assert!(outcome.vetoed);
    assert_eq!(bar.active_index(), 0);
    assert!(!bar.is_animating());
    assert!(taps.borrow().is_empty());

    let outcome = bar.on_tab_tapped(3).unwrap();
    assert!(!outcome.vetoed && outcome.changed);
    assert_eq!(*taps.borrow(), vec![3]);
}

#[test]
fn test_invalid_index_leaves_state_untouched() {
    let clock = ManualClock::new();
    let (taps, callback) = recorder();
    let mut bar = ConvexBar::builder()
        .items(items(3))
        .clock(clock.clone())
        .on_tap(callback)
        .build()
        .unwrap();

    let err = bar.on_tab_tapped(3).unwrap_err();
    assert!(matches!(err, BarError::InvalidIndex { index: 3, count: 3 }));
    assert!(matches!(
        bar.animate_to(7),
        Err(BarError::InvalidIndex { index: 7, .. })
    ));
    assert_eq!(bar.active_index(), 0);
    assert!(taps.borrow().is_empty());
}

#[test]
fn test_animate_to_skips_callback() {
    let clock = ManualClock::new();
    let (taps, callback) = recorder();
    let mut bar = ConvexBar::builder()
        .items(items(4))
        .clock(clock.clone())
        .on_tap(callback)
        .on_tab_notify(|_| false)
        .build()
        .unwrap();
    bar.start();

    let outcome = bar.animate_to(3).unwrap();
    assert!(outcome.changed && outcome.animating);
    assert_eq!(bar.active_index(), 3);
    assert!(taps.borrow().is_empty());

    clock.advance_ms(150);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.875);
}

#[test]
fn test_stopped_bar_snaps() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 5, &clock);

    bar.on_tab_tapped(4).unwrap();
    clock.advance_ms(50);
    bar.stop();
    assert!(!bar.is_running());
    let frame = bar.render(WIDTH);
    assert_eq!(frame.center_fraction, 0.9);
    assert!(!frame.animating);

    let outcome = bar.on_tab_tapped(2).unwrap();
    assert!(outcome.changed && !outcome.animating);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.5);

    bar.start();
    assert!(bar.on_tab_tapped(0).unwrap().animating);
}

#[test]
fn test_initial_active_index() {
    let clock = ManualClock::new();
    let mut bar = ConvexBar::builder()
        .items(items(4))
        .initial_active_index(2)
        .clock(clock.clone())
        .build()
        .unwrap();
    assert_eq!(bar.active_index(), 2);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.625);
}

#[test]
fn test_zero_duration_snaps() {
    let clock = ManualClock::new();
    let config = BarConfig {
        transition_ms: 0,
        ..Default::default()
    };
    let mut bar = ConvexBar::builder()
        .config(config)
        .items(items(5))
        .clock(clock.clone())
        .build()
        .unwrap();
    bar.start();

    let outcome = bar.on_tab_tapped(4).unwrap();
    assert!(!outcome.animating);
    assert_eq!(bar.render(WIDTH).center_fraction, 0.9);
}

#[test]
fn test_redraw_requests() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 3, &clock);

    assert!(bar.take_redraw_request());
    assert!(!bar.take_redraw_request());

    bar.on_tab_tapped(2).unwrap();
    assert!(bar.take_redraw_request());
    // Still moving, so the host keeps rendering
    assert!(bar.needs_redraw());

    clock.advance(Duration::from_millis(150));
    bar.render(WIDTH);
    assert!(!bar.needs_redraw());
}

#[test]
fn test_frame_contents() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::ReactCircle, 5, &clock);
    bar.on_tab_tapped(3).unwrap();
    clock.advance_ms(150);

    let frame = bar.render(WIDTH);
    assert_eq!(frame.slots.len(), 5);
    assert_eq!(frame.slots[1].rect.x(), 60.0);
    assert!(frame.slots[3].content.is_none());
    assert!(frame.slots[0].content.is_some());
    assert!(frame.shadow.is_some());
    assert!(frame.outline.is_closed());

    // Overlay is centered over slot 3 and reaches up to the top inset
    assert!((frame.overlay.rect.center().x - 210.0).abs() < 1e-3);
    assert_eq!(frame.overlay.rect.y(), -25.0);
    assert!(matches!(
        frame.overlay.content.commands()[0],
        DrawCommand::FillCircle { .. }
    ));

    let list = frame.draw_list();
    assert!(matches!(list.commands()[0], DrawCommand::FillPath { .. }));
    // Outline, one icon per row slot, circle badge + ring + icon in the overlay
    assert_eq!(list.len(), 1 + 4 + 3);
}

#[test]
fn test_badges_drawn_after_content() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 3, &clock);
    bar.set_badge(1, "3").unwrap();

    let frame = bar.render(WIDTH);
    let content = frame.slots[1].content.as_ref().unwrap();
    assert_eq!(content.len(), 3);
    match &content.commands()[2] {
        DrawCommand::Text { text, .. } => assert_eq!(text, "3"),
        other => panic!("unexpected command {other:?}"),
    }

    bar.clear_badge(1).unwrap();
    assert_eq!(bar.render(WIDTH).slots[1].content.as_ref().unwrap().len(), 1);
    assert!(bar.set_badge(5, "x").is_err());
}

#[test]
fn test_hit_testing() {
    let clock = ManualClock::new();
    let mut bar = build(TabStyle::React, 5, &clock);

    // Above the bar, inside the raised overlay of slot 0
    assert_eq!(bar.hit_test(Point::new(30.0, -10.0), WIDTH), Some(0));
    // Above the bar elsewhere
    assert_eq!(bar.hit_test(Point::new(200.0, -10.0), WIDTH), None);
    assert_eq!(bar.hit_test(Point::new(200.0, 20.0), WIDTH), Some(3));

    let outcome = bar.on_pointer_up(Point::new(200.0, 20.0), WIDTH).unwrap();
    assert_eq!(outcome.map(|o| o.index), Some(3));
    assert_eq!(bar.active_index(), 3);
    assert!(bar
        .on_pointer_up(Point::new(10.0, 80.0), WIDTH)
        .unwrap()
        .is_none());
}

#[test]
fn test_custom_style_policy() {
    let clock = ManualClock::new();
    let mut bar = ConvexBar::builder()
        .custom_style(Dots { fixed: true })
        .count(3)
        .clock(clock.clone())
        .build()
        .unwrap();
    bar.start();
    assert!(bar.is_fixed_center());

    bar.on_tab_tapped(2).unwrap();
    let frame = bar.render(WIDTH);
    assert_eq!(frame.center_fraction, 0.5);
    assert!(!frame.overlay.active);
    match &frame.slots[2].content.as_ref().unwrap().commands()[0] {
        DrawCommand::FillCircle { radius, .. } => assert_eq!(*radius, 4.0),
        other => panic!("unexpected command {other:?}"),
    }

    let even = ConvexBar::builder()
        .custom_style(Dots { fixed: true })
        .count(4)
        .build();
    assert!(matches!(even, Err(BarError::Configuration(_))));
}

#[test]
fn test_easing_from_builder() {
    let clock = ManualClock::new();
    let mut bar = ConvexBar::builder()
        .items(items(2))
        .easing(Easing::Linear)
        .clock(clock.clone())
        .build()
        .unwrap();
    bar.start();

    bar.on_tab_tapped(1).unwrap();
    clock.advance_ms(75);
    assert!((bar.render(WIDTH).center_fraction - 0.5).abs() < EPSILON);

    let overshoot = ConvexBar::builder()
        .items(items(2))
        .easing(Easing::CubicBezier(0.3, -0.5, 0.7, 1.5))
        .build();
    assert!(matches!(overshoot, Err(BarError::Configuration(_))));
}
