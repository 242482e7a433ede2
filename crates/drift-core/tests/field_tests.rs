mod common;

use common::RecordingSurface;
use drift_core::{batch_size, Dot, DotField, DotParams, FrameInput, LoadingLabel, Phase, Viewport};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

const WIDE: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};
const NARROW: Viewport = Viewport {
    width: 600.0,
    height: 800.0,
};

fn input(phase: Phase) -> FrameInput {
    FrameInput {
        now_ms: 0.0,
        pointer: DVec2::new(-5000.0, -5000.0),
        phase,
    }
}

#[test]
fn batch_size_depends_on_viewport_width() {
    assert_eq!(batch_size(WIDE), 300);
    assert_eq!(batch_size(NARROW), 200);
}

#[test]
fn spawn_batch_randomizes_within_fixed_ranges() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = DotField::new();
    assert_eq!(field.spawn_batch(0.0, WIDE, &mut rng), 300);
    assert_eq!(field.len(), 300);

    let mut accents = 0;
    for dot in &field.dots {
        assert!(dot.filled);
        assert!(dot.max_size < 30.0);
        assert!(dot.max_speed < 0.45 / 3.0);
        assert!((1.0..3.5).contains(&dot.section));
        match dot.color {
            [0, 0, 0] => {}
            [255, 255, 0] => accents += 1,
            other => panic!("unexpected color {other:?}"),
        }
    }
    // roughly a quarter of the palette draws land on the accent
    assert!(accents > 0 && accents < 150, "{accents} accents");
}

#[test]
fn narrow_viewports_get_fewer_slower_dots() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = DotField::new();
    assert_eq!(field.spawn_batch(0.0, NARROW, &mut rng), 200);
    for dot in &field.dots {
        assert!(dot.max_speed < 0.45 / 4.0);
    }
}

#[test]
fn clear_phase_top_exit_compacts_exactly_one() {
    // find a sequence value already above the top edge
    let mut exit_x = 1.0;
    while 400.0 * (PI * (exit_x / WIDE.width) * 5.0 - exit_x / 10.0).tan() + WIDE.height / 2.0 > 0.0
    {
        exit_x += 0.01;
    }

    let mut rng = StdRng::seed_from_u64(9);
    let mut field = DotField::new();
    let flat = DotParams {
        amplitude: 0.0,
        ..Default::default()
    };
    // slot 0 is skipped by the pass; slot 1 is the one that exits
    field.dots.push(Dot::new(flat.clone(), WIDE.width, &mut rng));
    field.dots.push(Dot::new(
        DotParams {
            x: Some(exit_x),
            color: [255, 255, 0],
            ..Default::default()
        },
        WIDE.width,
        &mut rng,
    ));
    field.dots.push(Dot::new(flat, WIDE.width, &mut rng));

    let mut surface = RecordingSurface::default();
    let mut label = LoadingLabel::new(WIDE);
    field.run_frame(
        &mut surface,
        &input(Phase::Clear),
        WIDE,
        &mut rng,
        true,
        usize::MAX,
        &mut label,
    );
    assert_eq!(field.len(), 2);
    assert!(field.dots.iter().all(|d| d.color == [0, 0, 0]));

    // nothing else is in an exit window, so the count now holds
    field.run_frame(
        &mut surface,
        &input(Phase::Clear),
        WIDE,
        &mut rng,
        true,
        usize::MAX,
        &mut label,
    );
    assert_eq!(field.len(), 2);
}

#[test]
fn label_draws_only_when_the_pass_reaches_its_slot() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = DotField::new();
    field.spawn_batch(0.0, NARROW, &mut rng);
    let mut label = LoadingLabel::new(NARROW);

    let mut surface = RecordingSurface::default();
    field.run_frame(
        &mut surface,
        &input(Phase::Visible),
        NARROW,
        &mut rng,
        true,
        100,
        &mut label,
    );
    assert_eq!(surface.texts.len(), 1);
    assert_eq!(surface.texts[0].text, "Loading");

    // a slot beyond the live range never fires
    surface.reset();
    field.run_frame(
        &mut surface,
        &input(Phase::Visible),
        NARROW,
        &mut rng,
        true,
        field.len() + 10,
        &mut label,
    );
    assert!(surface.texts.is_empty());
}

#[test]
fn skipped_first_slot_never_advances() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = DotField::new();
    field.spawn_batch(0.0, WIDE, &mut rng);
    let frozen_x = field.dots[0].x;
    // pin a known column well away from both edges
    field.dots[1].x = 100.0;

    let mut surface = RecordingSurface::default();
    let mut label = LoadingLabel::new(WIDE);
    for _ in 0..20 {
        field.run_frame(
            &mut surface,
            &input(Phase::Visible),
            WIDE,
            &mut rng,
            true,
            usize::MAX,
            &mut label,
        );
    }
    assert_eq!(field.dots[0].x, frozen_x);
    assert!(field.dots[1].x > 100.0);
}
