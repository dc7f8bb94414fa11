//! End-to-end interaction scenarios driven through the public API

use std::time::{Duration, Instant};

use glow_tree::input::index::{INDEX_MCP, MIDDLE_TIP, WRIST};
use glow_tree::interaction::{to_local, to_world};
use glow_tree::{
    Catalog, Detection, GlowConfig, HandLandmarks, HandShape, InteractionController,
    InteractionEvent, Landmark, Point3D, ScaleController, ScreenPoint, SyntheticHand,
    LANDMARK_COUNT,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn pointing(x: f32, y: f32) -> Detection {
    Detection::OneHand(SyntheticHand::pointing_at(ScreenPoint::new(x, y)).build())
}

fn centered_palm(openness: f32) -> Detection {
    Detection::OneHand(
        SyntheticHand::palm_at(ScreenPoint::CENTER)
            .with_openness(openness)
            .build(),
    )
}

#[test]
fn test_pick_place_and_regrow() {
    let mut ctrl = InteractionController::default();
    let t0 = Instant::now();

    // Dwell on slot 3 of 8; the clock starts on the second frame
    ctrl.update(&pointing(0.1, 0.45), t0);
    ctrl.update(&pointing(0.1, 0.45), t0 + ms(50));
    let events = ctrl.update(&pointing(0.1, 0.45), t0 + ms(650));
    assert!(matches!(
        events.as_slice(),
        [InteractionEvent::DecorationPicked { slot: 3, .. }]
    ));

    // Move over the tree and hold still until the item lands
    let mut now = t0 + ms(650);
    let mut placed = None;
    for _ in 0..40 {
        now += ms(50);
        if let Some(InteractionEvent::DecorationPlaced(item)) =
            ctrl.update(&pointing(0.5, 0.5), now).into_iter().next()
        {
            placed = Some(item);
            break;
        }
    }
    let item = placed.expect("held item should be placed on the tree");
    let scale_at_placement = ctrl.scale();
    let world_at_placement = item.rendered_position(scale_at_placement);

    // Grow the tree; the decoration moves with it
    for i in 0..20 {
        ctrl.update(&centered_palm(1.0), now + ms(50 * (i + 1)));
    }
    let grown = ctrl.scale();
    assert!(grown > scale_at_placement);

    let rendered = ctrl.decorations()[0].rendered_position(grown);
    let expected = world_at_placement * (grown / scale_at_placement);
    assert!(rendered.distance(&expected) < 1e-4);
}

#[test]
fn test_placement_round_trips_any_scale() {
    let world = Point3D::new(1.2, 0.6, 0.0);
    for scale in [0.8, 1.0, 1.5, 2.8] {
        let local = to_local(world, scale);
        assert!(to_world(local, scale).distance(&world) < 1e-5);
        let rescaled = to_world(local, 2.0);
        assert!(rescaled.distance(&(world * (2.0 / scale))) < 1e-5);
    }
}

#[test]
fn test_fully_open_palm_targets_max_scale() {
    // Palm base 0.1, wrist to middle tip 0.3: ratio 3.0
    let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[WRIST] = Landmark::new(0.5, 0.9, 0.0);
    points[INDEX_MCP] = Landmark::new(0.5, 0.8, 0.0);
    points[MIDDLE_TIP] = Landmark::new(0.5, 0.6, 0.0);
    let hand = HandLandmarks::new(points, points);

    let gesture = glow_tree::classify(&hand, None, &GlowConfig::default().gesture);
    assert!((gesture.palm_openness - 1.0).abs() < 1e-5);
    assert!((ScaleController::default().target_for(gesture.palm_openness) - 2.8).abs() < 1e-5);
}

#[test]
fn test_half_open_palm_eases_toward_target() {
    let mut ctrl = InteractionController::default();
    let t0 = Instant::now();
    let mut previous = ctrl.scale();
    for i in 0..10 {
        ctrl.update(&centered_palm(0.5), t0 + ms(33 * i));
        assert!(ctrl.scale() > previous);
        assert!(ctrl.scale() < 1.8);
        previous = ctrl.scale();
    }
}

#[test]
fn test_leaving_slot_early_picks_nothing() {
    let mut ctrl = InteractionController::default();
    let t0 = Instant::now();
    ctrl.update(&pointing(0.1, 0.45), t0);
    let started = t0 + ms(100);
    ctrl.update(&pointing(0.1, 0.45), started);
    assert!(ctrl.update(&pointing(0.1, 0.45), started + ms(599)).is_empty());
    let events = ctrl.update(&pointing(0.5, 0.2), started + ms(650));
    assert!(events.is_empty());
    assert!(ctrl.held().is_none());
    assert_eq!(ctrl.dwell_progress(), 0.0);
}

#[test]
fn test_peace_clears_everything() {
    let mut ctrl = InteractionController::new(GlowConfig::default(), Catalog::default());
    let t0 = Instant::now();
    ctrl.update(&centered_palm(1.0), t0);
    ctrl.hold(0);
    ctrl.place_decoration(Point3D::new(0.3, 0.3, 0.0));
    ctrl.hold(1);

    let peace = Detection::OneHand(
        SyntheticHand::palm_at(ScreenPoint::CENTER)
            .with_shape(HandShape::Peace)
            .build(),
    );
    let events = ctrl.update(&peace, t0 + ms(33));
    assert!(events.contains(&InteractionEvent::SceneReset));
    assert!(ctrl.decorations().is_empty());
    assert!(ctrl.held().is_none());
    assert_eq!(ctrl.scale(), 1.0);
}

#[test]
fn test_recorded_session_replays_the_same() {
    let frames: Vec<Detection> = (0..8)
        .map(|i| if i == 3 { Detection::NoHand } else { pointing(0.1, 0.45) })
        .collect();
    let lines: Vec<String> = frames.iter().map(|f| f.to_json_line().unwrap()).collect();

    let run = |frames: &[Detection]| {
        let mut ctrl = InteractionController::default();
        let t0 = Instant::now();
        let mut names = Vec::new();
        for (i, frame) in frames.iter().enumerate() {
            for event in ctrl.update(frame, t0 + ms(100 * i as u64)) {
                names.push(event.name());
            }
        }
        (names, ctrl.held().map(|t| t.id.clone()))
    };

    let replayed: Vec<Detection> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| Detection::from_json_line(line, i + 1).unwrap())
        .collect();

    let live = run(&frames);
    assert_eq!(live, run(&replayed));
    assert_eq!(live.0, vec!["picked"]);
    assert_eq!(live.1.as_deref(), Some("4"));
}
