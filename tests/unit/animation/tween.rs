use super::*;
use crate::foundation::core::Point;
use crate::orientation::compass::{CompassLabel, Facing};

fn facing_only(label: CompassLabel) -> Step {
    Step {
        facing: Some(Facing::Compass(label)),
        ..Step::default()
    }
}

#[test]
fn midpoint_is_exact_linear_interpolation() {
    let tween = StepTween::new(
        RenderPose::new(0.0, 0.0, 0.0),
        &Step::at(10.0, 0.0, CompassLabel::E),
        TweenOpts::default(),
    );
    let frames: Vec<TweenFrame> = tween.collect();
    assert_eq!(frames.len(), 20);

    let mid = frames[9];
    assert_eq!(mid.frame, 10);
    assert_eq!(mid.pose, RenderPose::new(5.0, 0.0, 45.0));
    assert_eq!(mid.at, TimeMs(250));
}

#[test]
fn frames_are_evenly_spaced_and_end_on_target() {
    let tween = StepTween::new(
        RenderPose::new(1.0, 2.0, 90.0),
        &Step::at(-3.0, 7.0, CompassLabel::S),
        TweenOpts::default(),
    );
    let target = tween.target();
    let frames: Vec<TweenFrame> = tween.collect();
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.frame as usize, i + 1);
        assert_eq!(f.at, TimeMs(25 * (i as u64 + 1)));
    }
    assert_eq!(frames.last().unwrap().pose, target);
    assert_eq!(target, RenderPose::new(-3.0, 7.0, 180.0));
}

#[test]
fn wraps_through_north_instead_of_spinning_back() {
    let tween = StepTween::new(
        RenderPose::new(0.0, 0.0, 350.0),
        &Step {
            facing: Some(Facing::Unrecognized("x".into())),
            ..Step::default()
        },
        TweenOpts::default(),
    );
    // Unrecognized facing targets 0, reached by +10 not -350.
    assert_eq!(tween.turn_deg(), 10.0);

    let mut tween = StepTween::new(
        RenderPose::new(0.0, 0.0, 350.0),
        &Step::at(0.0, 0.0, CompassLabel::N),
        TweenOpts::default(),
    );
    assert_eq!(tween.start().heading, -10.0);
    let first = tween.next().unwrap();
    assert!(first.pose.heading < 0.0 && first.pose.heading > -10.0);
}

#[test]
fn turn_from_350_to_10_crosses_north() {
    let delta = shortest_delta_deg(350.0, 10.0);
    assert_eq!(delta, 20.0);
    let start = RenderPose::new(0.0, 0.0, 10.0 - delta);
    let end = RenderPose::new(0.0, 0.0, 10.0);
    assert_eq!((end.heading - start.heading).abs(), 20.0);
    let mid = RenderPose::lerp(&start, &end, 0.5);
    assert_eq!(mid.heading_normalized(), 0.0);
}

#[test]
fn every_start_and_label_turns_at_most_half_a_turn() {
    for start in (-720..=720).step_by(5) {
        for label in CompassLabel::ALL {
            let tween = StepTween::new(
                RenderPose::new(0.0, 0.0, f64::from(start)),
                &facing_only(label),
                TweenOpts::default(),
            );
            let turn = tween.turn_deg();
            assert!(
                turn > -180.0 && turn <= 180.0,
                "start={start} label={label} turn={turn}"
            );

            let begin = tween.start().heading;
            let frames: Vec<TweenFrame> = tween.collect();
            let mut prev = begin;
            for f in &frames {
                assert!((f.pose.heading - prev).abs() <= turn.abs() / 20.0 + 1e-9);
                prev = f.pose.heading;
            }
            assert_eq!(prev, label.heading_deg());
        }
    }
}

#[test]
fn half_turn_tie_goes_clockwise() {
    let tween = StepTween::new(
        RenderPose::new(0.0, 0.0, 0.0),
        &facing_only(CompassLabel::S),
        TweenOpts::default(),
    );
    assert_eq!(tween.turn_deg(), 180.0);

    let tween = StepTween::new(
        RenderPose::new(0.0, 0.0, 270.0),
        &facing_only(CompassLabel::E),
        TweenOpts::default(),
    );
    assert_eq!(tween.turn_deg(), 180.0);
}

#[test]
fn missing_position_holds_but_still_turns() {
    let frames: Vec<TweenFrame> = StepTween::new(
        RenderPose::new(3.0, -4.0, 0.0),
        &facing_only(CompassLabel::O),
        TweenOpts::default(),
    )
    .collect();
    for f in &frames {
        assert_eq!(f.pose.position(), Point::new(3.0, -4.0));
    }
    assert_eq!(frames.last().unwrap().pose.heading, 270.0);
    // 0 -> 270 turns counter-clockwise through 315.
    assert_eq!(frames[9].pose.heading, 315.0);
}

#[test]
fn custom_frame_count_and_zero_guard() {
    let opts = TweenOpts {
        step_duration_ms: 100,
        frame_count: 4,
    };
    let tween = StepTween::new(RenderPose::default(), &Step::at(4.0, 0.0, CompassLabel::N), opts);
    assert_eq!(tween.len(), 4);
    let xs: Vec<f64> = tween.map(|f| f.pose.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);

    let opts = TweenOpts {
        step_duration_ms: 100,
        frame_count: 0,
    };
    assert!(opts.validate().is_err());
    let frames: Vec<TweenFrame> =
        StepTween::new(RenderPose::default(), &Step::at(4.0, 0.0, CompassLabel::N), opts)
            .collect();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].pose.x, 4.0);
}

#[test]
fn opts_validation() {
    assert!(TweenOpts::default().validate().is_ok());
    assert_eq!(TweenOpts::default().frame_interval_ms(), 25);
    let bad = TweenOpts {
        step_duration_ms: 5,
        frame_count: 20,
    };
    assert!(bad.validate().is_err());

    let uneven = TweenOpts {
        step_duration_ms: 510,
        frame_count: 20,
    };
    assert!(uneven.validate().is_err());
    let even = TweenOpts {
        step_duration_ms: 520,
        frame_count: 20,
    };
    assert!(even.validate().is_ok());
    assert_eq!(even.frame_interval_ms(), 26);
}
