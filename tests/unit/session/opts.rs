use super::*;

#[test]
fn defaults_match_reference_timing() {
    let opts = PlaybackOpts::default();
    assert_eq!(opts.step_duration_ms, 500);
    assert_eq!(opts.frame_count, 20);
    assert_eq!(opts.padding, 5.0);
    opts.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let opts: PlaybackOpts = serde_json::from_str(r#"{ "frame_count": 10 }"#).unwrap();
    assert_eq!(opts.frame_count, 10);
    assert_eq!(opts.step_duration_ms, 500);
    assert_eq!(opts.tween_opts().frame_interval_ms(), 50);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<PlaybackOpts>(r#"{ "fps": 60 }"#).is_err());
}

#[test]
fn invalid_values_fail_validation() {
    let bad_frames = PlaybackOpts {
        frame_count: 0,
        ..PlaybackOpts::default()
    };
    assert!(matches!(
        bad_frames.validate(),
        Err(EmbusenError::Validation(_))
    ));

    let bad_padding = PlaybackOpts {
        padding: f64::NAN,
        ..PlaybackOpts::default()
    };
    assert!(bad_padding.validate().is_err());

    let negative = PlaybackOpts {
        padding: -1.0,
        ..PlaybackOpts::default()
    };
    assert!(negative.validate().is_err());

    let zero = PlaybackOpts {
        padding: 0.0,
        ..PlaybackOpts::default()
    };
    assert!(matches!(zero.validate(), Err(EmbusenError::Validation(_))));

    let uneven = PlaybackOpts {
        step_duration_ms: 510,
        ..PlaybackOpts::default()
    };
    assert!(uneven.validate().is_err());
}
