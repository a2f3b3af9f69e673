use super::*;
use crate::orientation::compass::CompassLabel;

#[test]
fn decodes_upstream_camel_case_record() {
    let json = r#"{
        "position": { "x": 1.5, "y": -2 },
        "facing": "NE",
        "emphasisMarker": true,
        "technique": "oi-zuki",
        "count": 3
    }"#;
    let step: Step = serde_json::from_str(json).unwrap();
    assert_eq!(step.position, Some(Point::new(1.5, -2.0)));
    assert_eq!(step.facing, Some(Facing::Compass(CompassLabel::NE)));
    assert!(step.emphasis_marker);
    assert_eq!(step.technique.as_deref(), Some("oi-zuki"));
    assert_eq!(step.count, Some(3));
    assert_eq!(step.heading_deg(), 45.0);
}

#[test]
fn missing_fields_are_legitimate() {
    let step: Step = serde_json::from_str("{}").unwrap();
    assert_eq!(step, Step::default());
    assert_eq!(step.heading_deg(), 0.0);
}

#[test]
fn unknown_facing_is_kept_not_rejected() {
    let step: Step = serde_json::from_str(r#"{ "facing": "up" }"#).unwrap();
    assert_eq!(step.facing, Some(Facing::Unrecognized("up".to_owned())));
    assert_eq!(step.heading_deg(), 0.0);
}

#[test]
fn builder_helpers() {
    let s = Step::at(4.0, 6.0, CompassLabel::S).emphasized();
    assert!(s.emphasis_marker);
    assert_eq!(s.heading_deg(), 180.0);
}
