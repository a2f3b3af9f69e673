use super::*;
use crate::orientation::compass::CompassLabel;
use crate::sequence::step::Step;

fn steps() -> Vec<Step> {
    let mut guarded = Step::at(4.0, 6.0, CompassLabel::E);
    guarded.guard = Some("gedan".to_owned());
    vec![
        Step::at(0.0, 0.0, CompassLabel::N),
        guarded,
        Step::default(),
        Step::at(-2.0, 1.0, CompassLabel::S).emphasized(),
    ]
}

#[test]
fn document_uses_region_viewbox_and_aspect() {
    let steps = steps();
    let scene = DiagramScene::still(&steps, 5.0);
    let svg = render_svg(&scene, &SvgStyle::default());
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="-7 -11 16 16""#));
    assert!(svg.contains(r#"width="512" height="512""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn points_are_plotted_flipped() {
    let steps = steps();
    let svg = render_svg(&DiagramScene::still(&steps, 5.0), &SvgStyle::default());
    assert!(svg.contains(r#"points="0,0 4,-6 -2,-1""#));
    assert!(svg.contains(r#"cx="4" cy="-6""#));
    // Unpositioned steps are skipped but keep their number.
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains(">4</text>"));
    assert!(svg.contains(">2 ▼</text>"));
}

#[test]
fn emphasis_and_current_are_styled() {
    let steps = steps();
    let mut scene = DiagramScene::still(&steps, 5.0);
    scene.current = Some(0);
    let svg = render_svg(&scene, &SvgStyle::default());
    assert!(svg.contains(&format!(r#"r="0.55" fill="{EMPHASIS}""#)));
    assert!(svg.contains(&format!(r#"stroke="{CURRENT}""#)));
}

#[test]
fn marker_is_rotated_by_heading_at_flipped_position() {
    let steps = steps();
    let mut scene = DiagramScene::still(&steps, 5.0);
    scene.pose = Some(RenderPose::new(2.0, 3.0, 45.0));
    let svg = render_svg(&scene, &SvgStyle::default());
    assert!(svg.contains(r#"transform="translate(2 -3) rotate(45)""#));

    scene.pose = None;
    assert!(!render_svg(&scene, &SvgStyle::default()).contains("<polygon"));
}

#[test]
fn empty_scene_is_still_a_document() {
    let svg = render_svg(&DiagramScene::still(&[], 5.0), &SvgStyle::default());
    assert!(svg.contains(r#"viewBox="-5 -5 10 10""#));
    assert!(!svg.contains("<polyline"));
}

#[test]
fn label_text_is_escaped() {
    assert_eq!(escape_text("a<b&c>"), "a&lt;b&amp;c&gt;");
}

#[test]
fn zero_padding_line_is_widened_to_a_square() {
    let steps = vec![
        Step::at(0.0, 0.0, CompassLabel::N),
        Step::at(0.0, 5.0, CompassLabel::N),
    ];
    let svg = render_svg(&DiagramScene::still(&steps, 0.0), &SvgStyle::default());
    assert!(svg.contains(r#"width="512" height="512" viewBox="-2.5 -5 5 5""#), "{svg}");
}

#[test]
fn zero_padding_single_point_gets_a_unit_view() {
    let steps = vec![Step::at(3.0, 4.0, CompassLabel::E)];
    let svg = render_svg(&DiagramScene::still(&steps, 0.0), &SvgStyle::default());
    assert!(svg.contains(r#"width="512" height="512" viewBox="2.5 -4.5 1 1""#), "{svg}");
}
