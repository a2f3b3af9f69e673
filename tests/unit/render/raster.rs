use super::*;
use crate::orientation::compass::CompassLabel;
use crate::render::scene::DiagramScene;
use crate::render::svg::{SvgStyle, render_svg};
use crate::sequence::step::Step;

#[test]
fn rasterizes_at_declared_size() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4" viewBox="-2 -1 4 2"><rect x="-2" y="-1" width="4" height="2" fill="#ff0000"/></svg>"##;
    let frame = rasterize_svg(svg).unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert_eq!(&frame.data[..4], &[255, 0, 0, 255]);
    assert!(frame.premultiplied);
}

#[test]
fn malformed_svg_is_an_error() {
    assert!(rasterize_svg("<svg").is_err());
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 0, 128, 128, 10, 20, 30, 255, 5, 5, 5, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 255, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[5, 5, 5, 0]);
}

#[test]
fn zero_padding_diagram_still_rasterizes() {
    let steps = vec![Step::at(0.0, 0.0, CompassLabel::N)];
    let style = SvgStyle {
        width_px: 32,
        ..SvgStyle::default()
    };
    let svg = render_svg(&DiagramScene::still(&steps, 0.0), &style);
    let frame = rasterize_svg(&svg).unwrap();
    assert_eq!((frame.width, frame.height), (32, 32));
}
