use super::*;

#[test]
fn length_parses_units() {
    assert_eq!(Length::parse("40%").unwrap(), Length::Percent(40.0));
    assert_eq!(Length::parse("12px").unwrap(), Length::Px(12.0));
    assert_eq!(Length::parse("16rem").unwrap(), Length::Px(256.0));
    assert_eq!(Length::parse("0").unwrap(), Length::Px(0.0));
    assert!(Length::parse("wide").is_err());
}

#[test]
fn mixed_unit_lerp_resolves_against_basis() {
    let a = Length::Px(256.0);
    let b = Length::Percent(100.0);
    assert_eq!(Length::lerp(a, b, 0.0, 1000.0), Length::Px(256.0));
    assert_eq!(Length::lerp(a, b, 0.5, 1000.0), Length::Px(628.0));
    assert_eq!(Length::lerp(a, b, 1.0, 1000.0), Length::Percent(100.0));
}

#[test]
fn zero_endpoint_adopts_other_unit() {
    let l = Length::lerp(Length::Px(0.0), Length::Percent(40.0), 0.5, 1000.0);
    assert_eq!(l, Length::Percent(20.0));
}

#[test]
fn polygon_parse_and_display_agree() {
    let p = ClipPolygon::parse("polygon(14% 0%, 72% 0%, 90% 90%, 0% 100%)").unwrap();
    assert_eq!(p.points.len(), 4);
    assert_eq!(p.to_string(), "polygon(14% 0%, 72% 0%, 90% 90%, 0% 100%)");
}

#[test]
fn polygon_rejects_pixels_and_short_shapes() {
    assert!(ClipPolygon::parse("polygon(10px 0%, 0% 0%, 1% 1%)").is_err());
    assert!(ClipPolygon::parse("polygon(0% 0%, 1% 1%)").is_err());
    assert!(ClipPolygon::parse("circle(50%)").is_err());
}

#[test]
fn polygon_lerp_is_pointwise() {
    let a = ClipPolygon::full_rect();
    let b = ClipPolygon::parse("polygon(20% 0%, 100% 0%, 100% 100%, 0% 100%)").unwrap();
    let mid = ClipPolygon::lerp(&a, &b, 0.5);
    assert_eq!(mid.points[0], Point::new(10.0, 0.0));
}

#[test]
fn radii_shorthand_expands() {
    let r = CornerRadii::parse("0 0 40% 10%").unwrap();
    assert_eq!(r.0[2], Length::Percent(40.0));
    assert_eq!(r.to_string(), "0 0 40% 10%");

    let two = CornerRadii::parse("1px 2px").unwrap();
    assert_eq!(two.0, [
        Length::Px(1.0),
        Length::Px(2.0),
        Length::Px(1.0),
        Length::Px(2.0)
    ]);
    assert!(CornerRadii::parse("").is_err());
}

#[test]
fn fps_conversions() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.frames_to_secs(30), 0.5);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 61);
    assert!(Fps::new(0, 1).is_err());
}

#[test]
fn fmt_num_trims_noise() {
    assert_eq!(fmt_num(13.999_999_9), "14");
    assert_eq!(fmt_num(-0.000_01), "0");
    assert_eq!(fmt_num(0.25), "0.25");
}
