use super::*;

#[test]
fn canvas_rejects_empty_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(4, 3).unwrap(), Canvas { width: 4, height: 3 });
}

#[test]
fn target_aspect_matches_scaled_versions() {
    let t = Canvas::TARGET;
    assert!((t.aspect_ratio() - 1015.0 / 570.0).abs() < 1e-12);
    let doubled = t.scaled(2.0).unwrap();
    assert_eq!(doubled, Canvas { width: 2030, height: 1140 });
    assert!(doubled.matches_aspect(t, 1e-9));
    assert!(!Canvas { width: 800, height: 1200 }.matches_aspect(t, 0.01));
}

#[test]
fn scaled_keeps_one_pixel_and_rejects_bad_factors() {
    let c = Canvas::new(3, 3).unwrap();
    assert_eq!(c.scaled(0.01).unwrap(), Canvas { width: 1, height: 1 });
    assert!(c.scaled(0.0).is_err());
    assert!(c.scaled(f64::NAN).is_err());
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(fmt_num(12.0), "12");
    assert_eq!(fmt_num(12.5), "12.5");
    assert_eq!(fmt_num(1.0 / 3.0), "0.33");
    assert_eq!(fmt_num(-0.001), "0");
    assert_eq!(fmt_num(300.126), "300.13");
}
