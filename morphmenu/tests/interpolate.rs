use morphmenu::interpolate::{Interpolate, Keyframes, clamp_progress};
use morphmenu::{Color, Offset};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn test_numeric_endpoints_and_midpoint() {
    let height = Keyframes::new(7.0, 40.0);
    assert_eq!(height.at(0.0), 7.0);
    assert_eq!(height.at(1.0), 40.0);
    assert!(approx(height.at(0.5), 23.5));
}

#[test]
fn test_out_of_range_progress_is_clamped() {
    let height = Keyframes::new(7.0, 40.0);
    assert_eq!(height.at(-0.3), 7.0);
    assert_eq!(height.at(1.04), 40.0);
    assert_eq!(height.at(f32::NAN), 7.0);
}

#[test]
fn test_clamp_progress() {
    assert_eq!(clamp_progress(-1.0), 0.0);
    assert_eq!(clamp_progress(0.25), 0.25);
    assert_eq!(clamp_progress(2.0), 1.0);
}

#[test]
fn test_pure_same_input_same_output() {
    let color = Keyframes::new(Color::rgb8(0xEC, 0x72, 0x63), Color::TRANSPARENT);
    for p in [0.0, 0.13, 0.5, 0.87, 1.0] {
        assert_eq!(color.at(p), color.at(p));
    }
}

#[test]
fn test_color_interpolates_each_channel_and_alpha() {
    let from = Color::rgba(1.0, 0.0, 0.5, 1.0);
    let to = Color::rgba(0.0, 1.0, 0.5, 0.0);
    let mid = Color::lerp(from, to, 0.25);

    assert!(approx(mid.r, 0.75));
    assert!(approx(mid.g, 0.25));
    assert!(approx(mid.b, 0.5));
    assert!(approx(mid.a, 0.75));
}

#[test]
fn test_fade_keeps_rgb_changes_only_alpha() {
    let accent = Color::from_hex("#EC7263FF").unwrap();
    let fade = Keyframes::new(accent, accent.with_alpha(0.0));
    let half = fade.at(0.5);

    assert_eq!(half.to_rgb(), accent.to_rgb());
    assert!(approx(half.a, 0.5));
}

#[test]
fn test_offset_moves_diagonally() {
    let shift = Keyframes::new(Offset::ZERO, Offset::splat(50.0));
    assert_eq!(shift.at(0.0), Offset::ZERO);
    assert_eq!(shift.at(0.5), Offset::new(25.0, 25.0));
    assert_eq!(shift.at(1.0), Offset::new(50.0, 50.0));
}

#[test]
fn test_arrays_interpolate_elementwise() {
    let pair = Keyframes::new([0.0, 10.0, -4.0], [1.0, 20.0, 4.0]);
    assert_eq!(pair.at(0.5), [0.5, 15.0, 0.0]);
}

#[test]
fn test_properties_from_one_snapshot_agree() {
    let height = Keyframes::new(7.0, 40.0);
    let scale = Keyframes::new(0.2, 1.0);

    for p in [0.1, 0.4, 0.9] {
        // Both derived from the same snapshot land at the same fraction of travel.
        let h = (height.at(p) - 7.0) / 33.0;
        let s = (scale.at(p) - 0.2) / 0.8;
        assert!(approx(h, s));
    }
}
