use std::time::Duration;

use morphmenu::animation::Animate;
use morphmenu::{Color, ConfigError, MenuConfig, MenuRoot, SpringConfig};

#[test]
fn test_default_sizes() {
    let config = MenuConfig::default();

    assert_eq!(config.bubble_size(), 70.0);
    assert_eq!(config.expanded_height(4), 255.0);
    assert_eq!(config.expanded_width, 300.0);
    assert_eq!(config.primary_count, 3);
    assert_eq!(config.accent.to_hex(), "#EC7263FF");
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_spring_matches_tension_friction_40_7() {
    let spring = SpringConfig::default();
    assert!((spring.stiffness - 230.2).abs() < 1e-3);
    assert_eq!(spring.damping, 22.0);
    assert_eq!(spring.mass, 1.0);
    assert!(!spring.overshoot_clamping);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(MenuConfig::from_json("{}").unwrap(), MenuConfig::default());
}

#[test]
fn test_partial_json_overrides_fields() {
    let config = MenuConfig::from_json(
        r##"{
            "expanded_width": 320,
            "accent": "#112233",
            "overlay": "#00000080",
            "spring": { "stiffness": 500, "overshoot_clamping": true }
        }"##,
    )
    .unwrap();

    assert_eq!(config.expanded_width, 320.0);
    assert_eq!(config.accent, Color::rgb8(0x11, 0x22, 0x33));
    assert_eq!(config.overlay.to_hex(), "#00000080");
    assert_eq!(config.spring.stiffness, 500.0);
    assert_eq!(config.spring.damping, 22.0);
    assert!(config.spring.overshoot_clamping);
    assert_eq!(config.icon_size, 20.0);
}

#[test]
fn test_bad_color_in_json_is_parse_error() {
    let err = MenuConfig::from_json(r##"{ "accent": "#zz" }"##).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_serialized_colors_are_hex() {
    let json = serde_json::to_value(MenuConfig::default()).unwrap();
    assert_eq!(json["accent"], "#EC7263FF");
    assert_eq!(json["overlay"], "#0000004D");
}

#[test]
fn test_rejects_width_below_bubble() {
    let err = MenuConfig::default().expanded_width(50.0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::WidthBelowBubble { .. }));
}

#[test]
fn test_rejects_inverted_item_heights() {
    let err = MenuConfig::default().item_heights(50.0, 40.0).validate().unwrap_err();
    match err {
        ConfigError::ItemHeightInverted {
            collapsed,
            expanded,
        } => assert_eq!((collapsed, expanded), (50.0, 40.0)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejects_non_positive_stiffness() {
    let config = MenuConfig::default().spring(SpringConfig::new(0.0, 22.0));
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NotPositive {
            field: "spring.stiffness",
            ..
        }
    ));
}

#[test]
fn test_rejects_spring_that_cannot_settle() {
    let cases = [
        ("spring.damping", SpringConfig::new(230.0, 0.0)),
        ("spring.damping", SpringConfig::new(230.0, -1.0)),
        ("spring.rest_displacement", SpringConfig::default().rest_thresholds(0.0, 0.001)),
        ("spring.rest_speed", SpringConfig::default().rest_thresholds(0.001, 0.0)),
    ];

    for (expected, spring) in cases {
        match MenuConfig::default().spring(spring).validate() {
            Err(ConfigError::NotPositive { field, .. }) => assert_eq!(field, expected),
            other => panic!("{expected}: unexpected result {other:?}"),
        }
    }
}

#[test]
fn test_rejects_nan_offset() {
    let config = MenuConfig::default().stagger_offset(f32::NAN);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Negative {
            field: "stagger_offset",
            ..
        })
    ));
}

#[test]
fn test_validated_springs_settle() {
    let configs = [
        SpringConfig::new(230.2, 0.5),
        SpringConfig::default().rest_thresholds(1e-6, 1e-6),
    ];

    for spring in configs {
        let config = MenuConfig::default().spring(spring);
        assert!(config.validate().is_ok());

        let mut root = MenuRoot::new(config, ["A", "B", "C", "D"], false);
        root.toggle();
        let mut frames = 0;
        while root.tick(Duration::from_millis(16)) {
            frames += 1;
            assert!(frames < 10_000, "{spring:?} still moving at {}", root.menu().progress());
        }
        assert_eq!(root.menu().progress(), 1.0);
    }
}

#[test]
fn test_error_messages_name_the_field() {
    let config = MenuConfig {
        icon_size: -2.0,
        ..MenuConfig::default()
    };
    let message = config.validate().unwrap_err().to_string();
    assert!(message.contains("icon_size"), "{message}");
}

#[test]
fn test_invalid_json_reports_parse_error() {
    assert!(matches!(
        MenuConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}
