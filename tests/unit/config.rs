use super::*;

#[test]
fn defaults_match_the_classic_render() {
    let cfg = PinwheelConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas_side(), 1024);
    assert_eq!(cfg.arc_radius(), 256);
    assert_eq!(cfg.swirl_radius(), 256);
    assert_eq!(cfg.frame_delay_ms(), 33);
    assert_eq!(cfg.output_size(), 512);
}

#[test]
fn zero_size_is_a_geometry_error() {
    let cfg = PinwheelConfig {
        size: 0,
        ..PinwheelConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(PinwheelError::Geometry(_))));
}

#[test]
fn oversized_canvas_is_rejected() {
    let cfg = PinwheelConfig {
        size: 40_000,
        ..PinwheelConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(PinwheelError::Geometry(_))));
}

#[test]
fn size_one_has_no_swirl_radius() {
    let cfg = PinwheelConfig {
        size: 1,
        ..PinwheelConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(PinwheelError::Geometry(_))));

    let cfg = PinwheelConfig {
        size: 1,
        swirl_radius: Some(1),
        ..PinwheelConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn bad_fps_strength_and_threads_are_rejected() {
    for cfg in [
        PinwheelConfig {
            fps: 0,
            ..PinwheelConfig::default()
        },
        PinwheelConfig {
            swirl_strength: f64::NAN,
            ..PinwheelConfig::default()
        },
        PinwheelConfig {
            threads: Some(0),
            ..PinwheelConfig::default()
        },
    ] {
        assert!(matches!(cfg.validate(), Err(PinwheelError::Geometry(_))));
    }
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{ "size": 64, "swirl_radius": 20 }"#).unwrap();

    let cfg = PinwheelConfig::from_path(&path).unwrap();
    assert_eq!(cfg.size, 64);
    assert_eq!(cfg.fps, 30);
    assert_eq!(cfg.swirl_radius(), 20);
    assert_eq!(cfg.swirl_strength, 2.0);
}

#[test]
fn unknown_json_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{ "colour": "red" }"#).unwrap();
    assert!(PinwheelConfig::from_path(&path).is_err());
}
