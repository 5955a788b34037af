use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = HostConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.initial_weather, WeatherType::None);
    assert_eq!(cfg.idle_color(), Rgba8::WHITE);
    assert_eq!(cfg.frame_interval().as_millis(), 1);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg = HostConfig::from_json_str(r#"{ "initial_weather": "rainy" }"#).unwrap();
    assert_eq!(cfg.initial_weather, WeatherType::Rainy);
    assert_eq!(cfg.density, 2.0);
    assert_eq!(cfg.frame_interval_ms, 1);
}

#[test]
fn rejects_bad_density_and_interval() {
    assert!(matches!(
        HostConfig::from_json_str(r#"{ "density": 0.0 }"#),
        Err(SkypaintError::Validation(_))
    ));
    assert!(matches!(
        HostConfig::from_json_str(r#"{ "frame_interval_ms": 0 }"#),
        Err(SkypaintError::Validation(_))
    ));
}

#[test]
fn rejects_malformed_json_and_unknown_weather() {
    assert!(matches!(
        HostConfig::from_json_str("{"),
        Err(SkypaintError::Serde(_))
    ));
    assert!(matches!(
        HostConfig::from_json_str(r#"{ "initial_weather": "stormy" }"#),
        Err(SkypaintError::Serde(_))
    ));
}

#[test]
fn reads_from_file() {
    let path = std::env::temp_dir().join(format!("skypaint-cfg-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "initial_weather": "hazy", "idle_rgba": [0, 0, 0, 255] }"#)
        .unwrap();
    let cfg = HostConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(cfg.initial_weather, WeatherType::Hazy);
    assert_eq!(cfg.idle_color(), Rgba8::rgb(0x00_00_00));
}

#[test]
fn missing_file_is_reported() {
    let err = HostConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("read host config"));
}
