use std::fs;

use quickplot::{Color, Colorset, Plot, PlotConfig};

#[test]
fn defaults_match_documented_values() {
    let cfg = PlotConfig::default();
    assert_eq!((cfg.width, cfg.height), (800, 600));
    assert_eq!(cfg.colorset, Colorset::Category10);
    assert_eq!(cfg.background, Color::WHITE);
    assert_eq!(cfg.locale, "en");
}

#[test]
fn partial_json_overrides_only_given_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plot.json");
    fs::write(&path, r##"{ "width": 1000, "colorset": "office", "background": "#FAFAFA" }"##)
        .unwrap();

    let cfg = PlotConfig::from_json_file(&path).unwrap();
    assert_eq!(cfg.width, 1000);
    assert_eq!(cfg.height, 600);
    assert_eq!(cfg.colorset, Colorset::Office);
    assert_eq!(cfg.background, Color::rgb(0xFA, 0xFA, 0xFA));

    let plot = Plot::with_config(cfg);
    assert_eq!(plot.colorset(), Colorset::Office);
}

#[test]
fn save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.json");
    let cfg = PlotConfig {
        width: 320,
        locale: "de".into(),
        ..Default::default()
    };
    cfg.save_json(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["width"], 320);
    assert_eq!(value["colorset"], "category10");
    assert_eq!(PlotConfig::from_json_file(&path).unwrap(), cfg);
}

#[test]
fn rejects_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    let zero = dir.path().join("zero.json");
    fs::write(&zero, r#"{ "height": 0 }"#).unwrap();
    assert!(PlotConfig::from_json_file(&zero).is_err());

    let bad_color = dir.path().join("color.json");
    fs::write(&bad_color, r#"{ "background": "not-a-color" }"#).unwrap();
    assert!(PlotConfig::from_json_file(&bad_color).is_err());

    assert!(PlotConfig::from_json_file(dir.path().join("missing.json")).is_err());
}
