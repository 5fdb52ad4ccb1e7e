use std::fs;
use std::path::PathBuf;

use crate::config::VisualConfig;
use crate::errors::VisualError;

#[test]
fn test_default_config() {
    let config = VisualConfig::default();
    assert_eq!(config.root_dir, PathBuf::from("visual"));
    assert_eq!(config.label_offset, (23, 26));
    assert_eq!(config.sampler_columns, 5);
    assert_eq!(config.frame_delay_ms, 400);
    assert_eq!(config.gif_downscale, 10);
    assert!(config.normalize_cells);
    assert_eq!(config.seed, None);
    assert_eq!(config.model_dir("wgan"), PathBuf::from("visual").join("wgan"));
}

#[test]
fn test_save_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf").join("visual.json");
    let config = VisualConfig {
        root_dir: dir.path().join("out"),
        cell_scale: 2,
        seed: Some(7),
        ..VisualConfig::default()
    };
    config.save(&path).unwrap();
    assert_eq!(VisualConfig::load(&path).unwrap(), config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visual.json");
    fs::write(&path, r#"{ "frame_delay_ms": 100, "seed": 3 }"#).unwrap();
    let config = VisualConfig::load(&path).unwrap();
    assert_eq!(config.frame_delay_ms, 100);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.cell_scale, VisualConfig::default().cell_scale);

    fs::write(&path, "not json").unwrap();
    assert!(matches!(VisualConfig::load(&path), Err(VisualError::Config(_))));
}

#[test]
fn test_load_or_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visual.json");
    let config = VisualConfig::load_or_init(&path).unwrap();
    assert_eq!(config, VisualConfig::default());
    assert!(path.exists());

    // 已存在时读取文件而非覆盖
    let changed = VisualConfig {
        gif_downscale: 3,
        ..config
    };
    changed.save(&path).unwrap();
    assert_eq!(VisualConfig::load_or_init(&path).unwrap(), changed);
}
