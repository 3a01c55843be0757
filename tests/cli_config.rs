//! Integration tests for merging CLI flags over the config file.

use blockview::cli::{Args, Job};
use blockview::color::ColorMode;
use blockview::config::{Config, ConfigError, OutputPath};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_config_file_drives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[render]\ninfo_bar = false\ndefault_print = true\n\n[capture]\ncursor = true\n",
    );
    let path_str = path.to_str().unwrap();

    let args = Args::parse_from(["blockview", "--window", "Notepad", "ansi16", "-c", path_str]);
    let file = Config::load(args.config.as_deref()).unwrap();
    let job = args.job().unwrap().unwrap();

    assert_eq!(job.mode(), ColorMode::Ansi16);
    let config = args.render_config(&file, &job);
    assert!(!config.info_bar);
    assert!(config.auto_resize);
    assert_eq!(config.output_path, OutputPath::Buffered);
    assert!(args.window_target(&file, "Notepad").draw_cursor);
}

#[test]
fn test_no_info_flag_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[render]\ninfo_bar = true\n");

    let args = Args::parse_from([
        "blockview",
        "--image",
        "a.png",
        "TrueColor",
        "--no-info",
        "--config",
        path.to_str().unwrap(),
    ]);
    let file = Config::load(args.config.as_deref()).unwrap();
    let job = args.job().unwrap().unwrap();
    assert!(matches!(job, Job::Image { .. }));

    let config = args.render_config(&file, &job);
    assert!(!config.info_bar);
    assert!(!config.auto_resize);
    assert_eq!(config.output_path, OutputPath::Raw);
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let file = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(file, Config::default());
    assert!(file.render.info_bar);
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[render\ninfo_bar = maybe");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}
