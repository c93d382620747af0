use std::fs;

use querysync_core::config::{resolve_with_base, Config, HistoryMode, SyncConfig};
use tempfile::TempDir;

#[test]
fn defaults_apply_without_files() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(tmp.path(), Some("test")).expect("load");
    assert_eq!(config.settings(), &SyncConfig::default());
    assert_eq!(config.settings().site.root(), "/");
    assert_eq!(config.settings().history.mode, HistoryMode::Replace);
    assert_eq!(config.env(), "test");
}

#[test]
fn env_overlay_overrides_base_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("querysync.toml"),
        "[site]\nbase_path = \"/keymaps\"\npaginate = 12\n\n[history]\nmode = \"push\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("querysync.prod.toml"), "[site]\npaginate = 30\n").unwrap();

    let dev = Config::load_from(tmp.path(), Some("dev")).expect("dev");
    assert_eq!(dev.settings().site.paginate, 12);
    assert_eq!(dev.settings().site.root(), "/keymaps/");
    assert_eq!(dev.settings().history.mode, HistoryMode::Push);

    let prod = Config::load_from(tmp.path(), Some("prod")).expect("prod");
    assert_eq!(prod.settings().site.paginate, 30);
    assert_eq!(prod.settings().site.base_path, "/keymaps");
    assert_eq!(prod.get::<u32>("site.paginate").expect("raw key"), 30);
}

#[test]
fn zero_page_size_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("querysync.toml"), "[site]\npaginate = 0\n").unwrap();
    let err = Config::load_from(tmp.path(), Some("test")).err().expect("invalid config");
    assert!(err.to_string().contains("paginate"), "got: {err}");
}

#[test]
fn relative_base_path_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("querysync.toml"), "[site]\nbase_path = \"keymaps\"\n").unwrap();
    assert!(Config::load_from(tmp.path(), Some("test")).is_err());
}

#[test]
fn resolve_with_base_joins_relative_paths() {
    let tmp = TempDir::new().unwrap();
    let resolved = resolve_with_base(tmp.path(), "scenario.json");
    assert_eq!(resolved, tmp.path().join("scenario.json"));
    let absolute = tmp.path().join("x.json");
    assert_eq!(resolve_with_base(tmp.path(), absolute.to_string_lossy()), absolute);
}
