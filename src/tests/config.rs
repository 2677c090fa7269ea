use crate::config::{Config, ConfigError};
use crate::storage::{BackendLocal, StorageManager};

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_creates_default_config() {
    let dir = temp_dir();
    let base_path = dir.path().to_str().unwrap();

    let config = Config::load_with(base_path).unwrap();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.max_page_size, 100);
    assert!(config.data_path.is_none());

    let store = BackendLocal::new(base_path).unwrap();
    assert!(store.exists("config.yaml"));
}

#[test]
fn test_fills_missing_fields_and_resaves() {
    let dir = temp_dir();
    let base_path = dir.path().to_str().unwrap();
    let store = BackendLocal::new(base_path).unwrap();
    store.write("config.yaml", b"page_size: 25\n").unwrap();

    let config = Config::load_with(base_path).unwrap();
    assert_eq!(config.page_size, 25);
    assert_eq!(config.max_page_size, 100);

    let saved = String::from_utf8(store.read("config.yaml").unwrap()).unwrap();
    assert!(saved.contains("max_page_size: 100"));
}

#[test]
fn test_rejects_zero_page_size() {
    let dir = temp_dir();
    let base_path = dir.path().to_str().unwrap();
    let store = BackendLocal::new(base_path).unwrap();
    store.write("config.yaml", b"page_size: 0\n").unwrap();

    assert!(matches!(
        Config::load_with(base_path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_rejects_malformed_yaml() {
    let dir = temp_dir();
    let base_path = dir.path().to_str().unwrap();
    let store = BackendLocal::new(base_path).unwrap();
    store.write("config.yaml", b"page_size: [oops\n").unwrap();

    assert!(matches!(
        Config::load_with(base_path),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_effective_page_size() {
    let mut config = Config::default();
    config.max_page_size = 50;
    assert_eq!(config.effective_page_size(None), 10);
    assert_eq!(config.effective_page_size(Some(20)), 20);
    assert_eq!(config.effective_page_size(Some(500)), 50);
    assert_eq!(config.effective_page_size(Some(0)), 1);
}
