use serde_json::{json, Value};
use std::fs;
use tasklineapp::config::{
    Assignment, ConfigDocument, ConfigStore, StorageModule, StorageModuleType, CONFIG_FILENAME,
};
use tasklineapp::error::TasklineError;
use tempfile::TempDir;

fn setup() -> (TempDir, ConfigStore) {
    let home = TempDir::new().unwrap();
    let store = ConfigStore::open(home.path()).unwrap();
    (home, store)
}

fn setup_with(content: &str) -> (TempDir, ConfigStore) {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(CONFIG_FILENAME), content).unwrap();
    let store = ConfigStore::open(home.path()).unwrap();
    (home, store)
}

fn read_file(home: &TempDir) -> String {
    fs::read_to_string(home.path().join(CONFIG_FILENAME)).unwrap()
}

#[test]
fn test_fresh_home_gets_default_file() {
    let (home, _store) = setup();

    let on_disk = read_file(&home);
    let parsed: ConfigDocument = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed, ConfigDocument::default());

    // 4-space indentation, no expansion of "~" on disk
    assert!(on_disk.contains("\n    \"tasklineDirectory\": \"~\""));
    assert!(on_disk.contains("\n        {\n            \"name\": \"local\""));
}

#[test]
fn test_reopening_does_not_touch_existing_file() {
    let (home, _store) = setup();
    let path = home.path().join(CONFIG_FILENAME);
    let content_before = read_file(&home);
    let mtime_before = fs::metadata(&path).unwrap().modified().unwrap();

    ConfigStore::open(home.path()).unwrap();
    ConfigStore::open(home.path()).unwrap();

    assert_eq!(read_file(&home), content_before);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), mtime_before);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let (_home, store) = setup_with(
        r#"{"activeStorageModule": "local", "storageModules": [{"name": "local", "type": "local", "config": {}}]}"#,
    );

    let config = store.get().unwrap();
    let defaults = store.get_default();
    assert_eq!(config.active_storage_module, "local");
    assert_eq!(config.language, defaults.language);
    assert_eq!(config.dateformat, defaults.dateformat);
    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.display_complete_tasks, defaults.display_complete_tasks);
}

#[test]
fn test_present_fields_override_defaults() {
    let (_home, store) = setup_with(r#"{"language": "de", "displayProgressOverview": false}"#);

    let config = store.get().unwrap();
    assert_eq!(config.language, "de");
    assert!(!config.display_progress_overview);
    assert!(config.display_complete_tasks);
}

#[test]
fn test_home_relative_directory_is_expanded_once() {
    let (home, store) = setup_with(r#"{"tasklineDirectory": "~/tasks"}"#);
    let expected = home.path().join("tasks").to_string_lossy().into_owned();

    assert_eq!(store.get().unwrap().taskline_directory, expected);
    assert_eq!(store.get().unwrap().taskline_directory, expected);

    // Reading never rewrites the file
    assert_eq!(read_file(&home), r#"{"tasklineDirectory": "~/tasks"}"#);
}

#[test]
fn test_absolute_directory_untouched() {
    let (_home, store) = setup_with(r#"{"tasklineDirectory": "/srv/tasks"}"#);
    assert_eq!(store.get().unwrap().taskline_directory, "/srv/tasks");
}

#[test]
fn test_set_then_get_round_trips() {
    let (_home, store) = setup();
    let document = ConfigDocument {
        language: "es".to_string(),
        taskline_directory: "/data/taskline".to_string(),
        display_complete_tasks: false,
        active_storage_module: "cloud".to_string(),
        storage_modules: vec![StorageModule {
            name: "cloud".to_string(),
            kind: StorageModuleType::Firestore,
            config: json!({"projectId": "tasks"}),
        }],
        ..ConfigDocument::default()
    };

    store.set(&document).unwrap();
    assert_eq!(store.get().unwrap(), document);
}

#[test]
fn test_set_partial_raw_document_merges_over_defaults() {
    let (_home, store) = setup();
    store.set_raw(&json!({"language": "nl"})).unwrap();

    let config = store.get().unwrap();
    assert_eq!(config.language, "nl");
    assert_eq!(config.dateformat, store.get_default().dateformat);
}

#[test]
fn test_set_invalidates_cache() {
    let (_home, store) = setup();
    assert_eq!(store.get().unwrap().language, "en");

    let mut config = store.get().unwrap();
    config.language = "fi".to_string();
    store.set(&config).unwrap();

    assert_eq!(store.get().unwrap().language, "fi");
}

#[test]
fn test_set_writes_four_space_json() {
    let (home, store) = setup();
    store.set_raw(&json!({"theme": {"colors": {"error": "red"}}})).unwrap();
    assert_eq!(
        read_file(&home),
        "{\n    \"theme\": {\n        \"colors\": {\n            \"error\": \"red\"\n        }\n    }\n}"
    );
}

#[test]
fn test_set_value_changes_only_target() {
    let (_home, store) = setup();
    let before = store.get_raw().unwrap();
    assert_eq!(before["theme"]["colors"]["error"], json!("red"));

    store.set_value("theme.colors.error", "blue").unwrap();

    let after = store.get_raw().unwrap();
    assert_eq!(after["theme"]["colors"]["error"], json!("blue"));
    for sibling in ["pale", "task", "icons"] {
        assert_eq!(after["theme"]["colors"][sibling], before["theme"]["colors"][sibling]);
    }
    assert_eq!(store.get().unwrap().theme.colors.error, "blue");
}

#[test]
fn test_set_value_persists_whole_document_keeping_tilde() {
    let (home, store) = setup_with(r#"{"tasklineDirectory": "~/tasks"}"#);
    store.set_value("language", "sv").unwrap();

    let on_disk: Value = serde_json::from_str(&read_file(&home)).unwrap();
    assert_eq!(on_disk["language"], json!("sv"));
    assert_eq!(on_disk["dateformat"], json!(store.get_default().dateformat));
    assert_eq!(on_disk["tasklineDirectory"], json!("~/tasks"));

    let expected = home.path().join("tasks").to_string_lossy().into_owned();
    assert_eq!(store.get().unwrap().taskline_directory, expected);
}

#[test]
fn test_set_value_on_directory_writes_given_form() {
    let (home, store) = setup();
    store.set_value("tasklineDirectory", "/srv/tasks").unwrap();

    let on_disk: Value = serde_json::from_str(&read_file(&home)).unwrap();
    assert_eq!(on_disk["tasklineDirectory"], json!("/srv/tasks"));
}

#[test]
fn test_set_value_with_empty_segment_is_noop() {
    let (home, store) = setup();
    let before = read_file(&home);

    let outcome = store.set_value("theme..error", "x").unwrap();

    assert!(matches!(outcome, Assignment::Skipped(_)));
    assert_eq!(read_file(&home), before);
}

#[test]
fn test_set_value_never_creates_intermediate_keys() {
    let (home, store) = setup();
    let before = read_file(&home);

    store.set_value("boards.default.color", "green").unwrap();

    assert_eq!(read_file(&home), before);
    assert_eq!(store.get_value("boards").unwrap(), None);
}

#[test]
fn test_set_value_strict_reports_bad_paths() {
    let (home, store) = setup();
    let before = read_file(&home);

    for key in ["theme..error", "boards.default.color", "language.code"] {
        let err = store.set_value_strict(key, "x").unwrap_err();
        assert!(
            matches!(&err, TasklineError::InvalidPath { path, .. } if path == key),
            "{:?}",
            err
        );
    }
    assert_eq!(read_file(&home), before);
}

#[test]
fn test_set_value_rejects_value_of_wrong_type() {
    let (home, store) = setup();
    let before = read_file(&home);

    for result in [
        store.set_value("theme.colors.error", 196).map(|_| ()),
        store.set_value_strict("theme.colors.error", 196),
        store.set_value("storageModules.0.type", "ftp").map(|_| ()),
    ] {
        assert!(matches!(result, Err(TasklineError::InvalidPath { .. })));
    }

    assert_eq!(read_file(&home), before);
    assert_eq!(store.get().unwrap().theme.colors.error, "red");
    let reopened = ConfigStore::open(home.path()).unwrap();
    assert_eq!(reopened.get().unwrap().theme.colors.error, "red");
}

#[test]
fn test_set_value_into_storage_module_config() {
    let (_home, store) = setup();
    store
        .set_value_strict("storageModules.0.config.path", "/tmp/tasks")
        .unwrap();

    let config = store.get().unwrap();
    let module = config.active_storage_module().unwrap();
    assert_eq!(module.config, json!({"path": "/tmp/tasks"}));
}

#[test]
fn test_corrupt_file_is_hard_error() {
    let (home, store) = setup_with("{\"language\": ");

    assert!(matches!(store.get(), Err(TasklineError::Parse(_))));
    assert!(matches!(store.set_value("language", "en"), Err(TasklineError::Parse(_))));
    // Nothing was overwritten
    assert_eq!(read_file(&home), "{\"language\": ");
}

#[test]
fn test_reset_writes_defaults() {
    let (home, store) = setup();
    store.set_value("language", "sv").unwrap();
    store.reset().unwrap();

    let parsed: ConfigDocument = serde_json::from_str(&read_file(&home)).unwrap();
    assert_eq!(&parsed, store.get_default());
    assert_eq!(store.get().unwrap().language, "en");
}

#[test]
fn test_independent_stores_do_not_share_cache() {
    let (_home_a, store_a) = setup();
    let (_home_b, store_b) = setup();

    store_a.set_value("language", "pl").unwrap();

    assert_eq!(store_a.get().unwrap().language, "pl");
    assert_eq!(store_b.get().unwrap().language, "en");
}

#[test]
fn test_unknown_keys_survive_set_value() {
    let (_home, store) = setup_with(r#"{"boards": {"default": "inbox"}}"#);

    store.set_value("boards.default", "work").unwrap();

    let config = store.get().unwrap();
    assert_eq!(config.extra.get("boards"), Some(&json!({"default": "work"})));
}
