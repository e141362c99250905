use crate::config::{ConfigStore, CONFIG_FILENAME};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the home directory is not dropped until the test is done
    pub _home_dir: TempDir,
    pub store: ConfigStore,
    pub home: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// Fresh home directory; opening the store writes the default config.
    pub fn new() -> Self {
        let home_dir = tempfile::tempdir().expect("failed to create temp dir");
        Self::open(home_dir)
    }

    /// Home directory whose config file already holds `content`.
    pub fn with_config(content: &str) -> Self {
        let home_dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(home_dir.path().join(CONFIG_FILENAME), content)
            .expect("failed to write config");
        Self::open(home_dir)
    }

    fn open(home_dir: TempDir) -> Self {
        let home = home_dir.path().to_path_buf();
        let store = ConfigStore::open(&home).expect("failed to open config store");
        Self {
            _home_dir: home_dir,
            store,
            home,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILENAME)
    }

    pub fn read_config_file(&self) -> String {
        fs::read_to_string(self.config_file()).expect("failed to read config")
    }
}
