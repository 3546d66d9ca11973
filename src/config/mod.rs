use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn default_threshold() -> f32 {
    0.6
}
fn default_cadence_ms() -> u64 {
    1000
}
fn default_sync_timeout() -> u64 {
    5
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite slot store.
    pub store: String,
    /// Maximum Euclidean distance for a face match.
    #[serde(default = "default_threshold")]
    pub match_threshold: f32,
    /// Recognition polling cadence in milliseconds.
    #[serde(default = "default_cadence_ms")]
    pub recognition_cadence_ms: u64,
    /// Collector endpoint for the best-effort record sync. Empty = no sync.
    #[serde(default)]
    pub sync_url: String,
    #[serde(default)]
    pub sync_enabled: bool,
    #[serde(default = "default_sync_timeout")]
    pub sync_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            match_threshold: default_threshold(),
            recognition_cadence_ms: default_cadence_ms(),
            sync_url: String::new(),
            sync_enabled: false,
            sync_timeout_secs: default_sync_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jornalero")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".jornalero")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jornalero.conf")
    }

    /// Return the full path of the SQLite slot store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("jornalero.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Seed a config file with the defaults. An existing file is left
    /// untouched, so user-edited settings survive every launch and a
    /// `--store` override stays scoped to the run.
    fn seed_config_file(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Ok(());
        }
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {path:?}");
        Ok(())
    }

    /// Ensure the config directory, config file and store file exist.
    /// `self.store` is used as given, relative to the working directory.
    pub fn ensure_files(&self, is_test: bool) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;

        // Test runs never touch the real config file
        if !is_test {
            Self::seed_config_file(&Self::config_file())?;
        }

        let store_path = Path::new(&self.store);
        if let Some(parent) = store_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !store_path.exists() {
            fs::File::create(store_path)?;
        }

        Ok(())
    }
}
