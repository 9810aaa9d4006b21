use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::model::settings::Settings;
use crate::repository::traits::SettingsRepository;

const DEFAULT_FILE_NAME: &str = "settings.json";
const DEFAULT_DIR_NAME: &str = ".remunera";

/// Data directory, `~/.remunera` unless overridden.
pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(DEFAULT_DIR_NAME))
        }
    }
}

/// Read-mostly settings file. Nothing is written unless `save` is called.
#[derive(Clone)]
pub struct FileSettingsRepository {
    file_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = data_dir(base_dir)?.join(DEFAULT_FILE_NAME);
        Ok(FileSettingsRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Where `load` takes its settings from, for logging once a subscriber is installed.
    pub fn describe_source(&self) -> String {
        if self.exists() {
            format!("Loaded settings from {}", self.file_path.display())
        } else {
            format!("No settings file at {}, using defaults", self.file_path.display())
        }
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            return Ok(Settings::default());
        }

        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid settings file {}", self.file_path.display()))?;
        settings.profile.validate()
            .with_context(|| format!("Invalid profile in {}", self.file_path.display()))?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        settings.profile.validate()?;
        if let Some(dir) = self.file_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        Ok(())
    }
}
