use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::WhistError;
use crate::players::{PlayerNames, PLAYER_COUNT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub table: TableConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub highlight_leader: bool,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            table: TableConfig {
                players: PlayerNames::default().to_vec(),
            },
            board: BoardConfig {
                highlight_leader: true,
                tick_rate_ms: 250,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                file: None,
            },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let output = toml::to_string_pretty(self).context("render config TOML")?;
        Ok(output)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path`, or the defaults when no file has been written yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default_config());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let contents = self.to_toml_string()?;
        fs::write(path, contents).with_context(|| format!("write config at {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), WhistError> {
        if self.table.players.len() != PLAYER_COUNT {
            return Err(WhistError::InvalidConfig(format!(
                "table.players needs {PLAYER_COUNT} names, found {}",
                self.table.players.len()
            )));
        }
        if self.board.tick_rate_ms == 0 {
            return Err(WhistError::InvalidConfig(
                "board.tick_rate_ms must be positive".to_string(),
            ));
        }
        let level = self.logging.level.trim();
        if level.is_empty() {
            return Err(WhistError::InvalidConfig(
                "logging.level must not be empty".to_string(),
            ));
        }
        if let Err(err) = EnvFilter::try_new(level) {
            return Err(WhistError::InvalidConfig(format!(
                "logging.level {level:?} is not a filter directive: {err}"
            )));
        }
        Ok(())
    }

    pub fn player_names(&self) -> Result<PlayerNames, WhistError> {
        PlayerNames::from_list(&self.table.players)
    }

    pub fn log_file(&self, paths: &ConfigPaths) -> Option<PathBuf> {
        self.logging
            .file
            .as_deref()
            .map(|file| PathBuf::from(file.replace("${DATA_DIR}", &paths.data_dir.to_string_lossy())))
    }
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("io", "whist", "whist")
            .ok_or_else(|| anyhow::anyhow!("unable to determine project directories"))?;
        Ok(Self {
            config_path: project_dirs.config_dir().join("config.toml"),
            data_dir: project_dirs.data_dir().to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Player;

    #[test]
    fn test_default_round_trip() {
        let config = Config::default_config();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[table]"));
        assert!(!rendered.contains("file"));

        let parsed = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed.table.players, config.table.players);
        assert!(parsed.board.highlight_leader);
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn test_rejects_three_players() {
        let contents = r#"
            [table]
            players = ["a", "b", "c"]

            [board]
            highlight_leader = false
            tick_rate_ms = 100

            [logging]
            level = "info"
        "#;
        let err = Config::from_toml_str(contents).unwrap_err();
        assert!(err.to_string().contains("table.players"));
    }

    #[test]
    fn test_rejects_unparsable_level() {
        let mut config = Config::default_config();
        config.logging.level = "whist=loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));

        config.logging.level = "info,scoring_engine=trace".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_names_from_config() {
        let mut config = Config::default_config();
        config.table.players[2] = "Carol".to_string();
        let names = config.player_names().unwrap();
        assert_eq!(names.display(Player::new(2).unwrap()), "Carol");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default_config();
        config.logging.file = Some("${DATA_DIR}/whist.log".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        let paths = ConfigPaths {
            config_path: path.clone(),
            data_dir: PathBuf::from("/tmp/whist-data"),
        };
        assert_eq!(
            loaded.log_file(&paths),
            Some(PathBuf::from("/tmp/whist-data/whist.log"))
        );
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.table.players.len(), PLAYER_COUNT);
    }
}
