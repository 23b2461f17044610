//! Gameplay tuning
//!
//! All the numbers the simulation runs on, in one RON-serializable struct.
//! Distances are world units (pixels), speeds are units per tick, times are
//! seconds. Missing fields in a config file fall back to the defaults.

use std::path::Path;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the player square
    pub player_size: f32,
    pub player_speed: f32,
    /// Minimum seconds between shots
    pub fire_interval: f64,

    /// Per-axis speed multiplier applied to the unit aim direction
    pub bullet_speed: f32,
    pub bullet_size: f32,
    /// Seconds before an unspent bullet is reaped
    pub bullet_lifetime: f64,

    pub enemy_size: f32,
    /// Pursuit speed
    pub enemy_speed: f32,
    /// Hit points on spawn. A hit at zero kills, so it takes health + 1 hits.
    pub enemy_health: u32,

    /// Seconds between enemy spawns
    pub spawn_interval: f64,
    /// Spawn ring around the player
    pub spawn_min_distance: f32,
    pub spawn_max_distance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_size: 25.0,
            player_speed: 2.0,
            fire_interval: 0.2,
            bullet_speed: 10.0,
            bullet_size: 5.0,
            bullet_lifetime: 5.0,
            enemy_size: 25.0,
            enemy_speed: 1.0,
            enemy_health: 5,
            spawn_interval: 2.0,
            spawn_min_distance: 100.0,
            spawn_max_distance: 300.0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load a config file, falling back to defaults if it is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(e)) if is_absent(&e) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation can't run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive_f32 = [
            ("player_size", self.player_size),
            ("bullet_size", self.bullet_size),
            ("enemy_size", self.enemy_size),
        ];
        for (name, value) in positive_f32 {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}", name, value
                )));
            }
        }

        let non_negative_f32 = [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("spawn_min_distance", self.spawn_min_distance),
            ("spawn_max_distance", self.spawn_max_distance),
        ];
        for (name, value) in non_negative_f32 {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be zero or more, got {}", name, value
                )));
            }
        }

        let intervals = [
            ("fire_interval", self.fire_interval),
            ("bullet_lifetime", self.bullet_lifetime),
            ("spawn_interval", self.spawn_interval),
        ];
        for (name, value) in intervals {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a positive number of seconds, got {}", name, value
                )));
            }
        }

        if self.spawn_min_distance > self.spawn_max_distance {
            return Err(ConfigError::ValidationError(format!(
                "spawn_min_distance ({}) is greater than spawn_max_distance ({})",
                self.spawn_min_distance, self.spawn_max_distance
            )));
        }

        Ok(())
    }
}

/// No file to read. The browser build has no filesystem at all.
fn is_absent(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::Unsupported
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron_str("(enemy_health: 2, spawn_interval: 0.5)").unwrap();
        assert_eq!(config.enemy_health, 2);
        assert_eq!(config.spawn_interval, 0.5);
        assert_eq!(config.player_speed, GameConfig::default().player_speed);
    }

    #[test]
    fn test_no_filesystem_counts_as_missing() {
        use std::io::{Error, ErrorKind};
        assert!(is_absent(&Error::from(ErrorKind::NotFound)));
        assert!(is_absent(&Error::from(ErrorKind::Unsupported)));
        assert!(!is_absent(&Error::from(ErrorKind::PermissionDenied)));
    }

    #[test]
    fn test_inverted_spawn_ring_is_rejected() {
        let err = GameConfig::from_ron_str("(spawn_min_distance: 400.0, spawn_max_distance: 100.0)")
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = GameConfig { fire_interval: 0.0, ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron_str("(player_speed: \"fast\")").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(player_speed: 3.0)").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.player_speed, 3.0);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let shipped = include_str!("../../assets/shmup.ron");
        assert_eq!(GameConfig::from_ron_str(shipped).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("nope.ron"));
        assert_eq!(config, GameConfig::default());
    }
}
