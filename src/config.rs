//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/calorie_tracker/config.toml` unless a
//! path is given explicitly. A missing default file means "use defaults".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CalorieError, Result};
use crate::models::DietGoal;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub diet: DietConfig,
}

/// Catalog source configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Diet defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DietConfig {
    /// Goal used until the user picks another one (S, WG, WL or the long names).
    #[serde(default = "default_goal")]
    pub goal: String,
}

impl Default for DietConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/food_catalog.csv")
}

fn default_goal() -> String {
    "standard".to_string()
}

impl Config {
    /// Load from `path` if given (must exist), otherwise from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from the standard config path, falling back to defaults.
    pub fn load_default() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("calorie_tracker").join("config.toml"))
    }

    /// The configured default diet goal.
    pub fn diet_goal(&self) -> Result<DietGoal> {
        self.diet
            .goal
            .parse()
            .map_err(|_| CalorieError::Config(format!("invalid diet goal '{}'", self.diet.goal)))
    }

    fn validate(&self) -> Result<()> {
        self.diet_goal()?;
        if self.catalog.path.as_os_str().is_empty() {
            return Err(CalorieError::Config("catalog path is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.path, PathBuf::from("data/food_catalog.csv"));
        assert_eq!(config.diet_goal().unwrap(), DietGoal::Standard);
    }

    #[test]
    fn test_default_catalog_is_bundled_sample() {
        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(Config::default().catalog.path);
        assert!(bundled.is_file(), "missing {:?}", bundled);
    }

    #[test]
    fn test_partial_config() {
        let file = write_config("[diet]\ngoal = \"WL\"\n");
        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.diet_goal().unwrap(), DietGoal::WeightLoss);
        assert_eq!(config.catalog.path, PathBuf::from("data/food_catalog.csv"));
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
[catalog]
path = "/srv/foods/catalog.csv"

[diet]
goal = "weight gain"
"#,
        );
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("/srv/foods/catalog.csv"));
        assert_eq!(config.diet_goal().unwrap(), DietGoal::WeightGain);
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let file = write_config("[diet]\ngoal = \"bulk\"\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(CalorieError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[catalog\npath = 3");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(CalorieError::Toml(_))
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        assert!(matches!(
            Config::load(Some(Path::new("/no/such/config.toml"))),
            Err(CalorieError::Io(_))
        ));
    }
}
