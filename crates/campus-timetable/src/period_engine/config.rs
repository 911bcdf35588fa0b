/// Configuration for grid layout and display derivation
use super::display::{DEFAULT_CAMPUS_SUFFIXES, DEFAULT_PALETTE};
use super::error::TimetableError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    pub grid: GridConfig,
    pub display: DisplayConfig,
}

/// Grid window and block geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First row of the grid (hour of day)
    pub base_hour: u32,
    /// Last row shown when no course runs later
    pub default_last_hour: u32,
    /// Gutter added to top/left and removed from each side of height/width
    pub inset: f32,
    /// Blocks are never drawn shorter than this
    pub min_visible_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            base_hour: 9,
            default_last_hour: 18,
            inset: 1.0,
            min_visible_height: 12.0,
        }
    }
}

/// Colors and location-name rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colors assigned to courses by id hash
    pub palette: Vec<String>,
    /// Campus names stripped from location strings
    pub campus_suffixes: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            campus_suffixes: DEFAULT_CAMPUS_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TimetableConfig {
    /// Parses a JSON configuration. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TimetableError> {
        let config: TimetableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(TimetableConfig)` - Loaded and validated configuration
    /// * `Err` - If the file can't be read, parsed, or holds inconsistent values
    pub fn load_from_file(path: &Path) -> Result<Self, TimetableError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks that the values describe a drawable grid.
    pub fn validate(&self) -> Result<(), TimetableError> {
        let grid = &self.grid;
        if grid.base_hour >= grid.default_last_hour {
            return Err(TimetableError::Config {
                message: format!(
                    "base_hour ({}) must be before default_last_hour ({})",
                    grid.base_hour, grid.default_last_hour
                ),
            });
        }
        if grid.default_last_hour > 23 {
            return Err(TimetableError::Config {
                message: format!("default_last_hour ({}) is past 23", grid.default_last_hour),
            });
        }
        let negative = |v: f32| v.is_nan() || v < 0.0;
        if negative(grid.inset) || negative(grid.min_visible_height) {
            return Err(TimetableError::Config {
                message: "inset and min_visible_height must be non-negative".to_string(),
            });
        }
        if self.display.palette.is_empty() {
            return Err(TimetableError::Config {
                message: "palette must contain at least one color".to_string(),
            });
        }
        Ok(())
    }
}
