//! Process configuration: grid size, value range, optional fixed grid.
//!
//! Settings come from a TOML file (an explicit `--config` path, or the
//! user config dir) and fall back to built-in defaults. Parse problems
//! surface as warnings, never hard failures: a broken file means default
//! settings.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

use gridmean_core::CellInput;

/// Resolved process-wide settings, constructed once at startup and
/// passed explicitly to whatever needs them.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of columns for random generation.
    pub columns: i64,
    /// Number of rows for random generation.
    pub rows: i64,
    /// Inclusive lower bound for random values.
    pub min_value: i64,
    /// Inclusive upper bound for random values.
    pub max_value: i64,
    /// When set, this grid is validated and used instead of random
    /// generation.
    pub grid: Option<Vec<Vec<CellInput>>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: 5,
            rows: 7,
            min_value: -9,
            max_value: 9,
            grid: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    columns: Option<i64>,
    rows: Option<i64>,
    min_value: Option<i64>,
    max_value: Option<i64>,
    /// Raw TOML values so mixed-type rows reach validation instead of
    /// failing deserialization.
    grid: Option<Vec<Vec<toml::Value>>>,
}

/// Load configuration from `config_file`, or the user config file unless
/// `skip_user_config` is set. Returns the config plus any warnings for
/// the caller to report.
pub fn load(config_file: Option<&PathBuf>, skip_user_config: bool) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = Config::default();

    let path = config_file
        .cloned()
        .or_else(|| if skip_user_config { None } else { user_config_path() });

    if let Some(path) = path.as_ref() {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                    Ok(parsed) => apply(&mut config, parsed),
                    Err(err) => {
                        warnings.push(format!("Failed to parse {}: {}", path.display(), err))
                    }
                },
                Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
            }
        } else if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
    }

    normalize_bounds(&mut config, &mut warnings);

    (config, warnings)
}

fn apply(config: &mut Config, file: ConfigFile) {
    if let Some(columns) = file.columns {
        config.columns = columns;
    }
    if let Some(rows) = file.rows {
        config.rows = rows;
    }
    if let Some(min_value) = file.min_value {
        config.min_value = min_value;
    }
    if let Some(max_value) = file.max_value {
        config.max_value = max_value;
    }
    if let Some(grid) = file.grid {
        config.grid = Some(
            grid.iter()
                .map(|column| column.iter().map(cell_input).collect())
                .collect(),
        );
    }
}

/// Map a raw TOML value onto the loosely typed cell the validator checks.
fn cell_input(value: &toml::Value) -> CellInput {
    match value {
        toml::Value::Integer(n) => CellInput::Int(*n),
        toml::Value::Float(x) => CellInput::Float(*x),
        other => CellInput::Other(other.to_string()),
    }
}

/// An inverted range would make the generator panic; swap instead.
fn normalize_bounds(config: &mut Config, warnings: &mut Vec<String>) {
    if config.min_value > config.max_value {
        warnings.push(format!(
            "min_value {} is above max_value {}; swapping the bounds",
            config.min_value, config.max_value
        ));
        std::mem::swap(&mut config.min_value, &mut config.max_value);
    }
}

/// Default location of the user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridmean")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
