use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigureError, Result};
use crate::placeholder::PlaceholderSet;

/// Identifier prefix of the m4 definitions and placeholder tokens.
pub const DEFAULT_PREFIX: &str = "libmodbus";

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "modbus-configure.toml";

/// Represents the complete configuration for modbus-configure.
///
/// Names the definition file, the identifier prefix and the templates to stamp.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_definition_file")]
    pub definition_file: PathBuf,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Fail when the definition file declares no version at all
    #[serde(default)]
    pub strict: bool,

    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

/// A template and the file generated from it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Target {
    pub template: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub placeholders: PlaceholderSet,
}

impl Target {
    pub fn new(
        template: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        placeholders: PlaceholderSet,
    ) -> Self {
        Target {
            template: template.into(),
            output: output.into(),
            placeholders,
        }
    }
}

fn default_definition_file() -> PathBuf {
    PathBuf::from("configure.ac")
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Returns the two libmodbus targets: the JNI build config and the version header.
fn default_targets() -> Vec<Target> {
    vec![
        Target::new("jni/config.h.in", "jni/config.h", PlaceholderSet::Full),
        Target::new(
            "src/modbus-version.h.in",
            "jni/modbus-version.h",
            PlaceholderSet::All,
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            definition_file: default_definition_file(),
            prefix: default_prefix(),
            strict: false,
            targets: default_targets(),
        }
    }
}

impl Config {
    /// Checks the values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(ConfigureError::config("prefix must not be empty"));
        }
        if !self
            .prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigureError::config(format!(
                "prefix '{}' may only contain letters, digits and '_'",
                self.prefix
            )));
        }
        if self.targets.is_empty() {
            return Err(ConfigureError::config("no targets configured"));
        }
        for target in &self.targets {
            if target.template == target.output {
                return Err(ConfigureError::config(format!(
                    "target '{}' would overwrite its own template",
                    target.template.display()
                )));
            }
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `modbus-configure.toml` in the project root
/// 3. `.modbus-configure.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `root` - Project root searched for `modbus-configure.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let local = root.join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| ConfigureError::read(&path, e))?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ConfigureError::config(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}
