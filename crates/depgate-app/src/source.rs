//! Config source collaborator: where the config and ignore file texts come from.

use camino::{Utf8Path, Utf8PathBuf};
use depgate_settings::{CONFIG_FILE_NAME, ConfigError, IGNORE_FILE_NAME};
use tracing::{debug, warn};

/// Raw texts of the files that shape one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Contents of `depgate.toml`. Empty text means "use the defaults".
    pub config_text: String,
    /// Contents of the ignore file, when one could be loaded.
    pub ignore_text: Option<String>,
}

pub trait ConfigSource {
    fn load(&self, root_dir: &Utf8Path) -> Result<ConfigFiles, ConfigError>;
}

/// Reads `depgate.toml` and `.depgate-ignore` from the root directory.
///
/// A missing config file yields the defaults. The ignore file never fails a run: a file that
/// cannot be read is logged and nothing is ignored.
#[derive(Clone, Debug)]
pub struct FileConfigSource {
    config: Utf8PathBuf,
}

impl Default for FileConfigSource {
    fn default() -> Self {
        Self::new(CONFIG_FILE_NAME)
    }
}

impl FileConfigSource {
    /// Relative paths are resolved against the root directory at load time.
    pub fn new<P: Into<Utf8PathBuf>>(config: P) -> Self {
        Self {
            config: config.into(),
        }
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self, root_dir: &Utf8Path) -> Result<ConfigFiles, ConfigError> {
        if !root_dir.is_dir() {
            return Err(ConfigError::RootDirNotFound(root_dir.to_string()));
        }

        let config_path = root_dir.join(&self.config);
        let config_text = if config_path.exists() {
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_string(),
                source,
            })?
        } else {
            debug!(path = %config_path, "no config file; defaults apply");
            String::new()
        };

        let ignore_path = root_dir.join(IGNORE_FILE_NAME);
        let ignore_text = if ignore_path.exists() {
            match std::fs::read_to_string(&ignore_path) {
                Ok(text) => Some(text),
                Err(err) => {
                    warn!("cannot load ignore file {ignore_path}: {err}; nothing will be ignored");
                    None
                }
            }
        } else {
            None
        };

        Ok(ConfigFiles {
            config_text,
            ignore_text,
        })
    }
}

/// Config texts held in memory.
#[derive(Clone, Debug, Default)]
pub struct InlineConfig {
    files: ConfigFiles,
}

impl InlineConfig {
    pub fn new<S: Into<String>>(config_text: S) -> Self {
        Self {
            files: ConfigFiles {
                config_text: config_text.into(),
                ignore_text: None,
            },
        }
    }

    pub fn with_ignore<S: Into<String>>(mut self, ignore_text: S) -> Self {
        self.files.ignore_text = Some(ignore_text.into());
        self
    }
}

impl ConfigSource for InlineConfig {
    fn load(&self, _root_dir: &Utf8Path) -> Result<ConfigFiles, ConfigError> {
        Ok(self.files.clone())
    }
}
