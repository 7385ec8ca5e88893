use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::collector::{CollectOptions, DEFAULT_NOTE_EXTENSION};
use crate::error::{NotesIndexError, Result};

const CONFIG_DIR: &str = ".notes";
const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# notes-index configuration file
# Location: <notes root>/.notes/config.toml
# All paths are relative to the notes root.

[index]
# Text prepended verbatim to the generated index
header = ".notes/header.md"

# Text appended verbatim to the generated index
footer = ".notes/footer.md"

# Generated index (overwritten on every run)
output = "README.md"

# Suffix a file name must end with to be collected as a note
extension = ".md"
"#;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
}

/// Locations and filters used when generating the index
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_header")]
    pub header: PathBuf,

    #[serde(default = "default_footer")]
    pub footer: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_header() -> PathBuf {
    Path::new(CONFIG_DIR).join("header.md")
}

fn default_footer() -> PathBuf {
    Path::new(CONFIG_DIR).join("footer.md")
}

fn default_output() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_extension() -> String {
    DEFAULT_NOTE_EXTENSION.to_string()
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            footer: default_footer(),
            output: default_output(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load config from the notes root, falling back to defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| NotesIndexError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Get config file path
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(root: &Path) -> Result<PathBuf> {
        let path = Self::path(root);
        fs::create_dir_all(root.join(CONFIG_DIR))?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    pub fn header_path(&self, root: &Path) -> PathBuf {
        root.join(&self.index.header)
    }

    pub fn footer_path(&self, root: &Path) -> PathBuf {
        root.join(&self.index.footer)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.index.output)
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions::with_extension(self.index.extension.clone())
    }
}
