//! Generator configuration.
//!
//! [`GeneratorConfig`] carries everything the generator needs: where the
//! scripts live, how install commands are built, how many columns to lay out
//! and the static metadata of the page. It is resolved from built-in
//! defaults, an optional JSON file and finally command-line overrides, then
//! passed explicitly into the generator.

use crate::core::dirs::get_default_config_file;
use crate::core::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SCRIPTS_DIR: &str = "./scripts";
pub const DEFAULT_BASE_URL: &str = "https://edoardotosin.com/tools/";
pub const DEFAULT_FETCH_COMMAND: &str = "curl -sSL";
pub const DEFAULT_WINDOWS_FETCH_COMMAND: &str = "Invoke-RestMethod";
pub const DEFAULT_COLUMN_COUNT: usize = 3;
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub scripts_dir: PathBuf,
    /// Prefix joined with each filename; expected to end with `/`
    pub base_url: String,
    pub fetch_command: String,
    pub windows_fetch_command: String,
    pub column_count: usize,
    /// Written inside `scripts_dir`
    pub output_file: String,
    /// Sort filenames instead of keeping directory listing order
    pub sort: bool,
    pub page: PageMetadata,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scripts_dir: PathBuf::from(DEFAULT_SCRIPTS_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            fetch_command: DEFAULT_FETCH_COMMAND.to_string(),
            windows_fetch_command: DEFAULT_WINDOWS_FETCH_COMMAND.to_string(),
            column_count: DEFAULT_COLUMN_COUNT,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            sort: true,
            page: PageMetadata::default(),
        }
    }
}

/// Static content of the page head: title and social-preview tags
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PageMetadata {
    pub title: String,
    pub heading: String,
    pub site_name: String,
    pub tagline: String,
    pub description: String,
    /// Shorter variant used by the Twitter card
    pub twitter_description: String,
    pub author: String,
    pub image_url: String,
    pub page_url: String,
    pub twitter_handle: String,
    pub stylesheets: Vec<String>,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: "Automation Tools - Edoardo Tosin".to_string(),
            heading: "Automation Tools".to_string(),
            site_name: "Automation Tools".to_string(),
            tagline: "Computer Science Odyssey: Unraveling the Tech Maze".to_string(),
            description: "Welcome to my personal tech hub! This website is a reflection of my \
                journey in the fascinating world of technology. The blog section is a curated \
                collection of posts demonstrating my ability to cre..."
                .to_string(),
            twitter_description: "Welcome to my personal tech hub! This website is a reflection \
                of my journey in the fascinating world of technology. The blog section is a \
                curated collection of posts demonstrati..."
                .to_string(),
            author: "Edoardo Tosin".to_string(),
            image_url: "https://edoardotosin.com/assets/img/OGImg.jpg".to_string(),
            page_url: "https://edoardotosin.com/tools".to_string(),
            twitter_handle: "@EdoardoTosin".to_string(),
            stylesheets: vec![
                "../assets/css/style.css".to_string(),
                "../assets/css/main.css".to_string(),
                "../assets/css/Util.css".to_string(),
            ],
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub scripts_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub column_count: Option<usize>,
    pub output_file: Option<String>,
    pub unsorted: bool,
}

impl GeneratorConfig {
    /// Load the config from `path`, or from the default location when it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default file
    /// silently yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(IndexError::config_file_not_found(path));
                }
                Self::from_file(path)
            }
            None => {
                let default_file = get_default_config_file();
                if default_file.exists() {
                    Self::from_file(&default_file)
                } else {
                    log::debug!(
                        "No config file at {}, using defaults",
                        default_file.display()
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| IndexError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| IndexError::config_parse_failed(path, e))
    }

    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.scripts_dir {
            self.scripts_dir = dir;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(count) = overrides.column_count {
            self.column_count = count;
        }
        if let Some(output_file) = overrides.output_file {
            self.output_file = output_file;
        }
        if overrides.unsorted {
            self.sort = false;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.column_count == 0 {
            return Err(IndexError::invalid_column_count(self.column_count));
        }
        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        self.scripts_dir.join(&self.output_file)
    }
}
