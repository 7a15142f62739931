//! Directory scanning.
//!
//! The scan lists a directory non-recursively through a [`FileListProvider`]
//! and keeps only entries whose names carry a recognized script suffix.
//! Tests inject a [`StaticListing`] to exercise the pipeline without touching
//! the filesystem.

use crate::core::error::{IndexError, Result};
use crate::core::script_kind::{ScriptFile, RECOGNIZED_EXTENSIONS};
use std::fs;
use std::path::PathBuf;

/// Source of the raw entry names of the scripts directory
pub trait FileListProvider {
    /// Entry names in listing order
    fn list(&self) -> Result<Vec<String>>;
}

/// Lists a real directory with `std::fs::read_dir`
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    path: PathBuf,
}

impl DirectoryListing {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileListProvider for DirectoryListing {
    fn list(&self) -> Result<Vec<String>> {
        log::debug!("Listing directory: {}", self.path.display());

        let entries =
            fs::read_dir(&self.path).map_err(|e| IndexError::from_read_dir(&self.path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| IndexError::from_read_dir(&self.path, e))?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("Skipping entry with non UTF-8 name: {raw:?}"),
            }
        }

        log::debug!("Found {} entries in {}", names.len(), self.path.display());
        Ok(names)
    }
}

/// Fixed in-memory listing
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    names: Vec<String>,
}

impl StaticListing {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileListProvider for StaticListing {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

pub fn is_recognized_script(name: &str) -> bool {
    RECOGNIZED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Install commands single-quote the URL, so a `'` in the name ends the quoting early
pub fn breaks_command_quoting(name: &str) -> bool {
    name.contains('\'')
}

/// List the provider and keep recognized scripts, optionally sorted by name
pub fn scan_scripts(provider: &dyn FileListProvider, sort: bool) -> Result<Vec<ScriptFile>> {
    let mut names: Vec<String> = provider
        .list()?
        .into_iter()
        .filter(|name| {
            let keep = is_recognized_script(name);
            if !keep {
                log::debug!("Ignoring non-script entry: {name}");
            }
            keep
        })
        .collect();

    if sort {
        names.sort();
    }

    for name in names.iter().filter(|name| breaks_command_quoting(name)) {
        log::warn!(
            "Script name contains a single quote, its install command will not run as-is: {name}"
        );
    }

    Ok(names.into_iter().map(ScriptFile::new).collect())
}
