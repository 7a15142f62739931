//! Type-safe script classification.
//!
//! This module defines [`ScriptKind`], the closed set of script flavours the
//! index knows how to install, and [`ScriptFile`], a scanned filename paired
//! with its kind. Classification happens once, in [`ScriptKind::from_file_name`];
//! every later stage dispatches on the enum instead of re-matching suffixes.
//!
//! # Public API
//! - [`ScriptKind`]: Shell, Python, PowerShell or Unsupported
//! - [`ScriptFile`]: A recognized entry of the scanned directory
//! - [`RECOGNIZED_EXTENSIONS`]: Suffix allowlist used by the scanner

use serde::Serialize;
use std::fmt;

/// Suffixes accepted by the directory scan, in classification order
pub const RECOGNIZED_EXTENSIONS: [&str; 5] = [".sh", ".bash", ".py", ".pyw", ".ps1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScriptKind {
    /// `.sh` / `.bash`, piped into bash
    Shell,
    /// `.py` / `.pyw`, piped into python3
    Python,
    /// `.ps1`, piped into Invoke-Expression
    PowerShell,
    Unsupported,
}

impl ScriptKind {
    /// Classify a filename by its suffix (case-sensitive)
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".sh") || name.ends_with(".bash") {
            ScriptKind::Shell
        } else if name.ends_with(".py") || name.ends_with(".pyw") {
            ScriptKind::Python
        } else if name.ends_with(".ps1") {
            ScriptKind::PowerShell
        } else {
            ScriptKind::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ScriptKind::Unsupported)
    }

    /// Interpreter the downloaded script is piped into
    pub fn interpreter(&self) -> Option<&'static str> {
        match self {
            ScriptKind::Shell => Some("bash"),
            ScriptKind::Python => Some("python3"),
            ScriptKind::PowerShell => Some("Invoke-Expression"),
            ScriptKind::Unsupported => None,
        }
    }

    /// Whether the install command targets Windows rather than a Unix shell
    pub fn uses_windows_fetch(&self) -> bool {
        matches!(self, ScriptKind::PowerShell)
    }

    /// Get human-readable description for listings
    pub fn description(&self) -> &'static str {
        match self {
            ScriptKind::Shell => "shell",
            ScriptKind::Python => "python",
            ScriptKind::PowerShell => "powershell",
            ScriptKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A recognized entry of the scanned directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptFile {
    pub name: String,
    pub kind: ScriptKind,
}

impl ScriptFile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = ScriptKind::from_file_name(&name);
        Self { name, kind }
    }

    /// Build the command an end user pastes to fetch and run this script.
    ///
    /// Returns `None` for [`ScriptKind::Unsupported`], which the page renders
    /// as an alert button instead of a copy button.
    pub fn install_command(
        &self,
        base_url: &str,
        fetch_command: &str,
        windows_fetch_command: &str,
    ) -> Option<String> {
        let interpreter = self.kind.interpreter()?;
        let fetch = if self.kind.uses_windows_fetch() {
            windows_fetch_command
        } else {
            fetch_command
        };
        Some(format!(
            "{fetch} '{base_url}{name}' | {interpreter}",
            name = self.name
        ))
    }
}
