//! Script Index - generate a static HTML index of automation scripts.
//!
//! The generator lists a directory of shell, Python and PowerShell scripts,
//! spreads them over a fixed number of columns and writes an `index.html`
//! whose buttons copy a ready-to-paste install command for each script.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Configuration ([`GeneratorConfig`])
//! - Scanning through a [`FileListProvider`]
//! - Classification ([`ScriptKind`], [`ScriptFile`])
//! - Column layout and page rendering
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use crate::commands::{execute_generate, generate_page, GenerationReport};
pub use crate::core::{
    partition, render_page, scan_scripts, Column, ConfigOverrides, DirectoryListing,
    FileListProvider, GeneratorConfig, IndexError, PageMetadata, RenderedPage, Result,
    ScriptFile, ScriptKind, StaticListing,
};
