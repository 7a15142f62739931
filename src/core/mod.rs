//! Core functionality for the script-index tool.
//!
//! This module provides the building blocks of the generator: configuration,
//! directory scanning, script classification, column layout, templating and
//! terminal output.

pub mod columns;
pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod page;
pub mod scanner;
pub mod script_kind;
pub mod templates;

// === Error handling ===
pub use error::{IndexError, Result};

// === Configuration ===
// Explicit generator settings resolved from defaults, config file and flags
pub use config::{ConfigOverrides, GeneratorConfig, PageMetadata};

// === Scanning and classification ===
pub use scanner::{scan_scripts, DirectoryListing, FileListProvider, StaticListing};
pub use script_kind::{ScriptFile, ScriptKind, RECOGNIZED_EXTENSIONS};

// === Layout and rendering ===
pub use columns::{partition, Column};
pub use page::{render_page, RenderedPage};
pub use templates::{escape_html, escape_js_string, render_template, TemplateContext, TEMPLATES};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
