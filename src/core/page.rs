//! Assembly of the index page from scanned scripts.
//!
//! Each script becomes one `<li>` (copy button plus link), items are grouped
//! into one `<ul>` per column and the columns are substituted into the page
//! template together with the configured metadata.

use crate::core::columns::{partition, Column};
use crate::core::config::{GeneratorConfig, PageMetadata};
use crate::core::error::Result;
use crate::core::script_kind::ScriptFile;
use crate::core::templates::{
    escape_html, escape_js_string, render_template, TemplateContext, TEMPLATES,
};

/// How long the "copied" notification stays visible
pub const NOTIFICATION_MS: u64 = 2000;

/// A complete HTML document, regenerated on every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub script_count: usize,
    pub column_sizes: Vec<usize>,
}

pub fn render_item(file: &ScriptFile, config: &GeneratorConfig) -> String {
    let href = escape_html(&file.name);
    let command = file.install_command(
        &config.base_url,
        &config.fetch_command,
        &config.windows_fetch_command,
    );

    match command {
        Some(command) => {
            let command_html = escape_html(&command);
            let command_js = escape_html(&escape_js_string(&command));
            let context = TemplateContext {
                href: Some(&href),
                filename: Some(&href),
                command: Some(&command_html),
                command_js: Some(&command_js),
                ..Default::default()
            };
            render_template(TEMPLATES.item, &context)
        }
        None => {
            log::warn!("Rendering unsupported file type: {}", file.name);
            let context = TemplateContext {
                href: Some(&href),
                filename: Some(&href),
                ..Default::default()
            };
            render_template(TEMPLATES.item_unsupported, &context)
        }
    }
}

/// CSS width of one column, e.g. `33.33%` for three columns
pub fn column_width(column_count: usize) -> String {
    let width = 100.0 / column_count as f64;
    let formatted = format!("{width:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

pub fn render_column(column: &Column<'_>, width: &str, config: &GeneratorConfig) -> String {
    let items: String = column
        .files
        .iter()
        .map(|file| render_item(file, config))
        .collect();

    let context = TemplateContext {
        width: Some(width),
        items: Some(&items),
        ..Default::default()
    };
    render_template(TEMPLATES.column, &context)
}

fn render_stylesheets(stylesheets: &[String]) -> String {
    stylesheets
        .iter()
        .map(|href| {
            let href = escape_html(href);
            let context = TemplateContext {
                href: Some(&href),
                ..Default::default()
            };
            render_template(TEMPLATES.stylesheet_link, &context)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

struct EscapedMetadata {
    title: String,
    heading: String,
    site_name: String,
    tagline: String,
    description: String,
    twitter_description: String,
    author: String,
    image_url: String,
    page_url: String,
    twitter_handle: String,
}

impl From<&PageMetadata> for EscapedMetadata {
    fn from(page: &PageMetadata) -> Self {
        Self {
            title: escape_html(&page.title),
            heading: escape_html(&page.heading),
            site_name: escape_html(&page.site_name),
            tagline: escape_html(&page.tagline),
            description: escape_html(&page.description),
            twitter_description: escape_html(&page.twitter_description),
            author: escape_html(&page.author),
            image_url: escape_html(&page.image_url),
            page_url: escape_html(&page.page_url),
            twitter_handle: escape_html(&page.twitter_handle),
        }
    }
}

/// Lay out `files` in columns and render the full document
pub fn render_page(files: &[ScriptFile], config: &GeneratorConfig) -> Result<RenderedPage> {
    let columns = partition(files, config.column_count)?;
    let width = column_width(config.column_count);

    let columns_html = columns
        .iter()
        .map(|column| {
            log::debug!("Column {}: {} scripts", column.index + 1, column.len());
            render_column(column, &width, config)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let meta = EscapedMetadata::from(&config.page);
    let stylesheets = render_stylesheets(&config.page.stylesheets);

    let context = TemplateContext {
        title: Some(&meta.title),
        heading: Some(&meta.heading),
        site_name: Some(&meta.site_name),
        tagline: Some(&meta.tagline),
        description: Some(&meta.description),
        twitter_description: Some(&meta.twitter_description),
        author: Some(&meta.author),
        image_url: Some(&meta.image_url),
        page_url: Some(&meta.page_url),
        twitter_handle: Some(&meta.twitter_handle),
        stylesheets: Some(&stylesheets),
        columns: Some(&columns_html),
        notification_ms: Some(NOTIFICATION_MS),
        ..Default::default()
    };

    Ok(RenderedPage {
        html: render_template(TEMPLATES.page, &context),
        script_count: files.len(),
        column_sizes: columns.iter().map(Column::len).collect(),
    })
}
