use crate::core::{
    config::GeneratorConfig,
    error::{IndexError, Result},
    page::{render_page, RenderedPage},
    scanner::{scan_scripts, DirectoryListing, FileListProvider},
};
use std::fs;
use std::path::PathBuf;

/// Outcome of a successful `generate` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub script_count: usize,
    pub column_sizes: Vec<usize>,
}

/// Scan `provider` and render the page without touching the output file
pub fn generate_page(
    config: &GeneratorConfig,
    provider: &dyn FileListProvider,
) -> Result<RenderedPage> {
    config.validate()?;

    let files = scan_scripts(provider, config.sort)?;
    log::info!("Indexing {} scripts", files.len());

    render_page(&files, config)
}

/// Overwrite the output file inside the scripts directory
pub fn write_page(config: &GeneratorConfig, page: &RenderedPage) -> Result<PathBuf> {
    let output_path = config.output_path();
    log::debug!("Writing {} bytes to {}", page.html.len(), output_path.display());

    fs::write(&output_path, &page.html).map_err(|e| {
        log::error!("Failed to write '{}': {}", output_path.display(), e);
        IndexError::write_failed(&output_path, e)
    })?;

    Ok(output_path)
}

pub fn execute_generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let listing = DirectoryListing::new(&config.scripts_dir);
    let page = generate_page(config, &listing)?;
    let output_path = write_page(config, &page)?;

    Ok(GenerationReport {
        output_path,
        script_count: page.script_count,
        column_sizes: page.column_sizes,
    })
}

/// Render the page from the scripts directory and return it instead of writing it
pub fn execute_generate_to_string(config: &GeneratorConfig) -> Result<String> {
    let listing = DirectoryListing::new(&config.scripts_dir);
    Ok(generate_page(config, &listing)?.html)
}
