use crate::core::{
    columns::partition,
    config::GeneratorConfig,
    error::Result,
    output::{print_info, print_script_line, print_section_header},
    scanner::{scan_scripts, DirectoryListing, FileListProvider},
    script_kind::{ScriptFile, ScriptKind},
};
use serde::Serialize;

/// One scanned script with the command the page would copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedScript {
    pub name: String,
    pub kind: ScriptKind,
    pub column: usize,
    pub command: Option<String>,
}

/// Scan and classify without rendering
pub fn collect_scripts(
    config: &GeneratorConfig,
    provider: &dyn FileListProvider,
) -> Result<Vec<ListedScript>> {
    config.validate()?;

    let files = scan_scripts(provider, config.sort)?;
    let columns = partition(&files, config.column_count)?;

    Ok(columns
        .iter()
        .flat_map(|column| {
            column
                .files
                .iter()
                .map(move |file| listed(file, column.index + 1, config))
        })
        .collect())
}

fn listed(file: &ScriptFile, column: usize, config: &GeneratorConfig) -> ListedScript {
    ListedScript {
        name: file.name.clone(),
        kind: file.kind,
        column,
        command: file.install_command(
            &config.base_url,
            &config.fetch_command,
            &config.windows_fetch_command,
        ),
    }
}

pub fn execute_list(config: &GeneratorConfig, json: bool) -> Result<()> {
    let listing = DirectoryListing::new(&config.scripts_dir);
    let scripts = collect_scripts(config, &listing)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scripts)?);
        return Ok(());
    }

    if scripts.is_empty() {
        print_info(&format!(
            "No scripts found in {}",
            config.scripts_dir.display()
        ));
        return Ok(());
    }

    let mut current_column = 0;
    for script in &scripts {
        if script.column != current_column {
            current_column = script.column;
            print_section_header(&format!("Column {current_column}"));
        }
        print_script_line(
            &script.name,
            script.kind.description(),
            script.command.as_deref(),
        );
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::StaticListing;

    #[test]
    fn test_collect_scripts_assigns_columns() {
        let config = GeneratorConfig {
            base_url: "https://example.com/".to_string(),
            sort: false,
            ..Default::default()
        };
        let listing = StaticListing::new(["a.sh", "b.py", "c.ps1", "d.txt"]);
        let scripts = collect_scripts(&config, &listing).unwrap();

        let columns: Vec<usize> = scripts.iter().map(|s| s.column).collect();
        assert_eq!(columns, vec![1, 2, 3]);
        assert_eq!(
            scripts[1].command.as_deref(),
            Some("curl -sSL 'https://example.com/b.py' | python3")
        );
    }

    #[test]
    fn test_listed_script_serializes() {
        let config = GeneratorConfig::default();
        let listing = StaticListing::new(["x.ps1"]);
        let scripts = collect_scripts(&config, &listing).unwrap();
        let json = serde_json::to_value(&scripts).unwrap();
        assert_eq!(json[0]["name"], "x.ps1");
        assert_eq!(json[0]["kind"], "PowerShell");
        assert_eq!(json[0]["column"], 1);
    }
}
