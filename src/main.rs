use clap::{Args, Parser, Subcommand};
use script_index::commands::*;
use script_index::core::{
    config::{ConfigOverrides, GeneratorConfig},
    error::Result,
    print_error, print_success,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "script-index")]
#[command(about = "Generate an HTML index page for a directory of automation scripts")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// JSON config file (defaults to <config dir>/script-index/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: OverrideArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct OverrideArgs {
    /// Directory containing the scripts
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// URL prefix used in install commands
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Number of columns on the page
    #[arg(long, global = true, value_name = "N")]
    columns: Option<usize>,

    /// Output file name, written inside the scripts directory
    #[arg(long, global = true, value_name = "NAME")]
    output: Option<String>,

    /// Keep directory listing order instead of sorting by name
    #[arg(long, global = true)]
    unsorted: bool,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            scripts_dir: args.dir,
            base_url: args.base_url,
            column_count: args.columns,
            output_file: args.output,
            unsorted: args.unsorted,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the index page into the scripts directory (default)
    Generate {
        /// Print the page to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// List recognized scripts with their install commands
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn resolve_config(path: Option<PathBuf>, overrides: OverrideArgs) -> Result<GeneratorConfig> {
    let config = GeneratorConfig::load(path.as_deref())?.apply_overrides(overrides.into());
    config.validate()?;
    log::debug!("Resolved config: {config:?}");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config, cli.overrides)?;

    match cli.command.unwrap_or(Commands::Generate { stdout: false }) {
        Commands::Generate { stdout: true } => {
            print!("{}", execute_generate_to_string(&config)?);
        }
        Commands::Generate { stdout: false } => {
            let report = execute_generate(&config)?;
            print_success(&format!(
                "HTML file generated successfully! {} scripts written to {}",
                report.script_count,
                report.output_path.display()
            ));
        }
        Commands::List { json } => execute_list(&config, json)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        log::debug!("Generation failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
