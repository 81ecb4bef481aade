//! readme-maker: CLI tool to convert readme markup to Markdown

mod config;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::{Path, PathBuf};

use config::Config;
use readme_maker_core::{BulletMode, TranspileOptions, WriterOptions, blank_template, transpile_with};

#[derive(Parser, Debug)]
#[command(name = "readme-maker")]
#[command(about = "Convert readme markup to Markdown")]
#[command(version)]
#[command(after_help = "Examples:
  readme-maker -o template.txt                   # Write a blank markup template
  readme-maker -i template.txt -o README.md      # Convert markup to Markdown
  readme-maker -i template.txt --dump-ast        # Show how each line was classified
  readme-maker --config-schema                   # Print JSON schema for _readme-maker.toml")]
struct Cli {
    /// Input markup file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (the template, or the generated Markdown)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to _readme-maker.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read BulletPoints arrays by their brackets and reject unbalanced ones
    #[arg(long)]
    structural_bullets: bool,

    /// Close a code block still open at the end of the input
    #[arg(long)]
    close_code_blocks: bool,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    config_schema: bool,

    /// Print the parsed markup of the input as JSON instead of converting it
    #[arg(long, requires = "input")]
    dump_ast: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    if cli.config_schema {
        println!("{}", Config::json_schema_string()?);
        return Ok(());
    }

    if cli.dump_ast
        && let Some(input) = &cli.input
    {
        return dump_ast(input);
    }

    match (&cli.input, &cli.output) {
        (None, Some(output)) => write_template(output, cli.quiet),
        (Some(input), Some(output)) => {
            let config = load_config(cli.config.as_deref())?;
            let mut options = config.transpile_options()?;
            if cli.structural_bullets {
                options.bullets = BulletMode::Structural;
            }
            if cli.close_code_blocks {
                options.close_unterminated_code_block = true;
            }
            let writer_options = config.writer_options()?;

            convert_file(input, output, &options, &writer_options, cli.quiet)
        }
        _ => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Set up the logger. `RUST_LOG` takes precedence over the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            log::debug!("Loading config: {}", path.display());
            Config::load(path)
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            let config = Config::load_from_dir(&cwd)?;
            if config.is_some() {
                log::debug!("Loaded {} from {}", config::CONFIG_FILE_NAME, cwd.display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Read a markup file. Bytes that are not valid UTF-8 are replaced with U+FFFD.
fn read_input(input: &Path) -> Result<String> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read: {}", input.display()))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8; invalid bytes are replaced",
                input.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Print the classified markup lines of `input` as JSON
fn dump_ast(input: &Path) -> Result<()> {
    let content = read_input(input)?;

    let json = readme_markup::parse(&content)
        .to_json_pretty()
        .context("Failed to serialize markup AST")?;
    println!("{}", json);

    Ok(())
}

/// Write the blank markup template
fn write_template(output: &Path, quiet: bool) -> Result<()> {
    log::info!("Writing template: {}", output.display());

    fs::write(output, blank_template())
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    if !quiet {
        println!("{}", output.display());
    }

    Ok(())
}

/// Convert a single markup file to Markdown
fn convert_file(
    input: &Path,
    output: &Path,
    options: &TranspileOptions,
    writer_options: &WriterOptions,
    quiet: bool,
) -> Result<()> {
    log::info!(
        "Converting: {} -> {} (bullets: {})",
        input.display(),
        output.display(),
        options.bullets
    );

    let content = read_input(input)?;

    let transpiled = transpile_with(&content, options, writer_options)
        .with_context(|| format!("Failed to convert: {}", input.display()))?;

    fs::write(output, &transpiled.markdown)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    if !quiet {
        println!("{}", output.display());
    }

    Ok(())
}
