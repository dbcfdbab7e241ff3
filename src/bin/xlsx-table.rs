use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use std::{fs, path::PathBuf};

/// Convert one sheet of an Excel workbook into an HTML table
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  xlsx-table report.xlsx\n  xlsx-table report.xlsx -s Data -n -o table.html"
)]
struct Cli {
    /// Input .xlsx file path
    xlsx: PathBuf,

    /// Sheet name (defaults to the first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Treat the first non-empty row as data instead of a header
    #[arg(short, long)]
    no_header: bool,

    /// Output HTML file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::default().filter_or("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    env_logger::init_from_env(env);

    debug!("Rendering {:?} (sheet {:?})", cli.xlsx, cli.sheet);
    let html = swagger_html::table::sheet_to_html(&cli.xlsx, cli.sheet.as_deref(), !cli.no_header)
        .with_context(|| format!("Failed to convert {:?}", cli.xlsx))?;

    match cli.output {
        Some(output) => {
            fs::write(&output, html.as_bytes())
                .context(format!("Failed to write to file: {:?}", output))?;
            info!("Wrote HTML table to {:?}", output);
        }
        None => println!("{}", html),
    }
    Ok(())
}
