use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

/// Convert Swagger/OpenAPI YAML or JSON files into interactive HTML documentation
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  swagger-html api.yaml -o api.html\n  swagger-html swagger.yaml -o docs/api-docs.html"
)]
struct Cli {
    /// Input YAML or JSON file path
    input: PathBuf,

    /// Output HTML file path
    #[arg(short, long)]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with appropriate verbosity level
    let env = Env::default().filter_or("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    env_logger::init_from_env(env);

    debug!("Converting {:?} into {:?}", cli.input, cli.output);
    swagger_html::convert(&cli.input, &cli.output)
}
