pub mod generator;
pub mod models;
pub mod parser;
pub mod table;

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::generator::Generator;

/// Convert an API description file into a single HTML page.
///
/// The whole document is rendered before anything is written, so a failure
/// leaves no partial output behind.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let api = parser::load_document(input)
        .with_context(|| format!("Failed to convert {:?}", input))?;
    Generator::new(api).generate(output)?;

    info!("Successfully converted {:?} to {:?}", input, output);
    Ok(())
}
