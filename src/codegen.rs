use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::mappings::{parse_mappings, Mapping};

/// Formats one mapping as a quoted match arm, e.g. `"html" => "text/html",`.
pub fn render_entry(mapping: &Mapping) -> String {
    format!("\"{}\" => \"{}\",", mapping.extension, mapping.media_type)
}

/// Renders the whole lookup table fragment, one arm per mapping, in input
/// order. No trailing newline beyond what the join produces, and no
/// surrounding syntax: the hosting source file supplies the `match`
/// scaffolding around the fragment.
pub fn render_table(mappings: &[Mapping]) -> String {
    mappings.iter().map(render_entry).collect::<Vec<_>>().join("\n")
}

/// Reads a mappings file and writes the rendered lookup table fragment to
/// `output_path`, replacing whatever was there before. One read, one
/// truncating write; any failure aborts the run.
pub fn generate(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let contents = fs::read_to_string(input_path.as_ref())?;
    let mappings = parse_mappings(&contents)?;
    debug!(count = mappings.len(), "parsed mappings");

    fs::write(output_path.as_ref(), render_table(&mappings))?;
    debug!(path = %output_path.as_ref().display(), "wrote lookup table fragment");
    Ok(())
}
