use std::{env, fs};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mimetab::generate;

// input paths
const MAPPINGS_DIR_REL_PATH: &str = "res";
const MAPPINGS_FILE_NAME: &str = "mime_types.txt";

// output paths
const GENERATED_OUT_PREFIX: &str = "generated";
const OUT_FILE_NAME: &str = "mime_arms.rs";

pub fn main() -> anyhow::Result<()> {
    let _ = Cli::parse();
    init_tracing();

    let crate_root = env::current_dir().context("Failed to get current directory")?;
    let mappings_path = crate_root
        .join(MAPPINGS_DIR_REL_PATH)
        .join(MAPPINGS_FILE_NAME);
    let gen_dir_path = crate_root.join(GENERATED_OUT_PREFIX);
    let out_file_path = gen_dir_path.join(OUT_FILE_NAME);

    fs::create_dir_all(&gen_dir_path)
        .with_context(|| format!("Failed to create {}", gen_dir_path.display()))?;

    generate(&mappings_path, &out_file_path)
        .with_context(|| format!("Failed to regenerate {}", out_file_path.display()))?;

    info!("regenerated {}", out_file_path.display());
    Ok(())
}

fn init_tracing() {
    // Example: export RUST_LOG="info,mimetab=debug"
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Regenerates the extension-to-media-type match arms in
/// `generated/mime_arms.rs` from `res/mime_types.txt`. Takes no arguments;
/// both paths are fixed relative to the working directory.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}
