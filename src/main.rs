use anyhow::Result;
use std::env;
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};

use tolltally::tolls::pipeline;
use tolltally::{config, data};

const DEFAULT_CONFIG_FILE: &str = "config.json";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <input_file> [config_file]");
        std::process::exit(1);
    }

    let config_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_CONFIG_FILE);
    let tag_config = config::load_or_create(Path::new(config_path))?;

    let raw = data::import_csv(&args[1])?;
    let output = pipeline::run(&raw, tag_config.tag_owners())?;

    let export_path = processed_path(&args[1]);
    data::export_csv(&output.processed, File::create(&export_path)?)?;
    data::write_totals(&output.totals, std::io::stdout())?;

    Ok(())
}

/// Places the cleaned export next to the input, e.g. `tolls.csv` →
/// `tolls-processed.csv`.
fn processed_path(input: &str) -> PathBuf {
    let path = Path::new(input);
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or("export");
    path.with_file_name(format!("{stem}-processed.csv"))
}
