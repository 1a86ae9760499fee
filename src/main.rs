//! rastercat CLI: catalogue georeferenced rasters into GeoPackage batches.

use anyhow::Result;
use clap::Parser;
use rastercat::engine::arg_parser::Cli;
use rastercat::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
