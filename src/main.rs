use std::env;
use anyhow::Result;
use chrono::Local;
use log::info;
use crate::config::load_config;
use crate::logging::setup_logger;
use crate::manager_msc::MSC;
use crate::sheet::Sheet;

mod assembler;
mod config;
mod directory;
mod errors;
mod grid;
mod highs;
mod logging;
mod manager_msc;
mod models;
mod pipeline;
mod sheet;
mod week_window;

fn main() -> Result<()> {
    let config_path = env::var("CONFIG_PATH").unwrap_or("config.toml".to_string());
    let config = load_config(&config_path)?;

    setup_logger(&config.general)?;
    info!("weathergrid version: {}", env!("CARGO_PKG_VERSION"));

    let msc = MSC::new(&config.feeds);
    let mut sheet = Sheet::open(&config.sheet.path)?;

    let grid = pipeline::run(&config.sheet, &msc, &mut sheet, Local::now().date_naive())?;
    sheet.save()?;

    info!("Wrote {} dates to {}\n{}", grid.dates().len(), config.sheet.path, grid);

    Ok(())
}
