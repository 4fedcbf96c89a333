//! Standalone cleaning step: read the raw export, recode the gender column
//! and persist the cleaned CSV the dashboard reads.
//!
//! Run this once before starting the dashboard (and again whenever the raw
//! file changes).

use std::path::Path;

use anyhow::{Context, Result};
use health_dash::data::loader::{load_and_clean, RAW_PATH};

fn main() -> Result<()> {
    env_logger::init();

    let dataset = load_and_clean(Path::new(RAW_PATH), true)
        .context("preparing cleaned dataset")?;

    println!("Cleaned {} records.", dataset.len());
    Ok(())
}
