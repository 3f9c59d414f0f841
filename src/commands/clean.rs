//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Press;

/// Remove the output directory
pub fn run(press: &Press) -> Result<()> {
    if press.out_dir.exists() {
        fs::remove_dir_all(&press.out_dir)?;
        tracing::info!("Deleted: {:?}", press.out_dir);
    }

    Ok(())
}
