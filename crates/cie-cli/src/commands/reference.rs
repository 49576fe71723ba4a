//! Reference command
//!
//! Dumps the active reference data. The YAML form is what `--reference`
//! reads back.

use super::write_json;
use anyhow::{Context, Result};
use cie_color::ReferenceData;
use std::io::Write;

pub fn run<W: Write>(data: &ReferenceData, json: bool, out: &mut W) -> Result<()> {
    if json {
        return write_json(out, data);
    }
    let yaml = serde_yaml::to_string(data).context("Failed to serialize reference data")?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}
