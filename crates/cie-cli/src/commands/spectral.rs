//! Spectral command
//!
//! Runs a reflectance curve through every stage of the spectral pipeline.

use super::{format_lab, format_rgb, format_xyz, write_json};
use crate::SpectralArgs;
use anyhow::{Context, Result};
use cie_color::spectral::SpectralCurve;
use cie_color::{ReferenceData, SpectralPipeline};
use std::io::{Read, Write};
use tracing::{debug, info, trace};

pub fn run<R: Read, W: Write>(
    args: SpectralArgs,
    data: &ReferenceData,
    json: bool,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let curve = read_curve(args.values, stdin)?;
    info!(samples = curve.len(), illuminant = %data.spectral.illuminant().name, "spectral conversion");
    trace!(samples = ?curve.samples(), "input curve");

    let report = SpectralPipeline::new(data)?
        .convert(&curve)
        .context("Spectral conversion failed")?;
    debug!(x = report.xyz.x, y = report.xyz.y, z = report.xyz.z, "integrated");

    if json {
        return write_json(out, &report);
    }
    writeln!(out, "{}", format_xyz(&report.xyz))?;
    writeln!(out, "{}", format_lab(&report.lab))?;
    writeln!(out, "{}", format_xyz(&report.xyz_srgb))?;
    writeln!(out, "{}", format_rgb(&report.srgb))?;
    writeln!(out, "{}", format_xyz(&report.xyz_cie_rgb))?;
    writeln!(out, "{}", format_rgb(&report.cie_rgb))?;
    Ok(())
}

/// Uses the command line values, or whitespace separated numbers from
/// `stdin` when none were given.
fn read_curve<R: Read>(values: Vec<f64>, mut stdin: R) -> Result<SpectralCurve> {
    if !values.is_empty() {
        return Ok(SpectralCurve::new(values));
    }
    debug!("reading samples from stdin");
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read samples from stdin")?;
    SpectralCurve::parse(&text).context("Invalid sample list")
}
