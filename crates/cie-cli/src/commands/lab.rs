//! Lab command
//!
//! sRGB code values to CIELAB, printing the XYZ stages on the way.

use super::{format_lab, format_rgb, format_xyz, write_json};
use crate::LabArgs;
use anyhow::Result;
use cie_color::{srgb_to_lab_report, ReferenceData, Rgb255};
use std::io::Write;
use tracing::{debug, info};

pub fn run<W: Write>(args: LabArgs, data: &ReferenceData, json: bool, out: &mut W) -> Result<()> {
    let srgb = Rgb255::srgb(args.r, args.g, args.b);
    info!(r = srgb.r, g = srgb.g, b = srgb.b, lab_white = %data.lab_white, "sRGB to Lab");
    if !srgb.in_gamut() {
        debug!("input outside 0-255, converting unclamped");
    }

    let report = srgb_to_lab_report(srgb, data)?;
    debug!(l = report.lab.l, a = report.lab.a, b = report.lab.b, "converted");

    if json {
        return write_json(out, &report);
    }
    writeln!(out, "{}", format_rgb(&report.srgb))?;
    writeln!(out, "{}", format_xyz(&report.xyz))?;
    writeln!(out, "{}", format_xyz(&report.xyz_adapted))?;
    writeln!(out, "{}", format_lab(&report.lab))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cie_color::srgb_to_lab;

    fn run_json(r: f64, g: f64, b: f64) -> serde_json::Value {
        let mut out = Vec::new();
        run(LabArgs { r, g, b }, &ReferenceData::standard(), true, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_matches_library() {
        let data = ReferenceData::standard();
        let expected = srgb_to_lab(Rgb255::srgb(176.8792173, 165.8431174, 9.550607287), &data).unwrap();
        let value = run_json(176.8792173, 165.8431174, 9.550607287);
        for (key, want) in [("l", expected.l), ("a", expected.a), ("b", expected.b)] {
            let got = value["lab"][key].as_f64().unwrap();
            assert!((got - want).abs() < 1e-9, "{}: {} vs {}", key, got, want);
        }
    }

    #[test]
    fn test_stage_whites() {
        let value = run_json(10.0, 20.0, 30.0);
        assert_eq!(value["xyz"]["white"], "D65");
        assert_eq!(value["xyz_adapted"]["white"], "D50");
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        run(
            LabArgs { r: 255.0, g: 255.0, b: 255.0 },
            &ReferenceData::standard(),
            false,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("Lab (D50):"));
        assert!(last.contains("100.00"), "{}", last);
    }
}
