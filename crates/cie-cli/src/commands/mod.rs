//! CLI command implementations

pub mod lab;
pub mod reference;
pub mod spectral;

use anyhow::{Context, Result};
use cie_color::{Lab, ReferenceData, Rgb255, Xyz};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Built-in reference data, or the YAML override at `path`.
pub fn load_reference(path: Option<&Path>) -> Result<ReferenceData> {
    let Some(path) = path else {
        debug!("using built-in reference data");
        return Ok(ReferenceData::standard());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference data: {}", path.display()))?;
    let data: ReferenceData = serde_yaml::from_str(&text)
        .with_context(|| format!("Failed to parse reference data: {}", path.display()))?;
    data.validate()
        .with_context(|| format!("Inconsistent reference data: {}", path.display()))?;

    info!(
        path = %path.display(),
        illuminant = %data.spectral.illuminant().name,
        samples = data.spectral.len(),
        lab_white = %data.lab_white,
        "loaded reference data"
    );
    Ok(data)
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

pub fn format_xyz(xyz: &Xyz) -> String {
    format!("XYZ ({:>3}):  {:>10.6} {:>10.6} {:>10.6}", xyz.white.name(), xyz.x, xyz.y, xyz.z)
}

pub fn format_lab(lab: &Lab) -> String {
    format!("Lab ({:>3}):  {:>10.4} {:>10.4} {:>10.4}", lab.white.name(), lab.l, lab.a, lab.b)
}

pub fn format_rgb(rgb: &Rgb255) -> String {
    let note = if rgb.in_gamut() { "" } else { "  (out of gamut)" };
    format!(
        "{:<10} {:>10.4} {:>10.4} {:>10.4}{}",
        format!("{}:", rgb.space),
        rgb.r,
        rgb.g,
        rgb.b,
        note
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cie_color::primaries::WhitePoint;
    use cie_color::Adaptations;

    #[test]
    fn test_builtin_reference() {
        assert_eq!(load_reference(None).unwrap(), ReferenceData::standard());
    }

    #[test]
    fn test_reference_override_roundtrip() {
        let mut data = ReferenceData::standard();
        data.spectral = cie_color::spectral::SpectralTables::standard(WhitePoint::D65);
        data.adaptations = Adaptations::derived_table().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_yaml::to_string(&data).unwrap().as_bytes()).unwrap();

        let loaded = load_reference(Some(file.path())).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_reference_override_inconsistent() {
        let mut data = ReferenceData::standard();
        data.adaptations = Adaptations::new();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_yaml::to_string(&data).unwrap().as_bytes()).unwrap();

        let err = load_reference(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("no adaptation matrix"), "{:#}", err);
    }

    #[test]
    fn test_reference_override_wrong_profile_white() {
        let mut data = ReferenceData::standard();
        data.srgb.white = WhitePoint::E;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_yaml::to_string(&data).unwrap().as_bytes()).unwrap();

        let err = load_reference(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Inconsistent reference data"));
        assert!(format!("{:#}", err).contains("sRGB profile has white E"), "{:#}", err);
    }

    #[test]
    fn test_reference_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_reference(Some(dir.path().join("absent.yaml").as_path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read reference data"));
    }

    #[test]
    fn test_reference_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"lab_white: D50\n").unwrap();
        let err = load_reference(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse reference data"));
    }

    #[test]
    fn test_format_rgb_flags_gamut() {
        let line = format_rgb(&Rgb255::srgb(-1.0, 0.0, 0.0));
        assert!(line.starts_with("sRGB:"));
        assert!(line.ends_with("(out of gamut)"));
    }
}
