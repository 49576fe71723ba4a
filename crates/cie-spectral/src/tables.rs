//! Reference spectral data on the 400-700 nm grid at 10 nm.
//!
//! All tables share [`SAMPLE_COUNT`] samples starting at [`START_NM`].
//!
//! # Sources
//!
//! - CIE 15:2004, relative spectral power of illuminants D50 and D65
//!   (normalized to 100 at 560 nm)
//! - CIE 1931 2° standard observer color-matching functions

/// First sampled wavelength in nanometers.
pub const START_NM: f64 = 400.0;

/// Spacing between samples in nanometers.
pub const DELTA_LAMBDA: f64 = 10.0;

/// Number of samples on the grid (400..=700 nm).
pub const SAMPLE_COUNT: usize = 31;

/// CIE illuminant D50 relative spectral power.
pub const D50_SPD: [f64; SAMPLE_COUNT] = [
    49.30, 56.50, 60.00, 57.80, 74.80, 87.20, 90.60, 91.40, 95.20, 92.00,
    95.70, 96.60, 97.10, 102.10, 100.80, 102.30, 100.00, 97.70, 98.90, 93.50,
    97.70, 99.30, 99.00, 95.70, 98.80, 95.70, 98.20, 103.00, 99.10, 87.40,
    91.60,
];

/// CIE illuminant D65 relative spectral power.
pub const D65_SPD: [f64; SAMPLE_COUNT] = [
    82.75, 91.49, 93.43, 86.68, 104.86, 117.01, 117.81, 114.86, 115.92, 108.81,
    109.35, 107.80, 104.79, 107.69, 104.41, 104.05, 100.00, 96.33, 95.79, 88.69,
    90.01, 89.60, 87.70, 83.29, 83.70, 80.03, 80.21, 82.28, 78.28, 69.72,
    71.61,
];

/// Equal-energy illuminant E.
pub const E_SPD: [f64; SAMPLE_COUNT] = [100.0; SAMPLE_COUNT];

/// CIE 1931 2° x̄.
pub const CIE1931_X_BAR: [f64; SAMPLE_COUNT] = [
    0.014310, 0.043510, 0.134380, 0.283900, 0.348280, 0.336200, 0.290800, 0.195360,
    0.095640, 0.032010, 0.004900, 0.009300, 0.063270, 0.165500, 0.290400, 0.433450,
    0.594500, 0.762100, 0.916300, 1.026300, 1.062200, 1.002600, 0.854450, 0.642400,
    0.447900, 0.283500, 0.164900, 0.087400, 0.046770, 0.022700, 0.011359,
];

/// CIE 1931 2° ȳ.
pub const CIE1931_Y_BAR: [f64; SAMPLE_COUNT] = [
    0.000396, 0.001210, 0.004000, 0.011600, 0.023000, 0.038000, 0.060000, 0.090980,
    0.139020, 0.208020, 0.323000, 0.503000, 0.710000, 0.862000, 0.954000, 0.994950,
    0.995000, 0.952000, 0.870000, 0.757000, 0.631000, 0.503000, 0.381000, 0.265000,
    0.175000, 0.107000, 0.061000, 0.032000, 0.017000, 0.008210, 0.004102,
];

/// CIE 1931 2° z̄.
pub const CIE1931_Z_BAR: [f64; SAMPLE_COUNT] = [
    0.067850, 0.207400, 0.645600, 1.385600, 1.747060, 1.772110, 1.669200, 1.287640,
    0.812950, 0.465180, 0.272000, 0.158200, 0.078250, 0.042160, 0.020300, 0.008750,
    0.003900, 0.002100, 0.001650, 0.001100, 0.000800, 0.000340, 0.000190, 0.000050,
    0.000020, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000,
];
