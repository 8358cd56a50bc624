// Numerics
pub const TOLERANCE: f64 = 1e-12; // Radius below which a circle counts as a single point

// Presentation defaults
pub const DISPLAY_PRECISION: usize = 2; // Decimal places in reports
pub const STRESS_UNIT: &str = "MPa";
