//! Text summary of a Mohr's circle result.
//!
//! Rounding happens here and only here; the engine's numbers are never
//! altered.

use crate::constants::{DISPLAY_PRECISION, STRESS_UNIT};
use crate::mohr::{MohrCircle, MohrPoint};
use crate::stress_state::{Loading, StressComponent};
use std::fmt;

/// Presentation settings for a [`Report`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Decimal places for every printed value.
    pub precision: usize,
    /// Unit label appended to stresses.
    pub unit: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            precision: DISPLAY_PRECISION,
            unit: STRESS_UNIT.to_string(),
        }
    }
}

/// Borrowed view of a circle that formats as a multi-section summary.
pub struct Report<'a> {
    circle: &'a MohrCircle,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(circle: &'a MohrCircle, options: ReportOptions) -> Self {
        Report { circle, options }
    }

    fn value(&self, v: f64) -> String {
        // Adding 0.0 turns −0.0 into 0.0
        format!("{:.*}", self.options.precision, v + 0.0)
    }

    fn stress(&self, v: f64) -> String {
        format!("{} {}", self.value(v), self.options.unit)
    }

    fn point(&self, p: &MohrPoint) -> String {
        format!("({}, {})", self.value(p.sigma), self.value(p.tau))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.circle;
        let state = c.state();

        writeln!(f, "Given State of Stress:")?;
        for component in [
            StressComponent::SigmaXx,
            StressComponent::SigmaYy,
            StressComponent::TauXy,
        ] {
            writeln!(
                f,
                "  {} = {}",
                component.label(),
                self.stress(state.component(component))
            )?;
        }

        writeln!(f, "Critical Points:")?;
        writeln!(f, "  A: {}", self.point(&c.point_a))?;
        writeln!(f, "  B: {}", self.point(&c.point_b))?;
        writeln!(f, "  C: {}", self.point(&c.center))?;
        writeln!(f, "  σ1: {}", self.point(&c.principal_1))?;
        writeln!(f, "  σ2: {}", self.point(&c.principal_2))?;
        writeln!(f, "  τ1: {}", self.point(&c.shear_max))?;
        writeln!(f, "  τ2: {}", self.point(&c.shear_min))?;

        let (load_1, load_2) = c.principal_loading();
        writeln!(f, "Principal Stresses:")?;
        writeln!(f, "  σ1 = {}{}", self.stress(c.principal_1.sigma), sense(load_1))?;
        writeln!(f, "  σ2 = {}{}", self.stress(c.principal_2.sigma), sense(load_2))?;

        writeln!(f, "Max Shear Stresses:")?;
        writeln!(f, "  τ1 = {}", self.stress(c.shear_max.tau))?;
        writeln!(f, "  τ2 = {}", self.stress(c.shear_min.tau))?;

        writeln!(f, "Radius: {}", self.stress(c.radius))?;
        writeln!(f, "Von Mises: {}", self.stress(c.von_mises()))?;
        write!(f, "Principal Angle: θ = {}°", self.value(c.principal_angle_deg))
    }
}

fn sense(loading: Loading) -> String {
    match loading {
        Loading::Unloaded => String::new(),
        other => format!(" ({})", other.label()),
    }
}
