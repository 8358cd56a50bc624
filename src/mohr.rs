//! Mohr's circle construction for plane stress.
//!
//! The circle is built geometrically from the two face points:
//! 1. A = (σxx, −τxy) and B = (σyy, τxy)
//! 2. Center = midpoint of AB, radius = |AB| / 2
//! 3. Principal stresses sit where the circle crosses the σ-axis
//! 4. Shear extremes sit directly above and below the center
//! 5. The principal angle is half the angle between (A − center) and
//!    (σ1 − center), signed by τxy
//!
//! Every quantity depends only on the endpoint coordinates, so no slope
//! is ever needed here. [`Chord`] carries the slope for callers that draw AB.

use crate::constants::TOLERANCE;
use crate::error::Result;
use crate::stress_state::{Loading, StressState};

/// A coordinate (σ, τ) on the Mohr plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MohrPoint {
    pub sigma: f64,
    pub tau: f64,
}

impl MohrPoint {
    pub const fn new(sigma: f64, tau: f64) -> Self {
        MohrPoint { sigma, tau }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &MohrPoint) -> f64 {
        2.0 * self.half_distance_to(other)
    }

    /// Half the distance to another point, finite whenever it is representable.
    pub fn half_distance_to(&self, other: &MohrPoint) -> f64 {
        (other.sigma / 2.0 - self.sigma / 2.0).hypot(other.tau / 2.0 - self.tau / 2.0)
    }

    /// Halves before adding so two large coordinates cannot overflow.
    pub fn midpoint(&self, other: &MohrPoint) -> MohrPoint {
        MohrPoint::new(
            self.sigma / 2.0 + other.sigma / 2.0,
            self.tau / 2.0 + other.tau / 2.0,
        )
    }
}

/// The straight segment from A to B through the circle's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub start: MohrPoint,
    pub end: MohrPoint,
}

impl Chord {
    /// Slope dτ/dσ, or `None` when the chord is vertical (σxx = σyy).
    pub fn slope(&self) -> Option<f64> {
        let run = self.end.sigma - self.start.sigma;
        if run == 0.0 {
            None
        } else {
            Some((self.end.tau - self.start.tau) / run)
        }
    }

    /// Length of the chord, always the circle's diameter.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> MohrPoint {
        self.start.midpoint(&self.end)
    }
}

/// Mohr's circle for one plane stress state.
///
/// Recomputed from scratch for every input; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MohrCircle {
    /// Face-x point A = (σxx, −τxy).
    pub point_a: MohrPoint,
    /// Face-y point B = (σyy, τxy).
    pub point_b: MohrPoint,
    /// (σavg, 0).
    pub center: MohrPoint,
    pub radius: f64,
    /// Major principal stress point (σavg + R, 0).
    pub principal_1: MohrPoint,
    /// Minor principal stress point (σavg − R, 0).
    pub principal_2: MohrPoint,
    /// (σavg, +R).
    pub shear_max: MohrPoint,
    /// (σavg, −R).
    pub shear_min: MohrPoint,
    /// Rotation from the x-face to the σ1 direction, in degrees.
    pub principal_angle_deg: f64,
    state: StressState,
}

/// Builds Mohr's circle for (σxx, σyy, τxy).
///
/// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) if any
/// component is NaN or infinite. Degenerate states such as equal normal
/// stresses with zero shear are valid and give a zero-radius circle.
pub fn compute(sigma_xx: f64, sigma_yy: f64, tau_xy: f64) -> Result<MohrCircle> {
    let state = StressState::new(sigma_xx, sigma_yy, tau_xy)?;
    Ok(MohrCircle::from_state(&state))
}

impl MohrCircle {
    /// Builds the circle for an already validated state. Never fails.
    pub fn from_state(state: &StressState) -> Self {
        let a = state.face_x();
        let b = state.face_y();

        let center = a.midpoint(&b);
        let radius = a.half_distance_to(&b);

        let principal_1 = MohrPoint::new(center.sigma + radius, 0.0);
        let principal_2 = MohrPoint::new(center.sigma - radius, 0.0);
        let shear_max = MohrPoint::new(center.sigma, center.tau + radius);
        let shear_min = MohrPoint::new(center.sigma, center.tau - radius);

        let half_diff = a.sigma / 2.0 - b.sigma / 2.0;
        let principal_angle_deg = principal_angle(half_diff, radius, state.tau_xy());

        MohrCircle {
            point_a: a,
            point_b: b,
            center,
            radius,
            principal_1,
            principal_2,
            shear_max,
            shear_min,
            principal_angle_deg,
            state: *state,
        }
    }

    /// The stress state the circle was built from.
    #[inline]
    pub fn state(&self) -> StressState {
        self.state
    }

    /// Maximum in-plane shear stress magnitude.
    #[inline]
    pub fn max_shear(&self) -> f64 {
        self.radius
    }

    /// Plane stress von Mises equivalent, √(σ1² − σ1σ2 + σ2²).
    pub fn von_mises(&self) -> f64 {
        let s1 = self.principal_1.sigma;
        let s2 = self.principal_2.sigma;
        (s1 * s1 - s1 * s2 + s2 * s2).sqrt()
    }

    /// True when the circle has collapsed to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= TOLERANCE
    }

    /// Loading sense of σ1 and σ2.
    pub fn principal_loading(&self) -> (Loading, Loading) {
        (
            Loading::of(self.principal_1.sigma),
            Loading::of(self.principal_2.sigma),
        )
    }

    pub fn chord(&self) -> Chord {
        Chord {
            start: self.point_a,
            end: self.point_b,
        }
    }

    /// Stress components on axes rotated counter-clockwise by `angle_deg`.
    pub fn stress_on_plane(&self, angle_deg: f64) -> Result<StressState> {
        self.state().rotated(angle_deg)
    }

    /// Point on the circle for the x-face of axes rotated by `angle_deg`.
    pub fn plane_point(&self, angle_deg: f64) -> Result<MohrPoint> {
        Ok(self.stress_on_plane(angle_deg)?.face_x())
    }
}

/// Half the angle between (A − center) and (σ1 − center), signed by τxy.
///
/// A − center is ((σxx − σyy) / 2, −τxy) and σ1 − center is (R, 0), so the
/// cosine of that angle is `half_diff / radius`.
///
/// Zero shear means A and B already lie on the σ-axis, so the angle is 0.
/// A collapsed circle also gives 0. The result lies in (−90°, 90°]: −90°
/// and 90° name the same axis, so −90° is reported as 90°.
fn principal_angle(half_diff: f64, radius: f64, tau_xy: f64) -> f64 {
    if tau_xy == 0.0 || radius == 0.0 {
        return 0.0;
    }

    // Clamp so rounding cannot push acos outside its domain
    let cos_angle = (half_diff / radius).clamp(-1.0, 1.0);
    let half_angle = (cos_angle.acos().to_degrees() / 2.0).min(90.0);

    if tau_xy > 0.0 || half_angle == 90.0 {
        half_angle
    } else {
        -half_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_known_example() {
        let circle = compute(80.0, 0.0, 40.0).unwrap();
        let r = 0.5 * 12800.0_f64.sqrt();

        assert_eq!(circle.point_a, MohrPoint::new(80.0, -40.0));
        assert_eq!(circle.point_b, MohrPoint::new(0.0, 40.0));
        assert_eq!(circle.center, MohrPoint::new(40.0, 0.0));
        assert_relative_eq!(circle.radius, r, epsilon = 1e-12);
        assert_relative_eq!(circle.radius, 56.5685, epsilon = 1e-4);
        assert_relative_eq!(circle.principal_1.sigma, 96.5685, epsilon = 1e-4);
        assert_relative_eq!(circle.principal_2.sigma, -16.5685, epsilon = 1e-4);
        assert_eq!(circle.principal_1.tau, 0.0);
        assert_eq!(circle.principal_2.tau, 0.0);
        assert_relative_eq!(circle.shear_max.tau, 56.5685, epsilon = 1e-4);
        assert_relative_eq!(circle.shear_min.tau, -56.5685, epsilon = 1e-4);
        assert_eq!(circle.shear_max.sigma, 40.0);
        // tan(2θp) = 2τxy / (σxx − σyy) = 1
        assert_relative_eq!(circle.principal_angle_deg, 22.5, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_point_circle() {
        let circle = compute(10.0, 10.0, 0.0).unwrap();

        assert_eq!(circle.center, MohrPoint::new(10.0, 0.0));
        assert_eq!(circle.radius, 0.0);
        assert_eq!(circle.principal_1.sigma, 10.0);
        assert_eq!(circle.principal_2.sigma, 10.0);
        assert_eq!(circle.shear_max.tau, 0.0);
        assert_eq!(circle.shear_min.tau, 0.0);
        assert_eq!(circle.principal_angle_deg, 0.0);
        assert!(circle.is_degenerate());
    }

    #[test]
    fn test_all_zero_state() {
        let circle = compute(0.0, 0.0, 0.0).unwrap();
        assert_eq!(circle.radius, 0.0);
        assert_eq!(circle.principal_angle_deg, 0.0);
        assert_eq!(circle.von_mises(), 0.0);
    }

    #[test]
    fn test_pure_shear() {
        let circle = compute(0.0, 0.0, 50.0).unwrap();

        assert_eq!(circle.center, MohrPoint::new(0.0, 0.0));
        assert_relative_eq!(circle.radius, 50.0, epsilon = 1e-12);
        assert_relative_eq!(circle.principal_1.sigma, 50.0, epsilon = 1e-12);
        assert_relative_eq!(circle.principal_2.sigma, -50.0, epsilon = 1e-12);
        assert_relative_eq!(circle.principal_angle_deg, 45.0, epsilon = 1e-10);
    }

    #[test]
    fn test_negative_shear_negates_angle_only() {
        let pos = compute(80.0, 0.0, 40.0).unwrap();
        let neg = compute(80.0, 0.0, -40.0).unwrap();

        assert_eq!(pos.center, neg.center);
        assert_eq!(pos.radius, neg.radius);
        assert_eq!(pos.principal_1, neg.principal_1);
        assert_eq!(pos.principal_2, neg.principal_2);
        assert_eq!(neg.principal_angle_deg, -pos.principal_angle_deg);

        // A moves from below the axis to above it
        assert!(pos.point_a.tau < 0.0);
        assert!(neg.point_a.tau > 0.0);
    }

    #[test]
    fn test_zero_shear_with_unequal_normals() {
        // A sits on the σ-axis to the left of the center, still reported as 0
        let circle = compute(-20.0, 30.0, 0.0).unwrap();
        assert_relative_eq!(circle.radius, 25.0, epsilon = 1e-12);
        assert_eq!(circle.principal_1.sigma, 30.0);
        assert_eq!(circle.principal_2.sigma, -20.0);
        assert_eq!(circle.principal_angle_deg, 0.0);
    }

    #[test]
    fn test_equal_normals_with_shear_has_vertical_chord() {
        let circle = compute(25.0, 25.0, -10.0).unwrap();
        assert_relative_eq!(circle.radius, 10.0, epsilon = 1e-12);
        assert_relative_eq!(circle.principal_angle_deg, -45.0, epsilon = 1e-10);

        let chord = circle.chord();
        assert_eq!(chord.slope(), None);
        assert_relative_eq!(chord.length(), 2.0 * circle.radius, epsilon = 1e-12);
        assert_eq!(chord.midpoint(), circle.center);
    }

    #[test]
    fn test_chord_slope() {
        let circle = compute(80.0, 0.0, 40.0).unwrap();
        // From (80, −40) to (0, 40)
        assert_relative_eq!(circle.chord().slope().unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_beyond_45_when_sigma_yy_dominates() {
        let circle = compute(0.0, 80.0, 40.0).unwrap();
        assert_relative_eq!(circle.principal_angle_deg, 67.5, epsilon = 1e-10);
    }

    #[test]
    fn test_rotating_by_principal_angle_reaches_sigma_1() {
        for &(sxx, syy, txy) in &[(80.0, 0.0, 40.0), (0.0, 80.0, 40.0), (-30.0, 15.0, -22.0)] {
            let circle = compute(sxx, syy, txy).unwrap();
            let principal = circle.stress_on_plane(circle.principal_angle_deg).unwrap();

            assert_relative_eq!(principal.sigma_xx(), circle.principal_1.sigma, epsilon = 1e-9);
            assert_relative_eq!(principal.sigma_yy(), circle.principal_2.sigma, epsilon = 1e-9);
            assert_abs_diff_eq!(principal.tau_xy(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_plane_points_lie_on_circle() {
        let circle = compute(12.0, -4.0, 7.5).unwrap();
        for step in 0..12 {
            let point = circle.plane_point(step as f64 * 15.0).unwrap();
            assert_relative_eq!(point.distance_to(&circle.center), circle.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_state_is_kept() {
        let circle = compute(3.0, -9.0, 1.5).unwrap();
        assert_eq!(circle.state(), StressState::new(3.0, -9.0, 1.5).unwrap());
    }

    #[test]
    fn test_von_mises_matches_component_form() {
        let (sxx, syy, txy) = (80.0_f64, 0.0_f64, 40.0_f64);
        let circle = compute(sxx, syy, txy).unwrap();
        let expected = (sxx * sxx - sxx * syy + syy * syy + 3.0 * txy * txy).sqrt();
        assert_relative_eq!(circle.von_mises(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_principal_loading() {
        let circle = compute(80.0, 0.0, 40.0).unwrap();
        assert_eq!(circle.principal_loading(), (Loading::Tension, Loading::Compression));

        let circle = compute(-5.0, -5.0, 0.0).unwrap();
        assert_eq!(
            circle.principal_loading(),
            (Loading::Compression, Loading::Compression)
        );
    }

    #[test]
    fn test_rejects_non_finite_input() {
        assert!(matches!(
            compute(f64::NAN, 0.0, 0.0),
            Err(Error::InvalidInput { component: "σxx", .. })
        ));
        assert!(matches!(
            compute(0.0, f64::INFINITY, 0.0),
            Err(Error::InvalidInput { component: "σyy", .. })
        ));
        assert!(matches!(
            compute(0.0, 0.0, f64::NEG_INFINITY),
            Err(Error::InvalidInput { component: "τxy", .. })
        ));
    }

    #[test]
    fn test_tiny_negative_shear_reports_plus_ninety() {
        // cos rounds to exactly −1 here; −90° is folded onto 90°
        let neg = compute(-10.0, 10.0, -1e-7).unwrap();
        let pos = compute(-10.0, 10.0, 1e-7).unwrap();
        assert_eq!(neg.principal_angle_deg, 90.0);
        assert_eq!(pos.principal_angle_deg, 90.0);
    }

    #[test]
    fn test_near_max_inputs_stay_finite() {
        let circle = compute(f64::MAX, f64::MAX, 0.0).unwrap();
        assert_eq!(circle.center.sigma, f64::MAX);
        assert_eq!(circle.radius, 0.0);
        assert_eq!(circle.principal_1.sigma, f64::MAX);
        assert_eq!(circle.principal_2.sigma, f64::MAX);

        let circle = compute(f64::MAX, -f64::MAX, 0.0).unwrap();
        assert_eq!(circle.center.sigma, 0.0);
        assert_eq!(circle.radius, f64::MAX);
        assert_eq!(circle.principal_1.sigma, f64::MAX);
        assert_eq!(circle.principal_2.sigma, -f64::MAX);

        let circle = compute(1e308, 1e308, 1e308).unwrap();
        assert_eq!(circle.center.sigma, 1e308);
        assert_relative_eq!(circle.radius, 1e308, max_relative = 1e-15);
        assert_relative_eq!(circle.principal_angle_deg, 45.0, epsilon = 1e-10);
        assert!(circle.shear_max.tau.is_finite());
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let first = compute(-13.7, 42.1, 9.3).unwrap();
        let second = compute(-13.7, 42.1, 9.3).unwrap();
        assert_eq!(first.radius.to_bits(), second.radius.to_bits());
        assert_eq!(
            first.principal_angle_deg.to_bits(),
            second.principal_angle_deg.to_bits()
        );
        assert_eq!(first, second);
    }
}
