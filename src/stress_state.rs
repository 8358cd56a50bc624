//! Plane stress input state and its rotation.
//!
//! A plane stress state is fully described by three components:
//! σxx, σyy and τxy. On Mohr's circle the x-face plots at A = (σxx, −τxy)
//! and the y-face at B = (σyy, τxy).

use crate::error::{Result, ensure_finite};
use crate::mohr::MohrPoint;
use faer::{Mat, mat};

/// One of the three independent plane stress components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressComponent {
    SigmaXx,
    SigmaYy,
    TauXy,
}

impl StressComponent {
    /// Symbol used in messages and reports.
    pub fn label(self) -> &'static str {
        match self {
            StressComponent::SigmaXx => "σxx",
            StressComponent::SigmaYy => "σyy",
            StressComponent::TauXy => "τxy",
        }
    }
}

/// Sense of a normal stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loading {
    Tension,
    Compression,
    Unloaded,
}

impl Loading {
    /// Classify a value by sign. Only an exact zero is `Unloaded`.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Loading::Tension
        } else if value < 0.0 {
            Loading::Compression
        } else {
            Loading::Unloaded
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Loading::Tension => "tension",
            Loading::Compression => "compression",
            Loading::Unloaded => "unloaded",
        }
    }
}

/// 2D plane stress state. All components are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressState {
    sigma_xx: f64,
    sigma_yy: f64,
    tau_xy: f64,
}

impl StressState {
    /// Creates a stress state, rejecting NaN or infinite components.
    ///
    /// Components are checked in σxx, σyy, τxy order and the first
    /// offending one is reported.
    pub fn new(sigma_xx: f64, sigma_yy: f64, tau_xy: f64) -> Result<Self> {
        Ok(StressState {
            sigma_xx: ensure_finite(StressComponent::SigmaXx.label(), sigma_xx)?,
            sigma_yy: ensure_finite(StressComponent::SigmaYy.label(), sigma_yy)?,
            tau_xy: ensure_finite(StressComponent::TauXy.label(), tau_xy)?,
        })
    }

    #[inline]
    pub fn sigma_xx(&self) -> f64 {
        self.sigma_xx
    }

    #[inline]
    pub fn sigma_yy(&self) -> f64 {
        self.sigma_yy
    }

    #[inline]
    pub fn tau_xy(&self) -> f64 {
        self.tau_xy
    }

    /// Value of a single component.
    pub fn component(&self, component: StressComponent) -> f64 {
        match component {
            StressComponent::SigmaXx => self.sigma_xx,
            StressComponent::SigmaYy => self.sigma_yy,
            StressComponent::TauXy => self.tau_xy,
        }
    }

    /// Loading sense of a component. For τxy this is simply its sign.
    pub fn loading(&self, component: StressComponent) -> Loading {
        Loading::of(self.component(component))
    }

    /// Point A, the x-face state on the Mohr plane.
    pub fn face_x(&self) -> MohrPoint {
        MohrPoint::new(self.sigma_xx, -self.tau_xy)
    }

    /// Point B, the y-face state on the Mohr plane.
    pub fn face_y(&self) -> MohrPoint {
        MohrPoint::new(self.sigma_yy, self.tau_xy)
    }

    /// Sum of the normal components, invariant under rotation.
    pub fn trace(&self) -> f64 {
        self.sigma_xx + self.sigma_yy
    }

    /// The symmetric Cauchy stress tensor [[σxx, τxy], [τxy, σyy]].
    pub fn tensor(&self) -> Mat<f64> {
        mat![[self.sigma_xx, self.tau_xy], [self.tau_xy, self.sigma_yy]]
    }

    /// Stress components on axes rotated counter-clockwise by `angle_deg`.
    ///
    /// Computes σ' = Rᵀ σ R where the columns of R are the rotated basis
    /// vectors. Fails only if the angle is non-finite.
    pub fn rotated(&self, angle_deg: f64) -> Result<StressState> {
        let theta = ensure_finite("θ", angle_deg)?.to_radians();
        let (s, c) = theta.sin_cos();
        let rotation = mat![[c, -s], [s, c]];

        let tensor = self.tensor();
        let rotated = rotation.transpose() * &tensor * &rotation;

        // Average the off-diagonal pair so the result stays exactly symmetric
        StressState::new(
            rotated[(0, 0)],
            rotated[(1, 1)],
            0.5 * (rotated[(0, 1)] + rotated[(1, 0)]),
        )
    }
}
