//! Mohr's circle for 2D plane stress.
//!
//! Maps a stress state (σxx, σyy, τxy) to the quantities of Mohr's circle:
//! center, radius, principal stresses, extreme shear stresses and the
//! principal angle.
//!
//! - [`compute`]: the stateless stress transformation engine
//! - [`StressState`]: validated input, tensor form and axis rotation
//! - [`Report`]: caller-side text summary with configurable rounding

pub mod constants;
pub mod error;
pub mod mohr;
pub mod report;
pub mod stress_state;

pub use error::{Error, Result};
pub use mohr::{Chord, MohrCircle, MohrPoint, compute};
pub use report::{Report, ReportOptions};
pub use stress_state::{Loading, StressComponent, StressState};
