//! Core state and trajectory types for the mechanics scenes.
//!
//! Defines the integration state vector and the sampled trajectory:
//! - `SVec4` – 4-component ODE state, even entries are generalized
//!   coordinates, odd entries their time derivatives
//! - `NVec2` – a 2D point in scene coordinates
//! - `Trajectory` – index-aligned sampled sequences consumed by the viewers
//!
//! A trajectory is produced once by the sampler and read-only afterwards.

use nalgebra::{Vector2, Vector4};
pub type SVec4 = Vector4<f64>;
pub type NVec2 = Vector2<f64>;

/// One fully-sampled scene trajectory.
///
/// All three sequences have the same length and are aligned by index to the
/// monotonically increasing time grid in `t`.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub t: Vec<f64>, // sample times
    pub anchor: Vec<NVec2>, // fixed or sliding anchor point per sample
    pub trace: Vec<NVec2>, // traced point per sample (pendulum bob, well particle)
}

impl Trajectory {
    /// Number of samples (= number of animation frames).
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
