//! Frame-stepping logic for the animated scenes, independent of Bevy
//!
//! `Animator` owns the sampled trajectory and the trailing trace, and turns
//! a frame index into everything a viewer draws for that frame: the anchor
//! and trace point, and the elapsed-time label. The one piece of state
//! machinery – clearing the trace when the frame index wraps back to 0 –
//! lives here so it can be tested without a window.

use crate::simulation::states::{NVec2, Trajectory};
use crate::visualization::history::TraceHistory;

/// Everything to draw for one animation frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub anchor: NVec2, // anchor point (pivot / origin)
    pub point: NVec2, // current trace point
    pub label: String, // elapsed-time text, one decimal place
}

/// Steps through a trajectory one frame index at a time.
///
/// The external scheduler owns pacing and looping; `advance` only reacts to
/// the index it is handed. Indices must stay below `frame_count`.
pub struct Animator {
    trajectory: Trajectory,
    history: TraceHistory,
    dt: f64,
}

impl Animator {
    pub fn new(trajectory: Trajectory, history_len: usize, dt: f64) -> Self {
        Self {
            trajectory,
            history: TraceHistory::new(history_len),
            dt,
        }
    }

    /// Total number of frames in the trajectory.
    pub fn frame_count(&self) -> usize {
        self.trajectory.len()
    }

    /// Nominal pacing: the sampling step in milliseconds.
    pub fn interval_ms(&self) -> f64 {
        self.dt * 1000.0
    }

    /// Produce frame `i`, updating the trailing trace.
    ///
    /// Frame 0 restarts the loop: the trace is cleared before the frame-0
    /// point is pushed, so a fresh pass starts with exactly one point.
    pub fn advance(&mut self, i: usize) -> Frame {
        if i == 0 {
            self.history.clear();
        }

        let anchor = self.trajectory.anchor[i];
        let point = self.trajectory.trace[i];
        self.history.push_front(point);

        Frame {
            anchor,
            point,
            label: format!("time = {:.1}s", i as f64 * self.dt),
        }
    }

    /// Trailing trace, most-recent-first.
    pub fn history(&self) -> &TraceHistory {
        &self.history
    }
}
