//! Inkpond Animation System
//!
//! Frame-driven easing and the submission animator.
//!
//! # Features
//!
//! - **Easing**: the interpolation curves used across the game
//! - **Submissions**: kept/sunk transitions for scored ink crops
//! - **Scheduler**: advances every active submission and prunes the
//!   completed ones each frame
//!
//! Everything advances through explicit `advance(delta_frames)` calls, so
//! any scheduling model (fixed-timestep loop, timer, test harness) can
//! drive it.

pub mod easing;
pub mod scheduler;
pub mod submission;

pub use easing::Easing;
pub use scheduler::{SubmissionId, SubmissionScheduler};
pub use submission::{Outcome, RenderSample, Submission, DEFAULT_STEP};
