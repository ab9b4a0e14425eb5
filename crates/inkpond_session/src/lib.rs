//! Inkpond Game Session
//!
//! The orchestration layer of the pond drawing game:
//!
//! - **Config**: tunable thresholds and brush defaults (`inkpond.toml`)
//! - **Targets**: the glyph catalog and uniform random selection
//! - **Feedback**: mood timer and rim-glow pulse
//! - **Session**: the state machine tying ink, extraction, scoring,
//!   animation and feedback together
//!
//! A host drives the session with pointer events and one
//! `advance(delta_frames)` call per frame, then renders the ink layer and
//! the in-flight submissions however it likes.

pub mod config;
pub mod error;
pub mod feedback;
pub mod session;
pub mod target;

pub use config::GameConfig;
pub use error::{Result, SessionError};
pub use feedback::{Mood, MoodTimer, RimPulse};
pub use session::{Phase, PondSession, ScoreTier, SubmitOutcome, Verdict};
pub use target::{TargetGlyph, TARGETS};
