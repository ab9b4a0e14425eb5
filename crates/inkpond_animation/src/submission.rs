//! Submission transition animation
//!
//! After scoring, the cropped ink either travels to the deposit point
//! (kept) or sinks in place with a fade (sunk). Progress is normalized
//! [0, 1] and advances by a fixed step per frame; once created a
//! submission always runs to completion.

use inkpond_core::{PixelBuffer, PixelRect, Point};

use crate::easing::Easing;

/// Default per-frame progress step (~50 frames start to finish)
pub const DEFAULT_STEP: f32 = 0.02;

/// What happens to the crop after scoring
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Glide to the deposit point at full opacity
    Kept,
    /// Stay put, drift down by `drift` pixels, and fade out
    Sunk { drift: f32 },
}

/// Where and how strongly to draw a submission this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSample {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// One scored crop in flight
#[derive(Clone, Debug)]
pub struct Submission {
    image: PixelBuffer,
    bounds: PixelRect,
    start: Point,
    end: Point,
    outcome: Outcome,
    progress: f32,
    step: f32,
}

impl Submission {
    pub fn new(
        image: PixelBuffer,
        bounds: PixelRect,
        start: Point,
        end: Point,
        outcome: Outcome,
        step: f32,
    ) -> Self {
        Self {
            image,
            bounds,
            start,
            end,
            outcome,
            progress: 0.0,
            step: step.max(f32::EPSILON),
        }
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance progress; saturates at 1.0
    pub fn advance(&mut self, delta_frames: f32) {
        self.progress = (self.progress + self.step * delta_frames).min(1.0);
    }

    /// Position and opacity for the current progress
    pub fn sample(&self) -> RenderSample {
        match self.outcome {
            Outcome::Kept => {
                let eased = Easing::EaseOutCubic.apply(self.progress);
                let at = self.start.lerp(self.end, eased);
                RenderSample {
                    x: at.x,
                    y: at.y,
                    opacity: 1.0,
                }
            }
            Outcome::Sunk { drift } => RenderSample {
                x: self.start.x,
                // The sink drifts on raw progress, not the eased curve
                y: self.start.y + drift * self.progress,
                opacity: 1.0 - self.progress,
            },
        }
    }
}
