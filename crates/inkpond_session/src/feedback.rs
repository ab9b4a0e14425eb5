//! Mood and rim-glow feedback
//!
//! Small frame-countdown state the host reads every frame: the mushroom's
//! face after a verdict, and the boundary glow pulse after a rejected
//! stroke start.

/// Face shown on the scoring mushroom
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Sad,
}

/// Holds a mood for a fixed number of frames, then reverts to neutral
#[derive(Clone, Copy, Debug, Default)]
pub struct MoodTimer {
    mood: Mood,
    frames_left: f32,
}

impl MoodTimer {
    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set(&mut self, mood: Mood, frames: f32) {
        self.mood = mood;
        self.frames_left = frames.max(0.0);
    }

    pub fn advance(&mut self, delta_frames: f32) {
        if self.mood == Mood::Neutral {
            return;
        }
        self.frames_left -= delta_frames;
        if self.frames_left <= 0.0 {
            self.mood = Mood::Neutral;
            self.frames_left = 0.0;
        }
    }
}

/// Boundary glow pulse, 1.0 on trigger fading linearly to 0
#[derive(Clone, Copy, Debug, Default)]
pub struct RimPulse {
    level: f32,
    fade: f32,
}

impl RimPulse {
    /// Glow intensity, 0.0 when idle
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_active(&self) -> bool {
        self.level > 0.0
    }

    pub fn trigger(&mut self, fade_per_frame: f32) {
        self.level = 1.0;
        self.fade = fade_per_frame.max(0.0);
    }

    pub fn advance(&mut self, delta_frames: f32) {
        self.level = (self.level - self.fade * delta_frames).max(0.0);
    }
}
