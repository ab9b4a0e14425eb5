//! Game session state machine
//!
//! Owns the ink layer, the boundary, the current target, and the active
//! submission animations, and runs the full submission pipeline: extract
//! boundary-masked ink, binarize it next to the target stencil, score the
//! overlap, pick the kept/sunk outcome, update the mood, erase the
//! submitted pixels, and draw the next target.
//!
//! The machine cycles `AwaitingTarget` -> `AwaitingSubmission` on start
//! and after every attempt; the scored moment itself is transient and not
//! separately observable. All timing flows through `advance(delta_frames)`
//! so hosts and tests can drive the session from any loop.

use rand::RngCore;
use tracing::{debug, trace};

use inkpond_animation::{Outcome, Submission, SubmissionId, SubmissionScheduler};
use inkpond_core::{Brush, Ellipse, InkLayer, PixelBuffer, Point, Rgba8};
use inkpond_raster::{
    content_bounds, dice, erase, extract, rasterize, BinaryMask, RasterError,
};

use crate::config::GameConfig;
use crate::error::Result;
use crate::feedback::{Mood, MoodTimer, RimPulse};
use crate::target::{self, TargetGlyph};

/// Observable session phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Between attempts, before the next target is drawn
    AwaitingTarget,
    /// A target is posted and strokes are being collected
    AwaitingSubmission,
}

/// Quality band of a scored submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Miss,
    Pass,
    Good,
}

/// Result of one scored attempt
#[derive(Clone, Copy, Debug)]
pub struct Verdict {
    /// The target that was in play
    pub target: &'static TargetGlyph,
    /// Dice overlap between drawing and target
    pub score: f32,
    pub tier: ScoreTier,
    /// Whether the crop was kept (score reached the pass threshold)
    pub kept: bool,
    /// Handle of the enqueued animation
    pub submission: SubmissionId,
}

/// What a submit call did
#[derive(Clone, Copy, Debug)]
pub enum SubmitOutcome {
    Scored(Verdict),
    /// No ink inside the boundary; nothing changed
    NothingToSubmit,
}

struct CurrentTarget {
    glyph: &'static TargetGlyph,
    mask: BinaryMask,
}

/// One interactive pond game
pub struct PondSession {
    ink: InkLayer,
    boundary: Ellipse,
    deposit: Point,
    config: GameConfig,
    phase: Phase,
    target: CurrentTarget,
    scheduler: SubmissionScheduler,
    mood: MoodTimer,
    rim: RimPulse,
    rng: Box<dyn RngCore>,
    brush_color: Rgba8,
    erasing: bool,
    last_point: Option<Point>,
}

impl PondSession {
    /// Create a session over a `width x height` canvas
    ///
    /// `deposit` is where kept crops travel to (the bucket). The first
    /// target is drawn immediately.
    pub fn new(
        width: u32,
        height: u32,
        boundary: Ellipse,
        deposit: Point,
        config: GameConfig,
        mut rng: Box<dyn RngCore>,
    ) -> Result<Self> {
        let target = Self::choose_target(rng.as_mut(), &config)?;
        let brush_color = config
            .palette_colors()
            .first()
            .copied()
            .unwrap_or(Rgba8::BLACK);
        Ok(Self {
            ink: InkLayer::new(width, height),
            boundary,
            deposit,
            config,
            phase: Phase::AwaitingSubmission,
            target,
            scheduler: SubmissionScheduler::new(),
            mood: MoodTimer::default(),
            rim: RimPulse::default(),
            rng,
            brush_color,
            erasing: false,
            last_point: None,
        })
    }

    fn choose_target(rng: &mut dyn RngCore, config: &GameConfig) -> Result<CurrentTarget> {
        let glyph = target::pick(rng);
        let mask = Self::target_mask(glyph, config)?;
        Ok(CurrentTarget { glyph, mask })
    }

    /// Binarize a target stencil, tight-cropped the same way extracted
    /// ink is, so scoring compares shapes rather than margins
    fn target_mask(glyph: &'static TargetGlyph, config: &GameConfig) -> Result<BinaryMask> {
        let stencil = glyph.shape.paint(config.stencil_size);
        let cropped = match content_bounds(&stencil) {
            Some(bounds) => stencil.sub_image(bounds),
            None => stencil,
        };
        Ok(rasterize(&cropped, config.mask_resolution)?)
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Select a paint color and leave eraser mode
    pub fn select_color(&mut self, color: Rgba8) {
        self.brush_color = color;
        self.erasing = false;
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.erasing = erasing;
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    fn brush(&self) -> Brush {
        if self.erasing {
            Brush::Erase {
                width: self.config.eraser_size,
            }
        } else {
            Brush::Paint {
                color: self.brush_color,
                width: self.config.stroke_width,
            }
        }
    }

    /// Start a stroke; returns false (and pulses the rim) outside the pond
    pub fn begin_stroke(&mut self, at: Point) -> bool {
        if !self.boundary.contains(at) {
            trace!(x = at.x, y = at.y, "stroke start outside the boundary");
            self.rim.trigger(self.config.rim_fade);
            self.last_point = None;
            return false;
        }
        self.ink.stamp(&self.brush(), at);
        self.last_point = Some(at);
        true
    }

    /// Continue the active stroke; points outside the pond are ignored
    pub fn extend_stroke(&mut self, to: Point) {
        let Some(last) = self.last_point else {
            return;
        };
        if !self.boundary.contains(to) {
            return;
        }
        self.ink.line(&self.brush(), last, to);
        self.last_point = Some(to);
    }

    pub fn end_stroke(&mut self) {
        self.last_point = None;
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Score the current drawing against the posted target
    ///
    /// With no ink inside the boundary this is a no-op: the target stays,
    /// no animation starts, and the phase does not change.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let extraction = match extract(&self.ink, &self.boundary) {
            Ok(extraction) => extraction,
            Err(RasterError::EmptySelection) => {
                debug!("no ink to submit");
                return Ok(SubmitOutcome::NothingToSubmit);
            }
            Err(err) => return Err(err.into()),
        };

        let crop = extraction.crop();
        let drawn_mask = rasterize(&crop, self.config.mask_resolution)?;
        let score = dice(&drawn_mask, &self.target.mask)?;

        let kept = score >= self.config.pass_threshold;
        let tier = if score >= self.config.good_threshold {
            ScoreTier::Good
        } else if kept {
            ScoreTier::Pass
        } else {
            ScoreTier::Miss
        };
        self.mood.set(
            if kept { Mood::Happy } else { Mood::Sad },
            self.config.mood_frames,
        );

        let bounds = extraction.bounds;
        let end = Point::new(
            self.deposit.x - bounds.width as f32 / 2.0,
            self.deposit.y - bounds.height as f32 / 2.0,
        );
        let outcome = if kept {
            Outcome::Kept
        } else {
            Outcome::Sunk {
                drift: self.config.sunk_drift,
            }
        };
        let submission = self.scheduler.enqueue(Submission::new(
            crop,
            bounds,
            bounds.origin(),
            end,
            outcome,
            self.config.submission_step,
        ));

        erase(&mut self.ink, &extraction.masked);

        let scored = self.target.glyph;
        debug!(
            glyph = scored.name,
            score,
            kept,
            pixels = extraction.pixel_count,
            "submission scored"
        );

        self.phase = Phase::AwaitingTarget;
        self.target = Self::choose_target(self.rng.as_mut(), &self.config)?;
        self.phase = Phase::AwaitingSubmission;

        Ok(SubmitOutcome::Scored(Verdict {
            target: scored,
            score,
            tier,
            kept,
            submission,
        }))
    }

    /// Pin the current target; hosts use this for tutorials and demos
    pub fn set_target(&mut self, glyph: &'static TargetGlyph) -> Result<()> {
        let mask = Self::target_mask(glyph, &self.config)?;
        self.target = CurrentTarget { glyph, mask };
        Ok(())
    }

    // ------------------------------------------------------------------
    // Frame stepping
    // ------------------------------------------------------------------

    /// Advance animations and feedback timers
    pub fn advance(&mut self, delta_frames: f32) {
        self.scheduler.advance(delta_frames);
        self.mood.advance(delta_frames);
        self.rim.advance(delta_frames);
    }

    /// Compose the session into a flat RGBA frame: background, ink, then
    /// the in-flight submissions. A headless stand-in for a host renderer.
    pub fn compose_frame(&self, background: Rgba8) -> PixelBuffer {
        let mut frame = PixelBuffer::new(self.ink.width(), self.ink.height());
        frame.fill(background);
        frame.blit_over(self.ink.pixels(), 0, 0, 1.0);
        for (_, submission) in self.scheduler.iter() {
            let sample = submission.sample();
            frame.blit_over(
                submission.image(),
                sample.x.round() as i32,
                sample.y.round() as i32,
                sample.opacity,
            );
        }
        frame
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_target(&self) -> &'static TargetGlyph {
        self.target.glyph
    }

    pub fn ink(&self) -> &InkLayer {
        &self.ink
    }

    pub fn boundary(&self) -> Ellipse {
        self.boundary
    }

    pub fn deposit(&self) -> Point {
        self.deposit
    }

    pub fn mood(&self) -> Mood {
        self.mood.mood()
    }

    pub fn rim_level(&self) -> f32 {
        self.rim.level()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// In-flight submission animations
    pub fn submissions(&self) -> impl Iterator<Item = (SubmissionId, &Submission)> {
        self.scheduler.iter()
    }

    pub fn active_submission_count(&self) -> usize {
        self.scheduler.len()
    }
}
