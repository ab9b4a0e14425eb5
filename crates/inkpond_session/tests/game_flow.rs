//! End-to-end game flow tests
//!
//! These drive a full session exactly like a host would: strokes in,
//! submit, advance frames, read back mood, animations and the composed
//! frame. Drawings are reconstructed from the current target's own
//! stencil so every test works whatever the seeded RNG picks.

use inkpond_core::{Ellipse, Point, Rgba8};
use inkpond_session::{
    GameConfig, Mood, Phase, PondSession, ScoreTier, SubmitOutcome, Verdict, TARGETS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const WIDTH: u32 = 980;
const HEIGHT: u32 = 780;

fn pond() -> Ellipse {
    Ellipse::new(500.0, 440.0, 320.0, 165.0)
}

fn bucket() -> Point {
    Point::new(494.0, 320.0)
}

fn session(seed: u64) -> PondSession {
    PondSession::new(
        WIDTH,
        HEIGHT,
        pond(),
        bucket(),
        GameConfig::default(),
        Box::new(StdRng::seed_from_u64(seed)),
    )
    .unwrap()
}

/// Trace the current target's silhouette into the pond with row strokes
fn draw_current_target(s: &mut PondSession, size: u32) {
    let stencil = s.current_target().shape.paint(size);
    let origin = Point::new(
        s.boundary().center.x - size as f32 / 2.0,
        s.boundary().center.y - size as f32 / 2.0,
    );
    for y in 0..size {
        let mut run_start: Option<u32> = None;
        for x in 0..=size {
            let opaque = x < size && stencil.alpha_at(x, y) > 0;
            match (opaque, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    let from = Point::new(origin.x + start as f32, origin.y + y as f32);
                    let to = Point::new(origin.x + (x - 1) as f32, origin.y + y as f32);
                    assert!(s.begin_stroke(from));
                    s.extend_stroke(to);
                    s.end_stroke();
                    run_start = None;
                }
                _ => {}
            }
        }
    }
}

fn expect_verdict(outcome: SubmitOutcome) -> Verdict {
    match outcome {
        SubmitOutcome::Scored(verdict) => verdict,
        SubmitOutcome::NothingToSubmit => panic!("expected a scored submission"),
    }
}

#[test]
fn tracing_the_target_is_kept_and_cheered() {
    let mut s = session(3);
    draw_current_target(&mut s, 140);

    let verdict = expect_verdict(s.submit().unwrap());
    assert!(
        verdict.score >= s.config().pass_threshold,
        "target {} scored only {}",
        verdict.target.name,
        verdict.score
    );
    assert!(verdict.kept);
    assert_ne!(verdict.tier, ScoreTier::Miss);
    assert_eq!(s.mood(), Mood::Happy);
    assert_eq!(s.active_submission_count(), 1);
    assert_eq!(s.phase(), Phase::AwaitingSubmission);

    // The submitted ink was erased: a second submit finds nothing
    assert!(matches!(
        s.submit().unwrap(),
        SubmitOutcome::NothingToSubmit
    ));
}

#[test]
fn a_filled_circle_matches_the_smiley() {
    let mut s = session(17);
    let smiley = TARGETS.iter().find(|t| t.name == "smiley").unwrap();
    s.set_target(smiley).unwrap();
    draw_current_target(&mut s, 130);

    let verdict = expect_verdict(s.submit().unwrap());
    assert!(verdict.score >= 0.32, "score {}", verdict.score);
    assert!(verdict.kept);
    assert_eq!(verdict.tier, ScoreTier::Good);
    assert_eq!(s.mood(), Mood::Happy);
}

#[test]
fn a_stray_dot_scores_near_zero_and_sinks() {
    let mut s = session(5);
    let smiley = TARGETS.iter().find(|t| t.name == "smiley").unwrap();
    s.set_target(smiley).unwrap();

    assert!(s.begin_stroke(Point::new(380.0, 470.0)));
    s.end_stroke();

    let verdict = expect_verdict(s.submit().unwrap());
    assert!(verdict.score < 0.05, "dot scored {}", verdict.score);
    assert!(!verdict.kept);
    assert_eq!(verdict.tier, ScoreTier::Miss);
    assert_eq!(s.mood(), Mood::Sad);
    assert_eq!(s.active_submission_count(), 1);
}

#[test]
fn kept_crops_travel_to_the_bucket_then_retire() {
    let mut s = session(9);
    draw_current_target(&mut s, 120);
    let verdict = expect_verdict(s.submit().unwrap());
    assert!(verdict.kept);

    // Advance until the animation reports completion; it must finish
    // within the step's frame count (plus rounding slack)
    let step = s.config().submission_step;
    let max_frames = (1.0 / step).ceil() as u32 + 1;
    let mut frames = 0;
    while !s
        .submissions()
        .any(|(id, sub)| id == verdict.submission && sub.is_complete())
    {
        s.advance(1.0);
        frames += 1;
        assert!(frames <= max_frames, "animation never finished");
    }

    // Finished but still sampleable this frame, parked on the bucket
    let (_, submission) = s
        .submissions()
        .find(|(id, _)| *id == verdict.submission)
        .expect("submission still present on its final frame");
    assert!(submission.is_complete());
    let sample = submission.sample();
    let bounds = submission.bounds();
    assert!((sample.x - (bucket().x - bounds.width as f32 / 2.0)).abs() < 1e-3);
    assert!((sample.y - (bucket().y - bounds.height as f32 / 2.0)).abs() < 1e-3);

    // Next pass prunes it
    s.advance(1.0);
    assert_eq!(s.active_submission_count(), 0);
}

#[test]
fn mood_reverts_to_neutral_after_the_feedback_window() {
    let mut s = session(21);
    draw_current_target(&mut s, 120);
    expect_verdict(s.submit().unwrap());
    assert_ne!(s.mood(), Mood::Neutral);

    let frames = s.config().mood_frames;
    s.advance(frames);
    assert_eq!(s.mood(), Mood::Neutral);
}

#[test]
fn composed_frames_show_the_animation_then_clear() {
    let background = Rgba8::opaque(250, 250, 250);
    let mut s = session(13);
    // Pin a target whose silhouette has a solid center so the probe below
    // can sit in the middle of the travelling crop
    let heart = TARGETS.iter().find(|t| t.name == "heart").unwrap();
    s.set_target(heart).unwrap();
    draw_current_target(&mut s, 120);
    let verdict = expect_verdict(s.submit().unwrap());

    // Mid-animation the crop is visible somewhere off the ink layer
    for _ in 0..10 {
        s.advance(1.0);
    }
    let frame = s.compose_frame(background);
    assert_eq!((frame.width(), frame.height()), (WIDTH, HEIGHT));
    let (_, submission) = s
        .submissions()
        .find(|(id, _)| *id == verdict.submission)
        .unwrap();
    let sample = submission.sample();
    let probe_x = sample.x as u32 + submission.bounds().width / 2;
    let probe_y = sample.y as u32 + submission.bounds().height / 2;
    assert_ne!(
        frame.get(probe_x, probe_y),
        Some(background),
        "expected the travelling crop at ({probe_x},{probe_y})"
    );

    // Once everything retires the frame is background + empty ink
    for _ in 0..60 {
        s.advance(1.0);
    }
    assert_eq!(s.active_submission_count(), 0);
    let settled = s.compose_frame(background);
    assert_eq!(settled.get(500, 440), Some(background));
}
