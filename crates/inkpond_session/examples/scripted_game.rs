//! Headless scripted game
//!
//! Drives a full session without a window: traces the posted target into
//! the pond, submits, lets a throwaway scribble sink, and writes PNG
//! snapshots of the composed frames along the way.
//!
//! Run with: cargo run -p inkpond_session --example scripted_game
//! (set RUST_LOG=debug to watch the scoring pipeline)

use std::fs;
use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inkpond_core::{Ellipse, Point, Rgba8};
use inkpond_session::{GameConfig, PondSession, SubmitOutcome};

const WIDTH: u32 = 980;
const HEIGHT: u32 = 780;
const BACKGROUND: Rgba8 = Rgba8::opaque(250, 250, 250);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir = Path::new("target/scripted_game");
    fs::create_dir_all(out_dir)?;

    let pond = Ellipse::new(500.0, 440.0, 320.0, 165.0);
    let bucket = Point::new(494.0, 310.0);
    let mut session = PondSession::new(
        WIDTH,
        HEIGHT,
        pond,
        bucket,
        GameConfig::default(),
        Box::new(StdRng::seed_from_u64(2026)),
    )?;

    info!(glyph = session.current_target().name, "game on");

    // Attempt 1: trace the posted target, which should be kept
    trace_current_target(&mut session, 150);
    session
        .compose_frame(BACKGROUND)
        .save_png(out_dir.join("01_drawn.png"))?;

    report(session.submit()?);
    for frame in 0..60 {
        session.advance(1.0);
        if frame == 20 {
            session
                .compose_frame(BACKGROUND)
                .save_png(out_dir.join("02_travelling.png"))?;
        }
    }

    // Attempt 2: a lone dot, destined to sink
    session.begin_stroke(Point::new(420.0, 480.0));
    session.end_stroke();
    report(session.submit()?);
    for _ in 0..60 {
        session.advance(1.0);
    }

    session
        .compose_frame(BACKGROUND)
        .save_png(out_dir.join("03_settled.png"))?;
    info!(dir = %out_dir.display(), "snapshots written");
    Ok(())
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Scored(verdict) => info!(
            glyph = verdict.target.name,
            score = verdict.score,
            kept = verdict.kept,
            tier = ?verdict.tier,
            "verdict"
        ),
        SubmitOutcome::NothingToSubmit => info!("nothing to submit"),
    }
}

/// Fill the current target's silhouette with horizontal brush strokes
fn trace_current_target(session: &mut PondSession, size: u32) {
    let stencil = session.current_target().shape.paint(size);
    let origin = Point::new(
        session.boundary().center.x - size as f32 / 2.0,
        session.boundary().center.y - size as f32 / 2.0,
    );
    for y in 0..size {
        let mut run_start: Option<u32> = None;
        for x in 0..=size {
            let opaque = x < size && stencil.alpha_at(x, y) > 0;
            match (opaque, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    session.begin_stroke(Point::new(origin.x + start as f32, origin.y + y as f32));
                    session.extend_stroke(Point::new(origin.x + (x - 1) as f32, origin.y + y as f32));
                    session.end_stroke();
                    run_start = None;
                }
                _ => {}
            }
        }
    }
}
