//! Target catalog and selection
//!
//! Eight fixed targets, each pairing a display glyph with the stencil
//! shape it scores against. Selection is uniform; the RNG is injected so
//! hosts can seed it and tests stay deterministic.

use rand::Rng;
use tracing::debug;

use inkpond_raster::StencilShape;

/// One entry of the target catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGlyph {
    /// Display glyph shown in the prompt bubble
    pub symbol: &'static str,
    /// Human-readable name, used in logs
    pub name: &'static str,
    /// Silhouette the drawing is scored against
    pub shape: StencilShape,
}

/// The fixed target set
pub const TARGETS: [TargetGlyph; 8] = [
    TargetGlyph {
        symbol: "\u{1F41F}",
        name: "fish",
        shape: StencilShape::Fish,
    },
    TargetGlyph {
        symbol: "\u{2B50}",
        name: "star",
        shape: StencilShape::Star,
    },
    TargetGlyph {
        symbol: "\u{2764}\u{FE0F}",
        name: "heart",
        shape: StencilShape::Heart,
    },
    TargetGlyph {
        symbol: "\u{2602}\u{FE0F}",
        name: "umbrella",
        shape: StencilShape::Umbrella,
    },
    TargetGlyph {
        symbol: "\u{1F319}",
        name: "moon",
        shape: StencilShape::Moon,
    },
    TargetGlyph {
        symbol: "\u{1F34E}",
        name: "apple",
        shape: StencilShape::Apple,
    },
    TargetGlyph {
        symbol: "\u{1F431}",
        name: "cat face",
        shape: StencilShape::CatFace,
    },
    TargetGlyph {
        symbol: "\u{1F600}",
        name: "smiley",
        shape: StencilShape::Smiley,
    },
];

/// Draw one target uniformly at random
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static TargetGlyph {
    let glyph = &TARGETS[rng.gen_range(0..TARGETS.len())];
    debug!(glyph = glyph.name, "picked target");
    glyph
}
