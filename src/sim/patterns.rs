//! Chunk template library
//!
//! Each template lists platforms as offsets from the frontier. The last
//! template is intentionally empty and produces a gap.

use serde::Serialize;

/// One platform in a chunk template
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformTemplate {
    /// Offset from the frontier
    pub dx: f32,
    /// Absolute world y of the platform top
    pub dy: f32,
    pub width: f32,
}

/// A chunk template
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkTemplate {
    pub platforms: &'static [PlatformTemplate],
}

impl ChunkTemplate {
    pub fn is_gap(&self) -> bool {
        self.platforms.is_empty()
    }
}

const fn p(dx: f32, dy: f32, width: f32) -> PlatformTemplate {
    PlatformTemplate { dx, dy, width }
}

/// The fixed template library, sampled uniformly
pub static PATTERNS: [ChunkTemplate; 7] = [
    // Rising staircase
    ChunkTemplate {
        platforms: &[p(200.0, 450.0, 120.0), p(350.0, 400.0, 100.0), p(480.0, 350.0, 100.0)],
    },
    ChunkTemplate {
        platforms: &[p(200.0, 420.0, 100.0), p(450.0, 380.0, 120.0)],
    },
    // Descending staircase
    ChunkTemplate {
        platforms: &[p(200.0, 320.0, 100.0), p(330.0, 370.0, 100.0), p(460.0, 420.0, 120.0)],
    },
    // Long slab
    ChunkTemplate {
        platforms: &[p(200.0, 400.0, 200.0)],
    },
    // Bumps
    ChunkTemplate {
        platforms: &[p(180.0, 380.0, 80.0), p(300.0, 350.0, 80.0), p(420.0, 380.0, 80.0)],
    },
    // High step
    ChunkTemplate {
        platforms: &[p(200.0, 450.0, 100.0), p(400.0, 280.0, 120.0)],
    },
    // Gap
    ChunkTemplate { platforms: &[] },
];
