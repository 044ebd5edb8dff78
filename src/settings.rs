// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings for the animation. Visual styling
//! (palette, background) belongs in `theme.rs`.

use std::time::Duration;

// ============================================================================
// FIGURE SETTINGS
// ============================================================================
/// Number of staggered parts the figure reveals one after another
const FIGURE_PARTS: usize = 4;

/// Line width is the shorter viewport side divided by this factor
const STROKE_FACTOR: f64 = 90.0;

// ============================================================================
// ANIMATION SETTINGS
// ============================================================================
/// Scale advanced per tick (0.02 split across the figure parts)
const SCALE_GAP: f64 = 0.02 / FIGURE_PARTS as f64;

/// Accumulated travel within this distance of a full unit counts as complete
const COMPLETION_EPSILON: f64 = 1e-6;

// ============================================================================
// FRAME PACING SETTINGS
// ============================================================================
/// Time between animation ticks (~50Hz)
const FRAME_DELAY: Duration = Duration::from_millis(20);

/// Upper bound on ticks run for a single host frame.
///
/// A host that stalls (window dragged, app backgrounded) would otherwise
/// replay every missed tick at once.
const MAX_TICKS_PER_FRAME: usize = 4;

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
const DEFAULT_WINDOW_WIDTH: f64 = 1280.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Figure geometry settings
pub mod figure {
    /// Number of staggered parts (lines, clipped rect, triangle)
    pub const PARTS: usize = super::FIGURE_PARTS;

    /// Divisor applied to `min(width, height)` for the stroke width
    pub const STROKE_FACTOR: f64 = super::STROKE_FACTOR;
}

/// Animation state machine settings
pub mod animation {
    /// Scale change per tick
    pub const SCALE_GAP: f64 = super::SCALE_GAP;

    /// Tolerance used when deciding a transition has finished
    pub const COMPLETION_EPSILON: f64 = super::COMPLETION_EPSILON;
}

/// Frame driver pacing settings
pub mod frame {
    use std::time::Duration;

    /// Interval between ticks
    pub const DELAY: Duration = super::FRAME_DELAY;

    /// Maximum catch-up ticks per host frame
    pub const MAX_TICKS_PER_FRAME: usize = super::MAX_TICKS_PER_FRAME;
}

/// Window defaults
pub mod window {
    pub const DEFAULT_WIDTH: f64 = super::DEFAULT_WINDOW_WIDTH;
    pub const DEFAULT_HEIGHT: f64 = super::DEFAULT_WINDOW_HEIGHT;
}
