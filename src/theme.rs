// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// PALETTE -- One color per animation node, walked forward then backward
// ============================================================================
const RED: Color = Color::from_rgb8(0xf4, 0x43, 0x36);
const DEEP_PURPLE: Color = Color::from_rgb8(0x67, 0x3a, 0xb7);
const AMBER: Color = Color::from_rgb8(0xf5, 0x7f, 0x17);
const BLUE: Color = Color::from_rgb8(0x02, 0x77, 0xbd);
const GREEN: Color = Color::from_rgb8(0x00, 0xc8, 0x53);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const CANVAS_BACKGROUND: Color = Color::from_rgb8(0xbd, 0xbd, 0xbd);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Node colors, in traversal order
pub mod palette {
    use super::Color;

    /// Every node color; the node chain has exactly one node per entry
    pub const COLORS: [Color; 5] = [
        super::RED,
        super::DEEP_PURPLE,
        super::AMBER,
        super::BLUE,
        super::GREEN,
    ];

    /// Human-readable names for accessibility labels and the window title
    pub const NAMES: [&str; 5] = ["red", "deep purple", "amber", "blue", "green"];

    /// Number of colors (and animation nodes)
    pub const LEN: usize = COLORS.len();
}

/// Colors for the animation canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}
