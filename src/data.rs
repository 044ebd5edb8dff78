// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! The animation itself lives inside the canvas widget; `AppState` only
//! mirrors which palette node is current so the window title can follow
//! it, plus the window metadata Xilem needs across rebuilds.

use kurbo::Size;
use xilem::WindowId;

use crate::animation::Direction;
use crate::components::NodeChanged;
use crate::config::Config;
use crate::theme;

/// Main application state
pub struct AppState {
    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,

    /// Initial window size
    pub window_size: Size,

    /// Palette index of the node the canvas is showing
    pub current_node: usize,

    /// Traversal direction after the last completed transition
    pub direction: Direction,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            running: true,
            main_window_id: WindowId::next(),
            window_size: config.window_size,
            current_node: 0,
            direction: Direction::Advance,
        }
    }

    /// Record a completed transition reported by the canvas
    pub fn node_changed(&mut self, change: NodeChanged) {
        tracing::debug!("Transition complete, showing node {}", change.index);
        if change.direction != self.direction {
            tracing::info!(
                "Reached end of palette at node {}, now heading {:?}",
                change.index,
                change.direction
            );
        }
        self.current_node = change.index;
        self.direction = change.direction;
    }

    /// Window title naming the current color
    pub fn title(&self) -> String {
        format!(
            "ClipRectPathLine ({} {}/{})",
            theme::palette::NAMES[self.current_node],
            self.current_node + 1,
            theme::palette::LEN
        )
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
