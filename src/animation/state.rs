// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-node animation state machine.
//!
//! A node is in one of three states, encoded by `direction`:
//!
//! - **Idle** (`0.0`): resting at `prev_scale`, accepts a start request
//! - **Advancing** (`1.0`): scale walking from 0 towards 1
//! - **Retreating** (`-1.0`): scale walking from 1 back towards 0
//!
//! Start requests while a transition is in flight are ignored, so every
//! tap produces at most one full transition.

use crate::settings;

/// Outcome of a single `AnimationState::update` tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateStep {
    /// Still travelling (or idle, in which case nothing moved)
    Running,
    /// Travel finished; carries the settled `prev_scale` (0 or 1)
    Completed { prev_scale: f64 },
}

/// Scalar animation progress for one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Current progress; nominally in [0, 1]
    pub scale: f64,
    /// -1, 0 or 1; zero means idle
    pub direction: f64,
    /// Where the last transition settled (always 0 or 1)
    pub prev_scale: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            prev_scale: 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Begin a transition away from `prev_scale`.
    ///
    /// Returns `true` if the transition started, `false` if one was
    /// already running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.prev_scale;
        true
    }

    /// Advance one tick.
    pub fn update(&mut self) -> StateStep {
        self.scale += settings::animation::SCALE_GAP * self.direction;
        if self.is_idle() || !self.travel_complete() {
            return StateStep::Running;
        }
        self.scale = self.prev_scale + self.direction;
        self.direction = 0.0;
        self.prev_scale = self.scale;
        StateStep::Completed {
            prev_scale: self.prev_scale,
        }
    }

    fn travel_complete(&self) -> bool {
        (self.scale - self.prev_scale).abs() >= 1.0 - settings::animation::COMPLETION_EPSILON
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_start_from_rest_advances() {
        let mut state = AnimationState::new();
        assert!(state.is_idle());
        assert!(state.start_updating());
        assert_eq!(state.direction, 1.0);
    }

    #[test]
    fn test_start_from_one_retreats() {
        let mut state = AnimationState {
            scale: 1.0,
            direction: 0.0,
            prev_scale: 1.0,
        };
        assert!(state.start_updating());
        assert_eq!(state.direction, -1.0);
    }

    #[test]
    fn test_start_ignored_mid_transition() {
        let mut state = AnimationState::new();
        state.start_updating();
        state.update();
        let before = state;
        assert!(!state.start_updating());
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_steps_by_scale_gap() {
        let mut state = AnimationState::new();
        state.start_updating();
        for i in 1..=10 {
            assert_eq!(state.update(), StateStep::Running);
            assert!((state.scale - 0.005 * i as f64).abs() < EPS);
        }
    }

    #[test]
    fn test_full_transition_takes_200_ticks() {
        let mut state = AnimationState::new();
        state.start_updating();
        for _ in 0..199 {
            assert_eq!(state.update(), StateStep::Running);
        }
        assert_eq!(state.update(), StateStep::Completed { prev_scale: 1.0 });
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.prev_scale, 1.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_reverse_transition_settles_at_zero() {
        let mut state = AnimationState {
            scale: 1.0,
            direction: 0.0,
            prev_scale: 1.0,
        };
        state.start_updating();
        let mut ticks = 0;
        let step = loop {
            ticks += 1;
            if let done @ StateStep::Completed { .. } = state.update() {
                break done;
            }
        };
        assert_eq!(ticks, 200);
        assert_eq!(step, StateStep::Completed { prev_scale: 0.0 });
        assert_eq!(state.scale, 0.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_update_while_idle_does_nothing() {
        let mut state = AnimationState::new();
        assert_eq!(state.update(), StateStep::Running);
        assert_eq!(state, AnimationState::new());
    }
}
