// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Animation core: scale helpers, per-node state machine, node chain,
//! sequence controller, and frame pacing.
//!
//! Everything here is pure state with no UI dependencies. The widget in
//! `components` owns a `SequenceController` and a `FrameDriver` and feeds
//! them pointer and animation-frame events.

pub mod chain;
pub mod frame;
pub mod scale;
pub mod sequence;
pub mod state;

pub use chain::{Direction, Neighbor, NodeChain};
pub use frame::FrameDriver;
pub use sequence::{SequenceController, StepResult};
pub use state::{AnimationState, StateStep};
