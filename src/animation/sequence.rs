// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Sequence controller: walks the node chain one transition per tap.
//!
//! The controller points at exactly one node. When that node finishes a
//! transition the controller moves to its neighbor in the current
//! direction; at either end of the chain it stays put and flips direction,
//! so the palette is walked forward, then backward, then forward again.

use super::chain::{Direction, Neighbor, Node, NodeChain};
use super::state::StateStep;

/// Outcome of one controller tick, interpreted by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The current node is still mid-transition
    StillRunning,
    /// The transition finished and the controller moved to a neighbor
    Completed,
    /// The transition finished at an end of the chain; direction flipped
    CompletedAndBoundaryReached,
}

impl StepResult {
    pub fn is_complete(self) -> bool {
        !matches!(self, StepResult::StillRunning)
    }
}

/// Owns the chain and tracks the current node
#[derive(Debug, Clone)]
pub struct SequenceController {
    chain: NodeChain,
    current: usize,
    direction: Direction,
}

impl SequenceController {
    /// Controller over one node per palette color, starting at node 0
    pub fn new() -> Self {
        Self {
            chain: NodeChain::new(),
            current: 0,
            direction: Direction::Advance,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> &Node {
        self.chain.node(self.current)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ask the current node to start a transition.
    ///
    /// Returns `true` if it started, `false` if one is already running.
    pub fn start_updating(&mut self) -> bool {
        self.chain.node_mut(self.current).start_updating()
    }

    /// Tick the current node, moving on if its transition completed.
    pub fn update(&mut self) -> StepResult {
        match self.chain.node_mut(self.current).update() {
            StateStep::Running => StepResult::StillRunning,
            StateStep::Completed { prev_scale } => {
                tracing::debug!(
                    "Node {} settled at {} moving {:?}",
                    self.current,
                    prev_scale,
                    self.direction
                );
                match self.chain.get_next(self.current, self.direction) {
                    Neighbor::Found(next) => {
                        self.current = next;
                        StepResult::Completed
                    }
                    Neighbor::Boundary => {
                        self.direction = self.direction.reversed();
                        StepResult::CompletedAndBoundaryReached
                    }
                }
            }
        }
    }
}

impl Default for SequenceController {
    fn default() -> Self {
        Self::new()
    }
}
