// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Chain of per-color animation nodes.
//!
//! Nodes live in a flat arena indexed by palette position. Neighbors are
//! `index ± 1`, bounds-checked against the chain length, so there are no
//! owning links or back-references to keep consistent. The chain holds one
//! node per palette color, is built once, and is never resized, so every
//! node index is a valid palette index.

use super::state::{AnimationState, StateStep};
use crate::theme;

/// Overall traversal direction through the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Advance,
    Retreat,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Advance => Direction::Retreat,
            Direction::Retreat => Direction::Advance,
        }
    }
}

/// Result of looking up a node's neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The neighbor exists at this index
    Found(usize),
    /// No neighbor in that direction; traversal stays on the current node
    Boundary,
}

/// One palette color and its animation state
#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
}

impl Node {
    pub fn update(&mut self) -> StateStep {
        self.state.update()
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }
}

/// Fixed-length arena of nodes
#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    /// Build a chain with one idle node per palette color.
    pub fn new() -> Self {
        let nodes = (0..theme::palette::LEN)
            .map(|index| Node {
                index,
                state: AnimationState::new(),
            })
            .collect();
        Self { nodes }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Neighbor of `index` in `direction`, or `Boundary` at either end.
    pub fn get_next(&self, index: usize, direction: Direction) -> Neighbor {
        let next = match direction {
            Direction::Advance => index.checked_add(1).filter(|&i| i < self.len()),
            Direction::Retreat => index.checked_sub(1),
        };
        match next {
            Some(i) => Neighbor::Found(i),
            None => Neighbor::Boundary,
        }
    }
}

impl Default for NodeChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_nodes_start_idle() {
        let chain = NodeChain::new();
        assert_eq!(chain.len(), theme::palette::LEN);
        for i in 0..chain.len() {
            assert_eq!(chain.node(i).index, i);
            assert!(chain.node(i).state.is_idle());
        }
    }

    #[test]
    fn test_every_node_has_a_palette_color() {
        let chain = NodeChain::new();
        assert_eq!(chain.len(), theme::palette::COLORS.len());
        assert_eq!(chain.len(), theme::palette::NAMES.len());
        let last = chain.len() - 1;
        assert_eq!(chain.get_next(last, Direction::Advance), Neighbor::Boundary);
        assert!(theme::palette::COLORS.get(chain.node(last).index).is_some());
    }

    #[test]
    fn test_get_next_in_middle() {
        let chain = NodeChain::new();
        assert_eq!(chain.get_next(2, Direction::Advance), Neighbor::Found(3));
        assert_eq!(chain.get_next(2, Direction::Retreat), Neighbor::Found(1));
    }

    #[test]
    fn test_get_next_at_boundaries() {
        let chain = NodeChain::new();
        assert_eq!(chain.get_next(4, Direction::Advance), Neighbor::Boundary);
        assert_eq!(chain.get_next(0, Direction::Retreat), Neighbor::Boundary);
        assert_eq!(chain.get_next(0, Direction::Advance), Neighbor::Found(1));
        assert_eq!(chain.get_next(4, Direction::Retreat), Neighbor::Found(3));
    }

    #[test]
    fn test_direction_reversed() {
        assert_eq!(Direction::Advance.reversed(), Direction::Retreat);
        assert_eq!(Direction::Retreat.reversed(), Direction::Advance);
    }
}
