use crate::error::{KeyPathError, KpResult};
use crate::grid::{GridLayout, PositionMap};
use crate::neighbors::{neighbors, Direction};
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// One discovered key. `parent` indexes into the owning `SearchTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub value: char,
    pub parent: Option<usize>,
    pub step: Option<Direction>,
}

/// Parent-pointer tree produced by one BFS call, ending at the target.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    terminal: usize,
}

impl SearchTree {
    pub fn terminal(&self) -> &SearchNode {
        &self.nodes[self.terminal]
    }

    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Moves from source to target, in forward order.
    pub fn moves(&self) -> Vec<Direction> {
        let mut moves = Vec::new();
        let mut node = self.terminal();
        while let (Some(parent), Some(step)) = (node.parent, node.step) {
            moves.push(step);
            node = &self.nodes[parent];
        }
        moves.reverse();
        moves
    }

    pub fn hops(&self) -> usize {
        let mut hops = 0;
        let mut node = self.terminal();
        while let Some(parent) = node.parent {
            hops += 1;
            node = &self.nodes[parent];
        }
        hops
    }
}

/// Breadth-first search from `source` to `target` over the toroidal grid.
///
/// Neighbors are expanded in `Direction::ORDER`, so among equally short
/// paths the one whose first differing move comes earlier in `u d l r` wins.
pub fn search(
    layout: &GridLayout,
    positions: &PositionMap,
    source: char,
    target: char,
) -> KpResult<SearchTree> {
    if !positions.contains(source) {
        return Err(KeyPathError::CharacterNotFound(source));
    }
    if !positions.contains(target) {
        return Err(KeyPathError::CharacterNotFound(target));
    }

    let mut nodes = vec![SearchNode {
        value: source,
        parent: None,
        step: None,
    }];
    let mut discovered = HashSet::from([source]);
    let mut queue = VecDeque::from([0usize]);

    while let Some(current) = queue.pop_front() {
        let value = nodes[current].value;
        if value == target {
            trace!(
                "BFS {} -> {}: discovered {} keys",
                source,
                target,
                nodes.len()
            );
            return Ok(SearchTree {
                nodes,
                terminal: current,
            });
        }

        let pos = positions
            .get(value)
            .ok_or(KeyPathError::CharacterNotFound(value))?;
        let Some(candidates) = neighbors(layout, pos.x, pos.y) else {
            continue;
        };

        for (c, dir) in candidates {
            if discovered.insert(c) {
                nodes.push(SearchNode {
                    value: c,
                    parent: Some(current),
                    step: Some(dir),
                });
                queue.push_back(nodes.len() - 1);
            }
        }
    }

    Err(KeyPathError::Unreachable {
        from: source,
        to: target,
    })
}
