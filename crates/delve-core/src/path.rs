//! A* pathfinding over a floor grid.
//!
//! One query is one full, blocking search: all open/closed state is
//! allocated per call and discarded on return, so a `Pathfinder` holds
//! nothing between calls. Work is bounded deterministically by a
//! distance cap, a reachability pre-check, and an expansion cap; every
//! failure mode yields an empty path, never an error. Callers treat an
//! empty path as "no route, pick a fallback behavior".

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::HashSet;

use crate::map::{Grid, Pos};

/// Cost of a cardinal step
pub const ORTHOGONAL_COST: i32 = 10;
/// Cost of a diagonal step (~10 * sqrt 2)
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan distance beyond which a search is refused outright
pub const MAX_PATH_DISTANCE: i32 = 30;
/// Manhattan distance beyond which the reachability pre-check is skipped
pub const REACHABILITY_MAX_DISTANCE: i32 = 20;
/// Visited-node cap for the reachability flood fill
pub const REACHABILITY_VISIT_CAP: usize = 100;
/// Manhattan distance beyond which only cardinal directions are searched
pub const CARDINAL_ONLY_DISTANCE: i32 = 10;
/// Absolute node-expansion cap per search
pub const MAX_EXPANSIONS: usize = 1000;
/// Expansion budget granted per tile of Manhattan distance
pub const EXPANSIONS_PER_DISTANCE: usize = 50;

const CARDINAL_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Search node, alive only for the duration of one `find_path` call.
/// Parent links are indices into the call's node arena.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    pos: Pos,
    parent: Option<usize>,
    g: i32,
    h: i32,
}

impl PathNode {
    const fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Computes walkable routes on a fixed grid.
///
/// Deterministic given fixed grid state. Concurrent queries against the
/// same read-only grid are safe; queries racing with in-flight occupancy
/// mutation are not and must be serialized by the caller's turn loop.
pub struct Pathfinder<'a> {
    grid: &'a Grid,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Find a walkable path from `start` to `end`, inclusive of both.
    ///
    /// Returns an empty path when `start == end`, when the target tile
    /// type is not walkable, when the distance or expansion budget runs
    /// out, or when no route exists.
    pub fn find_path(&self, start: Pos, end: Pos) -> Vec<Pos> {
        if start == end {
            return Vec::new();
        }
        if !self.grid.in_bounds(start.x, start.y) || !self.grid.is_walkable(end.x, end.y) {
            return Vec::new();
        }

        let distance = start.manhattan_distance(end);
        if distance > MAX_PATH_DISTANCE {
            return Vec::new();
        }

        // Cheap connectivity check before committing to a full search.
        // Skipped for long hauls where the bounded fill would be
        // inconclusive anyway.
        if distance <= REACHABILITY_MAX_DISTANCE && !self.is_reachable(start, end) {
            return Vec::new();
        }

        // Long hauls trade diagonal optimality for a smaller branching
        // factor
        let directions: &[(i32, i32)] = if distance > CARDINAL_ONLY_DISTANCE {
            &CARDINAL_DIRS
        } else {
            &ALL_DIRS
        };

        let expansion_cap = MAX_EXPANSIONS.min(distance as usize * EXPANSIONS_PER_DISTANCE);

        let mut nodes = vec![PathNode {
            pos: start,
            parent: None,
            g: 0,
            h: self.heuristic(start, end),
        }];
        let mut open: Vec<usize> = vec![0];
        let mut closed: HashSet<Pos> = HashSet::new();
        let mut expansions = 0;

        while !open.is_empty() {
            if expansions >= expansion_cap {
                return Vec::new();
            }
            expansions += 1;

            // Minimum f, tie-broken by minimum h
            let best = open
                .iter()
                .enumerate()
                .min_by_key(|&(_, &idx)| (nodes[idx].f(), nodes[idx].h))
                .map(|(slot, _)| slot)
                .unwrap_or(0);
            let current = open.swap_remove(best);
            let current_pos = nodes[current].pos;

            if current_pos == end {
                return reconstruct(&nodes, current);
            }
            closed.insert(current_pos);

            for &(dx, dy) in directions {
                let next = current_pos.offset(dx, dy);
                if closed.contains(&next) {
                    continue;
                }
                if !self.can_enter(next, end) {
                    continue;
                }
                let diagonal = dx != 0 && dy != 0;
                if diagonal && !self.diagonal_clear(current_pos, dx, dy, end) {
                    continue;
                }

                let step = if diagonal {
                    DIAGONAL_COST
                } else {
                    ORTHOGONAL_COST
                };
                let g = nodes[current].g + step;

                if let Some(&idx) = open.iter().find(|&&idx| nodes[idx].pos == next) {
                    // Already queued: keep the cheaper approach
                    if g < nodes[idx].g {
                        nodes[idx].g = g;
                        nodes[idx].parent = Some(current);
                    }
                } else {
                    nodes.push(PathNode {
                        pos: next,
                        parent: Some(current),
                        g,
                        h: self.heuristic(next, end),
                    });
                    open.push(nodes.len() - 1);
                }
            }
        }

        Vec::new()
    }

    /// Single-step movement decision.
    ///
    /// Returns `end` directly when already adjacent (Chebyshev distance
    /// 1), otherwise the first step of the full path, or `None` when no
    /// route exists.
    pub fn next_step(&self, start: Pos, end: Pos) -> Option<Pos> {
        if start.chebyshev_distance(end) == 1 {
            return Some(end);
        }
        let path = self.find_path(start, end);
        path.get(1).copied()
    }

    /// Chebyshev distance scaled to the orthogonal step cost; admissible
    /// for 8-direction movement
    fn heuristic(&self, from: Pos, to: Pos) -> i32 {
        from.chebyshev_distance(to) * ORTHOGONAL_COST
    }

    /// Whether a search may enter this cell on the way to `target`.
    ///
    /// The target itself may be occupied: paths are allowed to approach
    /// (but not pass through) a blocking occupant, for attack and
    /// interact flows.
    fn can_enter(&self, pos: Pos, target: Pos) -> bool {
        if !self.grid.is_walkable(pos.x, pos.y) {
            return false;
        }
        match self.grid.occupant_at(pos.x, pos.y) {
            Some(occupant) => !occupant.blocks_movement || pos == target,
            None => true,
        }
    }

    /// A diagonal step is clear only when both flanking orthogonal
    /// cells are walkable or are the target, so paths never cut through
    /// wall corners.
    fn diagonal_clear(&self, from: Pos, dx: i32, dy: i32, target: Pos) -> bool {
        let side_a = from.offset(dx, 0);
        let side_b = from.offset(0, dy);
        (side_a == target || self.grid.is_walkable(side_a.x, side_a.y))
            && (side_b == target || self.grid.is_walkable(side_b.x, side_b.y))
    }

    /// Bounded 4-directional flood fill from `start`.
    ///
    /// Returns false only when the fill exhausts the region without
    /// touching `end`. Hitting the visit cap counts as reachable: the
    /// check is a documented approximation, not a correctness guarantee,
    /// and the main search has its own budget.
    fn is_reachable(&self, start: Pos, end: Pos) -> bool {
        let mut visited: HashSet<Pos> = HashSet::new();
        let mut frontier = vec![start];
        visited.insert(start);

        while let Some(pos) = frontier.pop() {
            if pos == end {
                return true;
            }
            if visited.len() >= REACHABILITY_VISIT_CAP {
                return true;
            }
            for &(dx, dy) in &CARDINAL_DIRS {
                let next = pos.offset(dx, dy);
                if visited.contains(&next) || !self.can_enter(next, end) {
                    continue;
                }
                visited.insert(next);
                frontier.push(next);
            }
        }

        false
    }
}

/// Walk parent links from the goal back to the start, then reverse
fn reconstruct(nodes: &[PathNode], goal: usize) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(idx) = current {
        path.push(nodes[idx].pos);
        current = nodes[idx].parent;
    }
    path.reverse();
    path
}
