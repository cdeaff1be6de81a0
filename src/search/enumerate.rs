use std::collections::HashSet;
use log::{debug, info};
use rayon::prelude::*;
use crate::board::{Board, Cell};
use crate::error::Result;
use crate::search::sequence::{LabelString, MergePolicy, Path, SequenceMap};

#[derive(Debug, Clone, Copy)]
pub struct EnumParams {
    /// Maximum number of knight moves; paths hold at most `max_steps + 1` cells.
    /// Anything at or above `rows * cols - 1` means unbounded.
    pub max_steps: usize,
    /// Number of first-move batches. 0 uses the size of the current rayon pool.
    pub workers: usize,
    pub merge: MergePolicy,
}

impl Default for EnumParams {
    fn default() -> Self { Self { max_steps: 34, workers: 0, merge: MergePolicy::LastWriter } }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Frames popped off worker stacks.
    pub nodes: u64,
    /// Child frames dropped because their label string was already seen.
    pub duplicates: u64,
    /// Paths written into worker maps (before merging).
    pub recorded: u64,
    pub first_moves: usize,
    pub batches: usize,
}

impl EnumerationStats {
    fn absorb(&mut self, o: &EnumerationStats) {
        self.nodes += o.nodes;
        self.duplicates += o.duplicates;
        self.recorded += o.recorded;
    }
}

struct Node {
    cell: Cell,
    path: Path,
    visited: u64,
    labels: LabelString,
}

/// One representative path per distinct label string over all simple paths
/// from `start` to `end` with at most `max_steps` moves.
pub fn enumerate(board: &Board, start: Cell, end: Cell, max_steps: usize) -> Result<SequenceMap> {
    let params = EnumParams { max_steps, ..EnumParams::default() };
    enumerate_with_stats(board, start, end, params).map(|(m, _)| m)
}

pub fn enumerate_with_stats(board: &Board, start: Cell, end: Cell, params: EnumParams) -> Result<(SequenceMap, EnumerationStats)> {
    board.check(start)?;
    board.check(end)?;
    // A simple path never holds more cells than the board has.
    let cells = board.rows() as usize * board.cols() as usize;
    let limit = params.max_steps.saturating_add(1).min(cells);

    let root_visited = 1u64 << board.index(start);
    let mut root_labels = LabelString::with_capacity(limit);
    root_labels.push(board.label(start));
    let root_path: Path = vec![start].into();

    let initial: Vec<Node> = board.neighbors(start).iter().map(|&next| Node {
        cell: next,
        path: root_path.extended(next),
        visited: root_visited | (1u64 << board.index(next)),
        labels: root_labels.extended(board.label(next)),
    }).collect();

    let workers = (if params.workers == 0 { rayon::current_num_threads() } else { params.workers }).max(1);
    let chunk = ((initial.len() + workers - 1) / workers).max(1);
    let mut stats = EnumerationStats { first_moves: initial.len(), ..Default::default() };

    let mut batches: Vec<Vec<Node>> = Vec::with_capacity(workers);
    let mut it = initial.into_iter().peekable();
    while it.peek().is_some() { batches.push(it.by_ref().take(chunk).collect()); }
    stats.batches = batches.len();

    // Indexed collect keeps batch order, so the merge below is deterministic.
    let results: Vec<(SequenceMap, EnumerationStats)> = batches.into_par_iter().enumerate().map(|(bi, batch)| {
        let (local, ws) = run_batch(board, end, limit, batch);
        debug!("batch {}: {} sequences, {} nodes, {} duplicates pruned", bi, local.len(), ws.nodes, ws.duplicates);
        (local, ws)
    }).collect();

    let mut merged = SequenceMap::new();
    for (local, ws) in results {
        stats.absorb(&ws);
        merged.merge(local, params.merge);
    }
    info!("enumerate {}->{} max_steps={}: {} sequences from {} first moves in {} batches ({} nodes)",
        start, end, params.max_steps, merged.len(), stats.first_moves, stats.batches, stats.nodes);
    Ok((merged, stats))
}

fn run_batch(board: &Board, end: Cell, limit: usize, batch: Vec<Node>) -> (SequenceMap, EnumerationStats) {
    let mut local = SequenceMap::new();
    let mut stats = EnumerationStats::default();
    let mut seen: HashSet<LabelString> = HashSet::new();
    let mut stack: Vec<Node> = Vec::with_capacity(batch.len() * 8);

    for node in batch {
        seen.insert(node.labels.clone());
        stack.push(node);
    }

    while let Some(node) = stack.pop() {
        stats.nodes += 1;
        if node.path.len() > limit { continue; }
        if node.cell == end && node.path.len() >= 2 {
            local.insert(node.labels, node.path);
            stats.recorded += 1;
            continue;
        }
        // Children would exceed the limit; their label strings are all too long to matter.
        if node.path.len() == limit { continue; }
        for &next in board.neighbors(node.cell) {
            let bit = 1u64 << board.index(next);
            if node.visited & bit != 0 { continue; }
            let labels = node.labels.extended(board.label(next));
            if seen.contains(&labels) {
                stats.duplicates += 1;
                continue;
            }
            seen.insert(labels.clone());
            stack.push(Node { cell: next, path: node.path.extended(next), visited: node.visited | bit, labels });
        }
    }
    (local, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_equals_end_records_nothing() {
        let b = Board::knight();
        let a1: Cell = "a1".parse().unwrap();
        let m = enumerate(&b, a1, a1, 6).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn zero_steps_records_nothing() {
        let b = Board::knight();
        let m = enumerate(&b, "a1".parse().unwrap(), "b3".parse().unwrap(), 0).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn single_move_reaches_adjacent_cell() {
        let b = Board::knight();
        let m = enumerate(&b, "a1".parse().unwrap(), "b3".parse().unwrap(), 1).unwrap();
        assert_eq!(m.len(), 1);
        let (k, p) = m.iter().next().unwrap();
        assert_eq!(k.to_string(), "aa");
        assert_eq!(p.notation(), "a1,b3");
    }

    #[test]
    fn huge_step_limit_means_unbounded() {
        // 3x3 knight graph: the centre is isolated, the rim is one 8-cycle
        let labels = Board::parse_labels(&["abc", "bca", "cab"]).unwrap();
        let b = Board::knight_with_labels(3, 3, labels).unwrap();
        let (a1, b3): (Cell, Cell) = ("a1".parse().unwrap(), "b3".parse().unwrap());
        let full = enumerate(&b, a1, b3, 8).unwrap();
        assert_eq!(full.len(), 2);
        assert_eq!(enumerate(&b, a1, b3, usize::MAX).unwrap(), full);
        assert_eq!(enumerate(&b, a1, b3, 1usize << 62).unwrap(), full);
    }

    #[test]
    fn out_of_bounds_endpoint_is_an_error() {
        let b = Board::knight();
        assert!(enumerate(&b, Cell::new(0, 0), Cell::new(6, 0), 4).is_err());
    }
}
