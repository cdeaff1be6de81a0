use std::fmt;
use std::time::Duration;
use serde::Serialize;
use crate::board::Cell;
use crate::search::combination::{MatchRecord, SearchOutcome};
use crate::search::enumerate::EnumerationStats;
use crate::search::score::WeightTriple;

#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub start: String,
    pub end: String,
    pub sequences: usize,
    pub nodes: u64,
    pub duplicates: u64,
    pub elapsed_ms: u128,
}

impl RouteReport {
    pub fn new(start: Cell, end: Cell, sequences: usize, stats: &EnumerationStats, elapsed: Duration) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            sequences,
            nodes: stats.nodes,
            duplicates: stats.duplicates,
            elapsed_ms: elapsed.as_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub weights: WeightTriple,
    pub labels_a: String,
    pub path_a: String,
    pub labels_b: String,
    pub path_b: String,
}

impl From<&MatchRecord> for MatchReport {
    fn from(m: &MatchRecord) -> Self {
        Self {
            weights: m.weights,
            labels_a: m.labels_a.to_string(),
            path_a: m.path_a.notation(),
            labels_b: m.labels_b.to_string(),
            path_b: m.path_b.notation(),
        }
    }
}

/// Summary of one full run, printable as text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub routes: Vec<RouteReport>,
    pub target: u64,
    pub best: Option<WeightTriple>,
    pub min_sum: Option<u64>,
    pub match_count: usize,
    pub best_match_count: usize,
    pub first_match: Option<MatchReport>,
    pub search_ms: u128,
    pub total_ms: u128,
}

impl Report {
    pub fn new(routes: Vec<RouteReport>, target: u64, outcome: &SearchOutcome, search: Duration, total: Duration) -> Self {
        Self {
            routes,
            target,
            best: outcome.best,
            min_sum: outcome.min_sum,
            match_count: outcome.matches.len(),
            best_match_count: outcome.best_matches().count(),
            first_match: outcome.representative().map(MatchReport::from),
            search_ms: search.as_millis(),
            total_ms: total.as_millis(),
        }
    }

    /// Plain-text summary, one fact per line.
    pub fn render_text(&self) -> String { self.to_string() }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.routes {
            writeln!(f, "Unique sequences from {} to {}: {} ({} ms)", r.start, r.end, r.sequences, r.elapsed_ms)?;
        }
        writeln!(f, "Time for finding best combination: {} ms", self.search_ms)?;
        writeln!(f, "Total time: {} ms", self.total_ms)?;
        let (Some(w), Some(sum)) = (&self.best, self.min_sum) else {
            return writeln!(f, "\nNo matching paths found.");
        };
        writeln!(f, "\nBest combination: {w}")?;
        writeln!(f, "Minimum A+B+C sum: {sum}")?;
        writeln!(f, "Number of matching paths: {}", self.match_count)?;
        if let (Some(m), Some(a), Some(b)) = (&self.first_match, self.routes.first(), self.routes.get(1)) {
            writeln!(f, "First matching path from {} to {}: {}", a.start, a.end, m.path_a)?;
            writeln!(f, "First matching path from {} to {}: {}", b.start, b.end, m.path_b)?;
        }
        Ok(())
    }
}
