use std::fs;
use std::path::Path as FsPath;
use serde::{Deserialize, Serialize};
use crate::board::{Board, Cell};
use crate::error::{Error, Result};
use crate::search::combination::{validate_candidates, SearchParams};
use crate::search::enumerate::EnumParams;
use crate::search::score::DEFAULT_CEILING;
use crate::search::sequence::MergePolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub start: String,
    pub end: String,
}

impl Route {
    pub fn new(start: &str, end: &str) -> Self { Self { start: start.to_string(), end: end.to_string() } }

    pub fn cells(&self, board: &Board) -> Result<(Cell, Cell)> {
        let start: Cell = self.start.parse()?;
        let end: Cell = self.end.parse()?;
        board.check(start)?;
        board.check(end)?;
        Ok((start, end))
    }
}

/// Driver settings. Missing fields in a JSON file fall back to the reference instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub routes: [Route; 2],
    pub max_steps: usize,
    pub target: u64,
    pub ceiling: u64,
    pub candidates: Vec<i64>,
    /// Enumeration batches; `None` uses the rayon pool size.
    pub threads: Option<usize>,
    pub merge: MergePolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            routes: [Route::new("a1", "f6"), Route::new("a6", "f1")],
            max_steps: 34,
            target: 2024,
            ceiling: DEFAULT_CEILING,
            candidates: vec![1, 2, 3],
            threads: None,
            merge: MergePolicy::LastWriter,
        }
    }
}

/// A config checked against a board and converted to engine parameters.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub routes: [(Cell, Cell); 2],
    pub enumeration: EnumParams,
    pub search: SearchParams,
    pub candidates: Vec<u64>,
}

impl PuzzleConfig {
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> { Ok(serde_json::from_str(text)?) }

    pub fn validate(&self, board: &Board) -> Result<Puzzle> {
        let mut candidates = Vec::with_capacity(self.candidates.len());
        for &w in &self.candidates {
            if w <= 0 { return Err(Error::NonPositiveWeight(w)); }
            candidates.push(w as u64);
        }
        validate_candidates(&candidates)?;
        Ok(Puzzle {
            routes: [self.routes[0].cells(board)?, self.routes[1].cells(board)?],
            enumeration: EnumParams { max_steps: self.max_steps, workers: self.threads.unwrap_or(0), merge: self.merge },
            search: SearchParams { target: self.target, ceiling: self.ceiling },
            candidates,
        })
    }
}
