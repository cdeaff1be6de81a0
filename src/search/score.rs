use std::fmt;
use serde::{Deserialize, Serialize};
use crate::board::Label;

/// Default abort threshold for [`score`].
pub const DEFAULT_CEILING: u64 = 2024;

/// Weights for labels a, b and c.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightTriple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl WeightTriple {
    pub const fn new(a: u64, b: u64, c: u64) -> Self { Self { a, b, c } }

    #[inline]
    pub fn weight(&self, label: Label) -> u64 {
        match label {
            Label::A => self.a,
            Label::B => self.b,
            Label::C => self.c,
        }
    }

    pub fn sum(&self) -> u64 { self.a.saturating_add(self.b).saturating_add(self.c) }
}

impl fmt::Display for WeightTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={}, B={}, C={}", self.a, self.b, self.c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Score {
    Value(u64),
    /// The running total passed the ceiling; evaluation stopped there.
    Exceeded,
}

impl Score {
    pub fn value(self) -> Option<u64> {
        match self { Score::Value(v) => Some(v), Score::Exceeded => None }
    }

    pub fn is_exceeded(self) -> bool { self == Score::Exceeded }
}

/// Scores a label sequence: start from the first label's weight, then multiply
/// by the next weight when the label changes and add it when the label repeats.
/// Returns [`Score::Exceeded`] as soon as the total goes above `ceiling`.
pub fn score(labels: &[Label], weights: &WeightTriple, ceiling: u64) -> Score {
    let Some((&first, rest)) = labels.split_first() else { return Score::Value(0) };
    let mut acc = weights.weight(first);
    if acc > ceiling { return Score::Exceeded; }
    let mut prev = first;
    for &cur in rest {
        let w = weights.weight(cur);
        acc = if cur != prev { acc.saturating_mul(w) } else { acc.saturating_add(w) };
        if acc > ceiling { return Score::Exceeded; }
        prev = cur;
    }
    Score::Value(acc)
}
