use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::board::{Cell, Label};
use crate::error::Error;

/// Letters spelled by the cells along a path, in visiting order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelString(Vec<Label>);

impl LabelString {
    pub fn new() -> Self { Self(Vec::new()) }

    pub fn with_capacity(cap: usize) -> Self { Self(Vec::with_capacity(cap)) }

    pub fn push(&mut self, label: Label) { self.0.push(label); }

    /// Copy of `self` with `label` appended, sized for one more push.
    pub fn extended(&self, label: Label) -> Self {
        let mut v = Vec::with_capacity(self.0.len() + 2);
        v.extend_from_slice(&self.0);
        v.push(label);
        Self(v)
    }

    pub fn labels(&self) -> &[Label] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<Vec<Label>> for LabelString {
    fn from(v: Vec<Label>) -> Self { Self(v) }
}

impl FromStr for LabelString {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Label::from_char).collect::<Result<Vec<_>, _>>().map(Self)
    }
}

impl fmt::Display for LabelString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in &self.0 { write!(f, "{}", l.as_char())?; }
        Ok(())
    }
}

/// Ordered cells of one walk, start first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn cells(&self) -> &[Cell] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn start(&self) -> Option<Cell> { self.0.first().copied() }
    pub fn end(&self) -> Option<Cell> { self.0.last().copied() }

    pub(crate) fn extended(&self, cell: Cell) -> Self {
        let mut v = Vec::with_capacity(self.0.len() + 2);
        v.extend_from_slice(&self.0);
        v.push(cell);
        Self(v)
    }

    /// Comma-separated board notation, e.g. `a1,c2,d4`.
    pub fn notation(&self) -> String { self.to_string() }
}

impl From<Vec<Cell>> for Path {
    fn from(v: Vec<Cell>) -> Self { Self(v) }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 { f.write_str(",")?; }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// How overlapping keys are resolved when worker maps are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Later batches overwrite earlier ones.
    #[default]
    LastWriter,
    /// Keep the lexicographically smallest path (by row, then column).
    SmallestPath,
}

/// Label string → one representative path spelling it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceMap {
    entries: HashMap<LabelString, Path>,
}

impl SequenceMap {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, labels: &LabelString) -> Option<&Path> { self.entries.get(labels) }

    pub fn contains(&self, labels: &LabelString) -> bool { self.entries.contains_key(labels) }

    /// Overwrites any existing path for `labels`, returning it.
    pub fn insert(&mut self, labels: LabelString, path: Path) -> Option<Path> { self.entries.insert(labels, path) }

    pub fn iter(&self) -> impl Iterator<Item = (&LabelString, &Path)> { self.entries.iter() }

    pub fn keys(&self) -> impl Iterator<Item = &LabelString> { self.entries.keys() }

    /// Entries ordered by label string.
    pub fn sorted(&self) -> Vec<(&LabelString, &Path)> {
        let mut v: Vec<_> = self.entries.iter().collect();
        v.sort_unstable_by(|a, b| a.0.cmp(b.0));
        v
    }

    pub fn merge(&mut self, other: SequenceMap, policy: MergePolicy) {
        if self.entries.is_empty() && policy == MergePolicy::LastWriter {
            self.entries = other.entries;
            return;
        }
        for (k, p) in other.entries {
            match policy {
                MergePolicy::LastWriter => { self.entries.insert(k, p); }
                MergePolicy::SmallestPath => match self.entries.entry(k) {
                    Entry::Occupied(mut e) => { if p < *e.get() { e.insert(p); } }
                    Entry::Vacant(e) => { e.insert(p); }
                },
            }
        }
    }
}

impl FromIterator<(LabelString, Path)> for SequenceMap {
    fn from_iter<I: IntoIterator<Item = (LabelString, Path)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[&str]) -> Path {
        cells.iter().map(|s| s.parse::<Cell>().unwrap()).collect::<Vec<_>>().into()
    }

    #[test]
    fn path_notation_is_comma_separated() {
        assert_eq!(path(&["a1", "c2", "d4"]).notation(), "a1,c2,d4");
        assert_eq!(Path::default().notation(), "");
    }

    #[test]
    fn label_string_parses_and_orders() {
        let a: LabelString = "abb".parse().unwrap();
        let b: LabelString = "abcb".parse().unwrap();
        assert!(a < b);
        assert_eq!(a.to_string(), "abb");
        assert!("abd".parse::<LabelString>().is_err());
        assert!("ABB".parse::<LabelString>().is_err());
    }

    #[test]
    fn merge_last_writer_overwrites() {
        let k: LabelString = "ab".parse().unwrap();
        let mut m: SequenceMap = [(k.clone(), path(&["a1", "b3"]))].into_iter().collect();
        let other: SequenceMap = [(k.clone(), path(&["a1", "c2"]))].into_iter().collect();
        m.merge(other, MergePolicy::LastWriter);
        assert_eq!(m.get(&k), Some(&path(&["a1", "c2"])));
    }

    #[test]
    fn merge_smallest_path_keeps_minimum() {
        let k: LabelString = "ab".parse().unwrap();
        let mut m: SequenceMap = [(k.clone(), path(&["a1", "b3"]))].into_iter().collect();
        let other: SequenceMap = [(k.clone(), path(&["a1", "c2"]))].into_iter().collect();
        m.merge(other, MergePolicy::SmallestPath);
        // c2 is (1,2), b3 is (2,1): c2 sorts first by row
        assert_eq!(m.get(&k), Some(&path(&["a1", "c2"])));
        let again: SequenceMap = [(k.clone(), path(&["a1", "b3"]))].into_iter().collect();
        m.merge(again, MergePolicy::SmallestPath);
        assert_eq!(m.get(&k), Some(&path(&["a1", "c2"])));
    }
}
