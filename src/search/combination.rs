use log::{debug, info, trace};
use crate::error::{Error, Result};
use crate::search::score::{score, Score, WeightTriple, DEFAULT_CEILING};
use crate::search::sequence::{LabelString, Path, SequenceMap};

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub target: u64,
    pub ceiling: u64,
}

impl Default for SearchParams {
    fn default() -> Self { Self { target: 2024, ceiling: DEFAULT_CEILING } }
}

/// One path from each map whose label strings both hit the target under `weights`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub weights: WeightTriple,
    pub labels_a: LabelString,
    pub path_a: Path,
    pub labels_b: LabelString,
    pub path_b: Path,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationStats {
    pub triples: usize,
    /// Triples skipped because their sum was above the best so far.
    pub pruned: usize,
    /// Individual score evaluations performed.
    pub scored: u64,
}

#[derive(Default, Debug, Clone)]
pub struct SearchOutcome {
    pub best: Option<WeightTriple>,
    pub min_sum: Option<u64>,
    /// Every record produced, in discovery order. Includes records of triples
    /// found before the bound tightened to `min_sum`.
    pub matches: Vec<MatchRecord>,
    pub stats: CombinationStats,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool { self.best.is_none() }

    /// Records whose triple sums to the minimum.
    pub fn best_matches(&self) -> impl Iterator<Item = &MatchRecord> {
        let min = self.min_sum;
        self.matches.iter().filter(move |m| Some(m.weights.sum()) == min)
    }

    /// First record for the best triple itself.
    pub fn representative(&self) -> Option<&MatchRecord> {
        let best = self.best?;
        self.matches.iter().find(|m| m.weights == best)
    }
}

/// Entries of `sorted` scoring exactly `target` under `weights`.
pub fn qualifying<'m>(sorted: &[(&'m LabelString, &'m Path)], weights: &WeightTriple, params: &SearchParams) -> Vec<(&'m LabelString, &'m Path)> {
    sorted.iter()
        .filter(|(k, _)| score(k.labels(), weights, params.ceiling) == Score::Value(params.target))
        .copied()
        .collect()
}

pub fn validate_candidates(candidates: &[u64]) -> Result<()> {
    if candidates.is_empty() { return Err(Error::EmptyCandidates); }
    if let Some(&w) = candidates.iter().find(|&&w| w == 0) { return Err(Error::NonPositiveWeight(w as i64)); }
    Ok(())
}

/// Minimum-sum weight triple for which both maps have a label string scoring `target`.
pub fn search(map_a: &SequenceMap, map_b: &SequenceMap, target: u64, candidates: &[u64]) -> Result<SearchOutcome> {
    search_with(map_a, map_b, candidates, SearchParams { target, ..SearchParams::default() })
}

pub fn search_with(map_a: &SequenceMap, map_b: &SequenceMap, candidates: &[u64], params: SearchParams) -> Result<SearchOutcome> {
    validate_candidates(candidates)?;
    let seq_a = map_a.sorted();
    let seq_b = map_b.sorted();
    let mut out = SearchOutcome::default();
    let mut best_sum = u64::MAX;

    for &a in candidates {
        for &b in candidates {
            for &c in candidates {
                let w = WeightTriple::new(a, b, c);
                let sum = w.sum();
                out.stats.triples += 1;
                // Positive weights make the sum a valid bound.
                if sum > best_sum {
                    out.stats.pruned += 1;
                    trace!("skip {w}: sum {sum} > {best_sum}");
                    continue;
                }
                let hits_a = qualifying(&seq_a, &w, &params);
                out.stats.scored += seq_a.len() as u64;
                if hits_a.is_empty() { continue; }
                let hits_b = qualifying(&seq_b, &w, &params);
                out.stats.scored += seq_b.len() as u64;
                if hits_b.is_empty() { continue; }

                debug!("{w}: {} x {} sequences hit {}", hits_a.len(), hits_b.len(), params.target);
                out.matches.reserve(hits_a.len() * hits_b.len());
                for &(la, pa) in &hits_a {
                    for &(lb, pb) in &hits_b {
                        out.matches.push(MatchRecord {
                            weights: w,
                            labels_a: la.clone(),
                            path_a: pa.clone(),
                            labels_b: lb.clone(),
                            path_b: pb.clone(),
                        });
                    }
                }
                if sum < best_sum {
                    best_sum = sum;
                    out.best = Some(w);
                    out.min_sum = Some(sum);
                }
            }
        }
    }

    match out.best {
        Some(w) => info!("best {w} (sum {best_sum}), {} match records, {} of {} triples pruned", out.matches.len(), out.stats.pruned, out.stats.triples),
        None => info!("no weight triple reaches {}", params.target),
    }
    Ok(out)
}
