use knightmoves::board::Label;
use knightmoves::search::{score, LabelString, Score, WeightTriple, DEFAULT_CEILING};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_labels(rng: &mut SmallRng, len: usize) -> Vec<Label> {
    (0..len).map(|_| Label::ALL[rng.gen_range(0..3)]).collect()
}

fn random_weights(rng: &mut SmallRng) -> WeightTriple {
    WeightTriple::new(rng.gen_range(1..=4), rng.gen_range(1..=4), rng.gen_range(1..=4))
}

#[test]
fn score_is_a_pure_function() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for _ in 0..500 {
        let len = rng.gen_range(2..36);
        let labels = random_labels(&mut rng, len);
        let w = random_weights(&mut rng);
        let first = score(&labels, &w, DEFAULT_CEILING);
        for _ in 0..3 {
            assert_eq!(score(&labels, &w, DEFAULT_CEILING), first);
        }
    }
}

#[test]
fn exceeded_is_stable_under_extension() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..500 {
        let labels = random_labels(&mut rng, 35);
        let w = random_weights(&mut rng);
        let mut exceeded_at: Option<usize> = None;
        for end in 1..=labels.len() {
            let s = score(&labels[..end], &w, DEFAULT_CEILING);
            match exceeded_at {
                Some(at) => assert!(s.is_exceeded(), "prefix {end} recovered after exceeding at {at}"),
                None => if s.is_exceeded() { exceeded_at = Some(end); },
            }
        }
    }
}

#[test]
fn values_never_pass_the_ceiling() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        let len = rng.gen_range(1..20);
        let labels = random_labels(&mut rng, len);
        let w = random_weights(&mut rng);
        let ceiling = rng.gen_range(1..3000);
        if let Score::Value(v) = score(&labels, &w, ceiling) {
            assert!(v <= ceiling, "{v} above ceiling {ceiling}");
        }
    }
}

#[test]
fn reference_weights_on_known_strings() {
    let w = WeightTriple::new(1, 2, 1);
    let cases = [
        ("aab", 4),   // 1+1=2, *2=4
        ("abba", 4),  // 1*2=2, +2=4, *1=4
        ("bbbb", 8),
        ("cab", 2),
    ];
    for (text, want) in cases {
        let ls: LabelString = text.parse().unwrap();
        assert_eq!(score(ls.labels(), &w, DEFAULT_CEILING), Score::Value(want), "{text}");
    }
}

#[test]
fn ceiling_stops_at_first_excess() {
    // 3*3*3*... passes 2024 at the seventh label; anything after it is ignored
    let w = WeightTriple::new(3, 3, 3);
    let ls: LabelString = "abcabcaaaaaaa".parse().unwrap();
    assert_eq!(score(&ls.labels()[..6], &w, DEFAULT_CEILING), Score::Value(729));
    assert_eq!(score(ls.labels(), &w, DEFAULT_CEILING), Score::Exceeded);
    assert_eq!(score(ls.labels(), &w, u64::MAX).value().map(|v| v > 2024), Some(true));
}
