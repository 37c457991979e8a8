use lazyseq::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Round `r` takes index `r` from every input long enough to have it.
fn reference_merge(inputs: &[Vec<char>]) -> Vec<char> {
    let rounds = inputs.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::new();
    for r in 0..rounds {
        for input in inputs {
            if let Some(c) = input.get(r) {
                out.push(*c);
            }
        }
    }
    out
}

fn random_input(rng: &mut ChaCha8Rng, max_len: usize) -> Vec<char> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

#[test]
fn length_is_sum_of_input_lengths() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let a = random_input(&mut rng, 12);
        let b = random_input(&mut rng, 12);
        let merged = merge(&[a.clone(), b.clone()]);
        assert_eq!(merged.len(), a.len() + b.len(), "a={a:?} b={b:?}");
    }
}

#[test]
fn matches_reference_for_many_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let width = rng.random_range(0..6);
        let inputs: Vec<Vec<char>> = (0..width).map(|_| random_input(&mut rng, 8)).collect();

        let eager = merge(&inputs);
        let lazy: Vec<char> = interleave(inputs.iter().map(|input| from_slice(input)))
            .items()
            .collect();

        assert_eq!(eager, reference_merge(&inputs), "inputs={inputs:?}");
        assert_eq!(lazy, eager);
    }
}

#[test]
fn empty_input_is_identity() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let a: String = random_input(&mut rng, 16).into_iter().collect();
        assert_eq!(merge_str(&[a.as_str(), ""]), a);
        assert_eq!(merge_str(&["", a.as_str()]), a);
    }
}

#[test]
fn zero_inputs_merge_to_nothing() {
    let none: [&str; 0] = [];
    assert_eq!(merge_str(&none), "");
    assert!(merge::<char, Vec<char>>(&[]).is_empty());
}

#[test]
fn documented_examples() {
    assert_eq!(merge_str(&["dog", "cat"]), "dcoagt");
    assert_eq!(merge_str(&["abc", "pqrstu"]), "apbqcrstu");
}

#[test]
fn repeated_merges_do_not_share_state() {
    let inputs = ["lazy", "seq", "engine"];
    let outputs: Vec<String> = (0..5).map(|_| merge_str(&inputs)).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(outputs[0], "lseaenzqgyine");
}

#[test]
fn merged_producer_stays_exhausted() {
    let mut merged = interleave([chars("ab"), chars("c")]);
    let consumed = drive(merged.by_ref(), |_| {});
    assert_eq!(consumed, 3);
    for _ in 0..4 {
        assert_eq!(merged.advance(), Step::Complete(Exhausted));
    }
}

#[test]
fn consumer_can_pause_and_resume_a_merge() {
    use std::ops::ControlFlow;

    let mut merged = interleave([chars("dog"), chars("cat")]);
    let mut out = String::new();
    let paused = drive_while(&mut merged, |c| {
        out.push(c);
        if out.len() == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(paused, Drive::Stopped { consumed: 3 });
    assert_eq!(out, "dco");

    let finished = drive(merged, |c| out.push(c));
    assert_eq!(finished, 3);
    assert_eq!(out, "dcoagt");
}
