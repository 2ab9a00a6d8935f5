use polyexp::combinatorial::{subset_sum_exh, subset_sum_exh_indices, try_subset_sum_exh};
use polyexp::Error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn pattern_sum(input: &[i32], pattern: u64) -> i64 {
    input
        .iter()
        .enumerate()
        .filter(|(j, _)| (pattern >> *j) & 1 == 1)
        .map(|(_, &x)| i64::from(x))
        .sum()
}

/// Lowest non-empty bit pattern whose full subset sums to `target`.
fn first_matching_pattern(input: &[i32], target: i32) -> Option<u64> {
    (1..(1u64 << input.len())).find(|&p| pattern_sum(input, p) == i64::from(target))
}

#[test]
fn results_match_independent_search() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..300 {
        let len = rng.gen_range(1..=10);
        let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-20..=20)).collect();
        let target = rng.gen_range(-30..=30);

        let expected = first_matching_pattern(&input, target);
        let indices = subset_sum_exh_indices(&input, target);
        match (expected, indices) {
            (None, None) => {}
            (Some(pattern), Some(indices)) => {
                let found: u64 = indices.iter().map(|&j| 1u64 << j).sum();
                assert_eq!(found, pattern, "input {input:?} target {target}");
                let values = subset_sum_exh(&input, target).unwrap();
                let mapped: Vec<i32> = indices.iter().map(|&j| input[j]).collect();
                assert_eq!(values, mapped);
                assert!(!values.is_empty());
                assert_eq!(values.iter().map(|&x| i64::from(x)).sum::<i64>(), i64::from(target));
            }
            (expected, got) => {
                panic!("input {input:?} target {target}: expected {expected:?}, got {got:?}")
            }
        }
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(subset_sum_exh(&[3, 34, 4, 12, 5, 2], 9), Some(vec![4, 5]));
    assert_eq!(subset_sum_exh(&[1, 2, 3], 100), None);
    assert_eq!(subset_sum_exh(&[0, 0], 0), Some(vec![0]));
}

#[test]
fn repeated_calls_are_identical() {
    let input = [8, -3, 5, 1, -6, 2, 9];
    for target in -10..=10 {
        assert_eq!(subset_sum_exh(&input, target), subset_sum_exh(&input, target));
    }
}

#[test]
fn oversized_input_is_rejected_before_searching() {
    let input = vec![1; 100];
    assert_eq!(
        try_subset_sum_exh(&input, 1),
        Err(Error::InputTooLarge { len: 100, max: 63 })
    );
}
