// demo.rs
//
// the built-in check: maximum subarray sum, Kadane against brute force

use cpdiag::cp_assert;
use rand::{
    Rng,
    rngs::StdRng,
};

const MAX_LEN: usize = 8;
const MAX_ABS: i64 = 10;

pub fn generate(rng: &mut StdRng) -> Vec<i64> {
    let len = rng.gen_range(1..=MAX_LEN);
    (0..len).map(|_| rng.gen_range(-MAX_ABS..=MAX_ABS)).collect()
}

pub fn max_subarray(a: &[i64]) -> i64 {
    cp_assert!(!a.is_empty(), "no subarray of an empty slice");

    let mut best = a[0];
    let mut cur = a[0];
    for &x in &a[1..] {
        cur = x.max(cur + x);
        best = best.max(cur);
    }
    best
}

/// Forgets that the empty subarray is not allowed, so all-negative inputs come out as 0
pub fn max_subarray_broken(a: &[i64]) -> i64 {
    let mut best = 0;
    let mut cur = 0;
    for &x in a {
        cur = (cur + x).max(0);
        best = best.max(cur);
    }
    best
}

pub fn brute_force(a: &[i64]) -> i64 {
    (0..a.len())
        .flat_map(|i| (i + 1..=a.len()).map(move |j| a[i..j].iter().sum::<i64>()))
        .max()
        .unwrap_or(i64::MIN)
}

pub fn check(solve: fn(&[i64]) -> i64) -> impl Fn(&Vec<i64>) {
    move |input: &Vec<i64>| {
        let fast = solve(input);
        let slow = brute_force(input);
        cp_assert!(fast == slow, "solution gave {fast}, brute force gave {slow}");
    }
}
