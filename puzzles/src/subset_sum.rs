//! Brute-force subset sum.
//!
//! Input: `n target`, then `n` weights (possibly negative). Prints `YES` when
//! some subset (the empty one included) sums to `target`, `NO` otherwise.
//! Every one of the `2^n` masks is tried.

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const EXPONENTIAL_SEARCH: GuardSite =
    GuardSite::new("exponential_search", "n exceeds 22, 2^n subsets to enumerate");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let n: u32 = tokens.scalar("n")?;
    let target: i64 = tokens.scalar("target")?;

    guard.check(&EXPONENTIAL_SEARCH, n > 22);

    let weights = (0..n)
        .map(|_| tokens.scalar::<i64>("weight"))
        .collect::<Result<Vec<_>, _>>()?;

    let found = has_subset(&weights, target);
    Ok(if found { "YES" } else { "NO" }.to_string())
}

/// Sums are taken in `i128`: 22 weights of at most `2^63` in magnitude cannot
/// overflow it.
fn has_subset(weights: &[i64], target: i64) -> bool {
    let target = i128::from(target);
    (0u32..1 << weights.len()).any(|mask| {
        let sum: i128 = weights
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &w)| i128::from(w))
            .sum();
        sum == target
    })
}
