//! Probability that `n` fair dice with `s` faces sum to at least `t`.
//!
//! Input: `n s t`. Output has nine decimals. The distribution is built one
//! die at a time with a sliding-window prefix sum.

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const MANY_DICE: GuardSite = GuardSite::new("many_dice", "more than 500 dice");
const WIDE_SUM_RANGE: GuardSite =
    GuardSite::new("wide_sum_range", "n * s exceeds 50000 reachable sums");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.scalar("n")?;
    let s: usize = tokens.scalar("s")?;
    let t: u64 = tokens.scalar("t")?;

    guard.check(&MANY_DICE, n > 500);
    guard.check(&WIDE_SUM_RANGE, (n as u64).saturating_mul(s as u64) > 50_000);

    if s == 0 {
        return Err(InputError::out_of_range("s", "a die needs at least one face"));
    }

    let probability = at_least(&distribution(n, s), t);
    Ok(format!("{probability:.9}"))
}

/// `dist[x]` is the probability that the dice sum to exactly `x`.
fn distribution(n: usize, s: usize) -> Vec<f64> {
    let faces = s as f64;
    let mut dist = vec![1.0];
    for _ in 0..n {
        let mut prefix = Vec::with_capacity(dist.len() + 1);
        prefix.push(0.0);
        let mut acc = 0.0;
        for &p in &dist {
            acc += p;
            prefix.push(acc);
        }

        let len = dist.len() + s;
        let mut next = vec![0.0; len];
        for (sum, slot) in next.iter_mut().enumerate().skip(1) {
            // previous sums sum-s ..= sum-1, clipped to the old range
            let hi = sum.min(dist.len());
            let lo = sum.saturating_sub(s);
            if lo < hi {
                *slot = (prefix[hi] - prefix[lo]) / faces;
            }
        }
        dist = next;
    }
    dist
}

fn at_least(dist: &[f64], t: u64) -> f64 {
    let start = usize::try_from(t).unwrap_or(usize::MAX);
    dist.iter().skip(start).sum::<f64>().clamp(0.0, 1.0)
}
