//! Partitions of `b` into parts no larger than `a`, modulo 1e9+7.
//!
//! Input: `a b`. Classic coin-change table, `O(min(a, b) * b)`.

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const MOD: u64 = 1_000_000_007;

const LARGE_B: GuardSite = GuardSite::new(
    "large_b",
    "b exceeds 9000, partition table grows quadratically",
);
const LARGE_A: GuardSite = GuardSite::new("large_a", "a exceeds 9000, too many part sizes");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let a: usize = tokens.scalar("a")?;
    let b: usize = tokens.scalar("b")?;

    guard.check(&LARGE_B, b > 9000);
    guard.check(&LARGE_A, a > 9000);

    Ok(count_partitions(a, b).to_string())
}

fn count_partitions(max_part: usize, total: usize) -> u64 {
    let mut ways = vec![0u64; total + 1];
    ways[0] = 1;
    for part in 1..=max_part.min(total) {
        for sum in part..=total {
            ways[sum] = (ways[sum] + ways[sum - part]) % MOD;
        }
    }
    ways[total]
}
