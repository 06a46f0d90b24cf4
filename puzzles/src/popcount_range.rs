//! Count of `x` in `1..=n` with exactly `k` set bits, by linear scan.
//!
//! Input: `n k`.

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const LONG_SCAN: GuardSite =
    GuardSite::new("long_scan", "linear scan over more than 2^24 values");
const WIDE_POPCOUNT: GuardSite = GuardSite::new("wide_popcount", "k exceeds 64 bits");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let n: u64 = tokens.scalar("n")?;
    let k: u32 = tokens.scalar("k")?;

    guard.check(&LONG_SCAN, n > 1 << 24);
    guard.check(&WIDE_POPCOUNT, k > 64);

    let count = (1..=n).filter(|x| x.count_ones() == k).count();
    Ok(count.to_string())
}
