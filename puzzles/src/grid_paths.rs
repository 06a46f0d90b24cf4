//! Monotone lattice paths on an `n x m` grid, avoiding blocked cells.
//!
//! Input: `n m`, then `k`, then `k` pairs `r c` (1-based). Paths go from the
//! top-left to the bottom-right moving only down or right. The count is taken
//! modulo 1e9+7.

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const MOD: u64 = 1_000_000_007;
const MAX_CELLS: u64 = 4_000_000;

const HUGE_GRID: GuardSite = GuardSite::new("huge_grid", "grid has more than 4000000 cells");
const EXCESS_BLOCKS: GuardSite =
    GuardSite::new("excess_blocks", "more blocked cells than grid cells");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.scalar("n")?;
    let m: usize = tokens.scalar("m")?;

    let cells = (n as u64).saturating_mul(m as u64);
    guard.check(&HUGE_GRID, cells > MAX_CELLS);

    let k: u64 = tokens.scalar("k")?;
    guard.check(&EXCESS_BLOCKS, k > cells);

    let mut blocked = vec![false; n * m];
    for _ in 0..k {
        let r: usize = tokens.scalar("r")?;
        let c: usize = tokens.scalar("c")?;
        if r == 0 || r > n || c == 0 || c > m {
            return Err(InputError::out_of_range(
                "cell",
                format!("({r}, {c}) outside {n}x{m} grid"),
            ));
        }
        blocked[(r - 1) * m + (c - 1)] = true;
    }

    Ok(count_paths(n, m, &blocked).to_string())
}

fn count_paths(n: usize, m: usize, blocked: &[bool]) -> u64 {
    if n == 0 || m == 0 {
        return 0;
    }

    let mut row = vec![0u64; m];
    row[0] = 1;
    for r in 0..n {
        for c in 0..m {
            if blocked[r * m + c] {
                row[c] = 0;
            } else if c > 0 {
                row[c] = (row[c] + row[c - 1]) % MOD;
            }
        }
    }
    row[m - 1]
}
