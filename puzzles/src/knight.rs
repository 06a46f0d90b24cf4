//! Probability that a knight stays on an `n x n` board after `k` random moves.
//!
//! Input: `n k r c`, with the start square `(r, c)` 1-based. Each move picks
//! one of the eight knight jumps uniformly. A knight that leaves the board
//! stays off. Output has nine decimals.

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const BIG_BOARD: GuardSite = GuardSite::new("big_board", "board side exceeds 100");
const MANY_MOVES: GuardSite = GuardSite::new("many_moves", "more than 1000 moves");
const DP_VOLUME: GuardSite = GuardSite::new("dp_volume", "n * n * k exceeds 2000000");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.scalar("n")?;
    let k: usize = tokens.scalar("k")?;

    guard.check(&BIG_BOARD, n > 100);
    guard.check(&MANY_MOVES, k > 1000);
    guard.check(&DP_VOLUME, n * n * k > 2_000_000);

    let r: usize = tokens.scalar("r")?;
    let c: usize = tokens.scalar("c")?;
    if r == 0 || r > n || c == 0 || c > n {
        return Err(InputError::out_of_range(
            "start",
            format!("({r}, {c}) is not on a {n}x{n} board"),
        ));
    }

    let probability = stay_probability(n, k, r - 1, c - 1);
    Ok(format!("{probability:.9}"))
}

fn stay_probability(n: usize, moves: usize, row: usize, col: usize) -> f64 {
    let mut board = vec![0.0f64; n * n];
    board[row * n + col] = 1.0;

    for _ in 0..moves {
        let mut next = vec![0.0f64; n * n];
        for r in 0..n {
            for c in 0..n {
                let p = board[r * n + c];
                if p == 0.0 {
                    continue;
                }
                for (dr, dc) in JUMPS {
                    let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    if nr < n && nc < n {
                        next[nr * n + nc] += p / 8.0;
                    }
                }
            }
        }
        board = next;
    }

    board.iter().sum()
}
