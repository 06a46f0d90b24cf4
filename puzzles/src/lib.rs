//! Guarded puzzle solvers.
//!
//! Each module is a self-contained solution to one small numeric or
//! combinatorial puzzle. It has its own parsing, its own guard sites and its
//! own algorithm. Modules share nothing but the token reader and the
//! [`Enforce`] seam.
//!
//! Every solver follows the same order:
//!
//! ```text
//! parse scalars -> guard(s) on the parsed values -> compute -> format one line
//! ```
//!
//! Guard thresholds are example predicates and are kept as written.

pub mod dice;
pub mod euclid_steps;
pub mod grid_paths;
pub mod input;
pub mod knight;
pub mod partitions;
pub mod popcount_range;
pub mod subset_sum;

pub use input::{InputError, Tokens};

use tripwire_guard::Enforce;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    Partitions,
    GridPaths,
    Dice,
    SubsetSum,
    EuclidSteps,
    PopcountRange,
    Knight,
}

impl Puzzle {
    pub const ALL: [Puzzle; 7] = [
        Puzzle::Partitions,
        Puzzle::GridPaths,
        Puzzle::Dice,
        Puzzle::SubsetSum,
        Puzzle::EuclidSteps,
        Puzzle::PopcountRange,
        Puzzle::Knight,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Puzzle::Partitions => "partitions",
            Puzzle::GridPaths => "grid-paths",
            Puzzle::Dice => "dice",
            Puzzle::SubsetSum => "subset-sum",
            Puzzle::EuclidSteps => "euclid-steps",
            Puzzle::PopcountRange => "popcount-range",
            Puzzle::Knight => "knight",
        }
    }

    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Puzzle::Partitions => "partitions of b into parts no larger than a",
            Puzzle::GridPaths => "monotone grid paths around blocked cells",
            Puzzle::Dice => "probability that n dice sum to at least t",
            Puzzle::SubsetSum => "brute-force subset sum",
            Puzzle::EuclidSteps => "steps of subtractive Euclid",
            Puzzle::PopcountRange => "numbers in 1..=n with exactly k set bits",
            Puzzle::Knight => "probability a knight stays on the board",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|puzzle| puzzle.name().eq_ignore_ascii_case(name))
    }

    /// Run the puzzle on `input` and return its single output line.
    pub fn solve(self, input: &str, guard: &impl Enforce) -> Result<String, InputError> {
        tracing::debug!(puzzle = self.name(), bytes = input.len(), "Solving");
        match self {
            Puzzle::Partitions => partitions::solve(input, guard),
            Puzzle::GridPaths => grid_paths::solve(input, guard),
            Puzzle::Dice => dice::solve(input, guard),
            Puzzle::SubsetSum => subset_sum::solve(input, guard),
            Puzzle::EuclidSteps => euclid_steps::solve(input, guard),
            Puzzle::PopcountRange => popcount_range::solve(input, guard),
            Puzzle::Knight => knight::solve(input, guard),
        }
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
