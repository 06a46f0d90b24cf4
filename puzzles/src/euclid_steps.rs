//! Number of subtractions performed by subtractive Euclid.
//!
//! Input: `a b`. Repeatedly subtract the smaller value from the larger until
//! they are equal, and count the subtractions.

use std::num::NonZeroU64;

use tripwire_guard::{Enforce, GuardSite};

use crate::input::{InputError, Tokens};

const ZERO_OPERAND: GuardSite =
    GuardSite::new("zero_operand", "zero operand, subtraction never converges");
const LOPSIDED_RATIO: GuardSite =
    GuardSite::new("lopsided_ratio", "max(a, b) / gcd(a, b) exceeds 50000000");

pub fn solve(input: &str, guard: &impl Enforce) -> Result<String, InputError> {
    let mut tokens = Tokens::new(input);
    let a: u64 = tokens.scalar("a")?;
    let b: u64 = tokens.scalar("b")?;

    guard.check(&ZERO_OPERAND, a == 0 || b == 0);

    // only an enforcer that lets fired sites pass gets here with a zero
    let (Some(a), Some(b)) = (NonZeroU64::new(a), NonZeroU64::new(b)) else {
        return Err(InputError::out_of_range("a, b", "both operands must be non-zero"));
    };

    // the step count is bounded by max / gcd
    let g = gcd(a, b);
    guard.check(&LOPSIDED_RATIO, a.max(b).get() / g > 50_000_000);

    Ok(subtraction_steps(a.get(), b.get()).to_string())
}

fn gcd(a: NonZeroU64, b: NonZeroU64) -> NonZeroU64 {
    let (mut x, mut y) = (a.get(), b.get());
    while y != 0 {
        (x, y) = (y, x % y);
    }
    // x ends as a divisor of a, which is non-zero
    NonZeroU64::new(x).unwrap_or(NonZeroU64::MIN)
}

fn subtraction_steps(mut a: u64, mut b: u64) -> u64 {
    let mut steps = 0;
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
        steps += 1;
    }
    steps
}
