//! Whitespace-separated scalar input.

use std::str::{FromStr, SplitAsciiWhitespace};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing value for `{name}`")]
    Missing { name: &'static str },
    #[error("invalid value for `{name}`: {token:?}")]
    Invalid { name: &'static str, token: String },
    #[error("`{name}` out of range: {detail}")]
    OutOfRange { name: &'static str, detail: String },
}

impl InputError {
    pub fn out_of_range(name: &'static str, detail: impl Into<String>) -> Self {
        Self::OutOfRange {
            name,
            detail: detail.into(),
        }
    }
}

/// Reads named scalars from a whitespace-separated input.
///
/// Trailing tokens are ignored.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
        }
    }

    /// Parse the next token as `T`. `name` identifies the value in errors.
    pub fn scalar<T: FromStr>(&mut self, name: &'static str) -> Result<T, InputError> {
        let token = self.inner.next().ok_or(InputError::Missing { name })?;
        token.parse().map_err(|_| InputError::Invalid {
            name,
            token: token.to_string(),
        })
    }
}
