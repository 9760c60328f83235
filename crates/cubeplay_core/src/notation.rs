//! Functions for parsing, formatting, and inverting move sequences.

use itertools::Itertools;

use crate::{Twist, TwistParseError};

/// Formats a sequence of twists as a space-separated string.
pub fn format_twists(twists: impl IntoIterator<Item = Twist>) -> String {
    twists.into_iter().join(" ")
}

/// Parses a whitespace-separated sequence of move tokens.
pub fn parse_twists(s: &str) -> impl '_ + Iterator<Item = Result<Twist, TwistParseError>> {
    s.split_whitespace().map(str::parse)
}

/// Returns the sequence of twists that undoes `twists`: the same twists in
/// reverse order, each reversed.
pub fn invert_twists(twists: &[Twist]) -> Vec<Twist> {
    twists.iter().rev().map(|twist| twist.rev()).collect()
}

/// Returns the inverse of a single move token, such as `U'` for `U`.
pub fn invert_token(token: &str) -> Result<String, TwistParseError> {
    Ok(token.parse::<Twist>()?.rev().to_string())
}
