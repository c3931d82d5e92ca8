use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, so pre-rendered fragments can be
/// passed to [`Formatter::debug_list`] and friends without gaining quotes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Indents every line of `rendered` with `prefix`, used to draw nested structures.
pub fn prefix_lines(rendered: &str, prefix: &str) -> String {
    rendered
        .lines()
        .map(|l| String::from(prefix) + l)
        .collect::<Vec<_>>()
        .join("\n")
}
