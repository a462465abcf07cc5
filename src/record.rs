//! Phonebook records
//!
//! A record is a `(name, number)` pair parsed from a `name - number` line.

use std::fmt;
use std::str::FromStr;

use crate::error::PhonebookError;

/// A single phonebook entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub number: String,
}

impl Record {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

impl FromStr for Record {
    type Err = PhonebookError;

    /// Split at the first `-`; ASCII whitespace around either half is dropped.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, number) = line
            .split_once('-')
            .ok_or_else(|| PhonebookError::MalformedLine(line.trim_end_matches(is_space).to_string()))?;
        Ok(Self::new(trim_space(name), trim_space(number)))
    }
}

/// C-locale whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Trim C-locale whitespace only; non-ASCII spaces such as U+00A0 are kept
pub(crate) fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}, {}|", self.name, self.number)
    }
}
