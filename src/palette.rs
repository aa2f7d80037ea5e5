//! Brightness palette - maps a value in [0, 1] to a character.

use crate::{Result, TextartError};
use std::fmt;
use std::str::FromStr;

/// Ordered characters used to encode brightness.
/// The first character stands for 0.0 and the last for 1.0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
    reversed: bool,
}

impl Palette {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(TextartError::InvalidArgument(
                "expected one or more characters".into(),
            ));
        }
        Ok(Self { chars, reversed: false })
    }

    /// Character for `value`, which must lie within [0, 1].
    pub fn get(&self, value: f32) -> Result<char> {
        let idx = self.index_of(value)?;
        Ok(self.chars[idx])
    }

    /// Replace the character that `value` maps to.
    pub fn set(&mut self, value: f32, character: char) -> Result<()> {
        let idx = self.index_of(value)?;
        self.chars[idx] = character;
        Ok(())
    }

    pub fn reverse(&mut self) {
        self.chars.reverse();
        self.reversed = !self.reversed;
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    // Nearest slot, ties to even, so 0.0 and 1.0 hit the ends exactly.
    fn index_of(&self, value: f32) -> Result<usize> {
        if !(0.0..=1.0).contains(&value) {
            return Err(TextartError::InvalidArgument(format!(
                "expected a value within [0, 1], got {value}"
            )));
        }
        let last = self.chars.len() - 1;
        Ok(((value * last as f32).round_ties_even() as usize).min(last))
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl FromStr for Palette {
    type Err = TextartError;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern.chars())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter().copied()
    }
}
