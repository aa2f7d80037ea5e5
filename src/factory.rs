//! Named registry of palette patterns.

use crate::{Palette, Result, TextartError};
use std::fmt;

/// Stores raw patterns, not palettes, so every `get_palette` call hands out
/// an independent instance.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaletteFactory {
    entries: Vec<(String, String)>,
}

impl PaletteFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Overwriting keeps the original position.
    pub fn register_pattern(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let (name, pattern) = (name.into(), pattern.into());
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = pattern,
            None => self.entries.push((name, pattern)),
        }
    }

    /// No-op if `name` is not registered.
    pub fn unregister_pattern(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    pub fn get_palette(&self, name: &str) -> Result<Palette> {
        let pattern = self
            .pattern(name)
            .ok_or_else(|| TextartError::KeyNotFound(name.to_string()))?;
        pattern.parse()
    }

    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pattern(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, p)| p.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for PaletteFactory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut factory = Self::new();
        for (name, pattern) in iter {
            factory.register_pattern(name, pattern);
        }
        factory
    }
}

impl fmt::Debug for PaletteFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}
