// SPDX-License-Identifier: MPL-2.0
//! Ordered list of item names backing the grid.

use crate::error::{Error, Result};

/// Names of the images bundled under `assets/images/`.
pub const BUNDLED_IMAGES: &[&str] = &[
    "beach", "bridge", "canyon", "city", "desert", "forest", "glacier", "harbor", "lake",
    "meadow", "mountain", "river",
];

/// Immutable, non-empty, ordered list of item names.
///
/// Position `i` in the grid always shows `images[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    images: Vec<String>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            images: BUNDLED_IMAGES.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

impl Fixtures {
    /// Builds a fixture list, rejecting an empty one.
    pub fn new<I, S>(images: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(Error::Config("fixture list is empty".to_string()));
        }
        Ok(Self { images })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the name at `position`, or `None` past the end.
    #[must_use]
    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.images.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_matches_bundled_images() {
        let fixtures = Fixtures::default();
        assert_eq!(fixtures.len(), BUNDLED_IMAGES.len());
        assert!(fixtures.iter().eq(BUNDLED_IMAGES.iter().copied()));
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = Fixtures::new(Vec::<String>::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn name_at_is_total_within_range() {
        let fixtures = Fixtures::new(["a", "b", "c"]).expect("non-empty");
        assert_eq!(fixtures.name_at(0), Some("a"));
        assert_eq!(fixtures.name_at(2), Some("c"));
        assert_eq!(fixtures.name_at(3), None);
    }
}
