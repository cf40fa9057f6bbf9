// SPDX-License-Identifier: MPL-2.0
//! The fixed image library shown by the demos.
//!
//! [`Fixtures`] is the ordered list of item names; its order defines the
//! grid position of every item. [`AssetCatalog`] resolves those names to
//! embedded image data.

pub mod catalog;
pub mod fixtures;

pub use catalog::{Asset, AssetCatalog};
pub use fixtures::Fixtures;

/// Formats an item name for display: the first letter of every word is
/// uppercased and the remaining letters lowercased.
///
/// Words are separated by whitespace, `-` or `_`; separators are kept.
#[must_use]
pub fn capitalized(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for ch in name.chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_single_word() {
        assert_eq!(capitalized("mountain"), "Mountain");
    }

    #[test]
    fn capitalizes_every_word() {
        assert_eq!(capitalized("mountain lake"), "Mountain Lake");
        assert_eq!(capitalized("sea-side_view"), "Sea-Side_View");
    }

    #[test]
    fn lowercases_trailing_letters() {
        assert_eq!(capitalized("hARBOR"), "Harbor");
    }

    #[test]
    fn empty_name_stays_empty() {
        assert_eq!(capitalized(""), "");
    }
}
