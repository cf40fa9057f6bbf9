// SPDX-License-Identifier: MPL-2.0
//! Screen pushed after a preview is committed.

use crate::library::capitalized;
use crate::ui::design_tokens::typography;
use iced::widget::{center, text};
use iced::Element;

/// Terminal screen showing only the item's name, centered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSurface {
    name: String,
    label: String,
}

impl DetailSurface {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = capitalized(&name);
        Self { name, label }
    }

    /// The item this screen was opened for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of the centered label, also used as the screen title.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label stays centered on every layout pass, resizes included.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        center(text(self.label.as_str()).size(typography::TITLE_LG)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_derived_from_the_name() {
        let detail = DetailSurface::new("glacier");
        assert_eq!(detail.name(), "glacier");
        assert_eq!(detail.label(), "Glacier");
    }

    #[test]
    fn view_builds_without_state() {
        let detail = DetailSurface::new("river");
        let _element: Element<'_, ()> = detail.view();
    }
}
