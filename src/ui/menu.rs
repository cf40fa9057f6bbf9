// SPDX-License-Identifier: MPL-2.0
//! The action list attached to every preview in the demos.

/// Identifies a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Share,
    Copy,
    Favorite,
    Delete,
}

/// A single entry of a preview menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuAction {
    pub id: ActionId,
    /// Fluent key of the label.
    pub label_key: &'static str,
    /// Destructive actions are drawn in the danger color.
    pub destructive: bool,
}

/// Builds the action list of a preview. Demos receive one at construction.
pub type MenuFactory = fn() -> Vec<MenuAction>;

/// The menu shared by all demos.
#[must_use]
pub fn default_demo_menu() -> Vec<MenuAction> {
    vec![
        MenuAction {
            id: ActionId::Share,
            label_key: "menu-action-share",
            destructive: false,
        },
        MenuAction {
            id: ActionId::Copy,
            label_key: "menu-action-copy",
            destructive: false,
        },
        MenuAction {
            id: ActionId::Favorite,
            label_key: "menu-action-favorite",
            destructive: false,
        },
        MenuAction {
            id: ActionId::Delete,
            label_key: "menu-action-delete",
            destructive: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_ends_with_the_destructive_action() {
        let menu = default_demo_menu();
        assert_eq!(menu.len(), 4);
        let last = menu.last().expect("menu is not empty");
        assert_eq!(last.id, ActionId::Delete);
        assert!(last.destructive);
        assert!(menu[..3].iter().all(|action| !action.destructive));
    }
}
