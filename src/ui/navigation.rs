// SPDX-License-Identifier: MPL-2.0
//! Push/pop navigation between screens.

use crate::ui::demo::DemoKind;
use crate::ui::gallery::DetailSurface;

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    DemoList,
    Demo(DemoKind),
    Detail(DetailSurface),
}

/// Stack of screens whose bottom (the root) can never be popped.
#[derive(Debug, Clone)]
pub struct NavigationStack<T> {
    root: T,
    pushed: Vec<T>,
}

impl<T> NavigationStack<T> {
    #[must_use]
    pub fn new(root: T) -> Self {
        Self {
            root,
            pushed: Vec::new(),
        }
    }

    pub fn push(&mut self, screen: T) {
        self.pushed.push(screen);
    }

    /// Removes the top screen. The root stays in place.
    pub fn pop(&mut self) -> Option<T> {
        self.pushed.pop()
    }

    /// The screen currently shown.
    #[must_use]
    pub fn top(&self) -> &T {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Number of screens including the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }
}
