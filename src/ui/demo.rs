// SPDX-License-Identifier: MPL-2.0
//! Contract between the demo list and the demos it launches.

use crate::library::{AssetCatalog, Fixtures};
use crate::ui::gallery::GestureSettings;
use crate::ui::menu::{default_demo_menu, MenuFactory};
use std::sync::Arc;

/// Everything a demo needs, handed over at construction.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub fixtures: Fixtures,
    pub catalog: Arc<AssetCatalog>,
    pub menu: MenuFactory,
    pub gesture: GestureSettings,
}

impl DemoConfig {
    #[must_use]
    pub fn new(fixtures: Fixtures, catalog: Arc<AssetCatalog>) -> Self {
        Self {
            fixtures,
            catalog,
            menu: default_demo_menu,
            gesture: GestureSettings::default(),
        }
    }

    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureSettings) -> Self {
        self.gesture = gesture;
        self
    }
}

/// A screen listed in the demo list.
pub trait ContextMenuDemo {
    /// Label of the demo in the list and title of its screen.
    fn title() -> &'static str;

    fn new(config: DemoConfig) -> Self;
}

/// Every demo the list knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    CollectionPreview,
}

impl DemoKind {
    pub const ALL: &'static [DemoKind] = &[DemoKind::CollectionPreview];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            DemoKind::CollectionPreview => {
                <crate::ui::gallery::State as ContextMenuDemo>::title()
            }
        }
    }
}
