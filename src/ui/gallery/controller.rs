// SPDX-License-Identifier: MPL-2.0
//! Data source of the gallery and the two-phase preview protocol.
//!
//! A long press calls [`GridController::begin_preview`], which opens a
//! session for the pressed item and returns its handle together with the
//! menu. The session remembers the item *name*, not its position, so the
//! commit resolves the item that was actually pressed. Exactly one of
//! [`GridController::commit_preview`] or [`GridController::dismiss_preview`]
//! ends the session.

use super::cell::{Cell, CellPool};
use super::detail::DetailSurface;
use super::layout::GridLayout;
use super::preview::PreviewSurface;
use crate::error::{Error, Result};
use crate::library::{AssetCatalog, Fixtures};
use crate::ui::demo::DemoConfig;
use crate::ui::menu::{MenuAction, MenuFactory};
use iced::Point;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Handle of one preview session, unique for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct SessionContext {
    name: String,
    position: usize,
}

/// What the gallery hands out when a preview is requested.
#[derive(Debug, Clone)]
pub struct PreviewConfiguration {
    pub handle: SessionId,
    pub actions: Vec<MenuAction>,
}

/// Navigation requested by a committed preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    ShowDetail(DetailSurface),
}

pub struct GridController {
    fixtures: Fixtures,
    catalog: Arc<AssetCatalog>,
    menu: MenuFactory,
    layout: GridLayout,
    cells: CellPool,
    sessions: HashMap<SessionId, SessionContext>,
    next_session: u64,
}

impl fmt::Debug for GridController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridController")
            .field("items", &self.fixtures.len())
            .field("open_sessions", &self.sessions.len())
            .finish()
    }
}

impl GridController {
    #[must_use]
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            fixtures: config.fixtures.clone(),
            catalog: Arc::clone(&config.catalog),
            menu: config.menu,
            layout: GridLayout::three_column(),
            cells: CellPool::new(),
            sessions: HashMap::new(),
            next_session: 0,
        }
    }

    /// Number of items in the grid; always the fixture count.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.fixtures.len()
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    #[must_use]
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Gets (or reuses) the cell for `position` and makes it display the
    /// item at that position. `None` when `position` is out of range.
    pub fn cell_for_item(&mut self, position: usize) -> Option<&Cell> {
        let name = self.fixtures.name_at(position)?;
        let cell = self.cells.dequeue(position);
        cell.display(name, &self.catalog);
        Some(&*cell)
    }

    /// Recycles cells that left `visible` and fills every visible position.
    pub fn prepare_cells(&mut self, visible: Range<usize>) {
        self.cells.recycle_outside(&visible);
        for position in visible {
            let _ = self.cell_for_item(position);
        }
    }

    /// The cell last prepared for `position`.
    #[must_use]
    pub fn prepared_cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Opens a preview session for the item at `position`.
    ///
    /// `point` is where the press happened; it is only reported in logs.
    pub fn begin_preview(
        &mut self,
        position: usize,
        point: Point,
    ) -> Option<PreviewConfiguration> {
        let name = self.fixtures.name_at(position)?.to_string();

        let handle = SessionId(self.next_session);
        self.next_session += 1;

        tracing::debug!(
            session = %handle,
            position,
            item = %name,
            x = point.x,
            y = point.y,
            "preview session opened"
        );

        self.sessions.insert(handle, SessionContext { name, position });

        Some(PreviewConfiguration {
            handle,
            actions: (self.menu)(),
        })
    }

    /// Builds the preview surface of an open session.
    pub fn make_preview(&self, handle: SessionId) -> Result<PreviewSurface> {
        let session = self
            .sessions
            .get(&handle)
            .ok_or(Error::UnknownSession(handle.0))?;
        PreviewSurface::new(&session.name, &self.catalog)
    }

    /// Item name carried by an open session.
    #[must_use]
    pub fn session_item(&self, handle: SessionId) -> Option<&str> {
        self.sessions.get(&handle).map(|session| session.name.as_str())
    }

    /// Ends the session and asks for the detail screen of its item.
    /// A handle that is not open yields no navigation.
    pub fn commit_preview(&mut self, handle: SessionId) -> Option<NavigationIntent> {
        let Some(session) = self.sessions.remove(&handle) else {
            tracing::warn!(session = %handle, "commit for a session that is not open");
            return None;
        };

        tracing::info!(
            session = %handle,
            position = session.position,
            item = %session.name,
            "preview committed"
        );
        Some(NavigationIntent::ShowDetail(DetailSurface::new(session.name)))
    }

    /// Ends the session without navigating.
    pub fn dismiss_preview(&mut self, handle: SessionId) {
        if self.sessions.remove(&handle).is_some() {
            tracing::debug!(session = %handle, "preview dismissed");
        }
    }

    /// Number of sessions neither committed nor dismissed.
    #[must_use]
    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use crate::ui::menu::default_demo_menu;

    fn controller() -> GridController {
        let catalog = AssetCatalog::bundled().expect("bundled assets load");
        GridController::new(&DemoConfig::new(Fixtures::default(), Arc::new(catalog)))
    }

    #[test]
    fn item_count_matches_fixtures_and_is_stable() {
        let controller = controller();
        let expected = Fixtures::default().len();
        assert_eq!(controller.item_count(), expected);
        assert_eq!(controller.item_count(), expected);
    }

    #[test]
    fn every_position_displays_its_own_item() {
        let mut controller = controller();
        let fixtures = Fixtures::default();

        for (position, name) in fixtures.iter().enumerate() {
            let expected = controller
                .catalog()
                .resolve(name)
                .map(|asset| asset.handle.id());
            let cell = controller.cell_for_item(position).expect("position in range");
            assert_eq!(cell.item(), Some(name));
            assert_eq!(cell.image().map(|handle| handle.id()), expected);
        }
    }

    #[test]
    fn out_of_range_position_has_no_cell() {
        let mut controller = controller();
        let count = controller.item_count();
        assert!(controller.cell_for_item(count).is_none());
        assert!(controller.begin_preview(count, Point::ORIGIN).is_none());
    }

    #[test]
    fn session_carries_the_pressed_name() {
        let mut controller = controller();
        for (position, name) in Fixtures::default().iter().enumerate() {
            let configuration = controller
                .begin_preview(position, Point::new(1.0, 2.0))
                .expect("position in range");
            assert_eq!(controller.session_item(configuration.handle), Some(name));
        }
    }

    #[test]
    fn sessions_get_fresh_handles() {
        let mut controller = controller();
        let first = controller.begin_preview(0, Point::ORIGIN).expect("in range");
        let second = controller.begin_preview(0, Point::ORIGIN).expect("in range");
        assert_ne!(first.handle, second.handle);
        assert_eq!(controller.open_sessions(), 2);
    }

    #[test]
    fn configuration_carries_the_menu() {
        let mut controller = controller();
        let configuration = controller.begin_preview(0, Point::ORIGIN).expect("in range");
        assert_eq!(configuration.actions, default_demo_menu());
    }

    #[test]
    fn commit_opens_the_detail_of_every_pressed_item() {
        let mut controller = controller();
        for (position, name) in Fixtures::default().iter().enumerate() {
            let handle = controller
                .begin_preview(position, Point::ORIGIN)
                .expect("in range")
                .handle;
            let intent = controller.commit_preview(handle);
            let Some(NavigationIntent::ShowDetail(detail)) = intent else {
                panic!("expected detail navigation for {name}");
            };
            assert_eq!(detail.name(), name);
            assert_eq!(detail.label(), crate::library::capitalized(name));
        }
        assert_eq!(controller.open_sessions(), 0);
    }

    #[test]
    fn commit_of_dismissed_session_does_nothing() {
        let mut controller = controller();
        let handle = controller.begin_preview(3, Point::ORIGIN).expect("in range").handle;

        controller.dismiss_preview(handle);

        assert_eq!(controller.commit_preview(handle), None);
        assert_eq!(controller.open_sessions(), 0);
    }

    #[test]
    fn commit_twice_navigates_once() {
        let mut controller = controller();
        let handle = controller.begin_preview(1, Point::ORIGIN).expect("in range").handle;

        assert!(controller.commit_preview(handle).is_some());
        assert!(controller.commit_preview(handle).is_none());
    }

    #[test]
    fn make_preview_uses_the_session_item() {
        let mut controller = controller();
        let handle = controller.begin_preview(2, Point::ORIGIN).expect("in range").handle;
        let surface = controller.make_preview(handle).expect("asset exists");
        assert_eq!(Some(surface.name()), Fixtures::default().name_at(2));
    }

    #[test]
    fn make_preview_for_unknown_session_fails() {
        let controller = controller();
        assert!(matches!(
            controller.make_preview(SessionId(99)),
            Err(Error::UnknownSession(99))
        ));
    }

    #[test]
    fn make_preview_reports_missing_asset() {
        let fixtures = Fixtures::new(["ghost"]).expect("non-empty");
        let config = DemoConfig::new(fixtures, Arc::new(AssetCatalog::default()));
        let mut controller = GridController::new(&config);
        let handle = controller.begin_preview(0, Point::ORIGIN).expect("in range").handle;

        assert!(matches!(
            controller.make_preview(handle),
            Err(Error::Asset(AssetError::Missing(_)))
        ));
    }

    #[test]
    fn prepare_cells_keeps_only_visible_positions() {
        let mut controller = controller();
        controller.prepare_cells(0..6);
        controller.prepare_cells(6..9);

        assert!(controller.prepared_cell(0).is_none());
        for position in 6..9 {
            let expected = Fixtures::default().name_at(position).map(str::to_string);
            assert_eq!(
                controller.prepared_cell(position).and_then(Cell::item).map(str::to_string),
                expected
            );
        }
    }
}
