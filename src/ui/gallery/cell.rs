// SPDX-License-Identifier: MPL-2.0
//! Reusable grid cells.
//!
//! Only the cells of visible rows exist. When a row scrolls away its cells
//! go back to the pool and are handed out again for other positions, so a
//! cell must never keep anything from the item it showed before.

use crate::library::AssetCatalog;
use iced::widget::image::Handle;
use std::collections::BTreeMap;
use std::ops::Range;

/// Stable identity of a pooled cell, independent of what it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u32);

/// One grid cell: a single image filling the cell, cropped to fill.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    item: Option<String>,
    image: Option<Handle>,
}

impl Cell {
    fn new(id: CellId) -> Self {
        Self {
            id,
            item: None,
            image: None,
        }
    }

    /// Shows the asset for `name`, replacing whatever was shown before.
    /// A name without an asset leaves the cell empty.
    pub fn display(&mut self, name: &str, catalog: &AssetCatalog) {
        self.image = catalog.resolve(name).map(|asset| asset.handle.clone());
        self.item = Some(name.to_string());
    }

    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Name of the item currently displayed.
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&Handle> {
        self.image.as_ref()
    }
}

/// Hands out cells by grid position and takes them back when their
/// position leaves the visible range.
#[derive(Debug, Default)]
pub struct CellPool {
    next_id: u32,
    assigned: BTreeMap<usize, Cell>,
    reusable: Vec<Cell>,
}

impl CellPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every cell whose position lies outside `visible` to the pool.
    pub fn recycle_outside(&mut self, visible: &Range<usize>) {
        let stale: Vec<usize> = self
            .assigned
            .keys()
            .copied()
            .filter(|position| !visible.contains(position))
            .collect();

        for position in stale {
            if let Some(cell) = self.assigned.remove(&position) {
                self.reusable.push(cell);
            }
        }
    }

    /// Returns the cell assigned to `position`, taking one from the pool
    /// (or creating one) if none is assigned yet.
    pub fn dequeue(&mut self, position: usize) -> &mut Cell {
        let reusable = &mut self.reusable;
        let next_id = &mut self.next_id;
        self.assigned.entry(position).or_insert_with(|| {
            reusable.pop().unwrap_or_else(|| {
                let cell = Cell::new(CellId(*next_id));
                *next_id += 1;
                cell
            })
        })
    }

    /// The cell currently assigned to `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Cell> {
        self.assigned.get(&position)
    }

    /// Number of cells assigned to positions.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Number of cells waiting in the pool.
    #[must_use]
    pub fn reusable_count(&self) -> usize {
        self.reusable.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AssetCatalog {
        AssetCatalog::bundled().expect("bundled assets load")
    }

    #[test]
    fn display_replaces_previous_item() {
        let catalog = catalog();
        let mut pool = CellPool::new();
        let cell = pool.dequeue(0);

        cell.display("beach", &catalog);
        cell.display("forest", &catalog);

        let forest = catalog.resolve("forest").expect("forest exists");
        assert_eq!(cell.item(), Some("forest"));
        assert_eq!(
            cell.image().map(Handle::id),
            Some(forest.handle.id())
        );
    }

    #[test]
    fn display_of_unknown_name_clears_the_image() {
        let catalog = catalog();
        let mut pool = CellPool::new();
        let cell = pool.dequeue(0);

        cell.display("beach", &catalog);
        cell.display("nowhere", &catalog);

        assert_eq!(cell.item(), Some("nowhere"));
        assert!(cell.image().is_none());
    }

    #[test]
    fn dequeue_returns_the_same_cell_for_a_position() {
        let mut pool = CellPool::new();
        let first = pool.dequeue(4).id();
        let second = pool.dequeue(4).id();
        assert_eq!(first, second);
        assert_eq!(pool.assigned_count(), 1);
    }

    #[test]
    fn recycled_cells_are_reused_for_new_positions() {
        let mut pool = CellPool::new();
        let ids: Vec<CellId> = (0..3).map(|position| pool.dequeue(position).id()).collect();

        pool.recycle_outside(&(3..6));
        assert_eq!(pool.assigned_count(), 0);
        assert_eq!(pool.reusable_count(), 3);

        let reused: Vec<CellId> = (3..6).map(|position| pool.dequeue(position).id()).collect();
        assert_eq!(pool.reusable_count(), 0);
        for id in reused {
            assert!(ids.contains(&id));
        }
    }

    #[test]
    fn recycling_keeps_visible_cells_in_place() {
        let mut pool = CellPool::new();
        let kept = pool.dequeue(1).id();
        pool.dequeue(7);

        pool.recycle_outside(&(0..3));

        assert_eq!(pool.get(1).map(Cell::id), Some(kept));
        assert!(pool.get(7).is_none());
    }
}
