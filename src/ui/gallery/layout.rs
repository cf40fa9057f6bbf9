// SPDX-License-Identifier: MPL-2.0
//! Grid geometry for the gallery.
//!
//! Every item is a third of the available width wide and the rows are a
//! third of the width tall, with a one-unit gap between items and rows.
//! The functions here are pure; the gallery keeps a single [`GridLayout`]
//! for its whole lifetime.

use iced::Size;
use std::ops::Range;

/// Number of columns of the gallery grid.
pub const COLUMNS: usize = 3;

/// Gap between neighbouring items and between rows.
pub const SPACING: f32 = 1.0;

/// Column count and spacing of a uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    columns: usize,
    spacing: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::three_column()
    }
}

impl GridLayout {
    /// The gallery layout: three columns, one-unit gaps.
    #[must_use]
    pub const fn three_column() -> Self {
        Self {
            columns: COLUMNS,
            spacing: SPACING,
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Height of one row: a `1/columns` fraction of the width.
    #[allow(clippy::cast_precision_loss)] // column counts are tiny
    #[must_use]
    pub fn row_height(&self, available_width: f32) -> f32 {
        (available_width / self.columns as f32).max(0.0)
    }

    /// Size of a single item. The width gives up its share of the gaps so a
    /// full row fits exactly in `available_width`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn cell_size(&self, available_width: f32) -> Size {
        let columns = self.columns as f32;
        let gaps = self.spacing * (columns - 1.0);
        let width = ((available_width - gaps) / columns).max(0.0);
        Size::new(width, self.row_height(available_width))
    }

    /// Number of rows needed for `item_count` items.
    #[must_use]
    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }

    /// Total scrollable height of the grid.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn content_height(&self, item_count: usize, available_width: f32) -> f32 {
        let rows = self.row_count(item_count);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.row_height(available_width) + (rows - 1) as f32 * self.spacing
    }

    /// Largest scroll offset that still shows content. Zero when the whole
    /// grid fits in the viewport.
    #[must_use]
    pub fn max_offset(&self, item_count: usize, available_width: f32, viewport_height: f32) -> f32 {
        (self.content_height(item_count, available_width) - viewport_height).max(0.0)
    }

    /// `offset_y` pulled back into `0..=max_offset`.
    #[must_use]
    pub fn clamp_offset(
        &self,
        offset_y: f32,
        item_count: usize,
        available_width: f32,
        viewport_height: f32,
    ) -> f32 {
        offset_y.clamp(
            0.0,
            self.max_offset(item_count, available_width, viewport_height),
        )
    }

    /// Distance from the top of one row to the top of the next.
    #[must_use]
    pub fn row_stride(&self, available_width: f32) -> f32 {
        self.row_height(available_width) + self.spacing
    }

    /// Positions whose rows intersect the viewport `[offset_y, offset_y + height)`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    #[must_use]
    pub fn visible_range(
        &self,
        offset_y: f32,
        viewport_height: f32,
        available_width: f32,
        item_count: usize,
    ) -> Range<usize> {
        let stride = self.row_stride(available_width);
        if item_count == 0 || available_width <= 0.0 || viewport_height <= 0.0 {
            return 0..0;
        }

        let rows = self.row_count(item_count);
        let top = offset_y.max(0.0);
        let first_row = ((top / stride).floor() as usize).min(rows);
        let last_row = (((top + viewport_height) / stride).ceil() as usize).min(rows);

        let start = (first_row * self.columns).min(item_count);
        let end = (last_row * self.columns).min(item_count);
        start..end
    }

    /// Widens a position range by `rows` whole rows on each side.
    #[must_use]
    pub fn overscan(&self, range: Range<usize>, rows: usize, item_count: usize) -> Range<usize> {
        let extra = rows * self.columns;
        let start = range.start.saturating_sub(extra);
        let end = (range.end + extra).min(item_count);
        start..end
    }
}
