// SPDX-License-Identifier: MPL-2.0
//! `peek_gallery` is a demo of press-and-hold previews over an image grid,
//! built with the Iced GUI framework.
//!
//! Holding a cell opens a large preview with an action menu; tapping the
//! preview commits it and pushes a detail screen. The grid recycles its cells
//! as it scrolls.

pub mod app;
pub mod error;
pub mod i18n;
pub mod library;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
