// SPDX-License-Identifier: MPL-2.0
//! Image grid with press-and-hold previews.
//!
//! Holding a cell (or right-clicking it) opens a preview of the item sized
//! to the image's aspect ratio, with the demo menu underneath. Clicking the
//! preview commits it and opens the item's [`DetailSurface`]; clicking
//! anywhere else or pressing `Escape` dismisses it.

pub mod cell;
pub mod component;
pub mod controller;
pub mod detail;
pub mod gesture;
pub mod layout;
pub mod preview;
mod view;

pub use component::{Event, Message, State};
pub use controller::{GridController, NavigationIntent, PreviewConfiguration, SessionId};
pub use detail::DetailSurface;
pub use gesture::{GestureSettings, PressTracker};
pub use layout::GridLayout;
pub use preview::PreviewSurface;
