// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`demo_list`] - Root list of the available demos
//! - [`gallery`] - Image grid with press-and-hold previews and its detail screen
//!
//! # Shared Infrastructure
//!
//! - [`demo`] - Contract between the demo list and the demos
//! - [`menu`] - Action list shown under every preview
//! - [`navigation`] - Screen stack
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod demo;
pub mod demo_list;
pub mod design_tokens;
pub mod gallery;
pub mod menu;
pub mod navigation;
pub mod theming;
