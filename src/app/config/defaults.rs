// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gesture**: Long-press threshold and movement tolerance

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default hold duration before a press opens the preview.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Minimum allowed hold duration.
pub const MIN_LONG_PRESS_MS: u64 = 150;

/// Maximum allowed hold duration.
pub const MAX_LONG_PRESS_MS: u64 = 2000;

/// Default pointer travel, in logical pixels, tolerated during a press.
pub const DEFAULT_MOVEMENT_TOLERANCE: f32 = 10.0;

/// Minimum allowed movement tolerance.
pub const MIN_MOVEMENT_TOLERANCE: f32 = 1.0;

/// Maximum allowed movement tolerance.
pub const MAX_MOVEMENT_TOLERANCE: f32 = 64.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LONG_PRESS_MS <= DEFAULT_LONG_PRESS_MS);
    assert!(DEFAULT_LONG_PRESS_MS <= MAX_LONG_PRESS_MS);
    assert!(MIN_MOVEMENT_TOLERANCE <= DEFAULT_MOVEMENT_TOLERANCE);
    assert!(DEFAULT_MOVEMENT_TOLERANCE <= MAX_MOVEMENT_TOLERANCE);
};
