// SPDX-License-Identifier: MPL-2.0
//! Press-and-hold recognition for grid cells.
//!
//! A press turns into a long press once it has been held for the hold
//! threshold without the pointer wandering further than the movement
//! tolerance. Releasing earlier is a tap.

use crate::app::config::{DEFAULT_LONG_PRESS_MS, DEFAULT_MOVEMENT_TOLERANCE};
use iced::Point;
use std::time::{Duration, Instant};

/// Tuning of the long-press recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// How long a press must be held before the preview opens.
    pub hold: Duration,
    /// Maximum pointer travel (in logical pixels) before the press is abandoned.
    pub movement_tolerance: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(DEFAULT_LONG_PRESS_MS),
            movement_tolerance: DEFAULT_MOVEMENT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    position: usize,
    origin: Point,
    started_at: Instant,
}

/// Tracks at most one press at a time.
#[derive(Debug, Clone, Default)]
pub struct PressTracker {
    settings: GestureSettings,
    pending: Option<Press>,
}

impl PressTracker {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            pending: None,
        }
    }

    /// Starts tracking a press on the item at `position`.
    pub fn press(&mut self, position: usize, point: Point, at: Instant) {
        self.pending = Some(Press {
            position,
            origin: point,
            started_at: at,
        });
    }

    /// Feeds a pointer move. Returns `true` if the move abandoned the press.
    pub fn moved(&mut self, point: Point) -> bool {
        let Some(press) = self.pending else {
            return false;
        };

        if press.origin.distance(point) > self.settings.movement_tolerance {
            self.pending = None;
            return true;
        }
        false
    }

    /// Fires once when the pending press has been held long enough,
    /// yielding the pressed position and where the press started.
    pub fn tick(&mut self, now: Instant) -> Option<(usize, Point)> {
        let press = self.pending?;
        if now.saturating_duration_since(press.started_at) < self.settings.hold {
            return None;
        }
        self.pending = None;
        Some((press.position, press.origin))
    }

    /// Ends the press. Returns the position if it was released before the
    /// hold threshold, i.e. a plain tap.
    pub fn release(&mut self) -> Option<usize> {
        self.pending.take().map(|press| press.position)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
