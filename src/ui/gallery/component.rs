// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.

use super::controller::{GridController, NavigationIntent, PreviewConfiguration};
use super::gesture::PressTracker;
use super::preview::PreviewSurface;
use super::view;
use crate::app::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::demo::{ContextMenuDemo, DemoConfig};
use crate::ui::design_tokens::sizing;
use crate::ui::menu::ActionId;
use iced::{Element, Point, Size, Subscription};
use std::time::{Duration, Instant};

/// Poll interval while a press is being held.
const PRESS_TICK: Duration = Duration::from_millis(16);

/// Extra rows of cells kept ready above and below the viewport.
const OVERSCAN_ROWS: usize = 1;

/// Messages emitted by gallery widgets and routed window events.
#[derive(Debug, Clone)]
pub enum Message {
    CellPressed(usize),
    /// Right click: opens the preview without waiting for the hold.
    CellSecondaryPressed(usize),
    PointerMoved(Point),
    PointerReleased,
    Tick(Instant),
    Scrolled {
        offset_y: f32,
        bounds: Size,
    },
    Resized(Size),
    CommitPreview,
    DismissPreview,
    ActionChosen(ActionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(NavigationIntent),
}

/// Visible part of the grid, in grid content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub offset_y: f32,
}

impl Default for Viewport {
    #[allow(clippy::cast_precision_loss)]
    fn default() -> Self {
        Self {
            width: WINDOW_DEFAULT_WIDTH as f32,
            height: WINDOW_DEFAULT_HEIGHT as f32 - sizing::HEADER_HEIGHT,
            offset_y: 0.0,
        }
    }
}

/// A preview currently on screen.
#[derive(Debug, Clone)]
pub struct ActivePreview {
    pub configuration: PreviewConfiguration,
    pub surface: PreviewSurface,
}

/// Complete gallery component state.
#[derive(Debug)]
pub struct State {
    controller: GridController,
    press: PressTracker,
    active: Option<ActivePreview>,
    viewport: Viewport,
    cursor: Point,
    notice: Option<&'static str>,
}

impl ContextMenuDemo for State {
    fn title() -> &'static str {
        "Preview (Collection View)"
    }

    fn new(config: DemoConfig) -> Self {
        let mut state = Self {
            controller: GridController::new(&config),
            press: PressTracker::new(config.gesture),
            active: None,
            viewport: Viewport::default(),
            cursor: Point::ORIGIN,
            notice: None,
        };
        state.refresh_cells();
        state
    }
}

impl State {
    #[must_use]
    pub fn controller(&self) -> &GridController {
        &self.controller
    }

    #[must_use]
    pub fn active_preview(&self) -> Option<&ActivePreview> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// i18n key of the message shown after a preview failed to open.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    #[must_use]
    pub fn is_pressing(&self) -> bool {
        self.press.is_pending()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CellPressed(position) => {
                if self.active.is_none() {
                    self.press.press(position, self.cursor, Instant::now());
                }
                Event::None
            }
            Message::CellSecondaryPressed(position) => {
                self.press.cancel();
                self.open_preview(position, self.cursor);
                Event::None
            }
            Message::PointerMoved(point) => {
                self.cursor = point;
                if self.press.moved(point) {
                    tracing::trace!("press abandoned, pointer moved away");
                }
                Event::None
            }
            Message::PointerReleased => {
                if let Some(position) = self.press.release() {
                    tracing::debug!(position, "tap on cell");
                }
                Event::None
            }
            Message::Tick(now) => {
                if let Some((position, point)) = self.press.tick(now) {
                    self.open_preview(position, point);
                }
                Event::None
            }
            Message::Scrolled { offset_y, bounds } => {
                self.press.cancel();
                self.viewport = Viewport {
                    width: bounds.width,
                    height: bounds.height,
                    offset_y,
                };
                self.clamp_offset();
                self.refresh_cells();
                Event::None
            }
            Message::Resized(window) => {
                self.viewport.width = window.width;
                self.viewport.height = (window.height - sizing::HEADER_HEIGHT).max(0.0);
                self.clamp_offset();
                self.refresh_cells();
                Event::None
            }
            Message::CommitPreview => self.commit_preview(),
            Message::DismissPreview => {
                self.dismiss_preview();
                Event::None
            }
            Message::ActionChosen(action) => {
                if let Some(active) = &self.active {
                    tracing::info!(
                        ?action,
                        item = active.surface.name(),
                        "preview menu action chosen"
                    );
                }
                self.dismiss_preview();
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::gallery(view::ViewContext {
            i18n,
            controller: &self.controller,
            viewport: self.viewport,
            active: self.active.as_ref(),
            notice: self.notice,
        })
    }

    /// Drives the hold timer while a press is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.press.is_pending() {
            iced::time::every(PRESS_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Keeps the offset inside the content, which can shrink under it on resize.
    fn clamp_offset(&mut self) {
        self.viewport.offset_y = self.controller.layout().clamp_offset(
            self.viewport.offset_y,
            self.controller.item_count(),
            self.viewport.width,
            self.viewport.height,
        );
    }

    fn refresh_cells(&mut self) {
        let layout = self.controller.layout();
        let count = self.controller.item_count();
        let visible = layout.visible_range(
            self.viewport.offset_y,
            self.viewport.height,
            self.viewport.width,
            count,
        );
        self.controller
            .prepare_cells(layout.overscan(visible, OVERSCAN_ROWS, count));
    }

    fn open_preview(&mut self, position: usize, point: Point) {
        self.dismiss_preview();

        let Some(configuration) = self.controller.begin_preview(position, point) else {
            return;
        };

        match self.controller.make_preview(configuration.handle) {
            Ok(surface) => {
                self.active = Some(ActivePreview {
                    configuration,
                    surface,
                });
            }
            Err(err) => {
                tracing::warn!(position, error = %err, "preview could not be built");
                self.controller.dismiss_preview(configuration.handle);
                self.notice = Some(match &err {
                    Error::Asset(asset) => asset.i18n_key(),
                    _ => "error-preview-unavailable",
                });
            }
        }
    }

    fn commit_preview(&mut self) -> Event {
        let Some(active) = self.active.take() else {
            return Event::None;
        };
        match self.controller.commit_preview(active.configuration.handle) {
            Some(intent) => Event::Navigate(intent),
            None => Event::None,
        }
    }

    fn dismiss_preview(&mut self) {
        self.notice = None;
        if let Some(active) = self.active.take() {
            self.controller.dismiss_preview(active.configuration.handle);
        }
    }
}
