// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the top-level messages.

use super::Message;
use crate::ui::demo::{ContextMenuDemo, DemoConfig, DemoKind};
use crate::ui::demo_list;
use crate::ui::gallery::{self, NavigationIntent};
use crate::ui::navigation::{NavigationStack, Screen};
use iced::{Point, Size, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub navigation: &'a mut NavigationStack<Screen>,
    pub gallery: &'a mut Option<gallery::State>,
    pub demo_config: &'a DemoConfig,
    pub window_size: &'a Option<Size>,
}

impl UpdateContext<'_> {
    /// The gallery, but only while its screen is the one shown.
    fn visible_gallery(&mut self) -> Option<&mut gallery::State> {
        if matches!(self.navigation.top(), Screen::Demo(DemoKind::CollectionPreview)) {
            self.gallery.as_mut()
        } else {
            None
        }
    }
}

/// Handles demo list messages.
pub fn handle_demo_list_message(
    ctx: &mut UpdateContext<'_>,
    message: &demo_list::Message,
) -> Task<Message> {
    match demo_list::update(message) {
        demo_list::Event::Open(kind) => open_demo(ctx, kind),
    }
}

fn open_demo(ctx: &mut UpdateContext<'_>, kind: DemoKind) -> Task<Message> {
    match kind {
        DemoKind::CollectionPreview => {
            let mut state = <gallery::State as ContextMenuDemo>::new(ctx.demo_config.clone());
            if let Some(size) = *ctx.window_size {
                state.update(gallery::Message::Resized(size));
            }
            *ctx.gallery = Some(state);
        }
    }
    tracing::info!(demo = kind.title(), "opening demo");
    ctx.navigation.push(Screen::Demo(kind));
    Task::none()
}

/// Handles gallery messages, applying any navigation it requests.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let Some(state) = ctx.visible_gallery() else {
        return Task::none();
    };
    match state.update(message) {
        gallery::Event::None => {}
        gallery::Event::Navigate(NavigationIntent::ShowDetail(detail)) => {
            tracing::info!(item = detail.name(), "showing detail screen");
            ctx.navigation.push(Screen::Detail(detail));
        }
    }
    Task::none()
}

/// Pops the top screen. Leaving a demo releases its state.
pub fn handle_navigate_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.navigation.pop().is_some() && *ctx.navigation.top() == Screen::DemoList {
        *ctx.gallery = None;
    }
    Task::none()
}

/// Escape closes an open preview first, then walks back one screen.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(state) = ctx.visible_gallery() {
        if state.active_preview().is_some() || state.notice().is_some() {
            state.update(gallery::Message::DismissPreview);
            return Task::none();
        }
    }
    handle_navigate_back(ctx)
}

pub fn handle_pointer_moved(ctx: &mut UpdateContext<'_>, point: Point) -> Task<Message> {
    if let Some(state) = ctx.visible_gallery() {
        state.update(gallery::Message::PointerMoved(point));
    }
    Task::none()
}

pub fn handle_pointer_released(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(state) = ctx.visible_gallery() {
        state.update(gallery::Message::PointerReleased);
    }
    Task::none()
}

/// Keeps the gallery viewport in step with the window, even while covered.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    if let Some(state) = ctx.gallery.as_mut() {
        state.update(gallery::Message::Resized(size));
    }
    Task::none()
}
