// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native pointer, keyboard, and window events are routed to the app, which
//! forwards them to the screen on top of the navigation stack.

use super::Message;
use iced::{event, keyboard, mouse, window, Subscription};

/// Window-wide events every screen may care about.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        // Released even when a widget captured it, so a hold never outlives the button.
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
