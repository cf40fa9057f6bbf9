// SPDX-License-Identifier: MPL-2.0
//! Root screen listing the available demos.

use crate::i18n::fluent::I18n;
use crate::ui::demo::DemoKind;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, scrollable, text, Column};
use iced::{Element, Length};

/// Contextual data needed to render the demo list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the demo list.
#[derive(Debug, Clone)]
pub enum Message {
    Open(DemoKind),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(DemoKind),
}

/// Process a demo list message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Open(kind) => Event::Open(*kind),
    }
}

/// Render the demo list.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = text(ctx.i18n.tr("demo-list-heading")).size(typography::TITLE_MD);

    let entries = DemoKind::ALL.iter().fold(
        Column::new().spacing(spacing::XXS).width(Length::Fill),
        |entries, kind| {
            entries.push(
                button(text(kind.title()).size(typography::BODY_LG))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(button::secondary)
                    .on_press(Message::Open(*kind)),
            )
        },
    );

    scrollable(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .width(Length::Fill)
            .push(heading)
            .push(entries),
    )
    .into()
}
