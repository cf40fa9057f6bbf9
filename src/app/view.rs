// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen is drawn under a header bar carrying the back button and
//! the title of the screen on top of the navigation stack.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::demo_list::{self, ViewContext as DemoListViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::navigation::{NavigationStack, Screen};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, center, container, text, Column, Row, Space};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: &'a NavigationStack<Screen>,
    pub gallery: Option<&'a gallery::State>,
    pub theme_mode: ThemeMode,
    pub title: String,
}

/// Renders the screen on top of the navigation stack.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.navigation.top() {
        Screen::DemoList => {
            demo_list::view(DemoListViewContext { i18n: ctx.i18n }).map(Message::DemoList)
        }
        Screen::Demo(_) => match ctx.gallery {
            Some(state) => state.view(ctx.i18n).map(Message::Gallery),
            None => center(text(ctx.i18n.tr("error-preview-unavailable"))).into(),
        },
        Screen::Detail(detail) => detail.view(),
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(&ctx))
        .push(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back: Element<'a, Message> = if ctx.navigation.can_go_back() {
        button(text(ctx.i18n.tr("back-button")).size(typography::BODY))
            .style(button::text)
            .on_press(Message::NavigateBack)
            .into()
    } else {
        Space::new().width(Length::Fixed(spacing::XS)).into()
    };

    let title = text(ctx.title.clone()).size(typography::TITLE_MD);

    let background = ctx.theme_mode.header_background();

    container(
        Row::new()
            .spacing(spacing::SM)
            .padding([0.0, spacing::XS])
            .align_y(alignment::Vertical::Center)
            .height(Length::Fill)
            .push(back)
            .push(title),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT))
    .style(move |_theme| container::Style {
        background: Some(background.into()),
        ..container::Style::default()
    })
    .into()
}
