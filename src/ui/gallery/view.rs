// SPDX-License-Identifier: MPL-2.0
//! Rendering of the grid and of the preview overlay.

use super::cell::Cell;
use super::component::{ActivePreview, Message, Viewport};
use super::controller::GridController;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::menu::MenuAction;
use iced::alignment::Horizontal;
use iced::widget::scrollable::Viewport as ScrollViewport;
use iced::widget::{
    button, center, container, mouse_area, responsive, text, Column, Image, Row, Scrollable,
    Space, Stack,
};
use iced::{mouse, Background, Border, Color, ContentFit, Element, Length, Size, Theme};

/// Share of the window the preview image may use.
const PREVIEW_WIDTH_FRACTION: f32 = 0.8;
const PREVIEW_HEIGHT_FRACTION: f32 = 0.55;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a GridController,
    pub viewport: Viewport,
    pub active: Option<&'a ActivePreview>,
    pub notice: Option<&'static str>,
}

/// Grid with the preview overlay and notice layered on top.
pub fn gallery(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(grid(ctx.controller, ctx.viewport));

    if let Some(key) = ctx.notice {
        layers = layers.push(notice(ctx.i18n.tr(key)));
    }

    if let Some(active) = ctx.active {
        layers = layers.push(preview_overlay(active, ctx.i18n));
    }

    layers.into()
}

/// Only the rows in the viewport get widgets; spacers stand in for the rest
/// so the scrollable keeps the full content height.
#[allow(clippy::cast_precision_loss)]
fn grid(controller: &GridController, viewport: Viewport) -> Element<'_, Message> {
    let layout = controller.layout();
    let count = controller.item_count();

    responsive(move |size: Size| {
        let cell_size = layout.cell_size(size.width);
        let stride = layout.row_stride(size.width);
        let rows = layout.row_count(count);
        // The scrollable stops reporting once the content fits, so a stale
        // offset is pulled back here as well.
        let offset_y = layout.clamp_offset(viewport.offset_y, count, size.width, size.height);
        let visible = layout.visible_range(offset_y, size.height, size.width, count);
        let first_row = visible.start / layout.columns();
        let last_row = visible.end.div_ceil(layout.columns());

        let mut column = Column::new().spacing(layout.spacing()).width(Length::Fill);

        if first_row > 0 {
            column = column.push(spacer(first_row as f32 * stride - layout.spacing()));
        }

        for row in first_row..last_row {
            let start = row * layout.columns();
            let end = (start + layout.columns()).min(count);
            let cells = (start..end).fold(Row::new().spacing(layout.spacing()), |cells, position| {
                cells.push(cell(controller.prepared_cell(position), position, cell_size))
            });
            column = column.push(cells);
        }

        if last_row < rows {
            column = column.push(spacer((rows - last_row) as f32 * stride - layout.spacing()));
        }

        Scrollable::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: ScrollViewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                bounds: viewport.bounds().size(),
            })
            .into()
    })
    .into()
}

fn spacer<'a>(height: f32) -> Element<'a, Message> {
    Space::new()
        .width(Length::Fill)
        .height(Length::Fixed(height.max(0.0)))
        .into()
}

/// One cell: its image cropped to fill, or an empty tile.
fn cell(prepared: Option<&Cell>, position: usize, size: Size) -> Element<'_, Message> {
    let width = Length::Fixed(size.width);
    let height = Length::Fixed(size.height);

    let content: Element<'_, Message> = match prepared.and_then(Cell::image) {
        Some(handle) => Image::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new().width(width).height(height))
            .style(|theme: &Theme| container::Style {
                background: Some(Background::Color(
                    theme.extended_palette().background.weak.color,
                )),
                ..Default::default()
            })
            .into(),
    };

    mouse_area(content)
        .on_press(Message::CellPressed(position))
        .on_right_press(Message::CellSecondaryPressed(position))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Dimmed backdrop with the preview and its menu. Clicking the preview
/// commits, clicking the backdrop dismisses.
fn preview_overlay<'a>(active: &'a ActivePreview, i18n: &'a I18n) -> Element<'a, Message> {
    responsive(move |size: Size| {
        let available = Size::new(
            size.width * PREVIEW_WIDTH_FRACTION,
            size.height * PREVIEW_HEIGHT_FRACTION,
        );
        let preferred = active.surface.preferred_size(available);

        let image = Image::new(active.surface.handle().clone())
            .width(Length::Fixed(preferred.width))
            .height(Length::Fixed(preferred.height))
            .content_fit(ContentFit::Cover);

        let preview = mouse_area(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(text(active.surface.title()).size(typography::TITLE_MD).color(palette::WHITE))
                .push(image),
        )
        .on_press(Message::CommitPreview)
        .interaction(mouse::Interaction::Pointer);

        let menu = active
            .configuration
            .actions
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |menu, action| {
                menu.push(menu_entry(action, i18n))
            });

        let menu = container(menu)
            .width(Length::Fixed(sizing::MENU_WIDTH))
            .padding(spacing::XXS)
            .style(|theme: &Theme| container::Style {
                background: Some(Background::Color(
                    theme.extended_palette().background.base.color,
                )),
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let card = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(preview)
            .push(menu);

        mouse_area(center(card).style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            })),
            ..Default::default()
        }))
        .on_press(Message::DismissPreview)
        .into()
    })
    .into()
}

fn menu_entry<'a>(action: &MenuAction, i18n: &I18n) -> Element<'a, Message> {
    let style = if action.destructive {
        button::danger
    } else {
        button::text
    };

    button(text(i18n.tr(action.label_key)).size(typography::BODY))
        .width(Length::Fill)
        .style(style)
        .on_press(Message::ActionChosen(action.id))
        .into()
}

fn notice<'a>(message: String) -> Element<'a, Message> {
    let banner = container(text(message).size(typography::BODY).color(palette::WHITE))
        .padding(spacing::SM)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::ERROR_500)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    container(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Bottom)
        .into()
}
