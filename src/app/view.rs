// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The map pane is a placeholder that surfaces what the shared client
//! resolves for the current viewport; tile rendering itself is out of
//! scope. Toasts are stacked over the whole window.

use super::Message;
use crate::icons::{Registry, StyleDefaults};
use crate::map::{self, MapClient, Viewport};
use crate::ui::icon_text;
use crate::ui::theme::{sizing, spacing, typography};
use crate::ui::toasts::{Manager, Toast};
use iced::widget::{button, space, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub icons: &'a Registry,
    pub icon_defaults: &'a StyleDefaults,
    pub toasts: &'a Manager,
    pub map_client: &'a MapClient,
    pub viewport: Viewport,
}

/// Renders the application view with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Column::new()
        .push(header(ctx.icons, ctx.icon_defaults))
        .push(map_pane(ctx.icons, ctx.map_client, ctx.viewport))
        .push(footer(ctx.map_client));

    let overlay = Toast::view_overlay(ctx.toasts, ctx.icons).map(Message::Toast);

    Stack::new()
        .push(
            Container::new(base)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .into()
}

/// Title bar with the brand icon and viewport controls.
fn header<'a>(icons: &Registry, defaults: &StyleDefaults) -> Element<'a, Message> {
    // The brand mark follows the shared style defaults rather than the
    // glyph's registered variant.
    let brand = icon_text::icon_with(
        icons,
        "location-dot",
        defaults.family,
        defaults.style,
    )
    .size(sizing::ICON_MD);

    let title = text("Iced Atlas").size(typography::TITLE_MD);

    let recenter = button(icon_text::icon_sized(icons, "house", sizing::ICON_SM))
        .on_press(Message::Recenter)
        .padding(spacing::XXS);
    let zoom_in = button(text("+").size(typography::BODY))
        .on_press(Message::ZoomIn)
        .padding(spacing::XXS);
    let zoom_out = button(text("\u{2212}").size(typography::BODY))
        .on_press(Message::ZoomOut)
        .padding(spacing::XXS);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(title)
        .push(space::horizontal())
        .push(zoom_out)
        .push(zoom_in)
        .push(recenter);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}

/// Placeholder pane showing what the client resolves for the viewport.
fn map_pane<'a>(icons: &Registry, client: &MapClient, viewport: Viewport) -> Element<'a, Message> {
    let (zoom, x, y) = map::center_tile(viewport);

    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icon_text::icon_sized(icons, "image", sizing::ICON_LG))
        .push(text(client.style().to_string()).size(typography::BODY))
        .push(
            text(format!(
                "{:.4}, {:.4} @ z{:.0}",
                viewport.lat, viewport.lon, viewport.zoom
            ))
            .size(typography::BODY),
        )
        .push(text(format!("center tile {zoom}/{x}/{y}")).size(typography::CAPTION))
        .push(text(client.tile_url(zoom, x, y)).size(typography::CAPTION));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Attribution line the tile provider requires.
fn footer<'a>(client: &MapClient) -> Element<'a, Message> {
    Container::new(text(client.attribution()).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::XXS)
        .align_x(alignment::Horizontal::Right)
        .into()
}
