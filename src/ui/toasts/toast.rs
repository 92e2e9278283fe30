// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, an optional severity icon,
//! and a close affordance per the shared [`Options`].

use super::manager::{Manager, Message};
use super::notification::Notification;
use super::options::{CloseButton, Options, Position};
use crate::icons::Registry;
use crate::ui::icon_text;
use crate::ui::theme::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `progress` is the remaining fraction of display time, or `None` when
    /// the effective timeout is disabled.
    pub fn view<'a>(
        notification: &'a Notification,
        progress: Option<f32>,
        options: &Options,
        registry: &Registry,
        stack_hovered: bool,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let mut cells: Vec<Element<'a, Message>> = Vec::new();

        // Severity icon
        if options.icon {
            let icon_widget = icon_text::icon_sized(registry, severity.icon_name(), sizing::ICON_MD)
                .color(accent_color);
            cells.push(Container::new(icon_widget).padding(spacing::XXS).into());
        }

        // Message text
        let message_widget = text(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });
        let message_alignment = if options.rtl {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        };
        cells.push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(message_alignment)
                .into(),
        );

        // Close affordance
        let notification_id = notification.id();
        let close_visible = options.close_button == CloseButton::Button
            && (!options.show_close_button_on_hover || stack_hovered);
        if close_visible {
            let dismiss_button =
                button(icon_text::icon_sized(registry, "times", sizing::ICON_SM))
                    .on_press(Message::Dismiss(notification_id))
                    .padding(spacing::XXS)
                    .style(dismiss_button_style);
            cells.push(dismiss_button.into());
        }

        if options.rtl {
            cells.reverse();
        }

        let content_row = Row::with_children(cells)
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        let mut column = Column::new().push(content_row);

        // Remaining-time track
        if !options.hide_progress_bar {
            if let Some(remaining) = progress {
                let filled = (remaining.clamp(0.0, 1.0) * 100.0).round() as u16;
                let mut track = Row::new().height(Length::Fixed(sizing::PROGRESS_TRACK));
                if filled > 0 {
                    track = track.push(
                        Container::new(text(""))
                            .width(Length::FillPortion(filled))
                            .height(Length::Fill)
                            .style(move |_theme: &Theme| container::Style {
                                background: Some(iced::Background::Color(accent_color)),
                                border: iced::Border {
                                    radius: radius::SM.into(),
                                    ..Default::default()
                                },
                                ..Default::default()
                            }),
                    );
                }
                if filled < 100 {
                    track = track.push(
                        Container::new(text("")).width(Length::FillPortion(100 - filled)),
                    );
                }
                column = column.push(
                    Container::new(track)
                        .width(Length::Fill)
                        .padding([spacing::XXS, 0.0]),
                );
            }
        }

        let card = Container::new(column)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color));

        mouse_area(card)
            .on_press(Message::Clicked(notification_id))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Toasts stack vertically in the corner or edge named by
    /// `options.position`; hover over the stack is reported so the manager
    /// can pause auto-dismiss when configured to.
    pub fn view_overlay<'a>(manager: &'a Manager, registry: &Registry) -> Element<'a, Message> {
        let options = manager.options();
        let stack_hovered = manager.is_hovered();

        let toasts: Vec<Element<'a, Message>> = manager
            .visible_with_progress()
            .map(|(notification, progress)| {
                Self::view(notification, progress, options, registry, stack_hovered)
            })
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (align_x, align_y) = anchor(options.position);

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(align_x);

        let stack = mouse_area(toast_column)
            .on_enter(Message::HoverChanged(true))
            .on_exit(Message::HoverChanged(false));

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }
}

/// Maps a toast position onto container alignment.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
