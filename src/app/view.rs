// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Severity};
use crate::config::{MAX_SCALE_PERCENT, MIN_SCALE_PERCENT, PREVIEW_SIZE};
use crate::geometry::PreviewPoint;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::{button, image, mouse_area, slider, text, Column, Container, Row};
use iced::{Color, Element, Length, Theme};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let content = Row::new()
            .spacing(32)
            .push(self.design_panel())
            .push(self.action_panel());

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(24)
            .into()
    }

    /// The interactive preview surface with the scale slider below it.
    fn design_panel(&self) -> Element<'_, Message> {
        let cursor = PreviewPoint::new(self.cursor.x, self.cursor.y);
        let over_logo = self.store.logo().is_some_and(|logo| {
            self.controller
                .placement()
                .preview_logo_rect(logo)
                .contains(cursor)
        });

        let cursor_interaction = if self.controller.is_dragging() {
            mouse::Interaction::Grabbing
        } else if over_logo {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        };

        let surface = mouse_area(
            image(self.preview.handle())
                .width(Length::Fixed(PREVIEW_SIZE))
                .height(Length::Fixed(PREVIEW_SIZE)),
        )
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_move(Message::PointerMoved)
        .on_exit(Message::PointerExited)
        .interaction(cursor_interaction);

        let scale_value = self.controller.placement().scale().value();
        let scale_control = Column::new()
            .spacing(4)
            .push(text(format!("Logo size: {:.0}%", scale_value)).size(14))
            .push(
                slider(
                    MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT,
                    scale_value,
                    Message::ScaleChanged,
                )
                .step(1.0)
                .width(Length::Fixed(PREVIEW_SIZE)),
            );

        Column::new()
            .spacing(12)
            .push(surface)
            .push(scale_control)
            .into()
    }

    /// Upload and export actions plus the status line.
    fn action_panel(&self) -> Element<'_, Message> {
        let export_label = if self.exporter.is_in_flight() {
            "Exporting…"
        } else {
            "Download Final Image"
        };

        let mut actions = Column::new()
            .spacing(12)
            .push(button(text("Choose Logo…")).on_press(Message::PickLogo))
            .push(button(text(export_label)).on_press(Message::ExportRequested));

        if let Some(status) = &self.status {
            let color = match status.severity {
                Severity::Info => Color::from_rgb(0.35, 0.35, 0.35),
                Severity::Success => Color::from_rgb(0.13, 0.55, 0.13),
                Severity::Error => Color::from_rgb(0.8, 0.1, 0.1),
            };
            actions = actions.push(
                text(status.text.as_str())
                    .size(14)
                    .style(move |_theme: &Theme| text::Style { color: Some(color) }),
            );
        }

        actions.into()
    }
}
