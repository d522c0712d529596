use crate::message::Message;
use crate::model::{NotificationKind, Notifications};
use iced::border::{Border, Radius};
use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Background, Element, Length, Theme};

const TOAST_WIDTH: f32 = 360.0;

pub fn notification_stack(notifications: &Notifications) -> Element<'_, Message> {
    notifications
        .iter()
        .fold(Column::new().spacing(8), |stack, notification| {
            let kind = notification.kind;
            let toast = container(
                row![
                    column![
                        text(&notification.title).size(15),
                        text(&notification.description).size(13),
                    ]
                    .spacing(2),
                    horizontal_space(),
                    button(text("×"))
                        .style(button::text)
                        .on_press(Message::DismissNotification(notification.id)),
                ]
                .spacing(8)
                .align_y(Alignment::Start),
            )
            .padding(12)
            .width(Length::Fixed(TOAST_WIDTH))
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                let pair = match kind {
                    NotificationKind::Error => palette.danger.base,
                    NotificationKind::Success => palette.success.base,
                };
                container::Style {
                    background: Some(Background::Color(pair.color)),
                    text_color: Some(pair.text),
                    border: Border {
                        radius: Radius::new(8.0),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            });

            stack.push(toast)
        })
        .into()
}
