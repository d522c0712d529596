use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::{column, container, horizontal_space, row, text, Container};
use iced::{Alignment, Background, Element, Length, Theme};

/// Titled panel with an optional status element pinned to the right of the
/// header, e.g. a "Complete" marker.
pub fn card<'a>(
    title: &'a str,
    status: Option<Element<'a, Message>>,
    body: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    let mut header = row![text(title).size(18)].align_y(Alignment::Center);
    if let Some(status) = status {
        header = header.push(horizontal_space()).push(status);
    }

    let body: Element<'a, Message> = body.into();
    container(column![header, body].spacing(14))
        .padding(16)
        .width(Length::Fill)
        .style(card_style)
}

pub fn success_marker<'a>(label: &'a str) -> Element<'a, Message> {
    text(format!("✔ {label}"))
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().success),
        })
        .into()
}

pub fn danger_text<'a>(message: &'a str) -> Element<'a, Message> {
    text(message)
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().danger),
        })
        .into()
}

pub fn muted_text<'a>(message: impl Into<String>) -> iced::widget::Text<'a> {
    text(message.into())
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        })
}

/// Boxed statistic: a large value above a small caption.
pub fn stat_tile<'a>(value: String, caption: &'a str) -> Element<'a, Message> {
    container(
        column![text(value).size(24), muted_text(caption)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .padding(10)
    .width(Length::FillPortion(1))
    .align_x(Alignment::Center)
    .style(tile_style)
    .into()
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: Radius::new(10.0),
        },
        ..Default::default()
    }
}

fn tile_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: Radius::new(8.0),
        },
        ..Default::default()
    }
}
