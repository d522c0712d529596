use crate::components::muted_text;
use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Background, Element, Theme};

pub fn header() -> Element<'static, Message> {
    let title = column![
        text("RadOnc Segmentation Demo").size(26),
        muted_text("AI-Powered Radiation Oncology Segmentation Workflow"),
    ]
    .spacing(4);

    let badge = container(text("Demo Mode").size(13))
        .padding([4, 10])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(Background::Color(palette.primary.weak.color)),
                text_color: Some(palette.primary.weak.text),
                border: Border {
                    radius: Radius::new(999.0),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    row![title, horizontal_space(), badge]
        .align_y(Alignment::Center)
        .into()
}
