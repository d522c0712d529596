use crate::message::Message;
use crate::model::{PatientField, Sex};
use iced::widget::text::Wrapping;
use iced::widget::{button, container, text, Container, Row};
use iced::{Alignment, Background, Color, Element, Length, Shadow, Theme};

/// Three-way Male / Female / Other picker for the patient form.
pub fn sex_toggle(current: Option<Sex>, invalid: bool) -> Container<'static, Message> {
    let last = Sex::ALL.len() - 1;
    let options = Sex::ALL.into_iter().enumerate().map(|(index, sex)| {
        let position = match index {
            0 => SegmentPosition::Left,
            i if i == last => SegmentPosition::Right,
            _ => SegmentPosition::Middle,
        };
        Element::from(segmented_toggle_option(sex, current, position).width(Length::FillPortion(1)))
    });

    container(Row::with_children(options).spacing(0))
        .padding(3)
        .width(Length::Fill)
        .style(move |theme| segmented_container_style(theme, invalid))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Left,
    Middle,
    Right,
}

fn segmented_toggle_option(
    sex: Sex,
    current: Option<Sex>,
    position: SegmentPosition,
) -> iced::widget::Button<'static, Message> {
    let is_active = current == Some(sex);
    let content = container(text(sex.label()).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(30.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 12]);

    button(content)
        .padding(0)
        .on_press(Message::PatientFieldChanged(
            PatientField::Sex,
            sex.code().to_string(),
        ))
        .style(move |theme, status| segmented_button_style(theme, status, is_active, position))
}

fn segmented_container_style(theme: &Theme, invalid: bool) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    let border_color = if invalid {
        palette.danger.base.color
    } else {
        palette.background.strong.color.scale_alpha(0.6)
    };

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: iced::border::Border {
            color: border_color,
            width: 1.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segmented_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let mut background_color = if is_active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color.scale_alpha(0.4)
    };

    match status {
        iced::widget::button::Status::Hovered => {
            background_color = if is_active {
                palette.primary.base.color
            } else {
                palette.background.base.color.scale_alpha(0.8)
            };
        }
        iced::widget::button::Status::Pressed => {
            background_color = if is_active {
                palette.primary.base.color.scale_alpha(0.9)
            } else {
                palette.background.base.color.scale_alpha(0.9)
            };
        }
        iced::widget::button::Status::Disabled => {
            background_color = background_color.scale_alpha(0.5);
        }
        iced::widget::button::Status::Active => {}
    }

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    let radius = match position {
        SegmentPosition::Left => iced::border::Radius {
            top_left: 999.0,
            top_right: 6.0,
            bottom_right: 6.0,
            bottom_left: 999.0,
        },
        SegmentPosition::Middle => iced::border::Radius::new(6.0),
        SegmentPosition::Right => iced::border::Radius {
            top_left: 6.0,
            top_right: 999.0,
            bottom_right: 999.0,
            bottom_left: 6.0,
        },
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius,
        },
        shadow: Shadow::default(),
    }
}
