use crate::components::muted_text;
use crate::message::Message;
use crate::views::segmentation_panel::PROCESSING_STEPS;
use iced::border::{Border, Radius};
use iced::widget::{
    center, column, container, horizontal_space, opaque, progress_bar, row, stack, text, Column,
};
use iced::{Alignment, Background, Color, Element, Length, Theme};

const MODAL_WIDTH: f32 = 440.0;
const OVERLAY_PROGRESS: f32 = 65.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    InProgress,
    Pending,
}

impl StepStatus {
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Complete => "Complete",
            StepStatus::InProgress => "In progress",
            StepStatus::Pending => "Pending",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            StepStatus::Complete => "✔",
            StepStatus::InProgress => "◌",
            StepStatus::Pending => "○",
        }
    }
}

/// The processing steps with the fixed status the overlay shows for each.
pub fn step_statuses() -> [(&'static str, StepStatus); 4] {
    let [analyze, identify, apply, calculate] = PROCESSING_STEPS;
    [
        (analyze, StepStatus::Complete),
        (identify, StepStatus::Complete),
        (apply, StepStatus::InProgress),
        (calculate, StepStatus::Pending),
    ]
}

/// Places a blocking "Running AI Segmentation" dialog over `base`.
pub fn loading_overlay<'a>(base: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let steps = step_statuses()
        .into_iter()
        .fold(Column::new().spacing(6), |column, (step, status)| {
            column.push(
                row![
                    text(status.marker()).size(13).style(move |theme: &Theme| {
                        text::Style {
                            color: Some(status_color(theme, status)),
                        }
                    }),
                    text(step).size(13),
                    horizontal_space(),
                    muted_text(status.label()),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            )
        });

    let dialog = container(
        column![
            text("Running AI Segmentation").size(20),
            muted_text("Processing medical imaging data with advanced AI models..."),
            progress_bar(0.0..=100.0, OVERLAY_PROGRESS).height(Length::Fixed(8.0)),
            steps,
        ]
        .spacing(14)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fixed(MODAL_WIDTH))
    .style(dialog_style);

    let base: Element<'a, Message> = base.into();
    stack![
        base,
        opaque(center(opaque(dialog)).style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.7,
                ..Color::BLACK
            })),
            ..Default::default()
        })),
    ]
    .into()
}

fn status_color(theme: &Theme, status: StepStatus) -> Color {
    let palette = theme.extended_palette();
    match status {
        StepStatus::Complete => palette.success.base.color,
        StepStatus::InProgress => palette.primary.base.color,
        StepStatus::Pending => palette.background.strong.color,
    }
}

fn dialog_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_steps_done_one_running_one_waiting() {
        let steps = step_statuses();
        assert_eq!(
            steps.map(|(_, status)| status),
            [
                StepStatus::Complete,
                StepStatus::Complete,
                StepStatus::InProgress,
                StepStatus::Pending,
            ]
        );
        assert_eq!(steps.map(|(step, _)| step), PROCESSING_STEPS);
        assert_eq!(steps[2].1.label(), "In progress");
    }
}
