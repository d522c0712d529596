use crate::components::{card, danger_text, muted_text};
use crate::message::Message;
use iced::widget::{button, column, progress_bar, row, text, Column};
use iced::{Alignment, Element, Length};

pub const PROCESSING_STEPS: [&str; 4] = [
    "Analyzing DICOM structure",
    "Identifying anatomical regions",
    "Applying segmentation models",
    "Calculating volumetric data",
];

pub fn segmentation_panel(running: bool, can_run: bool) -> Element<'static, Message> {
    let body: Element<'static, Message> = if running {
        let steps = PROCESSING_STEPS
            .iter()
            .fold(Column::<Message>::new().spacing(2), |column, step| {
                column.push(muted_text(format!("• {step}")))
            });

        column![
            column![
                text("Running AI Segmentation").size(16),
                muted_text("Processing medical imaging data..."),
            ]
            .spacing(4)
            .align_x(Alignment::Center)
            .width(Length::Fill),
            row![muted_text("Progress"), muted_text("Processing...")].spacing(12),
            progress_bar(0.0..=100.0, 65.0).height(Length::Fixed(8.0)),
            steps,
        ]
        .spacing(12)
        .into()
    } else {
        let mut content = column![
            muted_text("Ready to run AI-powered segmentation on imported DICOM data"),
            button(text("Run Segmentation").width(Length::Fill).center())
                .width(Length::Fill)
                .padding(10)
                .on_press_maybe(can_run.then_some(Message::RunSegmentation)),
        ]
        .spacing(12);

        if !can_run {
            content = content.push(danger_text(
                "Complete patient information and DICOM import before running segmentation.",
            ));
        }

        content
            .push(
                button(text("Export Results (Coming Soon)").width(Length::Fill).center())
                    .width(Length::Fill)
                    .style(iced::widget::button::secondary),
            )
            .into()
    };

    card("AI Segmentation", None, body).into()
}
