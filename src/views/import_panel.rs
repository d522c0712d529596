use crate::components::{card, muted_text, stat_tile, success_marker};
use crate::message::Message;
use crate::model::{ImportStatus, ImportSummary};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

pub fn import_panel(
    import: &ImportStatus,
    importing: bool,
    running: bool,
) -> Element<'_, Message> {
    let trigger_label = if importing {
        "Importing..."
    } else if import.is_imported() {
        "Select Different Folder"
    } else {
        "Choose DICOM Folder"
    };
    let trigger = button(text(trigger_label).width(Length::Fill).center())
        .width(Length::Fill)
        .on_press_maybe((!importing && !running).then_some(Message::ChooseFolder));

    let body: Element<'_, Message> = if import.is_imported() {
        let summary = ImportSummary::DEMO;
        column![
            column![
                text("Selected Folder:").size(14),
                muted_text(import.path()).wrapping(Wrapping::Glyph),
            ]
            .spacing(4),
            row![
                stat_tile(summary.file_count.to_string(), "DICOM Files"),
                stat_tile(summary.total_size(), "Total Size"),
            ]
            .spacing(12),
            trigger.style(iced::widget::button::secondary),
        ]
        .spacing(14)
        .into()
    } else {
        column![muted_text("Select a folder containing DICOM images"), trigger]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
    };

    let status = import.is_imported().then(|| success_marker("Imported"));
    card("DICOM Import", status, body).into()
}
