use crate::components::{card, muted_text, stat_tile};
use crate::message::Message;
use crate::model::{PatientRecord, StructureResult};
use crate::utils::pluralize;
use crate::views::viewer::color_swatch;
use iced::border::{Border, Radius};
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Background, Element, Length, Theme};

pub fn results_panel<'a>(
    results: &'a [StructureResult],
    patient: Option<&'a PatientRecord>,
    running: bool,
) -> Element<'a, Message> {
    if running {
        return card(
            "Processing Results",
            None,
            muted_text("Calculating segmentation metrics...").width(Length::Fill).center(),
        )
        .into();
    }

    if results.is_empty() {
        return card(
            "Processing Results",
            None,
            muted_text("No segmentation results yet. Run segmentation to view results.")
                .width(Length::Fill)
                .center(),
        )
        .into();
    }

    let mut body = Column::new().spacing(16);

    if let Some(patient) = patient {
        body = body.push(patient_summary(patient));
    }

    body = body
        .push(structure_table(results))
        .push(
            row![
                stat_tile(results.len().to_string(), "Structures"),
                stat_tile("100%".to_string(), "Confidence"),
            ]
            .spacing(12),
        )
        .push(
            column![
                button(text("Export DICOM RT").width(Length::Fill).center())
                    .width(Length::Fill)
                    .style(button::secondary),
                button(text("Generate Report").width(Length::Fill).center())
                    .width(Length::Fill)
                    .style(button::secondary),
            ]
            .spacing(8),
        );

    let label = title_case(&pluralize(results.len(), "structure"));
    let badge: Element<'_, Message> = text(label).size(13).into();
    card("Processing Results", Some(badge), body).into()
}

fn patient_summary(patient: &PatientRecord) -> Element<'_, Message> {
    let field = |label: &'static str, value: String| {
        row![muted_text(label), text(value).size(13)].spacing(6)
    };

    column![
        text(&patient.name).size(16),
        row![
            field("ID:", patient.identifier.clone()).width(Length::FillPortion(1)),
            field("Age:", patient.age.to_string()).width(Length::FillPortion(1)),
            field("Sex:", patient.sex.label().to_string()).width(Length::FillPortion(1)),
        ]
        .spacing(8),
    ]
    .spacing(6)
    .into()
}

fn structure_table(results: &[StructureResult]) -> Column<'_, Message> {
    let header = row![
        text("Structure").width(Length::FillPortion(3)),
        text("Volume").width(Length::FillPortion(2)),
        Space::with_width(Length::FillPortion(1)),
    ]
    .spacing(12);

    results
        .iter()
        .fold(column![header].spacing(8), |table, structure| {
            let tag: Element<'_, Message> = if structure.region_of_interest {
                roi_badge()
            } else {
                Space::with_width(Length::Shrink).into()
            };

            table.push(
                row![
                    row![color_swatch(structure.color), text(&structure.name)]
                        .spacing(8)
                        .align_y(Alignment::Center)
                        .width(Length::FillPortion(3)),
                    text(&structure.volume).width(Length::FillPortion(2)),
                    container(tag).width(Length::FillPortion(1)),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
        })
}

fn roi_badge() -> Element<'static, Message> {
    container(text("ROI").size(11))
        .padding([2, 8])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(Background::Color(palette.danger.base.color)),
                text_color: Some(palette.danger.base.text),
                border: Border {
                    radius: Radius::new(999.0),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn badge_label_is_title_cased() {
        assert_eq!(title_case("5 structures"), "5 Structures");
        assert_eq!(title_case("1 structure"), "1 Structure");
    }
}
