use crate::components::card;
use crate::image_pipeline::{SLICE_SIZE, WINDOW_LEVEL, WINDOW_WIDTH};
use crate::message::Message;
use crate::model::{OverlayColor, StructureResult, ViewerState};
use iced::border::{Border, Radius};
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, horizontal_space, row, slider, stack, text, Column, Image, Space,
};
use iced::{Alignment, Background, Color, Element, Length, Theme};

const VIEWPORT_HEIGHT: f32 = 420.0;
const DISPLAY_SCALE: f32 = 1.5;
const LEGEND_TITLE: &str = "Segmentation Legend:";

pub fn viewer_panel<'a>(
    viewer: &ViewerState,
    slice_image: &Handle,
    results: &'a [StructureResult],
) -> Element<'a, Message> {
    let side = SLICE_SIZE as f32 * DISPLAY_SCALE * viewer.zoom();
    let image = Image::new(slice_image.clone())
        .width(Length::Fixed(side))
        .height(Length::Fixed(side));

    let info = column![
        text("PATIENT: DEMO_001").size(12),
        text("STUDY: CT CHEST").size(12),
        text(format!("SLICE: {}", viewer.current_slice())).size(12),
    ]
    .spacing(2);

    let scale = text(format!(
        "{:.1}x | W:{WINDOW_WIDTH} L:{WINDOW_LEVEL}",
        viewer.zoom()
    ))
    .size(12);

    let mut layers = stack![
        container(image)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .clip(true),
        container(info).padding(10),
        container(scale)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10)
            .align_x(Alignment::End)
            .align_y(Alignment::End),
    ];

    if results.is_empty() {
        layers = layers.push(
            container(
                container(text("Run segmentation to view overlays").size(14))
                    .padding([6, 12])
                    .style(|_theme: &Theme| container::Style {
                        background: Some(Background::Color(Color::from_rgba8(0, 0, 0, 0.6))),
                        text_color: Some(Color::WHITE),
                        border: Border {
                            radius: Radius::new(6.0),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            )
            .center(Length::Fill),
        );
    }

    let viewport = container(layers)
        .width(Length::Fill)
        .height(Length::Fixed(VIEWPORT_HEIGHT))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::BLACK)),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: Radius::new(8.0),
                ..Default::default()
            },
            ..Default::default()
        });

    let navigation = row![
        button(text("◀")).on_press_maybe(viewer.has_previous().then_some(Message::PreviousSlice)),
        slider(
            1..=viewer.total_slices(),
            viewer.current_slice(),
            Message::SliceChanged
        )
        .width(Length::Fill),
        button(text("▶")).on_press_maybe(viewer.has_next().then_some(Message::NextSlice)),
        button(text("−")).on_press(Message::ZoomOut),
        button(text("+")).on_press(Message::ZoomIn),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut body = column![viewport, navigation].spacing(12);
    if !results.is_empty() {
        body = body.push(legend(results));
    }

    let badge: Element<'_, Message> = text(format!(
        "Slice {} / {}",
        viewer.current_slice(),
        viewer.total_slices()
    ))
    .size(13)
    .into();

    card("Image Viewer", Some(badge), body).into()
}

/// Legend rows in fixture order: colour, name, and volume pushed to the right.
fn legend(results: &[StructureResult]) -> Column<'_, Message> {
    legend_entries(results).fold(
        column![text(LEGEND_TITLE).size(14)].spacing(6),
        |column, (color, name, volume)| {
            column.push(
                row![
                    color_swatch(color),
                    text(name).size(13),
                    horizontal_space(),
                    text(volume).size(13),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            )
        },
    )
}

fn legend_entries(
    results: &[StructureResult],
) -> impl Iterator<Item = (OverlayColor, &str, &str)> + '_ {
    results.iter().map(|structure| {
        (
            structure.color,
            structure.name.as_str(),
            structure.volume.as_str(),
        )
    })
}

pub fn color_swatch(color: OverlayColor) -> Element<'static, Message> {
    let [r, g, b] = color.rgb();
    container(Space::new(Length::Fixed(12.0), Length::Fixed(12.0)))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb8(r, g, b))),
            border: Border {
                radius: Radius::new(3.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_structures;

    #[test]
    fn legend_lists_every_structure_with_its_volume() {
        let structures = demo_structures();
        let entries: Vec<_> = legend_entries(&structures)
            .map(|(_, name, volume)| (name, volume))
            .collect();

        assert_eq!(LEGEND_TITLE, "Segmentation Legend:");
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[2].1, "1,203.5 cc");
        assert!(entries
            .iter()
            .zip(&structures)
            .all(|(entry, structure)| entry.0 == structure.name));
    }
}
