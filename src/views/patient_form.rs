use crate::components::{card, danger_text, sex_toggle, success_marker};
use crate::message::Message;
use crate::model::{PatientField, PatientFormState};
use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length, Theme};

pub fn patient_form(state: &PatientFormState, saved: bool) -> Element<'_, Message> {
    let name = labeled_input(state, PatientField::Name, "Patient Name", "Enter patient name");
    let identifier = labeled_input(
        state,
        PatientField::Identifier,
        "Patient ID",
        "Enter patient ID",
    );
    let age = labeled_input(state, PatientField::Age, "Age", "Age");

    let mut sex = column![
        text("Sex").size(14),
        sex_toggle(
            state.form.sex.parse().ok(),
            state.errors.contains(PatientField::Sex)
        ),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));
    if let Some(error) = state.errors.get(PatientField::Sex) {
        sex = sex.push(danger_text(error));
    }

    let label = if saved {
        "Update Patient Info"
    } else {
        "Save Patient Info"
    };
    let submit = button(text(label).width(Length::Fill).center())
        .width(Length::Fill)
        .on_press(Message::SavePatient)
        .style(move |theme: &Theme, status| {
            if saved {
                button::secondary(theme, status)
            } else {
                button::primary(theme, status)
            }
        });

    let body = column![
        row![name, identifier].spacing(12),
        row![age, sex].spacing(12),
        submit,
    ]
    .spacing(14);

    let status = saved.then(|| success_marker("Complete"));
    card("Patient Information", status, body).into()
}

fn labeled_input<'a>(
    state: &'a PatientFormState,
    field: PatientField,
    label: &'a str,
    placeholder: &'a str,
) -> Element<'a, Message> {
    let invalid = state.errors.contains(field);
    let input = text_input(placeholder, state.form.value(field))
        .on_input(move |value| Message::PatientFieldChanged(field, value))
        .on_submit(Message::SavePatient)
        .padding(8)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if invalid {
                style.border.color = theme.palette().danger;
            }
            style
        });

    let mut content = column![text(label).size(14), input]
        .spacing(6)
        .width(Length::FillPortion(1));
    if let Some(error) = state.errors.get(field) {
        content = content.push(danger_text(error));
    }
    content.into()
}
