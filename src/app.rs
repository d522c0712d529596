use crate::config::AppConfig;
use crate::image_pipeline::SliceImagePipeline;
use crate::message::Message;
use crate::model::{NotificationKind, Notifications, PatientFormState, ViewerState};
use crate::views::{
    header, import_panel, loading_overlay, notification_stack, patient_form, results_panel,
    segmentation_panel, viewer_panel,
};
use crate::workflow::{RunError, SimulatedImport, SimulatedSegmentation, Workflow};
use iced::widget::image::Handle;
use iced::widget::{column, container, row, scrollable};
use iced::{application, Alignment, Element, Length, Size, Task, Theme};

const APP_TITLE: &str = "iSeg";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = AppConfig::load_or_default();
    log::info!("Starting {APP_TITLE} with {config:?}");

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .window_size(Size::new(1440.0, 900.0))
        .run_with(move || (App::new(config), Task::none()))
}

pub struct App {
    config: AppConfig,
    workflow: Workflow,
    patient_form: PatientFormState,
    importing: bool,
    viewer: ViewerState,
    slice_image: Handle,
    notifications: Notifications,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let viewer = ViewerState::new(config.total_slices);
        let slice_image =
            SliceImagePipeline::render(viewer.current_slice(), viewer.total_slices(), &[]);

        Self {
            config,
            workflow: Workflow::default(),
            patient_form: PatientFormState::default(),
            importing: false,
            viewer,
            slice_image,
            notifications: Notifications::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PatientFieldChanged(field, value) => {
                self.patient_form.edit(field, value);
                Task::none()
            }
            Message::SavePatient => {
                match self.workflow.submit_patient(&self.patient_form.form) {
                    Ok(record) => self.patient_form = PatientFormState::saved(record),
                    Err(errors) => {
                        log::debug!(
                            "Patient form rejected: {:?}",
                            errors.fields().collect::<Vec<_>>()
                        );
                        self.patient_form.errors = errors;
                    }
                }
                Task::none()
            }
            Message::ChooseFolder => {
                if self.importing || self.workflow.is_running() {
                    return Task::none();
                }
                self.importing = true;
                let import = SimulatedImport::new(
                    self.config.import_delay(),
                    self.config.mock_import_path.clone(),
                );
                Task::perform(import.choose_folder(), Message::FolderSelected)
            }
            Message::FolderSelected(path) => {
                self.importing = false;
                let _ = self.workflow.set_import(path);
                Task::none()
            }
            Message::RunSegmentation => match self.workflow.start_run() {
                Ok(()) => {
                    self.refresh_slice_image();
                    let segmentation = SimulatedSegmentation::demo(self.config.run_delay());
                    Task::perform(segmentation.run(), Message::SegmentationFinished)
                }
                Err(rejected) => Task::batch(
                    rejected
                        .errors()
                        .iter()
                        .filter(|error| **error != RunError::RunInProgress)
                        .map(|error| {
                            self.notify(NotificationKind::Error, error.title(), error.to_string())
                        })
                        .collect::<Vec<_>>(),
                ),
            },
            Message::SegmentationFinished(structures) => {
                if !self.workflow.complete_run(structures) {
                    return Task::none();
                }
                self.refresh_slice_image();
                let count = self.workflow.results().len();
                self.notify(
                    NotificationKind::Success,
                    "Segmentation Complete",
                    format!("Successfully segmented {count} structures."),
                )
            }
            Message::PreviousSlice => {
                if self.viewer.previous() {
                    self.refresh_slice_image();
                }
                Task::none()
            }
            Message::NextSlice => {
                if self.viewer.next() {
                    self.refresh_slice_image();
                }
                Task::none()
            }
            Message::SliceChanged(slice) => {
                if self.viewer.set_slice(slice) {
                    self.refresh_slice_image();
                }
                Task::none()
            }
            Message::ZoomIn => {
                self.viewer.zoom_in();
                Task::none()
            }
            Message::ZoomOut => {
                self.viewer.zoom_out();
                Task::none()
            }
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let left = column![
            patient_form(&self.patient_form, self.workflow.patient().is_some()),
            import_panel(
                self.workflow.import(),
                self.importing,
                self.workflow.is_running()
            ),
            segmentation_panel(self.workflow.is_running(), self.workflow.can_run()),
        ]
        .spacing(20);

        let center = viewer_panel(&self.viewer, &self.slice_image, self.workflow.results());

        let right = results_panel(
            self.workflow.results(),
            self.workflow.patient(),
            self.workflow.is_running(),
        );

        let panels = row![
            container(left).width(Length::FillPortion(1)),
            container(center).width(Length::FillPortion(1)),
            container(right).width(Length::FillPortion(1)),
        ]
        .spacing(20)
        .align_y(Alignment::Start);

        let mut content = column![header(), scrollable(panels).height(Length::Fill)]
            .padding(20)
            .spacing(20);

        if !self.notifications.is_empty() {
            content = content.push(
                container(notification_stack(&self.notifications))
                    .width(Length::Fill)
                    .align_x(Alignment::End),
            );
        }

        if self.workflow.is_running() {
            loading_overlay(content)
        } else {
            content.into()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn refresh_slice_image(&mut self) {
        self.slice_image = SliceImagePipeline::render(
            self.viewer.current_slice(),
            self.viewer.total_slices(),
            self.workflow.results(),
        );
    }

    fn notify(
        &mut self,
        kind: NotificationKind,
        title: &str,
        description: impl Into<String>,
    ) -> Task<Message> {
        let id = self.notifications.push(kind, title, description);
        let expiry = self.config.notification_duration();
        Task::perform(
            async move { tokio::time::sleep(expiry).await },
            move |()| Message::DismissNotification(id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PatientField, Sex};
    use crate::workflow::RunState;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn fill_form(app: &mut App) {
        for (field, value) in [
            (PatientField::Name, "Jane Doe"),
            (PatientField::Identifier, "MRN-0042"),
            (PatientField::Age, "57"),
            (PatientField::Sex, "F"),
        ] {
            let _ = app.update(Message::PatientFieldChanged(field, value.to_string()));
        }
    }

    #[test]
    fn run_without_prerequisites_raises_two_notifications() {
        let mut app = app();
        let _ = app.update(Message::RunSegmentation);

        let titles: Vec<_> = app.notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Patient Information Required", "DICOM Import Required"]
        );
        assert_eq!(app.workflow.run_state(), RunState::Idle);
    }

    #[test]
    fn invalid_save_shows_inline_errors_only() {
        let mut app = app();
        let _ = app.update(Message::SavePatient);
        assert_eq!(app.patient_form.errors.len(), 4);
        assert!(app.workflow.patient().is_none());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn full_workflow_reaches_complete() {
        let mut app = app();
        fill_form(&mut app);
        let _ = app.update(Message::SavePatient);
        assert_eq!(app.workflow.patient().map(|p| p.sex), Some(Sex::Female));

        let _ = app.update(Message::ChooseFolder);
        assert!(app.importing);
        let _ = app.update(Message::FolderSelected(
            app.config.mock_import_path.clone(),
        ));
        assert!(!app.importing);
        assert!(app.workflow.can_run());

        let _ = app.update(Message::RunSegmentation);
        assert_eq!(app.workflow.run_state(), RunState::Running);

        let _ = app.update(Message::SegmentationFinished(
            crate::model::demo_structures(),
        ));
        assert_eq!(app.workflow.run_state(), RunState::Complete);
        assert_eq!(app.workflow.results().len(), 5);

        let last = app.notifications.iter().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.description, "Successfully segmented 5 structures.");
    }

    #[test]
    fn reimport_during_a_run_keeps_the_import() {
        let config = AppConfig::from_toml("mock_import_path = \"\"")
            .unwrap()
            .validated();
        let mut app = App::new(config);
        fill_form(&mut app);
        let _ = app.update(Message::SavePatient);
        let _ = app.update(Message::FolderSelected("/data".to_string()));
        let _ = app.update(Message::RunSegmentation);
        assert_eq!(app.workflow.run_state(), RunState::Running);

        let _ = app.update(Message::ChooseFolder);
        assert!(!app.importing);
        let _ = app.update(Message::FolderSelected(String::new()));

        assert_eq!(app.workflow.run_state(), RunState::Running);
        assert!(app.workflow.import().is_imported());
        assert_eq!(app.workflow.import().path(), "/data");
    }

    #[test]
    fn slice_navigation_is_clamped() {
        let mut app = app();
        let _ = app.update(Message::PreviousSlice);
        assert_eq!(app.viewer.current_slice(), 1);
        let _ = app.update(Message::SliceChanged(500));
        assert_eq!(app.viewer.current_slice(), app.config.total_slices);
    }

    #[test]
    fn dismissing_a_notification_removes_it() {
        let mut app = app();
        let _ = app.update(Message::RunSegmentation);
        let first = app.notifications.iter().next().unwrap().id;
        let _ = app.update(Message::DismissNotification(first));
        assert!(app.notifications.iter().all(|n| n.id != first));
    }
}
