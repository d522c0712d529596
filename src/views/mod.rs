pub mod header;
pub mod import_panel;
pub mod loading_overlay;
pub mod notifications;
pub mod patient_form;
pub mod results_panel;
pub mod segmentation_panel;
pub mod viewer;

pub use header::header;
pub use import_panel::import_panel;
pub use loading_overlay::loading_overlay;
pub use notifications::notification_stack;
pub use patient_form::patient_form;
pub use results_panel::results_panel;
pub use segmentation_panel::segmentation_panel;
pub use viewer::viewer_panel;
