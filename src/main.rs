mod app;
mod components;
mod config;
mod image_pipeline;
mod message;
mod model;
mod utils;
mod views;
mod workflow;

pub fn main() -> iced::Result {
    app::run()
}
