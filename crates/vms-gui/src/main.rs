//! Vault Migration Studio - Desktop GUI Application
//!
//! A desktop client for submitting clinical-data migration jobs to a
//! remote migration engine and rendering the mapping results it returns.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

mod app;
mod component;
mod message;
mod service;
mod settings;
mod state;
mod theme;
mod view;

use app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Vault Migration Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(900.0, 720.0),
            min_size: Some(Size::new(640.0, 480.0)),
            ..Default::default()
        })
        .run()
}
