//! AnalogClock - Touch-draggable analog clock
//!
//! Drag either hand with a finger or the mouse; the label under the clock
//! shows the time the hands point at.
//!
//! Usage: analog_clock [--assets <dir>] [--linear-selection]

use analog_clock::constants::window;
use analog_clock::{HostScreen, Settings};
use log::info;

fn main() -> iced::Result {
    // Initialize logger with wgpu warnings filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();
    info!("AnalogClock starting...");

    let settings = Settings::load().apply_args(std::env::args().skip(1));

    let edge = settings.clock_size as f32;
    let padding = 2.0 * window::PADDING as f32;
    let window_size = iced::Size::new(
        edge + padding,
        edge + padding + window::LABEL_AREA_HEIGHT as f32,
    );

    iced::application(HostScreen::title, HostScreen::update, HostScreen::view)
        .subscription(HostScreen::subscription)
        .theme(HostScreen::theme)
        .window_size(window_size)
        .resizable(false)
        .run_with(move || HostScreen::new(settings))
}
