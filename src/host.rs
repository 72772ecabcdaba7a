// host.rs - Host Screen
//
// The single application screen: the clock widget above a text readout of
// the time it shows. The host owns both and refreshes the readout after
// every widget update.

use std::sync::Arc;

use iced::widget::{canvas, center, column, container, opaque, stack, text};
use iced::{keyboard, Alignment, Color, Element, Length, Subscription, Task, Theme};
use log::{error, info};

use crate::assets::{load_assets_async, BitmapAssets};
use crate::clock::format_readout;
use crate::config::Settings;
use crate::constants::window;
use crate::error::ClockError;
use crate::widget::{ClockEvent, ClockWidget};

// Color palette
mod colors {
    use iced::Color;

    pub const BG_PRIMARY: Color = Color::from_rgb(0.96, 0.95, 0.92);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const DANGER: Color = Color::from_rgb(0.8, 0.2, 0.25);
    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);
    pub const CARD: Color = Color::from_rgb(1.0, 1.0, 1.0);
}

#[derive(Debug, Clone)]
pub enum Message {
    Clock(ClockEvent),
    AssetsLoaded(Result<Arc<BitmapAssets>, ClockError>),
    Exit,
}

pub struct HostScreen {
    clock: ClockWidget,
    settings: Settings,
    readout: String,
    loading: bool,
    status: Option<String>,
}

impl HostScreen {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        info!(
            "Starting host screen: clock {}px, artwork {:?}, {:?} selection",
            settings.clock_size,
            settings.asset_source(),
            settings.selection_metric
        );

        let mut screen = Self {
            clock: ClockWidget::new(settings.asset_source(), settings.selection_metric),
            readout: String::new(),
            loading: false,
            status: None,
            settings,
        };

        let size = screen.settings.clock_size;
        let task = screen.layout_clock(size, size);
        (screen, task)
    }

    /// Lay the widget out and start the artwork load if this is the first layout
    fn layout_clock(&mut self, width: u32, height: u32) -> Task<Message> {
        match self.clock.on_layout(width, height) {
            Ok(Some(request)) => {
                self.loading = true;
                Task::perform(load_assets_async(request), |result| {
                    Message::AssetsLoaded(result.map(Arc::new))
                })
            }
            Ok(None) => Task::none(),
            Err(e) => {
                error!("Cannot lay out clock: {}", e);
                self.status = Some(e.to_string());
                Task::none()
            }
        }
    }

    pub fn title(&self) -> String {
        if self.readout.is_empty() {
            "Analog Clock".to_string()
        } else {
            format!("Analog Clock - {}", self.readout)
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Clock(ClockEvent::Touch { x, y, phase }) => {
                if self.clock.on_touch(x, y, phase) {
                    self.refresh_readout();
                }
            }

            Message::AssetsLoaded(Ok(assets)) => {
                self.clock.set_assets(Arc::unwrap_or_clone(assets));
                self.loading = false;
                self.refresh_readout();
            }

            Message::AssetsLoaded(Err(e)) => {
                error!("Clock artwork unavailable: {}", e);
                self.loading = false;
                self.status = Some(e.to_string());
            }

            Message::Exit => {
                info!("Exiting");
                return iced::exit();
            }
        }

        Task::none()
    }

    // Only a drawn clock has a reading worth showing
    fn refresh_readout(&mut self) {
        if self.clock.assets_loaded() {
            self.readout = format_readout(self.clock.current_hours(), self.clock.current_minutes());
        }
    }

    pub fn clock(&self) -> &ClockWidget {
        &self.clock
    }

    /// Text currently shown under the clock
    pub fn readout(&self) -> &str {
        &self.readout
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error shown in place of the clock, if any
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let edge = self.settings.clock_size as f32;
        let clock: Element<'_, ClockEvent> = canvas(&self.clock)
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .into();

        let label = text(&self.readout)
            .size(self.settings.label_size)
            .color(colors::TEXT_PRIMARY);

        let mut content = column![clock.map(Message::Clock), label]
            .spacing(12)
            .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            content = content.push(text(status).size(13).color(colors::DANGER));
        }

        let screen = center(content)
            .padding(window::PADDING)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(colors::BG_PRIMARY)),
                ..Default::default()
            });

        if !self.loading {
            return screen.into();
        }

        // Non-cancelable loading dialog; opaque swallows all input underneath
        let card = container(
            column![
                text("Loading").size(20).color(colors::TEXT_PRIMARY),
                text("loading the clock").size(14).color(colors::TEXT_SECONDARY),
            ]
            .spacing(8),
        )
        .padding(24)
        .style(|_| container::Style {
            background: Some(iced::Background::Color(colors::CARD)),
            border: iced::Border {
                radius: 8.0.into(),
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                width: 1.0,
            },
            ..Default::default()
        });

        let modal = opaque(center(card).style(|_| container::Style {
            background: Some(iced::Background::Color(colors::SCRIM)),
            ..Default::default()
        }));

        stack![screen, modal].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Exit),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}
