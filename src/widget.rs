// widget.rs - Analog Clock Canvas Widget
//
// Owns the hand state and the decoded artwork, draws itself on an iced
// canvas and turns finger/mouse gestures into hand movements.
//
// The canvas program only reports gestures; the host feeds them back through
// `on_touch` so all mutation happens in the application's update step.

use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, event, Event, Frame, Geometry};
use iced::widget::image::Handle;
use iced::{Degrees, Point, Rectangle, Renderer, Size, Theme, Vector};
use log::{debug, info, warn};

use crate::assets::{AssetSource, Bitmap, BitmapAssets, LoadRequest};
use crate::clock::{
    point_to_angle, ClockHands, ClockLayout, ClockState, Hand, PixelSize, SelectionMetric,
    TouchPhase,
};
use crate::constants::geometry::HAND_ARTWORK_OFFSET_DEG;
use crate::error::Result;

/// Gesture reported by the canvas, in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockEvent {
    Touch { x: f32, y: f32, phase: TouchPhase },
}

/// A bitmap uploaded as an iced image handle
struct Sprite {
    size: PixelSize,
    handle: Handle,
}

impl Sprite {
    fn new(bitmap: Bitmap) -> Self {
        let size = bitmap.size();
        let handle = Handle::from_rgba(size.width, size.height, bitmap.into_pixels());
        Self { size, handle }
    }

    fn bounds_at(&self, x: f32, y: f32) -> Rectangle {
        Rectangle::new(
            Point::new(x, y),
            Size::new(self.size.width as f32, self.size.height as f32),
        )
    }
}

struct Sprites {
    clock: Sprite,
    minute_hand: Sprite,
    minute_hand_highlighted: Sprite,
    hour_hand: Sprite,
    hour_hand_highlighted: Sprite,
}

impl Sprites {
    fn new(assets: BitmapAssets) -> Self {
        Self {
            clock: Sprite::new(assets.clock),
            minute_hand: Sprite::new(assets.minute_hand),
            minute_hand_highlighted: Sprite::new(assets.minute_hand_highlighted),
            hour_hand: Sprite::new(assets.hour_hand),
            hour_hand_highlighted: Sprite::new(assets.hour_hand_highlighted),
        }
    }

    fn hand(&self, hand: Hand, highlighted: bool) -> &Sprite {
        match (hand, highlighted) {
            (Hand::Minute, false) => &self.minute_hand,
            (Hand::Minute, true) => &self.minute_hand_highlighted,
            (Hand::Hour, false) => &self.hour_hand,
            (Hand::Hour, true) => &self.hour_hand_highlighted,
        }
    }
}

/// Analog clock whose hands can be dragged independently
pub struct ClockWidget {
    hands: ClockHands,
    source: AssetSource,
    layout: Option<ClockLayout>,
    sprites: Option<Sprites>,
    face_cache: canvas::Cache,
}

impl ClockWidget {
    pub fn new(source: AssetSource, metric: SelectionMetric) -> Self {
        Self {
            hands: ClockHands::new(metric),
            source,
            layout: None,
            sprites: None,
            face_cache: canvas::Cache::new(),
        }
    }

    /// Size the widget and hand out the artwork load request.
    ///
    /// Only the first successful call returns a request; afterwards this is
    /// a no-op. A zero-sized area is rejected and leaves the widget unlaid.
    pub fn on_layout(&mut self, width: u32, height: u32) -> Result<Option<LoadRequest>> {
        if self.layout.is_some() {
            return Ok(None);
        }

        let layout = ClockLayout::new(width, height)?;
        info!(
            "Clock laid out at {}x{}, minute hand {}x{}, hour hand {}x{}",
            width,
            height,
            layout.minute_hand.width,
            layout.minute_hand.height,
            layout.hour_hand.width,
            layout.hour_hand.height
        );
        self.layout = Some(layout);
        Ok(Some(LoadRequest::new(self.source.clone(), &layout)))
    }

    /// Install the decoded artwork; the widget draws from now on
    pub fn set_assets(&mut self, assets: BitmapAssets) {
        if self.sprites.is_some() {
            warn!("Clock artwork delivered twice, keeping the first set");
            return;
        }
        self.sprites = Some(Sprites::new(assets));
        self.face_cache.clear();
    }

    pub fn assets_loaded(&self) -> bool {
        self.sprites.is_some()
    }

    pub fn layout(&self) -> Option<&ClockLayout> {
        self.layout.as_ref()
    }

    pub fn hands(&self) -> &ClockHands {
        &self.hands
    }

    pub fn state(&self) -> ClockState {
        self.hands.state()
    }

    /// Angle from the clock center to a widget-local point
    pub fn point_to_angle(&self, x: f32, y: f32) -> Option<f32> {
        self.layout
            .as_ref()
            .map(|layout| point_to_angle(layout.center(), x, y))
    }

    /// Apply one gesture event. Always handled; the caller should redraw.
    pub fn on_touch(&mut self, x: f32, y: f32, phase: TouchPhase) -> bool {
        match phase {
            TouchPhase::End | TouchPhase::Cancel => self.hands.touch(0.0, phase),
            TouchPhase::Start | TouchPhase::Move => match self.point_to_angle(x, y) {
                Some(angle) => self.hands.touch(angle, phase),
                None => debug!("Ignoring {:?} before layout", phase),
            },
        }
        true
    }

    pub fn current_minutes(&self) -> u32 {
        self.hands.current_minutes()
    }

    pub fn current_hours(&self) -> u32 {
        self.hands.current_hours()
    }
}

/// Gesture tracking kept by the canvas between events
#[derive(Debug, Default)]
pub struct GestureState {
    finger: Option<touch::Finger>,
    mouse_down: bool,
}

fn local(position: Point, bounds: Rectangle) -> (f32, f32) {
    let offset = position - bounds.position();
    (offset.x, offset.y)
}

fn touch_event(position: Point, bounds: Rectangle, phase: TouchPhase) -> ClockEvent {
    let (x, y) = local(position, bounds);
    ClockEvent::Touch { x, y, phase }
}

impl canvas::Program<ClockEvent> for ClockWidget {
    type State = GestureState;

    fn update(
        &self,
        state: &mut GestureState,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<ClockEvent>) {
        let gesture = match event {
            // Touch: follow the first finger that lands on the clock
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_none() && bounds.contains(position) {
                    state.finger = Some(id);
                    Some(touch_event(position, bounds, TouchPhase::Start))
                } else {
                    None
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) if state.finger == Some(id) => {
                Some(touch_event(position, bounds, TouchPhase::Move))
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) if state.finger == Some(id) => {
                state.finger = None;
                Some(touch_event(position, bounds, TouchPhase::End))
            }
            Event::Touch(touch::Event::FingerLost { id, position }) if state.finger == Some(id) => {
                state.finger = None;
                Some(touch_event(position, bounds, TouchPhase::Cancel))
            }

            // Mouse: left button drags like a finger
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds).map(|offset| {
                    state.mouse_down = true;
                    ClockEvent::Touch {
                        x: offset.x,
                        y: offset.y,
                        phase: TouchPhase::Start,
                    }
                })
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if state.mouse_down => {
                Some(touch_event(position, bounds, TouchPhase::Move))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.mouse_down => {
                state.mouse_down = false;
                let position = cursor.position().unwrap_or_else(|| bounds.center());
                Some(touch_event(position, bounds, TouchPhase::End))
            }
            Event::Mouse(mouse::Event::CursorLeft) if state.mouse_down => {
                state.mouse_down = false;
                Some(touch_event(bounds.center(), bounds, TouchPhase::Cancel))
            }
            _ => None,
        };

        match gesture {
            Some(gesture) => (event::Status::Captured, Some(gesture)),
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &GestureState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let (Some(sprites), Some(layout)) = (&self.sprites, &self.layout) else {
            return Vec::new();
        };

        let face = self.face_cache.draw(renderer, bounds.size(), |frame| {
            let (x, y) = layout.centered_origin(sprites.clock.size);
            frame.draw_image(sprites.clock.bounds_at(x, y), &sprites.clock.handle);
        });

        let mut frame = Frame::new(renderer, bounds.size());
        let (center_x, center_y) = layout.center();

        // Minute hand first so the shorter hour hand sits on top
        for hand in [Hand::Minute, Hand::Hour] {
            let sprite = sprites.hand(hand, self.hands.is_selected(hand));
            let rotation = Degrees(self.hands.angle(hand) - HAND_ARTWORK_OFFSET_DEG);

            frame.with_save(|frame| {
                frame.translate(Vector::new(center_x, center_y));
                frame.rotate(rotation);
                // Artwork hangs down from its top edge, centered on the pivot
                let half_width = (sprite.size.width / 2) as f32;
                frame.draw_image(sprite.bounds_at(-half_width, 0.0), &sprite.handle);
            });
        }

        vec![face, frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &GestureState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.mouse_down {
            mouse::Interaction::Grabbing
        } else if self.assets_loaded() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
