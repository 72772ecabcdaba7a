// tests/clock_interaction.rs - End-to-end widget behaviour
//
// Drives the widget the way the host does: lay out, load artwork, then feed
// gestures and read the time back.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use analog_clock::assets::{load_assets, load_assets_async};
use analog_clock::clock::PixelSize;
use analog_clock::{
    AssetId, AssetSource, ClockError, ClockState, ClockWidget, Hand, SelectionMetric, TouchPhase,
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

const EDGE: u32 = 240;

fn loaded_widget(metric: SelectionMetric) -> ClockWidget {
    let mut widget = ClockWidget::new(AssetSource::Builtin, metric);
    let request = widget.on_layout(EDGE, EDGE).unwrap().unwrap();
    widget.set_assets(load_assets(&request).unwrap());
    widget
}

/// Widget-local point at `angle` degrees on a circle around the center
fn point_at(angle: f32, radius: f32) -> (f32, f32) {
    let center = (EDGE / 2) as f32;
    let radians = angle.to_radians();
    (center + radius * radians.sin(), center - radius * radians.cos())
}

fn artwork_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("analog-clock-{}-{}", tag, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: PathBuf, width: u32, height: u32) {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_drag_from_three_oclock() {
    let mut widget = loaded_widget(SelectionMetric::Circular);
    assert_eq!((widget.current_hours(), widget.current_minutes()), (6, 0));

    // 3:00 is 90° from both the minute hand (0°) and the hour hand (180°)
    let (x, y) = point_at(90.0, 80.0);
    assert!(widget.on_touch(x, y, TouchPhase::Start));
    assert_eq!(widget.state(), ClockState::HourHandSelected);
    assert_eq!(widget.hands().angle(Hand::Hour), 90.0);
    assert_eq!(widget.hands().angle(Hand::Minute), 0.0);

    // Moves steer only the selected hand
    for angle in [100.0, 150.0, 241.5] {
        let (x, y) = point_at(angle, 60.0);
        assert!(widget.on_touch(x, y, TouchPhase::Move));
    }
    assert_eq!(widget.hands().angle(Hand::Hour), 241.0);
    assert_eq!(widget.hands().angle(Hand::Minute), 0.0);
    assert_eq!(widget.current_hours(), 8);

    // Lifting keeps both angles and clears the selection
    assert!(widget.on_touch(x, y, TouchPhase::End));
    assert_eq!(widget.state(), ClockState::Idle);
    assert_eq!(widget.hands().angle(Hand::Hour), 241.0);
    assert_eq!(widget.hands().angle(Hand::Minute), 0.0);

    // A move after lifting changes nothing
    let (x, y) = point_at(30.0, 60.0);
    widget.on_touch(x, y, TouchPhase::Move);
    assert_eq!(widget.hands().angle(Hand::Hour), 241.0);
}

#[test]
fn test_selection_near_twelve_depends_on_metric() {
    for (metric, expected) in [
        (SelectionMetric::Circular, ClockState::MinuteHandSelected),
        (SelectionMetric::Linear, ClockState::HourHandSelected),
    ] {
        let mut widget = loaded_widget(metric);

        // Drag the minute hand to just before 12
        let (x, y) = point_at(45.0, 80.0);
        widget.on_touch(x, y, TouchPhase::Start);
        assert_eq!(widget.state(), ClockState::MinuteHandSelected);
        let (x, y) = point_at(350.0, 80.0);
        widget.on_touch(x, y, TouchPhase::Move);
        widget.on_touch(x, y, TouchPhase::End);

        // Drag the hour hand to 4 o'clock
        let (x, y) = point_at(135.0, 80.0);
        widget.on_touch(x, y, TouchPhase::Start);
        assert_eq!(widget.state(), ClockState::HourHandSelected);
        let (x, y) = point_at(120.0, 80.0);
        widget.on_touch(x, y, TouchPhase::Move);
        widget.on_touch(x, y, TouchPhase::End);

        assert!((widget.hands().angle(Hand::Minute) - 350.0).abs() <= 1.0);
        assert!((widget.hands().angle(Hand::Hour) - 120.0).abs() <= 1.0);

        // Just past 12: 20° from the minute hand around the dial, 340° without wrapping
        let (x, y) = point_at(10.0, 80.0);
        widget.on_touch(x, y, TouchPhase::Start);
        assert_eq!(widget.state(), expected, "{:?}", metric);
    }
}

#[test]
fn test_directory_artwork_is_downsampled() {
    let dir = artwork_dir("dir");
    write_png(dir.join(AssetId::Clock.file_name()), 1000, 1000);
    for asset in [AssetId::MinuteHand, AssetId::MinuteHandHighlighted] {
        write_png(dir.join(asset.file_name()), 100, 400);
    }
    for asset in [AssetId::HourHand, AssetId::HourHandHighlighted] {
        write_png(dir.join(asset.file_name()), 150, 200);
    }

    let mut widget = ClockWidget::new(AssetSource::Directory(dir), SelectionMetric::Circular);
    let request = widget.on_layout(EDGE, EDGE).unwrap().unwrap();
    let assets = load_assets(&request).unwrap();

    // Face: halves are 500; 500 > 240, 250 > 240, 125 stops at factor 4
    assert_eq!(assets.clock.size(), PixelSize::new(250, 250));
    // Minute hand target 24x96: halves 50x200 still exceed it at factor 2
    assert_eq!(assets.minute_hand.size(), PixelSize::new(25, 100));
    assert_eq!(assets.minute_hand_highlighted.size(), PixelSize::new(25, 100));
    // Hour hand target 36x48: halves 75x100 still exceed it at factor 2
    assert_eq!(assets.hour_hand.size(), PixelSize::new(37, 50));
    assert_eq!(assets.hour_hand_highlighted.size(), PixelSize::new(37, 50));

    widget.set_assets(assets);
    assert!(widget.assets_loaded());
}

#[test]
fn test_missing_artwork_is_reported_not_fatal() {
    let dir = artwork_dir("partial");
    write_png(dir.join(AssetId::Clock.file_name()), 64, 64);
    write_png(dir.join(AssetId::MinuteHand.file_name()), 8, 32);

    let mut widget = ClockWidget::new(AssetSource::Directory(dir), SelectionMetric::Circular);
    let request = widget.on_layout(EDGE, EDGE).unwrap().unwrap();

    match load_assets(&request) {
        Err(ClockError::AssetLoadFailed { asset, .. }) => {
            assert_eq!(asset, AssetId::MinuteHandHighlighted)
        }
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
    assert!(!widget.assets_loaded());
    // The widget stays usable without artwork
    assert!(widget.on_touch(0.0, 0.0, TouchPhase::Start));
}

#[test]
fn test_corrupt_artwork_is_reported() {
    let dir = artwork_dir("corrupt");
    fs::write(dir.join(AssetId::Clock.file_name()), b"not a png").unwrap();

    let layout = analog_clock::clock::ClockLayout::new(EDGE, EDGE).unwrap();
    let request = analog_clock::LoadRequest::new(AssetSource::Directory(dir), &layout);
    let err = load_assets(&request).unwrap_err();
    assert!(matches!(err, ClockError::AssetLoadFailed { asset: AssetId::Clock, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_background_load_completes() {
    let mut widget = ClockWidget::new(AssetSource::Builtin, SelectionMetric::Circular);
    let request = widget.on_layout(160, 160).unwrap().unwrap();
    let assets = load_assets_async(request).await.unwrap();
    widget.set_assets(assets);
    assert!(widget.assets_loaded());
}
