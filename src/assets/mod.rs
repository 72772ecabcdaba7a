// assets/mod.rs - Clock Artwork Loading
//
// The five images the clock draws, where they come from, and the one-shot
// loader that decodes them at a size suited to the widget.

mod artwork;
mod sampling;

pub use sampling::{calculate_sample_size, decode_sampled, read_dimensions};

use std::fmt;
use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use log::{debug, info};

use crate::clock::{ClockLayout, Hand, PixelSize};
use crate::error::{ClockError, Result};

/// Names of the five clock images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Clock,
    MinuteHand,
    MinuteHandHighlighted,
    HourHand,
    HourHandHighlighted,
}

impl AssetId {
    /// All assets in load order
    pub const ALL: [AssetId; 5] = [
        AssetId::Clock,
        AssetId::MinuteHand,
        AssetId::MinuteHandHighlighted,
        AssetId::HourHand,
        AssetId::HourHandHighlighted,
    ];

    pub fn file_stem(&self) -> &'static str {
        match self {
            AssetId::Clock => "clock",
            AssetId::MinuteHand => "minute_hand",
            AssetId::MinuteHandHighlighted => "minute_hand_highlighted",
            AssetId::HourHand => "hour_hand",
            AssetId::HourHandHighlighted => "hour_hand_highlighted",
        }
    }

    /// File name looked up in an artwork directory
    pub fn file_name(&self) -> String {
        format!("{}.png", self.file_stem())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Where the artwork bytes come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetSource {
    /// Rasterized in memory
    #[default]
    Builtin,
    /// `<dir>/<asset>.png` files
    Directory(PathBuf),
}

impl AssetSource {
    /// Encoded image bytes for one asset
    pub fn read(&self, asset: AssetId) -> Result<Vec<u8>> {
        match self {
            AssetSource::Builtin => {
                artwork::render_png(asset).map_err(|e| ClockError::asset(asset, e))
            }
            AssetSource::Directory(dir) => {
                let path = dir.join(asset.file_name());
                fs::read(&path)
                    .map_err(|e| ClockError::asset(asset, format!("{}: {}", path.display(), e)))
            }
        }
    }
}

/// A decoded RGBA8 image
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Row-major RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Everything the loader needs, captured when the widget is first laid out
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub source: AssetSource,
    pub clock: PixelSize,
    pub minute_hand: PixelSize,
    pub hour_hand: PixelSize,
}

impl LoadRequest {
    pub fn new(source: AssetSource, layout: &ClockLayout) -> Self {
        Self {
            source,
            clock: layout.clock,
            minute_hand: layout.minute_hand,
            hour_hand: layout.hour_hand,
        }
    }
}

/// The five decoded clock images
#[derive(Debug, Clone)]
pub struct BitmapAssets {
    pub clock: Bitmap,
    pub minute_hand: Bitmap,
    pub minute_hand_highlighted: Bitmap,
    pub hour_hand: Bitmap,
    pub hour_hand_highlighted: Bitmap,
}

impl BitmapAssets {
    /// Image for a hand, highlighted while it is dragged
    pub fn hand(&self, hand: Hand, highlighted: bool) -> &Bitmap {
        match (hand, highlighted) {
            (Hand::Minute, false) => &self.minute_hand,
            (Hand::Minute, true) => &self.minute_hand_highlighted,
            (Hand::Hour, false) => &self.hour_hand,
            (Hand::Hour, true) => &self.hour_hand_highlighted,
        }
    }
}

fn load_one(source: &AssetSource, asset: AssetId, requested: PixelSize) -> Result<Bitmap> {
    let bytes = source.read(asset)?;
    let bitmap = decode_sampled(&bytes, requested).map_err(|e| ClockError::asset(asset, e))?;
    debug!("Loaded {} at {}x{}", asset, bitmap.width, bitmap.height);
    Ok(bitmap)
}

/// Decode all five images one after another.
///
/// Highlighted hands share the request of their plain counterpart so both
/// variants pick the same sample size and line up when swapped.
pub fn load_assets(request: &LoadRequest) -> Result<BitmapAssets> {
    info!("Loading clock artwork from {:?}", request.source);
    let source = &request.source;

    let clock = load_one(source, AssetId::Clock, request.clock)?;

    let minute_hand = load_one(source, AssetId::MinuteHand, request.minute_hand)?;
    let minute_hand_highlighted =
        load_one(source, AssetId::MinuteHandHighlighted, request.minute_hand)?;

    let hour_hand = load_one(source, AssetId::HourHand, request.hour_hand)?;
    let hour_hand_highlighted =
        load_one(source, AssetId::HourHandHighlighted, request.hour_hand)?;

    info!("Clock artwork ready: face {}x{}", clock.width, clock.height);

    Ok(BitmapAssets {
        clock,
        minute_hand,
        minute_hand_highlighted,
        hour_hand,
        hour_hand_highlighted,
    })
}

/// Run `load_assets` on the blocking pool and wait for it
pub async fn load_assets_async(request: LoadRequest) -> Result<BitmapAssets> {
    tokio::task::spawn_blocking(move || load_assets(&request))
        .await
        .map_err(|e| ClockError::LoaderStopped {
            reason: e.to_string(),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_file_names() {
        let names: Vec<String> = AssetId::ALL.iter().map(AssetId::file_name).collect();
        assert_eq!(
            names,
            [
                "clock.png",
                "minute_hand.png",
                "minute_hand_highlighted.png",
                "hour_hand.png",
                "hour_hand_highlighted.png",
            ]
        );
    }

    #[test]
    fn test_missing_directory_reports_asset() {
        let source = AssetSource::Directory(PathBuf::from("/nonexistent/analog-clock-artwork"));
        match source.read(AssetId::HourHand) {
            Err(ClockError::AssetLoadFailed { asset, reason }) => {
                assert_eq!(asset, AssetId::HourHand);
                assert!(reason.contains("hour_hand.png"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_builtin_matches_request() {
        let layout = ClockLayout::new(300, 300).unwrap();
        let request = LoadRequest::new(AssetSource::Builtin, &layout);
        let assets = load_assets(&request).unwrap();

        // 1200 face for a 300 target: halves stay above 300 up to factor 2
        assert_eq!(assets.clock.size(), PixelSize::new(600, 600));
        // Highlighted variants decode to the same size as the plain hands
        assert_eq!(assets.minute_hand.size(), assets.minute_hand_highlighted.size());
        assert_eq!(assets.hour_hand.size(), assets.hour_hand_highlighted.size());
        // Decoded images are never smaller than requested
        assert!(assets.minute_hand.size().width >= layout.minute_hand.width);
        assert!(assets.hour_hand.size().height >= layout.hour_hand.height);
    }

    #[test]
    fn test_hand_lookup() {
        let layout = ClockLayout::new(200, 200).unwrap();
        let assets = load_assets(&LoadRequest::new(AssetSource::Builtin, &layout)).unwrap();
        assert!(std::ptr::eq(assets.hand(Hand::Hour, true), &assets.hour_hand_highlighted));
        assert!(std::ptr::eq(assets.hand(Hand::Minute, false), &assets.minute_hand));
    }
}
