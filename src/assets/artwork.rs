// assets/artwork.rs - Builtin Clock Artwork
//
// Rasterizes a plain dial and hands when no artwork directory is configured.
// The images are PNG-encoded so they go through the same decode path as
// files on disk.

use std::f32::consts::TAU;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageResult, Rgba, RgbaImage};

use super::AssetId;
use crate::constants::{artwork, colors};

/// PNG bytes of the builtin image for `asset`
pub fn render_png(asset: AssetId) -> ImageResult<Vec<u8>> {
    let image = match asset {
        AssetId::Clock => render_face(artwork::FACE_SIZE),
        AssetId::MinuteHand => render_hand(artwork::MINUTE_HAND_SIZE, colors::HAND),
        AssetId::MinuteHandHighlighted => {
            render_hand(artwork::MINUTE_HAND_SIZE, colors::HAND_HIGHLIGHTED)
        }
        AssetId::HourHand => render_hand(artwork::HOUR_HAND_SIZE, colors::HAND),
        AssetId::HourHandHighlighted => {
            render_hand(artwork::HOUR_HAND_SIZE, colors::HAND_HIGHLIGHTED)
        }
    };

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Soft edge coverage: 1 inside, fading to 0 over one pixel past `edge`
fn coverage(distance_inside: f32) -> f32 {
    (distance_inside + 0.5).clamp(0.0, 1.0)
}

fn blend(pixel: &mut Rgba<u8>, color: [u8; 4], opacity: f32) {
    let alpha = opacity * (color[3] as f32 / 255.0);
    if alpha <= 0.0 {
        return;
    }

    let dst_alpha = pixel[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    for channel in 0..3 {
        let src = color[channel] as f32;
        let dst = pixel[channel] as f32;
        let mixed = (src * alpha + dst * dst_alpha * (1.0 - alpha)) / out_alpha.max(f32::EPSILON);
        pixel[channel] = mixed.round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Round dial with a rim, 60 minute ticks and longer ticks every 5 minutes
fn render_face(size: u32) -> RgbaImage {
    let mut image = RgbaImage::new(size, size);
    let center = size as f32 / 2.0;
    let radius = center - 1.0;
    let rim = radius * 0.04;

    let tick_outer = radius - rim * 1.5;
    let minute_tick_inner = tick_outer - radius * 0.05;
    let hour_tick_inner = tick_outer - radius * 0.12;
    let minute_tick_half_width = radius * 0.006;
    let hour_tick_half_width = radius * 0.015;
    let tick_step = TAU / 60.0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let r = (dx * dx + dy * dy).sqrt();
        if r > radius + 1.0 {
            continue;
        }

        blend(pixel, colors::RIM, coverage(radius - r));
        blend(pixel, colors::DIAL, coverage(radius - rim - r));

        if r < hour_tick_inner || r > tick_outer {
            continue;
        }

        // Distance along the arc to the nearest tick
        let theta = dy.atan2(dx).rem_euclid(TAU);
        let index = (theta / tick_step).round();
        let arc = (theta - index * tick_step).abs() * r;
        let is_hour_tick = (index as i32).rem_euclid(5) == 0;

        let (inner, half_width) = if is_hour_tick {
            (hour_tick_inner, hour_tick_half_width)
        } else {
            (minute_tick_inner, minute_tick_half_width)
        };
        if r >= inner {
            blend(pixel, colors::TICK, coverage(half_width - arc));
        }
    }

    image
}

/// Tapered hand hanging down from a round pivot at the top edge
fn render_hand((width, height): (u32, u32), color: [u8; 4]) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    let mid = width as f32 / 2.0;
    let pivot_radius = mid;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Pivot disc
        let dx = px - mid;
        let dy = py - pivot_radius;
        let pivot = pivot_radius - (dx * dx + dy * dy).sqrt();

        // Blade narrows to a third of the full width at the tip
        let t = py / height as f32;
        let half_width = mid * 0.6 * (1.0 - t * 0.66);
        let blade = half_width - dx.abs();

        blend(pixel, color, coverage(pivot.max(blade)));
    }

    image
}
