// assets/sampling.rs - Downsampled Image Decoding
//
// Reads the header first to learn the source size, then decodes and shrinks
// the image by a power-of-two factor so large artwork doesn't stay resident
// at full resolution.

use std::io::Cursor;

use image::{imageops, ImageReader, ImageResult};
use log::debug;

use super::Bitmap;
use crate::clock::PixelSize;

/// Largest power-of-two factor that keeps the halved source strictly larger
/// than the requested size in both dimensions. 1 when the source already fits.
pub fn calculate_sample_size(source: PixelSize, requested: PixelSize) -> u32 {
    let mut sample_size = 1;

    if source.height > requested.height || source.width > requested.width {
        let half_height = source.height / 2;
        let half_width = source.width / 2;

        while half_height / sample_size > requested.height
            && half_width / sample_size > requested.width
        {
            sample_size *= 2;
        }
    }

    sample_size
}

/// Decode only the image header
pub fn read_dimensions(bytes: &[u8]) -> ImageResult<PixelSize> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(PixelSize::new(width, height))
}

/// Decode `bytes` shrunk by the sample size computed for `requested`
pub fn decode_sampled(bytes: &[u8], requested: PixelSize) -> ImageResult<Bitmap> {
    let source = read_dimensions(bytes)?;
    let sample_size = calculate_sample_size(source, requested);

    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?
        .into_rgba8();

    let image = if sample_size > 1 {
        let width = (source.width / sample_size).max(1);
        let height = (source.height / sample_size).max(1);
        imageops::thumbnail(&image, width, height)
    } else {
        image
    };

    debug!(
        "Decoded {}x{} (requested {}x{}) with sample size {} -> {}x{}",
        source.width,
        source.height,
        requested.width,
        requested.height,
        sample_size,
        image.width(),
        image.height()
    );

    Ok(Bitmap::from_rgba(image))
}
