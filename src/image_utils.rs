use std::{
    fs,
    io::{Cursor, Seek, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{codecs::jpeg::JpegEncoder, ColorType, DynamicImage, ImageFormat};
use zune_jpeg::JpegDecoder;

pub const DEFAULT_QUALITY: u8 = 98;
pub const DEFAULT_SCALE: f64 = 0.4;

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Resampling filter applied when shrinking the source image.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum InterpolationMethod {
    Nearest,
    Box,
    Bilinear,
    Hamming,
    Bicubic,
    Lanczos,
}

impl InterpolationMethod {
    pub const ALL: [InterpolationMethod; 6] = [
        InterpolationMethod::Nearest,
        InterpolationMethod::Box,
        InterpolationMethod::Bilinear,
        InterpolationMethod::Hamming,
        InterpolationMethod::Bicubic,
        InterpolationMethod::Lanczos,
    ];

    pub fn resize_alg(&self) -> ResizeAlg {
        match self {
            InterpolationMethod::Nearest => ResizeAlg::Nearest,
            InterpolationMethod::Box => ResizeAlg::Convolution(FilterType::Box),
            InterpolationMethod::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            InterpolationMethod::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
            InterpolationMethod::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
            InterpolationMethod::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Settings {
    /// JPEG quality used when saving (1-100)
    pub quality: u8,
    /// Factor applied to both dimensions of the source image
    pub scale: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            scale: DEFAULT_SCALE,
        }
    }
}

pub struct SourceImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

pub struct ResizedImage {
    pub image: DynamicImage,
    pub method: InterpolationMethod,
}

pub fn to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    egui::ColorImage::from_rgba_unmultiplied(size, &pixels)
}

/// Reads and decodes an image file. JPEG data goes through zune-jpeg first and
/// falls back to the `image` decoders for everything else.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let bytes = fs::read(path).with_context(|| format!("Unable to read {}", path.display()))?;

    if bytes.starts_with(&JPEG_MAGIC) {
        if let Some(image) = decode_jpeg(&bytes) {
            return Ok(image);
        }
        log::debug!(
            "zune-jpeg could not decode {}, falling back to image",
            path.display()
        );
    }

    image::load_from_memory(&bytes).with_context(|| format!("Unable to decode {}", path.display()))
}

fn decode_jpeg(bytes: &[u8]) -> Option<DynamicImage> {
    let mut decoder = JpegDecoder::new(Cursor::new(bytes));
    let pixels = decoder.decode().ok()?;
    let info = decoder.info()?;
    // zune-jpeg emits RGB8 by default; anything else has the wrong length and is rejected here
    image::RgbImage::from_raw(info.width as u32, info.height as u32, pixels)
        .map(DynamicImage::ImageRgb8)
}

/// Target size for `scale`, truncating toward zero.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    (
        (width as f64 * scale).floor() as u32,
        (height as f64 * scale).floor() as u32,
    )
}

pub fn resize_image(
    image: &DynamicImage,
    method: InterpolationMethod,
    width: u32,
    height: u32,
) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(anyhow!(
            "Cannot resize {}x{} image to {width}x{height}",
            image.width(),
            image.height()
        ));
    }

    let (src_image, pixel_type) = match image {
        DynamicImage::ImageLuma8(luma) => (
            Image::from_vec_u8(luma.width(), luma.height(), luma.as_raw().clone(), PixelType::U8)?,
            PixelType::U8,
        ),
        DynamicImage::ImageRgb8(rgb) => (
            Image::from_vec_u8(rgb.width(), rgb.height(), rgb.as_raw().clone(), PixelType::U8x3)?,
            PixelType::U8x3,
        ),
        DynamicImage::ImageRgba8(rgba) => (
            Image::from_vec_u8(rgba.width(), rgba.height(), rgba.as_raw().clone(), PixelType::U8x4)?,
            PixelType::U8x4,
        ),
        other => {
            let rgba = other.to_rgba8();
            (
                Image::from_vec_u8(rgba.width(), rgba.height(), rgba.into_raw(), PixelType::U8x4)?,
                PixelType::U8x4,
            )
        }
    };

    let mut dst_image = Image::new(width, height, pixel_type);
    let options = ResizeOptions::new().resize_alg(method.resize_alg());
    Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .with_context(|| format!("Unable to resize to {width}x{height}"))?;

    let buffer = dst_image.into_vec();
    let resized = match pixel_type {
        PixelType::U8 => image::GrayImage::from_raw(width, height, buffer).map(DynamicImage::ImageLuma8),
        PixelType::U8x3 => image::RgbImage::from_raw(width, height, buffer).map(DynamicImage::ImageRgb8),
        _ => image::RgbaImage::from_raw(width, height, buffer).map(DynamicImage::ImageRgba8),
    };
    resized.ok_or_else(|| anyhow!("Resized buffer does not match {width}x{height}"))
}

/// Picks the encoder for a save path. Unknown or unwritable extensions are saved as JPEG.
pub fn save_format_for(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(
            format @ (ImageFormat::Jpeg
            | ImageFormat::Png
            | ImageFormat::Bmp
            | ImageFormat::Gif
            | ImageFormat::Tiff
            | ImageFormat::WebP),
        ) => format,
        _ => ImageFormat::Jpeg,
    }
}

pub fn encode_image<W: Write + Seek>(
    image: &DynamicImage,
    format: ImageFormat,
    quality: u8,
    mut writer: W,
) -> Result<()> {
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(writer, quality);
            match image.color() {
                ColorType::L8 | ColorType::Rgb8 => image.write_with_encoder(encoder)?,
                _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?,
            }
        }
        ImageFormat::Gif => match image.color() {
            ColorType::Rgba8 => image.write_to(&mut writer, ImageFormat::Gif)?,
            _ => DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut writer, ImageFormat::Gif)?,
        },
        other => image.write_to(&mut writer, other)?,
    }
    Ok(())
}
