#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use imageresizer::{dialogs::FileDialogs, resources::Translations};
use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    let pixel = Rgba(color);
    let buffer = RgbaImage::from_pixel(width, height, pixel);
    DynamicImage::ImageRgba8(buffer)
}

pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let buffer = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128])
    });
    DynamicImage::ImageRgb8(buffer)
}

/// Writes `image` in the format implied by the extension. JPEG output drops alpha first.
pub fn write_image(path: impl Into<PathBuf>, image: &DynamicImage) {
    let path = path.into();
    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);
    let result = if is_jpeg {
        DynamicImage::ImageRgb8(image.to_rgb8()).save(&path)
    } else {
        image.save(&path)
    };
    result.expect("failed to write image to disk");
}

/// Dialog stub that replays queued answers and records what it was asked.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    pub open_prompts: usize,
    pub save_prompts: Vec<(String, Option<PathBuf>)>,
}

impl ScriptedDialogs {
    pub fn opening(path: impl Into<PathBuf>) -> Self {
        let mut dialogs = Self::default();
        dialogs.open_answers.push_back(Some(path.into()));
        dialogs
    }

    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        let mut dialogs = Self::default();
        dialogs.save_answers.push_back(Some(path.into()));
        dialogs
    }
}

impl FileDialogs for ScriptedDialogs {
    fn pick_image(&mut self, _lang: &Translations) -> Option<PathBuf> {
        self.open_prompts += 1;
        self.open_answers.pop_front().flatten()
    }

    fn pick_save_path(&mut self, suggested_name: &str, directory: Option<&Path>) -> Option<PathBuf> {
        self.save_prompts
            .push((suggested_name.to_string(), directory.map(Path::to_path_buf)));
        self.save_answers.pop_front().flatten()
    }
}
