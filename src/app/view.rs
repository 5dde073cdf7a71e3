use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui;

use crate::{
    dialogs::FileDialogs,
    fs_utils::{suggested_file_name, write_atomically},
    image_utils::{
        self, decode_image, encode_image, save_format_for, scaled_dimensions, InterpolationMethod,
        ResizedImage, Settings, SourceImage,
    },
    resources::Translations,
};

use super::{
    actions::ViewAction,
    panels::{ImageCompressionPanel, ImageLoadPanel},
};

/// Owns the opened image and its resized copy, and keeps both panels in sync with them.
///
/// A resized image, when present, always derives from the current source image.
pub struct MainView {
    pub lang: &'static Translations,
    pub settings: Settings,
    pub status: String,
    pub load_panel: ImageLoadPanel,
    pub compression_panel: ImageCompressionPanel,
    source: Option<SourceImage>,
    resized: Option<ResizedImage>,
}

impl MainView {
    pub fn new(lang: &'static Translations, settings: Settings) -> Self {
        Self {
            lang,
            settings,
            status: String::from("Ready"),
            load_panel: ImageLoadPanel::new(lang),
            compression_panel: ImageCompressionPanel::new(lang),
            source: None,
            resized: None,
        }
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn resized(&self) -> Option<&ResizedImage> {
        self.resized.as_ref()
    }

    /// Prompts for a file and opens it. Cancelling leaves everything as it was.
    pub fn open_image(&mut self, dialogs: &mut dyn FileDialogs) -> Result<()> {
        let Some(path) = dialogs.pick_image(self.lang) else {
            return Ok(());
        };
        self.open_image_at(&path)
    }

    pub fn open_image_at(&mut self, path: &Path) -> Result<()> {
        let image = decode_image(path)?;
        log::info!(
            "Opened {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.status = format!("Opened {} ({}x{})", path.display(), image.width(), image.height());

        self.source = Some(SourceImage {
            path: path.to_path_buf(),
            image,
        });
        self.resized = None;
        self.load_panel.set_image(self.source.as_ref());
        self.compression_panel.set_image(None);
        Ok(())
    }

    /// Shrinks the source image by the configured scale. No-op without a source image.
    pub fn resize_image(&mut self, method: InterpolationMethod) -> Result<()> {
        let Some(source) = &self.source else {
            return Ok(());
        };
        let (width, height) = scaled_dimensions(
            source.image.width(),
            source.image.height(),
            self.settings.scale,
        );
        let image = image_utils::resize_image(&source.image, method, width, height)
            .with_context(|| format!("Unable to resize {}", source.path.display()))?;

        let label = self.lang.method_label(method);
        log::info!(
            "Resized {} to {width}x{height} with {label}",
            source.path.display()
        );
        self.status = format!("Resized to {width}x{height} with {label}");

        self.resized = Some(ResizedImage { image, method });
        self.compression_panel.set_image(self.resized.as_ref());
        Ok(())
    }

    /// `{stem}-{method label}{suffix}` of the source file, once a resized image exists.
    pub fn suggested_file_name(&self) -> Option<String> {
        let (source, resized) = (self.source.as_ref()?, self.resized.as_ref()?);
        Some(suggested_file_name(
            &source.path,
            self.lang.method_label(resized.method),
        ))
    }

    /// Prompts for a destination and writes the resized image there.
    /// Returns the written path, or `None` when there was nothing to save or the prompt was cancelled.
    pub fn save_image(&mut self, dialogs: &mut dyn FileDialogs) -> Result<Option<PathBuf>> {
        let (Some(source), Some(resized), Some(suggested)) =
            (&self.source, &self.resized, self.suggested_file_name())
        else {
            return Ok(None);
        };
        let directory = source
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());
        let Some(path) = dialogs.pick_save_path(&suggested, directory) else {
            return Ok(None);
        };

        let format = save_format_for(&path);
        let quality = self.settings.quality;
        write_atomically(&path, |writer| {
            encode_image(&resized.image, format, quality, writer)
        })
        .with_context(|| format!("Unable to save {}", path.display()))?;

        log::info!(
            "Saved {} as {:?} (quality {quality})",
            path.display(),
            format
        );
        self.status = format!("Saved {}", path.display());
        Ok(Some(path))
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ViewAction> {
        let mut action = None;
        ui.columns(2, |columns| {
            let load = self.load_panel.show(&mut columns[0]);
            let compress = self.compression_panel.show(&mut columns[1]);
            action = load.or(compress);
        });
        action
    }
}
