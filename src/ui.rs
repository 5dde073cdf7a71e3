use eframe::egui::{self, load::SizedTexture};
use image::DynamicImage;

use crate::image_utils::to_color_image;

pub fn create_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(text)
}

pub fn create_label(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.label(text)
}

pub struct KeyboardState {
    pub open: bool,
    pub download: bool,
    pub quit: bool,
}

impl KeyboardState {
    pub fn read(ctx: &egui::Context) -> Self {
        ctx.input(|input| {
            let command = input.modifiers.command;
            KeyboardState {
                open: command && input.key_pressed(egui::Key::O),
                download: command && input.key_pressed(egui::Key::S),
                quit: input.key_pressed(egui::Key::Escape)
                    || (command && input.key_pressed(egui::Key::Q)),
            }
        })
    }
}

/// Scrollable viewport that draws one bitmap at its native size.
///
/// Bitmaps are converted eagerly in [`PreviewPane::set_image`] and uploaded to the
/// GPU on the next [`PreviewPane::show`], which is the first point a context is at hand.
pub struct PreviewPane {
    id: &'static str,
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
    size: Option<[usize; 2]>,
}

impl PreviewPane {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            pending: None,
            texture: None,
            size: None,
        }
    }

    pub fn set_image(&mut self, image: Option<&DynamicImage>) {
        match image {
            Some(image) => {
                let color_image = to_color_image(image);
                self.size = Some(color_image.size);
                self.pending = Some(color_image);
            }
            None => {
                self.pending = None;
                self.texture = None;
                self.size = None;
            }
        }
    }

    pub fn has_image(&self) -> bool {
        self.size.is_some()
    }

    /// Pixel size of the displayed bitmap, `[width, height]`.
    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.size
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(color_image) = self.pending.take() {
            if let Some(texture) = self.texture.as_mut() {
                texture.set(color_image, egui::TextureOptions::LINEAR);
            } else {
                self.texture = Some(ui.ctx().load_texture(
                    self.id,
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }

        egui::ScrollArea::both()
            .id_salt(self.id)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(texture) = &self.texture {
                    ui.add(
                        egui::Image::from_texture(SizedTexture::from_handle(texture))
                            .fit_to_original_size(1.0),
                    );
                }
            });
    }
}
