use eframe::egui;

use crate::{
    fs_utils::display_name,
    image_utils::{ResizedImage, SourceImage},
    resources::Translations,
    ui::{create_button, create_label, PreviewPane},
};

use super::actions::ViewAction;

/// Open button, name of the loaded file and its preview.
pub struct ImageLoadPanel {
    lang: &'static Translations,
    file_label: String,
    preview: PreviewPane,
}

impl ImageLoadPanel {
    pub fn new(lang: &'static Translations) -> Self {
        Self {
            lang,
            file_label: String::new(),
            preview: PreviewPane::new("image-load-preview"),
        }
    }

    pub fn set_image(&mut self, source: Option<&SourceImage>) {
        self.file_label = source
            .map(|source| display_name(&source.path))
            .unwrap_or_default();
        self.preview.set_image(source.map(|source| &source.image));
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn preview(&self) -> &PreviewPane {
        &self.preview
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ViewAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            if create_button(ui, self.lang.open_btn_lbl).clicked() {
                action = Some(ViewAction::OpenImage);
            }
            create_label(ui, self.file_label.as_str());
        });
        ui.separator();
        self.preview.show(ui);
        action
    }
}

/// One button per interpolation method, the download button and the resized preview.
pub struct ImageCompressionPanel {
    lang: &'static Translations,
    download_label: String,
    preview: PreviewPane,
}

impl ImageCompressionPanel {
    pub fn new(lang: &'static Translations) -> Self {
        Self {
            lang,
            download_label: lang.download_caption(None),
            preview: PreviewPane::new("image-compression-preview"),
        }
    }

    pub fn set_image(&mut self, resized: Option<&ResizedImage>) {
        self.download_label = self.lang.download_caption(resized.map(|resized| resized.method));
        self.preview.set_image(resized.map(|resized| &resized.image));
    }

    pub fn download_label(&self) -> &str {
        &self.download_label
    }

    pub fn preview(&self) -> &PreviewPane {
        &self.preview
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ViewAction> {
        let mut action = None;
        create_label(ui, self.lang.interpolation_lbl);
        ui.horizontal_wrapped(|ui| {
            for (method, label) in self.lang.compressions {
                if create_button(ui, *label).clicked() {
                    action = Some(ViewAction::ResizeImage(*method));
                }
            }
        });
        if create_button(ui, self.download_label.as_str()).clicked() {
            action = Some(ViewAction::DownloadResizedImage);
        }
        ui.separator();
        self.preview.show(ui);
        action
    }
}
