use crate::image_utils::InterpolationMethod;

/// User-facing strings for one UI language.
pub struct Translations {
    pub title: &'static str,
    pub open_btn_lbl: &'static str,
    pub interpolation_lbl: &'static str,
    pub images: &'static str,
    pub all_files: &'static str,
    pub download_lbl: &'static str,
    /// Display label for every interpolation method, in button order.
    pub compressions: &'static [(InterpolationMethod, &'static str)],
}

pub static ENGLISH: Translations = Translations {
    title: "Image compression",
    open_btn_lbl: "Open",
    interpolation_lbl: "Interpolation method",
    images: "Images",
    all_files: "All files",
    download_lbl: "Download",
    compressions: &[
        (InterpolationMethod::Nearest, "Nearest"),
        (InterpolationMethod::Box, "Box"),
        (InterpolationMethod::Bilinear, "Bilinear"),
        (InterpolationMethod::Hamming, "Hamming"),
        (InterpolationMethod::Bicubic, "Bicubic"),
        (InterpolationMethod::Lanczos, "Lanczos"),
    ],
};

impl Translations {
    pub fn method_label(&self, method: InterpolationMethod) -> &'static str {
        self.compressions
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, label)| *label)
            .unwrap_or("")
    }

    /// Caption of the download button, naming the method of the pending image.
    pub fn download_caption(&self, method: Option<InterpolationMethod>) -> String {
        match method {
            Some(method) => format!("{} - {}", self.download_lbl, self.method_label(method)),
            None => self.download_lbl.to_string(),
        }
    }
}
