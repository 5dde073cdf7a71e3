use std::path::{Path, PathBuf};

use crate::{fs_utils::JPEG_EXTENSIONS, resources::Translations};

/// Open/save prompts. `None` means the user cancelled.
pub trait FileDialogs {
    fn pick_image(&mut self, lang: &Translations) -> Option<PathBuf>;

    fn pick_save_path(&mut self, suggested_name: &str, directory: Option<&Path>) -> Option<PathBuf>;
}

/// Platform-native dialogs backed by rfd. They block the UI thread until dismissed.
pub struct NativeDialogs;

impl FileDialogs for NativeDialogs {
    fn pick_image(&mut self, lang: &Translations) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(lang.title)
            .add_filter(lang.images, JPEG_EXTENSIONS)
            .add_filter(lang.all_files, &["*"])
            .pick_file()
    }

    fn pick_save_path(&mut self, suggested_name: &str, directory: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_file_name(suggested_name);
        if let Some(directory) = directory {
            dialog = dialog.set_directory(directory);
        }
        dialog.save_file()
    }
}
