pub mod app;
pub mod dialogs;
pub mod fs_utils;
pub mod image_utils;
pub mod resources;
pub mod ui;
